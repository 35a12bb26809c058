//! The filter → sort → paginate derivation pipeline.
//!
//! Pure functions over borrowed records. The explorer runs them in order
//! whenever its memoized view is stale; nothing here touches engine state.

use crate::models::{Publication, SortConfig, SortDirection};

/// Keep every publication when `term` is empty; otherwise keep those where
/// any of the six field values contains `term` case-insensitively.
pub(crate) fn filter<'a>(publications: &'a [Publication], term: &str) -> Vec<&'a Publication> {
    if term.is_empty() {
        return publications.iter().collect();
    }

    let needle = term.to_lowercase();
    publications
        .iter()
        .filter(|p| p.values().any(|value| value.to_lowercase().contains(&needle)))
        .collect()
}

/// Sort rows in place; `None` preserves the filtered order.
///
/// The sort is stable, so rows with equal key values keep their relative
/// (filtered) order, and descending simply reverses the comparison outcome.
pub(crate) fn sort(rows: &mut [&Publication], config: Option<&SortConfig>) {
    let Some(config) = config else { return };

    rows.sort_by(|a, b| {
        let ordering = a.field(config.field).cmp(b.field(config.field));
        match config.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `count` records at `page_size` per page.
/// Zero records means zero pages.
pub(crate) fn page_count(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Clamp a requested 1-based page to `[1, total_pages]`. With no pages at all
/// the request is returned untouched; the value is inert until data exists.
pub(crate) fn clamp_page(requested: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        requested
    } else {
        requested.clamp(1, total_pages)
    }
}

/// Select the rows visible on a 1-based page.
///
/// The page is not clamped when no pages exist, so the offset arithmetic
/// saturates rather than overflowing on a huge request.
pub(crate) fn paginate<'a>(
    rows: &[&'a Publication],
    page: usize,
    page_size: usize,
) -> Vec<&'a Publication> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    rows.iter().skip(start).take(page_size).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicationField;
    use crate::sources::mock::make_publication;

    fn sample() -> Vec<Publication> {
        vec![
            Publication {
                title: "Deep Learning".to_string(),
                authors: "LeCun".to_string(),
                journal: "Nature".to_string(),
                ..Default::default()
            },
            Publication {
                title: "Attention Is All You Need".to_string(),
                authors: "Vaswani".to_string(),
                journal: "NeurIPS".to_string(),
                ..Default::default()
            },
            Publication {
                title: "ImageNet Classification".to_string(),
                authors: "Krizhevsky".to_string(),
                journal: "NeurIPS".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let data = sample();
        assert_eq!(filter(&data, "").len(), data.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let data = sample();
        let hits = filter(&data, "DEEP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Deep Learning");
    }

    #[test]
    fn test_filter_matches_any_field() {
        let data = sample();
        // "neurips" only appears in the journal column.
        assert_eq!(filter(&data, "neurips").len(), 2);
        // "lecun" only appears in the authors column.
        assert_eq!(filter(&data, "lecun").len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = sample();
        let once: Vec<Publication> = filter(&data, "neurips").into_iter().cloned().collect();
        let twice = filter(&once, "neurips");
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_no_sort_preserves_order() {
        let data = sample();
        let mut rows: Vec<&Publication> = data.iter().collect();
        sort(&mut rows, None);
        assert_eq!(rows[0].title, "Deep Learning");
        assert_eq!(rows[2].title, "ImageNet Classification");
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let data = sample();
        let config = SortConfig::ascending(PublicationField::Title);
        let mut rows: Vec<&Publication> = data.iter().collect();
        sort(&mut rows, Some(&config));
        assert_eq!(rows[0].title, "Attention Is All You Need");
        assert_eq!(rows[2].title, "ImageNet Classification");

        let config = SortConfig::descending(PublicationField::Title);
        let mut rows: Vec<&Publication> = data.iter().collect();
        sort(&mut rows, Some(&config));
        assert_eq!(rows[0].title, "ImageNet Classification");
        assert_eq!(rows[2].title, "Attention Is All You Need");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let data = sample();
        let config = SortConfig::ascending(PublicationField::Journal);
        let mut rows: Vec<&Publication> = data.iter().collect();
        sort(&mut rows, Some(&config));

        // "Nature" < "NeurIPS"; the two NeurIPS rows keep insertion order.
        assert_eq!(rows[0].journal, "Nature");
        assert_eq!(rows[1].title, "Attention Is All You Need");
        assert_eq!(rows[2].title, "ImageNet Classification");
    }

    #[test]
    fn test_descending_keeps_tie_order() {
        let data = sample();
        let config = SortConfig::descending(PublicationField::Journal);
        let mut rows: Vec<&Publication> = data.iter().collect();
        sort(&mut rows, Some(&config));

        assert_eq!(rows[0].title, "Attention Is All You Need");
        assert_eq!(rows[1].title, "ImageNet Classification");
        assert_eq!(rows[2].journal, "Nature");
    }

    #[test]
    fn test_page_count_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        // No pages: the request is inert, not coerced.
        assert_eq!(clamp_page(7, 0), 7);
        assert_eq!(clamp_page(0, 0), 0);
    }

    #[test]
    fn test_paginate_slices() {
        let data: Vec<Publication> = (1..=12)
            .map(|i| make_publication(&format!("Paper {i:02}")))
            .collect();
        let rows: Vec<&Publication> = data.iter().collect();

        let first = paginate(&rows, 1, 10);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].title, "Paper 01");
        assert_eq!(first[9].title, "Paper 10");

        let second = paginate(&rows, 2, 10);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].title, "Paper 11");

        assert!(paginate(&rows, 3, 10).is_empty());
    }

    #[test]
    fn test_paginate_empty_rows_any_page() {
        let rows: Vec<&Publication> = Vec::new();
        assert!(paginate(&rows, 0, 10).is_empty());
        assert!(paginate(&rows, 5, 10).is_empty());
    }

    #[test]
    fn test_paginate_huge_page_yields_empty() {
        // Unclamped inert pages can be arbitrarily large; the slice math
        // must saturate, not panic.
        let rows: Vec<&Publication> = Vec::new();
        assert!(paginate(&rows, usize::MAX, 10).is_empty());

        let data = sample();
        let rows: Vec<&Publication> = data.iter().collect();
        assert!(paginate(&rows, usize::MAX, 10).is_empty());
    }
}
