//! Minimal CSV parsing for the publication feed.
//!
//! The feed is a plain comma-separated export: first row is the header,
//! every later row is one publication. Only the six recognized header names
//! are mapped (see [`PublicationField::from_header`]); unknown columns are
//! dropped.
//!
//! Known limitation, inherited from the feed format: this is a plain comma
//! splitter. Quoted fields containing commas or embedded newlines are not
//! supported and will be split apart, which usually makes the row's column
//! count mismatch and drops it.

use crate::models::{Publication, PublicationField};

/// Parse raw CSV text into publications.
///
/// Rows whose column count does not match the header are dropped silently;
/// a row is kept only if at least one of its columns mapped to a recognized
/// field. An input with no data rows (empty, or header only) yields an empty
/// vector rather than an error.
///
/// # Examples
///
/// ```
/// use pubgrid::csv::parse_publications;
///
/// let feed = "Title,Authors\nDeep Learning,LeCun; Bengio; Hinton";
/// let publications = parse_publications(feed);
/// assert_eq!(publications.len(), 1);
/// assert_eq!(publications[0].title, "Deep Learning");
/// assert_eq!(publications[0].authors, "LeCun; Bengio; Hinton");
/// ```
pub fn parse_publications(raw: &str) -> Vec<Publication> {
    let lines: Vec<&str> = raw.trim().split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    // One slot per column: the mapped field, or None for columns we drop.
    let columns: Vec<Option<PublicationField>> = lines[0]
        .split(',')
        .map(|h| PublicationField::from_header(h.trim()))
        .collect();

    let mut publications = Vec::new();

    for (index, line) in lines[1..].iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(',').collect();
        if values.len() != columns.len() {
            tracing::debug!(
                row = index + 2,
                expected = columns.len(),
                got = values.len(),
                "dropping row with mismatched column count"
            );
            continue;
        }

        let mut publication = Publication::default();
        let mut populated = false;

        for (column, value) in columns.iter().zip(&values) {
            if let Some(field) = column {
                publication.set_field(*field, value.trim());
                populated = true;
            }
        }

        if populated {
            publications.push(publication);
        }
    }

    publications
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse_publications("").is_empty());
        assert!(parse_publications("   \n  ").is_empty());
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_publications("PublishedDate,Title,Authors").is_empty());
    }

    #[test]
    fn test_recognized_headers_populate_fields() {
        let raw = "PublishedDate,Junk\n1,2\n3,4";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 2);
        assert_eq!(publications[0].published_date, "1");
        assert_eq!(publications[1].published_date, "3");
        // The unrecognized column is dropped, everything else stays empty.
        assert_eq!(publications[0].title, "");
        assert_eq!(publications[0].pdf_url, "");
    }

    #[test]
    fn test_full_row_round_trip() {
        let raw = "PublishedDate,Title,Authors,Journal,Organization,PdfURL\n\
                   2020-03-14,A Study,Doe; Roe,Nature,MIT,https://example.com/a.pdf";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 1);
        let p = &publications[0];
        assert_eq!(p.published_date, "2020-03-14");
        assert_eq!(p.title, "A Study");
        assert_eq!(p.authors, "Doe; Roe");
        assert_eq!(p.journal, "Nature");
        assert_eq!(p.organization, "MIT");
        assert_eq!(p.pdf_url, "https://example.com/a.pdf");
    }

    #[test]
    fn test_mismatched_row_is_dropped_others_survive() {
        let raw = "Title,Authors\nGood Row,Someone\nBad,Row,Extra\nAnother,Person";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 2);
        assert_eq!(publications[0].title, "Good Row");
        assert_eq!(publications[1].title, "Another");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let raw = "Title,Authors\nFirst,A\n\n   \nSecond,B";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 2);
        assert_eq!(publications[1].title, "Second");
    }

    #[test]
    fn test_values_and_headers_are_trimmed() {
        let raw = "  Title , Authors \n  Spaced Out  ,  J. Doe  ";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].title, "Spaced Out");
        assert_eq!(publications[0].authors, "J. Doe");
    }

    #[test]
    fn test_no_recognized_headers_yields_nothing() {
        // Column counts match, but no header maps, so no row is "populated".
        let raw = "Foo,Bar\n1,2\n3,4";
        assert!(parse_publications(raw).is_empty());
    }

    #[test]
    fn test_header_case_mismatch_is_not_mapped() {
        let raw = "title,AUTHORS\nsomething,someone";
        assert!(parse_publications(raw).is_empty());
    }

    #[test]
    fn test_recognized_header_with_empty_value_still_counts() {
        // The row populated a recognized column, even though the value is
        // empty, so the record is kept with its fixed empty shape.
        let raw = "Title,Junk\n,ignored";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].title, "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "Title,Authors\r\nWindows Row,Editor\r\n";
        let publications = parse_publications(raw);

        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].title, "Windows Row");
        assert_eq!(publications[0].authors, "Editor");
    }

    #[test]
    fn test_quoted_fields_are_not_interpreted() {
        // Inherited limitation: the embedded comma splits the field and the
        // row is dropped for its column-count mismatch.
        let raw = "Title,Authors\n\"Attention, Please\",Someone";
        assert!(parse_publications(raw).is_empty());
    }
}
