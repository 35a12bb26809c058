//! Terminal presentation helpers for the explorer.
//!
//! This module turns a [`TableView`] into printable pieces: the record table,
//! the status line, and the pagination strip. Everything returns plain
//! strings so the binary decides where and how to print them.

use std::time::Duration;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use is_terminal::IsTerminal;

use crate::explorer::TableView;
use crate::models::{FetchStatus, PublicationField, SortConfig, SortDirection};

/// Shown in place of the table when the current page has no records.
pub const NO_RESULTS: &str = "No results found.";

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Column widths get unwieldy fast with paper titles and URLs; long values
/// are cut at a character boundary with a trailing ellipsis.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width <= 3 {
        return "...".to_string();
    }

    if text.chars().count() <= max_width {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_width - 3).collect();
    format!("{truncated}...")
}

/// Arrow suffix for a column header: `" ▲"` ascending, `" ▼"` descending,
/// empty when the column is not the sort key.
pub fn sort_indicator(sort: Option<SortConfig>, field: PublicationField) -> &'static str {
    match sort {
        Some(config) if config.field == field => match config.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    }
}

/// Build the record table for the current page.
///
/// Headers carry the sort arrow for the active sort column. The caller is
/// expected to print [`NO_RESULTS`] instead when the page is empty.
pub fn publication_table(view: &TableView) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header: Vec<Cell> = PublicationField::ALL
        .iter()
        .map(|field| {
            Cell::new(format!(
                "{}{}",
                field.label(),
                sort_indicator(view.sort_config, *field)
            ))
            .add_attribute(Attribute::Bold)
        })
        .collect();
    table.set_header(header);

    for record in &view.page_records {
        table.add_row(vec![
            Cell::new(&record.published_date),
            Cell::new(truncate_with_ellipsis(&record.title, 60)).add_attribute(Attribute::Bold),
            Cell::new(truncate_with_ellipsis(&record.authors, 40)),
            Cell::new(truncate_with_ellipsis(&record.journal, 30)),
            Cell::new(truncate_with_ellipsis(&record.organization, 30)),
            Cell::new(truncate_with_ellipsis(&record.pdf_url, 40)),
        ]);
    }

    table
}

/// One-line summary under the table, only once a load has succeeded.
pub fn status_line(view: &TableView) -> Option<String> {
    if view.status != FetchStatus::Success {
        return None;
    }

    let line = if view.search_term.is_empty() {
        format!(
            "Total records: {}. Showing page {} of {}.",
            view.total_records, view.current_page, view.total_pages
        )
    } else {
        format!(
            "Found {} results for \"{}\". Showing page {} of {}.",
            view.filtered_records, view.search_term, view.current_page, view.total_pages
        )
    };

    Some(line)
}

/// One element of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// The page numbers worth showing for `current` within `total` pages.
///
/// Up to seven pages are listed directly. Beyond that the strip keeps the
/// first page, the last page, and a window around the current one, with
/// ellipses standing in for the elided runs.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    const MAX_DIRECT: usize = 7;

    let mut items = Vec::new();
    if total <= MAX_DIRECT {
        for page in 1..=total {
            items.push(PageItem::Page(page));
        }
        return items;
    }

    items.push(PageItem::Page(1));
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    if current > 2 {
        items.push(PageItem::Page(current - 1));
    }
    if current != 1 && current != total {
        items.push(PageItem::Page(current));
    }
    if current < total - 1 {
        items.push(PageItem::Page(current + 1));
    }
    if current < total - 2 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));

    items
}

/// The pagination strip, or `None` when a single page (or none) needs no
/// navigation. The current page is bracketed.
pub fn pagination_strip(view: &TableView) -> Option<String> {
    if view.total_pages <= 1 {
        return None;
    }

    let parts: Vec<String> = page_items(view.current_page, view.total_pages)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(page) if page == view.current_page => format!("[{page}]"),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect();

    Some(format!("Pages: {}", parts.join(" ")))
}

/// Print a loading spinner with message.
pub struct Spinner {
    pb: indicatif::ProgressBar,
}

impl Spinner {
    /// Create a new spinner with the given message.
    pub fn new(msg: &str) -> Self {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Set the message.
    pub fn set_message(&self, msg: &str) {
        self.pb.set_message(msg.to_string());
    }

    /// Finish with success message.
    pub fn finish_with_success(&self, msg: &str) {
        self.pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap()
                .tick_chars("✓ ✗ "),
        );
        self.pb.finish_with_message(msg.to_string());
    }

    /// Finish with error message.
    pub fn finish_with_error(&self, msg: &str) {
        self.pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.red} {msg}")
                .unwrap()
                .tick_chars("✓ ✗ "),
        );
        self.pb.finish_with_message(msg.to_string());
    }

    /// Clear the spinner without a closing message.
    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}
