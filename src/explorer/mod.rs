//! The view-state engine: owns the dataset and derives the visible table.
//!
//! [`Explorer`] is the single owner of everything that determines what a
//! reader sees: the fetched publications, the fetch status, the search term,
//! the sort configuration and the current page. Presentation code never
//! touches those directly; it mutates through the engine's methods and reads
//! back a [`TableView`] snapshot, which the engine recomputes lazily through
//! the filter → sort → paginate pipeline only when something changed.
//!
//! Loads are generation-counted. [`Explorer::begin_load`] hands out a ticket,
//! [`Explorer::finish_load`] applies a result only if its ticket is still the
//! latest, so a slow response from an earlier load can never overwrite a
//! newer one. [`Explorer::load`] bundles the two around a source fetch for
//! callers that do not interleave loads.

mod pipeline;

use std::sync::Arc;

use serde::Serialize;

use crate::models::{FetchStatus, Publication, PublicationField, SortConfig, SortDirection};
use crate::sources::{FetchError, PublicationSource};

/// Snapshot of everything a presentation shell needs to render one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Lifecycle stage of the most recent load attempt.
    pub status: FetchStatus,
    /// The records visible on the current page, in display order.
    pub page_records: Vec<Publication>,
    /// Size of the full dataset, before filtering.
    pub total_records: usize,
    /// Records surviving the search filter.
    pub filtered_records: usize,
    /// Page count over the filtered records. Zero when nothing matched.
    pub total_pages: usize,
    /// The 1-based page this snapshot shows, after clamping.
    pub current_page: usize,
    /// The active search term, empty when no filter applies.
    pub search_term: String,
    /// The active sort, `None` until a column is first sorted.
    pub sort_config: Option<SortConfig>,
}

/// View-state engine over a single publication feed.
#[derive(Debug)]
pub struct Explorer {
    source: Arc<dyn PublicationSource>,
    page_size: usize,
    status: FetchStatus,
    publications: Vec<Publication>,
    search_term: String,
    sort_config: Option<SortConfig>,
    current_page: usize,
    generation: u64,
    view: TableView,
    dirty: bool,
}

impl Explorer {
    /// Create an engine over `source` showing `page_size` records per page.
    ///
    /// A page size of zero is coerced to one. Nothing is fetched here; call
    /// [`load`](Explorer::load) or the begin/finish pair to populate the
    /// dataset.
    pub fn new(source: Arc<dyn PublicationSource>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            source,
            page_size,
            status: FetchStatus::Idle,
            publications: Vec::new(),
            search_term: String::new(),
            sort_config: None,
            current_page: 1,
            generation: 0,
            view: TableView {
                status: FetchStatus::Idle,
                page_records: Vec::new(),
                total_records: 0,
                filtered_records: 0,
                total_pages: 0,
                current_page: 1,
                search_term: String::new(),
                sort_config: None,
            },
            dirty: true,
        }
    }

    /// The source this engine fetches from.
    pub fn source(&self) -> &Arc<dyn PublicationSource> {
        &self.source
    }

    /// Records shown per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Lifecycle stage of the most recent load attempt.
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Start a new load generation.
    ///
    /// The status flips to `Loading` immediately and the returned ticket must
    /// be passed to [`finish_load`](Explorer::finish_load) together with the
    /// fetch result. Any ticket from an earlier call is stale from this point
    /// on.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.dirty = true;
        tracing::debug!(generation = self.generation, "load started");
        self.generation
    }

    /// Apply the outcome of the load started as `generation`.
    ///
    /// Stale generations are discarded entirely; the latest load wins no
    /// matter which response arrives first. On success the dataset is
    /// replaced wholesale. On failure the previous dataset stays untouched
    /// and only the status reports the problem; error detail does not cross
    /// this boundary.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Publication>, FetchError>,
    ) -> FetchStatus {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "discarding stale load response"
            );
            return self.status;
        }

        match result {
            Ok(publications) => {
                tracing::debug!(records = publications.len(), "load succeeded");
                self.publications = publications;
                self.status = FetchStatus::Success;
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed");
                self.status = FetchStatus::Error;
            }
        }

        self.dirty = true;
        self.status
    }

    /// Fetch from the source and apply the result.
    ///
    /// Calling this again later is an explicit reload: one more fetch, and on
    /// success the dataset is replaced wholesale. There are no automatic
    /// retries.
    pub async fn load(&mut self) -> FetchStatus {
        let generation = self.begin_load();
        let result = self.source.fetch().await;
        self.finish_load(generation, result)
    }

    /// Update the search term. The current page resets to 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.dirty = true;
    }

    /// Request a sort on `field` and reset the current page to 1.
    ///
    /// A field not currently sorted starts ascending. Requesting the field
    /// that is already ascending flips it to descending; requesting it while
    /// descending goes back to ascending. Once any sort is active there is no
    /// transition back to the unsorted order.
    pub fn request_sort(&mut self, field: PublicationField) {
        let direction = match &self.sort_config {
            Some(config)
                if config.field == field && config.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort_config = Some(SortConfig { field, direction });
        self.current_page = 1;
        self.dirty = true;
    }

    /// Request a page by 1-based number.
    ///
    /// Out-of-range values are accepted as-is; the read path clamps them
    /// against the page count it derives and stores the clamped value back.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.dirty = true;
    }

    /// The current table snapshot, recomputed only when state has changed
    /// since the last read.
    pub fn view(&mut self) -> &TableView {
        if self.dirty {
            self.view = self.derive_view();
            self.dirty = false;
        }
        &self.view
    }

    fn derive_view(&mut self) -> TableView {
        let mut rows = pipeline::filter(&self.publications, &self.search_term);
        pipeline::sort(&mut rows, self.sort_config.as_ref());

        let filtered_records = rows.len();
        let total_pages = pipeline::page_count(filtered_records, self.page_size);
        let page = pipeline::clamp_page(self.current_page, total_pages);
        let page_records: Vec<Publication> = pipeline::paginate(&rows, page, self.page_size)
            .into_iter()
            .cloned()
            .collect();

        // Store the clamp back so later mutations observe the page that was
        // actually shown.
        self.current_page = page;

        TableView {
            status: self.status,
            page_records,
            total_records: self.publications.len(),
            filtered_records,
            total_pages,
            current_page: page,
            search_term: self.search_term.clone(),
            sort_config: self.sort_config,
        }
    }
}
