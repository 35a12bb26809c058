//! # pubgrid
//!
//! A terminal explorer for live CSV publication feeds: fetch a feed over
//! HTTP, then search, sort, and page through it.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Publication, SortConfig, FetchStatus)
//! - [`csv`]: The feed's line-oriented CSV parser
//! - [`sources`]: Where publications come from, behind a trait for testing
//! - [`explorer`]: The view-state engine deriving pages from the dataset
//! - [`ui`]: Terminal rendering of table, status line, and pagination
//! - [`config`]: Configuration management
//! - [`utils`]: HTTP client plumbing

pub mod config;
pub mod csv;
pub mod explorer;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use explorer::{Explorer, TableView};
pub use models::{FetchStatus, Publication, PublicationField, SortConfig, SortDirection};
pub use sources::{FetchError, PublicationSource, RemoteCsvSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
