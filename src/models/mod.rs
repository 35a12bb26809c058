//! Core data models for publication records and table view state.

mod publication;
mod view;

pub use publication::{Publication, PublicationField};
pub use view::{FetchStatus, SortConfig, SortDirection};
