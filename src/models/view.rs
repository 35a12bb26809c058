//! Sort configuration and fetch lifecycle types.

use serde::{Deserialize, Serialize};

use crate::models::PublicationField;

/// Sort order for a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// An active sort: which column, and which way.
///
/// The absence of any active sort (natural feed order) is expressed as
/// `Option<SortConfig>` by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Column the table is sorted by
    pub field: PublicationField,

    /// Direction of the sort
    pub direction: SortDirection,
}

impl SortConfig {
    /// Create an ascending sort on `field`.
    pub fn ascending(field: PublicationField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Create a descending sort on `field`.
    pub fn descending(field: PublicationField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Lifecycle of the most recent load attempt.
///
/// The machine is linear: `Idle` → `Loading` → (`Success` | `Error`), with no
/// way back to `Loading` except an explicit reload request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}
