//! Publication feed sources.
//!
//! This module defines the [`PublicationSource`] trait, the seam between the
//! explorer and the outside world: the explorer only ever asks a source for
//! the complete record set and never talks to the network itself. The
//! production implementation is [`RemoteCsvSource`]; tests and examples use
//! [`MockSource`].

pub mod mock;
mod remote;

pub use mock::MockSource;
pub use remote::RemoteCsvSource;

use crate::models::Publication;
use async_trait::async_trait;

/// A provider of the full publication record set.
///
/// Implementations surface transport-level problems as [`FetchError`]; an
/// empty record set is a legitimate success, not an error.
#[async_trait]
pub trait PublicationSource: Send + Sync + std::fmt::Debug {
    /// Fetch the complete record set from the feed.
    ///
    /// One attempt per invocation: no retries, no caching.
    async fn fetch(&self) -> Result<Vec<Publication>, FetchError>;
}

/// Errors that can occur when loading the feed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The transport itself failed (DNS, connection, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport completed but the server reported a non-success status
    #[error("server returned status {0}")]
    HttpStatus(reqwest::StatusCode),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
