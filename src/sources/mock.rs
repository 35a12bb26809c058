//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::Publication;
use crate::sources::{FetchError, PublicationSource};

/// A mock source for testing that returns predefined responses.
#[derive(Debug, Default)]
pub struct MockSource {
    response: Mutex<Option<Result<Vec<Publication>, FetchError>>>,
}

impl MockSource {
    /// Create a new mock source. Until a response is configured it succeeds
    /// with an empty record set.
    pub fn new() -> Self {
        Self {
            response: Mutex::new(None),
        }
    }

    /// Create a mock that succeeds with `publications`.
    pub fn with_publications(publications: Vec<Publication>) -> Self {
        let source = Self::new();
        source.set_response(Ok(publications));
        source
    }

    /// Create a mock that fails with `error`.
    pub fn with_error(error: FetchError) -> Self {
        let source = Self::new();
        source.set_response(Err(error));
        source
    }

    /// Set the response to return.
    pub fn set_response(&self, response: Result<Vec<Publication>, FetchError>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Some(response);
    }

    /// Clear the configured response.
    pub fn clear_response(&self) {
        let mut guard = self.response.lock().unwrap();
        *guard = None;
    }
}

#[async_trait]
impl PublicationSource for MockSource {
    async fn fetch(&self) -> Result<Vec<Publication>, FetchError> {
        let guard = self.response.lock().unwrap();
        match &*guard {
            Some(response) => response.clone(),
            None => Ok(Vec::new()),
        }
    }
}

/// Helper function to create a publication for testing.
pub fn make_publication(title: &str) -> Publication {
    Publication {
        title: title.to_string(),
        ..Default::default()
    }
}
