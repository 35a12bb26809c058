//! HTTP source for the published CSV feed.

use async_trait::async_trait;

use crate::csv::parse_publications;
use crate::models::Publication;
use crate::sources::{FetchError, PublicationSource};
use crate::utils::HttpClient;

/// Publication source backed by an HTTP(S) CSV export.
///
/// Issues exactly one GET per [`fetch`](PublicationSource::fetch) call and
/// hands the body to the CSV parser. Redirects are followed by the underlying
/// client (published spreadsheet exports redirect to a content host).
#[derive(Debug, Clone)]
pub struct RemoteCsvSource {
    client: HttpClient,
    url: String,
}

impl RemoteCsvSource {
    /// Create a source for `url` with the default HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), url)
    }

    /// Create a source that reuses an existing HTTP client.
    pub fn with_client(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The feed URL this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PublicationSource for RemoteCsvSource {
    async fn fetch(&self) -> Result<Vec<Publication>, FetchError> {
        tracing::debug!(url = %self.url, "fetching publication feed");

        let response = self.client.client().get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.text().await?;
        let publications = parse_publications(&body);
        tracing::debug!(records = publications.len(), "publication feed parsed");

        Ok(publications)
    }
}
