//! Utility modules supporting the feed pipeline.
//!
//! - [`HttpClient`]: shared HTTP client with user agent and timeout defaults

mod http;

pub use http::HttpClient;
