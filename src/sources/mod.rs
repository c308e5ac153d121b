//! Key term data providers.
//!
//! This module defines the [`TermSource`] trait that every term provider
//! implements. The glossary consumes a single operation, fetching the full
//! term set of a course; results are always whole snapshots.
//!
//! - [`HttpTermSource`]: the key terms REST API (`/api/v1/course_terms`)
//! - [`FileTermSource`]: a JSON file with the same array shape, for offline use
//! - [`MockTermSource`]: canned responses for tests and demos

mod file;
mod http;
pub mod mock;

pub use file::FileTermSource;
pub use http::HttpTermSource;
pub use mock::MockTermSource;

use crate::models::KeyTerm;
use async_trait::async_trait;

/// The TermSource trait defines the interface for key term providers.
#[async_trait]
pub trait TermSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g. "http", "file")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Fetch every key term of a course
    async fn fetch_terms(&self, course_id: &str) -> Result<Vec<KeyTerm>, TermSourceError>;

    /// Validate that a course id is usable with this source
    fn validate_course_id(&self, course_id: &str) -> Result<(), TermSourceError> {
        if course_id.trim().is_empty() {
            return Err(TermSourceError::InvalidRequest(
                "course id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur when fetching key terms
#[derive(Debug, thiserror::Error)]
pub enum TermSourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded, with the server's retry-after hint in seconds
    #[error("Rate limit exceeded")]
    RateLimit(Option<u64>),

    /// The service answered with a server-side error status
    #[error("Server error: {0}")]
    Server(String),

    /// The service rejected the request
    #[error("API error: {0}")]
    Api(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for TermSourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TermSourceError::Parse(err.to_string())
        } else {
            TermSourceError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TermSourceError {
    fn from(err: serde_json::Error) -> Self {
        TermSourceError::Parse(format!("JSON: {}", err))
    }
}
