//! Utility modules supporting the glossary.
//!
//! - [`HttpClient`]: shared reqwest client with timeouts and a user agent
//! - [`RetryConfig`] / [`with_retry`]: exponential backoff for transient fetch failures
//! - [`truncate_with_ellipsis`] / [`truncate_at_word`]: unicode-aware truncation for tables
//!
//! # Retry with Backoff
//!
//! ```rust,no_run
//! use course_glossary::sources::TermSourceError;
//! use course_glossary::utils::{with_retry, RetryConfig};
//!
//! # async fn fetch_data() -> Result<String, TermSourceError> { Ok("data".to_string()) }
//! # #[tokio::main]
//! # async fn main() -> Result<(), TermSourceError> {
//! let config = RetryConfig::default().max_attempts(3);
//! let result = with_retry(config, || fetch_data()).await?;
//! # Ok(())
//! # }
//! ```

mod display;
mod http;
mod retry;

pub use display::{
    is_terminal, term_table_columns, terminal_width, truncate_at_word, truncate_with_ellipsis,
};
pub use http::HttpClient;
pub use retry::{with_retry, RetryConfig, TransientError};
