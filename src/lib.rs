//! # Course Glossary
//!
//! Fetches the key terms of a course and derives the searchable, filterable,
//! paginated glossary view shown to learners.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Key terms, view state and pagination types
//! - [`glossary`]: Term list derivation (filter, search, sort, paginate), module options, `scrollTo`
//! - [`sources`]: Key term providers behind the [`TermSource`] trait
//! - [`store`]: Current course snapshot with stale-fetch protection
//! - [`links`]: Outbound lesson, textbook and resource links
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal rendering of a glossary page
//! - [`utils`]: HTTP client, retry and display helpers

pub mod config;
pub mod glossary;
pub mod links;
pub mod models;
pub mod sources;
pub mod store;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use glossary::TermListDeriver;
pub use models::{KeyTerm, ViewState};
pub use sources::{TermSource, TermSourceError};
pub use store::TermStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
