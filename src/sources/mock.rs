//! Mock source for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::{KeyTerm, KeyTermBuilder};
use crate::sources::{TermSource, TermSourceError};

/// A mock source for testing that returns predefined term sets per course.
#[derive(Debug, Default)]
pub struct MockTermSource {
    terms: Mutex<HashMap<String, Vec<KeyTerm>>>,
    failure: Mutex<Option<String>>,
}

impl MockTermSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terms returned for a course.
    pub fn set_terms(&self, course_id: impl Into<String>, terms: Vec<KeyTerm>) {
        let mut guard = self.terms.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(course_id.into(), terms);
    }

    /// Make every fetch fail with a network error.
    pub fn fail_with(&self, message: impl Into<String>) {
        let mut guard = self.failure.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(message.into());
    }
}

#[async_trait]
impl TermSource for MockTermSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn fetch_terms(&self, course_id: &str) -> Result<Vec<KeyTerm>, TermSourceError> {
        if let Some(message) = self.failure.lock().unwrap_or_else(|e| e.into_inner()).clone() {
            return Err(TermSourceError::Network(message));
        }

        let guard = self.terms.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.get(course_id).cloned().unwrap_or_default())
    }
}

/// Helper function to create a mock term with one definition for testing.
pub fn make_term(id: u64, key_name: &str, description: &str) -> KeyTerm {
    KeyTermBuilder::new(id, key_name).definition(description).build()
}
