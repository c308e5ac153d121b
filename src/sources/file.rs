//! JSON file source for offline glossaries.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::KeyTerm;
use crate::sources::{TermSource, TermSourceError};

/// Reads a key terms array from a JSON file.
///
/// The file holds exactly what the key terms API would return for one
/// course, so the course id is only checked, not used for lookup.
#[derive(Debug, Clone)]
pub struct FileTermSource {
    path: PathBuf,
}

impl FileTermSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TermSource for FileTermSource {
    fn id(&self) -> &str {
        "file"
    }

    fn name(&self) -> &str {
        "JSON File"
    }

    async fn fetch_terms(&self, course_id: &str) -> Result<Vec<KeyTerm>, TermSourceError> {
        self.validate_course_id(course_id)?;

        let content = tokio::fs::read_to_string(&self.path).await?;
        let terms: Vec<KeyTerm> = serde_json::from_str(&content)?;

        tracing::debug!(
            "Read {} key terms from {}",
            terms.len(),
            self.path.display()
        );
        Ok(terms)
    }
}
