//! The current course's term snapshot.
//!
//! A fetch is tagged with the course id it was issued for. When it resolves,
//! the result replaces the snapshot only if that course is still current;
//! results for a superseded course are dropped. A failed fetch is logged and
//! leaves an empty snapshot, indistinguishable from "no data yet".

use crate::models::KeyTerm;
use crate::sources::{TermSource, TermSourceError};

/// Handle for one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    course_id: String,
}

/// What happened to a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The snapshot was replaced with this many terms
    Applied(usize),
    /// The fetch failed; the snapshot is empty
    Failed,
    /// The result belonged to a course that is no longer selected
    Stale,
}

/// Holds the selected course and its term snapshot
#[derive(Debug, Clone, Default)]
pub struct TermStore {
    course_id: Option<String>,
    terms: Vec<KeyTerm>,
}

impl TermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a course and return the ticket its fetch must carry.
    ///
    /// Switching to a different course empties the snapshot until data arrives.
    pub fn select_course(&mut self, course_id: &str) -> FetchTicket {
        if self.course_id.as_deref() != Some(course_id) {
            self.course_id = Some(course_id.to_string());
            self.terms.clear();
        }

        FetchTicket {
            course_id: course_id.to_string(),
        }
    }

    /// Apply a resolved fetch
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<KeyTerm>, TermSourceError>,
    ) -> ApplyOutcome {
        if self.course_id.as_deref() != Some(ticket.course_id.as_str()) {
            tracing::debug!(
                "Discarding key terms for superseded course {}",
                ticket.course_id
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(terms) => {
                let count = terms.len();
                self.terms = terms;
                ApplyOutcome::Applied(count)
            }
            Err(e) => {
                tracing::error!("Failed to fetch key terms for {}: {}", ticket.course_id, e);
                self.terms.clear();
                ApplyOutcome::Failed
            }
        }
    }

    /// Select `course_id`, fetch its terms from `source` and apply the result
    pub async fn load(&mut self, source: &dyn TermSource, course_id: &str) -> ApplyOutcome {
        let ticket = self.select_course(course_id);
        tracing::info!("Loading key terms for {} from {}", course_id, source.name());
        let result = source.fetch_terms(course_id).await;
        self.apply(&ticket, result)
    }

    /// Currently selected course
    pub fn course_id(&self) -> Option<&str> {
        self.course_id.as_deref()
    }

    /// Current term snapshot (empty until a fetch succeeds)
    pub fn terms(&self) -> &[KeyTerm] {
        &self.terms
    }
}
