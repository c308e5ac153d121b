//! `scrollTo` handling: find the term to expand after the page is shown.

use serde::Serialize;
use url::Url;

use super::TermListDeriver;
use crate::models::{KeyTerm, ViewState};

/// Query parameter naming the term to scroll to
pub const SCROLL_TO_PARAM: &str = "scrollTo";

/// A term to auto-expand, matched by exact `key_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTarget {
    key_name: String,
}

/// Where a scroll target appears in the derived term list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollLocation {
    /// One-based page holding the term
    pub page: usize,

    /// Zero-based index of the term on that page
    pub index: usize,
}

impl ScrollTarget {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
        }
    }

    /// Read the target from a full page URL
    pub fn from_url(page_url: &str) -> Option<Self> {
        match Url::parse(page_url) {
            Ok(parsed) => Self::from_pairs(parsed.query_pairs()),
            Err(e) => {
                tracing::debug!("Ignoring unparsable page URL {}: {}", page_url, e);
                None
            }
        }
    }

    /// Read the target from a raw query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    fn from_pairs<'a>(
        mut pairs: impl Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    ) -> Option<Self> {
        pairs
            .find(|(key, _)| key == SCROLL_TO_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(Self::new)
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Check whether `term` is the one to expand
    pub fn matches(&self, term: &KeyTerm) -> bool {
        term.key_name == self.key_name
    }

    /// Find the page and position of the target under the current view.
    ///
    /// Returns `None` when the target is filtered out or not in the term set.
    pub fn locate(
        &self,
        deriver: &TermListDeriver,
        terms: &[KeyTerm],
        view: &ViewState,
    ) -> Option<ScrollLocation> {
        let position = deriver
            .filter_and_sort(terms, view)
            .iter()
            .position(|term| self.matches(term))?;
        let page_size = view.page_size.max(1);

        Some(ScrollLocation {
            page: position / page_size + 1,
            index: position % page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyTermBuilder;

    #[test]
    fn test_from_url() {
        let target =
            ScrollTarget::from_url("http://localhost:2000/course/abc/glossary?scrollTo=Binary%20Tree")
                .unwrap();
        assert_eq!(target.key_name(), "Binary Tree");
    }

    #[test]
    fn test_from_url_plus_decodes_to_space() {
        let target = ScrollTarget::from_url("http://example.com/?a=1&scrollTo=Hash+Map").unwrap();
        assert_eq!(target.key_name(), "Hash Map");
    }

    #[test]
    fn test_from_url_missing_or_empty() {
        assert!(ScrollTarget::from_url("http://example.com/glossary").is_none());
        assert!(ScrollTarget::from_url("http://example.com/?scrollTo=").is_none());
        assert!(ScrollTarget::from_url("not a url").is_none());
    }

    #[test]
    fn test_from_query() {
        assert_eq!(
            ScrollTarget::from_query("?scrollTo=Queue"),
            Some(ScrollTarget::new("Queue"))
        );
        assert_eq!(
            ScrollTarget::from_query("page=2&scrollTo=Stack"),
            Some(ScrollTarget::new("Stack"))
        );
    }

    #[test]
    fn test_matches_is_exact() {
        let target = ScrollTarget::new("Queue");
        assert!(target.matches(&KeyTerm::new(1, "Queue")));
        assert!(!target.matches(&KeyTerm::new(2, "queue")));
    }

    #[test]
    fn test_locate() {
        let terms: Vec<KeyTerm> = (0..20)
            .map(|i| KeyTerm::new(i, format!("Term {:02}", i)))
            .collect();
        let deriver = TermListDeriver::new();

        let location = ScrollTarget::new("Term 17")
            .locate(&deriver, &terms, &ViewState::new(15))
            .unwrap();
        assert_eq!(location, ScrollLocation { page: 2, index: 2 });

        assert!(ScrollTarget::new("Missing")
            .locate(&deriver, &terms, &ViewState::new(15))
            .is_none());
    }

    #[test]
    fn test_locate_respects_filters() {
        let terms = vec![
            KeyTermBuilder::new(1, "Loop").lesson("Control Flow", "Loops").build(),
            KeyTermBuilder::new(2, "Integer").lesson("Types", "Numbers").build(),
        ];
        let view = ViewState::default().module("Types");

        assert!(ScrollTarget::new("Loop")
            .locate(&TermListDeriver::new(), &terms, &view)
            .is_none());
    }
}
