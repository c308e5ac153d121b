//! View state and pagination models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::KeyTerm;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// What the user is currently looking at
///
/// Owned by whoever drives the glossary and passed explicitly into the
/// derivation functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Free-text search query (empty matches everything)
    pub search_query: String,

    /// Active module filters (empty keeps all terms)
    pub filter_modules: BTreeSet<String>,

    /// One-based page number
    pub selected_page: usize,

    /// Number of terms per page
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Create an empty view state on page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            filter_modules: BTreeSet::new(),
            selected_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Set the search query
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.set_search_query(query);
        self
    }

    /// Add a module filter
    pub fn module(mut self, module_name: impl Into<String>) -> Self {
        self.filter_modules.insert(module_name.into());
        self
    }

    /// Set the selected page
    pub fn page(mut self, page: usize) -> Self {
        self.set_selected_page(page);
        self
    }

    /// Submit a new search query; results restart at page 1
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.selected_page = 1;
    }

    /// Clear the search query
    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    /// Toggle a module filter on or off.
    ///
    /// Returns whether the module is active afterwards.
    pub fn toggle_module_filter(&mut self, module_name: &str) -> bool {
        self.selected_page = 1;
        if self.filter_modules.remove(module_name) {
            false
        } else {
            self.filter_modules.insert(module_name.to_string());
            true
        }
    }

    /// Select a page; values below 1 select page 1
    pub fn set_selected_page(&mut self, page: usize) {
        self.selected_page = page.max(1);
    }

    /// Zero-based offset of the first term on the selected page
    pub fn offset(&self) -> usize {
        (self.selected_page.max(1) - 1).saturating_mul(self.page_size)
    }
}

/// Match and page counts for the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    /// Number of terms that passed the module and text filters
    pub total_matches: usize,

    /// Number of pages needed to show all matches (0 when nothing matches)
    pub total_pages: usize,
}

impl PaginationDescriptor {
    /// Compute the descriptor for `total_matches` terms split into pages of `page_size`
    pub fn new(total_matches: usize, page_size: usize) -> Self {
        Self {
            total_matches,
            total_pages: total_matches.div_ceil(page_size.max(1)),
        }
    }

    /// Check if the page controls should be hidden
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// The "Displaying X-Y of Z items" summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRange {
    /// One-based position of the first shown term, 0 when nothing is shown
    pub first: usize,

    /// One-based position of the last shown term, 0 when nothing is shown
    pub last: usize,

    /// Total number of matching terms
    pub total: usize,
}

impl DisplayRange {
    /// Compute the range shown for `shown` terms starting at `offset`
    pub fn new(offset: usize, shown: usize, total: usize) -> Self {
        if shown == 0 {
            return Self {
                first: 0,
                last: 0,
                total,
            };
        }

        Self {
            first: offset + 1,
            last: offset + shown,
            total,
        }
    }
}

impl std::fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Displaying {}-{} of {} items",
            self.first, self.last, self.total
        )
    }
}

/// One page of derived terms together with its pagination bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct TermPage<'a> {
    /// Terms on the selected page, in display order
    pub terms: Vec<&'a KeyTerm>,

    pub pagination: PaginationDescriptor,

    /// Selected page this slice was taken from
    pub page: usize,

    pub page_size: usize,
}

impl<'a> TermPage<'a> {
    /// Check if nothing matched the current filters ("No Terms to Display")
    pub fn is_empty_result(&self) -> bool {
        self.pagination.total_matches == 0
    }

    /// Summary range for this page
    pub fn display_range(&self) -> DisplayRange {
        let offset = (self.page.max(1) - 1).saturating_mul(self.page_size);
        DisplayRange::new(offset, self.terms.len(), self.pagination.total_matches)
    }

    /// Number of terms on this page
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if this page has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_state() {
        let view = ViewState::default();
        assert!(view.search_query.is_empty());
        assert!(view.filter_modules.is_empty());
        assert_eq!(view.selected_page, 1);
        assert_eq!(view.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(ViewState::new(0).page_size, 1);
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = ViewState::default().page(3);
        assert_eq!(view.selected_page, 3);

        view.set_search_query("loop");
        assert_eq!(view.selected_page, 1);
        assert_eq!(view.search_query, "loop");

        view.set_selected_page(2);
        view.clear_search();
        assert!(view.search_query.is_empty());
        assert_eq!(view.selected_page, 1);
    }

    #[test]
    fn test_toggle_module_filter() {
        let mut view = ViewState::default();

        assert!(view.toggle_module_filter("Module 1"));
        assert!(view.filter_modules.contains("Module 1"));

        assert!(!view.toggle_module_filter("Module 1"));
        assert!(view.filter_modules.is_empty());
    }

    #[test]
    fn test_select_page_zero() {
        let view = ViewState::default().page(0);
        assert_eq!(view.selected_page, 1);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_pagination_descriptor() {
        assert_eq!(PaginationDescriptor::new(0, 15).total_pages, 0);
        assert!(PaginationDescriptor::new(0, 15).is_empty());
        assert_eq!(PaginationDescriptor::new(1, 15).total_pages, 1);
        assert_eq!(PaginationDescriptor::new(15, 15).total_pages, 1);
        assert_eq!(PaginationDescriptor::new(16, 15).total_pages, 2);
        assert_eq!(PaginationDescriptor::new(52, 15).total_pages, 4);
    }

    #[test]
    fn test_display_range() {
        assert_eq!(DisplayRange::new(0, 0, 0).to_string(), "Displaying 0-0 of 0 items");
        assert_eq!(DisplayRange::new(0, 15, 52).to_string(), "Displaying 1-15 of 52 items");
        assert_eq!(DisplayRange::new(45, 7, 52).to_string(), "Displaying 46-52 of 52 items");
        assert_eq!(DisplayRange::new(60, 0, 52).to_string(), "Displaying 0-0 of 52 items");
    }
}
