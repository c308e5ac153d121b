//! Term list derivation: module filter, text search, sort and pagination.
//!
//! Everything here is a pure function of `(terms, view)`. Nothing is cached
//! and the caller's term collection is never reordered; derived sequences
//! borrow from it instead.
//!
//! ```rust
//! use course_glossary::glossary::TermListDeriver;
//! use course_glossary::models::{KeyTermBuilder, ViewState};
//!
//! let terms = vec![
//!     KeyTermBuilder::new(1, "Array").definition("a structure").build(),
//!     KeyTermBuilder::new(2, "Algorithm").definition("a process").build(),
//! ];
//!
//! let page = TermListDeriver::new().derive(&terms, &ViewState::default().search("proc"));
//! assert_eq!(page.pagination.total_matches, 1);
//! assert_eq!(page.terms[0].key_name, "Algorithm");
//! ```

mod modules;
mod scroll;

pub use modules::{filter_label, module_filter_options};
pub use scroll::{ScrollLocation, ScrollTarget, SCROLL_TO_PARAM};

use crate::models::{KeyTerm, PaginationDescriptor, TermPage, ViewState};

/// Derives the visible page of terms from the full term set and a view state
#[derive(Debug, Clone, Copy)]
pub struct TermListDeriver {
    module_filter_enabled: bool,
}

impl Default for TermListDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TermListDeriver {
    /// Create a deriver with module filtering enabled
    pub fn new() -> Self {
        Self {
            module_filter_enabled: true,
        }
    }

    /// Enable or disable module filtering.
    ///
    /// When disabled, `filter_modules` in the view state is ignored and no
    /// filter options are offered.
    pub fn module_filter_enabled(mut self, enabled: bool) -> Self {
        self.module_filter_enabled = enabled;
        self
    }

    /// Whether module filtering is applied
    pub fn is_module_filter_enabled(&self) -> bool {
        self.module_filter_enabled
    }

    /// Apply the module filter, then the text filter, then sort by `key_name`.
    ///
    /// The sort is stable, so terms with equal names keep their input order.
    pub fn filter_and_sort<'a>(&self, terms: &'a [KeyTerm], view: &ViewState) -> Vec<&'a KeyTerm> {
        let needle = view.search_query.to_lowercase();
        let filter_modules = self.module_filter_enabled && !view.filter_modules.is_empty();

        let mut matched: Vec<&KeyTerm> = terms
            .iter()
            .filter(|term| !filter_modules || term.in_any_module(&view.filter_modules))
            .filter(|term| term.matches_lowercase(&needle))
            .collect();

        matched.sort_by(|a, b| a.key_name.cmp(&b.key_name));
        matched
    }

    /// Full derivation for the selected page
    pub fn derive<'a>(&self, terms: &'a [KeyTerm], view: &ViewState) -> TermPage<'a> {
        let matched = self.filter_and_sort(terms, view);
        let pagination = PaginationDescriptor::new(matched.len(), view.page_size);
        let page_terms = paginate(&matched, view.page_size, view.selected_page).to_vec();

        tracing::debug!(
            total = terms.len(),
            matches = pagination.total_matches,
            pages = pagination.total_pages,
            page = view.selected_page,
            shown = page_terms.len(),
            "Derived glossary page"
        );

        TermPage {
            terms: page_terms,
            pagination,
            page: view.selected_page.max(1),
            page_size: view.page_size.max(1),
        }
    }

    /// Module names offered as filter options (empty when filtering is disabled)
    pub fn module_options(&self, terms: &[KeyTerm]) -> Vec<String> {
        if self.module_filter_enabled {
            module_filter_options(terms)
        } else {
            Vec::new()
        }
    }
}

/// Slice out one page of `items`.
///
/// Pages are one-based; page 0 is treated as page 1. A page past the end yields
/// an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
