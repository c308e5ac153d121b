//! Module filter facet.

use std::collections::BTreeSet;

use crate::models::{KeyTerm, ViewState};

/// Distinct module names across every lesson of `terms`, ascending
pub fn module_filter_options(terms: &[KeyTerm]) -> Vec<String> {
    terms
        .iter()
        .flat_map(|term| term.lessons.iter())
        .map(|lesson| lesson.module_name.as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Label of the filter control, with the active filter count when non-zero
pub fn filter_label(view: &ViewState) -> String {
    match view.filter_modules.len() {
        0 => "Filter Modules".to_string(),
        n => format!("Filter Modules ({})", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyTermBuilder;

    #[test]
    fn test_module_options_distinct_and_sorted() {
        let terms = vec![
            KeyTermBuilder::new(1, "Loop")
                .lesson("Control Flow", "Loops")
                .lesson("Basics", "Intro")
                .build(),
            KeyTermBuilder::new(2, "Integer")
                .lesson("Types", "Numbers")
                .lesson("Basics", "Variables")
                .build(),
        ];

        assert_eq!(
            module_filter_options(&terms),
            vec!["Basics", "Control Flow", "Types"]
        );
    }

    #[test]
    fn test_module_options_empty() {
        assert!(module_filter_options(&[]).is_empty());
        assert!(module_filter_options(&[KeyTerm::new(1, "Lonely")]).is_empty());
    }

    #[test]
    fn test_filter_label() {
        let mut view = ViewState::default();
        assert_eq!(filter_label(&view), "Filter Modules");

        view.toggle_module_filter("Types");
        view.toggle_module_filter("Basics");
        assert_eq!(filter_label(&view), "Filter Modules (2)");
    }
}
