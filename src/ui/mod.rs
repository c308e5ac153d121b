//! Terminal rendering of a glossary page.
//!
//! Every term is shown as a collapsible entry: collapsed entries print only
//! the name, expanded ones list definitions, textbooks, lessons and
//! references. Sections with nothing in them are left out.

use owo_colors::OwoColorize;

use crate::glossary::{filter_label, ScrollTarget};
use crate::links::LinkBuilder;
use crate::models::{KeyTerm, TermPage, ViewState};

const NO_TERMS: &str = "No Terms to Display...";

/// Plain-text detail lines of an expanded term
pub fn term_detail_lines(term: &KeyTerm, links: &LinkBuilder) -> Vec<String> {
    let mut lines = Vec::new();

    if !term.definitions.is_empty() {
        lines.push("Definitions".to_string());
        for definition in &term.definitions {
            lines.push(format!("  {}", definition.description));
        }
    }

    if !term.textbooks.is_empty() {
        lines.push("Textbooks".to_string());
        for textbook in &term.textbooks {
            lines.push(format!(
                "  {}, pg. {}  <{}>",
                textbook.chapter,
                textbook.page_num,
                links.textbook_url(textbook)
            ));
        }
    }

    let lessons = term.sorted_lessons();
    if !lessons.is_empty() {
        lines.push("Lessons".to_string());
        for lesson in lessons {
            lines.push(format!(
                "  {}  <{}>",
                lesson.breadcrumb(),
                links.lesson_url(lesson)
            ));
        }
    }

    let resources = term.sorted_resources();
    if !resources.is_empty() {
        lines.push("References".to_string());
        for resource in resources {
            lines.push(format!(
                "  {}  <{}>",
                resource.friendly_name,
                links.resource_url(resource)
            ));
        }
    }

    lines
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", format!("━━━ {} ━━━", title).bold().cyan());
}

/// Print the "Displaying X-Y of Z items" line and the filter label.
pub fn print_summary(page: &TermPage<'_>, view: &ViewState, module_filter_enabled: bool) {
    let mut line = page.display_range().to_string();
    if module_filter_enabled {
        line.push_str(&format!("  |  {}", filter_label(view)));
    }
    if !view.search_query.is_empty() {
        line.push_str(&format!("  |  search: \"{}\"", view.search_query));
    }
    println!("{}", line.dimmed());
}

/// Print one term, expanded or collapsed.
pub fn print_term(term: &KeyTerm, links: &LinkBuilder, index: usize, expanded: bool) {
    let marker = if expanded { "▾" } else { "▸" };
    // Alternate row shading on the page-local index
    if index % 2 == 1 {
        println!("{} {}", marker.dimmed(), term.key_name.bold().on_bright_black());
    } else {
        println!("{} {}", marker.dimmed(), term.key_name.bold());
    }

    if !expanded {
        return;
    }

    for line in term_detail_lines(term, links) {
        if line.starts_with("  ") {
            println!("    {}", line.trim_start());
        } else {
            println!("  {}", line.yellow().bold());
        }
    }
    println!();
}

/// Print a whole page of terms.
///
/// Terms are expanded when `expand_all` is set or when they match `scroll_to`.
pub fn print_page(
    page: &TermPage<'_>,
    links: &LinkBuilder,
    scroll_to: Option<&ScrollTarget>,
    expand_all: bool,
) {
    if page.is_empty_result() {
        println!("{}", NO_TERMS.yellow());
        return;
    }

    for (index, term) in page.terms.iter().enumerate() {
        let expanded = expand_all || scroll_to.is_some_and(|target| target.matches(term));
        print_term(term, links, index, expanded);
    }
}

/// Print the page controls line.
pub fn print_pagination(page: &TermPage<'_>) {
    if page.pagination.is_empty() {
        return;
    }
    println!(
        "{}",
        format!("Page {} of {}", page.page, page.pagination.total_pages).dimmed()
    );
}

/// Print the module filter options, marking the active ones.
pub fn print_module_options(options: &[String], view: &ViewState) {
    if options.is_empty() {
        println!("{}", "No modules to filter by".yellow());
        return;
    }

    for module in options {
        if view.filter_modules.contains(module) {
            println!("{} {}", "[x]".green().bold(), module);
        } else {
            println!("{} {}", "[ ]".dimmed(), module);
        }
    }
}
