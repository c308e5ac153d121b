//! Integration tests for Course Glossary
//!
//! These tests drive the full path from a term source through the store and
//! the deriver, the way the CLI does.

use course_glossary::config::{Config, LinksConfig};
use course_glossary::glossary::{module_filter_options, ScrollTarget, TermListDeriver};
use course_glossary::links::LinkBuilder;
use course_glossary::models::{KeyTerm, KeyTermBuilder, ViewState};
use course_glossary::sources::mock::make_term;
use course_glossary::sources::{HttpTermSource, MockTermSource, TermSource};
use course_glossary::store::{ApplyOutcome, TermStore};
use course_glossary::utils::{HttpClient, RetryConfig};
use std::sync::Arc;

const COURSE: &str = "course-v1:Org+CS101+2024";

fn sample_terms() -> Vec<KeyTerm> {
    vec![
        KeyTermBuilder::new(1, "Variable")
            .definition("a named storage location")
            .lesson("Basics", "Variables")
            .build(),
        KeyTermBuilder::new(2, "Loop")
            .definition("repeats a block of code")
            .lesson("Control Flow", "Loops")
            .build(),
        KeyTermBuilder::new(3, "Algorithm")
            .definition("a process for solving a problem")
            .lesson("Basics", "Thinking")
            .lesson("Algorithms", "Intro")
            .build(),
        KeyTermBuilder::new(4, "Array")
            .definition("a structure holding elements")
            .lesson("Data", "Arrays")
            .build(),
        KeyTermBuilder::new(5, "Branch")
            .definition("chooses between paths")
            .lesson("Control Flow", "If")
            .build(),
    ]
}

fn key_names(terms: &[&KeyTerm]) -> Vec<String> {
    terms.iter().map(|t| t.key_name.clone()).collect()
}

/// Test the whole pipeline from a mock source
#[tokio::test]
async fn test_load_and_derive() {
    let source = MockTermSource::new();
    source.set_terms(COURSE, sample_terms());

    let mut store = TermStore::new();
    assert_eq!(store.load(&source, COURSE).await, ApplyOutcome::Applied(5));

    let page = TermListDeriver::new().derive(store.terms(), &ViewState::default());

    assert_eq!(
        key_names(&page.terms),
        vec!["Algorithm", "Array", "Branch", "Loop", "Variable"]
    );
    assert_eq!(page.pagination.total_matches, 5);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.display_range().to_string(), "Displaying 1-5 of 5 items");
}

/// A failed fetch renders the empty state rather than an error
#[tokio::test]
async fn test_failed_fetch_shows_no_terms() {
    let source = MockTermSource::new();
    source.fail_with("connection refused");

    let mut store = TermStore::new();
    assert_eq!(store.load(&source, COURSE).await, ApplyOutcome::Failed);

    let page = TermListDeriver::new().derive(store.terms(), &ViewState::default());
    assert!(page.is_empty_result());
    assert_eq!(page.pagination.total_pages, 0);
}

/// Test module filter, search and pagination together
#[test]
fn test_filter_search_paginate() {
    let terms = sample_terms();
    let deriver = TermListDeriver::new();

    let mut view = ViewState::new(1);
    view.toggle_module_filter("Control Flow");
    view.toggle_module_filter("Basics");

    let page = deriver.derive(&terms, &view);
    assert_eq!(page.pagination.total_matches, 4);
    assert_eq!(page.pagination.total_pages, 4);
    assert_eq!(key_names(&page.terms), vec!["Algorithm"]);

    view.set_search_query("code");
    let page = deriver.derive(&terms, &view);
    assert_eq!(key_names(&page.terms), vec!["Loop"]);

    view.set_selected_page(2);
    let page = deriver.derive(&terms, &view);
    assert!(page.is_empty());
    assert!(!page.is_empty_result());
}

/// A single module filter returns exactly the terms with a lesson in it
#[test]
fn test_single_module_subset() {
    let terms = sample_terms();
    let deriver = TermListDeriver::new();

    for module in module_filter_options(&terms) {
        let view = ViewState::new(100).module(module.clone());
        let derived = deriver.filter_and_sort(&terms, &view);

        let mut expected: Vec<&KeyTerm> = terms
            .iter()
            .filter(|t| t.lessons.iter().any(|l| l.module_name == module))
            .collect();
        expected.sort_by(|a, b| a.key_name.cmp(&b.key_name));

        assert_eq!(key_names(&derived), key_names(&expected), "module {}", module);
    }
}

/// Module options come from the unfiltered set
#[test]
fn test_module_options() {
    assert_eq!(
        module_filter_options(&sample_terms()),
        vec!["Algorithms", "Basics", "Control Flow", "Data"]
    );
}

/// Scroll target jumps to the right page and links resolve for it
#[test]
fn test_scroll_target_and_links() {
    let terms: Vec<KeyTerm> = (0..40)
        .map(|i| make_term(i, &format!("Term {:02}", i), "generated"))
        .collect();
    let deriver = TermListDeriver::new();
    let target = ScrollTarget::from_url("http://localhost:2000/glossary?scrollTo=Term%2033").unwrap();

    let mut view = ViewState::new(15);
    let location = target.locate(&deriver, &terms, &view).unwrap();
    view.set_selected_page(location.page);

    let page = deriver.derive(&terms, &view);
    assert_eq!(location.page, 3);
    assert!(target.matches(page.terms[location.index]));

    let links = LinkBuilder::new(&LinksConfig::default(), COURSE);
    let term = KeyTermBuilder::new(1, "Loop")
        .textbook("Chapter 5", "101", "cs101.pdf")
        .build();
    assert_eq!(
        links.textbook_url(&term.textbooks[0]),
        "http://localhost:18000/asset-v1:Org+CS101+2024+type@asset+block@cs101.pdf#page=101"
    );
}

/// Test fetching over HTTP with a mocked key terms service
#[tokio::test]
async fn test_http_source_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::to_string(&sample_terms()).unwrap();
    let mock = server
        .mock("GET", "/api/v1/course_terms")
        // Literal `+` separators in the query decode to spaces on the service side
        .match_query(mockito::Matcher::UrlEncoded(
            "course_id".into(),
            COURSE.replace('+', " "),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let source = HttpTermSource::with_client(Arc::new(HttpClient::new().unwrap()), &server.url())
        .retry_config(RetryConfig::default().max_attempts(1));
    assert_eq!(source.id(), "http");

    let mut store = TermStore::new();
    assert_eq!(store.load(&source, COURSE).await, ApplyOutcome::Applied(5));
    mock.assert_async().await;

    let page = TermListDeriver::new().derive(store.terms(), &ViewState::default().search("PROCESS"));
    assert_eq!(key_names(&page.terms), vec!["Algorithm"]);
}

/// Page size and filter availability come from configuration
#[test]
fn test_config_drives_deriver() {
    let mut config = Config::default();
    config.glossary.page_size = 2;
    config.glossary.module_filter_enabled = false;

    let terms = sample_terms();
    let deriver =
        TermListDeriver::new().module_filter_enabled(config.glossary.module_filter_enabled);
    let view = ViewState::new(config.glossary.page_size).module("Data");

    let page = deriver.derive(&terms, &view);
    assert_eq!(page.pagination.total_matches, 5);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.len(), 2);
}
