//! Basic usage example for the Course Glossary library.
//!
//! Loads a handful of terms from an in-memory source, then derives a few
//! views the way a glossary page would.

use course_glossary::glossary::{filter_label, module_filter_options, TermListDeriver};
use course_glossary::models::{KeyTermBuilder, ViewState};
use course_glossary::sources::MockTermSource;
use course_glossary::store::TermStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let course_id = "course-v1:Demo+CS101+2024";

    let source = MockTermSource::new();
    source.set_terms(
        course_id,
        vec![
            KeyTermBuilder::new(1, "Loop")
                .definition("repeats a block of code")
                .lesson("Control Flow", "Loops")
                .build(),
            KeyTermBuilder::new(2, "Array")
                .definition("a structure holding elements")
                .lesson("Data", "Arrays")
                .build(),
            KeyTermBuilder::new(3, "Algorithm")
                .definition("a process for solving a problem")
                .lesson("Basics", "Thinking")
                .build(),
        ],
    );

    let mut store = TermStore::new();
    store.load(&source, course_id).await;

    let deriver = TermListDeriver::new();
    println!("Modules: {}", module_filter_options(store.terms()).join(", "));

    let mut view = ViewState::new(2);
    let page = deriver.derive(store.terms(), &view);
    println!("{}", page.display_range());
    for term in &page.terms {
        println!("  {}", term.key_name);
    }

    view.toggle_module_filter("Data");
    view.set_search_query("struct");
    let page = deriver.derive(store.terms(), &view);
    println!("\n{} / search \"{}\"", filter_label(&view), view.search_query);
    println!("{}", page.display_range());
    for term in &page.terms {
        println!("  {}", term.key_name);
    }

    Ok(())
}
