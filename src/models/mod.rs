//! Core data models for key terms and glossary views.

mod term;
mod view;

pub use term::{Definition, KeyTerm, KeyTermBuilder, Lesson, Resource, Textbook};
pub use view::{DisplayRange, PaginationDescriptor, TermPage, ViewState, DEFAULT_PAGE_SIZE};
