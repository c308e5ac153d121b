//! Key term model and its cross-referenced records.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// A definition attached to a key term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub id: u64,

    /// Definition text
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A textbook reference for a key term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textbook {
    #[serde(default)]
    pub id: u64,

    /// Chapter title as shown to the learner
    #[serde(default, deserialize_with = "null_as_default")]
    pub chapter: String,

    /// Page number inside the textbook PDF
    #[serde(default, deserialize_with = "string_or_number")]
    pub page_num: String,

    /// Asset file name of the textbook on the LMS
    #[serde(default, deserialize_with = "null_as_default")]
    pub textbook_link: String,
}

/// A lesson in which a key term appears
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default)]
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lesson_name: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub lesson_number: String,

    /// Module the lesson belongs to (used as a filter facet)
    #[serde(default, deserialize_with = "null_as_default")]
    pub module_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_name: String,

    /// Path of the lesson relative to the course root on the learning app
    #[serde(default, deserialize_with = "null_as_default")]
    pub lesson_link: String,
}

impl Lesson {
    /// Returns the `module > lesson > unit` breadcrumb shown for this lesson
    pub fn breadcrumb(&self) -> String {
        format!(
            "{} > {} > {}",
            self.module_name, self.lesson_name, self.unit_name
        )
    }
}

/// An external resource for a key term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub friendly_name: String,

    /// Arbitrary external URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_link: String,
}

/// A glossary entry for a course
///
/// Terms are immutable snapshots: a fetch replaces the whole set, nothing
/// patches a term in place. Nested sequences that are missing or `null` in the
/// payload deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    #[serde(default)]
    pub id: u64,

    /// Display name, also the sort and search key
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub textbooks: Vec<Textbook>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lessons: Vec<Lesson>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<Resource>,
}

impl KeyTerm {
    /// Create a term with just a name
    pub fn new(id: u64, key_name: impl Into<String>) -> Self {
        Self {
            id,
            key_name: key_name.into(),
            ..Default::default()
        }
    }

    /// Check whether the name or any definition contains `needle`.
    ///
    /// `needle` must already be lowercased; an empty needle always matches.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.key_name.to_lowercase().contains(needle)
            || self
                .definitions
                .iter()
                .any(|d| d.description.to_lowercase().contains(needle))
    }

    /// Check whether the term matches a free-text query, ignoring case
    pub fn matches_query(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }

    /// Check whether any lesson of this term belongs to one of `modules`
    pub fn in_any_module(&self, modules: &BTreeSet<String>) -> bool {
        self.lessons.iter().any(|l| modules.contains(&l.module_name))
    }

    /// Distinct module names of this term's lessons
    pub fn module_names(&self) -> BTreeSet<&str> {
        self.lessons.iter().map(|l| l.module_name.as_str()).collect()
    }

    /// Lessons ordered by module name, then lesson name.
    ///
    /// The stored order is left untouched.
    pub fn sorted_lessons(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by(|a, b| {
            a.module_name
                .cmp(&b.module_name)
                .then_with(|| a.lesson_name.cmp(&b.lesson_name))
        });
        lessons
    }

    /// Resources ordered by friendly name
    pub fn sorted_resources(&self) -> Vec<&Resource> {
        let mut resources: Vec<&Resource> = self.resources.iter().collect();
        resources.sort_by(|a, b| a.friendly_name.cmp(&b.friendly_name));
        resources
    }

    /// Check if the term has nothing to show besides its name
    pub fn has_details(&self) -> bool {
        !(self.definitions.is_empty()
            && self.textbooks.is_empty()
            && self.lessons.is_empty()
            && self.resources.is_empty())
    }
}

/// Builder for constructing KeyTerm objects
#[derive(Debug, Clone)]
pub struct KeyTermBuilder {
    term: KeyTerm,
    next_id: u64,
}

impl KeyTermBuilder {
    /// Create a new builder with required fields
    pub fn new(id: u64, key_name: impl Into<String>) -> Self {
        Self {
            term: KeyTerm::new(id, key_name),
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a definition
    pub fn definition(mut self, description: impl Into<String>) -> Self {
        let id = self.take_id();
        self.term.definitions.push(Definition {
            id,
            description: description.into(),
        });
        self
    }

    /// Add a textbook reference
    pub fn textbook(
        mut self,
        chapter: impl Into<String>,
        page_num: impl Into<String>,
        textbook_link: impl Into<String>,
    ) -> Self {
        let id = self.take_id();
        self.term.textbooks.push(Textbook {
            id,
            chapter: chapter.into(),
            page_num: page_num.into(),
            textbook_link: textbook_link.into(),
        });
        self
    }

    /// Add a lesson with the given module and lesson names
    pub fn lesson(mut self, module_name: impl Into<String>, lesson_name: impl Into<String>) -> Self {
        let id = self.take_id();
        self.term.lessons.push(Lesson {
            id,
            lesson_name: lesson_name.into(),
            module_name: module_name.into(),
            ..Default::default()
        });
        self
    }

    /// Add a fully specified lesson
    pub fn lesson_record(mut self, lesson: Lesson) -> Self {
        self.term.lessons.push(lesson);
        self
    }

    /// Add an external resource
    pub fn resource(mut self, friendly_name: impl Into<String>, resource_link: impl Into<String>) -> Self {
        let id = self.take_id();
        self.term.resources.push(Resource {
            id,
            friendly_name: friendly_name.into(),
            resource_link: resource_link.into(),
        });
        self
    }

    /// Build the KeyTerm
    pub fn build(self) -> KeyTerm {
        self.term
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a JSON string or number and keep it as text
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(n)) => n.to_string(),
        None => String::new(),
    })
}
