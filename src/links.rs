//! Outbound links for lessons, textbooks and resources.
//!
//! Links are rendered, never fetched. Lesson links point at the learning app,
//! textbook links at the LMS asset store.

use crate::config::LinksConfig;
use crate::models::{Lesson, Resource, Textbook};

/// Course id as it appears in URLs (spaces become `+`)
pub fn encode_course_id(course_id: &str) -> String {
    course_id.trim().replace(' ', "+")
}

/// Asset key prefix for a course: the first `course` becomes `asset`
pub fn asset_id(course_id: &str) -> String {
    encode_course_id(course_id).replacen("course", "asset", 1)
}

/// Builds outbound links for one course
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    learning_base: String,
    lms_base: String,
    course_id: String,
}

impl LinkBuilder {
    /// Create a link builder for `course_id` from the configured base URLs
    pub fn new(links: &LinksConfig, course_id: &str) -> Self {
        Self {
            learning_base: links.learning_base_url.trim_end_matches('/').to_string(),
            lms_base: links.lms_base_url.trim_end_matches('/').to_string(),
            course_id: course_id.to_string(),
        }
    }

    /// `{learning}/course/{courseId}/{lesson_link}`
    pub fn lesson_url(&self, lesson: &Lesson) -> String {
        format!(
            "{}/course/{}/{}",
            self.learning_base,
            encode_course_id(&self.course_id),
            lesson.lesson_link.trim_start_matches('/')
        )
    }

    /// `{lms}/{assetId}+type@asset+block@{textbook_link}#page={page_num}`
    pub fn textbook_url(&self, textbook: &Textbook) -> String {
        format!(
            "{}/{}+type@asset+block@{}#page={}",
            self.lms_base,
            asset_id(&self.course_id),
            textbook.textbook_link,
            textbook.page_num
        )
    }

    /// Resource links are external and passed through unchanged
    pub fn resource_url<'a>(&self, resource: &'a Resource) -> &'a str {
        &resource.resource_link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> LinksConfig {
        LinksConfig {
            learning_base_url: "http://localhost:2000/".to_string(),
            lms_base_url: "http://localhost:18000".to_string(),
        }
    }

    #[test]
    fn test_encode_course_id() {
        assert_eq!(encode_course_id("course-v1:Org CS101 2024"), "course-v1:Org+CS101+2024");
        assert_eq!(encode_course_id("course-v1:Org+CS101+2024"), "course-v1:Org+CS101+2024");
    }

    #[test]
    fn test_asset_id_replaces_first_course_only() {
        assert_eq!(
            asset_id("course-v1:Org+course+2024"),
            "asset-v1:Org+course+2024"
        );
    }

    #[test]
    fn test_lesson_url() {
        let builder = LinkBuilder::new(&links(), "course-v1:Org+CS101+2024");
        let lesson = Lesson {
            lesson_link: "block-v1:Org+CS101+2024+type@sequential+block@abc".to_string(),
            ..Default::default()
        };

        assert_eq!(
            builder.lesson_url(&lesson),
            "http://localhost:2000/course/course-v1:Org+CS101+2024/block-v1:Org+CS101+2024+type@sequential+block@abc"
        );
    }

    #[test]
    fn test_textbook_url() {
        let builder = LinkBuilder::new(&links(), "course-v1:Org+CS101+2024");
        let textbook = Textbook {
            id: 1,
            chapter: "Chapter 2".to_string(),
            page_num: "42".to_string(),
            textbook_link: "intro.pdf".to_string(),
        };

        assert_eq!(
            builder.textbook_url(&textbook),
            "http://localhost:18000/asset-v1:Org+CS101+2024+type@asset+block@intro.pdf#page=42"
        );
    }

    #[test]
    fn test_resource_url_passthrough() {
        let builder = LinkBuilder::new(&links(), "course-v1:Org+CS101+2024");
        let resource = Resource {
            id: 1,
            friendly_name: "Docs".to_string(),
            resource_link: "https://docs.example.com/a?b=c".to_string(),
        };

        assert_eq!(builder.resource_url(&resource), "https://docs.example.com/a?b=c");
    }
}
