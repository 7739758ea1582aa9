//! Authoring checks for catalog content.
//!
//! A malformed catalog is a content-authoring error, not a runtime
//! condition: navigation assumes the invariants checked here already hold.
//! The checks exist so authors find out at `check` time, not in front of a
//! class.

use std::collections::BTreeSet;
use std::fmt;

use course_model::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCode {
    EmptyCatalog,
    EmptyModule,
    DuplicateModuleSlug,
    DuplicateLessonSlug,
    DuplicateLessonId,
    MalformedSlug,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::EmptyCatalog => "empty-catalog",
            IssueCode::EmptyModule => "empty-module",
            IssueCode::DuplicateModuleSlug => "duplicate-module-slug",
            IssueCode::DuplicateLessonSlug => "duplicate-lesson-slug",
            IssueCode::DuplicateLessonId => "duplicate-lesson-id",
            IssueCode::MalformedSlug => "malformed-slug",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogIssue {
    pub code: IssueCode,
    pub message: String,
    /// `module-slug` or `module-slug/lesson-slug` when the issue is local.
    pub location: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogSummary {
    pub title: String,
    pub module_count: usize,
    pub lesson_count: usize,
    pub issue_count: usize,
}

pub fn summarize(course: &Course, issues: &[CatalogIssue]) -> CatalogSummary {
    CatalogSummary {
        title: course.title.clone(),
        module_count: course.modules.len(),
        lesson_count: course.lesson_count(),
        issue_count: issues.len(),
    }
}

/// Check the invariants navigation relies on. Returns an empty vec for a
/// well-formed catalog.
pub fn validate(course: &Course) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if course.modules.is_empty() {
        issues.push(CatalogIssue {
            code: IssueCode::EmptyCatalog,
            message: "catalog declares no modules".to_string(),
            location: None,
        });
    }

    let mut module_slugs = BTreeSet::new();
    let mut lesson_ids = BTreeSet::new();

    for module in &course.modules {
        let module_slug = module.slug.as_str();
        if !module_slugs.insert(module_slug) {
            issues.push(CatalogIssue {
                code: IssueCode::DuplicateModuleSlug,
                message: format!("module slug {module_slug:?} is declared more than once"),
                location: Some(module_slug.to_string()),
            });
        }
        if !is_url_safe(module_slug) {
            issues.push(CatalogIssue {
                code: IssueCode::MalformedSlug,
                message: format!("module slug {module_slug:?} is not URL-safe"),
                location: Some(module_slug.to_string()),
            });
        }
        if module.lessons.is_empty() {
            issues.push(CatalogIssue {
                code: IssueCode::EmptyModule,
                message: format!("module {module_slug:?} has no lessons and is not navigable"),
                location: Some(module_slug.to_string()),
            });
        }

        let mut lesson_slugs = BTreeSet::new();
        for lesson in &module.lessons {
            let lesson_slug = lesson.slug.as_str();
            let location = format!("{module_slug}/{lesson_slug}");
            if !lesson_slugs.insert(lesson_slug) {
                issues.push(CatalogIssue {
                    code: IssueCode::DuplicateLessonSlug,
                    message: format!(
                        "lesson slug {lesson_slug:?} is declared more than once in module {module_slug:?}"
                    ),
                    location: Some(location.clone()),
                });
            }
            if !is_url_safe(lesson_slug) {
                issues.push(CatalogIssue {
                    code: IssueCode::MalformedSlug,
                    message: format!("lesson slug {lesson_slug:?} is not URL-safe"),
                    location: Some(location.clone()),
                });
            }
            if !lesson_ids.insert(lesson.id.as_str()) {
                issues.push(CatalogIssue {
                    code: IssueCode::DuplicateLessonId,
                    message: format!(
                        "lesson id {:?} is declared more than once in the catalog",
                        lesson.id.as_str()
                    ),
                    location: Some(location),
                });
            }
        }
    }

    issues
}

/// Slugs appear verbatim as route path segments.
fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
