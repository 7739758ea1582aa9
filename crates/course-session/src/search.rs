//! Free-text lesson search.
//!
//! A pure function of the catalog and the query: no index is kept, results
//! are recomputed on every call. Matching is case-insensitive substring
//! containment over a lesson's learner-facing text (title, explanation
//! paragraphs, key points, why-it-matters). Trainer notes and the
//! mistake/tip lists stay outside the haystack so learner search never
//! surfaces trainer-only content.

use course_model::{Course, Lesson, Module};

/// One search result, in catalog traversal order (not relevance-ranked).
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub module: &'a Module,
    pub lesson: &'a Lesson,
}

/// Match `query` against every lesson. A query that trims to empty means
/// search is inactive and yields no hits.
pub fn search<'a>(course: &'a Course, query: &str) -> Vec<SearchHit<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    course
        .lessons()
        .filter(|(_, lesson)| haystack(lesson).contains(&needle))
        .map(|(module, lesson)| SearchHit { module, lesson })
        .collect()
}

fn haystack(lesson: &Lesson) -> String {
    let mut text = String::with_capacity(256);
    text.push_str(&lesson.title);
    for paragraph in &lesson.content.explanation {
        text.push(' ');
        text.push_str(paragraph);
    }
    for point in &lesson.content.key_points {
        text.push(' ');
        text.push_str(point);
    }
    text.push(' ');
    text.push_str(&lesson.content.why_it_matters);
    text.to_lowercase()
}
