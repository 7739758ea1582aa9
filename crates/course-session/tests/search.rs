//! Tests for free-text lesson search.

use course_model::{
    Course, Lesson, LessonContent, LessonId, LessonSlug, Module, ModuleSlug, TrainerNotes,
    TrainerProfile,
};
use course_session::search;

fn lesson(id: &str, slug: &str, explanation: &str, trainer_note: &str) -> Lesson {
    Lesson {
        id: LessonId::new(id).unwrap(),
        title: format!("Lesson {id}"),
        slug: LessonSlug::new(slug).unwrap(),
        duration: "10 mins".to_string(),
        content: LessonContent {
            explanation: vec![explanation.to_string()],
            key_points: vec![format!("key point of {slug}")],
            architecture: None,
            why_it_matters: format!("why {slug} matters"),
            common_mistakes: vec![format!("mistake in {slug}")],
            interview_tips: vec![],
            exam_tips: vec![],
        },
        trainer_notes: TrainerNotes {
            talking_points: vec![trainer_note.to_string()],
            real_examples: vec![],
            questions_to_ask: vec![],
        },
    }
}

fn course() -> Course {
    Course {
        title: "Fixture Course".to_string(),
        subtitle: String::new(),
        trainer: TrainerProfile {
            name: "T".to_string(),
            title: "T".to_string(),
            email: "t@example.com".to_string(),
            linkedin: None,
        },
        duration: "2 hours".to_string(),
        prerequisites: vec![],
        what_you_will_learn: vec![],
        target_audience: vec![],
        modules: vec![
            Module {
                id: "module-1".to_string(),
                title: "Introduction".to_string(),
                slug: ModuleSlug::new("introduction").unwrap(),
                description: String::new(),
                icon: "Shield".to_string(),
                duration: "1 hour".to_string(),
                lessons: vec![
                    lesson(
                        "lesson-1-1",
                        "what-is-purview",
                        "Microsoft Purview is a unified governance solution.",
                        "open with a breach story",
                    ),
                    lesson(
                        "lesson-1-2",
                        "compliance-vs-security",
                        "Compliance ensures adherence to regulations.",
                        "contrast with Defender",
                    ),
                ],
            },
            Module {
                id: "module-2".to_string(),
                title: "Policies".to_string(),
                slug: ModuleSlug::new("policies").unwrap(),
                description: String::new(),
                icon: "Lock".to_string(),
                duration: "1 hour".to_string(),
                lessons: vec![lesson(
                    "lesson-2-1",
                    "policy-anatomy",
                    "Every policy pairs conditions with actions and adherence checks.",
                    "walk through the portal live",
                )],
            },
        ],
    }
}

#[test]
fn empty_and_whitespace_queries_are_inactive() {
    let course = course();
    assert!(search(&course, "").is_empty());
    assert!(search(&course, "   \t\n").is_empty());
}

#[test]
fn substring_match_is_case_insensitive() {
    let course = course();
    let hits = search(&course, "PURVIEW");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].lesson.id.as_str(), "lesson-1-1");
    assert_eq!(hits[0].module.slug.as_str(), "introduction");
}

#[test]
fn results_follow_catalog_traversal_order() {
    let course = course();
    let slugs: Vec<&str> = search(&course, "adherence")
        .iter()
        .map(|hit| hit.lesson.slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["compliance-vs-security", "policy-anatomy"]);
}

#[test]
fn key_points_and_why_it_matters_are_searchable() {
    let course = course();
    assert_eq!(search(&course, "key point of policy-anatomy").len(), 1);
    assert_eq!(search(&course, "why compliance-vs-security matters").len(), 1);
}

#[test]
fn trainer_notes_and_mistakes_are_not_searchable() {
    let course = course();
    assert!(search(&course, "breach story").is_empty());
    assert!(search(&course, "walk through the portal").is_empty());
    assert!(search(&course, "mistake in policy-anatomy").is_empty());
}

#[test]
fn unmatched_query_yields_nothing() {
    let course = course();
    assert!(search(&course, "kubernetes").is_empty());
}

#[test]
fn embedded_catalog_search_finds_purview_lessons() {
    let course = course_catalog::load_embedded_course().expect("embedded catalog parses");
    let hits = search(&course, "Purview");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].lesson.slug.as_str(), "what-is-purview");
}
