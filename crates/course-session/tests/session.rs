//! Tests for navigation, completion, and trainer-mode behavior.

use course_model::{
    Course, Lesson, LessonContent, LessonId, LessonSlug, Module, ModuleSlug, TrainerNotes,
    TrainerProfile,
};
use course_session::{COMPLETED_LESSONS_KEY, CourseSession, TRAINER_MODE_KEY};
use course_store::{FileStore, MemoryStore};

fn lesson(id: &str, slug: &str) -> Lesson {
    Lesson {
        id: LessonId::new(id).unwrap(),
        title: format!("Lesson {id}"),
        slug: LessonSlug::new(slug).unwrap(),
        duration: "10 mins".to_string(),
        content: LessonContent {
            explanation: vec![format!("About {slug}.")],
            key_points: vec![],
            architecture: None,
            why_it_matters: String::new(),
            common_mistakes: vec![],
            interview_tips: vec![],
            exam_tips: vec![],
        },
        trainer_notes: TrainerNotes {
            talking_points: vec![],
            real_examples: vec![],
            questions_to_ask: vec![],
        },
    }
}

fn module(id: &str, slug: &str, lessons: Vec<Lesson>) -> Module {
    Module {
        id: id.to_string(),
        title: format!("Module {id}"),
        slug: ModuleSlug::new(slug).unwrap(),
        description: String::new(),
        icon: "Shield".to_string(),
        duration: "1 hour".to_string(),
        lessons,
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
            module(
                "module-1",
                "introduction",
                vec![
                    lesson("lesson-1-1", "what-is-purview"),
                    lesson("lesson-1-2", "compliance-vs-security"),
                ],
            ),
            module(
                "module-2",
                "classification",
                vec![
                    lesson("lesson-2-1", "sensitive-info-types"),
                    lesson("lesson-2-2", "trainable-classifiers"),
                ],
            ),
        ],
    }
}

fn session() -> CourseSession {
    CourseSession::new(course(), Box::new(MemoryStore::new()))
}

fn slugs(module: &str, lesson: &str) -> (ModuleSlug, LessonSlug) {
    (
        ModuleSlug::new(module).unwrap(),
        LessonSlug::new(lesson).unwrap(),
    )
}

#[test]
fn valid_navigation_round_trips() {
    let mut session = session();
    let (m, l) = slugs("introduction", "compliance-vs-security");
    assert!(session.set_current_lesson(&m, &l));
    let (module, lesson) = session.current().expect("selection set");
    assert_eq!(module.slug.as_str(), "introduction");
    assert_eq!(lesson.id.as_str(), "lesson-1-2");
}

#[test]
fn invalid_route_is_a_noop() {
    let mut session = session();
    let (m, l) = slugs("introduction", "what-is-purview");
    assert!(session.set_current_lesson(&m, &l));

    // Unknown module, unknown lesson, and a lesson slug that belongs to a
    // different module: none of them clear the previous selection.
    let (bad_m, bad_l) = slugs("no-such-module", "what-is-purview");
    assert!(!session.set_current_lesson(&bad_m, &bad_l));
    let (m2, wrong_l) = slugs("introduction", "sensitive-info-types");
    assert!(!session.set_current_lesson(&m2, &wrong_l));

    let (_, lesson) = session.current().expect("selection preserved");
    assert_eq!(lesson.id.as_str(), "lesson-1-1");
}

#[test]
fn no_selection_until_first_navigation() {
    let session = session();
    assert!(session.current().is_none());
    assert!(session.next_lesson().is_none());
    assert!(session.previous_lesson().is_none());
}

#[test]
fn completion_toggles_and_persists_whole_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = CourseSession::new(course(), Box::new(FileStore::new(dir.path())));
    let id = LessonId::new("lesson-1-1").unwrap();

    assert!(session.mark_lesson_complete(&id).unwrap());
    assert!(session.is_completed(&id));
    let raw = std::fs::read_to_string(dir.path().join("completedLessons.json")).unwrap();
    assert_eq!(raw, r#"["lesson-1-1"]"#);

    // Second call undoes the first: toggle, not set, semantics.
    assert!(!session.mark_lesson_complete(&id).unwrap());
    assert!(!session.is_completed(&id));
    let raw = std::fs::read_to_string(dir.path().join("completedLessons.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn completed_in_module_counts_only_that_module() {
    let mut session = session();
    session
        .mark_lesson_complete(&LessonId::new("lesson-1-1").unwrap())
        .unwrap();
    session
        .mark_lesson_complete(&LessonId::new("lesson-2-1").unwrap())
        .unwrap();
    let catalog = session.catalog().clone();
    assert_eq!(session.completed_in_module(&catalog.modules[0]), 1);
    assert_eq!(session.completed_in_module(&catalog.modules[1]), 1);
}

#[test]
fn adjacency_crosses_module_boundary() {
    let mut session = session();
    let (m, l) = slugs("introduction", "compliance-vs-security");
    session.set_current_lesson(&m, &l);
    let (next_module, next_lesson) = session.next_lesson().expect("next exists");
    assert_eq!(next_module.slug.as_str(), "classification");
    assert_eq!(next_lesson.slug.as_str(), "sensitive-info-types");

    let (prev_module, prev_lesson) = session.previous_lesson().expect("previous exists");
    assert_eq!(prev_module.slug.as_str(), "introduction");
    assert_eq!(prev_lesson.slug.as_str(), "what-is-purview");
}

#[test]
fn first_lesson_has_next_but_no_previous() {
    let mut session = session();
    let (m, l) = slugs("introduction", "what-is-purview");
    session.set_current_lesson(&m, &l);
    assert!(session.previous_lesson().is_none());
    let (_, next) = session.next_lesson().expect("next exists");
    assert_eq!(next.slug.as_str(), "compliance-vs-security");
}

#[test]
fn last_lesson_has_previous_but_no_next() {
    let mut session = session();
    let (m, l) = slugs("classification", "trainable-classifiers");
    session.set_current_lesson(&m, &l);
    assert!(session.next_lesson().is_none());
    assert!(session.previous_lesson().is_some());
}

#[test]
fn next_walk_visits_every_lesson_in_catalog_order() {
    let mut session = session();
    let (m, l) = slugs("introduction", "what-is-purview");
    session.set_current_lesson(&m, &l);

    let mut visited = vec![session.current().unwrap().1.id.as_str().to_string()];
    while let Some((module, lesson)) = session.next_lesson() {
        let pair = (module.slug.clone(), lesson.slug.clone());
        visited.push(lesson.id.as_str().to_string());
        assert!(session.set_current_lesson(&pair.0, &pair.1));
    }
    assert_eq!(
        visited,
        vec!["lesson-1-1", "lesson-1-2", "lesson-2-1", "lesson-2-2"]
    );
}

#[test]
fn state_survives_reload_from_same_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = CourseSession::new(course(), Box::new(FileStore::new(dir.path())));
        assert!(session.toggle_trainer_mode().unwrap());
        session
            .mark_lesson_complete(&LessonId::new("lesson-2-2").unwrap())
            .unwrap();
    }

    let reloaded = CourseSession::new(course(), Box::new(FileStore::new(dir.path())));
    assert!(reloaded.trainer_mode());
    assert!(reloaded.is_completed(&LessonId::new("lesson-2-2").unwrap()));
    // Selection is transient and never replayed.
    assert!(reloaded.current().is_none());
}

#[test]
fn trainer_mode_defaults_off_and_toggles() {
    let mut session = session();
    assert!(!session.trainer_mode());
    assert!(session.toggle_trainer_mode().unwrap());
    assert!(!session.toggle_trainer_mode().unwrap());
}

#[test]
fn corrupt_entries_default_silently() {
    let store = MemoryStore::new()
        .with_entry(COMPLETED_LESSONS_KEY, "{ definitely not an array")
        .with_entry(TRAINER_MODE_KEY, "\"yes\"");
    let session = CourseSession::new(course(), Box::new(store));
    assert!(session.completed_lessons().is_empty());
    assert!(!session.trainer_mode());
}
