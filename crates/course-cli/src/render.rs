//! Plain-text rendering of lesson content.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use course_model::{Lesson, LessonRoute, Module};

/// Everything the lesson page needs beyond the lesson itself.
pub struct LessonView<'a> {
    pub module: &'a Module,
    pub lesson: &'a Lesson,
    pub completed: bool,
    pub show_trainer_notes: bool,
    pub previous: Option<LessonRoute>,
    pub next: Option<LessonRoute>,
}

pub fn lesson_page(view: &LessonView) -> String {
    let lesson = view.lesson;
    let mut page = String::new();

    let route = LessonRoute::new(view.module.slug.clone(), lesson.slug.clone());
    let _ = writeln!(page, "{} / {}", view.module.title, lesson.title);
    let _ = writeln!(page, "Route: {route}");
    let _ = writeln!(page, "Duration: {}", lesson.duration);
    let _ = writeln!(
        page,
        "Status: {} (id: {})",
        if view.completed { "completed" } else { "not completed" },
        lesson.id
    );

    for paragraph in &lesson.content.explanation {
        let _ = writeln!(page, "\n{paragraph}");
    }

    push_list(&mut page, "Key points", &lesson.content.key_points);

    if let Some(architecture) = &lesson.content.architecture {
        let _ = writeln!(page, "\n{}:", architecture.title);
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(100)
            .set_header(vec!["Step", "Title", "Description"]);
        for step in &architecture.steps {
            table.add_row(vec![
                step.step.to_string(),
                step.title.clone(),
                step.description.clone(),
            ]);
        }
        let _ = writeln!(page, "{table}");
    }

    if !lesson.content.why_it_matters.is_empty() {
        let _ = writeln!(page, "\nWhy it matters:\n{}", lesson.content.why_it_matters);
    }

    push_list(&mut page, "Common mistakes", &lesson.content.common_mistakes);
    push_list(&mut page, "Interview tips", &lesson.content.interview_tips);
    push_list(&mut page, "Exam tips", &lesson.content.exam_tips);

    if view.show_trainer_notes {
        let notes = &lesson.trainer_notes;
        let _ = writeln!(page, "\n=== Trainer notes ===");
        push_list(&mut page, "Talking points", &notes.talking_points);
        push_list(&mut page, "Real examples", &notes.real_examples);
        push_list(&mut page, "Questions to ask", &notes.questions_to_ask);
    }

    let _ = writeln!(page);
    match &view.previous {
        Some(previous) => {
            let _ = writeln!(page, "Previous: {previous}");
        }
        None => {
            let _ = writeln!(page, "Previous: (start of course)");
        }
    }
    match &view.next {
        Some(next) => {
            let _ = writeln!(page, "Next:     {next}");
        }
        None => {
            let _ = writeln!(page, "Next:     (end of course)");
        }
    }

    page
}

fn push_list(page: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(page, "\n{heading}:");
    for item in items {
        let _ = writeln!(page, "  - {item}");
    }
}
