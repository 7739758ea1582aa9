use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info};

use course_catalog::{load_course, load_default_course, summarize, validate};
use course_cli::render::{LessonView, lesson_page};
use course_model::{Course, LessonId, LessonRoute, LessonSlug, ModuleSlug};
use course_session::{CourseSession, search};
use course_store::FileStore;

use crate::cli::Cli;
use crate::summary::{
    align_column, apply_table_style, apply_wide_table_style, check_cell, dim_cell, header_cell,
    total_cell,
};

const PROGRESS_DIR_ENV: &str = "COURSE_PROGRESS_DIR";
const DEFAULT_PROGRESS_DIR: &str = ".course-studio";

fn load_catalog(cli: &Cli) -> Result<Course> {
    match &cli.catalog {
        Some(path) => {
            load_course(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => load_default_course().context("load catalog"),
    }
}

fn progress_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.progress_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var(PROGRESS_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from(DEFAULT_PROGRESS_DIR)
}

fn open_session(cli: &Cli) -> Result<CourseSession> {
    let catalog = load_catalog(cli)?;
    let dir = progress_dir(cli);
    debug!("progress directory: {}", dir.display());
    Ok(CourseSession::new(catalog, Box::new(FileStore::new(dir))))
}

fn parse_route_pair(module: &str, lesson: &str) -> Result<LessonRoute> {
    let module = ModuleSlug::new(module)?;
    let lesson = LessonSlug::new(lesson)?;
    Ok(LessonRoute::new(module, lesson))
}

pub fn run_overview(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    let course = session.catalog();

    println!("{} - {}", course.title, course.subtitle);
    println!(
        "Trainer: {} ({}) <{}>",
        course.trainer.name, course.trainer.title, course.trainer.email
    );
    if let Some(linkedin) = &course.trainer.linkedin {
        println!("         {linkedin}");
    }
    println!("Duration: {}", course.duration);

    print_string_list("Prerequisites", &course.prerequisites);
    print_string_list("What you will learn", &course.what_you_will_learn);
    print_string_list("Target audience", &course.target_audience);

    println!();
    print_module_table(&session);
    Ok(())
}

pub fn run_modules(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    print_module_table(&session);
    Ok(())
}

pub fn run_lessons(cli: &Cli, module: &str) -> Result<()> {
    let session = open_session(cli)?;
    let slug = ModuleSlug::new(module)?;
    let module = session
        .catalog()
        .module_by_slug(&slug)
        .ok_or_else(|| anyhow!("module not found: {slug}"))?;

    println!("{} - {}", module.title, module.description);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lesson"),
        header_cell("Title"),
        header_cell("Duration"),
        header_cell("Done"),
        header_cell("Id"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for lesson in &module.lessons {
        table.add_row(vec![
            Cell::new(lesson.slug.as_str()),
            Cell::new(&lesson.title),
            Cell::new(&lesson.duration),
            check_cell(session.is_completed(&lesson.id)),
            dim_cell(lesson.id.as_str()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(cli: &Cli, module: &str, lesson: &str, trainer: bool) -> Result<()> {
    let route = parse_route_pair(module, lesson)?;
    show_lesson(cli, &route, trainer)
}

pub fn run_open(cli: &Cli, route: &str, trainer: bool) -> Result<()> {
    let route: LessonRoute = route.parse()?;
    show_lesson(cli, &route, trainer)
}

fn show_lesson(cli: &Cli, route: &LessonRoute, trainer: bool) -> Result<()> {
    let mut session = open_session(cli)?;
    if !session.set_current_lesson(&route.module, &route.lesson) {
        return Err(anyhow!("lesson not found: {route}"));
    }

    let Some((module, lesson)) = session.current() else {
        return Err(anyhow!("lesson not found: {route}"));
    };
    let view = LessonView {
        module,
        lesson,
        completed: session.is_completed(&lesson.id),
        show_trainer_notes: trainer || session.trainer_mode(),
        previous: session
            .previous_lesson()
            .map(|(m, l)| LessonRoute::new(m.slug.clone(), l.slug.clone())),
        next: session
            .next_lesson()
            .map(|(m, l)| LessonRoute::new(m.slug.clone(), l.slug.clone())),
    };
    print!("{}", lesson_page(&view));
    Ok(())
}

pub fn run_next(cli: &Cli, module: &str, lesson: &str) -> Result<()> {
    let route = parse_route_pair(module, lesson)?;
    print_adjacent(cli, &route, Direction::Next)
}

pub fn run_prev(cli: &Cli, module: &str, lesson: &str) -> Result<()> {
    let route = parse_route_pair(module, lesson)?;
    print_adjacent(cli, &route, Direction::Previous)
}

enum Direction {
    Next,
    Previous,
}

fn print_adjacent(cli: &Cli, route: &LessonRoute, direction: Direction) -> Result<()> {
    let mut session = open_session(cli)?;
    if !session.set_current_lesson(&route.module, &route.lesson) {
        return Err(anyhow!("lesson not found: {route}"));
    }
    let adjacent = match direction {
        Direction::Next => session.next_lesson(),
        Direction::Previous => session.previous_lesson(),
    };
    match adjacent {
        Some((module, lesson)) => {
            let target = LessonRoute::new(module.slug.clone(), lesson.slug.clone());
            println!("{target}");
            println!("{} / {}", module.title, lesson.title);
        }
        None => match direction {
            Direction::Next => println!("(end of course)"),
            Direction::Previous => println!("(start of course)"),
        },
    }
    Ok(())
}

pub fn run_search(cli: &Cli, query: &str) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let hits = search(&catalog, query);
    info!("{} lesson(s) match {query:?}", hits.len());
    if hits.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Route"),
        header_cell("Module"),
        header_cell("Lesson"),
        header_cell("Duration"),
    ]);
    apply_table_style(&mut table);
    for hit in &hits {
        let route = LessonRoute::new(hit.module.slug.clone(), hit.lesson.slug.clone());
        table.add_row(vec![
            Cell::new(route.to_string()),
            Cell::new(&hit.module.title),
            Cell::new(&hit.lesson.title),
            Cell::new(&hit.lesson.duration),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_complete(cli: &Cli, lesson_id: &str) -> Result<()> {
    let mut session = open_session(cli)?;
    let id = LessonId::new(lesson_id)?;
    let known = session
        .catalog()
        .lessons()
        .any(|(_, lesson)| lesson.id == id);
    if !known {
        return Err(anyhow!("unknown lesson id: {id}"));
    }

    let now_complete = session.mark_lesson_complete(&id)?;
    if now_complete {
        println!("Marked complete: {id}");
    } else {
        println!("Completion cleared: {id}");
    }
    println!(
        "{} of {} lessons complete.",
        session.completed_lessons().len(),
        session.catalog().lesson_count()
    );
    Ok(())
}

pub fn run_progress(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    let course = session.catalog();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Module"),
        header_cell("Title"),
        header_cell("Completed"),
        header_cell("Lessons"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_completed = 0usize;
    for module in &course.modules {
        let completed = session.completed_in_module(module);
        total_completed += completed;
        table.add_row(vec![
            Cell::new(module.slug.as_str()),
            Cell::new(&module.title),
            Cell::new(completed),
            Cell::new(module.lessons.len()),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        total_cell("All modules"),
        Cell::new(total_completed),
        Cell::new(course.lesson_count()),
    ]);
    println!("{table}");
    println!(
        "Trainer mode: {}",
        if session.trainer_mode() { "on" } else { "off" }
    );
    Ok(())
}

pub fn run_trainer(cli: &Cli) -> Result<()> {
    let mut session = open_session(cli)?;
    let enabled = session.toggle_trainer_mode()?;
    println!("Trainer mode: {}", if enabled { "on" } else { "off" });
    Ok(())
}

/// Catalog authoring checks. Returns whether any issue was found.
pub fn run_check(cli: &Cli) -> Result<bool> {
    let catalog = load_catalog(cli)?;
    let issues = validate(&catalog);
    let summary = summarize(&catalog, &issues);
    println!(
        "{}: {} modules, {} lessons, {} issue(s)",
        summary.title, summary.module_count, summary.lesson_count, summary.issue_count
    );
    if issues.is_empty() {
        return Ok(false);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Location"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for issue in &issues {
        table.add_row(vec![
            Cell::new(issue.code.as_str()),
            match &issue.location {
                Some(location) => Cell::new(location),
                None => dim_cell("-"),
            },
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
    Ok(true)
}

fn print_module_table(session: &CourseSession) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Module"),
        header_cell("Title"),
        header_cell("Lessons"),
        header_cell("Done"),
        header_cell("Duration"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for module in &session.catalog().modules {
        table.add_row(vec![
            Cell::new(module.slug.as_str()),
            Cell::new(&module.title),
            Cell::new(module.lessons.len()),
            Cell::new(session.completed_in_module(module)),
            Cell::new(&module.duration),
        ]);
    }
    println!("{table}");
}

fn print_string_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for item in items {
        println!("  - {item}");
    }
}
