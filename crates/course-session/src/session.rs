//! The session: single source of truth for where the learner is, what they
//! have completed, and whether trainer mode is on.
//!
//! An explicit object owned by the application entry point; callers hold a
//! reference, there is no ambient global. The completed set and
//! trainer-mode flag are replayed from the store at construction and
//! written back after every mutation. The current selection is transient
//! and re-derived from the requested route on each navigation.

use std::collections::BTreeSet;

use course_model::{Course, Lesson, LessonId, LessonSlug, Module, ModuleSlug};
use course_store::ProgressStore;
use tracing::{debug, warn};

use crate::error::{Result, SessionError};

/// Storage key for the serialized completed-lesson-id array.
pub const COMPLETED_LESSONS_KEY: &str = "completedLessons";
/// Storage key for the serialized trainer-mode boolean.
pub const TRAINER_MODE_KEY: &str = "trainerMode";

pub struct CourseSession {
    catalog: Course,
    store: Box<dyn ProgressStore>,
    completed: BTreeSet<LessonId>,
    trainer_mode: bool,
    /// Indices into the catalog (module, lesson). Never persisted.
    current: Option<(usize, usize)>,
}

impl CourseSession {
    /// Build a session over `catalog`, replaying persisted state from
    /// `store`. Absent or unparseable entries default to an empty set and
    /// trainer mode off; loading never fails.
    pub fn new(catalog: Course, store: Box<dyn ProgressStore>) -> Self {
        let completed = load_completed(store.as_ref());
        let trainer_mode = load_trainer_mode(store.as_ref());
        Self {
            catalog,
            store,
            completed,
            trainer_mode,
            current: None,
        }
    }

    pub fn catalog(&self) -> &Course {
        &self.catalog
    }

    /// The current (module, lesson) selection, if any navigation happened.
    pub fn current(&self) -> Option<(&Module, &Lesson)> {
        let (module_index, lesson_index) = self.current?;
        let module = self.catalog.modules.get(module_index)?;
        let lesson = module.lessons.get(lesson_index)?;
        Some((module, lesson))
    }

    /// Navigate to a lesson by slug pair. When either slug does not
    /// resolve, the call is a no-op and any prior selection stays intact;
    /// returns whether the selection changed so callers can render a
    /// not-found outcome.
    pub fn set_current_lesson(
        &mut self,
        module_slug: &ModuleSlug,
        lesson_slug: &LessonSlug,
    ) -> bool {
        let found = self.catalog.modules.iter().enumerate().find_map(
            |(module_index, module)| {
                if &module.slug != module_slug {
                    return None;
                }
                module
                    .lessons
                    .iter()
                    .position(|lesson| &lesson.slug == lesson_slug)
                    .map(|lesson_index| (module_index, lesson_index))
            },
        );
        match found {
            Some(indices) => {
                debug!("current lesson set to {}/{}", module_slug, lesson_slug);
                self.current = Some(indices);
                true
            }
            None => {
                debug!("route {}/{} does not resolve", module_slug, lesson_slug);
                false
            }
        }
    }

    pub fn trainer_mode(&self) -> bool {
        self.trainer_mode
    }

    /// Flip trainer mode and persist the new value immediately.
    pub fn toggle_trainer_mode(&mut self) -> Result<bool> {
        self.trainer_mode = !self.trainer_mode;
        let value =
            serde_json::to_string(&self.trainer_mode).map_err(SessionError::Serialize)?;
        self.store.save(TRAINER_MODE_KEY, &value)?;
        Ok(self.trainer_mode)
    }

    pub fn completed_lessons(&self) -> &BTreeSet<LessonId> {
        &self.completed
    }

    pub fn is_completed(&self, id: &LessonId) -> bool {
        self.completed.contains(id)
    }

    /// How many lessons of `module` are in the completed set.
    pub fn completed_in_module(&self, module: &Module) -> usize {
        module
            .lessons
            .iter()
            .filter(|lesson| self.completed.contains(&lesson.id))
            .count()
    }

    /// Toggle completion of a lesson id: present → removed, absent →
    /// added. Persists the full set after every change and returns whether
    /// the lesson is now complete.
    pub fn mark_lesson_complete(&mut self, id: &LessonId) -> Result<bool> {
        let now_complete = if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.clone());
            true
        };
        let value = serde_json::to_string(&self.completed).map_err(SessionError::Serialize)?;
        self.store.save(COMPLETED_LESSONS_KEY, &value)?;
        Ok(now_complete)
    }

    /// The lesson after the current one in catalog traversal order, or
    /// `None` at the end of the course or when nothing is selected.
    pub fn next_lesson(&self) -> Option<(&Module, &Lesson)> {
        let index = self.current_flat_index()?;
        self.catalog.lessons().nth(index + 1)
    }

    /// The lesson before the current one, or `None` at the start of the
    /// course or when nothing is selected.
    pub fn previous_lesson(&self) -> Option<(&Module, &Lesson)> {
        let index = self.current_flat_index()?;
        self.catalog.lessons().nth(index.checked_sub(1)?)
    }

    /// Position of the current lesson in the flattened catalog, located by
    /// lesson id.
    fn current_flat_index(&self) -> Option<usize> {
        let (_, current_lesson) = self.current()?;
        self.catalog
            .lessons()
            .position(|(_, lesson)| lesson.id == current_lesson.id)
    }
}

fn load_completed(store: &dyn ProgressStore) -> BTreeSet<LessonId> {
    match store.load(COMPLETED_LESSONS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("ignoring unparseable completed-lessons entry: {e}");
            BTreeSet::new()
        }),
        Ok(None) => BTreeSet::new(),
        Err(e) => {
            warn!("ignoring unreadable completed-lessons entry: {e}");
            BTreeSet::new()
        }
    }
}

fn load_trainer_mode(store: &dyn ProgressStore) -> bool {
    match store.load(TRAINER_MODE_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("ignoring unparseable trainer-mode entry: {e}");
            false
        }),
        Ok(None) => false,
        Err(e) => {
            warn!("ignoring unreadable trainer-mode entry: {e}");
            false
        }
    }
}
