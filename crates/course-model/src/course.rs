use serde::{Deserialize, Serialize};

use crate::ids::{LessonId, LessonSlug, ModuleSlug};

/// The full course catalog: immutable content tree, constructed once at
/// startup and only ever read after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub subtitle: String,
    pub trainer: TrainerProfile,
    pub duration: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub what_you_will_learn: Vec<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub slug: ModuleSlug,
    pub description: String,
    /// Presentation-only glyph tag (e.g. "Shield"); never interpreted here.
    pub icon: String,
    pub duration: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub slug: LessonSlug,
    pub duration: String,
    pub content: LessonContent,
    pub trainer_notes: TrainerNotes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub explanation: Vec<String>,
    pub key_points: Vec<String>,
    pub architecture: Option<ArchitectureDiagram>,
    pub why_it_matters: String,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub interview_tips: Vec<String>,
    #[serde(default)]
    pub exam_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureDiagram {
    pub title: String,
    pub steps: Vec<ArchitectureStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

/// Trainer-facing notes shown only when trainer mode is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerNotes {
    pub talking_points: Vec<String>,
    pub real_examples: Vec<String>,
    pub questions_to_ask: Vec<String>,
}

impl Course {
    pub fn module_by_slug(&self, slug: &ModuleSlug) -> Option<&Module> {
        self.modules.iter().find(|module| &module.slug == slug)
    }

    /// Resolve a (module slug, lesson slug) pair to catalog entries.
    pub fn resolve(
        &self,
        module_slug: &ModuleSlug,
        lesson_slug: &LessonSlug,
    ) -> Option<(&Module, &Lesson)> {
        let module = self.module_by_slug(module_slug)?;
        let lesson = module.lesson_by_slug(lesson_slug)?;
        Some((module, lesson))
    }

    /// All lessons in catalog traversal order: modules in declared order,
    /// lessons within each module in declared order.
    pub fn lessons(&self) -> impl Iterator<Item = (&Module, &Lesson)> {
        self.modules
            .iter()
            .flat_map(|module| module.lessons.iter().map(move |lesson| (module, lesson)))
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|module| module.lessons.len()).sum()
    }
}

impl Module {
    pub fn lesson_by_slug(&self, slug: &LessonSlug) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.slug == slug)
    }
}
