pub mod course;
pub mod error;
pub mod ids;
pub mod route;

pub use course::{
    ArchitectureDiagram, ArchitectureStep, Course, Lesson, LessonContent, Module, TrainerNotes,
    TrainerProfile,
};
pub use error::{ModelError, Result};
pub use ids::{LessonId, LessonSlug, ModuleSlug};
pub use route::LessonRoute;
