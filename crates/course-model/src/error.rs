use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid module slug: {0:?}")]
    InvalidModuleSlug(String),

    #[error("invalid lesson slug: {0:?}")]
    InvalidLessonSlug(String),

    #[error("invalid lesson id: {0:?}")]
    InvalidLessonId(String),

    #[error("invalid lesson route {route:?}: {reason}")]
    InvalidRoute { route: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
