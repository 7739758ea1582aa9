use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] course_store::StoreError),

    #[error("failed to serialize progress state")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
