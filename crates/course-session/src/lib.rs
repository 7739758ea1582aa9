pub mod error;
pub mod search;
pub mod session;

pub use error::{Result, SessionError};
pub use search::{SearchHit, search};
pub use session::{COMPLETED_LESSONS_KEY, CourseSession, TRAINER_MODE_KEY};
