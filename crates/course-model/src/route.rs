use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::{LessonSlug, ModuleSlug};

/// The external addressing scheme for a lesson: `/course/{module}/{lesson}/`.
///
/// The two path segments are the only way a lesson is addressed from the
/// outside; an unresolvable route renders a not-found outcome, it never
/// mutates navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRoute {
    pub module: ModuleSlug,
    pub lesson: LessonSlug,
}

impl LessonRoute {
    pub fn new(module: ModuleSlug, lesson: LessonSlug) -> Self {
        Self { module, lesson }
    }
}

impl fmt::Display for LessonRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/course/{}/{}/", self.module, self.lesson)
    }
}

impl FromStr for LessonRoute {
    type Err = ModelError;

    /// Parse a route string. Leading and trailing slashes are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ModelError::InvalidRoute {
            route: s.to_string(),
            reason: reason.to_string(),
        };
        let segments: Vec<&str> = s
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        match segments.as_slice() {
            ["course", module, lesson] => Ok(Self {
                module: ModuleSlug::new(*module)
                    .map_err(|_| invalid("empty module segment"))?,
                lesson: LessonSlug::new(*lesson)
                    .map_err(|_| invalid("empty lesson segment"))?,
            }),
            [prefix, ..] if *prefix != "course" => Err(invalid("expected /course/ prefix")),
            _ => Err(invalid("expected /course/{module}/{lesson}/")),
        }
    }
}
