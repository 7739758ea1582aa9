use std::fs;
use std::path::{Path, PathBuf};

use course_model::Course;

use crate::error::CatalogError;

/// Environment variable that substitutes a catalog file for the embedded one.
pub const CATALOG_ENV_VAR: &str = "COURSE_CATALOG";

/// The default course content, compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/purview-course.json");
const EMBEDDED_CATALOG_NAME: &str = "data/purview-course.json";

/// Load the default catalog: the `COURSE_CATALOG` file when the variable is
/// set, the embedded course otherwise.
pub fn load_default_course() -> Result<Course, CatalogError> {
    if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
        return load_course(Path::new(&path));
    }
    load_embedded_course()
}

/// Parse the compiled-in course content.
pub fn load_embedded_course() -> Result<Course, CatalogError> {
    serde_json::from_str(EMBEDDED_CATALOG)
        .map_err(|e| CatalogError::parse(PathBuf::from(EMBEDDED_CATALOG_NAME), e))
}

/// Load a catalog from a JSON file on disk.
pub fn load_course(path: &Path) -> Result<Course, CatalogError> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CatalogError::parse(path, e))
}
