#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod validate;

pub use crate::error::CatalogError;
pub use crate::loader::{CATALOG_ENV_VAR, load_course, load_default_course, load_embedded_course};
pub use crate::validate::{CatalogIssue, CatalogSummary, IssueCode, summarize, validate};
