//! CLI argument definitions for Course Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "course-studio",
    version,
    about = "Course Studio - Browse and deliver trainer-led courses",
    long_about = "Browse a training-course catalog from the terminal.\n\n\
                  Tracks per-user lesson completion and a trainer-mode flag across\n\
                  runs, searches lesson content, and checks catalog files for\n\
                  authoring mistakes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Catalog JSON file (default: the built-in course, or $COURSE_CATALOG).
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding persisted progress (default: .course-studio, or
    /// $COURSE_PROGRESS_DIR).
    #[arg(long = "progress-dir", value_name = "DIR", global = true)]
    pub progress_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the course overview: trainer, prerequisites, objectives, modules.
    Overview,

    /// List all modules.
    Modules,

    /// List the lessons of one module.
    Lessons {
        /// Module slug, as shown by `modules`.
        #[arg(value_name = "MODULE_SLUG")]
        module: String,
    },

    /// Show a lesson's full content.
    Show {
        /// Module slug.
        #[arg(value_name = "MODULE_SLUG")]
        module: String,

        /// Lesson slug within the module.
        #[arg(value_name = "LESSON_SLUG")]
        lesson: String,

        /// Include trainer notes even when trainer mode is off.
        #[arg(long = "trainer")]
        trainer: bool,
    },

    /// Show a lesson addressed by its /course/{module}/{lesson}/ route.
    Open {
        /// Lesson route, e.g. /course/introduction/what-is-purview/.
        #[arg(value_name = "ROUTE")]
        route: String,

        /// Include trainer notes even when trainer mode is off.
        #[arg(long = "trainer")]
        trainer: bool,
    },

    /// Print the lesson after the given one in course order.
    Next {
        #[arg(value_name = "MODULE_SLUG")]
        module: String,

        #[arg(value_name = "LESSON_SLUG")]
        lesson: String,
    },

    /// Print the lesson before the given one in course order.
    Prev {
        #[arg(value_name = "MODULE_SLUG")]
        module: String,

        #[arg(value_name = "LESSON_SLUG")]
        lesson: String,
    },

    /// Search lesson content for a phrase.
    Search {
        /// Matched case-insensitively against titles, explanations, key
        /// points, and why-it-matters text.
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Toggle a lesson's completion state.
    Complete {
        /// Lesson id, as shown by `lessons` and `show`.
        #[arg(value_name = "LESSON_ID")]
        lesson_id: String,
    },

    /// Show completion progress per module.
    Progress,

    /// Toggle trainer mode on or off.
    Trainer,

    /// Check a catalog for authoring mistakes.
    Check,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
