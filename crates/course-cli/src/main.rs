//! Course Studio CLI.

use clap::{ColorChoice, Parser};
use course_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_check, run_complete, run_lessons, run_modules, run_next, run_open, run_overview, run_prev,
    run_progress, run_search, run_show, run_trainer,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Overview => run_overview(&cli),
        Command::Modules => run_modules(&cli),
        Command::Lessons { module } => run_lessons(&cli, module),
        Command::Show {
            module,
            lesson,
            trainer,
        } => run_show(&cli, module, lesson, *trainer),
        Command::Open { route, trainer } => run_open(&cli, route, *trainer),
        Command::Next { module, lesson } => run_next(&cli, module, lesson),
        Command::Prev { module, lesson } => run_prev(&cli, module, lesson),
        Command::Search { query } => run_search(&cli, query),
        Command::Complete { lesson_id } => run_complete(&cli, lesson_id),
        Command::Progress => run_progress(&cli),
        Command::Trainer => run_trainer(&cli),
        Command::Check => match run_check(&cli) {
            Ok(has_issues) => {
                std::process::exit(if has_issues { 1 } else { 0 });
            }
            Err(error) => Err(error),
        },
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
