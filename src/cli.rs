// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `lynx-watcher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lynx-watcher",
    version,
    about = "Watch Magento source files and clear caches on change.",
    long_about = None
)]
pub struct CliArgs {
    /// Watch only this glob instead of the default + theme set.
    #[arg(long, short = 'p', value_name = "GLOB")]
    pub path: Option<String>,

    /// Cache types to clear, space-separated, passed verbatim to
    /// `bin/magento cache:clean`.
    #[arg(
        long,
        short = 'c',
        value_name = "TYPES",
        default_value = "block_html layout full_page"
    )]
    pub cache: String,

    /// Additional theme root directory to watch. Repeatable for projects
    /// with multiple themes; appended after auto-detected themes.
    #[arg(long, short = 't', value_name = "DIR")]
    pub theme: Vec<String>,

    /// Trailing-edge debounce in milliseconds: a burst of saves inside this
    /// window triggers a single cache clean.
    #[arg(long, value_name = "MS", default_value_t = 300)]
    pub debounce_ms: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LYNX_WATCHER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
