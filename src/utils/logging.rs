// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored cli output helpers

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Message categories printed by the CLI next to summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> ColoredString {
        match self {
            Tone::Success => "✓".green().bold(),
            Tone::Error => "✗".red().bold(),
            Tone::Warning => "⚠".yellow().bold(),
            Tone::Info => "ℹ".blue().bold(),
        }
    }

    fn body(self, msg: &str) -> ColoredString {
        match self {
            Tone::Success => msg.green(),
            Tone::Error => msg.red(),
            Tone::Warning => msg.yellow(),
            Tone::Info => msg.normal(),
        }
    }

    pub fn format(self, msg: &str) -> String {
        format!("{} {}", self.marker(), self.body(msg))
    }
}

pub fn format_success(msg: &str) -> String {
    Tone::Success.format(msg)
}

pub fn format_error(msg: &str) -> String {
    Tone::Error.format(msg)
}

pub fn format_warning(msg: &str) -> String {
    Tone::Warning.format(msg)
}

pub fn format_info(msg: &str) -> String {
    Tone::Info.format(msg)
}
