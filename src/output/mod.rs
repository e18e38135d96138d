//! Output formatting for diff results

mod json;
mod terminal;
mod xml;

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::OutputFormat;
use crate::diff::DiffResult;

pub use json::JsonOutput;
pub use terminal::{write_stats, TerminalOutput};
pub use xml::{row_report, write_row_files, write_row_report, RowFiles};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render diff result to a writer
    fn render(
        &self,
        diff: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        row_files: &RowFiles,
        writer: &mut dyn WriteColor,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Stdout stream, colored only for terminal output on a tty
pub fn stdout_stream(format: OutputFormat) -> StandardStream {
    let choice = if format == OutputFormat::Terminal && std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Render diff result to stdout
pub fn render_to_stdout(
    diff: &DiffResult,
    left_path: &Path,
    right_path: &Path,
    row_files: &RowFiles,
    format: OutputFormat,
) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = stdout_stream(format);
    formatter.render(diff, left_path, right_path, row_files, &mut stdout)
}
