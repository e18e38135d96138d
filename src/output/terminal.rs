//! Console output

use std::path::Path;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::{DiffResult, DiffStats};

use super::{OutputFormatter, RowFiles};

/// Plain-text summary with colored section headings
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_header(
        &self,
        writer: &mut dyn WriteColor,
        left_path: &Path,
        right_path: &Path,
    ) -> Result<()> {
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(
            writer,
            " xmldatadiff: {} ↔ {}",
            left_path.display(),
            right_path.display()
        )?;
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_heading(&self, writer: &mut dyn WriteColor, heading: &str, color: Color) -> Result<()> {
        writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(writer, "{}", heading)?;
        writer.reset()?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_section<I, S>(
        &self,
        writer: &mut dyn WriteColor,
        heading: &str,
        color: Color,
        names: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: std::fmt::Display,
    {
        let mut names = names.into_iter().peekable();
        if names.peek().is_none() {
            return Ok(());
        }

        self.write_heading(writer, heading, color)?;
        for name in names {
            writeln!(writer, "\t{}", name)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_row_file(
        &self,
        writer: &mut dyn WriteColor,
        side: &str,
        count: usize,
        path: Option<&Path>,
    ) -> Result<()> {
        if let Some(path) = path {
            writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
            write!(writer, "rows in {} file only:", side)?;
            writer.reset()?;
            writeln!(writer, " saved to file {} ({} rows)", path.display(), count)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        diff: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        row_files: &RowFiles,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_header(writer, left_path, right_path)?;

        if !diff.has_changes() {
            writeln!(writer, "No differences found.")?;
            return Ok(());
        }

        self.write_section(writer, "tables in left file only:", Color::Red, &diff.left.tables_only)?;
        self.write_section(writer, "tables in right file only:", Color::Green, &diff.right.tables_only)?;
        self.write_section(writer, "columns in left file only:", Color::Red, &diff.left.columns_only)?;
        self.write_section(writer, "columns in right file only:", Color::Green, &diff.right.columns_only)?;
        self.write_row_file(writer, "left", diff.left.missing_rows.len(), row_files.left.as_deref())?;
        self.write_row_file(writer, "right", diff.right.missing_rows.len(), row_files.right.as_deref())?;

        Ok(())
    }
}

/// Write counts only
pub fn write_stats(
    writer: &mut dyn WriteColor,
    stats: &DiffStats,
    left_path: &Path,
    right_path: &Path,
) -> Result<()> {
    writeln!(
        writer,
        "Left file:  {} ({} tables, {} rows)",
        left_path.display(),
        stats.left_table_count,
        stats.left_row_count
    )?;
    writeln!(
        writer,
        "Right file: {} ({} tables, {} rows)",
        right_path.display(),
        stats.right_table_count,
        stats.right_row_count
    )?;
    writeln!(writer)?;
    writeln!(writer, "Shared tables:   {}", stats.shared_tables)?;
    writeln!(writer, "Compared tables: {}", stats.compared_tables)?;
    writeln!(writer)?;
    writeln!(writer, "                left  right")?;
    writeln!(writer, "Tables only:   {:>5}  {:>5}", stats.tables_only_left, stats.tables_only_right)?;
    writeln!(writer, "Columns only:  {:>5}  {:>5}", stats.columns_only_left, stats.columns_only_right)?;
    writeln!(writer, "Rows only:     {:>5}  {:>5}", stats.rows_only_left, stats.rows_only_right)?;
    Ok(())
}
