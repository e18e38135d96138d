//! JSON output format

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::diff::{DiffResult, DiffStats, DirectionDiff};

use super::{OutputFormatter, RowFiles};

/// JSON output formatter
#[derive(Debug)]
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonSide<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows_file: Option<String>,
    #[serde(flatten)]
    diff: &'a DirectionDiff,
}

#[derive(Serialize)]
struct JsonDiffOutput<'a> {
    left: JsonSide<'a>,
    right: JsonSide<'a>,
    stats: &'a DiffStats,
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        diff: &DiffResult,
        left_path: &Path,
        right_path: &Path,
        row_files: &RowFiles,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let output = JsonDiffOutput {
            left: JsonSide {
                file: left_path.display().to_string(),
                rows_file: row_files.left.as_ref().map(|p| p.display().to_string()),
                diff: &diff.left,
            },
            right: JsonSide {
                file: right_path.display().to_string(),
                rows_file: row_files.right.as_ref().map(|p| p.display().to_string()),
                diff: &diff.right,
            },
            stats: &diff.stats,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
