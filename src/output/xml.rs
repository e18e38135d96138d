//! Row report files: `<root><table name="T">expression</table>...</root>`

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::info;

use crate::config::Config;
use crate::diff::{DiffResult, MissingRow};
use crate::error::{CompareError, DocumentError, Result};

/// Paths of the row reports that were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFiles {
    pub left: Option<PathBuf>,
    pub right: Option<PathBuf>,
}

/// Serialize missing rows into a report document
pub fn row_report(rows: &[MissingRow]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("root")))?;

    for row in rows {
        let mut start = BytesStart::new("table");
        start.push_attribute(("name", row.table.as_str()));

        if row.expression.is_empty() {
            writer.write_event(Event::Empty(start))?;
            continue;
        }

        writer.write_event(Event::Start(start))?;
        // values are already markup, so the expression goes in as is
        writer.write_event(Event::Text(BytesText::from_escaped(row.expression.as_str())))?;
        writer.write_event(Event::End(BytesEnd::new("table")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("root")))?;
    Ok(writer.into_inner())
}

/// Write a row report to `path`
pub fn write_row_report(path: &Path, rows: &[MissingRow]) -> Result<()> {
    let report_error = |source: DocumentError| CompareError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let bytes = row_report(rows).map_err(|e| report_error(DocumentError::Xml(e)))?;
    fs::write(path, bytes).map_err(|e| report_error(DocumentError::Io(e)))?;

    info!(file = %path.display(), rows = rows.len(), "wrote row report");
    Ok(())
}

/// Write one report per direction that has missing rows
pub fn write_row_files(diff: &DiffResult, config: &Config) -> Result<RowFiles> {
    let mut files = RowFiles::default();

    if !diff.left.missing_rows.is_empty() {
        let path = config.left_rows_path();
        write_row_report(&path, &diff.left.missing_rows)?;
        files.left = Some(path);
    }

    if !diff.right.missing_rows.is_empty() {
        let path = config.right_rows_path();
        write_row_report(&path, &diff.right.missing_rows)?;
        files.right = Some(path);
    }

    Ok(files)
}
