//! CSV export of an extraction result.
//!
//! The artifact is produced in memory. The web UI hands it to the browser
//! as a Blob download; the terminal UI writes it next to the user.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CSV_FILE_NAME, CSV_MIME};
use crate::error::ExportResult;
use crate::models::ExtractionResult;

/// Serialize the single-row table: header line, then one data line.
///
/// Cells follow [`crate::models::render_cell`]; lines end with `\n`.
/// A result without columns exports as an empty document.
pub fn to_csv(result: &ExtractionResult) -> ExportResult<String> {
    if result.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(result.columns())?;
    writer.write_record(result.row())?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// A downloadable CSV artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub content: String,
}

impl CsvDownload {
    pub fn from_result(result: &ExtractionResult) -> ExportResult<Self> {
        Ok(Self {
            file_name: CSV_FILE_NAME,
            mime: CSV_MIME,
            content: to_csv(result)?,
        })
    }

    /// Write the artifact into `dir` under its file name, replacing any previous export.
    pub fn write_to_dir(&self, dir: &Path) -> ExportResult<PathBuf> {
        let path = dir.join(self.file_name);
        fs::write(&path, self.content.as_bytes())?;
        tracing::info!(path = %path.display(), bytes = self.content.len(), "CSV exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(json: &str) -> ExtractionResult {
        ExtractionResult::from_json(json).unwrap()
    }

    #[test]
    fn test_widget_invoice_csv() {
        let r = result(r#"{"date": "2024-01-01", "description": "Widget", "tax_amount": 5.0}"#);
        assert_eq!(
            to_csv(&r).unwrap(),
            "date,description,tax_amount\n2024-01-01,Widget,5.0\n"
        );
    }

    #[test]
    fn test_cells_with_separators_are_quoted() {
        let r = result(r#"{"description": "Bolts, nuts", "note": "say \"hi\""}"#);
        assert_eq!(
            to_csv(&r).unwrap(),
            "description,note\n\"Bolts, nuts\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_utf8_is_kept() {
        let r = result(r#"{"description": "Café crème", "tax_amount": "€4,20"}"#);
        assert_eq!(
            to_csv(&r).unwrap(),
            "description,tax_amount\nCafé crème,\"€4,20\"\n"
        );
    }

    #[test]
    fn test_empty_result_exports_nothing() {
        assert_eq!(to_csv(&result("{}")).unwrap(), "");
    }

    #[test]
    fn test_download_artifact() {
        let r = result(r#"{"date": "2024-01-01"}"#);
        let download = CsvDownload::from_result(&r).unwrap();
        assert_eq!(download.file_name, "invoice_data.csv");
        assert_eq!(download.mime, "text/csv");
        assert_eq!(download.content, "date\n2024-01-01\n");

        let dir = tempfile::tempdir().unwrap();
        let path = download.write_to_dir(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("invoice_data.csv"));
        assert_eq!(fs::read_to_string(path).unwrap(), "date\n2024-01-01\n");
    }
}
