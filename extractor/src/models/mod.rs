//! Domain models for the extraction flow.
//!
//! - [`UploadedFile`] - Invoice bytes picked by the user, with its declared type
//! - [`ExtractionResult`] - Fields returned by the backend, as a single-row table
//!
//! File-type checks ([`is_allowed_file_name`], [`content_type_for`]) are plain
//! functions so the web UI can apply them to browser `File` handles too.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::config::ALLOWED_EXTENSIONS;
use crate::error::{ExtractError, ExtractResult, InputError, InputResult};

// =============================================================================
// File Types
// =============================================================================

/// Lowercased extension of a file name, without the dot.
pub fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// MIME type for an allowed extension.
pub fn content_type_for(name: &str) -> Option<&'static str> {
    match extension_of(name)?.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Whether the upload control would accept this file name.
pub fn is_allowed_file_name(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check a file name against the allow-list and return its MIME type.
pub fn check_file_name(name: &str) -> InputResult<&'static str> {
    let extension = extension_of(name).ok_or_else(|| InputError::MissingExtension(name.to_string()))?;
    content_type_for(name).ok_or(InputError::UnsupportedFileType { extension })
}

// =============================================================================
// Uploaded File
// =============================================================================

/// A file picked by the user for one extraction.
///
/// Lives only for the duration of the interaction; nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    content_type: &'static str,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// Wrap in-memory bytes. The name must carry an allowed extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> InputResult<Self> {
        let name = name.into();
        let content_type = check_file_name(&name)?;
        Ok(Self { name, content_type, bytes })
    }

    /// Read a file from disk. The extension is checked before any I/O.
    pub fn from_path(path: &Path) -> InputResult<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| InputError::MissingExtension(path.display().to_string()))?;
        let content_type = check_file_name(&name)?;
        let bytes = fs::read(path)?;

        tracing::debug!(file = %name, bytes = bytes.len(), content_type, "Loaded invoice file");

        Ok(Self { name, content_type, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// =============================================================================
// Extraction Result
// =============================================================================

/// Fields returned by the backend, in the order the backend sent them.
///
/// The key set is whatever the backend chooses to return; typically
/// `date`, `description` and `tax_amount`. Displayed and exported as a
/// table with exactly one row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractionResult {
    fields: Map<String, Value>,
}

impl ExtractionResult {
    /// Parse a response body. Anything but a JSON object is a transport error.
    pub fn from_json(body: &str) -> ExtractResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ExtractError::transport(format!("invalid JSON in response: {}", e)))?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ExtractError::transport(format!(
                "expected a JSON object in response, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Interpret an HTTP answer from the backend.
    ///
    /// Status 200 is parsed as the result; any other status becomes a
    /// backend error carrying the raw body.
    pub fn from_response(status: u16, body: &str) -> ExtractResult<Self> {
        if status != 200 {
            return Err(ExtractError::Backend {
                status,
                body: body.to_string(),
            });
        }
        Self::from_json(body)
    }

    /// Column names, in backend order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The single data row, rendered cell by cell.
    pub fn row(&self) -> Vec<String> {
        self.fields.values().map(render_cell).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Render one JSON value as a table/CSV cell.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
