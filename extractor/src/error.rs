//! Error types for the invoice extraction flow.
//!
//! - [`ExtractError`] - outcome of one extraction attempt (backend vs transport)
//! - [`InputError`] - loading a user-selected file
//! - [`ExportError`] - CSV serialization and writing
//! - [`CliError`] - top-level wrapper used by the terminal UI
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

use crate::config::ALLOWED_EXTENSIONS;

// =============================================================================
// Extraction Errors
// =============================================================================

/// Failure of a single extraction attempt.
///
/// The two variants stay separate: one is reported by the backend,
/// the other by the client or the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Backend reachable, answered with a non-200 status.
    #[error("Backend Error {status}: {body}")]
    Backend { status: u16, body: String },

    /// Request could not be sent, or the response could not be read/parsed.
    #[error("Failed to extract data: {0}")]
    Transport(String),
}

impl ExtractError {
    /// Build a transport error from anything displayable.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ExtractError::Transport(err.to_string())
    }
}

/// reqwest keeps the useful part (refused, DNS, TLS) in the source chain.
#[cfg(feature = "native")]
impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        let mut description = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        ExtractError::Transport(description)
    }
}

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while loading the file the user picked.
#[derive(Debug, Error)]
pub enum InputError {
    /// Extension outside the allow-list.
    #[error("Unsupported file type '.{extension}' (expected {expected})", expected = ALLOWED_EXTENSIONS.join(", "))]
    UnsupportedFileType { extension: String },

    /// File name has no extension at all.
    #[error("File '{0}' has no extension (expected {expected})", expected = ALLOWED_EXTENSIONS.join(", "))]
    MissingExtension(String),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while producing or writing the CSV artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writer produced bytes that are not UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Failed to write the file.
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level terminal UI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Prompt or terminal failure.
    #[cfg(feature = "native")]
    #[error("Terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for extraction attempts.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type for file loading.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for CSV export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
