//! # Invoice Extractor - upload, extract, display, export
//!
//! Sends one invoice (PDF or image) to a remote extraction backend and turns
//! the returned JSON object into a single-row table with a CSV export.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ UploadedFile│────▶│   Client    │────▶│ Extraction  │────▶│  Table/CSV  │
//! │ (pdf/jpg/…) │     │ (multipart) │     │   Result    │     │  download   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        └──────────────── driven by flow::Flow ─────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoice_extractor::{ExtractionClient, Flow, UploadedFile};
//!
//! let mut flow = Flow::new();
//! flow.select_file(UploadedFile::from_path("invoice.pdf".as_ref())?);
//! if let Some(file) = flow.trigger() {
//!     let outcome = ExtractionClient::new().extract(file).await;
//!     flow.complete(outcome);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Build-time configuration
//! - [`models`] - UploadedFile, ExtractionResult
//! - [`flow`] - Upload-extract-display state machine
//! - [`export`] - CSV artifact
//! - [`table`] - Text rendering of the result
//! - `client` - reqwest client (feature `native`)

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Interaction
pub mod flow;

// Output
pub mod export;
pub mod table;

// HTTP client
#[cfg(feature = "native")]
pub mod client;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    CliError, CliResult, ExportError, ExportResult, ExtractError, ExtractResult, InputError,
    InputResult,
};

pub use models::{
    check_file_name, content_type_for, extension_of, is_allowed_file_name, render_cell,
    ExtractionResult, UploadedFile,
};

pub use flow::{Flow, FlowState, Phase};

pub use export::{to_csv, CsvDownload};

pub use table::render_table;

#[cfg(feature = "native")]
pub use client::ExtractionClient;
