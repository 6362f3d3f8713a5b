//! Application configuration.
//!
//! Everything here is fixed at build time. There is no config file and
//! no environment override.

/// Extraction backend endpoint.
///
/// Accepts a multipart POST and answers with a flat JSON object.
pub const BACKEND_URL: &str = "https://invoice-extractor-o6es.onrender.com/extract";

/// Multipart field carrying the invoice bytes.
pub const FORM_FIELD: &str = "invoice";

/// File extensions the upload control accepts (lowercase, no dot).
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Name of the exported CSV artifact.
pub const CSV_FILE_NAME: &str = "invoice_data.csv";

/// MIME type of the exported CSV artifact.
pub const CSV_MIME: &str = "text/csv";

/// Application name shown in window titles.
pub const APP_NAME: &str = "Invoice Extractor";

/// Page heading.
pub const APP_TITLE: &str = "📄 Free Invoice Data Extractor (AI Powered)";

/// Shown while no file is selected.
pub const IDLE_PROMPT: &str = "Please upload a PDF or image to begin.";

/// Shown while a request is in flight.
pub const PENDING_MESSAGE: &str = "Extracting using AI...";

/// Shown above the result table.
pub const SUCCESS_MESSAGE: &str = "✅ Extraction Complete!";
