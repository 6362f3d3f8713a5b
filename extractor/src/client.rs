//! HTTP client for the extraction backend.
//!
//! One multipart POST per extraction, no retries, no timeout override:
//! the reqwest client defaults apply.
//!
//! ```rust,ignore
//! use invoice_extractor::{ExtractionClient, UploadedFile};
//!
//! let file = UploadedFile::from_path("invoice.pdf".as_ref())?;
//! let result = ExtractionClient::new().extract(&file).await?;
//! ```

use reqwest::multipart::{Form, Part};

use crate::config::{BACKEND_URL, FORM_FIELD};
use crate::error::ExtractResult;
use crate::models::{ExtractionResult, UploadedFile};

/// Client for the extraction endpoint.
#[derive(Clone, Debug)]
pub struct ExtractionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for ExtractionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionClient {
    /// Client for the configured [`BACKEND_URL`].
    pub fn new() -> Self {
        Self::with_endpoint(BACKEND_URL)
    }

    /// Client for another endpoint (local backends, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the file and interpret the answer.
    ///
    /// Any failure to build or send the request, or to read the body, is a
    /// transport error; a non-200 answer is a backend error.
    pub async fn extract(&self, file: &UploadedFile) -> ExtractResult<ExtractionResult> {
        tracing::info!(
            endpoint = %self.endpoint,
            file = %file.name(),
            bytes = file.len(),
            "Sending invoice for extraction"
        );

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.content_type())?;
        let form = Form::new().part(FORM_FIELD, part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "Backend answered");

        ExtractionResult::from_response(status, &body)
    }
}
