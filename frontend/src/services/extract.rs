//! HTTP service sending the invoice to the extraction backend.

use gloo_net::http::Request;
use invoice_extractor::{ExtractError, ExtractResult, ExtractionResult};
use web_sys::{File, FormData};

use crate::config::FORM_FIELD;

/// Upload the file as the `invoice` multipart field and interpret the answer.
///
/// Failures before a status is known are transport errors; the status and
/// body are then handed to [`ExtractionResult::from_response`].
pub async fn extract_invoice(file: &File, endpoint: &str) -> ExtractResult<ExtractionResult> {
    let form_data = FormData::new()
        .map_err(|e| ExtractError::transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(FORM_FIELD, file, &file.name())
        .map_err(|e| ExtractError::transport(format!("Failed to append file: {:?}", e)))?;

    log::info!("📤 Sending {} ({} bytes) to {}", file.name(), file.size(), endpoint);

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(ExtractError::transport)?
        .send()
        .await
        .map_err(ExtractError::transport)?;

    let status = response.status();
    let body = response.text().await.map_err(ExtractError::transport)?;
    log::debug!("Backend answered {} ({} bytes)", status, body.len());

    ExtractionResult::from_response(status, &body)
}
