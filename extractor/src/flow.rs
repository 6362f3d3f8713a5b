//! Upload-extract-display state machine.
//!
//! ```text
//! Idle ──select──▶ FileSelected ──trigger──▶ Requesting ──complete──▶ Success
//!                       ▲                        ▲                    Failed (backend | transport)
//!                       └──select (new file)─────┴──trigger (same file)──┘
//! ```
//!
//! The state is one explicit value owned by whoever drives the
//! interaction. It is generic over the file handle so the terminal UI can
//! hold an [`UploadedFile`](crate::UploadedFile) and the web UI a browser `File`.
//! The machine itself performs no I/O: [`Flow::trigger`] hands out the file
//! to send and [`Flow::complete`] takes the outcome back.

use std::borrow::Cow;
use std::mem;

use crate::config::{IDLE_PROMPT, PENDING_MESSAGE, SUCCESS_MESSAGE};
use crate::error::{ExtractError, ExtractResult, InputResult};
use crate::export::CsvDownload;
use crate::models::{check_file_name, ExtractionResult};

/// Current state of the interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowState<F> {
    /// No file selected.
    Idle,
    /// File selected, nothing sent yet.
    FileSelected(F),
    /// Request in flight for this file.
    Requesting(F),
    /// Last attempt succeeded.
    Success {
        file: F,
        result: ExtractionResult,
        download: CsvDownload,
    },
    /// Last attempt failed.
    Failed { file: F, error: ExtractError },
}

/// Flat view of [`FlowState`], without payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Requesting,
    Success,
    BackendError,
    TransportError,
}

/// Driver around a [`FlowState`].
#[derive(Clone, Debug, PartialEq)]
pub struct Flow<F> {
    state: FlowState<F>,
}

impl<F> Default for Flow<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Flow<F> {
    pub fn new() -> Self {
        Self { state: FlowState::Idle }
    }

    pub fn state(&self) -> &FlowState<F> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            FlowState::Idle => Phase::Idle,
            FlowState::FileSelected(_) => Phase::FileSelected,
            FlowState::Requesting(_) => Phase::Requesting,
            FlowState::Success { .. } => Phase::Success,
            FlowState::Failed { error: ExtractError::Backend { .. }, .. } => Phase::BackendError,
            FlowState::Failed { error: ExtractError::Transport(_), .. } => Phase::TransportError,
        }
    }

    /// Select a file, dropping any previous result or error.
    ///
    /// Ignored while a request is in flight. Returns whether the file was taken.
    pub fn select_file(&mut self, file: F) -> bool {
        if self.is_requesting() {
            tracing::debug!("File selection ignored: request in flight");
            return false;
        }
        self.state = FlowState::FileSelected(file);
        true
    }

    /// Select a file after checking `name` against the allow-list.
    ///
    /// A rejected name leaves nothing selected (idle), so no request can be
    /// triggered for it. A request in flight is never disturbed.
    pub fn select_checked(&mut self, name: &str, file: F) -> InputResult<bool> {
        if let Err(err) = check_file_name(name) {
            tracing::warn!(file = name, error = %err, "File rejected");
            self.clear();
            return Err(err);
        }
        Ok(self.select_file(file))
    }

    /// Forget the selected file and go back to idle.
    pub fn clear(&mut self) {
        if !self.is_requesting() {
            self.state = FlowState::Idle;
        }
    }

    /// Start an extraction and return the file to send.
    ///
    /// Works from `FileSelected` and from any finished attempt on the same
    /// file. Returns `None`, and sends nothing, when idle or already requesting.
    pub fn trigger(&mut self) -> Option<&F> {
        match mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::FileSelected(file)
            | FlowState::Success { file, .. }
            | FlowState::Failed { file, .. } => {
                self.state = FlowState::Requesting(file);
                self.file()
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Record the outcome of the request started by [`Flow::trigger`].
    ///
    /// On success the CSV artifact is produced right away; if that fails the
    /// attempt counts as a transport failure. Ignored with no request in flight.
    pub fn complete(&mut self, outcome: ExtractResult<ExtractionResult>) -> Phase {
        self.state = match mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::Requesting(file) => {
                let outcome = outcome.and_then(|result| {
                    CsvDownload::from_result(&result)
                        .map(|download| (result, download))
                        .map_err(ExtractError::transport)
                });
                match outcome {
                    Ok((result, download)) => {
                        tracing::info!(columns = result.len(), "Extraction complete");
                        FlowState::Success { file, result, download }
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "Extraction failed");
                        FlowState::Failed { file, error }
                    }
                }
            }
            other => {
                tracing::warn!("Completion ignored: no request in flight");
                other
            }
        };
        self.phase()
    }

    pub fn file(&self) -> Option<&F> {
        match &self.state {
            FlowState::Idle => None,
            FlowState::FileSelected(file)
            | FlowState::Requesting(file)
            | FlowState::Success { file, .. }
            | FlowState::Failed { file, .. } => Some(file),
        }
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        match &self.state {
            FlowState::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    /// CSV artifact, only offered after a successful extraction.
    pub fn download(&self) -> Option<&CsvDownload> {
        match &self.state {
            FlowState::Success { download, .. } => Some(download),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        match &self.state {
            FlowState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, FlowState::Requesting(_))
    }

    /// Whether the extract control should be offered.
    pub fn can_extract(&self) -> bool {
        matches!(
            self.state,
            FlowState::FileSelected(_) | FlowState::Success { .. } | FlowState::Failed { .. }
        )
    }

    /// Status line for the current state, if any.
    pub fn status_message(&self) -> Option<Cow<'static, str>> {
        match &self.state {
            FlowState::Idle => Some(Cow::Borrowed(IDLE_PROMPT)),
            FlowState::FileSelected(_) => None,
            FlowState::Requesting(_) => Some(Cow::Borrowed(PENDING_MESSAGE)),
            FlowState::Success { .. } => Some(Cow::Borrowed(SUCCESS_MESSAGE)),
            FlowState::Failed { error, .. } => Some(Cow::Owned(error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    const WIDGET: &str = r#"{"date": "2024-01-01", "description": "Widget", "tax_amount": 5.0}"#;

    fn widget() -> ExtractResult<ExtractionResult> {
        ExtractionResult::from_response(200, WIDGET)
    }

    #[test]
    fn test_idle_offers_nothing() {
        let mut flow: Flow<&str> = Flow::new();
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(!flow.can_extract());
        assert!(flow.trigger().is_none());
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.status_message().as_deref(), Some(IDLE_PROMPT));
    }

    #[test]
    fn test_selection_does_not_request() {
        let mut flow = Flow::new();
        assert!(flow.select_file("invoice.pdf"));
        assert_eq!(flow.phase(), Phase::FileSelected);
        assert!(flow.can_extract());
        assert!(flow.status_message().is_none());
    }

    #[test]
    fn test_success_path() {
        let mut flow = Flow::new();
        flow.select_file("invoice.pdf");
        assert_eq!(flow.trigger(), Some(&"invoice.pdf"));
        assert!(flow.is_requesting());
        assert_eq!(flow.status_message().as_deref(), Some(PENDING_MESSAGE));

        assert_eq!(flow.complete(widget()), Phase::Success);
        let result = flow.result().unwrap();
        assert_eq!(result.columns().collect::<Vec<_>>(), vec!["date", "description", "tax_amount"]);
        assert_eq!(result.row(), vec!["2024-01-01", "Widget", "5.0"]);

        let download = flow.download().unwrap();
        assert_eq!(download.file_name, "invoice_data.csv");
        assert_eq!(download.content, "date,description,tax_amount\n2024-01-01,Widget,5.0\n");
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_backend_error_shows_no_table() {
        let mut flow = Flow::new();
        flow.select_file("invoice.pdf");
        flow.trigger();
        let phase = flow.complete(ExtractionResult::from_response(500, "internal error"));

        assert_eq!(phase, Phase::BackendError);
        assert!(flow.result().is_none());
        assert!(flow.download().is_none());
        let message = flow.status_message().unwrap();
        assert!(message.contains("500"));
        assert!(message.contains("internal error"));
    }

    #[test]
    fn test_transport_error_shows_no_table() {
        let mut flow = Flow::new();
        flow.select_file("invoice.pdf");
        flow.trigger();
        let phase = flow.complete(Err(ExtractError::transport("connection refused")));

        assert_eq!(phase, Phase::TransportError);
        assert!(flow.result().is_none());
        assert!(flow.download().is_none());
        assert!(flow.status_message().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_only_one_request_at_a_time() {
        let mut flow = Flow::new();
        flow.select_file("a.pdf");
        assert!(flow.trigger().is_some());
        assert!(flow.trigger().is_none());
        assert!(!flow.select_file("b.pdf"));
        assert_eq!(flow.file(), Some(&"a.pdf"));
    }

    #[test]
    fn test_retrigger_after_failure_starts_fresh_request() {
        let mut flow = Flow::new();
        flow.select_file("a.pdf");
        flow.trigger();
        flow.complete(Err(ExtractError::transport("timeout")));

        assert!(flow.can_extract());
        assert_eq!(flow.trigger(), Some(&"a.pdf"));
        assert!(flow.error().is_none());
        assert_eq!(flow.complete(widget()), Phase::Success);
    }

    #[test]
    fn test_new_file_replaces_result() {
        let mut flow = Flow::new();
        flow.select_file("a.pdf");
        flow.trigger();
        flow.complete(widget());

        assert!(flow.select_file("b.png"));
        assert_eq!(flow.phase(), Phase::FileSelected);
        assert!(flow.result().is_none());
        assert!(flow.download().is_none());
        assert_eq!(flow.file(), Some(&"b.png"));
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut flow: Flow<&str> = Flow::new();
        assert_eq!(flow.complete(widget()), Phase::Idle);

        flow.select_file("a.pdf");
        assert_eq!(flow.complete(widget()), Phase::FileSelected);
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut flow = Flow::new();
        flow.select_file("a.pdf");
        flow.clear();
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(flow.file().is_none());
    }

    #[test]
    fn test_disallowed_file_is_not_selected() {
        let mut flow = Flow::new();
        let err = flow.select_checked("invoice.docx", "invoice.docx").unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFileType { ref extension } if extension == "docx"));
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(!flow.can_extract());
        assert!(flow.trigger().is_none());
        assert_eq!(flow.phase(), Phase::Idle);
    }

    #[test]
    fn test_rejected_file_drops_previous_selection() {
        let mut flow = Flow::new();
        assert!(flow.select_checked("a.pdf", "a.pdf").unwrap());
        assert!(flow.select_checked("notes", "notes").is_err());
        assert!(flow.file().is_none());
        assert!(flow.trigger().is_none());
    }

    #[test]
    fn test_rejected_file_leaves_request_in_flight() {
        let mut flow = Flow::new();
        flow.select_checked("scan.JPG", "scan.JPG").unwrap();
        flow.trigger();
        assert!(flow.select_checked("evil.exe", "evil.exe").is_err());
        assert!(flow.is_requesting());
        assert_eq!(flow.complete(widget()), Phase::Success);
    }
}
