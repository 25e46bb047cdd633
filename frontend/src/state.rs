//! State of the upload page.
//!
//! Everything the page renders is derived from [`UploadState`]. The
//! component only forwards DOM events and the upload future to it.

use crate::services::ResultStore;
use crate::{AppError, MessageKind, PickedFile, StatusMessage, UploadOutcome, ANALYSIS_ROUTE};

pub const MSG_NO_FILE_CHOSEN: &str = "Please select a file to upload.";
pub const MSG_NO_FILE_SELECTED: &str = "No file selected.";
pub const MSG_UPLOAD_REJECTED: &str = "Upload failed. Please try again.";
pub const MSG_UPLOAD_ERROR: &str = "An error occurred during upload.";

/// UI state of the upload page.
///
/// At most one file is held. `analyzing` is only true between
/// [`begin_analysis`](Self::begin_analysis) and
/// [`finish_analysis`](Self::finish_analysis).
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    selected_file: Option<F>,
    message: String,
    message_kind: MessageKind,
    analyzing: bool,
    show_reset: bool,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            message: String::new(),
            message_kind: MessageKind::None,
            analyzing: false,
            show_reset: false,
        }
    }
}

impl<F: PickedFile + Clone> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn status(&self) -> StatusMessage {
        StatusMessage {
            kind: self.message_kind,
            text: self.message.clone(),
        }
    }

    fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message_kind = kind;
        self.message = text.into();
    }

    fn clear_message(&mut self) {
        self.set_message(MessageKind::None, String::new());
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// The user clicked the upload box, the picker is about to open.
    pub fn request_file_dialog(&mut self) {
        self.clear_message();
    }

    /// The picker closed, with or without a file.
    pub fn choose_file(&mut self, file: Option<F>) {
        match file {
            Some(file) => {
                log::info!("📄 Selected \"{}\" ({} bytes)", file.file_name(), file.file_size());
                let text = format!("\"{}\" uploaded successfully.", file.file_name());
                self.selected_file = Some(file);
                self.set_message(MessageKind::Success, text);
                self.show_reset = true;
            }
            None => {
                self.selected_file = None;
                self.set_message(MessageKind::Error, MSG_NO_FILE_CHOSEN);
                self.show_reset = false;
            }
        }
    }

    /// Drop the selected file. The caller also clears the picker value.
    pub fn reset_selection(&mut self) {
        self.selected_file = None;
        self.clear_message();
        self.show_reset = false;
    }

    /// Start an analysis and return the file to upload.
    ///
    /// Without a file the error message is set and nothing should be sent.
    pub fn begin_analysis(&mut self) -> Result<F, AppError> {
        let Some(file) = self.selected_file.clone() else {
            self.set_message(MessageKind::Error, MSG_NO_FILE_SELECTED);
            return Err(AppError::NoFileSelected);
        };

        log::info!("📤 Uploading \"{}\" for analysis...", file.file_name());
        self.analyzing = true;
        Ok(file)
    }

    /// Apply the upload outcome.
    ///
    /// On success the result is persisted to `store` and the route to
    /// navigate to is returned. `analyzing` is cleared in every case.
    pub fn finish_analysis(&mut self, outcome: UploadOutcome, store: &dyn ResultStore) -> Option<&'static str> {
        let route = match outcome {
            UploadOutcome::Success(result) => match store.save(&result) {
                Ok(()) => {
                    log::info!("✅ Analysis ready: {} summary items, {} risks", result.summary.len(), result.risks.len());
                    Some(ANALYSIS_ROUTE)
                }
                Err(e) => {
                    log::error!("❌ Error uploading file: {}", e);
                    self.set_message(MessageKind::Error, MSG_UPLOAD_ERROR);
                    None
                }
            },
            UploadOutcome::Rejected { status } => {
                log::warn!("⚠️ Upload rejected by server ({})", status);
                self.set_message(MessageKind::Error, MSG_UPLOAD_REJECTED);
                None
            }
            UploadOutcome::Failed(e) => {
                log::error!("❌ Error uploading file: {}", e);
                self.set_message(MessageKind::Error, MSG_UPLOAD_ERROR);
                None
            }
        };

        self.analyzing = false;
        route
    }

    // -------------------------------------------------------------------------
    // Rendering rules
    // -------------------------------------------------------------------------

    /// Upload box is replaced by the file once one is selected.
    pub fn shows_upload_box(&self) -> bool {
        self.selected_file.is_none()
    }

    pub fn shows_reset_control(&self) -> bool {
        self.show_reset
    }

    pub fn shows_message(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn analyze_disabled(&self) -> bool {
        self.selected_file.is_none() || self.analyzing
    }

    pub fn shows_progress(&self) -> bool {
        self.analyzing
    }

    pub fn analyze_label(&self) -> &'static str {
        if self.analyzing {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }
}
