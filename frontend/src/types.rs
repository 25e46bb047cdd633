//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the document picked by the user
//! - **Message Types** - status banner shown under the upload box
//! - **API Types** - analysis result and upload outcome
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// A document handed over by the browser file picker.
///
/// The upload state only needs a name and a size, which keeps it usable
/// outside the browser.
pub trait PickedFile {
    /// File name as reported by the picker.
    fn file_name(&self) -> String;
    /// Size in bytes.
    fn file_size(&self) -> f64;
}

impl PickedFile for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }

    fn file_size(&self) -> f64 {
        web_sys::Blob::size(self)
    }
}

// =============================================================================
// Message Types
// =============================================================================

/// Kind of the status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    /// No message styling
    #[default]
    None,
    /// Positive feedback (file selected)
    Success,
    /// Something went wrong
    Error,
}

impl MessageKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::None => "",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Text shown in the message banner together with its kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    /// The banner is only rendered for a non-empty text.
    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Placeholder used when the backend returns no summary.
pub const DEFAULT_SUMMARY: &str = "No summary available";

/// Placeholder used when the backend returns no risks.
pub const DEFAULT_RISK: &str = "No risks identified";

/// Normalized analysis handed to the results view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Summary paragraphs, in order
    pub summary: Vec<String>,
    /// Identified risks, in order
    pub risks: Vec<String>,
    /// Reference to the generated report, passed through untouched.
    /// `Some(Value::Null)` when the backend sent `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_file: Option<Value>,
}

impl AnalysisResult {
    /// Build the result from a successful `/api/upload/` body.
    ///
    /// Expects `{ "data": { "summary"?, "risks"?, "pdf_file"? } }`. Missing,
    /// null, non-array and empty lists fall back to a single placeholder
    /// entry. A body without the `data` object is rejected.
    pub fn from_response(body: &Value) -> AppResult<Self> {
        let data = body
            .get("data")
            .filter(|data| data.is_object())
            .ok_or_else(|| AppError::Parse("missing `data` object".to_string()))?;

        // An explicit null is kept, only an absent key stays absent
        let pdf_file = data.get("pdf_file").cloned();

        Ok(Self {
            summary: string_list(data.get("summary"), DEFAULT_SUMMARY),
            risks: string_list(data.get("risks"), DEFAULT_RISK),
            pdf_file,
        })
    }

    /// Report reference as display text.
    pub fn report_label(&self) -> Option<String> {
        self.pdf_file.as_ref().filter(|v| !v.is_null()).map(|v| match v.as_str() {
            Some(s) => s.to_string(),
            None => v.to_string(),
        })
    }
}

fn string_list(value: Option<&Value>, fallback: &str) -> Vec<String> {
    let items: Vec<String> = value
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .map(|item| match item.as_str() {
                    Some(s) => s.to_string(),
                    None => item.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    if items.is_empty() {
        vec![fallback.to_string()]
    } else {
        items
    }
}

/// Result of one upload attempt.
#[derive(Clone, Debug)]
pub enum UploadOutcome {
    /// 2xx with a usable body.
    Success(AnalysisResult),
    /// The server answered with a non-2xx status.
    Rejected { status: u16 },
    /// The request never completed or the body could not be read.
    Failed(AppError),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Analyze was triggered without a document.
    #[error("No file selected")]
    NoFileSelected,

    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Network/HTTP error.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The response body is not what we expect.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Session storage unavailable or rejected the write.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_from_full_response() {
        let body = json!({
            "data": {
                "summary": ["Lease agreement between two parties", "Term of 3 years"],
                "risks": ["Automatic renewal clause"],
                "pdf_file": "reports/lease.pdf"
            }
        });

        let result = AnalysisResult::from_response(&body).unwrap();
        assert_eq!(result.summary.len(), 2);
        assert_eq!(result.risks, vec!["Automatic renewal clause"]);
        assert_eq!(result.pdf_file, Some(json!("reports/lease.pdf")));
        assert_eq!(result.report_label().as_deref(), Some("reports/lease.pdf"));
    }

    #[test]
    fn test_empty_lists_fall_back() {
        let body = json!({ "data": { "summary": ["s1"], "risks": [], "pdf_file": "r.pdf" } });

        let result = AnalysisResult::from_response(&body).unwrap();
        assert_eq!(result.summary, vec!["s1"]);
        assert_eq!(result.risks, vec![DEFAULT_RISK]);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let body = json!({ "data": { "summary": null } });

        let result = AnalysisResult::from_response(&body).unwrap();
        assert_eq!(result.summary, vec![DEFAULT_SUMMARY]);
        assert_eq!(result.risks, vec![DEFAULT_RISK]);
        assert_eq!(result.pdf_file, None);
        assert_eq!(result.report_label(), None);
    }

    #[test]
    fn test_null_report_is_kept() {
        let body = json!({ "data": { "summary": ["s1"], "pdf_file": null } });

        let result = AnalysisResult::from_response(&body).unwrap();
        assert_eq!(result.pdf_file, Some(Value::Null));
        assert_eq!(result.report_label(), None);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "summary": ["s1"], "risks": ["No risks identified"], "pdf_file": null })
        );
    }

    #[test]
    fn test_non_array_lists_fall_back() {
        let body = json!({ "data": { "summary": "plain text", "risks": { "level": "high" } } });

        let result = AnalysisResult::from_response(&body).unwrap();
        assert_eq!(result.summary, vec![DEFAULT_SUMMARY]);
        assert_eq!(result.risks, vec![DEFAULT_RISK]);
    }

    #[test]
    fn test_missing_data_object_is_parse_error() {
        let result = AnalysisResult::from_response(&json!({ "summary": ["s1"] }));
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_serialization_keys() {
        let result = AnalysisResult {
            summary: vec!["s1".to_string()],
            risks: vec![DEFAULT_RISK.to_string()],
            pdf_file: Some(json!("r.pdf")),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "summary": ["s1"], "risks": ["No risks identified"], "pdf_file": "r.pdf" })
        );

        // Absent report is left out, like the browser's JSON.stringify does
        let result = AnalysisResult { pdf_file: None, ..result };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("pdf_file"));
    }

    #[test]
    fn test_non_string_report_label() {
        let body = json!({ "data": { "pdf_file": { "id": 42 } } });
        let result = AnalysisResult::from_response(&body).unwrap();
        assert_eq!(result.report_label().as_deref(), Some(r#"{"id":42}"#));
    }

    #[test]
    fn test_message_kind_css() {
        assert_eq!(MessageKind::None.css_class(), "");
        assert_eq!(MessageKind::Error.css_class(), "error");
        assert!(!StatusMessage::default().is_visible());
    }
}
