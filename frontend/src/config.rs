//! Application configuration.
//!
//! Centralized configuration for the Lexscan frontend. The backend URL is
//! taken from the `API_URL` variable at build time (`API_URL=... trunk build`),
//! everything else is fixed.

/// Backend URL used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Session storage key holding the serialized [`AnalysisResult`](crate::AnalysisResult).
pub const RESULT_STORAGE_KEY: &str = "analysisResult";

/// Route of the analysis results view.
pub const ANALYSIS_ROUTE: &str = "/analysis";

/// Extensions advertised by the file picker.
///
/// Only a hint for the browser dialog, nothing is validated client side.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.docx,.doc";

/// Maximum document size advertised to the user (in bytes).
///
/// 10 MB, display only.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Picker hint shown above the upload box.
pub fn file_hint() -> String {
    format!("Supported formats: PDF, DOCX | Max size: {}MB", MAX_FILE_SIZE / (1024 * 1024))
}

/// Backend API base URL.
pub fn api_base_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Full URL of the upload endpoint for a given backend base URL.
pub fn upload_url(base_url: &str) -> String {
    format!("{}/api/upload/", base_url.trim_end_matches('/'))
}
