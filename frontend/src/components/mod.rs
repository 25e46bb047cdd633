//! UI Components for the Lexscan application.
//!
//! # Pages
//! - [`UploadView`] - document selection and upload
//! - [`AnalysisView`] - summary and risks of the last analysis
//!
//! # Building blocks
//! - [`MessageBanner`] - success/error status line
//! - [`AnalyzingSpinner`] - progress indicator while the backend works

mod upload;
mod analysis;
mod message;
mod progress;

pub use upload::*;
pub use analysis::*;
pub use message::*;
pub use progress::*;
