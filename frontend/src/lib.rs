//! Lexscan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading legal documents and reading
//! back their analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /          UploadView                                       │
//! │             ├── upload box / remove file                     │
//! │             ├── MessageBanner                                │
//! │             └── analyze button + AnalyzingSpinner            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /analysis  AnalysisView (reads the ResultStore)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (AnalysisResult, UploadOutcome, AppError, etc.)
//! - [`state`] - Upload page state and rendering rules
//! - [`components`] - UI components (UploadView, AnalysisView, etc.)
//! - [`services`] - Backend upload and result hand-off

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    PickedFile,
    // Messages
    MessageKind, StatusMessage,
    // API
    AnalysisResult, UploadOutcome, DEFAULT_RISK, DEFAULT_SUMMARY,
    // Errors
    AppError, AppResult,
};

// State
pub use state::UploadState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    let store: SharedStore = Rc::new(SessionStore);
    let analysis_store = store.clone();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=move || view! { <UploadView store=store.clone()/> }/>
                    <Route path=ANALYSIS_ROUTE view=move || view! { <AnalysisView store=analysis_store.clone()/> }/>
                </Routes>
            </main>
        </Router>
    }
}
