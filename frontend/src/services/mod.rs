//! Backend and browser services.
//!
//! # Services
//!
//! - [`upload`] - document upload to the analysis backend
//! - [`storage`] - hand-off of the analysis result between views

pub mod upload;
pub mod storage;

pub use upload::*;
pub use storage::*;
