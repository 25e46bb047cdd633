//! Hand-off of the analysis result to the results view.
//!
//! The upload view writes, the analysis view reads. Both go through
//! [`ResultStore`] so the dependency is passed in explicitly.

use std::rc::Rc;

use crate::{AnalysisResult, AppError, AppResult, RESULT_STORAGE_KEY};

/// Storage for the latest analysis result.
pub trait ResultStore {
    /// Overwrite the stored result.
    fn save(&self, result: &AnalysisResult) -> AppResult<()>;
    /// Read the stored result, `None` if nothing was written yet.
    fn load(&self) -> AppResult<Option<AnalysisResult>>;
}

/// Store shared between views.
pub type SharedStore = Rc<dyn ResultStore>;

fn encode(result: &AnalysisResult) -> AppResult<String> {
    serde_json::to_string(result).map_err(|e| AppError::Storage(format!("Failed to serialize result: {}", e)))
}

fn decode(raw: &str) -> AppResult<AnalysisResult> {
    serde_json::from_str(raw).map_err(|e| AppError::Storage(format!("Invalid stored result: {}", e)))
}

/// Browser `sessionStorage`, cleared when the tab closes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    fn storage() -> AppResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no global window".to_string()))?;
        window
            .session_storage()
            .map_err(|e| AppError::Storage(format!("sessionStorage unavailable: {:?}", e)))?
            .ok_or_else(|| AppError::Storage("sessionStorage unavailable".to_string()))
    }
}

impl ResultStore for SessionStore {
    fn save(&self, result: &AnalysisResult) -> AppResult<()> {
        let raw = encode(result)?;
        Self::storage()?
            .set_item(RESULT_STORAGE_KEY, &raw)
            .map_err(|e| AppError::Storage(format!("Failed to write result: {:?}", e)))
    }

    fn load(&self) -> AppResult<Option<AnalysisResult>> {
        let raw = Self::storage()?
            .get_item(RESULT_STORAGE_KEY)
            .map_err(|e| AppError::Storage(format!("Failed to read result: {:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }
}

/// In-memory store keyed like `sessionStorage`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl ResultStore for MemoryStore {
    fn save(&self, result: &AnalysisResult) -> AppResult<()> {
        let raw = encode(result)?;
        self.items.borrow_mut().insert(RESULT_STORAGE_KEY.to_string(), raw);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn load(&self) -> AppResult<Option<AnalysisResult>> {
        self.get_raw(RESULT_STORAGE_KEY).as_deref().map(decode).transpose()
    }
}
