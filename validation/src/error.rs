//! Errors raised while loading a model. Validation itself never fails; its
//! findings are `Diagnostic`s.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("[P001] Failed to parse model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("[P002] Duplicate flow element id '{element_id}' in process '{process_id}'")]
    DuplicateElementId {
        process_id: String,
        element_id: String,
    },
}

impl ModelError {
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::Json(_) => "P001",
            ModelError::DuplicateElementId { .. } => "P002",
        }
    }
}
