//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::diagnostic::Diagnostic;
use crate::error::ModelError;
use crate::validate::ValidatorSet;

/// Validate the event definitions of every process in a model JSON.
/// Returns a JSON array of diagnostic objects.
#[wasm_bindgen]
pub fn validate_events(json: &str) -> JsValue {
    let result = validate_events_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_events_inner(json: &str) -> Vec<DiagnosticDto> {
    let model = match crate::model::parse(json) {
        Ok(m) => m,
        Err(e) => return vec![DiagnosticDto::from(e)],
    };

    ValidatorSet::standard()
        .validate_model(&model)
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    code: String,
    message: String,
    process_id: Option<String>,
    event_id: Option<String>,
    event_name: Option<String>,
    params: Vec<(String, String)>,
    is_warning: bool,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        let mut params = Vec::new();
        if let Some(id) = d.params.event_id {
            params.push(("eventId".to_string(), id));
        }
        if let Some(name) = d.params.event_name {
            params.push(("eventName".to_string(), name));
        }
        DiagnosticDto {
            code: d.problem.as_str().into(),
            message: d.problem.default_description().into(),
            process_id: Some(d.process_id),
            event_id: Some(d.event_id),
            event_name: d.event_name,
            params,
            is_warning: d.is_warning,
        }
    }
}

impl From<ModelError> for DiagnosticDto {
    fn from(e: ModelError) -> Self {
        DiagnosticDto {
            code: e.code().into(),
            message: e.to_string(),
            process_id: None,
            event_id: None,
            event_name: None,
            params: Vec::new(),
            is_warning: false,
        }
    }
}
