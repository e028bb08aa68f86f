//! Process model: JSON → Rust types + containment graph.

pub mod graph;
pub mod types;

pub use graph::ProcessGraph;
pub use types::*;

use crate::error::ModelError;

/// Deserialize a model JSON string and check every process builds a graph.
pub fn parse(json: &str) -> Result<BpmnModel, ModelError> {
    let model = serde_json::from_str::<BpmnModel>(json)?;
    for process in &model.processes {
        ProcessGraph::build(process)?;
    }
    Ok(model)
}
