//! petgraph-based containment graph for a single process.
//!
//! Nodes are element ids; edges point from a container (the process root or a
//! sub-process) to each element it directly owns.

use std::collections::HashMap;

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{FlowElement, Process};
use crate::error::ModelError;

pub struct ProcessGraph<'a> {
    pub graph: DiGraph<&'a str, ()>,
    pub node_indices: HashMap<&'a str, NodeIndex>,
    pub root: NodeIndex,
    elements: HashMap<&'a str, &'a FlowElement>,
}

impl<'a> ProcessGraph<'a> {
    /// Strict build: a flow element id used twice in the process is an error.
    pub fn build(process: &'a Process) -> Result<Self, ModelError> {
        let (graph, duplicates) = Self::assemble(process);
        match duplicates.first() {
            Some(id) => Err(ModelError::DuplicateElementId {
                process_id: process.id.clone(),
                element_id: id.to_string(),
            }),
            None => Ok(graph),
        }
    }

    /// Lenient build used during validation. A repeated id keeps the first
    /// element it was seen with, but is still linked under every container
    /// that declares it.
    pub fn index(process: &'a Process) -> Self {
        Self::assemble(process).0
    }

    fn assemble(process: &'a Process) -> (Self, Vec<&'a str>) {
        let mut graph = DiGraph::new();
        let root = graph.add_node(process.id.as_str());
        let mut builder = Builder {
            graph,
            node_indices: HashMap::new(),
            elements: HashMap::new(),
            duplicates: Vec::new(),
        };
        builder.add_children(root, &process.flow_elements);

        let graph = ProcessGraph {
            graph: builder.graph,
            node_indices: builder.node_indices,
            root,
            elements: builder.elements,
        };
        (graph, builder.duplicates)
    }

    /// Looks an element up by id. With `recursive == false` only elements
    /// owned directly by the process are considered.
    pub fn resolve_element(&self, id: &str, recursive: bool) -> Option<&'a FlowElement> {
        let &idx = self.node_indices.get(id)?;
        let reachable = if recursive {
            has_path_connecting(&self.graph, self.root, idx, None)
        } else {
            self.graph.find_edge(self.root, idx).is_some()
        };
        if reachable {
            self.elements.get(id).copied()
        } else {
            None
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

struct Builder<'a> {
    graph: DiGraph<&'a str, ()>,
    node_indices: HashMap<&'a str, NodeIndex>,
    elements: HashMap<&'a str, &'a FlowElement>,
    duplicates: Vec<&'a str>,
}

impl<'a> Builder<'a> {
    fn add_children(&mut self, parent: NodeIndex, children: &'a [FlowElement]) {
        for element in children {
            let id = element.id();
            let idx = match self.node_indices.get(id) {
                Some(&existing) => {
                    self.duplicates.push(id);
                    existing
                }
                None => {
                    let idx = self.graph.add_node(id);
                    self.node_indices.insert(id, idx);
                    self.elements.insert(id, element);
                    idx
                }
            };
            self.graph.update_edge(parent, idx, ());

            if let FlowElement::SubProcess(sub) = element {
                self.add_children(idx, &sub.flow_elements);
            }
        }
    }
}
