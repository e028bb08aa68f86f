//! Rust types for the in-memory process model.
//!
//! These are the serde target for the JSON form of a parsed BPMN model.
//! The validators only ever read them.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL MODEL
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BpmnModel {
    #[serde(default)]
    pub processes: Vec<Process>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub name: Option<String>,
}

impl BpmnModel {
    pub fn contains_message_id(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    pub fn contains_signal_id(&self, id: &str) -> bool {
        self.signals.iter().any(|s| s.id == id)
    }

    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }
}

// =============================================================================
// PROCESS + FLOW ELEMENTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: Option<String>,
    #[serde(default = "default_executable")]
    pub executable: bool,
    #[serde(default)]
    pub flow_elements: Vec<FlowElement>,
}

fn default_executable() -> bool {
    true
}

/// Line/column of an element in the source document, when the parser kept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FlowElement {
    Event(Event),
    SubProcess(SubProcess),
    Task(Activity),
    Gateway(Activity),
    SequenceFlow(SequenceFlow),
}

impl FlowElement {
    pub fn id(&self) -> &str {
        match self {
            FlowElement::Event(e) => &e.id,
            FlowElement::SubProcess(s) => &s.id,
            FlowElement::Task(a) => &a.id,
            FlowElement::Gateway(a) => &a.id,
            FlowElement::SequenceFlow(f) => &f.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProcess {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub flow_elements: Vec<FlowElement>,
}

/// Tasks and gateways: only identity matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFlow {
    pub id: String,
    pub source_ref: String,
    pub target_ref: String,
}

// =============================================================================
// EVENTS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub event_definitions: Option<Vec<EventDefinition>>,
    /// Throw side of a link pair. Independent of `link_catch`.
    #[serde(default)]
    pub link_throw: bool,
    #[serde(default)]
    pub link_catch: bool,
    #[serde(default)]
    pub xml_location: Option<XmlLocation>,
}

impl Event {
    pub fn definitions(&self) -> &[EventDefinition] {
        self.event_definitions.as_deref().unwrap_or_default()
    }

    /// The display name, if it is present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

/// Trigger kind attached to an event.
///
/// Kinds this crate has no rule for land in `Unsupported` instead of failing
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventDefinition {
    Message(MessageEventDefinition),
    Signal(SignalEventDefinition),
    Timer(TimerEventDefinition),
    Compensate(CompensateEventDefinition),
    Link(LinkEventDefinition),
    #[serde(other)]
    Unsupported,
}

impl EventDefinition {
    pub fn kind(&self) -> &'static str {
        match self {
            EventDefinition::Message(_) => "message",
            EventDefinition::Signal(_) => "signal",
            EventDefinition::Timer(_) => "timer",
            EventDefinition::Compensate(_) => "compensate",
            EventDefinition::Link(_) => "link",
            EventDefinition::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEventDefinition {
    pub message_ref: Option<String>,
    pub message_expression: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEventDefinition {
    pub signal_ref: Option<String>,
    pub signal_expression: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerEventDefinition {
    pub time_date: Option<String>,
    pub time_cycle: Option<String>,
    pub time_duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensateEventDefinition {
    pub activity_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEventDefinition {
    pub target: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Treats `None` and `Some("")` alike.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// TRAVERSAL
// =============================================================================

impl Process {
    /// Every event in the process, including those nested in sub-processes.
    /// Pre-order: a sub-process's children follow the sub-process itself.
    pub fn events(&self) -> Vec<&Event> {
        let mut events = Vec::new();
        collect_events(&self.flow_elements, &mut events);
        events
    }
}

fn collect_events<'a>(elements: &'a [FlowElement], events: &mut Vec<&'a Event>) {
    for element in elements {
        match element {
            FlowElement::Event(e) => events.push(e),
            FlowElement::SubProcess(sub) => collect_events(&sub.flow_elements, events),
            FlowElement::Task(_) | FlowElement::Gateway(_) | FlowElement::SequenceFlow(_) => {}
        }
    }
}
