//! Structured validation findings.
//!
//! Problem codes are a stable contract: downstream renderers key their
//! messages off `Problem::as_str`.

use serde::{Deserialize, Serialize};

use crate::model::{Event, Process, XmlLocation, non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Problem {
    MessageEventMissingMessageRef,
    MessageEventInvalidMessageRef,
    SignalEventMissingSignalRef,
    SignalEventInvalidSignalRef,
    EventTimerMissingConfiguration,
    CompensateEventInvalidActivityRef,
    LinkEventDefinitionMissingTarget,
    LinkEventDefinitionMissingTargetEmptyName,
    LinkEventDefinitionMissingSource,
    LinkEventDefinitionMissingSourceEmptyName,
}

impl Problem {
    pub const ALL: [Problem; 10] = [
        Problem::MessageEventMissingMessageRef,
        Problem::MessageEventInvalidMessageRef,
        Problem::SignalEventMissingSignalRef,
        Problem::SignalEventInvalidSignalRef,
        Problem::EventTimerMissingConfiguration,
        Problem::CompensateEventInvalidActivityRef,
        Problem::LinkEventDefinitionMissingTarget,
        Problem::LinkEventDefinitionMissingTargetEmptyName,
        Problem::LinkEventDefinitionMissingSource,
        Problem::LinkEventDefinitionMissingSourceEmptyName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Problem::MessageEventMissingMessageRef => "MESSAGE_EVENT_MISSING_MESSAGE_REF",
            Problem::MessageEventInvalidMessageRef => "MESSAGE_EVENT_INVALID_MESSAGE_REF",
            Problem::SignalEventMissingSignalRef => "SIGNAL_EVENT_MISSING_SIGNAL_REF",
            Problem::SignalEventInvalidSignalRef => "SIGNAL_EVENT_INVALID_SIGNAL_REF",
            Problem::EventTimerMissingConfiguration => "EVENT_TIMER_MISSING_CONFIGURATION",
            Problem::CompensateEventInvalidActivityRef => "COMPENSATE_EVENT_INVALID_ACTIVITY_REF",
            Problem::LinkEventDefinitionMissingTarget => "LINK_EVENT_DEFINITION_MISSING_TARGET",
            Problem::LinkEventDefinitionMissingTargetEmptyName => {
                "LINK_EVENT_DEFINITION_MISSING_TARGET_EMPTY_NAME"
            }
            Problem::LinkEventDefinitionMissingSource => "LINK_EVENT_DEFINITION_MISSING_SOURCE",
            Problem::LinkEventDefinitionMissingSourceEmptyName => {
                "LINK_EVENT_DEFINITION_MISSING_SOURCE_EMPTY_NAME"
            }
        }
    }

    /// English fallback text. Real rendering happens downstream.
    pub fn default_description(&self) -> &'static str {
        match self {
            Problem::MessageEventMissingMessageRef => "attribute 'messageRef' is required",
            Problem::MessageEventInvalidMessageRef => {
                "Invalid 'messageRef': no message with that id can be found in the model"
            }
            Problem::SignalEventMissingSignalRef => "signalEventDefinition does not have mandatory property 'signalRef'",
            Problem::SignalEventInvalidSignalRef => {
                "Invalid 'signalRef': no signal with that id can be found in the model"
            }
            Problem::EventTimerMissingConfiguration => {
                "Timer needs configuration (either timeDate, timeCycle or timeDuration is needed)"
            }
            Problem::CompensateEventInvalidActivityRef => {
                "Invalid attribute value for 'activityRef': no activity with the given id"
            }
            Problem::LinkEventDefinitionMissingTarget
            | Problem::LinkEventDefinitionMissingTargetEmptyName => {
                "Link throw event has no matching link catch event"
            }
            Problem::LinkEventDefinitionMissingSource
            | Problem::LinkEventDefinitionMissingSourceEmptyName => {
                "Link catch event has no matching link throw event"
            }
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named parameters for message rendering. `event_name` is only set when the
/// problem code expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

impl DiagnosticParams {
    pub fn is_empty(&self) -> bool {
        self.event_id.is_none() && self.event_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub problem: Problem,
    pub process_id: String,
    pub process_name: Option<String>,
    pub event_id: String,
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "DiagnosticParams::is_empty", default)]
    pub params: DiagnosticParams,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xml_location: Option<XmlLocation>,
    pub is_warning: bool,
}

impl Diagnostic {
    pub fn new(problem: Problem, process: &Process, event: &Event) -> Self {
        Diagnostic {
            problem,
            process_id: process.id.clone(),
            process_name: non_empty(&process.name).map(str::to_string),
            event_id: event.id.clone(),
            event_name: event.display_name().map(str::to_string),
            params: DiagnosticParams::default(),
            xml_location: event.xml_location,
            is_warning: false,
        }
    }

    pub fn with_params(mut self, params: DiagnosticParams) -> Self {
        self.params = params;
        self
    }

    pub fn code(&self) -> &'static str {
        self.problem.as_str()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] process '{}' event '{}'",
            self.problem, self.process_id, self.event_id
        )?;
        if let Some(name) = &self.event_name {
            write!(f, " (name '{}')", name)?;
        }
        if let Some(loc) = &self.xml_location {
            write!(f, " at line {}, column {}", loc.line, loc.column)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_stable_codes() {
        for problem in Problem::ALL {
            let json = serde_json::to_string(&problem).unwrap();
            assert_eq!(json, format!("\"{}\"", problem.as_str()));
        }
    }

    #[test]
    fn display_includes_name_and_location() {
        let process = Process {
            id: "p1".into(),
            name: None,
            executable: true,
            flow_elements: vec![],
        };
        let event = Event {
            id: "e1".into(),
            name: Some("Approve".into()),
            xml_location: Some(XmlLocation { line: 12, column: 4 }),
            ..Default::default()
        };
        let d = Diagnostic::new(Problem::EventTimerMissingConfiguration, &process, &event);
        assert_eq!(
            d.to_string(),
            "[EVENT_TIMER_MISSING_CONFIGURATION] process 'p1' event 'e1' (name 'Approve') at line 12, column 4"
        );
    }

    #[test]
    fn empty_event_name_is_dropped() {
        let process = Process {
            id: "p1".into(),
            name: Some(String::new()),
            executable: true,
            flow_elements: vec![],
        };
        let event = Event {
            id: "e1".into(),
            name: Some(String::new()),
            ..Default::default()
        };
        let d = Diagnostic::new(Problem::EventTimerMissingConfiguration, &process, &event);
        assert_eq!(d.event_name, None);
        assert_eq!(d.process_name, None);
        assert_eq!(d.to_string(), "[EVENT_TIMER_MISSING_CONFIGURATION] process 'p1' event 'e1'");
    }
}
