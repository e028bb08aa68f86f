use process_validation::diagnostic::Diagnostic;
use process_validation::model::*;

// =============================================================================
// Model builders
// =============================================================================

/// Model declaring message `M1` and signal `S1`, with no processes.
pub fn base_model() -> BpmnModel {
    BpmnModel {
        processes: vec![],
        messages: vec![Message {
            id: "M1".into(),
            name: Some("Order placed".into()),
        }],
        signals: vec![Signal {
            id: "S1".into(),
            name: None,
        }],
    }
}

pub fn process(id: &str, elements: Vec<FlowElement>) -> Process {
    Process {
        id: id.into(),
        name: None,
        executable: true,
        flow_elements: elements,
    }
}

pub fn task(id: &str) -> FlowElement {
    FlowElement::Task(Activity {
        id: id.into(),
        name: None,
    })
}

pub fn sub_process(id: &str, elements: Vec<FlowElement>) -> FlowElement {
    FlowElement::SubProcess(SubProcess {
        id: id.into(),
        name: None,
        flow_elements: elements,
    })
}

pub fn event(id: &str, definitions: Vec<EventDefinition>) -> Event {
    Event {
        id: id.into(),
        event_definitions: Some(definitions),
        ..Default::default()
    }
}

pub fn named_event(id: &str, name: &str, definitions: Vec<EventDefinition>) -> Event {
    Event {
        name: Some(name.into()),
        ..event(id, definitions)
    }
}

pub fn link_throw(id: &str, name: Option<&str>, target: Option<&str>) -> Event {
    Event {
        name: name.map(Into::into),
        link_throw: true,
        ..event(id, vec![link_def(target, &[])])
    }
}

pub fn link_catch(id: &str, name: Option<&str>, sources: &[&str]) -> Event {
    Event {
        name: name.map(Into::into),
        link_catch: true,
        ..event(id, vec![link_def(None, sources)])
    }
}

// =============================================================================
// Definition builders
// =============================================================================

pub fn message_def(message_ref: Option<&str>, expression: Option<&str>) -> EventDefinition {
    EventDefinition::Message(MessageEventDefinition {
        message_ref: message_ref.map(Into::into),
        message_expression: expression.map(Into::into),
    })
}

pub fn signal_def(signal_ref: Option<&str>, expression: Option<&str>) -> EventDefinition {
    EventDefinition::Signal(SignalEventDefinition {
        signal_ref: signal_ref.map(Into::into),
        signal_expression: expression.map(Into::into),
    })
}

pub fn timer_def(date: Option<&str>, cycle: Option<&str>, duration: Option<&str>) -> EventDefinition {
    EventDefinition::Timer(TimerEventDefinition {
        time_date: date.map(Into::into),
        time_cycle: cycle.map(Into::into),
        time_duration: duration.map(Into::into),
    })
}

pub fn compensate_def(activity_ref: Option<&str>) -> EventDefinition {
    EventDefinition::Compensate(CompensateEventDefinition {
        activity_ref: activity_ref.map(Into::into),
    })
}

pub fn link_def(target: Option<&str>, sources: &[&str]) -> EventDefinition {
    EventDefinition::Link(LinkEventDefinition {
        target: target.map(Into::into),
        sources: sources.iter().map(|s| s.to_string()).collect(),
    })
}

// =============================================================================
// Assertions
// =============================================================================

pub fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
    diagnostics.iter().map(|d| d.code()).collect()
}

pub fn assert_codes(diagnostics: &[Diagnostic], expected: &[&str]) {
    assert_eq!(
        codes(diagnostics),
        expected,
        "Unexpected diagnostics: {:?}",
        diagnostics
    );
}
