//! Event definition rules: message, signal, timer, compensate and link.
//!
//! One rule per definition kind. Every event of the process is visited, and
//! every definition on it, regardless of what was already reported.

use tracing::{debug, trace};

use super::ProcessValidator;
use crate::diagnostic::{Diagnostic, DiagnosticParams, Problem};
use crate::model::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct EventValidator;

impl ProcessValidator for EventValidator {
    fn name(&self) -> &'static str {
        "event"
    }

    fn validate(&self, model: &BpmnModel, process: &Process) -> Vec<Diagnostic> {
        validate_events(model, process)
    }
}

/// Check the definitions of every event in `process`. Returns all findings in
/// scan order.
pub fn validate_events(model: &BpmnModel, process: &Process) -> Vec<Diagnostic> {
    let graph = ProcessGraph::index(process);
    let events = process.events();
    let mut errors = Vec::new();

    for event in &events {
        for definition in event.definitions() {
            validate_definition(model, process, &graph, event, definition, &mut errors);
        }
    }

    debug!(
        process_id = %process.id,
        events = events.len(),
        diagnostics = errors.len(),
        "validated event definitions"
    );
    errors
}

fn validate_definition(
    model: &BpmnModel,
    process: &Process,
    graph: &ProcessGraph<'_>,
    event: &Event,
    definition: &EventDefinition,
    errors: &mut Vec<Diagnostic>,
) {
    let before = errors.len();

    match definition {
        EventDefinition::Message(d) => message_rule(model, process, event, d, errors),
        EventDefinition::Signal(d) => signal_rule(model, process, event, d, errors),
        EventDefinition::Timer(d) => timer_rule(process, event, d, errors),
        EventDefinition::Compensate(d) => compensate_rule(process, graph, event, d, errors),
        EventDefinition::Link(d) => link_rule(process, event, d, errors),
        EventDefinition::Unsupported => {}
    }

    for d in &errors[before..] {
        trace!(
            code = d.code(),
            event_id = %event.id,
            kind = definition.kind(),
            "event definition problem"
        );
    }
}

fn message_rule(
    model: &BpmnModel,
    process: &Process,
    event: &Event,
    definition: &MessageEventDefinition,
    errors: &mut Vec<Diagnostic>,
) {
    match non_empty(&definition.message_ref) {
        None => {
            if non_empty(&definition.message_expression).is_none() {
                errors.push(Diagnostic::new(
                    Problem::MessageEventMissingMessageRef,
                    process,
                    event,
                ));
            }
        }
        Some(message_ref) => {
            if !model.contains_message_id(message_ref) {
                errors.push(Diagnostic::new(
                    Problem::MessageEventInvalidMessageRef,
                    process,
                    event,
                ));
            }
        }
    }
}

fn signal_rule(
    model: &BpmnModel,
    process: &Process,
    event: &Event,
    definition: &SignalEventDefinition,
    errors: &mut Vec<Diagnostic>,
) {
    match non_empty(&definition.signal_ref) {
        None => {
            if non_empty(&definition.signal_expression).is_none() {
                errors.push(Diagnostic::new(
                    Problem::SignalEventMissingSignalRef,
                    process,
                    event,
                ));
            }
        }
        Some(signal_ref) => {
            if !model.contains_signal_id(signal_ref) {
                errors.push(Diagnostic::new(
                    Problem::SignalEventInvalidSignalRef,
                    process,
                    event,
                ));
            }
        }
    }
}

// Only presence is checked; expression syntax belongs to the timer parser.
fn timer_rule(
    process: &Process,
    event: &Event,
    definition: &TimerEventDefinition,
    errors: &mut Vec<Diagnostic>,
) {
    let configured = [
        &definition.time_date,
        &definition.time_cycle,
        &definition.time_duration,
    ]
    .into_iter()
    .any(|field| non_empty(field).is_some());

    if !configured {
        errors.push(Diagnostic::new(
            Problem::EventTimerMissingConfiguration,
            process,
            event,
        ));
    }
}

/// An empty `activityRef` compensates the default scope and is always valid.
fn compensate_rule(
    process: &Process,
    graph: &ProcessGraph<'_>,
    event: &Event,
    definition: &CompensateEventDefinition,
    errors: &mut Vec<Diagnostic>,
) {
    let Some(activity_ref) = non_empty(&definition.activity_ref) else {
        return;
    };
    if graph.resolve_element(activity_ref, true).is_none() {
        errors.push(Diagnostic::new(
            Problem::CompensateEventInvalidActivityRef,
            process,
            event,
        ));
    }
}

/// Throw and catch are checked independently; an event flagged as neither
/// produces nothing here.
fn link_rule(
    process: &Process,
    event: &Event,
    definition: &LinkEventDefinition,
    errors: &mut Vec<Diagnostic>,
) {
    if event.link_throw && non_empty(&definition.target).is_none() {
        let problem = match event.display_name() {
            Some(_) => Problem::LinkEventDefinitionMissingTarget,
            None => Problem::LinkEventDefinitionMissingTargetEmptyName,
        };
        errors.push(Diagnostic::new(problem, process, event).with_params(link_params(event)));
    }

    if event.link_catch && definition.sources.is_empty() {
        let problem = match event.display_name() {
            Some(_) => Problem::LinkEventDefinitionMissingSource,
            None => Problem::LinkEventDefinitionMissingSourceEmptyName,
        };
        errors.push(Diagnostic::new(problem, process, event).with_params(link_params(event)));
    }
}

fn link_params(event: &Event) -> DiagnosticParams {
    DiagnosticParams {
        event_id: Some(event.id.clone()),
        event_name: event.display_name().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_with(events: Vec<Event>) -> Process {
        Process {
            id: "p1".into(),
            name: Some("Process".into()),
            executable: true,
            flow_elements: events.into_iter().map(FlowElement::Event).collect(),
        }
    }

    fn event(id: &str, definitions: Vec<EventDefinition>) -> Event {
        Event {
            id: id.into(),
            event_definitions: Some(definitions),
            ..Default::default()
        }
    }

    fn codes(errors: &[Diagnostic]) -> Vec<&'static str> {
        errors.iter().map(|d| d.code()).collect()
    }

    #[test]
    fn absent_definitions_are_skipped() {
        let mut e = event("e1", vec![]);
        e.event_definitions = None;
        let process = process_with(vec![e, event("e2", vec![])]);
        assert!(validate_events(&BpmnModel::default(), &process).is_empty());
    }

    #[test]
    fn unsupported_definition_is_a_no_op() {
        let process = process_with(vec![event("e1", vec![EventDefinition::Unsupported])]);
        assert!(validate_events(&BpmnModel::default(), &process).is_empty());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let process = process_with(vec![event(
            "e1",
            vec![EventDefinition::Message(MessageEventDefinition {
                message_ref: Some(String::new()),
                message_expression: Some(String::new()),
            })],
        )]);
        let errors = validate_events(&BpmnModel::default(), &process);
        assert_eq!(codes(&errors), vec!["MESSAGE_EVENT_MISSING_MESSAGE_REF"]);
    }

    #[test]
    fn diagnostic_carries_process_and_event_identity() {
        let mut e = event("timer-1", vec![EventDefinition::Timer(Default::default())]);
        e.name = Some("Wait".into());
        let process = process_with(vec![e]);
        let errors = validate_events(&BpmnModel::default(), &process);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].process_id, "p1");
        assert_eq!(errors[0].process_name.as_deref(), Some("Process"));
        assert_eq!(errors[0].event_id, "timer-1");
        assert_eq!(errors[0].event_name.as_deref(), Some("Wait"));
        assert!(errors[0].params.is_empty());
        assert!(!errors[0].is_warning);
    }

    #[test]
    fn link_flags_both_set_report_both() {
        let mut e = event("link-1", vec![EventDefinition::Link(Default::default())]);
        e.link_throw = true;
        e.link_catch = true;
        let process = process_with(vec![e]);
        let errors = validate_events(&BpmnModel::default(), &process);
        assert_eq!(
            codes(&errors),
            vec![
                "LINK_EVENT_DEFINITION_MISSING_TARGET_EMPTY_NAME",
                "LINK_EVENT_DEFINITION_MISSING_SOURCE_EMPTY_NAME"
            ]
        );
    }
}
