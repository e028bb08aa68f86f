//! Process-level validation.
//!
//! Each validator inspects one process at a time and returns its findings.
//! Pipelines compose validators through `ValidatorSet`.

pub mod event_rules;

pub use event_rules::EventValidator;

use crate::diagnostic::Diagnostic;
use crate::model::{BpmnModel, Process};

/// A validator that checks a single process of a model.
pub trait ProcessValidator: Send + Sync {
    fn name(&self) -> &'static str;

    fn validate(&self, model: &BpmnModel, process: &Process) -> Vec<Diagnostic>;
}

#[derive(Default)]
pub struct ValidatorSet {
    validators: Vec<Box<dyn ProcessValidator>>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validators this crate ships with.
    pub fn standard() -> Self {
        Self::new().with(EventValidator)
    }

    pub fn with(mut self, validator: impl ProcessValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every validator over every process, in model order.
    pub fn validate_model(&self, model: &BpmnModel) -> Vec<Diagnostic> {
        self.run(model, model.processes.iter())
    }

    /// Same as `validate_model`, skipping processes not marked executable.
    pub fn validate_executable(&self, model: &BpmnModel) -> Vec<Diagnostic> {
        self.run(model, model.processes.iter().filter(|p| p.executable))
    }

    fn run<'a>(
        &self,
        model: &BpmnModel,
        processes: impl Iterator<Item = &'a Process>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for process in processes {
            for validator in &self.validators {
                diagnostics.extend(validator.validate(model, process));
            }
        }
        diagnostics
    }
}

/// Validate every process of the model with the standard validators.
pub fn validate_model(model: &BpmnModel) -> Vec<Diagnostic> {
    ValidatorSet::standard().validate_model(model)
}
