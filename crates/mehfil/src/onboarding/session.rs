use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::catalog::StepDescriptor;
use super::domain::{BusinessType, FieldValue};
use super::navigator::{NavigationError, StepNavigator};
use super::record::{DebounceBuffer, FormStateStore, OnboardingRecord};
use super::review::{self, Section};
use super::submission::{self, SubmissionPayload};
use super::validation::{self, ValidationResult};

#[derive(Debug, thiserror::Error)]
pub enum FinalizeError {
    #[error("no business category selected")]
    MissingBusinessType,
    #[error("submission blocked by {} field error(s)", .0.errors.len())]
    Invalid(ValidationResult),
}

/// One applicant's wizard run. Owns the record store, the navigator,
/// and the keystroke buffer, and keeps their cross-cutting invariants:
/// edits are applied before any transition, category switches restart
/// navigation without purging the record, and submission always passes
/// through the whole-record validation gate.
#[derive(Debug, Default)]
pub struct WizardSession {
    store: FormStateStore,
    navigator: StepNavigator,
    pending: DebounceBuffer,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &OnboardingRecord {
        self.store.get()
    }

    pub fn business_type(&self) -> Option<BusinessType> {
        self.navigator.business_type()
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        self.navigator.current_step()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn total_steps(&self) -> usize {
        self.navigator.total_steps()
    }

    pub fn progress(&self) -> f32 {
        self.navigator.progress()
    }

    /// Select or switch the category. Pending edits belong to the step
    /// being left, so they are committed first.
    pub fn choose_business_type(&mut self, business_type: BusinessType) {
        self.pending.flush_into(&mut self.store);
        self.store.set_business_type(business_type);
        self.navigator.set_business_type(business_type);
    }

    /// Immediate write, for widgets that commit on change rather than
    /// per keystroke.
    pub fn apply_edits(&mut self, partial: BTreeMap<String, FieldValue>) {
        self.store.update(partial);
    }

    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.store.set_field(field, value);
    }

    /// Buffer a keystroke-level edit; it reaches the store once the
    /// idle window elapses or a transition forces a flush.
    pub fn stage_edit(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
        at: DateTime<Utc>,
    ) {
        self.pending.stage(field, value, at);
    }

    /// Periodic tick from the host; commits staged edits after the
    /// idle window.
    pub fn tick(&mut self, at: DateTime<Utc>) {
        if !self.pending.is_empty() && self.pending.is_idle(at) {
            self.pending.flush_into(&mut self.store);
        }
    }

    pub fn go_next(&mut self) -> Result<(), ValidationResult> {
        self.pending.flush_into(&mut self.store);
        self.navigator.go_next(self.store.get())
    }

    pub fn go_previous(&mut self) {
        self.pending.flush_into(&mut self.store);
        self.navigator.go_previous();
    }

    pub fn go_to_step(&mut self, index: usize) -> Result<(), NavigationError> {
        self.pending.flush_into(&mut self.store);
        self.navigator.go_to_step(index)
    }

    /// Section-grouped confirmation view of everything entered so far.
    /// Empty until a category is chosen.
    pub fn review(&self) -> Vec<Section> {
        match self.navigator.business_type() {
            Some(business_type) => review::project(business_type, self.store.get()),
            None => Vec::new(),
        }
    }

    /// Run the whole-record gate and, when it passes, produce the
    /// persisted payload. The record is left intact either way so a
    /// failed transport can be retried without data loss.
    pub fn finalize(&mut self) -> Result<SubmissionPayload, FinalizeError> {
        self.pending.flush_into(&mut self.store);

        let business_type = self
            .navigator
            .business_type()
            .ok_or(FinalizeError::MissingBusinessType)?;

        let result = validation::validate_all(business_type, self.store.get());
        if !result.valid {
            return Err(FinalizeError::Invalid(result));
        }

        Ok(submission::build(business_type, self.store.get()))
    }

    /// Explicit start-over: the only path that clears entered data.
    pub fn restart(&mut self) {
        self.pending.cancel();
        self.store.reset();
        self.navigator.clear_business_type();
    }
}
