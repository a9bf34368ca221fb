use super::catalog::{self, StepDescriptor};
use super::domain::BusinessType;
use super::record::OnboardingRecord;
use super::validation::{self, ValidationResult};

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("step index {requested} outside of 0..{total}")]
    OutOfRange { requested: usize, total: usize },
}

/// Tracks which wizard page is active. The step list is a pure function
/// of the chosen category, so switching categories restarts navigation
/// while the record keeps whatever was already entered.
#[derive(Debug, Default)]
pub struct StepNavigator {
    business_type: Option<BusinessType>,
    index: usize,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn business_type(&self) -> Option<BusinessType> {
        self.business_type
    }

    /// Step lists are discontinuous across categories, so the index
    /// always restarts at the selector.
    pub fn set_business_type(&mut self, business_type: BusinessType) {
        self.business_type = Some(business_type);
        self.index = 0;
    }

    pub fn clear_business_type(&mut self) {
        self.business_type = None;
        self.index = 0;
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total_steps(&self) -> usize {
        catalog::total_steps(self.business_type)
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        &catalog::steps_for(self.business_type)[self.index]
    }

    /// Validation-gated advance. On failure the index stays put and the
    /// field errors are handed back for display.
    pub fn go_next(&mut self, record: &OnboardingRecord) -> Result<(), ValidationResult> {
        let result = validation::validate_step(self.current_step().id, record);
        if !result.valid {
            return Err(result);
        }

        let last = self.total_steps() - 1;
        self.index = (self.index + 1).min(last);
        Ok(())
    }

    pub fn go_previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Arbitrary jump used by the clickable step indicator. Bounds are
    /// enforced; validation of intervening steps deliberately is not,
    /// since the submission gate re-checks everything.
    pub fn go_to_step(&mut self, index: usize) -> Result<(), NavigationError> {
        let total = self.total_steps();
        if index >= total {
            return Err(NavigationError::OutOfRange {
                requested: index,
                total,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Display-only completion fraction: 0 at the selector, 1 on the
    /// final step.
    pub fn progress(&self) -> f32 {
        let total = self.total_steps();
        if total <= 1 {
            return 0.0;
        }
        self.index as f32 / (total - 1) as f32
    }
}
