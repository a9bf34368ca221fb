use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BusinessType, FieldValue};

/// The single accumulating record behind the wizard. One flat namespace
/// shared by every category; fields irrelevant to the active category
/// simply stay unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl OnboardingRecord {
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(FieldValue::as_text)
    }

    /// Set and non-blank. Empty strings and empty lists count as absent.
    pub fn is_present(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .map(|value| !value.is_blank())
            .unwrap_or(false)
    }

    pub fn business_type(&self) -> Option<BusinessType> {
        self.text("businessType").and_then(BusinessType::parse)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn merge(&mut self, partial: BTreeMap<String, FieldValue>) {
        for (field, value) in partial {
            self.fields.insert(field, value);
        }
    }
}

/// Owner of the onboarding record. Every mutation goes through this
/// store, keeping the merge semantics (last write wins per field, no
/// implicit removals) in one place.
#[derive(Debug, Default)]
pub struct FormStateStore {
    record: OnboardingRecord,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the accumulated record.
    pub fn get(&self) -> &OnboardingRecord {
        &self.record
    }

    /// Shallow-merge `partial` into the record. Keys absent from
    /// `partial` are left untouched.
    pub fn update(&mut self, partial: BTreeMap<String, FieldValue>) {
        self.record.merge(partial);
    }

    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.record.fields.insert(field.into(), value.into());
    }

    /// Records the chosen category. Other fields survive a category
    /// switch untouched; relevance filtering happens downstream.
    pub fn set_business_type(&mut self, business_type: BusinessType) {
        self.set_field("businessType", business_type.tag());
    }

    pub fn reset(&mut self) {
        self.record = OnboardingRecord::default();
    }
}

/// Idle window after which staged keystroke edits are committed.
pub const DEBOUNCE_WINDOW_MS: i64 = 300;

/// Coalesces keystroke-level edits before they hit the store. The
/// buffer never drops an edit: anything staged is either committed by
/// an idle tick or force-flushed at a transition boundary.
#[derive(Debug, Default)]
pub struct DebounceBuffer {
    staged: BTreeMap<String, FieldValue>,
    last_edit: Option<DateTime<Utc>>,
}

impl DebounceBuffer {
    pub fn stage(&mut self, field: impl Into<String>, value: impl Into<FieldValue>, at: DateTime<Utc>) {
        self.staged.insert(field.into(), value.into());
        self.last_edit = Some(at);
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Whether the idle window has elapsed since the newest staged edit.
    pub fn is_idle(&self, at: DateTime<Utc>) -> bool {
        match self.last_edit {
            Some(last) => at - last >= Duration::milliseconds(DEBOUNCE_WINDOW_MS),
            None => true,
        }
    }

    /// Drain staged edits into the store, unconditionally. Called on
    /// idle ticks and at every navigation or submission boundary.
    pub fn flush_into(&mut self, store: &mut FormStateStore) {
        if self.staged.is_empty() {
            return;
        }
        let staged = std::mem::take(&mut self.staged);
        self.last_edit = None;
        store.update(staged);
    }

    /// Discard staged edits without writing them, for teardown paths
    /// where the step context no longer exists.
    pub fn cancel(&mut self) {
        self.staged.clear();
        self.last_edit = None;
    }
}
