// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contact form controller
//!
//! # Responsibilities
//!
//! - Hold field values and inline error annotations
//! - Validate a field on blur, clear its error on input
//! - Validate everything on submit and simulate the network round trip
//!
//! The controller does not open the success overlay itself; when the
//! simulated latency elapses the page asks it to `complete()` and opens the
//! overlay with the returned reference.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::core::validator::{validate_field, validate_form, FieldKind, FieldSpec, ValidationError};
use crate::ui::{
    page::{PageTimer, Timers},
    providers::{reference_token, Clock},
    scheduler::{TimerId, TimerSlot},
};

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Send Message";

/// Submit button label while sending
pub const SENDING_LABEL: &str = "Sending...";

/// Submission state
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitState {
    /// Submit enabled
    #[default]
    Idle,
    /// Waiting for the simulated response, submit disabled
    Sending,
}

/// What a submit click did
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; every failing field is annotated
    Rejected(BTreeMap<String, ValidationError>),
    /// Validation passed; the simulated request is in flight
    Sending,
    /// A submission is already in flight
    Busy,
}

/// Returns the fields of the portal contact form
pub fn default_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", FieldKind::Text, true),
        FieldSpec::new("email", FieldKind::Email, true),
        FieldSpec::new("phone", FieldKind::Tel, false),
        FieldSpec::new("subject", FieldKind::Select, true),
        FieldSpec::new("message", FieldKind::TextArea, true),
    ]
}

/// Contact form state
#[derive(Debug)]
pub struct ContactForm {
    fields: Vec<FieldSpec>,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, ValidationError>,
    state: SubmitState,
    pending: TimerSlot,
    submit_delay: Duration,
}

impl ContactForm {
    /// Creates an empty form
    pub fn new(fields: Vec<FieldSpec>, submit_delay: Duration) -> Self {
        Self {
            fields,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            state: SubmitState::Idle,
            pending: TimerSlot::new(),
            submit_delay,
        }
    }

    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field descriptions
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Current value of a field (empty if never typed)
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Inline error of a field
    pub fn error(&self, name: &str) -> Option<ValidationError> {
        self.errors.get(name).copied()
    }

    /// Every inline error, keyed by field
    pub fn errors(&self) -> &BTreeMap<String, ValidationError> {
        &self.errors
    }

    /// Submission state
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Whether the submit control accepts clicks
    pub fn submit_enabled(&self) -> bool {
        self.state == SubmitState::Idle
    }

    /// Submit control label
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::Sending => SENDING_LABEL,
        }
    }

    /// User typed into a field
    ///
    /// Stores the value and removes the field's error without
    /// re-validating. Returns false for an unknown field.
    pub fn input(&mut self, name: &str, value: &str) -> bool {
        if self.field(name).is_none() {
            tracing::debug!(field = name, "input for unknown field ignored");
            return false;
        }

        self.values.insert(name.to_string(), value.to_string());
        self.errors.remove(name);
        true
    }

    /// Field lost focus: validate it alone
    ///
    /// Returns `None` for an unknown field.
    pub fn blur(&mut self, name: &str) -> Option<Result<(), ValidationError>> {
        let field = self.field(name)?;
        let result = validate_field(field, self.value(name));

        match result {
            Ok(()) => {
                self.errors.remove(name);
            }
            Err(error) => {
                self.errors.insert(name.to_string(), error);
            }
        }

        Some(result)
    }

    /// Submit clicked
    pub fn submit(&mut self, timers: &mut Timers) -> SubmitOutcome {
        if self.state == SubmitState::Sending {
            return SubmitOutcome::Busy;
        }

        let errors = validate_form(&self.fields, &self.values);
        self.errors = errors.clone();

        if !errors.is_empty() {
            tracing::debug!(failing = errors.len(), "contact form rejected");
            return SubmitOutcome::Rejected(errors);
        }

        self.state = SubmitState::Sending;
        self.pending
            .arm(timers, self.submit_delay, PageTimer::SubmitComplete);
        tracing::info!("contact form submitted");
        SubmitOutcome::Sending
    }

    /// Simulated response arrived
    ///
    /// Resets the form, re-enables submit and returns the reference token
    /// for the success overlay. Returns `None` for a superseded timer.
    pub fn complete(&mut self, id: TimerId, clock: &dyn Clock) -> Option<String> {
        if !self.pending.holds(id) {
            return None;
        }
        self.pending.fired(id);

        let reference = reference_token(clock.now_millis());
        self.values.clear();
        self.errors.clear();
        self.state = SubmitState::Idle;

        tracing::info!(%reference, "contact form accepted");
        Some(reference)
    }
}
