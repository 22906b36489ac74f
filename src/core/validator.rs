// Copyright 2025 bakri (tidynest@proton.me)
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

//! Contact form field validation
//!
//! Each field is validated on its own trimmed value:
//! - A required field must not be empty
//! - An email field must look like `local@domain.tld`
//! - A telephone field must be an optional `+` followed by 1-16 digits,
//!   the first non-zero, after spaces, dashes and parentheses are removed
//!
//! The phone rule is deliberately permissive: it does not check real-world
//! numbering plans.
//!
//! Validation failures are values, not panics. A failing field never stops
//! the other fields from being validated.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Field validation errors
///
/// The display text is the inline message shown under the field.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// Required field left empty
    #[error("This field is required")]
    RequiredFieldMissing,

    /// Email field does not match the address pattern
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Telephone field does not match the phone pattern
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Kind of form control, which decides the pattern checks applied
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Email input
    Email,
    /// Telephone input
    Tel,
    /// Drop-down selection
    Select,
    /// Multi-line text
    TextArea,
}

/// Static description of a form field
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    /// Field name (form control id)
    pub name: String,
    /// Control kind
    pub kind: FieldKind,
    /// Whether an empty value is rejected
    pub required: bool,
}

impl FieldSpec {
    /// Creates a field description
    pub fn new(name: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required,
        }
    }
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should be valid regex")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern should be valid regex")
});

/// Returns true if `email` matches the address pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns true if `phone` matches the phone pattern
///
/// Spaces, dashes and parentheses are stripped before matching, so
/// `+91 (11) 2345-6789` is accepted.
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();

    PHONE_PATTERN.is_match(&stripped)
}

/// Validates one field value
///
/// Checks, in order: required, email pattern, phone pattern. Pattern checks
/// only apply to non-empty values, so an optional empty phone is fine.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return if spec.required {
            Err(ValidationError::RequiredFieldMissing)
        } else {
            Ok(())
        };
    }

    match spec.kind {
        FieldKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Validates every field independently
///
/// Missing values are treated as empty. Returns the failing fields keyed
/// by name; an empty map means the form may be submitted.
pub fn validate_form(
    fields: &[FieldSpec],
    values: &BTreeMap<String, String>,
) -> BTreeMap<String, ValidationError> {
    fields
        .iter()
        .filter_map(|spec| {
            let value = values.get(&spec.name).map(String::as_str).unwrap_or("");
            validate_field(spec, value)
                .err()
                .map(|error| (spec.name.clone(), error))
        })
        .collect()
}
