//! Field-keyed validation errors and the rules that fill them.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidateLength;

use crate::config::{MSG_CANNOT_BE_EMPTY, NON_FIELD_ERROR_KEY};

/// Accumulated validation failures, keyed by field name.
///
/// Failures that do not belong to a single field are stored under
/// `__error__`. Serializes directly to the wire shape
/// `{"email": ["cannot be empty"], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({"email": ["cannot be empty"]}))]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message under `field`
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Append a message under the non-field key
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERROR_KEY, message);
    }

    /// Build a set holding a single non-field message
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_non_field(message);
        errors
    }

    /// Check if `field` has at least one message
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields carrying errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise the errors themselves
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Applies rules to a single field value, recording failures as it goes.
///
/// Every rule runs regardless of earlier failures on the same field, so a
/// field may collect several messages.
///
/// ```rust,ignore
/// let mut errors = ValidationErrors::new();
/// FieldCheck::new(&mut errors, "email", &email)
///     .not_empty()
///     .length_between(4, 120);
/// ```
pub struct FieldCheck<'a> {
    errors: &'a mut ValidationErrors,
    field: &'a str,
    value: &'a str,
}

impl<'a> FieldCheck<'a> {
    pub fn new(errors: &'a mut ValidationErrors, field: &'a str, value: &'a str) -> Self {
        Self {
            errors,
            field,
            value,
        }
    }

    pub fn not_empty(self) -> Self {
        if self.value.is_empty() {
            self.errors.add(self.field, MSG_CANNOT_BE_EMPTY);
        }
        self
    }

    /// Length in characters must fall within `min..=max`
    pub fn length_between(self, min: u64, max: u64) -> Self {
        if !self.value.validate_length(Some(min), Some(max), None) {
            self.errors
                .add(self.field, format!("length is not between {} and {}", min, max));
        }
        self
    }
}
