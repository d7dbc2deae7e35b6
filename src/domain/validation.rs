//! Field-level validation shared by every record form.
//!
//! Forms implement [`validator::Validate`] by hand through [`FieldRules`], so each
//! field reports exactly one message and the message wording is owned by the
//! record module. [`FieldErrors`] is the flattened, serializable view of the
//! result: field name to human-readable message, empty when the submission is
//! acceptable.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Mapping from field name to the message shown next to that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping holding one rejected field.
    pub fn single(field: impl Into<String>, error: &ValidationError) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message_of(error));
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                fields.insert(field.to_string(), message_of(first));
            }
        }
        fields
    }
}

/// Runs a form's validator and flattens the outcome.
pub fn field_errors<F: Validate>(form: &F) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Creates a [`ValidationError`] carrying a fixed message.
pub fn rejection(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Only the empty string counts as missing; whitespace is a value.
pub fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Copy of `value`, `None` when blank.
pub fn non_blank(value: &str) -> Option<String> {
    (!is_blank(value)).then(|| value.to_owned())
}

/// Accumulates per-field rejections; the first rejection of a field wins.
pub(crate) struct FieldRules {
    errors: ValidationErrors,
}

impl FieldRules {
    pub(crate) fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Rejects a blank value. Returns whether the value was present.
    pub(crate) fn required(&mut self, field: &'static str, value: &str, message: &'static str) -> bool {
        if is_blank(value) {
            self.errors.add(field, rejection("required", message));
            false
        } else {
            true
        }
    }

    /// Requires a value containing at least one `@`.
    pub(crate) fn email(
        &mut self,
        field: &'static str,
        value: &str,
        missing: &'static str,
        malformed: &'static str,
    ) {
        if self.required(field, value, missing) && !value.contains('@') {
            self.errors.add(field, rejection("email", malformed));
        }
    }

    /// Records the error of a parse rule, if any.
    pub(crate) fn check<T>(&mut self, field: &'static str, outcome: Result<T, ValidationError>) {
        if let Err(error) = outcome {
            self.errors.add(field, error);
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.errors().is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
