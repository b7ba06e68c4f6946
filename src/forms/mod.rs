//! Descriptor-driven form validation and submission.
//!
//! A [`FormEngine`] is built from an ordered list of [`FormFieldDescriptor`]s
//! and owns the values and errors for those fields. The same engine backs
//! every form in the plugin; the [`presets`] module declares the concrete
//! field lists.
//!
//! # Validation Rules
//!
//! Fields are checked in declaration order:
//!
//! 1. A required field whose trimmed value is empty gets `"<label> is required"`
//!    and no further checks.
//! 2. A non-empty value with a custom validator gets the validator's message,
//!    if any.
//! 3. Otherwise a non-empty email field must look like `local@domain.tld`,
//!    failing with `"Please enter a valid email address"`.
//!
//! Validation failures are plain strings in [`FormState::errors`]. They are
//! never raised as Rust errors.
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::forms::presets;
//!
//! let mut form = presets::contact_form();
//! form.set_field("name", "Ada")?;
//! form.set_field("email", "ada@example.com")?;
//! form.set_field("message", "Loved the Thai page")?;
//!
//! let sent = form.submit(|values| values.len());
//! assert_eq!(sent, None);
//! assert_eq!(form.error("subject"), Some("Subject is required"));
//! # Ok::<(), world_cuisines::CuisineError>(())
//! ```

pub mod presets;

use crate::domain::{CuisineError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    static ref EMAIL_SHAPE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile");
}

/// Message recorded for a malformed email address.
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Custom per-field check. Returns an error message for a bad value.
pub type Validator = fn(&str) -> Option<String>;

/// Kind of input a field collects.
///
/// Only `Email` changes validation; the others steer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Textarea,
    Url,
    Number,
}

/// Static description of one form field.
#[derive(Debug, Clone)]
pub struct FormFieldDescriptor {
    /// Unique key within the form; also the key in submitted values.
    pub name: String,
    /// Human label used in the UI and in the required-field message.
    pub label: String,
    /// Input kind.
    pub input_kind: InputKind,
    /// Whether an empty (after trimming) value is an error.
    pub required: bool,
    /// Hint shown while the field is empty.
    pub placeholder: String,
    /// Optional custom check, run only on non-empty values.
    pub validator: Option<Validator>,
}

impl FormFieldDescriptor {
    /// Creates an optional field with no placeholder and no custom validator.
    pub fn new(name: impl Into<String>, label: impl Into<String>, input_kind: InputKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input_kind,
            required: false,
            placeholder: String::new(),
            validator: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the placeholder hint.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Attaches a custom validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    fn check(&self, value: &str) -> Option<String> {
        if self.required && value.trim().is_empty() {
            return Some(format!("{} is required", self.label));
        }
        if value.is_empty() {
            return None;
        }
        if let Some(message) = self.validator.and_then(|validate| validate(value)) {
            return Some(message);
        }
        if self.input_kind == InputKind::Email && !EMAIL_SHAPE.is_match(value) {
            return Some(INVALID_EMAIL.to_string());
        }
        None
    }
}

/// Values and errors of a form.
///
/// Every key in `values` has a descriptor. `errors` only holds fields that
/// failed the most recent validation and have not been edited since.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub values: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
}

/// A form: ordered descriptors, their state, and the focused field.
#[derive(Debug, Clone)]
pub struct FormEngine {
    fields: Vec<FormFieldDescriptor>,
    state: FormState,
    focused: usize,
}

impl FormEngine {
    /// Builds a form with every value initialized to `""`.
    ///
    /// # Parameters
    ///
    /// * `fields` - Descriptors in display and validation order
    #[must_use]
    pub fn new(fields: Vec<FormFieldDescriptor>) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.name.clone(), String::new()))
            .collect();

        Self {
            fields,
            state: FormState {
                values,
                errors: BTreeMap::new(),
            },
            focused: 0,
        }
    }

    /// Descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FormFieldDescriptor] {
        &self.fields
    }

    /// Current values and errors.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Current value of `name`, if the field exists.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.state.values.get(name).map(String::as_str)
    }

    /// Current error of `name`, if it has one.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.state.errors.get(name).map(String::as_str)
    }

    /// Overwrites a field's value and clears its error.
    ///
    /// # Errors
    ///
    /// Returns [`CuisineError::UnknownField`] if no descriptor is named `name`.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = self
            .state
            .values
            .get_mut(name)
            .ok_or_else(|| CuisineError::UnknownField(name.to_string()))?;
        *slot = value.into();
        self.state.errors.remove(name);
        Ok(())
    }

    /// Index of the focused field.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// Descriptor of the focused field.
    #[must_use]
    pub fn focused_field(&self) -> Option<&FormFieldDescriptor> {
        self.fields.get(self.focused)
    }

    /// Moves focus to the next field, wrapping to the first.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    /// Moves focus to the previous field, wrapping to the last.
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = self.focused.checked_sub(1).unwrap_or(self.fields.len() - 1);
        }
    }

    /// Appends a character to the focused field.
    ///
    /// # Errors
    ///
    /// Propagates [`set_field`](Self::set_field) errors.
    pub fn push_char(&mut self, c: char) -> Result<()> {
        let Some(name) = self.focused_field().map(|f| f.name.clone()) else {
            return Ok(());
        };
        let mut value = self.value(&name).unwrap_or_default().to_string();
        value.push(c);
        self.set_field(&name, value)
    }

    /// Removes the last character of the focused field.
    ///
    /// # Errors
    ///
    /// Propagates [`set_field`](Self::set_field) errors.
    pub fn pop_char(&mut self) -> Result<()> {
        let Some(name) = self.focused_field().map(|f| f.name.clone()) else {
            return Ok(());
        };
        let mut value = self.value(&name).unwrap_or_default().to_string();
        value.pop();
        self.set_field(&name, value)
    }

    /// Validates every field and replaces the error map.
    ///
    /// # Returns
    ///
    /// `true` iff no field failed.
    pub fn validate(&mut self) -> bool {
        let errors: BTreeMap<String, String> = self
            .fields
            .iter()
            .filter_map(|field| {
                let value = self.state.values.get(&field.name).map_or("", String::as_str);
                field.check(value).map(|message| (field.name.clone(), message))
            })
            .collect();

        tracing::debug!(error_count = errors.len(), "form validated");
        self.state.errors = errors;
        self.state.errors.is_empty()
    }

    /// Validates and, on success, hands the values to `handler`.
    ///
    /// The handler is not invoked when validation fails.
    ///
    /// # Returns
    ///
    /// `Some` with the handler's output, or `None` if validation failed.
    pub fn submit<R, F>(&mut self, handler: F) -> Option<R>
    where
        F: FnOnce(&BTreeMap<String, String>) -> R,
    {
        if self.validate() {
            Some(handler(&self.state.values))
        } else {
            None
        }
    }

    /// Clears every value and error and focuses the first field.
    pub fn reset(&mut self) {
        for value in self.state.values.values_mut() {
            value.clear();
        }
        self.state.errors.clear();
        self.focused = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_form() -> FormEngine {
        FormEngine::new(vec![
            FormFieldDescriptor::new("email", "Email", InputKind::Email).required(),
        ])
    }

    #[test]
    fn every_empty_required_field_is_reported() {
        let mut form = FormEngine::new(vec![
            FormFieldDescriptor::new("a", "Alpha", InputKind::Text).required(),
            FormFieldDescriptor::new("b", "Beta", InputKind::Textarea),
            FormFieldDescriptor::new("c", "Gamma", InputKind::Email).required(),
        ]);

        let mut invoked = false;
        let outcome = form.submit(|_| invoked = true);

        assert!(outcome.is_none());
        assert!(!invoked);
        assert_eq!(form.state().errors.len(), 2);
        assert_eq!(form.error("a"), Some("Alpha is required"));
        assert_eq!(form.error("c"), Some("Gamma is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = email_form();
        form.set_field("email", "   ").unwrap();
        assert!(!form.validate());
        assert_eq!(form.error("email"), Some("Email is required"));
    }

    #[test]
    fn email_shape() {
        for (input, ok) in [("a@b.co", true), ("a@b", false), ("abc", false), ("a b@c.de", false)] {
            let mut form = email_form();
            form.set_field("email", input).unwrap();
            assert_eq!(form.validate(), ok, "{input}");
            if !ok {
                assert_eq!(form.error("email"), Some(INVALID_EMAIL));
            }
        }
    }

    #[test]
    fn custom_validator_runs_on_non_empty_values_only() {
        fn no_digits(value: &str) -> Option<String> {
            value
                .chars()
                .any(|c| c.is_ascii_digit())
                .then(|| "Digits are not allowed".to_string())
        }

        let mut form = FormEngine::new(vec![
            FormFieldDescriptor::new("nick", "Nickname", InputKind::Text).validator(no_digits),
        ]);
        assert!(form.validate());

        form.set_field("nick", "r2d2").unwrap();
        assert!(!form.validate());
        assert_eq!(form.error("nick"), Some("Digits are not allowed"));
    }

    #[test]
    fn editing_clears_that_fields_error() {
        let mut form = email_form();
        form.validate();
        assert!(form.error("email").is_some());

        form.push_char('x').unwrap();
        assert_eq!(form.error("email"), None);
        assert_eq!(form.value("email"), Some("x"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = email_form();
        let err = form.set_field("fax", "123").unwrap_err();
        assert!(matches!(err, CuisineError::UnknownField(name) if name == "fax"));
    }

    #[test]
    fn submit_hands_values_to_handler() {
        let mut form = email_form();
        form.set_field("email", "chef@example.org").unwrap();

        let echoed = form.submit(|values| values.get("email").cloned());
        assert_eq!(echoed, Some(Some("chef@example.org".to_string())));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = FormEngine::new(vec![
            FormFieldDescriptor::new("a", "A", InputKind::Text),
            FormFieldDescriptor::new("b", "B", InputKind::Text),
        ]);
        form.focus_prev();
        assert_eq!(form.focused(), 1);
        form.focus_next();
        assert_eq!(form.focused(), 0);
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = email_form();
        form.set_field("email", "bad").unwrap();
        form.validate();
        form.reset();

        assert_eq!(form.value("email"), Some(""));
        assert!(form.state().errors.is_empty());
    }
}
