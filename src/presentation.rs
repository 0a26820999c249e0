//! Boundary between validation outcomes and what the user sees.

use std::collections::BTreeMap;

use derive_more::Display;
use strum::IntoEnumIterator;

use crate::models::Field;

/// Receives the verdicts of the field validators and renders them.
pub trait PresentationSink {
    /// Puts the field in error state and shows the message next to it
    fn mark_invalid(&mut self, field: Field, message: &str);

    /// Puts the field in success state and clears its message
    fn mark_valid(&mut self, field: Field);
}

/// Visual state of a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Success,
    Error(String),
}

impl FieldState {
    pub fn is_success(&self) -> bool {
        matches!(self, FieldState::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldState::Error(_))
    }

    /// Message displayed under the field, empty unless in error
    pub fn message(&self) -> &str {
        match self {
            FieldState::Error(message) => message,
            _ => "",
        }
    }
}

/// In-memory rendering of the form: one state per field.
///
/// Each mark overwrites the previous state of the field, so the view always
/// shows the most recent verdict.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    states: BTreeMap<Field, FieldState>,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, field: Field) -> &FieldState {
        static UNTOUCHED: FieldState = FieldState::Untouched;
        self.states.get(&field).unwrap_or(&UNTOUCHED)
    }

    /// True when every field of the form currently shows success
    pub fn all_success(&self) -> bool {
        Field::iter().all(|field| self.state(field).is_success())
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.states
            .iter()
            .filter(|(_, state)| state.is_error())
            .map(|(field, state)| (*field, state.message()))
    }
}

impl PresentationSink for FormView {
    fn mark_invalid(&mut self, field: Field, message: &str) {
        self.states.insert(field, FieldState::Error(message.to_owned()));
    }

    fn mark_valid(&mut self, field: Field) {
        self.states.insert(field, FieldState::Success);
    }
}

/// How an input renders its content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum InputType {
    #[default]
    #[display("password")]
    Password,
    #[display("text")]
    Text,
}

/// The eye button next to the confirm password input.
///
/// Flipping it swaps the input between obscured and plain rendering and
/// toggles the `bi-eye` icon class. It never triggers validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityToggle {
    input_type: InputType,
    eye_icon: bool,
}

impl VisibilityToggle {
    pub const ICON_CLASS: &'static str = "bi-eye";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.input_type = match self.input_type {
            InputType::Password => InputType::Text,
            InputType::Text => InputType::Password,
        };
        self.eye_icon = !self.eye_icon;
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn is_obscured(&self) -> bool {
        self.input_type == InputType::Password
    }

    /// Whether the icon currently carries [`Self::ICON_CLASS`]
    pub fn has_eye_icon(&self) -> bool {
        self.eye_icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_start_untouched() {
        let view = FormView::new();
        for field in Field::iter() {
            assert_eq!(view.state(field), &FieldState::Untouched);
        }
        assert!(!view.all_success());
    }

    #[test]
    fn test_latest_mark_wins() {
        let mut view = FormView::new();

        view.mark_invalid(Field::Email, "Email is not valid.");
        assert_eq!(view.state(Field::Email).message(), "Email is not valid.");

        view.mark_valid(Field::Email);
        assert!(view.state(Field::Email).is_success());
        assert_eq!(view.state(Field::Email).message(), "", "Stale message left after success");

        view.mark_invalid(Field::Email, "Email cannot be blank.");
        assert_eq!(view.state(Field::Email), &FieldState::Error("Email cannot be blank.".into()));
    }

    #[test]
    fn test_all_success_needs_every_field() {
        let mut view = FormView::new();
        for field in Field::iter() {
            view.mark_valid(field);
        }
        assert!(view.all_success());

        view.mark_invalid(Field::Phone, "Phone number must be 10 digits.");
        assert!(!view.all_success());
        let errors: Vec<(Field, &str)> = view.errors().collect();
        assert_eq!(errors, vec![(Field::Phone, "Phone number must be 10 digits.")]);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut toggle = VisibilityToggle::new();
        assert!(toggle.is_obscured());
        assert!(!toggle.has_eye_icon());

        toggle.toggle();
        assert_eq!(toggle.input_type(), InputType::Text);
        assert_eq!(toggle.input_type().to_string(), "text");
        assert!(toggle.has_eye_icon());

        toggle.toggle();
        assert_eq!(toggle, VisibilityToggle::new());
    }
}
