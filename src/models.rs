//! Data model of the signup form

use std::collections::BTreeMap;

use derive_more::Display;
use strum_macros::EnumIter;

use crate::utils::predicates::trim_input;

/// One of the five inputs of the signup form.
///
/// The declaration order is the order in which the form is validated on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display)]
pub enum Field {
    #[display("Username")]
    Username,
    #[display("Email")]
    Email,
    #[display("Password")]
    Password,
    #[display("Confirm Password")]
    ConfirmPassword,
    #[display("Phone number")]
    Phone,
}

impl Field {
    /// Identifier of the input, as used by the markup of the form
    pub fn id(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
            Field::Phone => "phone",
        }
    }

    /// Whether the input holds a secret that must not be echoed back
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// The trimmed content of one input, read fresh every time a field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn new(raw: &str) -> Self {
        Self(trim_input(raw).to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Verdict of a single validation pass over one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Raw content of the whole form, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

impl SignupForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Phone => &mut self.phone,
        };
        *slot = value;
    }
}

/// Outcomes of one submit, one per field.
/// Only lives for the duration of the submit event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormResult {
    pub outcomes: BTreeMap<Field, ValidationOutcome>,
}

impl FormResult {
    pub fn record(&mut self, field: Field, outcome: ValidationOutcome) {
        self.outcomes.insert(field, outcome);
    }

    pub fn all_valid(&self) -> bool {
        self.outcomes.values().all(|outcome| outcome.valid)
    }

    /// Fields whose outcome was an error, in form order
    pub fn failed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.valid)
            .map(|(field, _)| *field)
    }
}
