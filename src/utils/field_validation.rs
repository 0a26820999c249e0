//! Per-field validation of the signup form.
//!
//! Every check reads the current value of its field, applies its rules in a
//! fixed order and stops at the first failure: a blank field always reports
//! that it is blank, never that it is malformed. The verdict is pushed to the
//! presentation sink and returned to the caller.

use log::debug;

use super::predicates::{is_between, is_email_valid, is_password_secure, is_phone_valid, is_required};
use crate::config::FormConfig;
use crate::models::{Field, FieldValue, SignupForm, ValidationOutcome};
use crate::presentation::PresentationSink;

pub const USERNAME_BLANK: &str = "Username cannot be blank.";
pub const EMAIL_BLANK: &str = "Email cannot be blank.";
pub const EMAIL_INVALID: &str = "Email is not valid.";
pub const PASSWORD_BLANK: &str = "Password cannot be blank.";
pub const PASSWORD_INSECURE: &str = "Password must have at least 8 characters including 1 lowercase, 1 uppercase, 1 number, and 1 special character.";
pub const CONFIRM_PASSWORD_BLANK: &str = "Confirm Password is required.";
pub const CONFIRM_PASSWORD_MISMATCH: &str = "Confirm Password does not match.";
pub const PHONE_BLANK: &str = "Phone number cannot be blank.";
pub const PHONE_INVALID: &str = "Phone number must be 10 digits.";

/// Runs the rules of each field with the bounds of a given configuration
#[derive(Debug, Clone)]
pub struct FieldValidator {
    username_min: usize,
    username_max: usize,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl FieldValidator {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            username_min: config.username_min,
            username_max: config.username_max,
        }
    }

    /// Validates `field` against the current content of `form`
    pub fn check(
        &self,
        field: Field,
        form: &SignupForm,
        sink: &mut dyn PresentationSink,
    ) -> ValidationOutcome {
        match field {
            Field::Username => self.check_username(&form.username, sink),
            Field::Email => self.check_email(&form.email, sink),
            Field::Password => self.check_password(&form.password, sink),
            Field::ConfirmPassword => {
                self.check_confirm_password(&form.confirm_password, &form.password, sink)
            }
            Field::Phone => self.check_phone(&form.phone, sink),
        }
    }

    pub fn check_username(&self, raw: &str, sink: &mut dyn PresentationSink) -> ValidationOutcome {
        let username = FieldValue::new(raw);

        let outcome = if is_required(username.as_str()) {
            ValidationOutcome::error(USERNAME_BLANK)
        } else if !is_between(username.char_count(), self.username_min, self.username_max) {
            ValidationOutcome::error(format!(
                "Username must be between {} and {} characters.",
                self.username_min, self.username_max
            ))
        } else {
            ValidationOutcome::success()
        };

        render(Field::Username, outcome, sink)
    }

    pub fn check_email(&self, raw: &str, sink: &mut dyn PresentationSink) -> ValidationOutcome {
        let email = FieldValue::new(raw);

        let outcome = if is_required(email.as_str()) {
            ValidationOutcome::error(EMAIL_BLANK)
        } else if !is_email_valid(email.as_str()) {
            ValidationOutcome::error(EMAIL_INVALID)
        } else {
            ValidationOutcome::success()
        };

        render(Field::Email, outcome, sink)
    }

    pub fn check_password(&self, raw: &str, sink: &mut dyn PresentationSink) -> ValidationOutcome {
        let password = FieldValue::new(raw);

        let outcome = if is_required(password.as_str()) {
            ValidationOutcome::error(PASSWORD_BLANK)
        } else if !is_password_secure(password.as_str()) {
            ValidationOutcome::error(PASSWORD_INSECURE)
        } else {
            ValidationOutcome::success()
        };

        render(Field::Password, outcome, sink)
    }

    /// Compares the confirmation against the trimmed password, which is only read
    pub fn check_confirm_password(
        &self,
        raw: &str,
        raw_password: &str,
        sink: &mut dyn PresentationSink,
    ) -> ValidationOutcome {
        let confirm_password = FieldValue::new(raw);
        let password = FieldValue::new(raw_password);

        let outcome = if is_required(confirm_password.as_str()) {
            ValidationOutcome::error(CONFIRM_PASSWORD_BLANK)
        } else if password != confirm_password {
            ValidationOutcome::error(CONFIRM_PASSWORD_MISMATCH)
        } else {
            ValidationOutcome::success()
        };

        render(Field::ConfirmPassword, outcome, sink)
    }

    pub fn check_phone(&self, raw: &str, sink: &mut dyn PresentationSink) -> ValidationOutcome {
        let phone = FieldValue::new(raw);

        let outcome = if is_required(phone.as_str()) {
            ValidationOutcome::error(PHONE_BLANK)
        } else if !is_phone_valid(phone.as_str()) {
            ValidationOutcome::error(PHONE_INVALID)
        } else {
            ValidationOutcome::success()
        };

        render(Field::Phone, outcome, sink)
    }
}

fn render(
    field: Field,
    outcome: ValidationOutcome,
    sink: &mut dyn PresentationSink,
) -> ValidationOutcome {
    match &outcome.message {
        Some(message) if !outcome.valid => {
            debug!("Field {} rejected: {}", field.id(), message);
            sink.mark_invalid(field, message);
        }
        _ => {
            debug!("Field {} accepted", field.id());
            sink.mark_valid(field);
        }
    }
    outcome
}
