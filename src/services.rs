//! Submit handling: validates the whole form and gates the submission.

use log::{info, warn};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::config::FormConfig;
use crate::models::{Field, FormResult, SignupForm};
use crate::presentation::PresentationSink;
use crate::utils::field_validation::FieldValidator;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Whatever takes over once the form is known to be valid
pub trait Submitter {
    fn submit_form(&mut self, form: &SignupForm) -> Result<(), SubmitError>;
}

pub struct FormCoordinator {
    validator: FieldValidator,
}

impl FormCoordinator {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            validator: FieldValidator::new(config),
        }
    }

    /// Re-validates a single field, as when the user leaves it
    pub fn blur(&self, field: Field, form: &SignupForm, sink: &mut dyn PresentationSink) -> bool {
        self.validator.check(field, form, sink).valid
    }

    /// Validates every field, in form order and without stopping at the first
    /// error, so that all messages show up together. The submitter is only
    /// called when every field succeeded.
    pub fn submit(
        &self,
        form: &SignupForm,
        sink: &mut dyn PresentationSink,
        submitter: &mut dyn Submitter,
    ) -> Result<FormResult, SubmitError> {
        let mut result = FormResult::default();
        for field in Field::iter() {
            let outcome = self.validator.check(field, form, sink);
            result.record(field, outcome);
        }

        if !result.all_valid() {
            let failed: Vec<&str> = result.failed_fields().map(|f| f.id()).collect();
            warn!("Submission aborted, invalid fields: {}", failed.join(", "));
            return Ok(result);
        }

        submitter.submit_form(form)?;
        info!("Form submitted for user {}", form.username.trim());
        Ok(result)
    }
}

impl Default for FormCoordinator {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}
