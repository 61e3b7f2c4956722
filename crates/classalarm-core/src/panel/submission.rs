use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::form::{FormField, FormState, Submission};
use crate::schedule::{submitted_classes, ClassEntry};

/// Shown to the class representative after a successful submit.
pub const SUBMITTED_NOTICE: &str = "Class submitted! (This is just a prototype)";

/// Snapshot of the submission panel for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionView {
    pub form: FormState,
    pub submitted: Vec<ClassEntry>,
}

/// Class representative panel: a submission form above the list of
/// previously submitted classes.
#[derive(Debug, Clone)]
pub struct SubmissionPanel {
    form: FormState,
    submitted: Vec<ClassEntry>,
}

impl SubmissionPanel {
    /// A fresh panel with an empty form and the sample submitted list.
    pub fn new() -> Self {
        Self::with_classes(submitted_classes())
    }

    pub fn with_classes(submitted: Vec<ClassEntry>) -> Self {
        Self {
            form: FormState::new(),
            submitted,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submitted(&self) -> &[ClassEntry] {
        &self.submitted
    }

    /// Submit the form. The submitted list is left as it is.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        self.form.submit()
    }

    pub fn view(&self) -> SubmissionView {
        debug!(submitted = self.submitted.len(), "Rendering submission panel");
        SubmissionView {
            form: self.form.clone(),
            submitted: self.submitted.clone(),
        }
    }
}

impl Default for SubmissionPanel {
    fn default() -> Self {
        Self::new()
    }
}
