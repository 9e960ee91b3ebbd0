//! Submission form lifecycle
//!
//! Editing -> Submitting -> Success, or Editing -> Submitting -> Error -> Editing.
//! One submission can be in flight per form.

use thiserror::Error;

use super::id::{IdGenerator, TimestampIds};
use super::payload::to_payload;
use super::{FormFields, ValidationError, compose_with};
use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::directory::AgentRecord;

const GENERIC_FAILURE: &str = "Failed to submit agent";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to serialize agent: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("This agent has already been submitted")]
    AlreadySubmitted,

    #[error("Edit the form before submitting again")]
    NotEditing,
}

impl SubmitError {
    /// Message shown inline on the form
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(e) => e.to_string(),
            SubmitError::InFlight | SubmitError::AlreadySubmitted | SubmitError::NotEditing => self.to_string(),
            SubmitError::Clipboard(_) | SubmitError::Serialize(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Success(AgentRecord),
    Error(String),
}

/// A composed record together with the text placed on the clipboard
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: AgentRecord,
    pub payload: String,
}

pub struct SubmissionForm {
    fields: FormFields,
    state: FormState,
    ids: Box<dyn IdGenerator>,
}

impl SubmissionForm {
    pub fn new(fields: FormFields) -> Self {
        Self::with_ids(fields, Box::new(TimestampIds))
    }

    pub fn with_ids(fields: FormFields, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            fields,
            state: FormState::Editing,
            ids,
        }
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Return to editing after a failed submission
    pub fn edit(&mut self) {
        if matches!(self.state, FormState::Error(_)) {
            self.state = FormState::Editing;
        }
    }

    /// Compose the record and copy its payload to `sink`.
    ///
    /// Only an `Editing` form can be submitted; a failed one needs `edit()` first.
    /// The form only reaches `Success` once the sink accepted the payload.
    pub fn submit(&mut self, sink: &mut dyn ClipboardSink) -> Result<Submission, SubmitError> {
        match self.state {
            FormState::Editing => {}
            FormState::Submitting => return Err(SubmitError::InFlight),
            FormState::Success(_) => return Err(SubmitError::AlreadySubmitted),
            FormState::Error(_) => return Err(SubmitError::NotEditing),
        }

        self.state = FormState::Submitting;
        match self.compose_and_copy(sink) {
            Ok(submission) => {
                log::info!("Agent '{}' copied to clipboard (id {})", submission.record.name, submission.record.id);
                self.state = FormState::Success(submission.record.clone());
                Ok(submission)
            }
            Err(e) => {
                log::warn!("Submission failed: {}", e);
                self.state = FormState::Error(e.user_message());
                Err(e)
            }
        }
    }

    fn compose_and_copy(&self, sink: &mut dyn ClipboardSink) -> Result<Submission, SubmitError> {
        let record = compose_with(&self.fields, self.ids.as_ref())?;
        let payload = to_payload(&record)?;
        sink.write_text(&payload)?;
        Ok(Submission { record, payload })
    }
}
