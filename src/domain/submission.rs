//! Lifecycle of a single form submission.
//!
//! `Idle -> Submitting -> Succeeded | Failed`. A failed submission returns to
//! an idle-equivalent state: the loading flag is cleared and the error is kept
//! for display until the next [`FormSubmission::begin`].

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded { redirect_to: String },
    Failed { message: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a submission is already in progress")]
pub struct AlreadySubmitting;

/// Tracks the loading flag, error and redirect target of one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    state: SubmissionState,
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSubmission {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    /// Enter `Submitting`, clearing any previous error.
    pub fn begin(&mut self) -> Result<(), AlreadySubmitting> {
        if self.is_loading() {
            return Err(AlreadySubmitting);
        }
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    pub fn succeed(&mut self, redirect_to: impl Into<String>) {
        self.state = SubmissionState::Succeeded {
            redirect_to: redirect_to.into(),
        };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = SubmissionState::Failed {
            message: message.into(),
        };
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Succeeded { redirect_to } => Some(redirect_to),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut submission = FormSubmission::new();
        submission.fail("boom");
        submission.begin().unwrap();

        assert!(submission.is_loading());
        assert_eq!(submission.error(), None);
    }

    #[test]
    fn second_begin_is_rejected_while_submitting() {
        let mut submission = FormSubmission::new();
        submission.begin().unwrap();

        assert_eq!(submission.begin(), Err(AlreadySubmitting));
    }

    #[test]
    fn failure_clears_loading_and_keeps_message() {
        let mut submission = FormSubmission::new();
        submission.begin().unwrap();
        submission.fail("duplicate name");

        assert!(!submission.is_loading());
        assert_eq!(submission.error(), Some("duplicate name"));
        assert_eq!(submission.redirect_to(), None);
    }

    #[test]
    fn success_records_redirect_without_error() {
        let mut submission = FormSubmission::new();
        submission.begin().unwrap();
        submission.succeed("/dashboard/products");

        assert!(!submission.is_loading());
        assert_eq!(submission.error(), None);
        assert_eq!(submission.redirect_to(), Some("/dashboard/products"));
    }
}
