use super::fields::{Field, FieldError, FormFields, ValidationErrors};
use super::relay::{ContactPayload, RelayError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Identifies one entry into [`SubmissionStatus::Success`]. Only the ticket
/// issued for the current success can clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    InFlight,
    Invalid,
}

/// Everything the contact form renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: FormFields,
    errors: ValidationErrors,
    status: SubmissionStatus,
    successes: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Overwrites a field and drops its error, valid or not.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.remove(field);
    }

    /// Recomputes every field's error and stores the result.
    pub fn validate(&mut self) -> bool {
        self.errors = self.fields.validate();
        self.errors.is_valid()
    }

    /// Moves to `Submitting` and hands back the payload to deliver.
    ///
    /// A submission already in flight leaves the state untouched. An invalid
    /// form records its errors but keeps the current status.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if !self.validate() {
            return Err(SubmitRejected::Invalid);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(ContactPayload::from(&self.fields))
    }

    /// Applies the relay's answer. Returns the ticket for the auto-clear
    /// timer when the message went out.
    pub fn complete(&mut self, result: &Result<(), RelayError>) -> Option<SuccessTicket> {
        if !self.is_submitting() {
            return None;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields = FormFields::default();
                self.successes += 1;
                Some(SuccessTicket(self.successes))
            }
            Err(_) => {
                // input stays so the user can retry
                self.status = SubmissionStatus::Error;
                None
            }
        }
    }

    /// Returns to `Idle` if `ticket` belongs to the success still on screen.
    pub fn expire_success(&mut self, ticket: SuccessTicket) -> bool {
        if self.status == SubmissionStatus::Success && ticket.0 == self.successes {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::new();
        state.update_field(Field::Name, "Ada");
        state.update_field(Field::Email, "ada@example.com");
        state.update_field(Field::Message, "This is a long enough message.");
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = FormState::new();
        assert_eq!(state.fields(), &FormFields::default());
        assert!(state.errors().is_empty());
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_update_clears_only_that_error() {
        let mut state = FormState::new();
        state.update_field(Field::Email, "nope");
        assert!(!state.validate());
        assert_eq!(state.error_for(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(state.errors().len(), 3);

        // still invalid, but the error goes away until the next validation
        state.update_field(Field::Email, "x");
        assert_eq!(state.error_for(Field::Email), None);
        assert_eq!(state.error_for(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(state.error_for(Field::Message), Some(FieldError::MessageRequired));
        assert_eq!(state.fields().email, "x");

        assert!(!state.validate());
        assert_eq!(state.error_for(Field::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_invalid_submit_keeps_status() {
        let mut state = FormState::new();
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.errors().len(), 3);

        let mut state = filled();
        state.begin_submit().expect("valid form should submit");
        state.complete(&Err(RelayError::Unavailable));
        state.update_field(Field::Message, "short");
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(state.status(), SubmissionStatus::Error);
    }

    #[test]
    fn test_submit_while_in_flight() {
        let mut state = filled();
        let payload = state.begin_submit().expect("valid form should submit");
        assert_eq!(payload.name, "Ada");
        assert!(state.is_submitting());

        let before = state.clone();
        assert_eq!(state.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(state, before);
    }

    #[test]
    fn test_success_resets_fields() {
        let mut state = filled();
        state.begin_submit().expect("valid form should submit");

        let ticket = state.complete(&Ok(())).expect("success should issue a ticket");
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert_eq!(state.fields(), &FormFields::default());

        assert!(state.expire_success(ticket));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(!state.expire_success(ticket));
    }

    #[test]
    fn test_failure_preserves_fields() {
        let mut state = filled();
        let before = state.fields().clone();
        state.begin_submit().expect("valid form should submit");

        let ticket = state.complete(&Err(RelayError::Transport("offline".to_string())));
        assert_eq!(ticket, None);
        assert_eq!(state.status(), SubmissionStatus::Error);
        assert_eq!(state.fields(), &before);

        // a fresh valid submit goes straight back to submitting
        assert!(state.begin_submit().is_ok());
        assert_eq!(state.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state = filled();
        state.begin_submit().expect("valid form should submit");
        let first = state.complete(&Ok(())).expect("first success");

        // resubmit before the first banner clears
        state.update_field(Field::Name, "Grace");
        state.update_field(Field::Email, "grace@example.com");
        state.update_field(Field::Message, "Another long enough message.");
        state.begin_submit().expect("valid form should submit");
        assert!(!state.expire_success(first));
        assert_eq!(state.status(), SubmissionStatus::Submitting);

        let second = state.complete(&Ok(())).expect("second success");
        assert!(!state.expire_success(first));
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert!(state.expire_success(second));
    }

    #[test]
    fn test_complete_without_submission() {
        let mut state = filled();
        assert_eq!(state.complete(&Ok(())), None);
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.fields().name, "Ada");
    }
}
