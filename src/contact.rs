//! Contact form core: field state, validation, and the submission lifecycle
//! around an external mail relay. Nothing here touches the DOM, so the whole
//! flow runs in plain unit tests.

mod controller;
mod fields;
mod relay;
mod state;

pub use controller::{
    ContactController, FormHandle, SubmitOutcome, SuccessTimer, TimeoutTimer,
    SUCCESS_BANNER_DURATION,
};
pub use fields::{Field, FieldError, FormFields, ValidationErrors};
pub use relay::{
    ContactPayload, EmailJsRelay, MailRelay, RelayConfig, RelayError, EMAILJS_SEND_URL,
};
pub use state::{FormState, SubmissionStatus, SubmitRejected, SuccessTicket};
