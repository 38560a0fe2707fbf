use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::relay::{MailRelay, RelayConfig};
use super::state::{FormState, SubmitRejected, SuccessTicket};

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

/// Access to form state that may have been torn down.
///
/// `with_form` returns `None` once the owner is gone, so late async
/// completions have nowhere to write.
pub trait FormHandle {
    fn with_form<T>(&self, f: impl FnOnce(&mut FormState) -> T) -> Option<T>;
}

impl FormHandle for Weak<RefCell<FormState>> {
    fn with_form<T>(&self, f: impl FnOnce(&mut FormState) -> T) -> Option<T> {
        let form = self.upgrade()?;
        let mut form = form.borrow_mut();
        Some(f(&mut form))
    }
}

/// Deferred `Success -> Idle` transition.
pub trait SuccessTimer {
    /// Arms the timer. Implementations must drop any earlier pending
    /// timeout so only the latest ticket fires.
    fn start(&self, ticket: SuccessTicket);
    fn cancel(&self);
}

impl<T: SuccessTimer> SuccessTimer for Rc<T> {
    fn start(&self, ticket: SuccessTicket) {
        (**self).start(ticket)
    }

    fn cancel(&self) {
        (**self).cancel()
    }
}

/// `SuccessTimer` over a start/stop pair of timeout callbacks, such as the
/// ones `leptos_use::use_timeout_fn` returns. Starting always stops first,
/// since those callbacks don't clear a pending timeout on their own.
pub struct TimeoutTimer<Start, Stop> {
    start: Start,
    stop: Stop,
}

impl<Start, Stop> TimeoutTimer<Start, Stop>
where
    Start: Fn(SuccessTicket),
    Stop: Fn(),
{
    pub fn new(start: Start, stop: Stop) -> Self {
        Self { start, stop }
    }
}

impl<Start, Stop> SuccessTimer for TimeoutTimer<Start, Stop>
where
    Start: Fn(SuccessTicket),
    Stop: Fn(),
{
    fn start(&self, ticket: SuccessTicket) {
        (self.stop)();
        (self.start)(ticket)
    }

    fn cancel(&self) {
        (self.stop)()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Relay accepted the message.
    Sent,
    /// Relay failed; the input is kept for a retry.
    Failed,
    /// Validation failed; nothing was sent.
    Invalid,
    /// Another submission is still in flight.
    AlreadySubmitting,
    /// The form was torn down before the relay answered.
    Detached,
}

/// Drives one contact form: validation, the relay round trip and the
/// success auto-clear. Dropping the controller cancels a pending clear.
pub struct ContactController<F, R, T>
where
    T: SuccessTimer,
{
    form: F,
    relay: R,
    config: RelayConfig,
    timer: T,
}

impl<F, R, T> ContactController<F, R, T>
where
    F: FormHandle,
    R: MailRelay,
    T: SuccessTimer,
{
    pub fn new(form: F, relay: R, config: RelayConfig, timer: T) -> Self {
        Self {
            form,
            relay,
            config,
            timer,
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let payload = match self.form.with_form(FormState::begin_submit) {
            None => return SubmitOutcome::Detached,
            Some(Err(SubmitRejected::InFlight)) => {
                log::debug!("ignoring submit while a message is in flight");
                return SubmitOutcome::AlreadySubmitting;
            }
            Some(Err(SubmitRejected::Invalid)) => return SubmitOutcome::Invalid,
            Some(Ok(payload)) => payload,
        };

        let result = self.relay.send(&self.config, &payload).await;
        if let Err(e) = &result {
            log::error!("Form submission error: {e}");
        }

        match self.form.with_form(|form| form.complete(&result)) {
            None => {
                log::debug!("contact form went away before the relay answered");
                SubmitOutcome::Detached
            }
            Some(Some(ticket)) => {
                self.timer.start(ticket);
                SubmitOutcome::Sent
            }
            Some(None) => SubmitOutcome::Failed,
        }
    }
}

impl<F, R, T> Drop for ContactController<F, R, T>
where
    T: SuccessTimer,
{
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
