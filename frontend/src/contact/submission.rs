use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, info};

use super::delay::Delay;
use super::validation::{validate, FormRecord, ValidationResult};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Success,
}

/// What the user is shown once a submission has gone through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessNotice {
    pub name: String,
    pub email: String,
    pub excerpt: String,
}

impl SuccessNotice {
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            name: record.name().to_string(),
            email: record.email().to_string(),
            excerpt: excerpt(record.message(), config::EXCERPT_CHARS),
        }
    }
}

impl fmt::Display for SuccessNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎉 Thank you, {}!", self.name)?;
        writeln!(f)?;
        writeln!(f, "Your message has been received successfully!")?;
        writeln!(f)?;
        writeln!(f, "Here's what you submitted:")?;
        writeln!(f, "• Name: {}", self.name)?;
        writeln!(f, "• Email: {}", self.email)?;
        writeln!(f, "• Message: {}", self.excerpt)?;
        writeln!(f)?;
        write!(f, "We'll get back to you soon! 📧")
    }
}

/// First `limit` characters of `text`, with `...` only when something was cut.
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; carries the full error mapping for the form.
    Rejected(ValidationResult),
    /// Another submission was still in flight.
    Ignored,
    Delivered(SuccessNotice),
}

type Observer = Rc<dyn Fn(SubmissionState)>;

/// Per-form submission state machine.
///
/// Shared as `Rc<SubmissionController>` between the form component and the
/// in-flight submission future, so all state sits behind `Cell`/`RefCell`.
pub struct SubmissionController {
    state: Cell<SubmissionState>,
    delay_ms: u32,
    observers: RefCell<Vec<Observer>>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(config::SUBMIT_DELAY_MS)
    }
}

impl fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("state", &self.state.get())
            .field("delay_ms", &self.delay_ms)
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl SubmissionController {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            state: Cell::new(SubmissionState::Idle),
            delay_ms,
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// True while the submit button must stay disabled.
    pub fn is_busy(&self) -> bool {
        self.state.get() == SubmissionState::Submitting
    }

    pub fn observe(&self, observer: impl Fn(SubmissionState) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn clear_observers(&self) {
        self.observers.borrow_mut().clear();
    }

    fn transition(&self, next: SubmissionState) {
        let prev = self.state.replace(next);
        debug!("Contact form: {:?} -> {:?}", prev, next);
        // Snapshot so observers may register or clear observers themselves
        let observers: Vec<Observer> = self.observers.borrow().clone();
        for observer in observers {
            observer(next);
        }
    }

    /// Validate `record` and, if it passes, run the simulated submission.
    ///
    /// Only an idle form accepts a submission; anything arriving while one is
    /// in flight is dropped. Once the delay starts it always runs to the end.
    pub async fn submit<D: Delay>(&self, record: FormRecord, delay: &D) -> Submission {
        if self.state.get() != SubmissionState::Idle {
            debug!("Submission ignored, form is {:?}", self.state.get());
            return Submission::Ignored;
        }

        self.transition(SubmissionState::Validating);
        let result = validate(&record);
        if !result.is_valid() {
            info!("❌ Form validation failed: {:?}", result.errors());
            self.transition(SubmissionState::Idle);
            return Submission::Rejected(result);
        }

        self.transition(SubmissionState::Submitting);
        delay.wait(self.delay_ms).await;

        self.transition(SubmissionState::Success);
        let notice = SuccessNotice::from_record(&record);
        info!("✅ Form submitted successfully for {}", notice.email);
        self.transition(SubmissionState::Idle);
        Submission::Delivered(notice)
    }
}
