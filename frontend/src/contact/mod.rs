//! Contact form core: field rules and the submission state machine.
//! Nothing in here touches the DOM.

pub mod delay;
pub mod submission;
pub mod validation;

pub use delay::{Delay, TimerDelay};
pub use submission::{excerpt, Submission, SubmissionController, SubmissionState, SuccessNotice};
pub use validation::{validate, validate_field, Field, FieldKind, FieldSpec, FormRecord, ValidationResult, FIELD_SPECS};
