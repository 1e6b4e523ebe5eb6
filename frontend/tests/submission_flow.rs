//! End-to-end runs of the contact form state machine with a hand-released
//! timer, so the in-flight window can be inspected.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::LocalSpawnExt;

use landing_page::contact::{
    Delay, FormRecord, Submission, SubmissionController, SubmissionState, SuccessNotice,
};

/// Timer that only fires once the test releases it.
struct GatedDelay {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    requested_ms: Cell<Option<u32>>,
}

impl GatedDelay {
    fn new() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let delay = Self {
            gate: RefCell::new(Some(rx)),
            requested_ms: Cell::new(None),
        };
        (delay, tx)
    }
}

impl Delay for GatedDelay {
    type Wait = LocalBoxFuture<'static, ()>;

    fn wait(&self, ms: u32) -> Self::Wait {
        self.requested_ms.set(Some(ms));
        let gate = self.gate.borrow_mut().take();
        async move {
            if let Some(rx) = gate {
                let _ = rx.await;
            }
        }
        .boxed_local()
    }
}

fn valid_record(message: &str) -> FormRecord {
    FormRecord::new("Alice", "alice@example.com", message)
}

fn recording(controller: &SubmissionController) -> Rc<RefCell<Vec<SubmissionState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    controller.observe(move |state| sink.borrow_mut().push(state));
    seen
}

/// Records each state together with what `is_busy` reports at that moment.
fn recording_busy(controller: &Rc<SubmissionController>) -> Rc<RefCell<Vec<(SubmissionState, bool)>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let weak: Weak<SubmissionController> = Rc::downgrade(controller);
    controller.observe(move |state| {
        let busy = weak.upgrade().map_or(false, |c| c.is_busy());
        sink.borrow_mut().push((state, busy));
    });
    seen
}

#[test]
fn valid_submission_walks_every_state() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let controller = Rc::new(SubmissionController::default());
    let seen = recording(&controller);
    let busy = recording_busy(&controller);
    let (delay, release) = GatedDelay::new();
    let delay = Rc::new(delay);
    let outcome = Rc::new(RefCell::new(None));

    let long_message = "a".repeat(150);
    {
        let controller = controller.clone();
        let delay = delay.clone();
        let outcome = outcome.clone();
        let record = valid_record(&long_message);
        spawner
            .spawn_local(async move {
                let result = controller.submit(record, &*delay).await;
                *outcome.borrow_mut() = Some(result);
            })
            .unwrap();
    }

    pool.run_until_stalled();
    assert_eq!(controller.state(), SubmissionState::Submitting);
    assert!(controller.is_busy());
    assert_eq!(delay.requested_ms.get(), Some(1500));
    assert!(outcome.borrow().is_none());

    release.send(()).unwrap();
    pool.run_until_stalled();

    assert_eq!(
        *seen.borrow(),
        vec![
            SubmissionState::Validating,
            SubmissionState::Submitting,
            SubmissionState::Success,
            SubmissionState::Idle,
        ]
    );
    assert_eq!(
        *busy.borrow(),
        vec![
            (SubmissionState::Validating, false),
            (SubmissionState::Submitting, true),
            (SubmissionState::Success, false),
            (SubmissionState::Idle, false),
        ]
    );
    assert!(!controller.is_busy());

    let outcome = outcome.borrow_mut().take().unwrap();
    let notice = match outcome {
        Submission::Delivered(notice) => notice,
        other => panic!("expected delivery, got {:?}", other),
    };
    assert_eq!(notice.excerpt, format!("{}...", "a".repeat(100)));
    assert!(notice.to_string().contains(&format!("• Message: {}...", "a".repeat(100))));
}

#[test]
fn resubmitting_while_in_flight_is_ignored() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let controller = Rc::new(SubmissionController::default());
    let (delay, release) = GatedDelay::new();
    let delay = Rc::new(delay);
    let deliveries = Rc::new(RefCell::new(Vec::<SuccessNotice>::new()));

    {
        let controller = controller.clone();
        let delay = delay.clone();
        let deliveries = deliveries.clone();
        spawner
            .spawn_local(async move {
                if let Submission::Delivered(notice) =
                    controller.submit(valid_record("first message body"), &*delay).await
                {
                    deliveries.borrow_mut().push(notice);
                }
            })
            .unwrap();
    }
    pool.run_until_stalled();
    assert_eq!(controller.state(), SubmissionState::Submitting);

    let seen = recording(&controller);
    let second = pool.run_until(controller.submit(valid_record("second message body"), &*delay));
    assert_eq!(second, Submission::Ignored);
    assert_eq!(controller.state(), SubmissionState::Submitting);
    assert!(seen.borrow().is_empty());
    assert!(deliveries.borrow().is_empty());

    release.send(()).unwrap();
    pool.run_until_stalled();

    let deliveries = deliveries.borrow();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].excerpt, "first message body");
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[test]
fn invalid_submission_is_rejected_without_delay() {
    let mut pool = LocalPool::new();
    let controller = SubmissionController::default();
    let (delay, _release) = GatedDelay::new();

    let outcome = pool.run_until(controller.submit(
        FormRecord::new("Alice", "not-an-email", "short"),
        &delay,
    ));

    let result = match outcome {
        Submission::Rejected(result) => result,
        other => panic!("expected rejection, got {:?}", other),
    };
    assert_eq!(result.errors().len(), 2);
    assert_eq!(delay.requested_ms.get(), None);
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[test]
fn form_accepts_a_new_submission_after_success() {
    let mut pool = LocalPool::new();
    let controller = SubmissionController::new(5);

    for round in 0..2 {
        let (delay, release) = GatedDelay::new();
        release.send(()).unwrap();
        let outcome = pool.run_until(controller.submit(
            valid_record(&format!("message number {}", round)),
            &delay,
        ));
        assert!(matches!(outcome, Submission::Delivered(_)));
        assert_eq!(delay.requested_ms.get(), Some(5));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
