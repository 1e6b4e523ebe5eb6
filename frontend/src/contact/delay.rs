use std::future::Future;

use gloo_timers::future::TimeoutFuture;

/// Deferred wake-up used while a submission is in flight.
pub trait Delay {
    type Wait: Future<Output = ()>;

    fn wait(&self, ms: u32) -> Self::Wait;
}

/// Browser timer, backed by `setTimeout`. Never blocks the event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    type Wait = TimeoutFuture;

    fn wait(&self, ms: u32) -> Self::Wait {
        TimeoutFuture::new(ms)
    }
}
