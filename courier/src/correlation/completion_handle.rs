use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};

use crate::correlation::request_outcome::{RequestError, RequestOutcome};

/// Single-assignment completion handle. Resolves exactly once; completions after the first
/// are silently discarded. Awaited by exactly one consumer, the original caller.
pub struct RequestCompletionHandle<Response, Fault> {
    outcome: Mutex<Option<Result<RequestOutcome<Response, Fault>, RequestError>>>,
    waker_state: Arc<Mutex<WakerState>>,
}

pub(crate) struct WakerState {
    pub(crate) waker: Option<Waker>,
}

impl<Response, Fault> RequestCompletionHandle<Response, Fault> {
    pub(crate) fn new() -> Self {
        return RequestCompletionHandle {
            outcome: Mutex::new(None),
            waker_state: Arc::new(Mutex::new(WakerState { waker: None })),
        };
    }

    pub(crate) fn complete(&self, outcome: Result<RequestOutcome<Response, Fault>, RequestError>) {
        {
            let mut guard = self.outcome.lock().unwrap();
            if guard.is_some() {
                return;
            }
            *guard = Some(outcome);
        }

        if let Some(waker) = &self.waker_state.lock().unwrap().waker {
            waker.wake_by_ref();
        }
    }
}

impl<Response, Fault> Future for &RequestCompletionHandle<Response, Fault> {
    type Output = Result<RequestOutcome<Response, Fault>, RequestError>;

    fn poll(self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut guard = self.waker_state.lock().unwrap();
        if let Some(waker) = guard.waker.as_ref() {
            if !waker.will_wake(ctx.waker()) {
                guard.waker = Some(ctx.waker().clone());
            }
        } else {
            guard.waker = Some(ctx.waker().clone());
        }
        drop(guard);

        if let Some(outcome) = self.outcome.lock().unwrap().take() {
            return Poll::Ready(outcome);
        }
        return Poll::Pending;
    }
}
