use std::any::Any;
use std::borrow::Borrow;
use std::sync::Arc;

use crate::bus::envelope::ResponseEnvelope;
use crate::correlation::completion_handle::RequestCompletionHandle;
use crate::correlation::request_canceled_error::RequestCanceledError;
use crate::correlation::request_outcome::{RequestError, RequestOutcome};
use crate::correlation::request_timeout_error::RequestTimeoutError;
use crate::correlation::response_callback::{ResponseCallback, ResponseErrorType};
use crate::correlation::response_variants::ResponseVariants;

/// Typed side of a pending request's completion: downcasts the correlated envelope into the
/// caller's declared response/fault types and resolves the completion handle.
pub struct RequestCompletionCallback<Response, Fault> {
    completion_handle: RequestCompletionHandle<Response, Fault>,
}

impl<Response, Fault> ResponseCallback for RequestCompletionCallback<Response, Fault>
    where Response: ResponseVariants, Fault: Any + Send {
    fn on_response(&self, response: Result<ResponseEnvelope, ResponseErrorType>) {
        match response {
            Ok(envelope) => {
                if envelope.is_fault() {
                    if let Ok(fault) = envelope.into_payload().downcast::<Fault>() {
                        self.completion_handle.complete(Ok(RequestOutcome::Fault(*fault)));
                    }
                } else if let Some(typed_response) = Response::from_payload(envelope.into_payload()) {
                    self.completion_handle.complete(Ok(RequestOutcome::Response(typed_response)));
                }
            }
            Err(error) => {
                if let Some(timeout) = error.downcast_ref::<RequestTimeoutError>() {
                    self.completion_handle.complete(Err(RequestError::Timeout {
                        correlation_id: timeout.correlation_id,
                    }));
                } else if error.downcast_ref::<RequestCanceledError>().is_some() {
                    self.completion_handle.complete(Err(RequestError::Canceled));
                } else {
                    self.completion_handle.complete(Err(RequestError::SendFailure(error)));
                }
            }
        }
    }
}

impl<Response, Fault> RequestCompletionCallback<Response, Fault>
    where Response: ResponseVariants, Fault: Any + Send {
    pub fn new() -> Arc<RequestCompletionCallback<Response, Fault>> {
        return Arc::new(RequestCompletionCallback {
            completion_handle: RequestCompletionHandle::new(),
        });
    }

    pub fn handle(&self) -> &RequestCompletionHandle<Response, Fault> {
        return self.completion_handle.borrow();
    }
}
