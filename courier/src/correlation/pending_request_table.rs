use dashmap::DashMap;

use crate::bus::correlation_id::CorrelationId;
use crate::bus::envelope::ResponseEnvelope;
use crate::correlation::request_canceled_error::RequestCanceledError;
use crate::correlation::response_callback::{PendingRequest, ResponseErrorType};

/// Concurrent map of correlation id to in-flight request. All cross-task coordination of the
/// client funnels through `register`/`try_complete`/`remove`; whichever of the response
/// listener, the timeout supervisor or a cancellation reaches `try_complete` first wins, the
/// losers observe a lookup miss.
pub struct PendingRequestTable {
    pending_requests: DashMap<CorrelationId, PendingRequest>,
}

impl PendingRequestTable {
    pub fn new() -> Self {
        return PendingRequestTable {
            pending_requests: DashMap::new(),
        };
    }

    pub fn register(&self, correlation_id: CorrelationId, pending_request: PendingRequest) {
        let previous = self.pending_requests.insert(correlation_id, pending_request);
        assert!(previous.is_none(), "correlation id {} is already registered", correlation_id);
    }

    pub fn try_complete(
        &self,
        correlation_id: CorrelationId,
        response: Result<ResponseEnvelope, ResponseErrorType>,
    ) -> bool {
        return match self.pending_requests.remove(&correlation_id) {
            Some((_, pending_request)) => {
                pending_request.on_response(response);
                true
            }
            None => false,
        };
    }

    pub fn remove(&self, correlation_id: CorrelationId) {
        self.pending_requests.remove(&correlation_id);
    }

    pub fn cancel_all(&self) {
        let correlation_ids: Vec<CorrelationId> =
            self.pending_requests.iter().map(|entry| *entry.key()).collect();

        for correlation_id in correlation_ids {
            self.try_complete(correlation_id, Err(Box::new(RequestCanceledError { correlation_id })));
        }
    }

    pub fn len(&self) -> usize {
        return self.pending_requests.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.pending_requests.is_empty();
    }

    pub(crate) fn with_pending<R>(
        &self,
        correlation_id: &CorrelationId,
        inspect: impl FnOnce(&PendingRequest) -> R,
    ) -> Option<R> {
        return self.pending_requests.get(correlation_id).map(|entry| inspect(entry.value()));
    }
}
