use std::sync::Arc;

use tracing::debug;

use crate::bus::envelope::ResponseEnvelope;
use crate::correlation::pending_request_table::PendingRequestTable;

/// Classifies an inbound correlated envelope against the pending request it belongs to.
/// A lookup miss or an unrecognized payload type is a normal event, never an error: the bus
/// may broadcast several response-shaped messages of which only one is the one the caller
/// declared interest in.
pub struct ResponseDemultiplexer {
    pending_request_table: Arc<PendingRequestTable>,
}

impl ResponseDemultiplexer {
    pub fn new(pending_request_table: Arc<PendingRequestTable>) -> Self {
        return ResponseDemultiplexer { pending_request_table };
    }

    pub fn dispatch(&self, envelope: ResponseEnvelope) {
        let correlation_id = envelope.correlation_id();
        let payload_type = envelope.payload_type();

        let accepted = self.pending_request_table.with_pending(&correlation_id, |pending_request| {
            if envelope.is_fault() {
                return pending_request.accepts_fault(payload_type);
            }
            return pending_request.accepts_response(payload_type);
        });

        match accepted {
            None => {
                debug!(correlation_id, "dropping a response without a pending request");
            }
            Some(false) => {
                debug!(correlation_id, "leaving the request pending, unrecognized payload type");
            }
            Some(true) => {
                self.pending_request_table.try_complete(correlation_id, Ok(envelope));
            }
        }
    }
}
