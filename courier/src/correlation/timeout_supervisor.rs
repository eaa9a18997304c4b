use std::sync::Arc;
use std::time::SystemTime;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::bus::correlation_id::CorrelationId;
use crate::clock::clock::Clock;
use crate::correlation::pending_request_table::PendingRequestTable;
use crate::correlation::request_timeout_error::RequestTimeoutError;

/// Arms one single-shot timer per pending request. If the timer wins the race against the
/// response listener and cancellation, the request completes with a timeout; a timer firing
/// after the entry was already removed is a harmless lookup miss.
pub struct TimeoutSupervisor {
    pending_request_table: Arc<PendingRequestTable>,
    clock: Arc<dyn Clock>,
}

impl TimeoutSupervisor {
    pub fn new(pending_request_table: Arc<PendingRequestTable>, clock: Arc<dyn Clock>) -> Self {
        return TimeoutSupervisor {
            pending_request_table,
            clock,
        };
    }

    pub fn arm(&self, correlation_id: CorrelationId, deadline: SystemTime) -> JoinHandle<()> {
        let pending_request_table = self.pending_request_table.clone();
        let wait = self.clock.duration_until(deadline);

        return tokio::spawn(async move {
            tokio::time::sleep(wait).await;

            let timed_out = pending_request_table
                .try_complete(correlation_id, Err(Box::new(RequestTimeoutError { correlation_id })));
            if timed_out {
                debug!(correlation_id, "request timed out");
            }
        });
    }
}
