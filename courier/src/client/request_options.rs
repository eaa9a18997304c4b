use std::sync::Arc;
use std::time::Duration;

use crate::bus::address::Address;
use crate::bus::correlation_id::CorrelationId;

pub type SendCallbackType = Arc<dyn Fn(&SendContext) + Send + Sync>;

/// Observational view of one send attempt, handed to the optional on-send hook. The hook has
/// no influence on correlation or timeout behavior.
pub struct SendContext {
    correlation_id: CorrelationId,
    destination: Option<Address>,
    response_address: Address,
    timeout: Duration,
    ttl: Option<Duration>,
}

impl SendContext {
    pub(crate) fn new(
        correlation_id: CorrelationId,
        destination: Option<Address>,
        response_address: Address,
        timeout: Duration,
        ttl: Option<Duration>,
    ) -> Self {
        return SendContext {
            correlation_id,
            destination,
            response_address,
            timeout,
            ttl,
        };
    }

    pub fn correlation_id(&self) -> CorrelationId {
        return self.correlation_id;
    }

    pub fn destination(&self) -> Option<&Address> {
        return self.destination.as_ref();
    }

    pub fn response_address(&self) -> &Address {
        return &self.response_address;
    }

    pub fn timeout(&self) -> Duration {
        return self.timeout;
    }

    pub fn ttl(&self) -> Option<Duration> {
        return self.ttl;
    }
}

/// Per-call overrides of the client configuration, plus the optional on-send hook.
pub struct RequestOptions {
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) message_ttl: Option<Duration>,
    pub(crate) on_send: Option<SendCallbackType>,
}

impl RequestOptions {
    pub fn new() -> Self {
        return RequestOptions {
            request_timeout: None,
            message_ttl: None,
            on_send: None,
        };
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        return self;
    }

    pub fn message_ttl(mut self, message_ttl: Duration) -> Self {
        self.message_ttl = Some(message_ttl);
        return self;
    }

    pub fn on_send(mut self, on_send: SendCallbackType) -> Self {
        self.on_send = Some(on_send);
        return self;
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        return RequestOptions::new();
    }
}
