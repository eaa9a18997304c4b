use std::any::{Any, TypeId};
use std::sync::Arc;
use std::time::Duration;

use crate::bus::address::Address;
use crate::bus::correlation_id::CorrelationId;

pub type AnyPayload = Box<dyn Any + Send>;

pub type SharedPayload = Arc<dyn Any + Send + Sync>;

/// An inbound message addressed to this client's response address. Consumed exactly once
/// by the demultiplexer.
pub struct ResponseEnvelope {
    correlation_id: CorrelationId,
    payload: AnyPayload,
    is_fault: bool,
}

impl std::fmt::Debug for ResponseEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f
            .debug_struct("ResponseEnvelope")
            .field("correlation_id", &self.correlation_id)
            .field("is_fault", &self.is_fault)
            .finish_non_exhaustive();
    }
}

impl ResponseEnvelope {
    pub fn new(correlation_id: CorrelationId, payload: AnyPayload, is_fault: bool) -> Self {
        return ResponseEnvelope {
            correlation_id,
            payload,
            is_fault,
        };
    }

    pub fn response(correlation_id: CorrelationId, payload: impl Any + Send) -> Self {
        return Self::new(correlation_id, Box::new(payload), false);
    }

    pub fn fault(correlation_id: CorrelationId, payload: impl Any + Send) -> Self {
        return Self::new(correlation_id, Box::new(payload), true);
    }

    pub fn correlation_id(&self) -> CorrelationId {
        return self.correlation_id;
    }

    pub fn is_fault(&self) -> bool {
        return self.is_fault;
    }

    pub fn payload_type(&self) -> TypeId {
        return self.payload.as_ref().type_id();
    }

    pub fn into_payload(self) -> AnyPayload {
        return self.payload;
    }
}

/// A request on its way to the transport, tagged with the correlation id and the address the
/// response must come back to. The payload is shared so that a broadcast transport can fan one
/// envelope out to every bound consumer.
#[derive(Clone)]
pub struct OutboundEnvelope {
    payload: SharedPayload,
    correlation_id: CorrelationId,
    response_address: Address,
    ttl: Option<Duration>,
}

impl OutboundEnvelope {
    pub fn new(
        payload: SharedPayload,
        correlation_id: CorrelationId,
        response_address: Address,
        ttl: Option<Duration>,
    ) -> Self {
        return OutboundEnvelope {
            payload,
            correlation_id,
            response_address,
            ttl,
        };
    }

    pub fn payload(&self) -> &(dyn Any + Send + Sync) {
        return self.payload.as_ref();
    }

    pub fn correlation_id(&self) -> CorrelationId {
        return self.correlation_id;
    }

    pub fn response_address(&self) -> &Address {
        return &self.response_address;
    }

    pub fn ttl(&self) -> Option<Duration> {
        return self.ttl;
    }
}
