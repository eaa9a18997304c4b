use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::bus::address::Address;
use crate::bus::envelope::{OutboundEnvelope, ResponseEnvelope};
use crate::bus::error::{EndpointErrorType, SendErrorType};

/// The send half of the bus. Implementations must be safe for concurrent invocation; this
/// crate performs no locking on the transport itself.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, destination: Address, envelope: OutboundEnvelope) -> Result<(), SendErrorType>;

    async fn publish(&self, envelope: OutboundEnvelope) -> Result<(), SendErrorType>;
}

/// Provisions a transient receive endpoint. Resolving the returned future is the endpoint's
/// ready signal.
#[async_trait]
pub trait ReceiveEndpointProvider: Send + Sync {
    async fn connect_receive_endpoint(&self, endpoint_name: &str) -> Result<ResponsePipe, EndpointErrorType>;
}

/// A connected receive endpoint: the address responders must reply to, plus the stream of
/// envelopes delivered there. One pipe serves every pending request of a client.
pub struct ResponsePipe {
    address: Address,
    messages: mpsc::Receiver<ResponseEnvelope>,
}

impl ResponsePipe {
    pub fn new(address: Address, messages: mpsc::Receiver<ResponseEnvelope>) -> Self {
        return ResponsePipe { address, messages };
    }

    pub fn address(&self) -> &Address {
        return &self.address;
    }

    pub fn into_messages(self) -> mpsc::Receiver<ResponseEnvelope> {
        return self.messages;
    }
}
