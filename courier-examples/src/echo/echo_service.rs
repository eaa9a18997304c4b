use std::sync::Arc;

use tokio::task::JoinHandle;

use courier::bus::address::Address;
use courier::bus::envelope::ResponseEnvelope;

use crate::bus::in_memory_bus::InMemoryBus;
use crate::echo::messages::{EchoFault, EchoRequest, EchoResponse};

/// Binds to one service address on the in-memory bus and answers every `EchoRequest` with an
/// `EchoResponse`, or an `EchoFault` for empty text.
pub struct EchoService {}

impl EchoService {
    pub fn start(bus: Arc<InMemoryBus>, service_address: Address) -> JoinHandle<()> {
        let mut requests = bus.bind_service(service_address.clone());

        return tokio::spawn(async move {
            while let Some(envelope) = requests.recv().await {
                let correlation_id = envelope.correlation_id();
                let response_address = envelope.response_address().clone();

                if let Some(request) = envelope.payload().downcast_ref::<EchoRequest>() {
                    let reply = if request.text.is_empty() {
                        ResponseEnvelope::fault(correlation_id, EchoFault { code: "EmptyText".to_string() })
                    } else {
                        ResponseEnvelope::response(
                            correlation_id,
                            EchoResponse {
                                echoed: request.text.clone(),
                                answered_by: service_address.as_str().to_string(),
                            },
                        )
                    };
                    bus.respond(&response_address, reply).await;
                }
            }
        });
    }
}
