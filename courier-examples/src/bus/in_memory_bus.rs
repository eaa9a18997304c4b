use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::mpsc;

use courier::bus::address::Address;
use courier::bus::envelope::{OutboundEnvelope, ResponseEnvelope};
use courier::bus::error::{EndpointErrorType, SendErrorType};
use courier::bus::transport::{ReceiveEndpointProvider, ResponsePipe, Transport};

const QUEUE_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct UnknownDestinationError {
    pub destination: Address,
}

impl Display for UnknownDestinationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "No consumer bound at {}", self.destination)
    }
}

impl Error for UnknownDestinationError {}

/// An in-process bus: request queues per bound service address, response queues per connected
/// receive endpoint. Publish fans one envelope out to every bound service.
pub struct InMemoryBus {
    service_queues: DashMap<Address, mpsc::Sender<OutboundEnvelope>>,
    response_queues: DashMap<Address, mpsc::Sender<ResponseEnvelope>>,
}

impl InMemoryBus {
    pub fn new() -> Self {
        return InMemoryBus {
            service_queues: DashMap::new(),
            response_queues: DashMap::new(),
        };
    }

    pub fn bind_service(&self, address: Address) -> mpsc::Receiver<OutboundEnvelope> {
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
        self.service_queues.insert(address, sender);
        return receiver;
    }

    pub async fn respond(&self, response_address: &Address, envelope: ResponseEnvelope) {
        let sender = self.response_queues.get(response_address).map(|entry| entry.value().clone());
        if let Some(sender) = sender {
            let _ = sender.send(envelope).await;
        }
    }
}

#[async_trait]
impl Transport for InMemoryBus {
    async fn send(&self, destination: Address, envelope: OutboundEnvelope) -> Result<(), SendErrorType> {
        let sender = self.service_queues.get(&destination).map(|entry| entry.value().clone());
        return match sender {
            Some(sender) => {
                sender
                    .send(envelope)
                    .await
                    .map_err(|_| Box::new(UnknownDestinationError { destination }) as SendErrorType)
            }
            None => Err(Box::new(UnknownDestinationError { destination })),
        };
    }

    async fn publish(&self, envelope: OutboundEnvelope) -> Result<(), SendErrorType> {
        let senders: Vec<mpsc::Sender<OutboundEnvelope>> =
            self.service_queues.iter().map(|entry| entry.value().clone()).collect();

        for sender in senders {
            let _ = sender.send(envelope.clone()).await;
        }
        return Ok(());
    }
}

#[async_trait]
impl ReceiveEndpointProvider for InMemoryBus {
    async fn connect_receive_endpoint(&self, endpoint_name: &str) -> Result<ResponsePipe, EndpointErrorType> {
        let address = Address::new(format!("memory://{}", endpoint_name));
        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
        self.response_queues.insert(address.clone(), sender);

        return Ok(ResponsePipe::new(address, receiver));
    }
}
