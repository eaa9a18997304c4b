use std::any::{Any, TypeId};
use std::sync::Arc;

use rand::{Rng, thread_rng};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::bus::address::Address;
use crate::bus::correlation_id::{CorrelationId, CorrelationIdGenerator};
use crate::bus::envelope::OutboundEnvelope;
use crate::bus::error::EndpointErrorType;
use crate::bus::random_correlation_id_generator::RandomCorrelationIdGenerator;
use crate::bus::transport::{ReceiveEndpointProvider, ResponsePipe, Transport};
use crate::client::request_client_config::RequestClientConfig;
use crate::client::request_options::{RequestOptions, SendContext};
use crate::clock::clock::Clock;
use crate::correlation::demultiplexer::ResponseDemultiplexer;
use crate::correlation::pending_request_table::PendingRequestTable;
use crate::correlation::request_canceled_error::RequestCanceledError;
use crate::correlation::request_completion_callback::RequestCompletionCallback;
use crate::correlation::request_outcome::{RequestError, RequestOutcome};
use crate::correlation::response_callback::PendingRequest;
use crate::correlation::response_listener::ResponseListener;
use crate::correlation::response_variants::ResponseVariants;
use crate::correlation::timeout_supervisor::TimeoutSupervisor;

/// Point-to-point sends go to one known service address; broadcast publishes to all interested
/// consumers and whichever responds first satisfies the call. Both share the same correlation
/// and timeout machinery.
pub enum SendMode {
    SendTo(Address),
    Publish,
}

/// The public façade: generate id, register the pending request, hand the tagged request to
/// the transport, arm the timeout, and let exactly one of {response, fault, timeout,
/// cancellation} reach the awaiting caller.
pub struct RequestClient {
    transport: Arc<dyn Transport>,
    send_mode: SendMode,
    config: RequestClientConfig,
    clock: Arc<dyn Clock>,
    correlation_id_generator: Arc<dyn CorrelationIdGenerator>,
    pending_request_table: Arc<PendingRequestTable>,
    timeout_supervisor: TimeoutSupervisor,
    response_address: Address,
    listener_handle: JoinHandle<()>,
}

impl RequestClient {
    /// Builds a client on a pre-provisioned shared response endpoint.
    pub fn new(
        transport: Arc<dyn Transport>,
        response_pipe: ResponsePipe,
        send_mode: SendMode,
        config: RequestClientConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let pending_request_table = Arc::new(PendingRequestTable::new());
        let response_address = response_pipe.address().clone();
        let listener_handle = ResponseListener::start(
            response_pipe,
            ResponseDemultiplexer::new(pending_request_table.clone()),
        );

        return RequestClient {
            transport,
            send_mode,
            config,
            clock: clock.clone(),
            correlation_id_generator: Arc::new(RandomCorrelationIdGenerator::new()),
            pending_request_table: pending_request_table.clone(),
            timeout_supervisor: TimeoutSupervisor::new(pending_request_table, clock),
            response_address,
            listener_handle,
        };
    }

    /// Provisions a fresh ephemeral receive endpoint, awaits its readiness and builds the
    /// client on it.
    pub async fn connect(
        transport: Arc<dyn Transport>,
        endpoint_provider: Arc<dyn ReceiveEndpointProvider>,
        send_mode: SendMode,
        config: RequestClientConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, EndpointErrorType> {
        let endpoint_name = format!("{:016x}", thread_rng().gen::<u64>());
        let response_pipe = endpoint_provider.connect_receive_endpoint(&endpoint_name).await?;

        return Ok(Self::new(transport, response_pipe, send_mode, config, clock));
    }

    pub async fn request<Request, Response, Fault>(
        &self,
        request: Request,
    ) -> Result<RequestOutcome<Response, Fault>, RequestError>
        where Request: Any + Send + Sync, Response: ResponseVariants, Fault: Any + Send {
        return self.submit(request, RequestOptions::new()).await?.response().await;
    }

    pub async fn request_with_options<Request, Response, Fault>(
        &self,
        request: Request,
        options: RequestOptions,
    ) -> Result<RequestOutcome<Response, Fault>, RequestError>
        where Request: Any + Send + Sync, Response: ResponseVariants, Fault: Any + Send {
        return self.submit(request, options).await?.response().await;
    }

    /// Registers and sends one request. On a transport failure the pending entry is removed
    /// without completion, no timer is armed, and the failure surfaces immediately.
    pub async fn submit<Request, Response, Fault>(
        &self,
        request: Request,
        options: RequestOptions,
    ) -> Result<PendingReply<Response, Fault>, RequestError>
        where Request: Any + Send + Sync, Response: ResponseVariants, Fault: Any + Send {
        let correlation_id = self.correlation_id_generator.generate();
        let timeout = options.request_timeout.unwrap_or(self.config.get_request_timeout());
        let ttl = options.message_ttl.or(self.config.get_message_ttl());

        let callback = RequestCompletionCallback::<Response, Fault>::new();
        let pending_request = PendingRequest::new(
            callback.clone(),
            Response::accepted_types(),
            TypeId::of::<Fault>(),
            self.clock.now(),
            timeout,
        );
        let deadline = pending_request.deadline();
        self.pending_request_table.register(correlation_id, pending_request);

        if let Some(on_send) = &options.on_send {
            on_send(&SendContext::new(
                correlation_id,
                self.destination().cloned(),
                self.response_address.clone(),
                timeout,
                ttl,
            ));
        }

        let envelope = OutboundEnvelope::new(Arc::new(request), correlation_id, self.response_address.clone(), ttl);
        let send_result = match &self.send_mode {
            SendMode::SendTo(destination) => self.transport.send(destination.clone(), envelope).await,
            SendMode::Publish => self.transport.publish(envelope).await,
        };
        if let Err(error) = send_result {
            self.pending_request_table.remove(correlation_id);
            return Err(RequestError::SendFailure(error));
        }

        let timer_handle = self.timeout_supervisor.arm(correlation_id, deadline);
        return Ok(PendingReply {
            correlation_id,
            callback,
            timer_handle,
            pending_request_table: self.pending_request_table.clone(),
        });
    }

    /// External cancellation racing against response delivery and timeout; returns whether
    /// the cancellation won.
    pub fn cancel(&self, correlation_id: CorrelationId) -> bool {
        return self.pending_request_table
            .try_complete(correlation_id, Err(Box::new(RequestCanceledError { correlation_id })));
    }

    pub fn response_address(&self) -> &Address {
        return &self.response_address;
    }

    pub fn pending_request_count(&self) -> usize {
        return self.pending_request_table.len();
    }

    /// Force-completes every pending request with a cancellation outcome and releases the
    /// response subscription. Idempotent.
    pub fn shutdown(&self) {
        self.listener_handle.abort();
        self.pending_request_table.cancel_all();
        debug!(response_address = %self.response_address, "request client shut down");
    }

    fn destination(&self) -> Option<&Address> {
        return match &self.send_mode {
            SendMode::SendTo(destination) => Some(destination),
            SendMode::Publish => None,
        };
    }
}

impl Drop for RequestClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// An accepted, sent request awaiting its terminal outcome. Awaiting `response` is the only
/// suspension point exposed to the caller.
pub struct PendingReply<Response, Fault> {
    correlation_id: CorrelationId,
    callback: Arc<RequestCompletionCallback<Response, Fault>>,
    timer_handle: JoinHandle<()>,
    pending_request_table: Arc<PendingRequestTable>,
}

impl<Response, Fault> PendingReply<Response, Fault>
    where Response: ResponseVariants, Fault: Any + Send {
    pub fn correlation_id(&self) -> CorrelationId {
        return self.correlation_id;
    }

    pub fn cancel(&self) -> bool {
        let correlation_id = self.correlation_id;
        return self.pending_request_table
            .try_complete(correlation_id, Err(Box::new(RequestCanceledError { correlation_id })));
    }

    pub async fn response(self) -> Result<RequestOutcome<Response, Fault>, RequestError> {
        let outcome = self.callback.handle().await;
        self.timer_handle.abort();
        return outcome;
    }
}
