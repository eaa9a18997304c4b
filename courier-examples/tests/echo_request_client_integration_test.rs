use std::sync::Arc;
use std::time::{Duration, SystemTime};

use courier::bus::address::Address;
use courier::bus::transport::ReceiveEndpointProvider;
use courier::client::request_client::{RequestClient, SendMode};
use courier::client::request_client_config::RequestClientConfig;
use courier::clock::clock::SystemClock;
use courier::correlation::request_outcome::{RequestError, RequestOutcome};

use courier_examples::bus::in_memory_bus::InMemoryBus;
use courier_examples::echo::echo_service::EchoService;
use courier_examples::echo::messages::{EchoFault, EchoRequest, EchoResponse};

async fn shared_endpoint_client(bus: Arc<InMemoryBus>, send_mode: SendMode, timeout: Duration) -> RequestClient {
    let response_pipe = bus.connect_receive_endpoint("shared-client").await.unwrap();
    return RequestClient::new(
        bus,
        response_pipe,
        send_mode,
        RequestClientConfig::new(timeout, None),
        Arc::new(SystemClock::new()),
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn echo_request_over_a_shared_response_endpoint() {
    let bus = Arc::new(InMemoryBus::new());
    let _echo_service = EchoService::start(bus.clone(), Address::new("memory://echo"));

    let client = shared_endpoint_client(
        bus.clone(),
        SendMode::SendTo(Address::new("memory://echo")),
        Duration::from_secs(5),
    )
    .await;

    let outcome: RequestOutcome<EchoResponse, EchoFault> =
        client.request(EchoRequest { text: "hello".to_string() }).await.unwrap();

    let response = outcome.response().unwrap();
    assert_eq!("hello", response.echoed);
    assert_eq!("memory://echo", response.answered_by);
    assert_eq!(0, client.pending_request_count());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn empty_text_resolves_as_an_echo_fault() {
    let bus = Arc::new(InMemoryBus::new());
    let _echo_service = EchoService::start(bus.clone(), Address::new("memory://echo"));

    let client = shared_endpoint_client(
        bus.clone(),
        SendMode::SendTo(Address::new("memory://echo")),
        Duration::from_secs(5),
    )
    .await;

    let outcome: RequestOutcome<EchoResponse, EchoFault> =
        client.request(EchoRequest { text: "".to_string() }).await.unwrap();

    assert_eq!(Some(EchoFault { code: "EmptyText".to_string() }), outcome.fault());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn broadcast_request_is_satisfied_by_the_first_responder() {
    let bus = Arc::new(InMemoryBus::new());
    let _first_echo_service = EchoService::start(bus.clone(), Address::new("memory://echo-1"));
    let _second_echo_service = EchoService::start(bus.clone(), Address::new("memory://echo-2"));

    let client = shared_endpoint_client(bus.clone(), SendMode::Publish, Duration::from_secs(5)).await;

    let outcome: RequestOutcome<EchoResponse, EchoFault> =
        client.request(EchoRequest { text: "everyone".to_string() }).await.unwrap();

    let response = outcome.response().unwrap();
    assert_eq!("everyone", response.echoed);
    assert!(response.answered_by == "memory://echo-1" || response.answered_by == "memory://echo-2");
    assert_eq!(0, client.pending_request_count());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ephemeral_endpoint_client_round_trip() {
    let bus = Arc::new(InMemoryBus::new());
    let _echo_service = EchoService::start(bus.clone(), Address::new("memory://echo"));

    let client = RequestClient::connect(
        bus.clone(),
        bus.clone(),
        SendMode::SendTo(Address::new("memory://echo")),
        RequestClientConfig::new(Duration::from_secs(5), Some(Duration::from_secs(60))),
        Arc::new(SystemClock::new()),
    )
    .await
    .unwrap();

    let outcome: RequestOutcome<EchoResponse, EchoFault> =
        client.request(EchoRequest { text: "ephemeral".to_string() }).await.unwrap();

    assert_eq!("ephemeral", outcome.response().unwrap().echoed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unresponsive_service_times_out() {
    let bus = Arc::new(InMemoryBus::new());
    let _unread_requests = bus.bind_service(Address::new("memory://stuck"));

    let client = shared_endpoint_client(
        bus.clone(),
        SendMode::SendTo(Address::new("memory://stuck")),
        Duration::from_millis(100),
    )
    .await;

    let started_at = SystemTime::now();
    let outcome: Result<RequestOutcome<EchoResponse, EchoFault>, RequestError> =
        client.request(EchoRequest { text: "anyone there".to_string() }).await;

    assert!(matches!(outcome, Err(RequestError::Timeout { .. })));
    assert!(SystemTime::now().duration_since(started_at).unwrap() >= Duration::from_millis(100));
    assert_eq!(0, client.pending_request_count());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_echo_requests_share_one_listener() {
    let bus = Arc::new(InMemoryBus::new());
    let _echo_service = EchoService::start(bus.clone(), Address::new("memory://echo"));

    let client = Arc::new(
        shared_endpoint_client(
            bus.clone(),
            SendMode::SendTo(Address::new("memory://echo")),
            Duration::from_secs(5),
        )
        .await,
    );

    let mut request_handles = Vec::new();
    for index in 0..10 {
        let requesting_client = client.clone();
        request_handles.push(tokio::spawn(async move {
            let text = format!("echo-{}", index);
            let outcome: RequestOutcome<EchoResponse, EchoFault> =
                requesting_client.request(EchoRequest { text: text.clone() }).await.unwrap();
            return (text, outcome);
        }));
    }

    for request_handle in request_handles {
        let (text, outcome) = request_handle.await.unwrap();
        assert_eq!(text, outcome.response().unwrap().echoed);
    }
    assert_eq!(0, client.pending_request_count());
}
