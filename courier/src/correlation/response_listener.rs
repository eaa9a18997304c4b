use tokio::task::JoinHandle;
use tracing::debug;

use crate::bus::transport::ResponsePipe;
use crate::correlation::demultiplexer::ResponseDemultiplexer;

/// Consumes the client's response pipe for the lifetime of the client and forwards every
/// envelope to the demultiplexer. One listener serves arbitrarily many pending requests.
pub struct ResponseListener {}

impl ResponseListener {
    pub fn start(response_pipe: ResponsePipe, demultiplexer: ResponseDemultiplexer) -> JoinHandle<()> {
        let response_address = response_pipe.address().clone();
        let mut messages = response_pipe.into_messages();

        return tokio::spawn(async move {
            while let Some(envelope) = messages.recv().await {
                demultiplexer.dispatch(envelope);
            }
            debug!(response_address = %response_address, "response pipe closed");
        });
    }
}
