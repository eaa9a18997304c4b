//! Request/response correlation client for asynchronous message buses.
//!
//! A caller sends a request through a [`client::request_client::RequestClient`] and awaits
//! exactly one matching response, fault, timeout or cancellation. The transport itself is an
//! external collaborator, consumed through the traits in [`bus`].

pub mod bus;
pub mod client;
pub mod clock;
pub mod correlation;
