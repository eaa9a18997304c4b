pub mod completion_handle;
pub mod demultiplexer;
pub mod pending_request_table;
pub mod request_canceled_error;
pub mod request_completion_callback;
pub mod request_outcome;
pub mod request_timeout_error;
pub mod response_callback;
pub mod response_listener;
pub mod response_variants;
pub mod timeout_supervisor;
