pub mod request_client;
pub mod request_client_config;
pub mod request_options;
