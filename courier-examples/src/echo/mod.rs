pub mod echo_service;
pub mod messages;
