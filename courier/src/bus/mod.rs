pub mod address;
pub mod correlation_id;
pub mod envelope;
pub mod error;
pub mod random_correlation_id_generator;
pub mod transport;
