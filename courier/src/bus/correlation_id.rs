pub type CorrelationId = u64;

pub const RESERVED_CORRELATION_ID: CorrelationId = 0;

pub trait CorrelationIdGenerator: Send + Sync {
    fn generate(&self) -> CorrelationId;
}
