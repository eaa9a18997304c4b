use rand::{Rng, thread_rng};

use crate::bus::correlation_id::{CorrelationId, CorrelationIdGenerator, RESERVED_CORRELATION_ID};

pub struct RandomCorrelationIdGenerator {}

impl CorrelationIdGenerator for RandomCorrelationIdGenerator {
    fn generate(&self) -> CorrelationId {
        loop {
            let correlation_id: CorrelationId = thread_rng().gen();
            if correlation_id != RESERVED_CORRELATION_ID {
                return correlation_id;
            }
        }
    }
}

impl RandomCorrelationIdGenerator {
    pub fn new() -> Self {
        return RandomCorrelationIdGenerator {};
    }
}
