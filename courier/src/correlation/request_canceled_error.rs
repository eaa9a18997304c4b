use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::bus::correlation_id::CorrelationId;

pub struct RequestCanceledError {
    pub correlation_id: CorrelationId,
}

impl Display for RequestCanceledError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Request canceled {}", self.correlation_id)
    }
}

impl Debug for RequestCanceledError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Request canceled {}", self.correlation_id)
    }
}

impl Error for RequestCanceledError {}
