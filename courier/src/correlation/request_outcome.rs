use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::bus::correlation_id::CorrelationId;
use crate::bus::error::SendErrorType;

/// The two successful terminations of a request: a declared response or a declared fault.
/// A fault is an application-level outcome, not an exception-style failure.
#[derive(Debug, Eq, PartialEq)]
pub enum RequestOutcome<Response, Fault> {
    Response(Response),
    Fault(Fault),
}

impl<Response, Fault> RequestOutcome<Response, Fault> {
    pub fn response(self) -> Option<Response> {
        return match self {
            RequestOutcome::Response(response) => Some(response),
            RequestOutcome::Fault(_) => None,
        };
    }

    pub fn fault(self) -> Option<Fault> {
        return match self {
            RequestOutcome::Response(_) => None,
            RequestOutcome::Fault(fault) => Some(fault),
        };
    }
}

#[derive(Debug)]
pub enum RequestError {
    SendFailure(SendErrorType),
    Timeout { correlation_id: CorrelationId },
    Canceled,
}

impl Display for RequestError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::SendFailure(error) => write!(formatter, "Send failure: {}", error),
            RequestError::Timeout { correlation_id } => write!(formatter, "Request timeout {}", correlation_id),
            RequestError::Canceled => write!(formatter, "Request canceled"),
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        return match self {
            RequestError::SendFailure(error) => Some(error.as_ref()),
            _ => None,
        };
    }
}
