use std::any::TypeId;
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::bus::envelope::ResponseEnvelope;

pub type ResponseErrorType = Box<dyn Error + Send + Sync>;

pub type ResponseCallbackType = Arc<dyn ResponseCallback + 'static>;

/// Type-erased completion target of a pending request. One table holds callbacks of every
/// in-flight response type; the typed side lives in `RequestCompletionCallback`.
pub trait ResponseCallback: Send + Sync {
    fn on_response(&self, response: Result<ResponseEnvelope, ResponseErrorType>);
}

/// A single in-flight request: its completion callback, the payload types it accepts and its
/// local deadline. The transport-level TTL is independent of the deadline and never stored here.
pub struct PendingRequest {
    callback: ResponseCallbackType,
    accepted_response_types: Vec<TypeId>,
    fault_type: TypeId,
    created_at: SystemTime,
    deadline: SystemTime,
}

impl PendingRequest {
    pub fn new(
        callback: ResponseCallbackType,
        accepted_response_types: Vec<TypeId>,
        fault_type: TypeId,
        created_at: SystemTime,
        timeout: Duration,
    ) -> Self {
        return PendingRequest {
            callback,
            accepted_response_types,
            fault_type,
            created_at,
            deadline: created_at + timeout,
        };
    }

    pub fn created_at(&self) -> SystemTime {
        return self.created_at;
    }

    pub fn deadline(&self) -> SystemTime {
        return self.deadline;
    }

    pub(crate) fn accepts_response(&self, payload_type: TypeId) -> bool {
        return self.accepted_response_types.contains(&payload_type);
    }

    pub(crate) fn accepts_fault(&self, payload_type: TypeId) -> bool {
        return self.fault_type == payload_type;
    }

    pub(crate) fn on_response(&self, response: Result<ResponseEnvelope, ResponseErrorType>) {
        self.callback.on_response(response);
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;
    use std::sync::Arc;
    use std::time::{Duration, SystemTime};

    use crate::correlation::response_callback::tests::setup::NothingCallback;
    use crate::correlation::response_callback::PendingRequest;

    mod setup {
        use crate::bus::envelope::ResponseEnvelope;
        use crate::correlation::response_callback::{ResponseCallback, ResponseErrorType};

        pub struct NothingCallback {}

        impl ResponseCallback for NothingCallback {
            fn on_response(&self, _: Result<ResponseEnvelope, ResponseErrorType>) {}
        }
    }

    struct GetValueResponse {}

    struct PutValueResponse {}

    struct NotFoundFault {}

    fn pending_request() -> PendingRequest {
        return PendingRequest::new(
            Arc::new(NothingCallback {}),
            vec![TypeId::of::<GetValueResponse>()],
            TypeId::of::<NotFoundFault>(),
            SystemTime::now(),
            Duration::from_secs(5),
        );
    }

    #[test]
    fn accepts_a_declared_response_type() {
        let pending_request = pending_request();

        assert!(pending_request.accepts_response(TypeId::of::<GetValueResponse>()));
    }

    #[test]
    fn does_not_accept_an_undeclared_response_type() {
        let pending_request = pending_request();

        assert_eq!(false, pending_request.accepts_response(TypeId::of::<PutValueResponse>()));
    }

    #[test]
    fn accepts_the_declared_fault_type() {
        let pending_request = pending_request();

        assert!(pending_request.accepts_fault(TypeId::of::<NotFoundFault>()));
        assert_eq!(false, pending_request.accepts_fault(TypeId::of::<GetValueResponse>()));
    }

    #[test]
    fn deadline_is_derived_from_the_timeout() {
        let created_at = SystemTime::now();
        let pending_request = PendingRequest::new(
            Arc::new(NothingCallback {}),
            vec![TypeId::of::<GetValueResponse>()],
            TypeId::of::<NotFoundFault>(),
            created_at,
            Duration::from_secs(5),
        );

        assert_eq!(created_at + Duration::from_secs(5), pending_request.deadline());
        assert_eq!(created_at, pending_request.created_at());
    }
}
