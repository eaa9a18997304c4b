use std::any::TypeId;

use crate::bus::envelope::AnyPayload;

/// The set of response kinds a request is willing to accept, expressed as a closed-set match
/// over payload types. A single struct accepts exactly its own type; an enum with one payload
/// per variant accepts each of them (derivable through `courier-macro`).
pub trait ResponseVariants: Send + Sized + 'static {
    fn accepted_types() -> Vec<TypeId>;

    fn from_payload(payload: AnyPayload) -> Option<Self>;
}
