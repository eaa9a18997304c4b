use std::error::Error;

pub type SendErrorType = Box<dyn Error + Send + Sync + 'static>;

pub type EndpointErrorType = Box<dyn Error + Send + Sync + 'static>;
