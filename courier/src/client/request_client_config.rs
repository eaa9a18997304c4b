use std::time::Duration;

pub struct RequestClientConfig {
    request_timeout: Duration,
    message_ttl: Option<Duration>,
}

impl RequestClientConfig {
    pub fn new(request_timeout: Duration, message_ttl: Option<Duration>) -> Self {
        return RequestClientConfig {
            request_timeout,
            message_ttl,
        };
    }

    pub fn default() -> Self {
        return Self::new(Duration::from_secs(30), None);
    }

    pub fn get_request_timeout(&self) -> Duration {
        return self.request_timeout;
    }

    pub fn get_message_ttl(&self) -> Option<Duration> {
        return self.message_ttl;
    }
}
