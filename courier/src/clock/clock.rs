use std::time::{Duration, SystemTime};

#[derive(Clone)]
pub struct SystemClock {}

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;

    fn duration_until(&self, time: SystemTime) -> Duration {
        return time.duration_since(self.now()).unwrap_or(Duration::ZERO);
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        return SystemTime::now();
    }
}

impl SystemClock {
    pub fn new() -> SystemClock {
        return SystemClock {};
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Add;
    use std::time::{Duration, SystemTime};

    use crate::clock::clock::{Clock, SystemClock};

    #[test]
    fn duration_until_a_future_time() {
        let clock = SystemClock::new();
        let duration = clock.duration_until(SystemTime::now().add(Duration::from_secs(100)));

        assert!(duration > Duration::from_secs(90));
    }

    #[test]
    fn duration_until_an_elapsed_time() {
        let clock = SystemClock::new();
        let duration = clock.duration_until(SystemTime::now() - Duration::from_secs(10));

        assert_eq!(Duration::ZERO, duration);
    }
}
