use chrono::{DateTime, Utc};
use log::{debug, info};

/// Logs how long a stage of request handling took when it goes out of scope.
///
/// ```ignore
/// let _t = Timer::start("Fetching image");
/// let bytes = fetcher.fetch(url).await;
/// ```
pub struct Timer {
    stage: String,
    started: DateTime<Utc>,
}

impl Timer {
    pub fn start(stage: impl Into<String>) -> Self {
        let stage = stage.into();
        let started = Utc::now();
        debug!("{}: started at {}", stage, started.to_rfc3339());

        Timer { stage, started }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started).num_milliseconds()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        info!("{} took {} msec", self.stage, self.elapsed_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn elapsed_grows_while_in_scope() {
        let t = Timer::start("Fetching image");
        std::thread::sleep(Duration::from_millis(5));

        assert!(t.elapsed_ms() >= 5);
    }

    #[test]
    fn fresh_timer_is_near_zero() {
        let t = Timer::start(String::from("Detecting labels"));
        assert!(t.elapsed_ms() < 1_000);
    }
}
