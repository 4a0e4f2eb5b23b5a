use std::time::{Duration, Instant};

use tracing::debug;

/// Wall-clock timer for one search run. The measured time ends up in `SearchStats`.
pub struct Stopwatch<'a> {
    start_time: Instant,
    name: &'a str,
}

impl<'a> Stopwatch<'a> {
    pub fn start(name: &'a str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Stops the timer and returns the time since `start`.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!("[{}]: {:?}", self.name, elapsed);
        elapsed
    }
}
