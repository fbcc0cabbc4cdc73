use std::num::NonZeroU32;
use std::thread;
use std::time::{Duration, Instant};

/// Frame limiter for the game loop
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    /// Sleep until at least `1/rate` seconds have passed since the previous
    /// tick, then return how long it's been since the previous tick.  The
    /// first call returns immediately with a zero duration.
    pub(crate) fn tick(&mut self, rate: NonZeroU32) -> Duration {
        let period = Duration::from_secs(1) / rate.get();
        if let Some(last) = self.last_tick {
            let wait = (last + period).saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
        let now = Instant::now();
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        elapsed
    }
}
