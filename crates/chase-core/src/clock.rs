use instant::Instant;
use std::time::Duration;

/// Wall-clock delta-time tracker; one `tick` per rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_instant: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { last_instant: now }
    }

    /// Seconds since the previous tick (or since construction).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as [`FrameClock::tick`] with a caller-supplied timestamp.
    ///
    /// A timestamp earlier than the previous one yields 0 rather than a negative delta.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = if now > self.last_instant {
            now - self.last_instant
        } else {
            Duration::ZERO
        };
        self.last_instant = now;
        dt.as_secs_f32()
    }
}
