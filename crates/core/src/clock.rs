//! Wall-clock time source for the rotation angle.

use web_time::Instant;

/// Seconds-since-start clock.
///
/// Started once when the windowing layer comes up; every frame reads the
/// elapsed time from the same baseline. `web_time::Instant` resolves to
/// `std::time::Instant` natively and to `performance.now()` in the browser.
#[derive(Debug, Clone, Copy)]
pub struct RotationClock {
    start: Instant,
}

impl RotationClock {
    /// Starts a clock at the current instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since [`RotationClock::start`].
    pub fn elapsed_secs(&self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.start)
            .as_secs_f64()
    }
}

impl Default for RotationClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Rotation angle in radians for a given elapsed time: one radian per second.
///
/// Unbounded; no wraparound is applied.
#[inline]
pub fn rotation_angle(elapsed_secs: f64) -> f32 {
    elapsed_secs as f32
}
