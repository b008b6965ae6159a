//! Best-effort frame-rate reporting for the monitor loop.
use std::time::Instant;

/// Frame-rate meter fed once per processed frame.
#[derive(Clone, Debug, Default)]
pub struct FpsMeter {
    prev: Option<Instant>,
    ticks: u64,
    sum_fps: f64,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame now and return the instantaneous rate.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Record a frame at `now`. The first tick has no interval and yields 0.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let fps = match self.prev {
            Some(prev) => {
                let dt = now.saturating_duration_since(prev).as_secs_f64();
                if dt > 0.0 {
                    1.0 / dt
                } else {
                    0.0
                }
            }
            None => 0.0,
        };
        if self.prev.is_some() {
            self.ticks += 1;
            self.sum_fps += fps;
        }
        self.prev = Some(now);
        fps
    }

    /// Mean of the instantaneous rates seen so far, 0 before two ticks.
    pub fn average(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.sum_fps / self.ticks as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero_then_rate_follows_interval() {
        let start = Instant::now();
        let mut meter = FpsMeter::new();
        assert_eq!(meter.tick_at(start), 0.0);
        assert_eq!(meter.average(), 0.0);
        let fps = meter.tick_at(start + Duration::from_millis(40));
        assert!((fps - 25.0).abs() < 1e-6);
        let fps = meter.tick_at(start + Duration::from_millis(60));
        assert!((fps - 50.0).abs() < 1e-6);
        assert!((meter.average() - 37.5).abs() < 1e-6);
    }
}
