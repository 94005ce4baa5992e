//! Frame clock: turns monotonic timestamps into per-frame deltas

/// Produces `dt` from successive timestamps (seconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Delta since the previous call. The first call yields 0; going
    /// backwards yields 0; long stalls are capped at `max_dt`.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        if dt > self.max_dt {
            log::warn!("Frame took {:.3}s, clamping to {:.3}s", dt, self.max_dt);
            self.max_dt
        } else {
            dt
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
