/// Millisecond time source. In the browser this is `performance.now()`.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Seconds elapsed since the loop's time origin.
///
/// The origin is fixed on the first sample and never moves again. Readings
/// are non-decreasing even if the underlying clock steps backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationClock {
    start_ms: Option<f64>,
    elapsed: f32,
}

impl AnimationClock {
    /// Captures `now_ms` as the time origin. Later calls are ignored.
    pub fn start(&mut self, now_ms: f64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
            self.elapsed = 0.0;
        }
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    /// Recomputes and returns the elapsed seconds at `now_ms`.
    pub fn sample(&mut self, now_ms: f64) -> f32 {
        let Some(start) = self.start_ms else {
            return 0.0;
        };
        let secs = ((now_ms - start) / 1000.0) as f32;
        self.elapsed = self.elapsed.max(secs);
        self.elapsed
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }
}
