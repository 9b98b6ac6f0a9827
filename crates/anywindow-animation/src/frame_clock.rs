use web_time::Instant;

/// Monotonic time source read by animations once per frame.
///
/// Hosts drive frames from their display refresh signal; the clock only
/// answers "what time is it now" so sampling stays deterministic under test.
pub trait AnimationClock {
    /// Nanoseconds since an arbitrary, fixed origin.
    fn now_nanos(&self) -> u64;

    fn now_millis(&self) -> u64 {
        self.now_nanos() / 1_000_000
    }
}

/// Wall clock backed by `web_time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock for SystemClock {
    fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

impl<C: AnimationClock + ?Sized> AnimationClock for &C {
    fn now_nanos(&self) -> u64 {
        (**self).now_nanos()
    }
}
