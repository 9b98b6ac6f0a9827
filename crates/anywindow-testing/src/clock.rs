use anywindow::AnimationClock;
use std::cell::Cell;
use std::rc::Rc;

/// One 60 Hz frame.
pub const FRAME_NANOS: u64 = 16_666_667;

const NANOS_PER_MS: u64 = 1_000_000;

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_nanos(&self, nanos: u64) {
        self.now.set(self.now.get().saturating_add(nanos));
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance_nanos(millis.saturating_mul(NANOS_PER_MS));
    }

    pub fn advance_frame(&self) {
        self.advance_nanos(FRAME_NANOS);
    }

    pub fn set_nanos(&self, nanos: u64) {
        self.now.set(nanos);
    }
}

impl AnimationClock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.now.get()
    }
}
