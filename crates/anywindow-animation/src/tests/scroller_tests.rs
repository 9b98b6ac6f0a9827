use super::*;

use std::cell::Cell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

#[derive(Clone, Default)]
struct TestClock {
    now: Rc<Cell<u64>>,
}

impl TestClock {
    fn advance(&self, nanos: u64) {
        self.now.set(self.now.get() + nanos);
    }
}

impl AnimationClock for TestClock {
    fn now_nanos(&self) -> u64 {
        self.now.get()
    }
}

fn run_to_end(scroller: &mut Scroller<TestClock>, clock: &TestClock) -> Vec<IntPoint> {
    let mut samples = Vec::new();
    for _ in 0..120 {
        match scroller.step() {
            Some(position) => samples.push(position),
            None => break,
        }
        clock.advance(FRAME_NANOS);
    }
    samples
}

#[test]
fn new_scroller_is_finished() {
    let mut scroller = Scroller::new(TestClock::default());
    assert!(scroller.is_finished());
    assert_eq!(scroller.step(), None);
    assert_eq!(scroller.final_position(), None);
}

#[test]
fn first_step_returns_start_position() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(750, 950, 50, 25);
    assert_eq!(scroller.step(), Some(IntPoint::new(750, 950)));
}

#[test]
fn run_converges_monotonically_to_target() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(750, 950, 50, 25);

    let samples = run_to_end(&mut scroller, &clock);

    assert_eq!(samples.last(), Some(&IntPoint::new(800, 975)));
    for pair in samples.windows(2) {
        assert!(pair[1].x >= pair[0].x, "x went backwards: {pair:?}");
        assert!(pair[1].y >= pair[0].y, "y went backwards: {pair:?}");
    }
    // 250ms at 60fps plus the final target frame
    assert!(samples.len() <= 17, "took {} frames", samples.len());
    assert!(scroller.is_finished());
    assert_eq!(scroller.step(), None);
}

#[test]
fn negative_delta_moves_backwards() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(600, 400, -600, -100);

    let samples = run_to_end(&mut scroller, &clock);

    assert_eq!(samples.last(), Some(&IntPoint::new(0, 300)));
    for pair in samples.windows(2) {
        assert!(pair[1].x <= pair[0].x);
        assert!(pair[1].y <= pair[0].y);
    }
}

#[test]
fn early_frames_cover_more_distance_than_late_frames() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(0, 0, 1000, 0);

    let samples = run_to_end(&mut scroller, &clock);
    let first_step = samples[1].x - samples[0].x;
    let last_step = samples[samples.len() - 2].x - samples[samples.len() - 3].x;
    assert!(
        first_step > last_step,
        "expected deceleration, first {first_step} last {last_step}"
    );
}

#[test]
fn abort_stops_without_reaching_target() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(0, 0, 500, 500);
    clock.advance(FRAME_NANOS);
    let mid = scroller.step().expect("running");
    assert!(mid.x > 0 && mid.x < 500);

    scroller.abort();

    assert!(scroller.is_finished());
    assert_eq!(scroller.step(), None);
}

#[test]
fn start_replaces_run_in_progress() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(0, 0, 500, 0);
    clock.advance(FRAME_NANOS * 3);
    let _ = scroller.step();

    scroller.start(100, 100, -100, 0);

    assert_eq!(scroller.final_position(), Some(IntPoint::new(0, 100)));
    assert_eq!(scroller.step(), Some(IntPoint::new(100, 100)));
}

#[test]
fn zero_duration_jumps_to_target() {
    let clock = TestClock::default();
    let mut scroller = Scroller::with_curve(
        clock.clone(),
        Duration::ZERO,
        DecelerateInterpolator::default(),
    );
    scroller.start(10, 10, 5, 5);
    assert_eq!(scroller.step(), Some(IntPoint::new(15, 15)));
    assert_eq!(scroller.step(), None);
}

#[test]
fn huge_delta_saturates_instead_of_overflowing() {
    let clock = TestClock::default();
    let mut scroller = Scroller::new(clock.clone());
    scroller.start(100, i32::MAX - 10, 0, i32::MAX);
    clock.advance(DEFAULT_SCROLL_DURATION.as_nanos() as u64);
    assert_eq!(scroller.step(), Some(IntPoint::new(100, i32::MAX)));
}
