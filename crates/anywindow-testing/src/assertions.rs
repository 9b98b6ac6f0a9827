//! Assertion helpers for overlay motion.

use anywindow::{Fence, IntPoint};

/// Asserts that every position lies inside the fence.
pub fn assert_inside_fence(fence: &Fence, positions: &[IntPoint], msg: &str) {
    for (index, position) in positions.iter().enumerate() {
        assert!(
            fence.contains(*position),
            "{}: position #{} {:?} outside fence {:?}",
            msg,
            index,
            position,
            fence.rect()
        );
    }
}

/// Asserts that positions never move away from `target` on either axis.
pub fn assert_monotone_toward(positions: &[IntPoint], target: IntPoint, msg: &str) {
    for pair in positions.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(
            (target.x - after.x).abs() <= (target.x - before.x).abs()
                && (target.y - after.y).abs() <= (target.y - before.y).abs(),
            "{}: {:?} -> {:?} moved away from {:?}",
            msg,
            before,
            after,
            target
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "moved away")]
    fn monotone_check_rejects_overshoot() {
        let target = IntPoint::new(10, 10);
        assert_monotone_toward(
            &[IntPoint::new(0, 0), IntPoint::new(12, 10), IntPoint::new(10, 10)],
            target,
            "overshoot",
        );
    }

    #[test]
    fn inside_fence_accepts_edges() {
        let fence = Fence::new(0, 0, 100, 100).unwrap();
        assert_inside_fence(
            &fence,
            &[IntPoint::new(0, 0), IntPoint::new(100, 100)],
            "edges",
        );
    }
}
