//! Geometric primitives: Point, IntPoint, IntSize, IntRect

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Truncates toward zero, saturating at the `i32` range.
    pub fn to_int_point(&self) -> IntPoint {
        IntPoint {
            x: self.x as i32,
            y: self.y as i32,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Pixel position in display space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ZERO: IntPoint = IntPoint { x: 0, y: 0 };

    pub fn to_point(&self) -> Point {
        Point {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Edge-based integer rectangle. `right` and `bottom` are inclusive bounds
/// for positions, not exclusive pixel ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(size: IntSize) -> Self {
        Self {
            left: 0,
            top: 0,
            right: size.width,
            bottom: size.height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: IntPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(20.0, 30.0);
        assert_eq!(a.midpoint(b), Point::new(10.0, 20.0));
    }

    #[test]
    fn to_int_point_truncates() {
        assert_eq!(Point::new(10.9, -3.7).to_int_point(), IntPoint::new(10, -3));
    }

    #[test]
    fn to_int_point_saturates_huge_values() {
        let p = Point::new(f32::MAX, f32::MIN).to_int_point();
        assert_eq!(p, IntPoint::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let rect = IntRect::new(0, 0, 100, 50);
        assert!(rect.contains(IntPoint::new(100, 50)));
        assert!(rect.contains(IntPoint::ZERO));
        assert!(!rect.contains(IntPoint::new(101, 0)));
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
    }
}
