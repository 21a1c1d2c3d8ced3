//! Double-precision query points.
//!
//! Containment tests accept integer, `f32` and `f64` inputs. All of them are
//! widened into a [`Point64`] first so every overload compares in the same
//! precision.

use super::vec2::Vec2;

/// A point widened to `f64` for containment comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point64 {
    pub x: f64,
    pub y: f64,
}

impl Point64 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Point64 {
    fn from(v: Vec2) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}

impl From<(i32, i32)> for Point64 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f32, f32)> for Point64 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f64, f64)> for Point64 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
