// Defines an Axis-Aligned Bounding Box

use super::Shape2D;
use crate::math::point::Point64;
use crate::math::vec2::Vec2;
use crate::objects::BodyHandle;

/// An axis-aligned rectangle described by its center and size.
///
/// Rotation is always zero; [`Shape2D::set_rotation`] is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    position: Vec2,
    size: Vec2,
    half_size: Vec2,
    body: Option<BodyHandle>,
}

impl AABB {
    /// Creates an AABB centered on `position`. Negative size components are
    /// made positive.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        let size = size.abs();
        AABB { position, size, half_size: size * 0.5, body: None }
    }

    pub fn from_size_xy(position: Vec2, size_x: f32, size_y: f32) -> Self {
        Self::new(position, Vec2::new(size_x, size_y))
    }

    /// Creates an AABB spanning two corners. The corners may be given in any order.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        let (lo, hi) = (min.min(max), min.max(max));
        Self::new((lo + hi) * 0.5, hi - lo)
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min_pt, max_pt) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self::from_min_max(min_pt, max_pt))
    }

    pub fn with_body(mut self, body: BodyHandle) -> Self {
        self.body = Some(body);
        self
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size.abs();
        self.half_size = self.size * 0.5;
    }

    /// Inclusive overlap test; touching boxes overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let (a_min, a_max) = (self.local_min(), self.local_max());
        let (b_min, b_max) = (other.local_min(), other.local_max());
        let x_overlap = a_max.x >= b_min.x && a_min.x <= b_max.x;
        let y_overlap = a_max.y >= b_min.y && a_min.y <= b_max.y;
        x_overlap && y_overlap
    }
}

impl Shape2D for AABB {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn half_size(&self) -> Vec2 {
        self.half_size
    }

    fn rotation(&self) -> f32 {
        0.0
    }

    fn set_rotation(&mut self, _rotation: f32) {}

    fn body(&self) -> Option<BodyHandle> {
        self.body
    }

    fn set_body(&mut self, body: Option<BodyHandle>) {
        self.body = body;
    }

    fn contains_point(&self, point: Point64) -> bool {
        let min = Point64::from(self.local_min());
        let max = Point64::from(self.local_max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Corners as (min,min), (min,max), (max,min), (max,max).
    ///
    /// This order is not a consistent winding; use [`Shape2D::hull`] for
    /// anything that walks edges.
    fn vertices(&self) -> Vec<Vec2> {
        let (min, max) = (self.local_min(), self.local_max());
        vec![
            Vec2::new(min.x, min.y),
            Vec2::new(min.x, max.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
        ]
    }

    fn hull(&self) -> Vec<Vec2> {
        let (min, max) = (self.local_min(), self.local_max());
        vec![
            Vec2::new(min.x, min.y),
            Vec2::new(min.x, max.y),
            Vec2::new(max.x, max.y),
            Vec2::new(max.x, min.y),
        ]
    }

    fn bounds(&self) -> AABB {
        AABB { body: None, ..*self }
    }
}
