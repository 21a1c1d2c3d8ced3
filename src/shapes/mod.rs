pub mod aabb;
pub mod polygon;

pub use aabb::AABB;
pub use polygon::Polygon;

use crate::math::point::Point64;
use crate::math::vec2::Vec2;
use crate::objects::BodyHandle;

/// Geometry shared by every collidable shape.
///
/// `position` is the shape's center in world space and `size` its unrotated
/// extent; `half_size` is always `size / 2`. The optional body handle is a
/// non-owning back-reference to the rigid body that moves the shape.
pub trait Shape2D {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn size(&self) -> Vec2;

    fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Rotation in radians about `position`.
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, rotation: f32);

    fn body(&self) -> Option<BodyHandle>;
    fn set_body(&mut self, body: Option<BodyHandle>);

    fn local_min(&self) -> Vec2 {
        self.position() - self.half_size()
    }

    fn local_max(&self) -> Vec2 {
        self.position() + self.half_size()
    }

    /// Inclusive containment test in double precision.
    fn contains_point(&self, point: Point64) -> bool;

    /// Inclusive containment test for anything convertible to [`Point64`]:
    /// `Vec2`, `(i32, i32)`, `(f32, f32)` or `(f64, f64)`.
    fn contains<P: Into<Point64>>(&self, point: P) -> bool
    where
        Self: Sized,
    {
        self.contains_point(point.into())
    }

    /// World-space vertices in the shape's native order.
    fn vertices(&self) -> Vec<Vec2>;

    /// World-space vertices in clockwise order. Edge normals computed from
    /// this list point outward; SAT and raycasts use it.
    fn hull(&self) -> Vec<Vec2>;

    /// Smallest axis-aligned box enclosing the world-space vertices.
    fn bounds(&self) -> AABB {
        AABB::from_points(&self.hull()).unwrap_or_else(|| AABB::new(self.position(), Vec2::ZERO))
    }
}

/// Closed set of shapes a body can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    AABB(AABB),
    Polygon(Polygon),
}

impl Shape {
    fn inner(&self) -> &dyn Shape2D {
        match self {
            Shape::AABB(aabb) => aabb,
            Shape::Polygon(polygon) => polygon,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Shape2D {
        match self {
            Shape::AABB(aabb) => aabb,
            Shape::Polygon(polygon) => polygon,
        }
    }
}

impl Shape2D for Shape {
    fn position(&self) -> Vec2 {
        self.inner().position()
    }

    fn set_position(&mut self, position: Vec2) {
        self.inner_mut().set_position(position)
    }

    fn size(&self) -> Vec2 {
        self.inner().size()
    }

    fn half_size(&self) -> Vec2 {
        self.inner().half_size()
    }

    fn rotation(&self) -> f32 {
        self.inner().rotation()
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.inner_mut().set_rotation(rotation)
    }

    fn body(&self) -> Option<BodyHandle> {
        self.inner().body()
    }

    fn set_body(&mut self, body: Option<BodyHandle>) {
        self.inner_mut().set_body(body)
    }

    fn contains_point(&self, point: Point64) -> bool {
        self.inner().contains_point(point)
    }

    fn vertices(&self) -> Vec<Vec2> {
        self.inner().vertices()
    }

    fn hull(&self) -> Vec<Vec2> {
        self.inner().hull()
    }

    fn bounds(&self) -> AABB {
        self.inner().bounds()
    }
}

impl From<AABB> for Shape {
    fn from(aabb: AABB) -> Self {
        Shape::AABB(aabb)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_enum_delegates() {
        let mut shape: Shape = AABB::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)).into();
        assert_eq!(shape.local_min(), Vec2::new(0.0, 0.0));
        assert!(shape.contains((2, 2)));

        shape.set_position(Vec2::new(10.0, 10.0));
        assert_eq!(shape.position(), Vec2::new(10.0, 10.0));
        assert!(!shape.contains((2, 2)));
    }

    #[test]
    fn test_shape_enum_polygon_rotation() {
        let mut shape: Shape = Polygon::rectangle(Vec2::ZERO, Vec2::new(2.0, 2.0), 0.0).into();
        shape.set_rotation(0.5);
        assert!((shape.rotation() - 0.5).abs() < 1e-6);
    }
}
