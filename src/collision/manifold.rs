use crate::math::vec2::Vec2;
use crate::objects::BodyHandle;

/// Stores information about a collision between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// The first body involved in the collision.
    pub body_a: BodyHandle,
    /// The second body involved in the collision.
    pub body_b: BodyHandle,
    /// The collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// The amount of penetration between the shapes.
    pub depth: f32,
}
