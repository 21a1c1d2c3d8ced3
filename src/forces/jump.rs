use super::ForceGenerator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody2D;

/// Upward push applied while registered: adds `jump * mass` every step.
///
/// The generator has no notion of "once". Whoever owns the jump registers it
/// for the active jump window and removes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpForce {
    pub jump: Vec2,
}

impl JumpForce {
    pub const DEFAULT_JUMP: Vec2 = Vec2::new(0.0, 20.0);

    pub fn new(jump: Vec2) -> Self {
        Self { jump }
    }
}

impl Default for JumpForce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_JUMP)
    }
}

impl ForceGenerator for JumpForce {
    fn update_force(&self, body: &mut RigidBody2D, _dt: f32) {
        body.add_force(self.jump * body.mass);
    }
}
