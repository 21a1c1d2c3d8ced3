use super::ForceGenerator;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody2D;

/// Constant gravitational pull: adds `gravity * mass` every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity2D {
    pub gravity: Vec2,
}

impl Gravity2D {
    pub fn new(gravity: Vec2) -> Self {
        Self { gravity }
    }
}

impl ForceGenerator for Gravity2D {
    // Independent of dt: the integrator turns force into motion.
    fn update_force(&self, body: &mut RigidBody2D, _dt: f32) {
        body.add_force(self.gravity * body.mass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_gravity_scales_with_mass() {
        let gravity = Gravity2D::new(Vec2::new(0.0, -10.0));
        let mut body = RigidBody2D::new(3.0);
        gravity.update_force(&mut body, 0.016);
        assert!((body.force.y + 30.0).abs() < EPSILON);
        assert!(body.force.x.abs() < EPSILON);
    }

    #[test]
    fn test_gravity_ignores_dt() {
        let gravity = Gravity2D::new(Vec2::new(0.0, -10.0));
        let mut a = RigidBody2D::new(2.0);
        let mut b = RigidBody2D::new(2.0);
        gravity.update_force(&mut a, 0.001);
        gravity.update_force(&mut b, 1.0);
        assert_eq!(a.force, b.force);
    }

    #[test]
    fn test_gravity_on_static_body_adds_nothing() {
        let gravity = Gravity2D::new(Vec2::new(0.0, -10.0));
        let mut body = RigidBody2D::new_static();
        gravity.update_force(&mut body, 0.016);
        assert_eq!(body.force, Vec2::ZERO);
    }
}
