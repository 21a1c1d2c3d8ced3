use crate::common::Handle;
use crate::math::vec2::Vec2;

/// Identifies a [`RigidBody2D`] stored in the world's body arena.
pub type BodyHandle = Handle<RigidBody2D>;

/// Point-mass rigid body: the state force generators and the integrator act on.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody2D {
    // Primary state
    pub position: Vec2, // World position of the center of mass
    pub velocity: Vec2,

    // Accumulates forces applied during a time step, cleared by the integrator
    pub force: Vec2,

    // Physical properties
    pub mass: f32,
    pub inv_mass: f32, // 1.0 / mass (0.0 for static)

    enabled: bool,
    awake: bool,
}

impl RigidBody2D {
    /// Creates an enabled, awake body at the origin.
    /// A mass <= 0.0 produces a static body (infinite mass).
    pub fn new(mass: f32) -> Self {
        if mass <= 0.0 || !mass.is_finite() {
            log::warn!("rigid body created with mass {mass}; treating it as static");
            return Self::new_static();
        }
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            inv_mass: 1.0 / mass,
            enabled: true,
            awake: true,
        }
    }

    /// Creates a body with infinite mass that the integrator never moves.
    pub fn new_static() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: 0.0,
            inv_mass: 0.0,
            enabled: true,
            awake: true,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Adds `force` to the accumulator. This is the only way generators touch a body.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Should typically be called after integration in each simulation step.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    pub fn set_awake(&mut self, awake: bool) {
        self.awake = awake;
    }

    /// Enabled and awake: eligible for forces and integration.
    pub fn is_active(&self) -> bool {
        self.enabled && self.awake
    }
}

impl Default for RigidBody2D {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody2D::new(4.0);
        assert_eq!(rb.mass, 4.0);
        assert!((rb.inv_mass - 0.25).abs() < EPSILON);
        assert_eq!(rb.position, Vec2::ZERO);
        assert_eq!(rb.force, Vec2::ZERO);
        assert!(rb.is_enabled());
        assert!(rb.is_awake());
        assert!(rb.is_active());
        assert!(!rb.is_static());
    }

    #[test]
    fn test_rigidbody_non_positive_mass_is_static() {
        for mass in [0.0, -3.0, f32::NAN] {
            let rb = RigidBody2D::new(mass);
            assert!(rb.is_static());
            assert_eq!(rb.mass, 0.0);
        }
    }

    #[test]
    fn test_add_force_accumulates() {
        let mut rb = RigidBody2D::new(1.0);
        rb.add_force(Vec2::new(10.0, 0.0));
        rb.add_force(Vec2::new(0.0, 5.0));
        assert!((rb.force.x - 10.0).abs() < EPSILON);
        assert!((rb.force.y - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_clear_accumulators() {
        let mut rb = RigidBody2D::new(1.0);
        rb.add_force(Vec2::new(1.0, 1.0));
        rb.clear_accumulators();
        assert_eq!(rb.force, Vec2::ZERO);
    }

    #[test]
    fn test_active_requires_enabled_and_awake() {
        let mut rb = RigidBody2D::new(1.0);
        rb.set_awake(false);
        assert!(!rb.is_active());
        rb.set_awake(true);
        rb.set_enabled(false);
        assert!(!rb.is_active());
        rb.set_enabled(true);
        assert!(rb.is_active());
    }
}
