use super::vec2::Vec2;

/// Rigid placement of a shape: rotation about its local origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32, // Angle in radians
}

impl Transform {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Maps a local-space point to world space.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }

    /// Maps a local-space direction to world space (rotation only).
    pub fn apply_vector(self, direction: Vec2) -> Vec2 {
        direction.rotate(self.rotation)
    }

    /// Maps a world-space point back to local space.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        (point - self.position).rotate(-self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;
    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_transform_apply_combined() {
        // Rotate (1,0) -> (0,1), then translate by (10, 5)
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 2.0);
        let tp = t.apply(Vec2::new(1.0, 0.0));
        assert!((tp.x - 10.0).abs() < EPSILON);
        assert!((tp.y - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_vector_ignores_translation() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI);
        let d = t.apply_vector(Vec2::new(1.0, 0.0));
        assert!((d.x + 1.0).abs() < EPSILON);
        assert!(d.y.abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_inverse_round_trip() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 4.0);
        let p_local = Vec2::new(1.0, 1.0);
        let p_local_again = t.apply_inverse(t.apply(p_local));
        assert!((p_local_again.x - p_local.x).abs() < EPSILON);
        assert!((p_local_again.y - p_local.y).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_inverse_rotation_90_deg() {
        let t = Transform::new(Vec2::ZERO, PI / 2.0);
        let p_local = t.apply_inverse(Vec2::new(-1.0, 0.0));
        assert!(p_local.x.abs() < EPSILON);
        assert!((p_local.y - 1.0).abs() < EPSILON);
    }
}
