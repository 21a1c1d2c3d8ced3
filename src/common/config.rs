//! Tunable physics parameters.
//!
//! Every field has a default so partial JSON documents are accepted.

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::collision::AxisScope;
use crate::math::vec2::Vec2;

/// Configuration for a [`PhysicsWorld`](crate::world::PhysicsWorld).
///
/// Uses a y-up convention: gravity points down the negative y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravitational acceleration (units/second²).
    pub gravity: Vec2,

    /// Acceleration applied by a default jump generator while registered.
    pub jump_force: Vec2,

    /// Which edge normals the SAT detector tests.
    pub axis_scope: AxisScope,

    /// Contacts shallower than this are not reported by the world.
    pub contact_epsilon: f32,
}

impl PhysicsConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            jump_force: Vec2::new(0.0, 20.0),
            axis_scope: AxisScope::Combined,
            contact_epsilon: 1e-6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::PhysicsError;

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = PhysicsConfig::from_json_str(r#"{ "gravity": { "x": 0.0, "y": -20.0 } }"#)
            .unwrap();
        assert_eq!(config.gravity, Vec2::new(0.0, -20.0));
        assert_eq!(config.jump_force, Vec2::new(0.0, 20.0));
        assert_eq!(config.axis_scope, AxisScope::Combined);
    }

    #[test]
    fn test_config_axis_scope_names() {
        let config = PhysicsConfig::from_json_str(r#"{ "axis_scope": "first_shape_only" }"#).unwrap();
        assert_eq!(config.axis_scope, AxisScope::FirstShapeOnly);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = PhysicsConfig {
            contact_epsilon: 0.01,
            ..PhysicsConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(PhysicsConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = PhysicsConfig::from_json_str("{ gravity: ").unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig(_)));
    }
}
