//! 2D rigid-body physics core: shapes, force generators, a force registry and
//! Separating Axis Theorem collision detection.
//!
//! A tick runs in three stages:
//!
//! 1. [`ForceRegistry::update_forces`] lets every registered generator add its
//!    force to its body.
//! 2. [`integration::integrate`] turns the accumulated force into motion and
//!    clears the accumulator.
//! 3. [`SatDetector`] tests candidate shape pairs and returns the
//!    minimum-penetration axis for each overlap.
//!
//! [`PhysicsWorld`] wires these together; each piece is also usable on its own.

pub mod collision;
pub mod common;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{
    edge_normals, raycast, AxisScope, CollisionManifold, Penetration, Ray2D, RaycastResult,
    SatDetector,
};
pub use common::{Arena, Handle, PhysicsConfig, PhysicsError, Result};
pub use forces::{
    ForceGenerator, ForceRegistration, ForceRegistry, GeneratorHandle, Gravity2D, JumpForce,
    RegistrationKey,
};
pub use math::{Point64, Transform, Vec2};
pub use objects::{BodyHandle, RigidBody2D};
pub use shapes::{Polygon, Shape, Shape2D, AABB};
pub use world::PhysicsWorld;
