//! Force generators and the registry that drives them each tick.

pub mod gravity;
pub mod jump;
pub mod registry;

use std::fmt;

use crate::common::Handle;
use crate::objects::rigid_body::RigidBody2D;

pub use gravity::Gravity2D;
pub use jump::JumpForce;
pub use registry::{ForceRegistration, ForceRegistry, RegistrationKey};

/// Computes one force contribution for a body per simulation step.
///
/// Implementations only call [`RigidBody2D::add_force`]; position and velocity
/// belong to the integrator.
pub trait ForceGenerator: fmt::Debug {
    fn update_force(&self, body: &mut RigidBody2D, dt: f32);
}

/// Generators are stored boxed so one arena holds every variant.
pub type BoxedForceGenerator = Box<dyn ForceGenerator>;

/// Identifies a generator stored in the world's generator arena.
pub type GeneratorHandle = Handle<BoxedForceGenerator>;
