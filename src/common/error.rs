use thiserror::Error;

use crate::forces::GeneratorHandle;
use crate::objects::BodyHandle;

/// Errors reported by the physics core.
///
/// All of them describe caller mistakes; nothing here is transient, so
/// nothing is worth retrying.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Edge normals were requested for an empty vertex list.
    #[error("vertex list is empty")]
    EmptyVertexList,
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// The handle does not resolve to a live rigid body.
    #[error("rigid body {0} does not exist")]
    DanglingBody(BodyHandle),
    /// The handle does not resolve to a live force generator.
    #[error("force generator {0} does not exist")]
    DanglingGenerator(GeneratorHandle),
    /// Configuration could not be parsed or serialized.
    #[error("invalid physics config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
