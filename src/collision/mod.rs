pub mod manifold;
pub mod raycast;
pub mod sat;

// Re-export key types
pub use manifold::CollisionManifold;
pub use raycast::{raycast, Ray2D, RaycastResult};
pub use sat::{edge_normals, project_onto_axis, AxisScope, Penetration, SatDetector};
