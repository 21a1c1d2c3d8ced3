pub mod point;
pub mod transform;
pub mod vec2;

pub use point::Point64;
pub use transform::Transform;
pub use vec2::Vec2;
