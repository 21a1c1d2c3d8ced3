pub mod arena;
pub mod config;
pub mod error;

pub use arena::{Arena, Handle};
pub use config::PhysicsConfig;
pub use error::{PhysicsError, Result};
