pub mod clock;
pub mod config;
pub mod constants;
pub mod curve;
pub mod engine;
pub mod registry;
pub mod scheduler;
pub mod state;
pub mod style;

// Instanced circle shader for the native renderer
pub static CIRCLES_WGSL: &str = include_str!("../shaders/circles.wgsl");

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use registry::*;
pub use scheduler::*;
pub use state::*;
pub use style::*;
