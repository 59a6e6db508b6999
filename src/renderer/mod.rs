//! wgpu rendering module
//!
//! CPU-generated triangle lists, one colored quad per square, pushed through
//! a single passthrough pipeline each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
