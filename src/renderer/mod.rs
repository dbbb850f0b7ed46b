//! WebGPU rendering module
//!
//! Builds a per-frame vertex list from the simulation state and draws it
//! with a single colored-triangle pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::world_vertices;
pub use vertex::Vertex;
