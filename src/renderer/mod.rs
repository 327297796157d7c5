//! WebGPU rendering module
//!
//! Classic raster pipeline: interleaved vertex buffers built once at startup,
//! a per-draw uniform block (matrices + flash/lighting flags) bound with
//! dynamic offsets, and procedurally painted textures.

pub mod camera;
pub mod pipeline;
pub mod texture;
pub mod transform;
pub mod vertex;

pub use camera::{CameraMode, projection, view_matrix};
pub use pipeline::{DrawCall, MeshBuffer, RenderState};
pub use transform::{compose, model_matrix, normal_matrix};
pub use vertex::Vertex;
