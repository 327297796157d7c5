//! Procedural geometry and model loading
//!
//! Every builder produces the same flat vertex-buffer layout: interleavable
//! position/UV/normal arrays plus a vertex count, ready for GPU upload. All
//! meshes are flat-shaded: the three vertices of a triangle carry one shared
//! face normal, and no vertex is welded across triangles.

pub mod laser;
pub mod obj;
pub mod sphere;
pub mod tunnel;

pub use obj::{ObjError, parse_obj};

use glam::Vec3;

/// Geometry ready for upload: one triangle list, no index buffer.
///
/// Invariants: `positions.len() == vertex_count * 3`,
/// `uvs.len() == vertex_count * 2`, `normals.len() == vertex_count * 3`.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub normals: Vec<f32>,
    pub vertex_count: u32,
}

impl MeshData {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            uvs: Vec::with_capacity(vertices * 2),
            normals: Vec::with_capacity(vertices * 3),
            vertex_count: 0,
        }
    }

    /// Append one vertex with an explicit normal.
    pub fn push_vertex(&mut self, pos: Vec3, uv: [f32; 2], normal: Vec3) {
        self.positions.extend_from_slice(&[pos.x, pos.y, pos.z]);
        self.uvs.extend_from_slice(&uv);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        self.vertex_count += 1;
    }

    /// Append a triangle with a single flat normal computed from its edges.
    pub fn push_triangle(&mut self, verts: [Vec3; 3], uvs: [[f32; 2]; 3]) {
        let normal = face_normal(verts[0], verts[1], verts[2]);
        for i in 0..3 {
            self.push_vertex(verts[i], uvs[i], normal);
        }
    }
}

/// Unit normal of the triangle (a, b, c) via the cross product of its edges.
///
/// Degenerate triangles (zero-area, so a zero-length cross product) fall back
/// to +Y so downstream lighting never sees a NaN normal.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let n = (b - a).cross(c - a);
    if n.length_squared() > 0.0 {
        n.normalize()
    } else {
        Vec3::Y
    }
}
