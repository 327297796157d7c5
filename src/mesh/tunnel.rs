//! Procedural tunnel: a long hollow cylinder the camera flies through
//!
//! The tube is sliced into `rings` along -Z and `segments` around the
//! circumference; each cell becomes a quad of two triangles. Because the
//! camera sits inside, normals point at the axis rather than away from it,
//! and the V texture coordinate advances by one whole unit per ring so the
//! texture tiles along the length instead of stretching over it.

use std::f32::consts::TAU;

use glam::Vec3;

use super::MeshData;

pub fn generate(radius: f32, length: f32, segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::with_capacity((rings * segments * 6) as usize);

    for i in 0..rings {
        let z1 = -(i as f32 * length / rings as f32);
        let z2 = -((i + 1) as f32 * length / rings as f32);

        // Whole ring index, not 0..1: tiles the texture once per ring
        let v1 = i as f32;
        let v2 = (i + 1) as f32;

        for j in 0..segments {
            let theta1 = (j as f32 / segments as f32) * TAU;
            let theta2 = ((j + 1) as f32 / segments as f32) * TAU;

            let (x1, y1) = (theta1.cos() * radius, theta1.sin() * radius);
            let (x2, y2) = (theta2.cos() * radius, theta2.sin() * radius);

            let u1 = j as f32 / segments as f32;
            let u2 = (j + 1) as f32 / segments as f32;

            // Inward-facing normal: the negated radial direction at the
            // segment midpoint, shared by all six vertices of the quad
            let normal = Vec3::new(-(x1 + x2) / 2.0, -(y1 + y2) / 2.0, 0.0).normalize();

            let a1 = Vec3::new(x1, y1, z1);
            let b1 = Vec3::new(x2, y2, z1);
            let a2 = Vec3::new(x1, y1, z2);
            let b2 = Vec3::new(x2, y2, z2);

            mesh.push_vertex(a1, [u1, v1], normal);
            mesh.push_vertex(b1, [u2, v1], normal);
            mesh.push_vertex(a2, [u1, v2], normal);

            mesh.push_vertex(b1, [u2, v1], normal);
            mesh.push_vertex(b2, [u2, v2], normal);
            mesh.push_vertex(a2, [u1, v2], normal);
        }
    }

    mesh
}
