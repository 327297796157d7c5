//! Laser bolt: an elongated box with one axis-aligned normal per face
//!
//! The full texture square maps onto each of the six faces, so the plasma
//! stripe reads from every angle.

use glam::Vec3;

use super::MeshData;

/// Half-thickness and half-length of the bolt
const W: f32 = 0.1;
const L: f32 = 0.8;

pub fn generate() -> MeshData {
    let vertices = [
        Vec3::new(-W, -W, L),
        Vec3::new(W, -W, L),
        Vec3::new(W, W, L),
        Vec3::new(-W, W, L),
        Vec3::new(-W, -W, -L),
        Vec3::new(-W, W, -L),
        Vec3::new(W, W, -L),
        Vec3::new(W, -W, -L),
    ];

    // Front, back, top, bottom, right, left
    let faces: [[usize; 4]; 6] = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [3, 2, 6, 5],
        [0, 4, 7, 1],
        [1, 7, 6, 2],
        [0, 3, 5, 4],
    ];
    let normals = [
        Vec3::Z,
        Vec3::NEG_Z,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::X,
        Vec3::NEG_X,
    ];

    let mut mesh = MeshData::with_capacity(faces.len() * 6);
    for (face, normal) in faces.iter().zip(normals) {
        let corner = |idx: usize, u: f32, v: f32, mesh: &mut MeshData| {
            mesh.push_vertex(vertices[face[idx]], [u, v], normal);
        };

        corner(0, 0.0, 0.0, &mut mesh);
        corner(1, 1.0, 0.0, &mut mesh);
        corner(2, 1.0, 1.0, &mut mesh);

        corner(0, 0.0, 0.0, &mut mesh);
        corner(2, 1.0, 1.0, &mut mesh);
        corner(3, 0.0, 1.0, &mut mesh);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_has_36_vertices() {
        let mesh = generate();
        assert_eq!(mesh.vertex_count, 36);
        assert_eq!(mesh.positions.len(), 36 * 3);
        assert_eq!(mesh.uvs.len(), 36 * 2);
    }

    #[test]
    fn test_face_normals_are_axis_aligned() {
        let mesh = generate();
        for face in 0..6 {
            let base = face * 6 * 3;
            let n = &mesh.normals[base..base + 3];
            // Unit length along exactly one axis
            assert_eq!(n.iter().map(|c| c.abs()).sum::<f32>(), 1.0);
            // Shared by all six vertices of the face
            for v in 1..6 {
                assert_eq!(n, &mesh.normals[base + v * 3..base + v * 3 + 3]);
            }
        }
    }

    #[test]
    fn test_uv_square_on_every_face() {
        let mesh = generate();
        for face in 0..6 {
            let base = face * 6 * 2;
            let uvs: Vec<[f32; 2]> = (0..6)
                .map(|v| [mesh.uvs[base + v * 2], mesh.uvs[base + v * 2 + 1]])
                .collect();
            assert_eq!(
                uvs,
                [
                    [0.0, 0.0],
                    [1.0, 0.0],
                    [1.0, 1.0],
                    [0.0, 0.0],
                    [1.0, 1.0],
                    [0.0, 1.0]
                ]
            );
        }
    }

    #[test]
    fn test_bolt_is_elongated_along_z() {
        let mesh = generate();
        let max_z = mesh
            .positions
            .chunks(3)
            .map(|p| p[2].abs())
            .fold(f32::MIN, f32::max);
        let max_x = mesh
            .positions
            .chunks(3)
            .map(|p| p[0].abs())
            .fold(f32::MIN, f32::max);
        assert!(max_z > max_x);
    }
}
