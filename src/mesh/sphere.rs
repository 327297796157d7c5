//! Procedural sphere: asteroids (and the menu stand-in ship)
//!
//! Latitude/longitude tessellation at `detail` bands each way. The grid is
//! generated first, then stitched into two triangles per cell with flat
//! per-face normals, which is what gives asteroids their faceted low-poly
//! look. Cells touching a pole are degenerate triangles and take the
//! fallback normal.

use std::f32::consts::PI;

use glam::Vec3;

use super::MeshData;

struct GridPoint {
    pos: Vec3,
    uv: [f32; 2],
}

pub fn generate(radius: f32, detail: u32) -> MeshData {
    let lat_bands = detail;
    let long_bands = detail;

    let mut grid: Vec<Vec<GridPoint>> = Vec::with_capacity((lat_bands + 1) as usize);
    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        let mut row = Vec::with_capacity((long_bands + 1) as usize);
        for long in 0..=long_bands {
            let phi = long as f32 * 2.0 * PI / long_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let pos = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta) * radius;
            // Descending so a rectangular texture wraps the right way around
            let uv = [
                1.0 - long as f32 / long_bands as f32,
                1.0 - lat as f32 / lat_bands as f32,
            ];
            row.push(GridPoint { pos, uv });
        }
        grid.push(row);
    }

    let mut mesh = MeshData::with_capacity((lat_bands * long_bands * 6) as usize);
    for lat in 0..lat_bands as usize {
        for long in 0..long_bands as usize {
            let p1 = &grid[lat][long];
            let p2 = &grid[lat + 1][long];
            let p3 = &grid[lat][long + 1];
            let p4 = &grid[lat + 1][long + 1];

            mesh.push_triangle([p1.pos, p2.pos, p3.pos], [p1.uv, p2.uv, p3.uv]);
            mesh.push_triangle([p2.pos, p4.pos, p3.pos], [p2.uv, p4.uv, p3.uv]);
        }
    }

    mesh
}
