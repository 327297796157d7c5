//! Ship model loader
//!
//! Parses a minimal subset of the Wavefront OBJ format: `v x y z` points and
//! `f i j k` triangles with 1-based indices (any `/`-suffixed fields on a
//! face token are discarded). Faces are emitted flat-shaded, and texture
//! coordinates come from projecting the X/Z plane onto the unit square, so
//! the hull texture paints the model top-down without needing `vt` data.
//!
//! Unrecognized or malformed lines are skipped. A face that references a
//! point that was never defined is a hard error: rendering a mesh with bogus
//! indices would silently draw garbage, so startup aborts instead.

use glam::Vec3;
use thiserror::Error;

use super::MeshData;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjError {
    #[error("face on line {line} references vertex {index}, but only {count} vertices are defined")]
    FaceIndexOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },
}

/// Planar UV projection: X/Z mapped onto the unit square, Y ignored.
fn planar_uv(p: Vec3) -> [f32; 2] {
    [p.x * 0.5 + 0.5, p.z * 0.5 + 0.5]
}

pub fn parse_obj(text: &str) -> Result<MeshData, ObjError> {
    let mut points: Vec<Vec3> = Vec::new();
    let mut mesh = MeshData::default();

    for (line_idx, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords: Vec<f32> = parts.take(3).filter_map(|t| t.parse().ok()).collect();
                if let [x, y, z] = coords[..] {
                    points.push(Vec3::new(x, y, z));
                }
            }
            Some("f") => {
                let mut indices = [0usize; 3];
                let mut ok = true;
                for slot in &mut indices {
                    // Keep only the leading vertex index of "i/t/n" tokens
                    let token = parts.next().and_then(|t| t.split('/').next());
                    match token.and_then(|t| t.parse::<usize>().ok()) {
                        Some(idx) => *slot = idx,
                        None => {
                            ok = false;
                            break;
                        }
                    }
                }
                if !ok {
                    continue;
                }

                let mut resolved = [Vec3::ZERO; 3];
                for (slot, &idx) in resolved.iter_mut().zip(&indices) {
                    if idx == 0 || idx > points.len() {
                        return Err(ObjError::FaceIndexOutOfRange {
                            line: line_idx + 1,
                            index: idx,
                            count: points.len(),
                        });
                    }
                    *slot = points[idx - 1];
                }

                mesh.push_triangle(
                    resolved,
                    [
                        planar_uv(resolved[0]),
                        planar_uv(resolved[1]),
                        planar_uv(resolved[2]),
                    ],
                );
            }
            _ => {} // comments, empty lines, unsupported types
        }
    }

    Ok(mesh)
}
