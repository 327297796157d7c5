//! Per-object transform composition
//!
//! Every draw call gets a model-view matrix and a 3x3 normal matrix derived
//! from it. Rotation order is fixed X, then Y, then Z; the visual tilt and
//! tumble of every entity depends on that order staying put.

use glam::{Mat3, Mat4, Vec3};

/// Translate · RotateX · RotateY · RotateZ · Scale
pub fn model_matrix(position: Vec3, rotation: Vec3, scale: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_z(rotation.z)
        * Mat4::from_scale(scale)
}

/// Model-view matrix plus the matching normal matrix for one object.
pub fn compose(position: Vec3, rotation: Vec3, scale: Vec3, view: &Mat4) -> (Mat4, Mat3) {
    let model_view = *view * model_matrix(position, rotation, scale);
    (model_view, normal_matrix(&model_view))
}

/// Inverse-transpose of the upper 3x3, which keeps normals perpendicular
/// under non-uniform scale. A singular model-view (zero scale) falls back to
/// identity instead of spraying NaN through the lighting.
pub fn normal_matrix(model_view: &Mat4) -> Mat3 {
    let m = Mat3::from_mat4(*model_view);
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return Mat3::IDENTITY;
    }
    m.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let angles = Vec3::new(0.3, 1.1, -0.4);
        let m = model_matrix(Vec3::ZERO, angles, Vec3::ONE);

        let expected = Mat4::from_rotation_x(angles.x)
            * Mat4::from_rotation_y(angles.y)
            * Mat4::from_rotation_z(angles.z);
        let reversed = Mat4::from_rotation_z(angles.z)
            * Mat4::from_rotation_y(angles.y)
            * Mat4::from_rotation_x(angles.x);

        let probe = Vec3::new(1.0, 2.0, 3.0);
        let got = m.transform_vector3(probe);
        assert_relative_eq!(
            got.distance(expected.transform_vector3(probe)),
            0.0,
            epsilon = 1e-5
        );
        // The opposite composition lands somewhere else entirely, so a swap
        // of the multiplication order would not go unnoticed
        assert!(got.distance(reversed.transform_vector3(probe)) > 0.1);
    }

    #[test]
    fn test_translation_applies_last() {
        let m = model_matrix(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::splat(2.0));
        let p = m.transform_point3(Vec3::ONE);
        // Scale first, translate after
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 4.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_normal_matrix_is_rotation_for_rigid_transform() {
        let view = Mat4::IDENTITY;
        let (mv, n) = compose(
            Vec3::new(5.0, -2.0, 1.0),
            Vec3::new(0.3, 1.1, -0.4),
            Vec3::ONE,
            &view,
        );
        // With no scale the normal matrix equals the rotation part
        let rot = Mat3::from_mat4(mv);
        for col in 0..3 {
            assert_relative_eq!(n.col(col).x, rot.col(col).x, epsilon = 1e-4);
            assert_relative_eq!(n.col(col).y, rot.col(col).y, epsilon = 1e-4);
            assert_relative_eq!(n.col(col).z, rot.col(col).z, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_normal_matrix_corrects_non_uniform_scale() {
        // Surface in the XZ plane scaled 2x along X still has a +Y normal,
        // and it must stay perpendicular to the scaled tangent
        let m = model_matrix(Vec3::ZERO, Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
        let n = normal_matrix(&m);
        let tangent = m.transform_vector3(Vec3::X);
        let normal = (n * Vec3::Y).normalize();
        assert_relative_eq!(tangent.dot(normal), 0.0, epsilon = 1e-5);
        assert_relative_eq!(normal.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_singular_model_view_falls_back_to_identity() {
        let m = model_matrix(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(normal_matrix(&m), Mat3::IDENTITY);
    }
}
