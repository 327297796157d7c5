//! Camera modes and projection
//!
//! Two cameras, toggled rather than simulated: a chase view parked behind
//! the action, and a cockpit view riding the ship. Both look down -Z.

use glam::{Mat4, Vec3};

use crate::consts::{FOV_Y, Z_FAR, Z_NEAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Fixed eye behind the ship, watching the whole lane
    #[default]
    Chase,
    /// Eye on the ship, looking at a fixed point far down the tunnel
    Cockpit,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Chase => CameraMode::Cockpit,
            CameraMode::Cockpit => CameraMode::Chase,
        }
    }
}

pub fn view_matrix(mode: CameraMode, ship_position: Vec3) -> Mat4 {
    match mode {
        CameraMode::Chase => Mat4::look_at_rh(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::Y,
        ),
        CameraMode::Cockpit => Mat4::look_at_rh(
            ship_position,
            Vec3::new(ship_position.x, ship_position.y, -20.0),
            Vec3::Y,
        ),
    }
}

/// 45° vertical FOV perspective over the current viewport.
pub fn projection(width: u32, height: u32) -> Mat4 {
    let aspect = width as f32 / height.max(1) as f32;
    Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chase_eye_maps_to_origin() {
        let view = view_matrix(CameraMode::Chase, Vec3::ZERO);
        let eye = view.transform_point3(Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(eye.length(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cockpit_eye_rides_the_ship() {
        let ship = Vec3::new(2.0, -1.5, -6.0);
        let view = view_matrix(CameraMode::Cockpit, ship);
        let eye = view.transform_point3(ship);
        assert_relative_eq!(eye.length(), 0.0, epsilon = 1e-4);

        // The look target sits straight ahead in view space (-Z)
        let target = view.transform_point3(Vec3::new(ship.x, ship.y, -20.0));
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-4);
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_toggle_round_trips() {
        let mode = CameraMode::Chase;
        assert_eq!(mode.toggled(), CameraMode::Cockpit);
        assert_eq!(mode.toggled().toggled(), CameraMode::Chase);
    }

    #[test]
    fn test_projection_tolerates_zero_height() {
        // Must not divide by zero while the canvas is collapsing
        let proj = projection(800, 0);
        assert!(proj.is_finite());
    }
}
