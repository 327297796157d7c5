//! Astro Tunnel - a 3D tunnel-flying asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `mesh`: Procedural geometry builders and the ship model loader
//! - `renderer`: WebGPU rendering pipeline (transforms, textures, draw calls)
//! - `input`: Logical action decoding from raw key events
//! - `hud`: DOM overlay updates (score/HP/level, state panels)
//! - `tuning`: Data-driven game pacing

#[cfg(target_arch = "wasm32")]
pub mod hud;
pub mod input;
pub mod mesh;
pub mod renderer;
pub mod sim;
pub mod tuning;

/// Game configuration constants
pub mod consts {
    /// Vertical field of view (radians)
    pub const FOV_Y: f32 = 45.0 * std::f32::consts::PI / 180.0;
    /// Near clip plane
    pub const Z_NEAR: f32 = 0.1;
    /// Far clip plane
    pub const Z_FAR: f32 = 200.0;

    /// Ship movement speed (units/sec)
    pub const SHIP_SPEED: f32 = 8.0;
    /// Ship stays inside this square in X/Y
    pub const SHIP_BOUND: f32 = 3.5;
    /// Roll applied while strafing (radians, sign follows direction)
    pub const SHIP_TILT: f32 = 0.5;
    /// Ship spawn position Z
    pub const SHIP_START_Z: f32 = -6.0;
    /// Minimum seconds between shots
    pub const FIRE_COOLDOWN: f32 = 0.2;
    /// Starting (and restart) player hit points
    pub const PLAYER_START_HP: i32 = 5;
    /// Player damage flash duration (seconds)
    pub const PLAYER_HIT_FLASH: f32 = 0.5;

    /// Obstacle hit points at spawn
    pub const OBSTACLE_HP: i32 = 5;
    /// Obstacle approach speed toward the camera (units/sec)
    pub const OBSTACLE_SPEED: f32 = 15.0;
    /// Obstacles spawn at this depth
    pub const OBSTACLE_SPAWN_Z: f32 = -100.0;
    /// Obstacle spawn X/Y range is [-OBSTACLE_SPAWN_RANGE, +OBSTACLE_SPAWN_RANGE]
    pub const OBSTACLE_SPAWN_RANGE: f32 = 3.0;
    /// Obstacles past this Z have flown behind the camera and despawn
    pub const OBSTACLE_DESPAWN_Z: f32 = 2.0;
    /// Obstacle damage flash duration (seconds)
    pub const OBSTACLE_HIT_FLASH: f32 = 0.1;

    /// Shot travel speed away from the camera (units/sec)
    pub const SHOT_SPEED: f32 = 30.0;
    /// Shots past this depth despawn
    pub const SHOT_DESPAWN_Z: f32 = -100.0;
    /// Shot-obstacle collision distance (strict less-than)
    pub const SHOT_HIT_RADIUS: f32 = 1.0;
    /// Obstacle-ship collision distance (strict less-than)
    pub const SHIP_HIT_RADIUS: f32 = 1.3;

    /// Score awarded per obstacle spawned
    pub const SPAWN_SCORE: i32 = 1;
    /// Score awarded per obstacle destroyed
    pub const KILL_SCORE: i32 = 300;

    /// Tunnel geometry: radius, length, segments around, rings along
    pub const TUNNEL_RADIUS: f32 = 8.0;
    pub const TUNNEL_LENGTH: f32 = 100.0;
    pub const TUNNEL_SEGMENTS: u32 = 8;
    pub const TUNNEL_RINGS: u32 = 20;
    /// Tunnel scroll offset wraps at this distance
    pub const TUNNEL_WRAP: f32 = 5.0;
    /// Tunnel rest position Z (scroll offset is added)
    pub const TUNNEL_BASE_Z: f32 = 10.0;
    /// Base tunnel scroll speed (units/sec)
    pub const TUNNEL_SCROLL_SPEED: f32 = 5.0;
    /// Scroll speed multiplier in flight vs. on the menu
    pub const TUNNEL_FLIGHT_FACTOR: f32 = 5.0;
    pub const TUNNEL_MENU_FACTOR: f32 = 1.0;
    /// Tunnel spin rate about Z (radians/sec)
    pub const TUNNEL_SPIN: f32 = 0.2;

    /// Asteroid sphere radius and lat/long tessellation detail
    pub const ASTEROID_RADIUS: f32 = 0.8;
    pub const ASTEROID_DETAIL: u32 = 4;
}
