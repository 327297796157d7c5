//! Data-driven game pacing
//!
//! The numbers a designer actually iterates on: spawn pacing, level targets,
//! starting HP. Defaults match the shipped balance; the host page can
//! override a subset through an embedded JSON block. Physics and collision
//! radii stay as code constants in `consts`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between obstacle spawns on level 1
    pub spawn_interval_start: f32,
    /// Spawn interval never drops below this
    pub spawn_interval_min: f32,
    /// How much faster each level spawns
    pub spawn_interval_step: f32,
    /// Score needed to clear a level
    pub level_target_score: i32,
    /// Clearing this level wins the game
    pub final_level: i32,
    /// Player hit points on a fresh run
    pub start_hp: i32,
    /// Seconds between shots
    pub fire_cooldown: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_start: 1.5,
            spawn_interval_min: 0.3,
            spawn_interval_step: 0.2,
            level_target_score: 300,
            final_level: 10,
            start_hp: crate::consts::PLAYER_START_HP,
            fire_cooldown: crate::consts::FIRE_COOLDOWN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; anything missing keeps its
    /// default. Bad JSON falls back to defaults with a warning rather than
    /// failing startup over a balance tweak.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("ignoring invalid tuning override: {err}");
                Self::default()
            }
        }
    }
}
