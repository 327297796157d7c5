//! Game state and core simulation types

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu screen before the first run; the tunnel idles in the background
    NotStarted,
    /// Active gameplay
    Playing,
    /// Level target reached, waiting for the player to continue
    LevelUpPause,
    /// HP reached zero
    GameOver,
    /// Final level cleared
    Won,
}

/// An incoming asteroid
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub position: Vec3,
    pub hit_points: i32,
    /// Damage flash time remaining; inactive once <= 0
    pub hit_flash: f32,
}

impl Obstacle {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            hit_points: OBSTACLE_HP,
            hit_flash: 0.0,
        }
    }

    pub fn flash_active(&self) -> bool {
        self.hit_flash > 0.0
    }
}

/// A fired laser bolt
#[derive(Debug, Clone)]
pub struct Shot {
    pub position: Vec3,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    pub hit_points: i32,
    pub max_hit_points: i32,
    /// Damage flash time remaining; inactive once <= 0
    pub hit_flash: f32,
    /// Visual roll while strafing; snaps, not integrated
    pub tilt: f32,
}

impl Player {
    fn new(start_hp: i32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, SHIP_START_Z),
            hit_points: start_hp,
            max_hit_points: start_hp,
            hit_flash: 0.0,
            tilt: 0.0,
        }
    }

    pub fn flash_active(&self) -> bool {
        self.hit_flash > 0.0
    }
}

/// Complete game state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub shots: Vec<Shot>,
    pub score: i32,
    /// 1-based level counter
    pub level: i32,
    /// Seconds between obstacle spawns at the current level
    pub spawn_interval: f32,
    /// Accumulator toward the next spawn
    pub time_since_spawn: f32,
    /// Accumulator since the last shot, compared against the fire cooldown
    pub time_since_shot: f32,
    pub tuning: Tuning,
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            player: Player::new(tuning.start_hp),
            obstacles: Vec::new(),
            shots: Vec::new(),
            score: 0,
            level: 1,
            spawn_interval: tuning.spawn_interval_start,
            time_since_spawn: 0.0,
            // Primed so the first trigger pull fires immediately
            time_since_shot: 1.0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The single phase-advancing action: start, continue, or restart,
    /// depending on where the player is.
    pub fn confirm(&mut self) {
        match self.phase {
            GamePhase::NotStarted => {
                log::info!("run started");
                self.phase = GamePhase::Playing;
            }
            GamePhase::LevelUpPause => self.advance_level(),
            GamePhase::GameOver | GamePhase::Won => self.restart(),
            GamePhase::Playing => {}
        }
    }

    /// Leave the level-up pause: harder spawn pacing, fresh entity lists,
    /// score back to zero, and a +1 max HP bonus every 5th level.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.score = 0;
        self.spawn_interval =
            (self.spawn_interval - self.tuning.spawn_interval_step).max(self.tuning.spawn_interval_min);
        if self.level % 5 == 0 {
            self.player.max_hit_points += 1;
            self.player.hit_points += 1;
        }
        self.obstacles.clear();
        self.shots.clear();
        self.phase = GamePhase::Playing;
        log::info!("level {} (spawn interval {:.1}s)", self.level, self.spawn_interval);
    }

    /// Reset the whole session and go straight back into flight.
    pub fn restart(&mut self) {
        log::info!("restart");
        self.player = Player::new(self.tuning.start_hp);
        self.obstacles.clear();
        self.shots.clear();
        self.score = 0;
        self.level = 1;
        self.spawn_interval = self.tuning.spawn_interval_start;
        self.time_since_spawn = 0.0;
        self.time_since_shot = 1.0;
        self.phase = GamePhase::Playing;
    }

    /// Decay damage flashes. Runs once per rendered frame (not per tick) so
    /// the game-over flash still fades while the sim is frozen. Values drift
    /// below zero rather than snapping; `flash_active` treats <= 0 as off.
    pub fn decay_flashes(&mut self, dt: f32) {
        self.player.hit_flash -= dt;
        for obstacle in &mut self.obstacles {
            obstacle.hit_flash -= dt;
        }
    }
}
