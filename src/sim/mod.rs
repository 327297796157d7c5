//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (list order decides which obstacle a shot hits)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{GamePhase, GameState, Obstacle, Player, Shot};
pub use tick::{TickInput, tick};
