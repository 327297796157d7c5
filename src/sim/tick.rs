//! Per-frame simulation update
//!
//! Advances one frame of gameplay: ship movement, firing, level checks,
//! obstacle spawning, and both collision passes. Only runs while `Playing`;
//! every other phase freezes the field.

use glam::Vec3;
use rand::Rng;

use super::state::{GamePhase, GameState, Obstacle, Shot};
use crate::consts::*;

/// Held-input snapshot for a single frame, decoded from raw key events
/// before it gets here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game by one frame of `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    move_ship(state, input, dt);
    fire_shots(state, input, dt);

    // Level target reached: hand control to the level-up pause (or the win
    // screen on the final level) and freeze the rest of this frame.
    if state.score >= state.tuning.level_target_score {
        if state.level >= state.tuning.final_level {
            log::info!("final level cleared");
            state.phase = GamePhase::Won;
        } else {
            state.phase = GamePhase::LevelUpPause;
        }
        return;
    }

    spawn_obstacles(state, dt);
    update_shots(state, dt);
    update_obstacles(state, dt);
}

fn move_ship(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = SHIP_SPEED * dt;
    let player = &mut state.player;

    // Left wins over right when both are held
    if input.left {
        player.position.x -= step;
        player.tilt = SHIP_TILT;
    } else if input.right {
        player.position.x += step;
        player.tilt = -SHIP_TILT;
    } else {
        player.tilt = 0.0;
    }

    if input.up {
        player.position.y += step;
    }
    if input.down {
        player.position.y -= step;
    }

    player.position.x = player.position.x.clamp(-SHIP_BOUND, SHIP_BOUND);
    player.position.y = player.position.y.clamp(-SHIP_BOUND, SHIP_BOUND);
}

fn fire_shots(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_since_shot += dt;
    if input.fire && state.time_since_shot > state.tuning.fire_cooldown {
        state.shots.push(Shot {
            position: state.player.position,
        });
        state.time_since_shot = 0.0;
    }
}

fn spawn_obstacles(state: &mut GameState, dt: f32) {
    state.time_since_spawn += dt;
    if state.time_since_spawn > state.spawn_interval {
        let x = state.rng.random_range(-OBSTACLE_SPAWN_RANGE..=OBSTACLE_SPAWN_RANGE);
        let y = state.rng.random_range(-OBSTACLE_SPAWN_RANGE..=OBSTACLE_SPAWN_RANGE);
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(x, y, OBSTACLE_SPAWN_Z)));
        state.time_since_spawn = 0.0;
        state.score += SPAWN_SCORE;
    }
}

/// Advance shots toward the far plane; each shot damages at most the first
/// obstacle (in list order) strictly inside the hit radius, then disappears.
fn update_shots(state: &mut GameState, dt: f32) {
    for i in (0..state.shots.len()).rev() {
        state.shots[i].position.z -= SHOT_SPEED * dt;
        if state.shots[i].position.z < SHOT_DESPAWN_Z {
            state.shots.swap_remove(i);
            continue;
        }

        let shot_pos = state.shots[i].position;
        let hit = state
            .obstacles
            .iter_mut()
            .find(|obstacle| shot_pos.distance(obstacle.position) < SHOT_HIT_RADIUS);
        if let Some(obstacle) = hit {
            obstacle.hit_points -= 1;
            obstacle.hit_flash = OBSTACLE_HIT_FLASH;
            state.shots.swap_remove(i);
        }
    }
}

/// Reap destroyed obstacles, advance the rest toward the player, and resolve
/// ship collisions and near-plane despawns.
fn update_obstacles(state: &mut GameState, dt: f32) {
    for i in (0..state.obstacles.len()).rev() {
        if state.obstacles[i].hit_points <= 0 {
            state.obstacles.swap_remove(i);
            state.score += KILL_SCORE;
            continue;
        }

        state.obstacles[i].position.z += OBSTACLE_SPEED * dt;

        let dist = state.player.position.distance(state.obstacles[i].position);
        if dist < SHIP_HIT_RADIUS {
            state.player.hit_points -= 1;
            state.player.hit_flash = PLAYER_HIT_FLASH;
            state.obstacles.swap_remove(i);
            if state.player.hit_points <= 0 {
                log::info!("ship destroyed");
                state.phase = GamePhase::GameOver;
            }
            continue;
        }

        // Flew past the camera unhit: no score
        if state.obstacles[i].position.z > OBSTACLE_DESPAWN_Z {
            state.obstacles.swap_remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42, Tuning::default());
        state.confirm();
        state
    }

    /// A dt small enough that positions barely move within one frame.
    const TINY_DT: f32 = 1e-6;

    #[test]
    fn test_ship_movement_and_clamp() {
        let mut state = playing_state();
        let input = TickInput {
            right: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.player.position.x, SHIP_BOUND);
        assert_eq!(state.player.position.y, SHIP_BOUND);
        assert_eq!(state.player.tilt, -SHIP_TILT);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = playing_state();
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(state.player.position.x < 0.0);
        assert_eq!(state.player.tilt, SHIP_TILT);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = playing_state();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.shots.len(), 1);

        // Held fire inside the cooldown window adds nothing
        for _ in 0..5 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.shots.len(), 1);

        // Past the cooldown a second bolt leaves the ship
        for _ in 0..10 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.shots.len(), 2);
    }

    #[test]
    fn test_shot_hits_within_radius() {
        let mut state = playing_state();
        state.shots.push(Shot {
            position: Vec3::new(0.0, 0.0, -50.0),
        });
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(0.0, 0.0, -50.5)));

        tick(&mut state, &TickInput::default(), TINY_DT);
        assert!(state.shots.is_empty());
        assert_eq!(state.obstacles[0].hit_points, OBSTACLE_HP - 1);
        assert!(state.obstacles[0].flash_active());
    }

    #[test]
    fn test_distance_equal_to_radius_is_a_miss() {
        let mut state = playing_state();
        state.shots.push(Shot {
            position: Vec3::new(0.0, 0.0, -50.0),
        });
        // Exactly SHOT_HIT_RADIUS away: strict `<` means no hit
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(0.0, 0.0, -50.0 - SHOT_HIT_RADIUS)));

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.shots.len(), 1);
        assert_eq!(state.obstacles[0].hit_points, OBSTACLE_HP);
    }

    #[test]
    fn test_shot_hits_first_obstacle_in_list_order() {
        let mut state = playing_state();
        state.shots.push(Shot {
            position: Vec3::new(0.0, 0.0, -50.0),
        });
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(0.3, 0.0, -50.0)));
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(0.0, 0.3, -50.0)));

        tick(&mut state, &TickInput::default(), TINY_DT);
        assert_eq!(state.obstacles[0].hit_points, OBSTACLE_HP - 1);
        assert_eq!(state.obstacles[1].hit_points, OBSTACLE_HP);
    }

    #[test]
    fn test_obstacle_takes_five_hits_to_die() {
        let mut state = playing_state();
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(0.0, 0.0, -50.0)));

        for hit in 1..=OBSTACLE_HP {
            let score_before = state.score;
            state.shots.push(Shot {
                position: Vec3::new(0.0, 0.0, -50.3),
            });
            tick(&mut state, &TickInput::default(), TINY_DT);

            if hit < OBSTACLE_HP {
                // Damaged but alive, and no kill score yet
                assert_eq!(state.obstacles.len(), 1);
                assert_eq!(state.obstacles[0].hit_points, OBSTACLE_HP - hit);
                assert_eq!(state.score, score_before);
            } else {
                // Fifth hit zeroes it; the reap happens in the same frame's
                // obstacle pass, with the kill award
                assert!(state.obstacles.is_empty());
                assert_eq!(state.score, score_before + KILL_SCORE);
            }
        }
    }

    #[test]
    fn test_ship_collision_damages_player() {
        let mut state = playing_state();
        state
            .obstacles
            .push(Obstacle::new(state.player.position + Vec3::Z * 0.5));

        tick(&mut state, &TickInput::default(), TINY_DT);
        assert_eq!(state.player.hit_points, PLAYER_START_HP - 1);
        assert!(state.player.flash_active());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_hp_zero_triggers_game_over() {
        let mut state = playing_state();
        state.player.hit_points = 1;
        state
            .obstacles
            .push(Obstacle::new(state.player.position + Vec3::Z * 0.5));

        tick(&mut state, &TickInput::default(), TINY_DT);
        assert_eq!(state.player.hit_points, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_hp_above_zero_does_not_end_run() {
        let mut state = playing_state();
        state.player.hit_points = 2;
        state
            .obstacles
            .push(Obstacle::new(state.player.position + Vec3::Z * 0.5));

        tick(&mut state, &TickInput::default(), TINY_DT);
        assert_eq!(state.player.hit_points, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_obstacle_past_near_plane_despawns_without_score() {
        let mut state = playing_state();
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(3.0, 3.0, OBSTACLE_DESPAWN_Z + 0.5)));
        let score_before = state.score;

        tick(&mut state, &TickInput::default(), TINY_DT);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, score_before);
    }

    #[test]
    fn test_shot_past_far_plane_despawns() {
        let mut state = playing_state();
        state.shots.push(Shot {
            position: Vec3::new(0.0, 0.0, SHOT_DESPAWN_Z + 0.1),
        });
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_spawn_timer_creates_obstacle_and_scores() {
        let mut state = playing_state();
        let interval = state.spawn_interval;
        let max_frames = (interval / DT).ceil() as usize + 2;
        for _ in 0..max_frames {
            tick(&mut state, &TickInput::default(), DT);
            if !state.obstacles.is_empty() {
                break;
            }
        }
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, SPAWN_SCORE);

        // The spawning frame's own obstacle pass already advanced it one step
        let spawned = &state.obstacles[0];
        assert_eq!(spawned.position.z, OBSTACLE_SPAWN_Z + OBSTACLE_SPEED * DT);
        assert!(spawned.position.x.abs() <= OBSTACLE_SPAWN_RANGE);
        assert!(spawned.position.y.abs() <= OBSTACLE_SPAWN_RANGE);
        assert_eq!(spawned.hit_points, OBSTACLE_HP);
    }

    #[test]
    fn test_level_target_pauses_and_preserves_field() {
        let mut state = playing_state();
        state
            .obstacles
            .push(Obstacle::new(Vec3::new(0.0, 0.0, -50.0)));
        state.shots.push(Shot {
            position: Vec3::new(0.0, 0.0, -20.0),
        });
        state.score = state.tuning.level_target_score;

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::LevelUpPause);
        // Field untouched until the player continues
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.shots.len(), 1);

        state.confirm();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_final_level_target_wins() {
        let mut state = playing_state();
        state.level = state.tuning.final_level;
        state.score = state.tuning.level_target_score;

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_tick_is_inert_outside_playing() {
        let mut state = playing_state();
        state.phase = GamePhase::GameOver;
        let input = TickInput {
            fire: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(state.shots.is_empty());
        assert_eq!(state.player.position.x, 0.0);
    }
}
