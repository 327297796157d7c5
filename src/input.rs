//! Logical action decoding
//!
//! Raw `KeyboardEvent.key` strings are decoded into `Action`s once, at the
//! browser boundary; the simulation only ever sees a boolean held-state
//! snapshot and never does string lookups.

use crate::sim::TickInput;

/// Every input the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    /// Chase <-> cockpit (edge-triggered)
    ToggleCamera,
    /// Start / continue / restart, depending on phase (edge-triggered)
    Confirm,
}

impl Action {
    /// Decode a raw key name; arrows and WASD both steer.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::MoveLeft),
            "ArrowRight" | "d" | "D" => Some(Action::MoveRight),
            "ArrowUp" | "w" | "W" => Some(Action::MoveUp),
            "ArrowDown" | "s" | "S" => Some(Action::MoveDown),
            " " => Some(Action::Fire),
            "c" | "C" => Some(Action::ToggleCamera),
            "Enter" => Some(Action::Confirm),
            _ => None,
        }
    }
}

/// Live is-held map for the held-style actions. The edge-triggered actions
/// (`ToggleCamera`, `Confirm`) are handled directly in the key handler and
/// never stored here.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire: bool,
}

impl InputState {
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
            Action::MoveUp => self.up = held,
            Action::MoveDown => self.down = held,
            Action::Fire => self.fire = held,
            Action::ToggleCamera | Action::Confirm => {}
        }
    }

    /// Frame snapshot for the simulation
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            fire: self.fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_decode() {
        assert_eq!(Action::from_key("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key("a"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key("D"), Some(Action::MoveRight));
        assert_eq!(Action::from_key("w"), Some(Action::MoveUp));
        assert_eq!(Action::from_key("ArrowDown"), Some(Action::MoveDown));
        assert_eq!(Action::from_key(" "), Some(Action::Fire));
        assert_eq!(Action::from_key("c"), Some(Action::ToggleCamera));
        assert_eq!(Action::from_key("Enter"), Some(Action::Confirm));
        assert_eq!(Action::from_key("x"), None);
    }

    #[test]
    fn test_held_state_round_trip() {
        let mut input = InputState::default();
        input.set(Action::MoveLeft, true);
        input.set(Action::Fire, true);

        let snapshot = input.tick_input();
        assert!(snapshot.left && snapshot.fire);
        assert!(!snapshot.right && !snapshot.up && !snapshot.down);

        input.set(Action::MoveLeft, false);
        assert!(!input.tick_input().left);
    }

    #[test]
    fn test_edge_actions_are_not_stored() {
        let mut input = InputState::default();
        input.set(Action::Confirm, true);
        input.set(Action::ToggleCamera, true);
        let snapshot = input.tick_input();
        assert!(!snapshot.left && !snapshot.right && !snapshot.fire);
    }
}
