//! DOM overlay collaborator
//!
//! The HUD owns no game knowledge: it receives plain numbers and the current
//! phase, and toggles visibility of the overlay panels the page ships with.

use web_sys::Document;

use crate::sim::GamePhase;

pub struct Hud {
    document: Document,
}

impl Hud {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    pub fn set_stats(&self, score: i32, hp: i32, level: i32) {
        self.set_text("score", &format!("Score: {score}"));
        self.set_text("hp", &format!("HP: {hp}"));
        self.set_text("level", &format!("LEVEL {level}"));
    }

    /// Toggle the overlay panels to match the current phase. `next_level` is
    /// the level the player is about to enter from the level-up pause.
    pub fn show_phase(&self, phase: GamePhase, next_level: i32) {
        let in_flight = !matches!(phase, GamePhase::NotStarted);
        self.set_visible("score", in_flight);
        self.set_visible("hp", in_flight);
        self.set_visible("level", in_flight);

        self.set_visible("start-screen", phase == GamePhase::NotStarted);
        self.set_visible("level-up", phase == GamePhase::LevelUpPause);
        self.set_visible("game-over", phase == GamePhase::GameOver);
        self.set_visible("game-won", phase == GamePhase::Won);

        if phase == GamePhase::LevelUpPause {
            if next_level % 5 == 0 {
                self.set_text("level-msg", "WELL FLOWN, PILOT! BONUS: +1 HP!");
            } else {
                self.set_text("level-msg", "Brace for more asteroids...");
            }
        }
    }

    /// Startup failed; surface the diagnostic instead of a dead canvas.
    pub fn fatal(&self, message: &str) {
        log::error!("fatal: {message}");
        self.set_text("load-error", message);
        self.set_visible("load-error", true);
        self.set_visible("start-screen", false);
    }
}
