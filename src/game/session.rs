// Game session: health display, game-over screen and menu return

use log::info;

use super::characters::ControllerOutput;

/// Scene loaded when leaving the game-over screen
pub const START_SCENE: &str = "StartScene";

/// Which screen the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Playing,
    GameOver,
    /// Left for the start scene
    Menu,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    screen: Screen,
    health_text: String,
}

impl GameSession {
    pub fn new(starting_health: u32) -> Self {
        Self {
            screen: Screen::Playing,
            health_text: format_health(starting_health),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Text shown by the health label
    pub fn health_text(&self) -> &str {
        &self.health_text
    }

    /// Apply the presentation side of one controller output
    pub fn apply(&mut self, out: &ControllerOutput) {
        if let Some(health) = out.health {
            self.health_text = format_health(health);
        }

        if out.game_over && self.screen == Screen::Playing {
            self.screen = Screen::GameOver;
            info!("Showing game-over screen");
        }
    }

    /// Leave the game-over screen. Returns the scene to load, if any.
    pub fn back_to_menu(&mut self) -> Option<&'static str> {
        if self.screen != Screen::GameOver {
            return None;
        }

        self.screen = Screen::Menu;
        info!("Returning to {}", START_SCENE);
        Some(START_SCENE)
    }
}

fn format_health(health: u32) -> String {
    format!("Health: {}", health)
}
