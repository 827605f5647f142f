use ratatui::{buffer::Buffer, layout::Rect};
use speedkey::SessionPhase;

use crate::{
    ui::{render_game_over, render_playing, render_start},
    App,
};

/// A UI Screen boundary: one per session phase
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Title, feature blurbs and the key preview
pub struct StartScreen;

impl Screen for StartScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_start(app, area, buf);
    }
}

/// Countdown, live score and the target key card
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_playing(app, area, buf);
    }
}

/// Final tally, accuracy and rank
pub struct GameOverScreen;

impl Screen for GameOverScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_game_over(app, area, buf);
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: SessionPhase) -> Box<dyn Screen> {
    match phase {
        SessionPhase::Start => Box::new(StartScreen),
        SessionPhase::Playing => Box::new(PlayingScreen),
        SessionPhase::GameOver => Box::new(GameOverScreen),
    }
}
