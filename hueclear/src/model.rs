//! Elm-architecture Model implementation.

use hueclear_core::{
    app::{Effect, Model},
    messages::{Key, Msg},
    scene::Scene,
};

use crate::color::BACKGROUND;
use crate::game::{GameConfig, GameState};
use crate::log::GameLog;

pub const TITLE: &str = "hueclear";

pub const HELP_TEXT: &str = "Click a square to clear it and every square of a similar color. \
R deals a new board, Q or Esc quits.";

/// The hueclear game model.
pub struct HueClearModel {
    game: GameState,
    log: GameLog,
}

impl Default for HueClearModel {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl HueClearModel {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: GameState::new(config),
            log: GameLog::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// One-line summary for status bars and window titles.
    pub fn status_line(&self) -> String {
        let mut status = format!(
            "Score: {}  Attempts: {}  Left: {}",
            self.game.score(),
            self.game.attempts(),
            self.game.active_count()
        );
        if let Some(entry) = self.log.last() {
            status.push_str("  |  ");
            status.push_str(&entry.line());
        }
        status
    }

    fn handle_key(&mut self, key: Key, ctrl: bool) -> Option<Effect> {
        match key {
            Key::Char('c') if ctrl => Some(Effect::End),
            Key::Char('r') | Key::Char('R') => {
                self.game.reset();
                None
            }
            Key::Char('q') | Key::Char('Q') | Key::Escape => Some(Effect::End),
            Key::Char('?') => {
                self.log.log(HELP_TEXT);
                None
            }
            _ => None,
        }
    }

    fn flush_events(&mut self) {
        for event in self.game.take_events() {
            self.log.push_event(&event);
        }
    }
}

impl Model for HueClearModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        let effect = match msg {
            Msg::KeyDown { key, ctrl } => self.handle_key(key, ctrl),
            Msg::Click { pos } => {
                self.game.select_at(pos);
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::Init | Msg::Resize => None,
        };
        self.flush_events();
        effect
    }

    fn draw(&self, scene: &mut Scene) {
        scene.clear_to(BACKGROUND);
        for cell in self.game.active_cells() {
            scene.push(cell.rect(), cell.color().to_color());
        }
        scene.set_status(self.status_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CELL_COUNT, COLS, grid_rect};
    use crate::color::Rgb;
    use hueclear_core::Point;

    fn key(key: Key) -> Msg {
        Msg::KeyDown { key, ctrl: false }
    }

    fn click(x: f32, y: f32) -> Msg {
        Msg::Click {
            pos: Point::new(x, y),
        }
    }

    fn model() -> HueClearModel {
        HueClearModel::new(GameConfig::default().with_seed(42))
    }

    #[test]
    fn init_logs_welcome() {
        let mut m = model();
        assert!(m.update(Msg::Init).is_none());
        let line = m.log().last().map(|e| e.line()).unwrap_or_default();
        assert!(line.starts_with("Game reset!"));
    }

    #[test]
    fn draws_one_quad_per_active_square() {
        let mut m = model();
        m.update(Msg::Init);
        let mut scene = Scene::new();
        m.draw(&mut scene);
        assert_eq!(scene.quads.len(), CELL_COUNT);
        assert_eq!(scene.clear, BACKGROUND);
        assert_eq!(scene.quads[3].rect, grid_rect(3));
        assert_eq!(scene.quads[3].color, m.game().cells()[3].color().to_color());
        assert!(scene.status.starts_with("Score: 0  Attempts: 0  Left: 25"));
    }

    #[test]
    fn click_clears_and_reports() {
        let mut m = model();
        m.game_mut().reset_with(|_| Rgb::RED);
        m.update(click(0.5, 0.5));
        assert!(m.game().is_game_over());

        let mut scene = Scene::new();
        m.draw(&mut scene);
        assert!(scene.quads.is_empty());
        assert!(scene.status.contains("Final score: 250"));
        assert_eq!(m.log().recent_lines(2)[0], "Attempt: 1, Removed: 25, Score: 250");
    }

    #[test]
    fn r_key_deals_new_board() {
        let mut m = model();
        m.game_mut().reset_with(|_| Rgb::RED);
        m.update(click(0.0, 0.0));
        assert!(m.update(key(Key::Char('r'))).is_none());
        assert_eq!(m.game().active_count(), CELL_COUNT);
        assert_eq!(m.game().score(), 0);
    }

    #[test]
    fn quit_keys_end_the_app() {
        let mut m = model();
        assert!(matches!(m.update(key(Key::Escape)), Some(Effect::End)));
        assert!(matches!(m.update(key(Key::Char('q'))), Some(Effect::End)));
        assert!(matches!(
            m.update(Msg::KeyDown {
                key: Key::Char('c'),
                ctrl: true
            }),
            Some(Effect::End)
        ));
        assert!(matches!(m.update(Msg::Quit), Some(Effect::End)));
        assert!(m.update(key(Key::Char('c'))).is_none());
    }

    #[test]
    fn click_on_a_grid_line_selects() {
        let mut m = model();
        m.update(click(-0.2, 0.1));
        assert_eq!(m.game().attempts(), 1);
        assert!(!m.game().cells()[2 * COLS + 1].is_active());
    }

    #[test]
    fn help_key_logs_help() {
        let mut m = model();
        m.update(Msg::Init);
        m.update(key(Key::Char('?')));
        assert_eq!(m.log().last().map(|e| e.text.as_str()), Some(HELP_TEXT));
    }
}
