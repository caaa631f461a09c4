//! Crossterm terminal driver for hueclear.
//!
//! Provides a [`CrosstermDriver`] that implements [`hueclear_core::Driver`].
//! Game space is stretched over every terminal row but the last, one
//! character cell per sample; the last row shows the scene's status text.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use hueclear_core::{
    app::Driver,
    geom::{Point, Viewport},
    messages::{Key, Msg},
    scene::Scene,
    style::Color,
};

/// Maps a [`hueclear_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// The part of a `cols × rows` terminal that shows the board.
fn board_viewport(cols: u16, rows: u16) -> Viewport {
    Viewport::new(cols as u32, rows.saturating_sub(1) as u32)
}

/// Game-space point at the center of terminal cell `(column, row)`, if
/// that cell is on the board.
fn cell_to_game(viewport: Viewport, column: u16, row: u16) -> Option<Point> {
    if column as u32 >= viewport.width || row as u32 >= viewport.height {
        return None;
    }
    viewport.to_game(column as f64 + 0.5, row as f64 + 0.5)
}

/// Colour of every board cell, row-major.
fn rasterize(scene: &Scene, viewport: Viewport) -> Vec<Color> {
    let width = viewport.width as usize;
    let mut cells = vec![scene.clear; width * viewport.height as usize];
    for quad in &scene.quads {
        let Some(span) = viewport.to_device(&quad.rect) else {
            continue;
        };
        for y in span.y0..span.y1 {
            cells[y * width + span.x0..y * width + span.x1].fill(quad.color);
        }
    }
    cells
}

fn translate_event(ev: Event, viewport: Viewport) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => Some(Msg::KeyDown {
            key: to_key(code)?,
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
        }),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Msg::Click {
            pos: cell_to_game(viewport, column, row)?,
        }),
        Event::Resize(..) => Some(Msg::Resize),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    cols: u16,
    rows: u16,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self { cols: 0, rows: 0 }
    }

    fn viewport(&self) -> Viewport {
        board_viewport(self.cols, self.rows)
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        log::debug!("terminal is {cols}x{rows}");

        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn std::error::Error>> {
        // Wait briefly for the first event, then drain whatever is queued.
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(w, h) = ev {
                self.cols = w;
                self.rows = h;
            }
            if let Some(msg) = translate_event(ev, self.viewport()) {
                tx.send(msg)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self, scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        let viewport = self.viewport();
        let cells = rasterize(scene, viewport);

        for (y, row) in cells.chunks(viewport.width.max(1) as usize).enumerate() {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            let mut current = None;
            for &color in row {
                if current != Some(color) {
                    queue!(stdout, SetBackgroundColor(to_ct_color(color)))?;
                    current = Some(color);
                }
                queue!(stdout, Print(' '))?;
            }
        }

        if self.rows > 0 {
            let status: String = scene.status.chars().take(self.cols as usize).collect();
            queue!(
                stdout,
                cursor::MoveTo(0, self.rows - 1),
                ResetColor,
                SetForegroundColor(CtColor::White),
                Print(status),
                terminal::Clear(ClearType::UntilNewLine),
                ResetColor
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueclear_core::Rect;

    #[test]
    fn key_codes() {
        assert_eq!(to_key(KeyCode::Char('r')), Some(Key::Char('r')));
        assert_eq!(to_key(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(to_key(KeyCode::Enter), None);
        assert_eq!(to_key(KeyCode::F(1)), None);
    }

    #[test]
    fn ctrl_is_carried_on_key_presses() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_event(ev, Viewport::new(10, 10)),
            Some(Msg::KeyDown {
                key: Key::Char('c'),
                ctrl: true
            })
        );
    }

    #[test]
    fn status_row_is_not_on_the_board() {
        let vp = board_viewport(10, 11);
        assert_eq!(vp, Viewport::new(10, 10));
        assert_eq!(cell_to_game(vp, 0, 10), None);
        assert_eq!(cell_to_game(vp, 10, 0), None);
        let p = cell_to_game(vp, 0, 0).unwrap();
        assert!((p.x + 0.9).abs() < 1e-6);
        assert!((p.y - 0.9).abs() < 1e-6);
        assert!(board_viewport(10, 0).is_empty());
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn left_click_maps_to_cell_center() {
        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 9, 9);
        match translate_event(ev, Viewport::new(10, 10)) {
            Some(Msg::Click { pos }) => {
                assert!((pos.x - 0.9).abs() < 1e-6);
                assert!((pos.y + 0.9).abs() < 1e-6);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let vp = Viewport::new(10, 10);
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
        ] {
            assert!(translate_event(mouse(kind, 1, 1), vp).is_none());
        }
        assert_eq!(translate_event(Event::Resize(80, 24), vp), Some(Msg::Resize));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(translate_event(Event::Key(release), Viewport::new(10, 10)).is_none());
        let press = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(translate_event(Event::Key(press), Viewport::new(10, 10)).is_some());
    }

    #[test]
    fn rasterize_fills_quads() {
        let mut scene = Scene::new();
        let green = Color::from_rgb(0, 255, 0);
        scene.push(Rect::from_edges(0.0, 0.0, 1.0, 1.0), green);
        let cells = rasterize(&scene, Viewport::new(4, 2));
        assert_eq!(
            cells,
            vec![
                Color::BLACK, Color::BLACK, green, green,
                Color::BLACK, Color::BLACK, Color::BLACK, Color::BLACK,
            ]
        );
    }
}
