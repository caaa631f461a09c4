//! Core game state: dealing the board, hit-testing, clearing similar colours
//! and scoring.

use std::time::{SystemTime, UNIX_EPOCH};

use hueclear_core::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cell::{CELL_COUNT, Cell, grid_rect};
use crate::color::Rgb;
use crate::events::{GameEvent, SelectionResult};

/// Colours closer than this are cleared together.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Points per square on the first attempt; drops by one per attempt.
const MAX_MULTIPLIER: u32 = 10;

/// Notifications held for [`GameState::take_events`]. Past this the oldest
/// are dropped.
const MAX_PENDING_EVENTS: usize = 64;

/// Score multiplier for an attempt made after `attempts` earlier ones.
#[inline]
pub fn multiplier(attempts: u32) -> u32 {
    MAX_MULTIPLIER.saturating_sub(attempts).max(1)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Similarity cutoff: squares whose colour distance to the selected one
    /// is strictly below it are cleared. Must be positive.
    pub threshold: f32,
    /// RNG seed. `None` seeds from the system clock.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Over,
}

/// What a call to [`GameState::select_at`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The point is not on the board.
    Miss,
    /// The point is on a square that was already cleared.
    AlreadyRemoved { index: usize },
    /// One or more squares were cleared and scored.
    Removed(SelectionResult),
    /// The board is empty; nothing happens until the next reset.
    Finished,
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// The whole puzzle: the board, score and attempt counter.
pub struct GameState {
    cells: [Cell; CELL_COUNT],
    score: u32,
    attempts: u32,
    threshold: f32,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Seed the RNG once and deal the first board.
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let threshold = if config.threshold > 0.0 {
            config.threshold
        } else {
            log::warn!(
                "similarity threshold {} is not positive, using {DEFAULT_THRESHOLD}",
                config.threshold
            );
            DEFAULT_THRESHOLD
        };
        log::debug!("new game, seed {seed}, threshold {threshold}");

        let mut game = Self {
            cells: std::array::from_fn(|i| Cell::new(grid_rect(i), Rgb::BLACK)),
            score: 0,
            attempts: 0,
            threshold,
            rng: StdRng::seed_from_u64(seed),
            events: Vec::new(),
        };
        game.reset();
        game
    }

    /// Deal a fresh board of random colours and zero the score.
    pub fn reset(&mut self) {
        let rng = &mut self.rng;
        self.cells = std::array::from_fn(|i| Cell::new(grid_rect(i), Rgb::random(&mut *rng)));
        self.restart();
    }

    /// Like [`reset`](Self::reset), but square `i` gets colour `color_of(i)`.
    pub fn reset_with(&mut self, mut color_of: impl FnMut(usize) -> Rgb) {
        self.cells = std::array::from_fn(|i| Cell::new(grid_rect(i), color_of(i)));
        self.restart();
    }

    fn restart(&mut self) {
        self.score = 0;
        self.attempts = 0;
        self.emit(GameEvent::Reset);
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Index of the first square whose rectangle contains `p`, cleared or
    /// not.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        if !p.is_finite() {
            return None;
        }
        self.cells.iter().position(|c| c.contains(p))
    }

    /// Select the square under `p`, clearing it and every active square of a
    /// similar colour.
    pub fn select_at(&mut self, p: Point) -> Selection {
        if self.is_game_over() {
            log::debug!("selection at {p} ignored, board is empty");
            return Selection::Finished;
        }
        let Some(index) = self.hit_test(p) else {
            log::debug!("selection at {p} missed the board");
            return Selection::Miss;
        };
        if !self.cells[index].is_active() {
            self.emit(GameEvent::AlreadyRemoved { index });
            return Selection::AlreadyRemoved { index };
        }

        let chosen = self.cells[index].color();
        let threshold = self.threshold;
        let mut removed = 0u32;
        for cell in self.cells.iter_mut().filter(|c| c.is_active()) {
            if cell.color().distance(chosen) < threshold {
                cell.deactivate();
                removed += 1;
            }
        }

        self.score = self
            .score
            .saturating_add(removed.saturating_mul(multiplier(self.attempts)));
        self.attempts += 1;

        let result = SelectionResult {
            attempt: self.attempts,
            removed,
            score: self.score,
            game_over: self.is_game_over(),
        };
        log::debug!("square {index} cleared {removed} squares: {result:?}");
        self.emit(GameEvent::Selected(result));
        if result.game_over {
            self.emit(GameEvent::GameOver {
                score: self.score,
                attempts: self.attempts,
            });
        }
        Selection::Removed(result)
    }

    // -------------------------------------------------------------------
    // Read-only view
    // -------------------------------------------------------------------

    /// Every square in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The squares still on the board, in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|c| c.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active_cells().count()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_game_over(&self) -> bool {
        self.cells.iter().all(|c| !c.is_active())
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::Over
        } else {
            Phase::Playing
        }
    }

    /// Drain the notifications raised since the last call.
    ///
    /// Only the newest 64 are kept between calls; callers that need every
    /// notification drain after each action.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
