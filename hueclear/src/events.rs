//! Notifications raised by the game for the UI to show.

use std::fmt;

/// Outcome of one selection that cleared squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionResult {
    /// 1-based number of this attempt.
    pub attempt: u32,
    /// Squares cleared by this attempt, the selected one included.
    pub removed: u32,
    /// Score after this attempt.
    pub score: u32,
    /// Whether this attempt cleared the last square.
    pub game_over: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A fresh board was dealt.
    Reset,
    /// A selection cleared one or more squares.
    Selected(SelectionResult),
    /// The selected square was cleared earlier.
    AlreadyRemoved { index: usize },
    /// The last square was cleared.
    GameOver { score: u32, attempts: u32 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => {
                f.write_str("Game reset! Click a square to clear it and every similar color.")
            }
            Self::Selected(r) => write!(
                f,
                "Attempt: {}, Removed: {}, Score: {}",
                r.attempt, r.removed, r.score
            ),
            Self::AlreadyRemoved { .. } => f.write_str("That square is already gone."),
            Self::GameOver { score, attempts } => write!(
                f,
                "Game over! Final score: {score} in {attempts} attempts. Press R to play again."
            ),
        }
    }
}
