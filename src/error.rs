use thiserror::Error;

use crate::snake::Cell;

/// Failures the engine can report. Reaching the end of a game is not one of
/// them, see [`crate::game::GameStatus`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("grid {width}x{height} cannot hold a {needed}-cell snake and a cherry")]
    GridTooSmall { width: i32, height: i32, needed: usize },
    #[error("no free interior cell left for a cherry")]
    NoFreeCell,
    #[error("cherry position ({}, {}) is outside the interior or on the snake", .0.x, .0.y)]
    BadCherry(Cell),
}
