//! A terminal snake that only moves when told to.
//!
//! - `snake`: cells, directions and the snake's body
//! - `game`: the engine that moves the snake and places cherries
//! - `config`, `error`: engine configuration and failures
//! - `input`, `term`, `app`: the crossterm shell around the engine

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod snake;
pub mod term;

pub use config::{GameConfig, MovePolicy};
pub use error::GameError;
pub use game::{GameStatus, MoveResult, Rejection, SnakeGame, Snapshot};
pub use snake::{Body, Cell, Direction};
