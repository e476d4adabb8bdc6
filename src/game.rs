use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::{GameConfig, MovePolicy};
use crate::error::GameError;
use crate::snake::{Body, Cell, Direction};

pub const INITIAL_SNAKE_LENGTH: usize = 5;

// Random draws per cherry before falling back to enumerating free cells.
const MIN_CHERRY_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal. No transition back to `Running`.
    Ended,
}

/// Why an `advance` call left the game untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The step pointed straight back into the neck
    Reversal,
    /// The step would leave the interior (`Contained` only)
    Border,
    /// The step would land on the body (`Contained` only)
    Body,
    /// The game is already over
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// `old_tail` is `None` when the snake ate the cherry and grew.
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell> },
    Ignored(Rejection),
}

impl MoveResult {
    pub fn grew(&self) -> bool {
        matches!(self, MoveResult::Moved { old_tail: None, .. })
    }
}

/// Read-only view of the game for rendering.
///
/// After `advance` fails with [`GameError::NoFreeCell`] no new cherry could
/// be placed, so `cherry` is still the eaten cell, which is now the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Head first
    pub body: Vec<Cell>,
    pub cherry: Cell,
    pub eaten: u32,
}

/// All the state of one game: the snake, the cherry, the counter and the
/// random source used to place cherries.
pub struct SnakeGame {
    config: GameConfig,
    body: Body,
    cherry: Cell,
    eaten: u32,
    status: GameStatus,
    rng: StdRng,
}

impl SnakeGame {
    /// Lays out the initial snake, centred and facing right, then places a
    /// cherry off its body.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let (w, h) = (config.grid_width, config.grid_height);
        let head = Cell::new(w / 2 + 2, h / 2);
        let body = Body::horizontal(head, INITIAL_SNAKE_LENGTH);

        let (min, max) = interior_bounds(&config);
        if !body.is_within(min, max) || config.interior_area() <= INITIAL_SNAKE_LENGTH {
            return Err(GameError::GridTooSmall {
                width: w,
                height: h,
                needed: INITIAL_SNAKE_LENGTH,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut game = SnakeGame {
            config,
            body,
            cherry: head,
            eaten: 0,
            status: GameStatus::Running,
            rng,
        };
        game.spawn_cherry()?;

        info!(
            width = w,
            height = h,
            policy = ?game.config.policy,
            head_x = head.x,
            head_y = head.y,
            "game initialized"
        );
        Ok(game)
    }

    /// Moves the snake one cell in `direction`. Either the whole step is
    /// applied or nothing changes and the reason is returned.
    ///
    /// The only error is running out of room for the next cherry. The step
    /// that ate the last one stays applied, the game ends and the cherry is
    /// left under the head.
    pub fn advance(&mut self, direction: Direction) -> Result<MoveResult, GameError> {
        if self.status == GameStatus::Ended {
            return Ok(MoveResult::Ignored(Rejection::Ended));
        }

        let old_head = self.body.head();
        let target = old_head.step(direction);

        if target == self.body.second() {
            debug!(?direction, "reversal ignored");
            return Ok(MoveResult::Ignored(Rejection::Reversal));
        }

        if self.config.policy == MovePolicy::Contained {
            if !self.in_interior(target) {
                debug!(?direction, "border ignored");
                return Ok(MoveResult::Ignored(Rejection::Border));
            }
            // The tail moves out of the way on a non-growing step
            if self.body.contains(target, false) && target != self.body.tail() {
                debug!(?direction, "body ignored");
                return Ok(MoveResult::Ignored(Rejection::Body));
            }
        }

        self.body.prepend(target);

        let old_tail = if target == self.cherry {
            self.eaten += 1;
            info!(eaten = self.eaten, length = self.body.len(), "cherry eaten");
            if let Err(err) = self.spawn_cherry() {
                self.status = GameStatus::Ended;
                warn!(%err, "game ended");
                return Err(err);
            }
            None
        } else {
            self.body.trim_tail()
        };

        if !self.is_legal() {
            self.status = GameStatus::Ended;
            warn!(head_x = target.x, head_y = target.y, "snake left a legal state, game ended");
        }

        Ok(MoveResult::Moved { new_head: target, old_head, old_tail })
    }

    /// Places a new cherry uniformly at random on an interior cell outside
    /// the body.
    pub fn spawn_cherry(&mut self) -> Result<Cell, GameError> {
        let attempts = MIN_CHERRY_ATTEMPTS.max(self.config.interior_area().saturating_mul(4));
        self.spawn_cherry_within(attempts)
    }

    /// Draws up to `attempts` random cells, then picks among the free cells
    /// left on the grid.
    fn spawn_cherry_within(&mut self, attempts: usize) -> Result<Cell, GameError> {
        let (min, max) = interior_bounds(&self.config);

        for _ in 0..attempts {
            let cell = Cell::new(
                self.rng.gen_range(min.x..=max.x),
                self.rng.gen_range(min.y..=max.y),
            );
            if !self.body.contains(cell, false) {
                self.cherry = cell;
                debug!(x = cell.x, y = cell.y, "cherry spawned");
                return Ok(cell);
            }
        }

        let free: Vec<Cell> = (min.y..=max.y)
            .flat_map(|y| (min.x..=max.x).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(*cell, false))
            .collect();

        let cell = free.choose(&mut self.rng).copied().ok_or(GameError::NoFreeCell)?;
        self.cherry = cell;
        debug!(x = cell.x, y = cell.y, free = free.len(), "cherry spawned after scan");
        Ok(cell)
    }

    /// Moves the cherry to a chosen interior cell off the body
    pub fn place_cherry(&mut self, cell: Cell) -> Result<(), GameError> {
        if !self.in_interior(cell) || self.body.contains(cell, false) {
            return Err(GameError::BadCherry(cell));
        }
        self.cherry = cell;
        Ok(())
    }

    /// True iff the whole body is inside the interior and no two cells
    /// coincide.
    pub fn is_legal(&self) -> bool {
        let (min, max) = interior_bounds(&self.config);
        self.body.is_within(min, max) && !self.body.has_overlap()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn eaten_count(&self) -> u32 {
        self.eaten
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn cherry(&self) -> Cell {
        self.cherry
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.body.iter().copied().collect(),
            cherry: self.cherry,
            eaten: self.eaten,
        }
    }

    fn in_interior(&self, cell: Cell) -> bool {
        let (min, max) = interior_bounds(&self.config);
        cell.x >= min.x && cell.x <= max.x && cell.y >= min.y && cell.y <= max.y
    }
}

fn interior_bounds(config: &GameConfig) -> (Cell, Cell) {
    (
        Cell::new(1, 1),
        Cell::new(
            config.grid_width.saturating_sub(2),
            config.grid_height.saturating_sub(2),
        ),
    )
}
