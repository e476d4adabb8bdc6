use anyhow::{bail, Context, Result};
use tracing::{error, info};

use crate::config::GameConfig;
use crate::game::{GameStatus, MoveResult, SnakeGame};
use crate::input::{command_for, Command};
use crate::snake::{Cell, Direction};
use crate::term::TermManager;

const SNAKE_HEAD_CHAR: char = '0';
const SNAKE_BODY_CHAR: char = 'o';
const CHERRY_CHAR: char = 'X';

/// What the player asked for once a round is over
enum RoundEnd {
    Quit,
    Restart,
}

/// Final numbers, printed once the terminal is restored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub eaten: u32,
}

/// The terminal shell: reads keys, feeds them to the engine one at a time
/// and redraws whatever changed.
pub struct SnakeApp {
    term: TermManager,
    game: SnakeGame,
}

impl SnakeApp {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = SnakeGame::new(config).context("Error setting up the game")?;
        let term = TermManager::new()?;

        let (term_w, term_h) = term.size();
        let (grid_w, grid_h) = (game.config().grid_width, game.config().grid_height);
        if i32::from(term_w) < grid_w || i32::from(term_h) < grid_h {
            bail!("terminal is {term_w}x{term_h} but the grid needs {grid_w}x{grid_h}");
        }

        Ok(SnakeApp { term, game })
    }

    /// Runs until the player quits. The terminal is restored on every path
    /// out of here.
    pub fn run(&mut self) -> Result<Summary> {
        self.term.setup()?;
        let result = self.run_rounds();

        if let Err(err) = self.term.restore() {
            error!(?err, "failed to restore terminal");
            if result.is_ok() {
                return Err(err);
            }
        }

        result
    }

    fn run_rounds(&mut self) -> Result<Summary> {
        if !self.show_intro()? {
            return Ok(self.summary());
        }

        loop {
            match self.play()? {
                RoundEnd::Quit => break,
                RoundEnd::Restart => {
                    let config = self.game.config().clone();
                    self.game = SnakeGame::new(config).context("Error restarting the game")?;
                    info!("game restarted");
                }
            }
        }

        info!(eaten = self.game.eaten_count(), "player quit");
        Ok(self.summary())
    }

    pub fn summary(&self) -> Summary {
        Summary { eaten: self.game.eaten_count() }
    }

    /// Returns false when the player quits straight from the intro.
    fn show_intro(&mut self) -> Result<bool> {
        self.term.clear()?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "R to restart",
            "Q or Esc to quit",
            "",
            "Press any key to begin",
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        Ok(command_for(&key) != Command::Quit)
    }

    fn play(&mut self) -> Result<RoundEnd> {
        self.draw_all()?;

        loop {
            if self.game.status() == GameStatus::Ended || !self.game.is_legal() {
                return self.game_over();
            }

            let key = self.term.read_key_blocking()?;
            match command_for(&key) {
                Command::Move(direction) => self.step(direction)?,
                Command::Restart => return Ok(RoundEnd::Restart),
                Command::Quit => return Ok(RoundEnd::Quit),
                Command::None => {}
            }
        }
    }

    fn step(&mut self, direction: Direction) -> Result<()> {
        let result = self.game.advance(direction).context("Error advancing the snake")?;

        if let MoveResult::Moved { new_head, old_head, old_tail } = result {
            // Tail first: a step into the vacated tail cell redraws it as the head
            if let Some(tail) = old_tail {
                self.term.print_cell(tail, ' ')?;
            }
            self.term.print_cell(old_head, SNAKE_BODY_CHAR)?;
            let head_char = self.head_char();
            self.term.print_cell(new_head, head_char)?;

            if result.grew() {
                self.term.print_cell(self.game.cherry(), CHERRY_CHAR)?;
                self.draw_counter()?;
            }
            self.term.flush()?;
        }

        Ok(())
    }

    fn game_over(&mut self) -> Result<RoundEnd> {
        let eaten = format!("Cherries eaten: {}", self.game.eaten_count());
        self.term.show_message(&[
            "Game over!",
            &eaten,
            "",
            "Press R to play again,",
            "or any other key to quit.",
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        match command_for(&key) {
            Command::Restart => Ok(RoundEnd::Restart),
            _ => Ok(RoundEnd::Quit),
        }
    }

    fn draw_all(&mut self) -> Result<()> {
        let (w, h) = (self.game.config().grid_width, self.game.config().grid_height);
        self.term.clear()?;
        self.term.draw_borders(w as u16, h as u16)?;

        let cells: Vec<Cell> = self.game.body().iter().copied().collect();
        for (i, cell) in cells.into_iter().enumerate() {
            let ch = if i == 0 { self.head_char() } else { SNAKE_BODY_CHAR };
            self.term.print_cell(cell, ch)?;
        }
        self.term.print_cell(self.game.cherry(), CHERRY_CHAR)?;
        self.draw_counter()?;

        self.term.flush()
    }

    fn draw_counter(&mut self) -> Result<()> {
        let label = format!(" Cherries: {} ", self.game.eaten_count());
        let width = self.game.config().grid_width;
        if label.chars().count() as i32 + 4 <= width {
            self.term.print_str_at((2, 0), &label)?;
        }
        Ok(())
    }

    fn head_char(&self) -> char {
        match self.game.body().heading() {
            Some(Direction::Up) => '^',
            Some(Direction::Down) => 'v',
            Some(Direction::Left) => '<',
            Some(Direction::Right) => '>',
            None => SNAKE_HEAD_CHAR,
        }
    }
}
