//! Game loop - owns the board and the snake and drives the frame cycle
//!
//! One frame is split in two halves so it can be driven without a clock:
//!
//! - [`GameLoop::tick`]: bump the frame counter, clear the surface, update the
//!   board from the snake's new head, draw score and board, flush.
//! - [`GameLoop::advance`]: poll one key and move the snake.
//!
//! [`GameLoop::run`] sleeps the rest of the frame budget between the two and
//! repeats until the status leaves [`GameStatus::Running`].
//!
//! # Collision rule
//!
//! Eating and dying are decided by a single lookup of the board cell under
//! the new head, before the head glyph is written there. A fruit glyph means
//! eat, any other non-empty glyph means game over.
//!
//! # Fruit placement
//!
//! Rejection sampling over the whole grid: draw a random cell until it is
//! empty. Walls are never empty, so they are simply rejected.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::backend::RenderBackend;
use crate::board::Board;
use crate::error::GameError;
use crate::pacer::FramePacer;
use crate::painter::Painter;
use crate::snake::Snake;
use crate::types::{glyphs, GameAction, Position, BOARD_COLS, BOARD_ROWS, DEFAULT_FPS};
use crate::view::BoardView;

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub fps: u32,
    /// Seed for fruit placement; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Whether an immediate U-turn is applied (and usually fatal).
    pub allow_reversal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            fps: DEFAULT_FPS,
            seed: None,
            allow_reversal: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// The head ran into a wall or the snake's own body.
    GameOver,
    /// The player quit.
    Stopped,
    /// No empty cell was left for the next fruit.
    BoardFull,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutcome {
    pub status: GameStatus,
    pub score: u32,
    pub frames: u64,
}

pub struct GameLoop<B: RenderBackend> {
    board: Board,
    snake: Snake,
    backend: B,
    rng: StdRng,
    pacer: FramePacer,
    frame_counter: u64,
    score: u32,
    status: GameStatus,
}

impl<B: RenderBackend> GameLoop<B> {
    /// Build the board, put the snake at its centre and place the first fruit.
    pub fn new(config: GameConfig, backend: B) -> Result<Self, GameError> {
        if config.fps == 0 {
            return Err(GameError::InvalidConfig {
                reason: "fps must be at least 1",
            });
        }

        let board = Board::new(config.rows, config.cols)?;
        let snake = Snake::new(board.center()).with_reversal(config.allow_reversal);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut game = Self {
            board,
            snake,
            backend,
            rng,
            pacer: FramePacer::new(config.fps),
            frame_counter: 0,
            score: 0,
            status: GameStatus::Running,
        };

        info!(
            rows = config.rows,
            cols = config.cols,
            fps = config.fps,
            seed = ?config.seed,
            "new game"
        );

        if !game.place_fruit()? {
            game.status = GameStatus::BoardFull;
        }
        Ok(game)
    }

    /// First half of a frame: board update, then render.
    pub fn tick(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_finished() {
            return Ok(self.status);
        }

        self.frame_counter += 1;
        self.backend.erase();

        self.update_board()?;
        if self.status == GameStatus::GameOver {
            info!(score = self.score, frame = self.frame_counter, "game over");
            return Ok(self.status);
        }

        self.render()?;
        Ok(self.status)
    }

    /// Second half of a frame: one key, then one snake step.
    pub fn advance(&mut self) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }

        match self.poll_action() {
            Some(GameAction::Quit) => {
                info!(score = self.score, "player quit");
                self.status = GameStatus::Stopped;
                return self.status;
            }
            Some(GameAction::Steer(direction)) => self.snake.set_direction(direction),
            None => {}
        }

        self.snake.move_forward();
        self.status
    }

    /// A whole frame without sleeping.
    pub fn step(&mut self) -> Result<GameStatus, GameError> {
        let status = self.tick()?;
        if status.is_finished() {
            return Ok(status);
        }
        Ok(self.advance())
    }

    /// Run paced frames until the game ends.
    pub fn run(&mut self) -> Result<LoopOutcome, GameError> {
        while !self.status.is_finished() {
            let started = Instant::now();
            if self.tick()?.is_finished() {
                break;
            }
            std::thread::sleep(self.pacer.remaining(started.elapsed()));
            self.advance();
        }
        Ok(self.outcome())
    }

    /// Paint the end-of-game banner over the board and show it.
    pub fn show_game_over(&mut self) -> Result<(), GameError> {
        let title = match self.status {
            GameStatus::BoardFull => "YOU WIN",
            _ => "GAME OVER",
        };
        let score = format!("Score: {:03}", self.score);
        Painter::paint_centre_text(&mut self.board, &[title, "", &score])?;

        self.backend.erase();
        self.render()
    }

    /// Move the fruit to `pos`, which must be empty or already hold it.
    ///
    /// Used to script deterministic sessions.
    pub fn set_fruit(&mut self, pos: Position) -> Result<(), GameError> {
        match self.board.get_cell(pos)? {
            glyphs::EMPTY | glyphs::FRUIT => {}
            _ => return Err(GameError::CellOccupied { pos }),
        }
        for old in self.board.find_all(glyphs::FRUIT) {
            self.board.write_cell(old, glyphs::EMPTY)?;
        }
        self.board.write_cell(pos, glyphs::FRUIT)?;
        Ok(())
    }

    pub fn outcome(&self) -> LoopOutcome {
        LoopOutcome {
            status: self.status,
            score: self.score,
            frames: self.frame_counter,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn pacer(&self) -> FramePacer {
        self.pacer
    }

    fn update_board(&mut self) -> Result<(), GameError> {
        if let Some(tail) = self.snake.old_tail_position() {
            self.board.write_cell(tail, glyphs::EMPTY)?;
        }

        let head = self.snake.head_position();
        match self.board.get_cell(head)? {
            glyphs::EMPTY => {}
            glyphs::FRUIT => self.eat_fruit()?,
            other => {
                debug!(%head, glyph = %other, "collision");
                self.status = GameStatus::GameOver;
                return Ok(());
            }
        }

        self.board.write_cell(head, self.snake.head_glyph())?;
        Ok(())
    }

    fn eat_fruit(&mut self) -> Result<(), GameError> {
        if !self.place_fruit()? {
            info!(score = self.score + 1, "board full");
            self.status = GameStatus::BoardFull;
        }
        self.snake.increase_length();
        self.score += 1;
        debug!(score = self.score, length = self.snake.length(), "fruit eaten");
        Ok(())
    }

    /// Returns `false` when there is no empty cell left.
    fn place_fruit(&mut self) -> Result<bool, GameError> {
        if self.board.empty_cell_count() == 0 {
            return Ok(false);
        }

        let (rows, cols) = self.board.dimensions();
        loop {
            let candidate = Position::new(
                self.rng.random_range(0..rows as i32),
                self.rng.random_range(0..cols as i32),
            );
            if self.board.get_cell(candidate)? == glyphs::EMPTY {
                self.board.write_cell(candidate, glyphs::FRUIT)?;
                debug!(fruit = %candidate, "fruit placed");
                return Ok(true);
            }
        }
    }

    fn render(&mut self) -> Result<(), GameError> {
        BoardView::draw(&self.board, self.score, &mut self.backend);
        self.backend.refresh()?;
        Ok(())
    }

    fn poll_action(&mut self) -> Option<GameAction> {
        match self.backend.get_key() {
            Ok(key) => key.and_then(GameAction::from_key),
            Err(err) => {
                warn!(error = %err, "input read failed, treating as no key");
                None
            }
        }
    }
}
