//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! used by the core logic, the terminal backend and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The playfield is a fixed grid including its one-cell wall ring:
//!
//! - **Rows**: 20 (indexed 0-19, row 0 and row 19 are walls)
//! - **Columns**: 40 (indexed 0-39, column 0 and column 39 are walls)
//! - **Spawn position**: the board centre, `(rows / 2, cols / 2)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 8 | Frames (snake steps) per second |
//!
//! # Glyphs
//!
//! Every board cell holds exactly one `char`. The [`glyphs`] module lists the
//! wall, snake and fruit glyphs and classifies a character into a [`Color`].
//!
//! # Examples
//!
//! ```
//! use sneck_types::{Direction, Position, GameAction, Key};
//!
//! let pos = Position::new(2, 2);
//! assert_eq!(pos.offset(Direction::Right), Position::new(2, 3));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! assert_eq!(
//!     GameAction::from_key(Key::Char('h')),
//!     Some(GameAction::Steer(Direction::Left))
//! );
//! ```

/// Board height in cells, walls included (20 rows)
pub const BOARD_ROWS: u16 = 20;

/// Board width in cells, walls included (40 columns)
pub const BOARD_COLS: u16 = 40;

/// Default frame rate (8 snake steps per second)
pub const DEFAULT_FPS: u32 = 8;

/// Minimum board side: one wall on each side plus one interior cell
pub const MIN_BOARD_SIDE: u16 = 3;

/// Immutable grid coordinate, `row` grows downwards and `col` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        let (drow, dcol) = direction.delta();
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal headings of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Unit step as `(row delta, col delta)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sneck_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Down.delta(), (1, 0));
    /// assert_eq!(Direction::Left.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Glyph drawn for a snake head travelling in this direction.
    pub fn head_glyph(&self) -> char {
        match self {
            Direction::Up => glyphs::SNAKE_UP,
            Direction::Down => glyphs::SNAKE_DOWN,
            Direction::Left => glyphs::SNAKE_LEFT,
            Direction::Right => glyphs::SNAKE_RIGHT,
        }
    }
}

/// A single keystroke as reported by a render backend.
///
/// Backends translate their native events into this type so the game loop
/// never depends on a terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    /// Ctrl-C in raw mode
    Interrupt,
}

/// What the player asked for with a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change the snake's heading on its next move
    Steer(Direction),
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Map a key to an action
    ///
    /// `h/j/k/l` steer left/down/up/right (arrow keys too), `q` and Ctrl-C
    /// quit. Everything else is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use sneck_types::{Direction, GameAction, Key};
    ///
    /// assert_eq!(GameAction::from_key(Key::Char('j')), Some(GameAction::Steer(Direction::Down)));
    /// assert_eq!(GameAction::from_key(Key::Char('k')), Some(GameAction::Steer(Direction::Up)));
    /// assert_eq!(GameAction::from_key(Key::Char('q')), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_key(Key::Char('x')), None);
    /// ```
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('h') | Key::Left => Some(GameAction::Steer(Direction::Left)),
            Key::Char('j') | Key::Down => Some(GameAction::Steer(Direction::Down)),
            Key::Char('k') | Key::Up => Some(GameAction::Steer(Direction::Up)),
            Key::Char('l') | Key::Right => Some(GameAction::Steer(Direction::Right)),
            Key::Char('q') | Key::Char('Q') | Key::Interrupt => Some(GameAction::Quit),
            _ => None,
        }
    }
}

/// Fixed colour palette understood by every render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Red,
    Green,
    Magenta,
    Yellow,
}

/// Glyph tables for walls, snake and fruit.
pub mod glyphs {
    use super::Color;

    pub const EMPTY: char = ' ';
    pub const FRUIT: char = '●';

    pub const HORIZONTAL_BAR: char = '─';
    pub const VERTICAL_BAR: char = '│';
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';

    pub const SNAKE_UP: char = '▲';
    pub const SNAKE_DOWN: char = '▼';
    pub const SNAKE_LEFT: char = '◀';
    pub const SNAKE_RIGHT: char = '▶';

    pub const WALL: [char; 6] = [
        HORIZONTAL_BAR,
        VERTICAL_BAR,
        TOP_LEFT,
        TOP_RIGHT,
        BOTTOM_LEFT,
        BOTTOM_RIGHT,
    ];

    pub const SNAKE: [char; 4] = [SNAKE_UP, SNAKE_DOWN, SNAKE_LEFT, SNAKE_RIGHT];

    pub fn is_wall(ch: char) -> bool {
        WALL.contains(&ch)
    }

    pub fn is_snake(ch: char) -> bool {
        SNAKE.contains(&ch)
    }

    /// Colour category of a board glyph
    ///
    /// # Examples
    ///
    /// ```
    /// use sneck_types::{glyphs, Color};
    ///
    /// assert_eq!(glyphs::color_of(glyphs::TOP_LEFT), Color::Magenta);
    /// assert_eq!(glyphs::color_of(glyphs::SNAKE_UP), Color::Green);
    /// assert_eq!(glyphs::color_of(glyphs::FRUIT), Color::Red);
    /// assert_eq!(glyphs::color_of('G'), Color::White);
    /// ```
    pub fn color_of(ch: char) -> Color {
        if is_wall(ch) {
            Color::Magenta
        } else if is_snake(ch) {
            Color::Green
        } else if ch == FRUIT {
            Color::Red
        } else {
            Color::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_and_board_constants() {
        assert_eq!(DEFAULT_FPS, 8);
        assert!(BOARD_ROWS >= MIN_BOARD_SIDE);
        assert!(BOARD_COLS >= MIN_BOARD_SIDE);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn glyph_categories_do_not_overlap() {
        for ch in glyphs::WALL {
            assert!(!glyphs::is_snake(ch));
            assert_ne!(ch, glyphs::FRUIT);
            assert_ne!(ch, glyphs::EMPTY);
        }
        for ch in glyphs::SNAKE {
            assert!(!glyphs::is_wall(ch));
            assert_ne!(ch, glyphs::FRUIT);
            assert_ne!(ch, glyphs::EMPTY);
        }
    }

    #[test]
    fn arrow_keys_steer_like_hjkl() {
        assert_eq!(GameAction::from_key(Key::Left), GameAction::from_key(Key::Char('h')));
        assert_eq!(GameAction::from_key(Key::Down), GameAction::from_key(Key::Char('j')));
        assert_eq!(GameAction::from_key(Key::Up), GameAction::from_key(Key::Char('k')));
        assert_eq!(GameAction::from_key(Key::Right), GameAction::from_key(Key::Char('l')));
        assert_eq!(GameAction::from_key(Key::Interrupt), Some(GameAction::Quit));
    }
}
