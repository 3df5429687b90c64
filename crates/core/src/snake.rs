//! Snake movement and growth.
//!
//! The body is kept tail-first in a `VecDeque`, so a move pushes the new head
//! at the back and pops the tail at the front. Growth is explicit: the body
//! only gives up its tail once it is longer than `target_length`, so eating
//! a fruit simply skips one tail pop.
//!
//! The snake knows nothing about walls or its own body: collisions are
//! decided by the game loop from board contents.

use std::collections::VecDeque;

use crate::types::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Segments ordered tail to head
    body: VecDeque<Position>,
    direction: Direction,
    pending: Direction,
    target_length: usize,
    /// Tail popped by the most recent move
    old_tail: Option<Position>,
    allow_reversal: bool,
}

impl Snake {
    /// A one-segment snake heading right.
    pub fn new(initial_position: Position) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(initial_position);
        Self {
            body,
            direction: Direction::default(),
            pending: Direction::default(),
            target_length: 1,
            old_tail: None,
            allow_reversal: true,
        }
    }

    /// Whether a turn straight back onto the neck is honoured.
    ///
    /// Enabled by default. When disabled, a pending direction opposite to
    /// the current heading is dropped at the next move.
    pub fn with_reversal(mut self, allow: bool) -> Self {
        self.allow_reversal = allow;
        self
    }

    /// Request a heading for the next move. The latest request wins.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending = direction;
    }

    /// Advance one cell and return the new head.
    pub fn move_forward(&mut self) -> Position {
        if self.allow_reversal || !self.pending.is_opposite(self.direction) {
            self.direction = self.pending;
        } else {
            self.pending = self.direction;
        }

        let new_head = self.head_position().offset(self.direction);
        self.body.push_back(new_head);

        self.old_tail = if self.body.len() > self.target_length {
            self.body.pop_front()
        } else {
            None
        };

        new_head
    }

    pub fn head_position(&self) -> Position {
        // The body is never empty: it starts with one segment and a pop
        // always follows a push.
        self.body.back().copied().unwrap_or_default()
    }

    /// The tail cell vacated by the last move, if that move vacated one.
    pub fn old_tail_position(&self) -> Option<Position> {
        self.old_tail
    }

    /// Target length: the number of segments the body is growing towards.
    pub fn length(&self) -> usize {
        self.target_length
    }

    /// Number of segments currently in the body.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    pub fn increase_length(&mut self) {
        self.target_length += 1;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn head_glyph(&self) -> char {
        self.direction.head_glyph()
    }

    /// Segments from tail to head
    pub fn body(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_is_a_single_segment_heading_right() {
        let snake = Snake::new(Position::new(4, 4));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.body_len(), 1);
        assert_eq!(snake.head_position(), Position::new(4, 4));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.old_tail_position(), None);
    }

    #[test]
    fn move_pops_tail_at_target_length() {
        let mut snake = Snake::new(Position::new(2, 2));
        assert_eq!(snake.move_forward(), Position::new(2, 3));
        assert_eq!(snake.old_tail_position(), Some(Position::new(2, 2)));
        assert_eq!(snake.body_len(), 1);
    }

    #[test]
    fn growth_skips_one_tail_pop() {
        let mut snake = Snake::new(Position::new(2, 2));
        snake.increase_length();

        snake.move_forward();
        assert_eq!(snake.old_tail_position(), None);
        assert_eq!(snake.body_len(), 2);

        snake.move_forward();
        assert_eq!(snake.old_tail_position(), Some(Position::new(2, 2)));
        assert_eq!(snake.body_len(), 2);
        assert_eq!(
            snake.body().copied().collect::<Vec<_>>(),
            vec![Position::new(2, 3), Position::new(2, 4)]
        );
    }

    #[test]
    fn last_direction_request_wins() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Down);
        assert_eq!(snake.direction(), Direction::Right);

        assert_eq!(snake.move_forward(), Position::new(6, 5));
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head_glyph(), Direction::Down.head_glyph());
    }

    #[test]
    fn reversal_is_applied_by_default() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.set_direction(Direction::Left);
        assert_eq!(snake.move_forward(), Position::new(5, 4));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn reversal_is_dropped_when_forbidden() {
        let mut snake = Snake::new(Position::new(5, 5)).with_reversal(false);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.move_forward(), Position::new(5, 6));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }
}
