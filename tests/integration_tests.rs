//! Integration tests for the main game loop

use std::io;

use sneck::core::{
    BackendError, GameConfig, GameError, GameLoop, GameStatus, MemoryBackend, RenderBackend,
};
use sneck::types::{glyphs, Color, Direction, Key, Position};

fn game(rows: u16, cols: u16, seed: u64) -> GameLoop<MemoryBackend> {
    let config = GameConfig {
        rows,
        cols,
        seed: Some(seed),
        ..GameConfig::default()
    };
    GameLoop::new(config, MemoryBackend::new(rows + 4, cols + 4)).unwrap()
}

fn fruit_count(game: &GameLoop<MemoryBackend>) -> usize {
    game.board().find_all(glyphs::FRUIT).len()
}

#[test]
fn test_game_lifecycle() {
    let mut game = game(9, 30, 1);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.frame_counter(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.snake().head_position(), Position::new(4, 15));
    assert_eq!(fruit_count(&game), 1);

    game.set_fruit(Position::new(1, 1)).unwrap();
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.frame_counter(), 1);
    assert_eq!(game.backend().refresh_count(), 1);
    assert_eq!(game.snake().head_position(), Position::new(4, 16));
}

#[test]
fn test_runs_into_wall_after_two_moves() {
    let mut game = game(5, 5, 11);
    game.set_fruit(Position::new(3, 1)).unwrap();
    assert_eq!(game.snake().head_position(), Position::new(2, 2));

    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.snake().head_position(), Position::new(2, 4));

    assert_eq!(game.step().unwrap(), GameStatus::GameOver);
    let outcome = game.outcome();
    assert_eq!(outcome.status, GameStatus::GameOver);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.frames, 3);

    // The wall is untouched by the fatal head.
    assert_eq!(game.board().get_cell(Position::new(2, 4)), Ok(glyphs::VERTICAL_BAR));
}

#[test]
fn test_eating_fruit_up_then_left() {
    let mut game = game(5, 5, 5);
    game.set_fruit(Position::new(1, 1)).unwrap();

    game.backend_mut().push_key(Key::Char('k'));
    game.step().unwrap();
    assert_eq!(game.snake().head_position(), Position::new(1, 2));

    game.backend_mut().push_key(Key::Char('h'));
    game.step().unwrap();
    assert_eq!(game.snake().head_position(), Position::new(1, 1));

    assert_eq!(game.tick().unwrap(), GameStatus::Running);
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().length(), 2);
    assert_eq!(
        game.board().get_cell(Position::new(1, 1)),
        Ok(Direction::Left.head_glyph())
    );

    let fruits = game.board().find_all(glyphs::FRUIT);
    assert_eq!(fruits.len(), 1);
    assert_ne!(fruits[0], Position::new(1, 1));
}

#[test]
fn test_growth_after_n_fruit() {
    let mut game = game(9, 30, 2);
    game.set_fruit(Position::new(1, 1)).unwrap();
    game.step().unwrap();

    for n in 1..=6 {
        let ahead = game.snake().head_position();
        game.set_fruit(ahead).unwrap();
        assert_eq!(game.step().unwrap(), GameStatus::Running);
        assert_eq!(game.score(), n);
        assert_eq!(game.snake().length(), 1 + n as usize);
    }
}

#[test]
fn test_tail_lag_invariant() {
    let mut game = game(9, 30, 3);
    game.set_fruit(Position::new(1, 1)).unwrap();

    for frame in 1..=12u64 {
        // Feed a fruit straight ahead on a few frames.
        let feed = frame % 3 == 0;
        if feed {
            let ahead = game.snake().head_position();
            game.set_fruit(ahead).unwrap();
        }

        assert_eq!(game.tick().unwrap(), GameStatus::Running);
        assert_eq!(game.frame_counter(), frame);

        let on_board = game.board().snake_cell_count();
        assert_eq!(on_board, (frame as usize).min(game.snake().body_len()));
        assert!(game.snake().length() - on_board <= 1);

        if feed {
            // Keep the respawned fruit out of the snake's path.
            game.set_fruit(Position::new(1, 1)).unwrap();
        }
        game.advance();
    }
    assert_eq!(game.score(), 4);
}

#[test]
fn test_rapid_consecutive_eats_keep_one_fruit() {
    let mut game = game(9, 60, 4);
    game.set_fruit(Position::new(1, 1)).unwrap();
    game.step().unwrap();

    for n in 1..=10 {
        let ahead = game.snake().head_position();
        game.set_fruit(ahead).unwrap();

        let before = game.score();
        game.tick().unwrap();
        assert_eq!(game.score(), before + 1);
        assert_eq!(fruit_count(&game), 1, "after eat {n}");

        game.advance();
        game.tick().unwrap();
        assert_eq!(fruit_count(&game), 1, "one frame after eat {n}");
        game.advance();
    }
    assert!(game.score() >= 10);
}

#[test]
fn test_fruit_beats_collision() {
    // A fruit directly ahead is eaten, never fatal, even on the first frame.
    let mut game = game(5, 5, 6);
    game.set_fruit(Position::new(2, 2)).unwrap();

    assert_eq!(game.tick().unwrap(), GameStatus::Running);
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().length(), 2);
}

#[test]
fn test_reversal_into_own_body_ends_game() {
    let mut game = game(9, 30, 7);
    game.set_fruit(Position::new(1, 1)).unwrap();
    game.step().unwrap();

    for _ in 0..2 {
        let ahead = game.snake().head_position();
        game.set_fruit(ahead).unwrap();
        game.step().unwrap();
    }
    assert_eq!(game.snake().length(), 3);
    game.set_fruit(Position::new(1, 1)).unwrap();

    game.backend_mut().push_key(Key::Char('h'));
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.step().unwrap(), GameStatus::GameOver);
}

#[test]
fn test_reversal_is_ignored_when_forbidden() {
    let config = GameConfig {
        rows: 9,
        cols: 30,
        seed: Some(7),
        allow_reversal: false,
        ..GameConfig::default()
    };
    let mut game = GameLoop::new(config, MemoryBackend::new(13, 34)).unwrap();
    game.set_fruit(Position::new(1, 1)).unwrap();
    game.step().unwrap();

    for _ in 0..2 {
        let ahead = game.snake().head_position();
        game.set_fruit(ahead).unwrap();
        game.step().unwrap();
    }
    game.set_fruit(Position::new(1, 1)).unwrap();

    game.backend_mut().push_key(Key::Char('h'));
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.snake().direction(), Direction::Right);
}

#[test]
fn test_quit_key_stops_without_moving() {
    let mut game = game(9, 30, 8);
    game.set_fruit(Position::new(1, 1)).unwrap();
    let start = game.snake().head_position();

    game.backend_mut().push_key(Key::Char('q'));
    assert_eq!(game.step().unwrap(), GameStatus::Stopped);
    assert_eq!(game.snake().head_position(), start);
    assert_eq!(game.outcome().frames, 1);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let mut game = game(9, 30, 9);
    game.set_fruit(Position::new(1, 1)).unwrap();

    game.backend_mut().push_key(Key::Char('x'));
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.snake().direction(), Direction::Right);
}

/// Backend whose keyboard is gone.
struct NoKeyboard(MemoryBackend);

impl RenderBackend for NoKeyboard {
    fn erase(&mut self) {
        self.0.erase()
    }

    fn add_char(&mut self, row: u16, col: u16, ch: char, color: Color) {
        self.0.add_char(row, col, ch, color)
    }

    fn refresh(&mut self) -> Result<(), BackendError> {
        self.0.refresh()
    }

    fn get_key(&mut self) -> Result<Option<Key>, BackendError> {
        Err(io::Error::other("tty gone").into())
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        self.0.stop()
    }

    fn size(&self) -> (u16, u16) {
        self.0.size()
    }
}

#[test]
fn test_input_failure_counts_as_no_key() {
    let config = GameConfig {
        rows: 9,
        cols: 30,
        seed: Some(10),
        ..GameConfig::default()
    };
    let mut game = GameLoop::new(config, NoKeyboard(MemoryBackend::new(13, 34))).unwrap();
    game.set_fruit(Position::new(1, 1)).unwrap();

    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.step().unwrap(), GameStatus::Running);
    assert_eq!(game.snake().head_position(), Position::new(4, 17));
}

#[test]
fn test_board_full_ends_the_game() {
    // A 3x3 board has a single interior cell: the fruit lands under the
    // snake's head and nothing is left once it is eaten.
    let mut game = game(3, 3, 12);
    assert_eq!(game.board().find_all(glyphs::FRUIT), vec![Position::new(1, 1)]);

    assert_eq!(game.step().unwrap(), GameStatus::BoardFull);
    assert_eq!(game.score(), 1);
    assert_eq!(game.outcome().status, GameStatus::BoardFull);
}

#[test]
fn test_set_fruit_rejects_occupied_cells() {
    let mut game = game(5, 5, 13);
    assert!(matches!(
        game.set_fruit(Position::new(0, 0)),
        Err(GameError::CellOccupied { .. })
    ));
    assert!(matches!(
        game.set_fruit(Position::new(9, 9)),
        Err(GameError::Board(_))
    ));
}

#[test]
fn test_same_seed_same_fruit() {
    let a = game(20, 40, 99);
    let b = game(20, 40, 99);
    assert_eq!(
        a.board().find_all(glyphs::FRUIT),
        b.board().find_all(glyphs::FRUIT)
    );
}

#[test]
fn test_run_until_wall() {
    let config = GameConfig {
        rows: 5,
        cols: 5,
        fps: 500,
        seed: Some(14),
        ..GameConfig::default()
    };
    let mut game = GameLoop::new(config, MemoryBackend::new(9, 9)).unwrap();
    game.set_fruit(Position::new(3, 1)).unwrap();

    let outcome = game.run().unwrap();
    assert_eq!(outcome.status, GameStatus::GameOver);
    assert_eq!(outcome.frames, 3);
    assert!(!game.backend().is_stopped());
}
