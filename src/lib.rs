//! Gomoku rules engine for N-in-a-row on a square board
//!
//! Free-style Gomoku with configurable board size and win length:
//! - Black moves first, players alternate
//! - A run of `win_count` or more stones in any of four directions wins
//! - A full board with no winning line is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation, stones, coordinates
//! - [`rules`]: Win detection through the last placed stone
//! - [`config`]: Game parameters and validation policies
//! - [`game`]: The game state machine driving moves
//! - [`error`]: Construction errors
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Direction, GameState, Player};
//!
//! let mut game = GameState::new(15, 5).unwrap();
//! for col in 3..7 {
//!     assert!(game.place_stone(7, col)); // Black
//!     assert!(game.place_stone(0, col * 2)); // White, elsewhere
//! }
//! assert!(game.place_stone(7, 7));
//!
//! assert!(game.is_game_over());
//! assert_eq!(game.winner(), Some(Player::Black));
//! assert_eq!(game.win_direction(), Some(Direction::Horizontal));
//! assert_eq!(game.winning_cells().map(|cells| cells.len()), Some(5));
//! ```
//!
//! The engine holds no global state. Each [`GameState`] is independent, so
//! several games can run side by side.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone};
pub use config::{Bounds, GameConfig, ValidationPolicy, MAX_BOARD_SIZE};
pub use error::ConfigError;
pub use game::{GameState, GameStatus, MoveOutcome, Rejection};
pub use rules::{Direction, WinLine};
