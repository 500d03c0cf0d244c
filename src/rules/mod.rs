//! Game rules for N-in-a-row Gomoku
//!
//! Free-style rules: any run of `win_count` or more wins, no forbidden moves,
//! no captures.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_win_at, Direction, WinLine};
