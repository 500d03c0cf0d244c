//! Win condition checking for N-in-a-row
//!
//! A move wins when the stone just placed completes a contiguous run of at
//! least `win_count` same-colored stones along one of four directions. Only
//! lines through the last placed stone are examined.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};

/// Line orientation, as a (row-step, col-step) vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// (0, 1)
    Horizontal,
    /// (1, 0)
    Vertical,
    /// (1, 1)
    DiagonalDown,
    /// (1, -1)
    DiagonalUp,
}

impl Direction {
    /// Fixed iteration order. When a stone completes several lines at once,
    /// the first direction here is the one reported.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDown => "diagonal-down",
            Direction::DiagonalUp => "diagonal-up",
        }
    }

    /// Coordinate that orders cells along this line
    #[inline]
    fn line_key(self, pos: Pos) -> usize {
        match self {
            Direction::Horizontal => pos.col,
            _ => pos.row,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed winning line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub player: Player,
    /// Exactly `win_count` contiguous cells, in line order
    pub cells: Vec<Pos>,
    pub direction: Direction,
}

/// Push same-colored neighbours of `pos` along `sign * (dr, dc)`, stopping at
/// the first other cell or after `limit` steps.
fn collect_run(
    board: &Board,
    pos: Pos,
    (dr, dc): (i32, i32),
    sign: i64,
    limit: usize,
    out: &mut Vec<Pos>,
) {
    let color = board.get(pos);
    for i in 1..=limit {
        match pos.offset(dr, dc, sign * i as i64, board.size()) {
            Some(next) if board.get(next) == color => out.push(next),
            _ => break,
        }
    }
}

/// Find the winning line through the stone at `pos`, if any.
///
/// Each side of `pos` is walked at most `win_count - 1` steps. A run longer
/// than `win_count` is cut down to its first `win_count` cells in line order
/// (by column for horizontal, by row otherwise), which need not be centered
/// on `pos`.
pub fn find_winning_line(board: &Board, pos: Pos, win_count: usize) -> Option<WinLine> {
    let player = Player::try_from(board.get(pos)).ok()?;
    // No run can extend further than the board is wide
    let reach = win_count.saturating_sub(1).min(board.size());

    for direction in Direction::ALL {
        let delta = direction.delta();
        let mut cells = Vec::with_capacity(2 * reach + 1);
        cells.push(pos);

        collect_run(board, pos, delta, 1, reach, &mut cells);
        collect_run(board, pos, delta, -1, reach, &mut cells);

        if cells.len() >= win_count {
            cells.sort_by_key(|&p| direction.line_key(p));
            cells.truncate(win_count);
            return Some(WinLine {
                player,
                cells,
                direction,
            });
        }
    }

    None
}

/// Fast N-in-a-row check at a specific position. No allocation.
#[inline]
pub fn has_win_at(board: &Board, pos: Pos, win_count: usize) -> bool {
    let color = board.get(pos);
    if Player::try_from(color).is_err() {
        return false;
    }
    let size = board.size();
    let reach = win_count.saturating_sub(1).min(size);

    Direction::ALL.iter().any(|dir| {
        let (dr, dc) = dir.delta();
        let count_side = |sign: i64| {
            (1..=reach)
                .map_while(|i| pos.offset(dr, dc, sign * i as i64, size))
                .take_while(|&p| board.get(p) == color)
                .count()
        };
        1 + count_side(1) + count_side(-1) >= win_count
    })
}
