//! Game state: turn order, move legality and end-of-game detection
//!
//! A [`GameState`] owns one board and is mutated only through
//! [`GameState::place_stone`]. Once the game is won or drawn every further
//! move is rejected and the state is effectively read-only.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};
use crate::config::{GameConfig, ValidationPolicy};
use crate::error::ConfigError;
use crate::rules::{find_winning_line, Direction, WinLine};

/// Where the game stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(WinLine),
    Draw,
}

/// Why a move was not applied. Routine for user-driven input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    GameOver,
    Occupied,
}

/// What an accepted move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with the other player to move
    Continue,
    Won(Player),
    Draw,
}

/// A single game of N-in-a-row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    win_count: usize,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Pos>,
    move_count: usize,
}

impl GameState {
    /// New game under the strict policy (size 5..=19, win count 3..=min(10, size))
    pub fn new(size: usize, win_count: usize) -> Result<Self, ConfigError> {
        Self::with_policy(size, win_count, ValidationPolicy::Strict)
    }

    pub fn with_policy(
        size: usize,
        win_count: usize,
        policy: ValidationPolicy,
    ) -> Result<Self, ConfigError> {
        policy.validate(size, win_count)?;
        debug!("new game: {size}x{size}, {win_count} in a row, policy {policy:?}");
        Ok(Self {
            board: Board::new(size),
            win_count,
            current_player: Player::Black,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config.size, config.win_count, config.policy)
    }

    /// Place the current player's stone at (`row`, `col`).
    ///
    /// Returns whether the move was applied. A rejected move leaves the state
    /// untouched.
    pub fn place_stone(&mut self, row: i64, col: i64) -> bool {
        self.try_place_stone(row, col).is_ok()
    }

    /// Same as [`place_stone`](Self::place_stone), reporting why a move was
    /// rejected or how an accepted one ended.
    pub fn try_place_stone(&mut self, row: i64, col: i64) -> Result<MoveOutcome, Rejection> {
        let pos = self.check_move(row, col).map_err(|rejection| {
            debug!("rejected move at ({row}, {col}): {rejection:?}");
            rejection
        })?;
        Ok(self.execute_move(pos))
    }

    /// All legality checks, before anything is mutated
    fn check_move(&self, row: i64, col: i64) -> Result<Pos, Rejection> {
        if !Pos::is_valid(row, col, self.board.size()) {
            return Err(Rejection::OutOfBounds);
        }
        if self.is_game_over() {
            return Err(Rejection::GameOver);
        }
        let pos = Pos::new(row as usize, col as usize);
        if !self.board.is_empty(pos) {
            return Err(Rejection::Occupied);
        }
        Ok(pos)
    }

    fn execute_move(&mut self, pos: Pos) -> MoveOutcome {
        let player = self.current_player;
        self.board.place_stone(pos, player.stone());
        self.last_move = Some(pos);
        self.move_count += 1;
        trace!("{player:?} plays {pos}");

        if let Some(line) = find_winning_line(&self.board, pos, self.win_count) {
            info!(
                "{player:?} wins after {} moves, {} line from {:?}",
                self.move_count,
                line.direction,
                line.cells.first()
            );
            self.status = GameStatus::Won(line);
            return MoveOutcome::Won(player);
        }

        if self.board.is_full() {
            info!("draw after {} moves", self.move_count);
            self.status = GameStatus::Draw;
            return MoveOutcome::Draw;
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue
    }

    /// Read-only view of the board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn win_count(&self) -> usize {
        self.win_count
    }

    /// Side to move; after a win this stays the winner
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        self.win_line().map(|line| line.player)
    }

    pub fn winning_cells(&self) -> Option<&[Pos]> {
        self.win_line().map(|line| line.cells.as_slice())
    }

    pub fn win_direction(&self) -> Option<Direction> {
        self.win_line().map(|line| line.direction)
    }

    fn win_line(&self) -> Option<&WinLine> {
        match &self.status {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }
}
