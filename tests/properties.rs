//! Property tests over random move sequences

use gomoku::{GameState, GameStatus, Pos, Stone};
use proptest::prelude::*;

/// Random game parameters and a random stream of (possibly illegal) moves
fn game_and_moves() -> impl Strategy<Value = (usize, usize, Vec<(i64, i64)>)> {
    (5usize..=9).prop_flat_map(|size| {
        let win_count = 3..=size.min(6);
        let coord = -1i64..=size as i64;
        (
            Just(size),
            win_count,
            prop::collection::vec((coord.clone(), coord), 0..120),
        )
    })
}

fn is_contiguous_line(cells: &[Pos], (dr, dc): (i32, i32)) -> bool {
    cells.windows(2).all(|w| {
        w[1].row as i64 - w[0].row as i64 == dr as i64
            && w[1].col as i64 - w[0].col as i64 == dc as i64
    })
}

proptest! {
    /// Rejected moves never change the state; accepted ones add exactly one stone
    #[test]
    fn prop_moves_are_atomic((size, win_count, moves) in game_and_moves()) {
        let mut game = GameState::new(size, win_count).unwrap();
        for (r, c) in moves {
            let before = game.clone();
            if game.place_stone(r, c) {
                prop_assert!(!before.is_game_over());
                prop_assert_eq!(game.board().stone_count(), before.board().stone_count() + 1);
                let placed = game.board().get(Pos::new(r as usize, c as usize));
                prop_assert_eq!(placed, before.current_player().stone());
            } else {
                prop_assert_eq!(&game, &before);
            }
        }
    }

    /// Players alternate while the game runs; the turn freezes once it ends
    #[test]
    fn prop_turn_alternates_until_game_over((size, win_count, moves) in game_and_moves()) {
        let mut game = GameState::new(size, win_count).unwrap();
        for (r, c) in moves {
            let mover = game.current_player();
            if game.place_stone(r, c) {
                match game.status() {
                    GameStatus::InProgress => {
                        prop_assert_eq!(game.current_player(), mover.opponent());
                    }
                    GameStatus::Won(line) => {
                        prop_assert_eq!(line.player, mover);
                        prop_assert_eq!(game.current_player(), mover);
                    }
                    GameStatus::Draw => {
                        prop_assert_eq!(game.current_player(), mover);
                    }
                }
            }
        }
    }

    /// A reported win is exactly `win_count` contiguous cells of the winner's color,
    /// always including the stone that completed it
    #[test]
    fn prop_winning_line_is_well_formed((size, win_count, moves) in game_and_moves()) {
        let mut game = GameState::new(size, win_count).unwrap();
        for (r, c) in moves {
            game.place_stone(r, c);
        }
        if let GameStatus::Won(line) = game.status() {
            prop_assert_eq!(line.cells.len(), win_count);
            prop_assert!(is_contiguous_line(&line.cells, line.direction.delta()));
            for &pos in &line.cells {
                prop_assert_eq!(game.board().get(pos), line.player.stone());
            }
            prop_assert!(line.cells.contains(&game.last_move().unwrap()));
        }
    }

    /// Once over, a game stays over with the same result
    #[test]
    fn prop_status_is_monotonic((size, win_count, moves) in game_and_moves()) {
        let mut game = GameState::new(size, win_count).unwrap();
        let mut finished: Option<GameStatus> = None;
        for (r, c) in moves {
            game.place_stone(r, c);
            if let Some(status) = &finished {
                prop_assert_eq!(game.status(), status);
            } else if game.is_game_over() {
                finished = Some(game.status().clone());
            }
        }
    }

    /// Draw means a full board and no winner
    #[test]
    fn prop_draw_only_on_full_board((size, win_count, moves) in game_and_moves()) {
        let mut game = GameState::new(size, win_count).unwrap();
        for (r, c) in moves {
            game.place_stone(r, c);
        }
        let full = game.board().rows().flatten().all(|&s| s != Stone::Empty);
        if game.status() == &GameStatus::Draw {
            prop_assert!(full);
            prop_assert_eq!(game.winner(), None);
        }
        if full {
            prop_assert!(game.is_game_over());
        }
    }
}
