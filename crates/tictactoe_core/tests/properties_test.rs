//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use tictactoe_core::{Game, MoveDisposition, Player, Position, check_winner};

fn positions() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec((0usize..9).prop_map(|i| Position::ALL[i]), 0..20)
}

proptest! {
    #[test]
    fn marks_never_exceed_moves(moves in positions()) {
        let mut game = Game::new();
        for (played, pos) in moves.iter().enumerate() {
            game.apply_move(*pos);
            prop_assert!(game.board().mark_count() <= played + 1);
            prop_assert_eq!(game.board().mark_count(), game.history().len());
        }
    }

    #[test]
    fn occupied_square_never_changes_board(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            let before = game.board().clone();
            let was_empty = before.is_empty(pos);
            game.apply_move(pos);
            if !was_empty {
                prop_assert_eq!(game.board(), &before);
            }
        }
    }

    #[test]
    fn no_moves_after_a_win(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            let won = check_winner(game.board()).is_some();
            let before = game.clone();
            let disposition = game.apply_move(pos);
            if won {
                prop_assert_eq!(disposition, MoveDisposition::GameOver);
                prop_assert_eq!(&game, &before);
            }
        }
    }

    #[test]
    fn turn_flips_once_per_accepted_move(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            let to_move = game.to_move();
            match game.apply_move(pos) {
                MoveDisposition::Placed => prop_assert_eq!(game.to_move(), to_move.opponent()),
                _ => prop_assert_eq!(game.to_move(), to_move),
            }
        }
    }

    #[test]
    fn undo_walks_back_every_move(moves in positions()) {
        let mut game = Game::new();
        let mut snapshots = Vec::new();
        for pos in moves {
            let before = game.clone();
            if game.apply_move(pos) == MoveDisposition::Placed {
                snapshots.push(before);
            }
        }
        while let Some(expected) = snapshots.pop() {
            prop_assert!(game.undo());
            prop_assert_eq!(&game, &expected);
        }
        prop_assert!(!game.undo());
        prop_assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn reset_always_returns_to_start(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            game.apply_move(pos);
        }
        game.reset();
        prop_assert_eq!(game, Game::new());
    }
}
