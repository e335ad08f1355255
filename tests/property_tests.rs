//! Property tests over random legal playouts
//!
//! Each case plays a seeded random game through the public API and checks invariants
//! that must hold after every ply.

use chess_rules::{
    is_in_check, is_legal, legal_moves, Board, Color, Game, MoveOutcome, PieceType,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_playout_keeps_invariants(seed in any::<u64>(), plies in 1usize..60) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        let mut mover = Color::Light;

        for _ in 0..plies {
            let moves = game.legal_moves(mover).expect("both kings stay on the board");
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            prop_assert!(
                mv.captured.map_or(true, |piece| piece.piece_type != PieceType::King),
                "A legal move never captures a king"
            );
            prop_assert_eq!(is_legal(game.board(), &mv, game.history()), Ok(true));

            let outcome = game
                .attempt_move(mv.piece, mv.from, mv.to, mv.promotion)
                .expect("both kings stay on the board");
            prop_assert_eq!(outcome, MoveOutcome::Success(mv));

            prop_assert_eq!(game.is_in_check(mover), Ok(false));
            prop_assert!(game.pieces().len() <= 32);
            prop_assert!(game.board().king_square(Color::Light).is_ok());
            prop_assert!(game.board().king_square(Color::Dark).is_ok());

            mover = mover.opponent();
        }
    }

    #[test]
    fn prop_queries_leave_state_untouched(seed in any::<u64>(), plies in 0usize..30) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        let mut mover = Color::Light;

        for _ in 0..plies {
            let moves = game.legal_moves(mover).expect("both kings stay on the board");
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            game.attempt_move(mv.piece, mv.from, mv.to, mv.promotion)
                .expect("both kings stay on the board");
            mover = mover.opponent();
        }

        let snapshot = game.clone();
        let _ = legal_moves(game.board(), Color::Light, game.history());
        let _ = legal_moves(game.board(), Color::Dark, game.history());
        let _ = is_in_check(game.board(), mover);

        prop_assert_eq!(game, snapshot);
    }

    #[test]
    fn prop_clone_is_independent(seed in any::<u64>()) {
        let original = Board::starting_position();
        let mut copy = original.clone();
        let mut rng = StdRng::seed_from_u64(seed);

        copy.scramble(&mut rng);
        let _ = copy.clear(copy.king_square(Color::Light).expect("king present"));

        prop_assert_eq!(original, Board::starting_position());
    }

    #[test]
    fn prop_scramble_preserves_pieces(seed in any::<u64>()) {
        let mut board = Board::starting_position();
        let mut before: Vec<_> = board.occupied().map(|(piece, _)| piece).collect();
        before.sort_by_key(|piece| piece.id);

        board.scramble(&mut StdRng::seed_from_u64(seed));

        let mut after: Vec<_> = board.occupied().map(|(piece, _)| piece).collect();
        after.sort_by_key(|piece| piece.id);
        prop_assert_eq!(before, after);
    }
}
