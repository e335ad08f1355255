//! # chess_rules
//!
//! Rules engine for chess on an 8x8 board: enumerate legal moves, validate a proposed
//! move, apply it.
//!
//! ## Architecture
//!
//! Components, leaves first:
//!
//! - [`board`] - occupancy grid plus piece identity, no rule knowledge
//! - [`history`] - append-only move log; the only source of castling and en passant rights
//! - [`move_gen`] - pseudo-legal moves per piece, and attack detection
//! - [`execute`] - applies a validated move, special-move side effects included
//! - [`validation`] - filters pseudo-legal moves by trial application on a board clone
//! - [`api`] - the boundary a presentation layer uses, plus the [`Game`] session
//!
//! Generation and attack detection depend only on the board; validation depends on both
//! plus execution. Nothing depends on validation, so legality checks never recurse.
//!
//! The engine does not track whose turn it is. Callers pass the color on every query.
//!
//! ## Example
//!
//! ```rust
//! use chess_rules::{Color, Game, MoveOutcome, PieceType};
//!
//! let mut game = Game::new();
//! let moves = game.legal_moves(Color::Light).unwrap();
//! let push = moves
//!     .iter()
//!     .find(|mv| mv.piece.piece_type == PieceType::Pawn)
//!     .copied()
//!     .unwrap();
//!
//! let outcome = game.attempt_move(push.piece, push.from, push.to, None).unwrap();
//! assert_eq!(outcome, MoveOutcome::Success(push));
//! assert!(!game.is_in_check(Color::Dark).unwrap());
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod execute;
pub mod history;
pub mod move_gen;
pub mod types;
pub mod validation;

pub use api::{
    attempt_move, is_in_check, legal_moves, legal_moves_from, reset_to_starting_position, Game,
    MoveOutcome,
};
pub use board::Board;
pub use error::{IllegalMove, RulesError, RulesResult};
pub use execute::{apply, apply_to_board};
pub use history::MoveHistory;
pub use move_gen::{generate_moves, is_square_attacked};
pub use types::{Color, Move, Piece, PieceId, PieceType, Square, SpecialMove};
pub use validation::is_legal;
