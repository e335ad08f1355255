//! Error types for the rules engine
//!
//! Two kinds of failure are kept apart:
//!
//! - [`RulesError`] is a precondition violation (a malformed board, an out of range
//!   coordinate). It travels on the `Err` path and halts the operation.
//! - [`IllegalMove`] is an ordinary gameplay outcome. A player proposing a move that is
//!   not legal is expected and frequent, so it is returned as a value inside
//!   [`MoveOutcome`](crate::api::MoveOutcome), never as an `Err`.

use thiserror::Error;

use crate::types::{Color, PieceId, Square};

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A check or legality query needed a king that is not on the board
    #[error("No {color} king on the board")]
    MissingKing { color: Color },

    /// Square coordinates outside the 8x8 grid
    #[error("Invalid square ({row}, {col}) (row and column must be 0-7)")]
    InvalidSquare { row: u8, col: u8 },

    /// Placing a piece whose identity is already on another square
    #[error("Piece {id} is already on square {square}")]
    DuplicatePiece { id: PieceId, square: Square },

    /// Spawning a new piece onto an occupied square
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Square },
}

/// Why a proposed move was turned down
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IllegalMove {
    /// Nothing stands on the origin square
    #[error("No piece at source square {square}")]
    EmptyOrigin { square: Square },

    /// The supplied piece is not the one standing on the origin square
    #[error("Supplied piece is not the occupant of {square}")]
    PieceMismatch { square: Square },

    /// The move exists only as a promotion and no promotion piece was chosen
    #[error("Move from {from} to {to} requires a promotion choice")]
    PromotionRequired { from: Square, to: Square },

    /// The move is not in the legal set for this position
    #[error("Illegal move: from square {from} to square {to}")]
    NotLegal { from: Square, to: Square },
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
