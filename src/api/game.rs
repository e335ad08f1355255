//! Game lifecycle management
//!
//! [`Game`] owns the authoritative board and history for one game and is their only
//! writer. It exposes the same operations as the free functions, bound to its own state.

use rand::Rng;
use tracing::{debug, info};

use super::moves::{attempt_move, MoveOutcome};
use crate::board::Board;
use crate::error::RulesResult;
use crate::history::MoveHistory;
use crate::move_gen;
use crate::types::{Color, Move, Piece, PieceType, Square};
use crate::validation;

/// The canonical initial arrangement
pub fn reset_to_starting_position() -> Board {
    Board::starting_position()
}

/// One game's authoritative state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    board: Board,
    history: MoveHistory,
}

impl Game {
    /// Create a new game with initial position
    pub fn new() -> Self {
        Game::default()
    }

    /// Start from an arbitrary position with no history
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            history: MoveHistory::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Every occupied square as `(piece, square)`, row-major
    ///
    /// Ids are stable across moves, so a renderer can match pieces between snapshots.
    pub fn pieces(&self) -> Vec<(Piece, Square)> {
        self.board.occupied().collect()
    }

    pub fn legal_moves(&self, color: Color) -> RulesResult<Vec<Move>> {
        validation::legal_moves(&self.board, color, &self.history)
    }

    pub fn legal_moves_from(&self, square: Square) -> RulesResult<Vec<Move>> {
        validation::legal_moves_from(&self.board, square, &self.history)
    }

    pub fn is_in_check(&self, color: Color) -> RulesResult<bool> {
        move_gen::is_in_check(&self.board, color)
    }

    /// See [`attempt_move`]
    pub fn attempt_move(
        &mut self,
        piece: Piece,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> RulesResult<MoveOutcome> {
        attempt_move(&mut self.board, &mut self.history, piece, from, to, promotion)
    }

    /// Reset the game to starting position
    pub fn reset(&mut self) {
        self.board = reset_to_starting_position();
        self.history.clear();
        info!("[RULES] Game reset to starting position");
    }

    /// Shuffle every square's contents and forget history
    ///
    /// Reshuffles until neither king stands attacked, so play can start from the result
    /// with either color. A board missing a king is shuffled once. Castling and en passant
    /// rights start afresh.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut attempts = 1;
        self.board.scramble(rng);

        while self.either_king_attacked() {
            self.board.scramble(rng);
            attempts += 1;
        }

        self.history.clear();
        debug!("[RULES] Scramble settled after {attempts} shuffles");
        info!("[RULES] Board scrambled");
    }

    fn either_king_attacked(&self) -> bool {
        [Color::Light, Color::Dark]
            .into_iter()
            .any(|color| matches!(self.is_in_check(color), Ok(true)))
    }
}
