//! Public API for the rules engine
//!
//! The boundary a presentation layer talks to. Side to move, turn alternation and input
//! encoding belong to that layer; every call here takes the color it is asked about.
//!
//! ## Module Organization
//!
//! - `game` - the [`Game`] session and [`reset_to_starting_position`]
//! - `moves` - [`attempt_move`] and its [`MoveOutcome`]
//! - `state` - queries with no side effects ([`legal_moves`], [`is_in_check`])

mod game;
mod moves;
mod state;

pub use game::{reset_to_starting_position, Game};
pub use moves::{attempt_move, MoveOutcome};
pub use state::{is_in_check, legal_moves, legal_moves_from};
