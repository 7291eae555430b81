//! All shortest move sequences of a piece on a rectangular board.
//!
//! The search runs in two phases:
//!
//! - **Levelled BFS** ([`Reachability::explore`]) assigns every visited cell
//!   its distance level and records *all* predecessors that reach it at that
//!   level, producing a DAG of shortest routes.
//! - **Reconstruction** ([`reconstruct`]) walks that DAG backwards from the
//!   target with an explicit stack and yields the complete [`PathSet`].
//!
//! Move generation is pluggable through [`MoveRule`]; the engine has no
//! piece-specific logic. [`ResultGraph`] flattens a path set into nodes and
//! deduplicated edges for renderers.
//!
//! ```
//! use leaper_core::{Board, Cell};
//! use leaper_paths::{Knight, shortest_paths};
//!
//! let paths = shortest_paths(&Board::STANDARD, &Knight, Cell::new(0, 0), Cell::new(3, 3));
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths.moves(), Some(2));
//! ```

mod graph;
mod paths;
mod piece;
mod reachability;
mod traits;

pub use graph::{Edge, ResultGraph};
pub use paths::{Path, PathSet, reconstruct};
pub use piece::{King, Knight, Leaper, LeaperMoves, Piece, UnknownPiece};
pub use reachability::{PredecessorRecord, Reachability};
pub use traits::MoveRule;

use leaper_core::{Board, Cell};

/// Every minimum-length move sequence from `start` to `target`.
///
/// Both cells must be on `board`. Returns an empty set when `target` cannot
/// be reached, and `{[start]}` when the two cells coincide.
pub fn shortest_paths<R: MoveRule + ?Sized>(
    board: &Board,
    rule: &R,
    start: Cell,
    target: Cell,
) -> PathSet {
    reconstruct(&Reachability::explore(board, rule, start, target))
}
