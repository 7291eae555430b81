use leaper_core::{Board, Cell};

/// Move generation for a piece: the cells reachable in one unit-cost move.
///
/// Implementations must only depend on `cell` and `board`, and must only
/// produce cells that are on `board`, each at most once. The search engine
/// trusts this contract and does not re-check its output.
pub trait MoveRule {
    /// Append the destinations of one move from `cell` into `buf`.
    /// The caller clears `buf` before calling.
    fn candidate_moves(&self, cell: Cell, board: &Board, buf: &mut Vec<Cell>);
}

impl<R: MoveRule + ?Sized> MoveRule for &R {
    #[inline]
    fn candidate_moves(&self, cell: Cell, board: &Board, buf: &mut Vec<Cell>) {
        (**self).candidate_moves(cell, board, buf)
    }
}
