//! Built-in move rules: leapers (knight, camel, zebra, ...) and the king.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use leaper_core::{Board, Cell};

use crate::traits::MoveRule;

// ---------------------------------------------------------------------------
// Leaper
// ---------------------------------------------------------------------------

/// An `(a, b)`-leaper: jumps `a` cells along one axis and `b` along the other,
/// in any of the (up to) eight sign/axis combinations.
///
/// The pair is stored normalized (`0 <= a <= b`, `b > 0`), so `(2, 1)` and
/// `(-1, 2)` both describe the knight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Leaper {
    a: i32,
    b: i32,
}

impl Leaper {
    pub const WAZIR: Self = Self { a: 0, b: 1 };
    pub const FERZ: Self = Self { a: 1, b: 1 };
    pub const KNIGHT: Self = Self { a: 1, b: 2 };
    pub const CAMEL: Self = Self { a: 1, b: 3 };
    pub const ZEBRA: Self = Self { a: 2, b: 3 };

    /// Create a leaper from any jump pair. Returns `None` for `(0, 0)`,
    /// which does not move, and for `i32::MIN` components.
    pub fn new(a: i32, b: i32) -> Option<Self> {
        let (a, b) = (a.checked_abs()?, b.checked_abs()?);
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        if b == 0 {
            return None;
        }
        Some(Self { a, b })
    }

    /// The normalized jump pair.
    #[inline]
    pub const fn jump(self) -> (i32, i32) {
        (self.a, self.b)
    }

    /// Lazily enumerate the on-board destinations of one leap from `from`.
    pub fn moves(self, from: Cell, board: Board) -> LeaperMoves {
        let (a, b) = (self.a, self.b);
        let all = [
            (b, a),
            (b, -a),
            (-b, a),
            (-b, -a),
            (a, b),
            (a, -b),
            (-a, b),
            (-a, -b),
        ];
        // Symmetric leapers (a == 0 or a == b) repeat offsets.
        let mut offsets = [(0, 0); 8];
        let mut len = 0;
        for off in all {
            if !offsets[..len].contains(&off) {
                offsets[len] = off;
                len += 1;
            }
        }
        LeaperMoves {
            from,
            board,
            offsets,
            len,
            next: 0,
        }
    }
}

impl MoveRule for Leaper {
    fn candidate_moves(&self, cell: Cell, board: &Board, buf: &mut Vec<Cell>) {
        buf.extend(self.moves(cell, *board));
    }
}

/// Iterator over the destinations of a single leap. See [`Leaper::moves`].
#[derive(Clone, Debug)]
pub struct LeaperMoves {
    from: Cell,
    board: Board,
    offsets: [(i32, i32); 8],
    len: usize,
    next: usize,
}

impl Iterator for LeaperMoves {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while self.next < self.len {
            let (dr, dc) = self.offsets[self.next];
            self.next += 1;
            match self.from.checked_shift(dr, dc) {
                Some(to) if self.board.contains(to) => return Some(to),
                _ => {}
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len - self.next))
    }
}

impl FusedIterator for LeaperMoves {}

// ---------------------------------------------------------------------------
// Knight / King
// ---------------------------------------------------------------------------

/// The chess knight: a `(1, 2)`-leaper.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Knight;

impl Knight {
    /// Lazily enumerate the on-board knight moves from `from`.
    #[inline]
    pub fn moves(self, from: Cell, board: Board) -> LeaperMoves {
        Leaper::KNIGHT.moves(from, board)
    }
}

impl MoveRule for Knight {
    fn candidate_moves(&self, cell: Cell, board: &Board, buf: &mut Vec<Cell>) {
        buf.extend(self.moves(cell, *board));
    }
}

/// The chess king: one step in any of the eight directions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct King;

impl MoveRule for King {
    fn candidate_moves(&self, cell: Cell, board: &Board, buf: &mut Vec<Cell>) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(to) = cell.checked_shift(dr, dc).filter(|&to| board.contains(to)) {
                    buf.push(to);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// The pieces offered to front ends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Piece {
    #[default]
    Knight,
    Camel,
    Zebra,
    King,
}

impl Piece {
    pub const ALL: [Piece; 4] = [Piece::Knight, Piece::Camel, Piece::Zebra, Piece::King];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Knight => "knight",
            Piece::Camel => "camel",
            Piece::Zebra => "zebra",
            Piece::King => "king",
        }
    }
}

impl MoveRule for Piece {
    fn candidate_moves(&self, cell: Cell, board: &Board, buf: &mut Vec<Cell>) {
        match self {
            Piece::Knight => Knight.candidate_moves(cell, board, buf),
            Piece::Camel => Leaper::CAMEL.candidate_moves(cell, board, buf),
            Piece::Zebra => Leaper::ZEBRA.candidate_moves(cell, board, buf),
            Piece::King => King.candidate_moves(cell, board, buf),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown piece name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPiece(pub String);

impl fmt::Display for UnknownPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown piece {:?}", self.0)
    }
}

impl std::error::Error for UnknownPiece {}

impl FromStr for Piece {
    type Err = UnknownPiece;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Piece::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPiece(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect<R: MoveRule>(rule: &R, cell: Cell, board: Board) -> Vec<Cell> {
        let mut buf = Vec::new();
        rule.candidate_moves(cell, &board, &mut buf);
        buf
    }

    #[test]
    fn knight_in_corner() {
        let mut moves = collect(&Knight, Cell::new(0, 0), Board::STANDARD);
        moves.sort();
        assert_eq!(moves, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn knight_in_centre_has_eight_unique_moves() {
        let moves = collect(&Knight, Cell::new(4, 4), Board::STANDARD);
        assert_eq!(moves.len(), 8);
        let unique: HashSet<_> = moves.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        for m in moves {
            let d = m - Cell::new(4, 4);
            let (r, c) = (d.row.abs(), d.col.abs());
            assert!((r, c) == (1, 2) || (r, c) == (2, 1));
        }
    }

    #[test]
    fn knight_iterator_is_lazy_and_fused() {
        let mut it = Knight.moves(Cell::new(0, 0), Board::STANDARD);
        assert!(it.next().is_some());
        assert!(it.next().is_some());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn knight_on_tiny_board_has_no_moves() {
        assert!(collect(&Knight, Cell::ORIGIN, Board::new(1, 1).unwrap()).is_empty());
        assert!(collect(&Knight, Cell::ORIGIN, Board::new(2, 2).unwrap()).is_empty());
    }

    #[test]
    fn leaper_normalizes() {
        assert_eq!(Leaper::new(2, -1), Some(Leaper::KNIGHT));
        assert_eq!(Leaper::new(-3, 1), Some(Leaper::CAMEL));
        assert_eq!(Leaper::new(0, 0), None);
        assert_eq!(Leaper::new(i32::MIN, 1), None);
        assert_eq!(Leaper::ZEBRA.jump(), (2, 3));
    }

    #[test]
    fn symmetric_leapers_do_not_repeat() {
        let wazir = collect(&Leaper::WAZIR, Cell::new(3, 3), Board::STANDARD);
        assert_eq!(wazir.len(), 4);
        let ferz = collect(&Leaper::FERZ, Cell::new(3, 3), Board::STANDARD);
        assert_eq!(ferz.len(), 4);
        let unique: HashSet<_> = ferz.iter().copied().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn king_moves() {
        assert_eq!(collect(&King, Cell::new(3, 3), Board::STANDARD).len(), 8);
        assert_eq!(collect(&King, Cell::new(0, 0), Board::STANDARD).len(), 3);
        assert_eq!(collect(&King, Cell::new(0, 3), Board::STANDARD).len(), 5);
    }

    #[test]
    fn moves_at_the_i32_edge_skip_overflowing_offsets() {
        let board = Board::new(i32::MAX, 3).unwrap();
        let corner = Cell::new(i32::MAX - 1, 0);
        let mut knight = collect(&Knight, corner, board);
        knight.sort();
        assert_eq!(knight, vec![Cell::new(i32::MAX - 3, 1), Cell::new(i32::MAX - 2, 2)]);
        let king = collect(&King, corner, board);
        assert_eq!(king.len(), 3);
        let far = Leaper::new(1, i32::MAX).unwrap();
        assert!(collect(&far, corner, board).is_empty());
    }

    #[test]
    fn piece_dispatch_matches_rule() {
        let from = Cell::new(2, 5);
        assert_eq!(
            collect(&Piece::Knight, from, Board::STANDARD),
            collect(&Knight, from, Board::STANDARD)
        );
        assert_eq!(
            collect(&Piece::Zebra, from, Board::STANDARD),
            collect(&Leaper::ZEBRA, from, Board::STANDARD)
        );
    }

    #[test]
    fn piece_names_round_trip() {
        for p in Piece::ALL {
            assert_eq!(p.to_string().parse::<Piece>(), Ok(p));
        }
        assert_eq!("KNIGHT".parse::<Piece>(), Ok(Piece::Knight));
        assert!("bishop".parse::<Piece>().is_err());
    }
}
