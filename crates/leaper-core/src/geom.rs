//! Geometry primitives: [`Cell`] and [`Board`].
//!
//! A board is a half-open `width × length` rectangle anchored at the origin.
//! Rows run along the width, columns along the length.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::BoardError;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A `(row, col)` board coordinate.
///
/// Coordinates are signed so that move offsets can be applied before the
/// result is bounds-checked against a [`Board`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// The corner cell (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Like [`Cell::shift`], but `None` if either coordinate overflows.
    #[inline]
    pub const fn checked_shift(self, drow: i32, dcol: i32) -> Option<Self> {
        match (self.row.checked_add(drow), self.col.checked_add(dcol)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Whether the cell lies on `board`.
    #[inline]
    pub fn on(self, board: &Board) -> bool {
        board.contains(self)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A `width × length` grid. Cell `(r, c)` is on the board iff
/// `0 <= r < width` and `0 <= c < length`.
///
/// A board never has a negative dimension; [`Board::new`] rejects those.
/// Zero-sized boards are allowed and contain no cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    width: i32,
    length: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Board {
    /// The 8×8 chessboard.
    pub const STANDARD: Self = Self {
        width: 8,
        length: 8,
    };

    /// Create a board, failing if either dimension is negative.
    pub fn new(width: i32, length: i32) -> Result<Self, BoardError> {
        if width < 0 || length < 0 {
            return Err(BoardError::NegativeDimension { width, length });
        }
        Ok(Self { width, length })
    }

    /// Number of rows.
    #[inline]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Number of columns.
    #[inline]
    pub const fn length(self) -> i32 {
        self.length
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.length as usize
    }

    /// Whether the board has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.length == 0
    }

    /// Whether `cell` is on the board.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.width && cell.col >= 0 && cell.col < self.length
    }

    /// Check a row coordinate, naming it `name` in the error.
    pub fn check_row(self, name: &'static str, row: i32) -> Result<(), BoardError> {
        check_axis(name, row, self.width)
    }

    /// Check a column coordinate, naming it `name` in the error.
    pub fn check_col(self, name: &'static str, col: i32) -> Result<(), BoardError> {
        check_axis(name, col, self.length)
    }

    /// Row-major iterator over every cell of the board.
    #[inline]
    pub fn iter(self) -> BoardIter {
        BoardIter {
            board: self,
            cur: Cell::ORIGIN,
        }
    }
}

fn check_axis(name: &'static str, value: i32, bound: i32) -> Result<(), BoardError> {
    if value < 0 || value >= bound {
        return Err(BoardError::CellOutOfBounds {
            name,
            value,
            max: bound - 1,
        });
    }
    Ok(())
}

impl IntoIterator for Board {
    type Item = Cell;
    type IntoIter = BoardIter;
    #[inline]
    fn into_iter(self) -> BoardIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.length)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Dims {
            width: i32,
            length: i32,
        }
        let dims = Dims::deserialize(deserializer)?;
        Board::new(dims.width, dims.length).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// BoardIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardIter {
    board: Board,
    cur: Cell,
}

impl Iterator for BoardIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.row >= self.board.width || self.board.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.board.length {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.board.is_empty() || self.cur.row >= self.board.width {
            return (0, Some(0));
        }
        let l = self.board.length as usize;
        let remaining_in_row = (self.board.length - self.cur.col) as usize;
        let remaining_rows = (self.board.width - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * l;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoardIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a.shift(-2, 1), Cell::new(-1, 3));
    }

    #[test]
    fn checked_shift_stops_at_overflow() {
        let edge = Cell::new(i32::MAX - 1, 0);
        assert_eq!(edge.checked_shift(1, 2), Some(Cell::new(i32::MAX, 2)));
        assert_eq!(edge.checked_shift(2, 0), None);
        assert_eq!(Cell::new(0, i32::MIN).checked_shift(0, -1), None);
    }

    #[test]
    fn cell_on_board() {
        let b = Board::new(2, 2).unwrap();
        assert!(Cell::new(1, 1).on(&b));
        assert!(!Cell::new(2, 0).on(&b));
    }

    #[test]
    fn cells_order_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]);
    }

    #[test]
    fn board_contains() {
        let b = Board::new(3, 2).unwrap();
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(2, 1)));
        assert!(!b.contains(Cell::new(3, 0)));
        assert!(!b.contains(Cell::new(0, 2)));
        assert!(!b.contains(Cell::new(-1, 0)));
        assert!(!b.contains(Cell::new(0, -1)));
    }

    #[test]
    fn negative_dimensions_rejected() {
        assert_eq!(
            Board::new(-1, 8),
            Err(BoardError::NegativeDimension {
                width: -1,
                length: 8
            })
        );
        assert!(Board::new(8, -3).is_err());
    }

    #[test]
    fn zero_sized_board_is_empty() {
        let b = Board::new(0, 5).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
        assert!(!b.contains(Cell::ORIGIN));
    }

    #[test]
    fn board_iter_row_major() {
        let b = Board::new(2, 3).unwrap();
        let cells: Vec<_> = b.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[5], Cell::new(1, 2));
    }

    #[test]
    fn board_iter_exact_size() {
        let mut it = Board::STANDARD.iter();
        assert_eq!(it.len(), 64);
        it.next();
        it.next();
        assert_eq!(it.len(), 62);
        let unique: HashSet<_> = it.collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn check_axes() {
        let b = Board::new(4, 6).unwrap();
        assert!(b.check_row("Row", 3).is_ok());
        assert!(b.check_col("Column", 5).is_ok());
        assert_eq!(
            b.check_row("Row", 4),
            Err(BoardError::CellOutOfBounds {
                name: "Row",
                value: 4,
                max: 3
            })
        );
        assert!(b.check_col("Target_Column", -1).is_err());
    }

    #[test]
    fn board_display() {
        assert_eq!(Board::STANDARD.to_string(), "8x8");
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
    }
}
