//! Bounds checks applied before any search runs.

use std::fmt;

use leaper_core::{Board, BoardError, Cell};

/// Every failed check of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<BoardError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at least one provided parameter is not valid")?;
        for e in &self.0 {
            write!(f, "\n  - {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Build the board and check both cells against it.
///
/// A negative dimension is reported on its own. Otherwise all four
/// coordinates are checked and every failure is reported.
pub fn validate(
    width: i32,
    length: i32,
    start: Cell,
    target: Cell,
) -> Result<(Board, Cell, Cell), ValidationErrors> {
    let board = Board::new(width, length).map_err(|e| ValidationErrors(vec![e]))?;

    let errors: Vec<BoardError> = [
        board.check_row("Row", start.row),
        board.check_col("Column", start.col),
        board.check_row("Target_Row", target.row),
        board.check_col("Target_Column", target.col),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if !errors.is_empty() {
        for e in &errors {
            tracing::warn!("{e}");
        }
        return Err(ValidationErrors(errors));
    }
    Ok((board, start, target))
}
