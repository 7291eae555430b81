//! Shortest-path enumeration over a [`Reachability`] DAG.

use std::collections::BTreeSet;
use std::fmt;

use leaper_core::Cell;

use crate::reachability::Reachability;

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A non-empty sequence of cells, start first, each step one legal move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Cell>);

impl Path {
    /// The cells of the path, start first.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells (moves + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for paths built by [`reconstruct`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves.
    #[inline]
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First cell, `None` only for an empty deserialized path.
    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    /// Last cell, `None` only for an empty deserialized path.
    pub fn target(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Path> for Vec<Cell> {
    fn from(p: Path) -> Self {
        p.0
    }
}

/// Formats as `(r, c) -> (r, c) -> ...`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PathSet
// ---------------------------------------------------------------------------

/// A deduplicated set of paths, iterated in lexicographic cell order.
///
/// An empty set means the target is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PathSet(BTreeSet<Path>);

impl PathSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> + '_ {
        self.0.iter()
    }

    /// Whether the set holds exactly this cell sequence.
    pub fn contains(&self, cells: &[Cell]) -> bool {
        self.0.iter().any(|p| p.cells() == cells)
    }

    /// Moves per path, shared by every path in the set. `None` when empty.
    pub fn moves(&self) -> Option<usize> {
        self.0.first().map(Path::moves)
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::collections::btree_set::Iter<'a, Path>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PathSet {
    type Item = Path;
    type IntoIter = std::collections::btree_set::IntoIter<Path>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Reconstruction
// ---------------------------------------------------------------------------

/// Enumerate every shortest path from `reach.start()` to `reach.target()`.
///
/// Walks predecessor lists backwards from the target with an explicit stack,
/// so call-stack depth does not grow with path length.
pub fn reconstruct(reach: &Reachability) -> PathSet {
    let start = reach.start();
    let target = reach.target();
    let mut paths = BTreeSet::new();
    let mut stack: Vec<(Cell, Vec<Cell>)> = vec![(target, vec![target])];

    while let Some((cell, partial)) = stack.pop() {
        if cell == start {
            let mut forward = partial.clone();
            forward.reverse();
            paths.insert(Path(forward));
        }
        // No record only happens for an unreached target.
        for &p in reach.predecessors(cell) {
            let mut next = Vec::with_capacity(partial.len() + 1);
            next.extend_from_slice(&partial);
            next.push(p);
            stack.push((p, next));
        }
    }

    log::debug!(
        "reconstructed {} shortest paths {start} -> {target}",
        paths.len()
    );
    PathSet(paths)
}
