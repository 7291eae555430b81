use std::collections::BTreeSet;

use leaper_core::Cell;

use crate::paths::PathSet;

/// A directed move between two cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: Cell,
    pub to: Cell,
}

/// Union of a [`PathSet`] as a graph: every cell on some path, and every
/// consecutive pair as a deduplicated edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultGraph {
    nodes: BTreeSet<Cell>,
    edges: BTreeSet<Edge>,
}

impl ResultGraph {
    pub fn from_paths(paths: &PathSet) -> Self {
        let mut graph = Self::default();
        for path in paths {
            graph.nodes.extend(path.cells().iter().copied());
            graph
                .edges
                .extend(path.steps().map(|(from, to)| Edge { from, to }));
        }
        graph
    }

    /// Cells in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Cell> + '_ {
        self.nodes.iter().copied()
    }

    /// Edges ordered by source, then destination.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains_edge(&self, from: Cell, to: Cell) -> bool {
        self.edges.contains(&Edge { from, to })
    }

    /// Cells one edge away from `cell`.
    pub fn successors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let lo = Edge {
            from: cell,
            to: Cell::new(i32::MIN, i32::MIN),
        };
        let hi = Edge {
            from: cell,
            to: Cell::new(i32::MAX, i32::MAX),
        };
        self.edges.range(lo..=hi).map(|e| e.to)
    }
}
