use std::collections::VecDeque;

use indexmap::IndexMap;
use indexmap::map::Entry;
use leaper_core::{Board, Cell};

use crate::traits::MoveRule;

/// BFS bookkeeping for one visited cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredecessorRecord {
    level: u32,
    predecessors: Vec<Cell>,
}

impl PredecessorRecord {
    /// BFS level: the start cell is level 1, its neighbours level 2, etc.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Every cell at `level - 1` with a move to this one, in discovery order.
    #[inline]
    pub fn predecessors(&self) -> &[Cell] {
        &self.predecessors
    }
}

/// Levelled breadth-first reachability from a start cell.
///
/// Unlike a plain BFS parent map, each cell remembers *all* cells that reach
/// it at its minimal level, so the result is a DAG holding every shortest
/// path. Records are kept in discovery order, which is also level order.
#[derive(Debug, Clone)]
pub struct Reachability {
    start: Cell,
    target: Cell,
    records: IndexMap<Cell, PredecessorRecord>,
}

impl Reachability {
    /// Explore `board` from `start` with `rule` until `target` is dequeued or
    /// the frontier runs dry.
    ///
    /// Both cells must be on the board. An unreachable target is not an
    /// error; it simply has no record afterwards.
    pub fn explore<R: MoveRule + ?Sized>(
        board: &Board,
        rule: &R,
        start: Cell,
        target: Cell,
    ) -> Self {
        debug_assert!(start.on(board), "start {start} is off the board");
        debug_assert!(target.on(board), "target {target} is off the board");

        let mut records = IndexMap::new();
        records.insert(
            start,
            PredecessorRecord {
                level: 1,
                predecessors: Vec::new(),
            },
        );
        let mut queue: VecDeque<(Cell, u32)> = VecDeque::new();
        queue.push_back((start, 1));
        let mut nbuf = Vec::with_capacity(8);

        while let Some((current, level)) = queue.pop_front() {
            // Every cell of the previous level has been expanded by now, so
            // the target's predecessor list is already complete.
            if current == target {
                break;
            }
            log::trace!("expanding {current} at level {level}");

            nbuf.clear();
            rule.candidate_moves(current, board, &mut nbuf);

            let next_level = level + 1;
            for &next in nbuf.iter() {
                match records.entry(next) {
                    Entry::Vacant(e) => {
                        e.insert(PredecessorRecord {
                            level: next_level,
                            predecessors: vec![current],
                        });
                        queue.push_back((next, next_level));
                    }
                    Entry::Occupied(mut e) => {
                        // Tied at the minimal level: another shortest route.
                        if e.get().level == next_level {
                            e.get_mut().predecessors.push(current);
                        }
                    }
                }
            }
        }

        let reach = Self {
            start,
            target,
            records,
        };
        log::debug!(
            "explored {} cells from {start}; target {target} at level {:?}",
            reach.len(),
            reach.level(target)
        );
        reach
    }

    /// The cell the search started from.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The cell the search was looking for.
    #[inline]
    pub fn target(&self) -> Cell {
        self.target
    }

    /// Whether the target was reached.
    #[inline]
    pub fn target_reached(&self) -> bool {
        self.records.contains_key(&self.target)
    }

    /// Record for `cell`, if it was visited.
    #[inline]
    pub fn record(&self, cell: Cell) -> Option<&PredecessorRecord> {
        self.records.get(&cell)
    }

    /// BFS level of `cell` (start = 1), if it was visited.
    #[inline]
    pub fn level(&self, cell: Cell) -> Option<u32> {
        self.record(cell).map(PredecessorRecord::level)
    }

    /// Number of moves from the start to `cell`, if it was visited.
    #[inline]
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.level(cell).map(|l| l - 1)
    }

    /// Shortest-path predecessors of `cell`; empty for the start and for
    /// unvisited cells.
    pub fn predecessors(&self, cell: Cell) -> &[Cell] {
        match self.record(cell) {
            Some(r) => r.predecessors(),
            None => &[],
        }
    }

    /// Number of visited cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: the start cell is visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Visited cells and their records, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &PredecessorRecord)> + '_ {
        self.records.iter().map(|(&c, r)| (c, r))
    }

    /// Exact number of shortest paths from the start to `cell`, without
    /// enumerating them. Saturates at `u128::MAX`; `0` if `cell` was not
    /// visited.
    ///
    /// Exact for the target and every cell at or below its level. Cells one
    /// level deeper were only partially expanded into and may be undercounted.
    pub fn count_paths(&self, cell: Cell) -> u128 {
        let Some(end) = self.records.get_index_of(&cell) else {
            return 0;
        };
        // Predecessors are always discovered before their successors, so a
        // single pass in discovery order sees every count it needs.
        let mut counts: Vec<u128> = Vec::with_capacity(end + 1);
        for (i, (_, record)) in self.records.iter().enumerate().take(end + 1) {
            let n = if i == 0 {
                1
            } else {
                record
                    .predecessors
                    .iter()
                    .filter_map(|p| self.records.get_index_of(p))
                    .fold(0u128, |acc, pi| acc.saturating_add(counts[pi]))
            };
            counts.push(n);
        }
        counts[end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{King, Knight};

    #[test]
    fn start_is_level_one() {
        let r = Reachability::explore(&Board::STANDARD, &Knight, Cell::new(0, 0), Cell::new(7, 7));
        assert_eq!(r.level(Cell::new(0, 0)), Some(1));
        assert!(r.predecessors(Cell::new(0, 0)).is_empty());
        assert_eq!(r.level(Cell::new(1, 2)), Some(2));
        assert_eq!(r.distance(Cell::new(7, 7)), Some(6));
    }

    #[test]
    fn start_equals_target_stops_immediately() {
        let c = Cell::new(4, 4);
        let r = Reachability::explore(&Board::STANDARD, &Knight, c, c);
        assert_eq!(r.len(), 1);
        assert!(r.target_reached());
        assert_eq!(r.count_paths(c), 1);
    }

    #[test]
    fn explores_near_the_i32_edge() {
        let board = Board::new(i32::MAX, 3).unwrap();
        let start = Cell::new(i32::MAX - 1, 0);
        let r = Reachability::explore(&board, &Knight, start, Cell::new(i32::MAX - 2, 2));
        assert_eq!(r.distance(Cell::new(i32::MAX - 2, 2)), Some(1));
        let r = Reachability::explore(&board, &King, start, Cell::new(i32::MAX - 1, 2));
        assert_eq!(r.distance(Cell::new(i32::MAX - 1, 2)), Some(2));
        assert_eq!(r.count_paths(Cell::new(i32::MAX - 1, 2)), 2);
    }

    #[test]
    fn collects_every_tied_predecessor() {
        let target = Cell::new(3, 3);
        let r = Reachability::explore(&Board::STANDARD, &Knight, Cell::new(0, 0), target);
        let mut preds = r.predecessors(target).to_vec();
        preds.sort();
        assert_eq!(preds, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn predecessors_are_exactly_one_level_up() {
        let r = Reachability::explore(&Board::STANDARD, &Knight, Cell::new(0, 0), Cell::new(7, 7));
        for (cell, rec) in r.iter() {
            for &p in rec.predecessors() {
                assert_eq!(r.level(p), Some(rec.level() - 1), "{p} -> {cell}");
            }
        }
    }

    #[test]
    fn discovery_order_is_level_order() {
        let r = Reachability::explore(&Board::STANDARD, &King, Cell::new(0, 0), Cell::new(5, 6));
        let levels: Vec<u32> = r.iter().map(|(_, rec)| rec.level()).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn never_expands_past_target_level() {
        let target = Cell::new(1, 2);
        let r = Reachability::explore(&Board::STANDARD, &Knight, Cell::new(0, 0), target);
        let target_level = r.level(target).unwrap();
        assert!(r.iter().all(|(_, rec)| rec.level() <= target_level + 1));
    }

    #[test]
    fn unreachable_centre() {
        let board = Board::new(3, 3).unwrap();
        let r = Reachability::explore(&board, &Knight, Cell::new(0, 0), Cell::new(1, 1));
        assert!(!r.target_reached());
        assert_eq!(r.level(Cell::new(1, 1)), None);
        assert_eq!(r.count_paths(Cell::new(1, 1)), 0);
        // The whole rim was explored before giving up.
        assert_eq!(r.len(), 8);
    }

    #[test]
    fn counts_match_known_values() {
        let from = Cell::new(0, 0);
        for (target, expected) in [((3, 3), 2), ((2, 2), 16), ((7, 7), 108), ((1, 1), 10)] {
            let target = Cell::from(target);
            let r = Reachability::explore(&Board::STANDARD, &Knight, from, target);
            assert_eq!(r.count_paths(target), expected, "to {target}");
        }
    }
}
