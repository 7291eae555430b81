//! Graphviz DOT backend for leaper.
//!
//! Draws the board as a pinned checkerboard of square nodes and overlays each
//! shortest path as a chain of edges in its own colour. Layout, colouring and
//! file emission live here; the search crates know nothing about DOT.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use leaper_core::{Board, Cell, Color};
use leaper_paths::PathSet;

/// Directory the CLI writes into unless told otherwise.
pub const DEFAULT_DIR: &str = "graphviz_output";
/// File name of the rendered solution.
pub const DEFAULT_FILE_NAME: &str = "checkboard_solution.dot";

const SATURATION: f64 = 0.7;
const VALUE: f64 = 0.9;

/// `n` colours with evenly spaced hues.
pub fn distinct_colors(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| Color::from_hsv(i as f64 / n as f64, SATURATION, VALUE))
        .collect()
}

/// `(fill, font)` colours of a board square; `(0, 0)` is dark.
pub fn square_colors(cell: Cell) -> (&'static str, &'static str) {
    if (cell.row + cell.col) % 2 == 0 {
        ("black", "white")
    } else {
        ("white", "black")
    }
}

fn node_id(cell: Cell) -> String {
    format!("\"{},{}\"", cell.row, cell.col)
}

/// A board plus its solution, formatted as a DOT digraph via [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct DotGraph<'a> {
    board: Board,
    paths: &'a PathSet,
}

impl<'a> DotGraph<'a> {
    pub fn new(board: Board, paths: &'a PathSet) -> Self {
        Self { board, paths }
    }
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// Solution_Checkboard")?;
        writeln!(f, "digraph {{")?;
        writeln!(f, "\tlayout=neato")?;
        writeln!(f, "\tnode [height=0.6 shape=square style=filled width=0.6]")?;

        for cell in self.board.iter() {
            let (fill, font) = square_colors(cell);
            writeln!(
                f,
                "\t{} [fillcolor={fill} fontcolor={font} pos=\"{},{}!\"]",
                node_id(cell),
                cell.col,
                -cell.row
            )?;
        }

        let colors = distinct_colors(self.paths.len());
        for (path, color) in self.paths.iter().zip(colors) {
            for (from, to) in path.steps() {
                writeln!(
                    f,
                    "\t{} -> {} [color=\"{color}\"]",
                    node_id(from),
                    node_id(to)
                )?;
            }
        }

        writeln!(f, "}}")
    }
}

/// Write `dot` to `dir/file_name`, creating `dir` if needed. Returns the
/// path written.
pub fn write_dot(dir: &Path, file_name: &str, dot: &DotGraph<'_>) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, dot.to_string())?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaper_paths::{Knight, shortest_paths};

    #[test]
    fn palette_is_distinct() {
        let colors = distinct_colors(6);
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(colors[0].to_string(), "#e54444");
        assert!(distinct_colors(0).is_empty());
    }

    #[test]
    fn checkerboard() {
        assert_eq!(square_colors(Cell::new(0, 0)), ("black", "white"));
        assert_eq!(square_colors(Cell::new(0, 1)), ("white", "black"));
        assert_eq!(square_colors(Cell::new(3, 5)), ("black", "white"));
    }

    #[test]
    fn renders_nodes_and_coloured_edges() {
        let board = Board::new(4, 4).unwrap();
        let paths = shortest_paths(&board, &Knight, Cell::new(0, 0), Cell::new(3, 3));
        let dot = DotGraph::new(board, &paths).to_string();

        assert!(dot.starts_with("// Solution_Checkboard\ndigraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches("fillcolor=").count(), 16);
        assert!(dot.contains("\"2,3\" [fillcolor=white fontcolor=black pos=\"3,-2!\"]"));
        assert_eq!(dot.matches(" -> ").count(), 2 * paths.moves().unwrap());
        assert!(dot.contains("\"0,0\" -> \"1,2\" [color=\"#e54444\"]"));
    }

    #[test]
    fn no_paths_means_no_edges() {
        let board = Board::new(3, 3).unwrap();
        let paths = shortest_paths(&board, &Knight, Cell::new(0, 0), Cell::new(1, 1));
        let dot = DotGraph::new(board, &paths).to_string();
        assert!(!dot.contains("->"));
        assert_eq!(dot.matches("fillcolor=").count(), 9);
    }

    #[test]
    fn writes_into_new_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join(DEFAULT_DIR);
        let paths = PathSet::default();
        let written = write_dot(&dir, DEFAULT_FILE_NAME, &DotGraph::new(Board::STANDARD, &paths)).unwrap();
        assert_eq!(written, dir.join(DEFAULT_FILE_NAME));
        let text = fs::read_to_string(written).unwrap();
        assert!(text.contains("\"7,7\""));
    }
}
