//! Command-line surface and the run configuration derived from it.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use leaper_core::{Board, Cell};
use leaper_paths::Piece;

use crate::validate::{ValidationErrors, validate};

/// Take two cells on a board (default 8x8) and output every shortest move
/// sequence between them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Row of the starting cell. Must be 0 <= row < board width
    pub row: i32,
    /// Column of the starting cell. Must be 0 <= column < board length
    pub column: i32,
    /// Row of the target cell. Must be 0 <= row < board width
    pub target_row: i32,
    /// Column of the target cell. Must be 0 <= column < board length
    pub target_column: i32,

    /// Custom width (number of rows) of the board
    #[arg(short = 'w', long, default_value_t = Board::STANDARD.width())]
    pub board_width: i32,
    /// Custom length (number of columns) of the board
    #[arg(short = 'l', long, default_value_t = Board::STANDARD.length())]
    pub board_length: i32,

    /// Piece to move
    #[arg(short, long, value_enum, default_value_t = PieceArg::Knight)]
    pub piece: PieceArg,

    /// Directory for the Graphviz solution file
    #[arg(short, long, default_value = leaper_dot::DEFAULT_DIR)]
    pub output_dir: PathBuf,
    /// Do not write the Graphviz file
    #[arg(long)]
    pub no_dot: bool,
    /// Print the result as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
    /// Refuse to enumerate more than this many paths
    #[arg(long)]
    pub max_paths: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PieceArg {
    Knight,
    Camel,
    Zebra,
    King,
}

impl From<PieceArg> for Piece {
    fn from(p: PieceArg) -> Self {
        match p {
            PieceArg::Knight => Piece::Knight,
            PieceArg::Camel => Piece::Camel,
            PieceArg::Zebra => Piece::Zebra,
            PieceArg::King => Piece::King,
        }
    }
}

/// Everything a run needs, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub board: Board,
    pub start: Cell,
    pub target: Cell,
    pub piece: Piece,
    /// `None` when DOT output is disabled.
    pub dot_dir: Option<PathBuf>,
    pub json: bool,
    pub max_paths: Option<u64>,
}

impl Args {
    /// Default log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Validate the coordinates and build the run configuration.
    pub fn into_config(self) -> Result<RunConfig, ValidationErrors> {
        let (board, start, target) = validate(
            self.board_width,
            self.board_length,
            Cell::new(self.row, self.column),
            Cell::new(self.target_row, self.target_column),
        )?;
        Ok(RunConfig {
            board,
            start,
            target,
            piece: self.piece.into(),
            dot_dir: (!self.no_dot).then_some(self.output_dir),
            json: self.json,
            max_paths: self.max_paths,
        })
    }
}
