use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use folio_core::{Layout, LoadStrategy};

/// File read when no path is given
pub const DEFAULT_PATH: &str = "text.txt";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Text file to load
    #[arg(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// How the file is read
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Lines)]
    pub strategy: StrategyArg,

    /// Print the loaded text to stdout instead of opening the viewer
    #[arg(short, long)]
    pub print: bool,

    /// Layout shown on startup
    #[arg(short, long, value_enum, default_value_t = AlignArg::Gallery)]
    pub align: AlignArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Whole file verbatim; empty files are rejected
    Raw,
    /// Line by line, every line ending in a single newline
    Lines,
}

impl From<StrategyArg> for LoadStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Raw => LoadStrategy::Raw,
            StrategyArg::Lines => LoadStrategy::NormalizedLines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    Gallery,
    Left,
    Center,
    Right,
    Split,
}

impl From<AlignArg> for Layout {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Gallery => Layout::Gallery,
            AlignArg::Left => Layout::Left,
            AlignArg::Center => Layout::Center,
            AlignArg::Right => Layout::Right,
            AlignArg::Split => Layout::SideBySide,
        }
    }
}
