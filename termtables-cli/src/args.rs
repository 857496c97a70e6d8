use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use termtables::{Alignment, OutputMode};

/// Render CSV as a text table.
#[derive(Debug, Parser)]
#[command(name = "termtables", version)]
pub struct Args {
    /// CSV file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Title shown above the table
    #[arg(long, short)]
    pub title: Option<String>,

    /// Treat the first record as data instead of headers
    #[arg(long)]
    pub no_headers: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = Mode::Terminal)]
    pub mode: Mode,

    /// Draw box-drawing borders regardless of locale
    #[arg(long, conflicts_with = "ascii")]
    pub utf8: bool,

    /// Draw ASCII borders regardless of locale
    #[arg(long)]
    pub ascii: bool,

    /// Align a column, e.g. `2=right` (1-based, repeatable)
    #[arg(long = "align", short, value_name = "COL=ALIGN", value_parser = parse_column_alignment)]
    pub alignments: Vec<ColumnAlignment>,

    /// Omit the outermost top and bottom borders
    #[arg(long)]
    pub skip_border: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Terminal,
    Markdown,
    Html,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Terminal => OutputMode::Terminal,
            Mode::Markdown => OutputMode::Markdown,
            Mode::Html => OutputMode::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAlignment {
    /// 1-based column index.
    pub column: usize,
    pub alignment: Alignment,
}

fn parse_column_alignment(s: &str) -> Result<ColumnAlignment, String> {
    let (column, alignment) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COL=ALIGN, got {s:?}"))?;

    let column: usize = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column {column:?}"))?;
    if column == 0 {
        return Err("columns are numbered from 1".to_string());
    }

    let alignment = match alignment.trim().to_ascii_lowercase().as_str() {
        "left" | "l" => Alignment::Left,
        "center" | "centre" | "c" => Alignment::Center,
        "right" | "r" => Alignment::Right,
        other => return Err(format!("unknown alignment {other:?}")),
    };

    Ok(ColumnAlignment { column, alignment })
}
