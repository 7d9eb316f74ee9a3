//! Command-line argument definitions for the `antidiag` binary.

use std::{path::PathBuf, str::FromStr};

use clap::Parser;

/// Print a matrix in anti-diagonal order, one value per line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML file containing `matrix = [[...], ...]`
    #[arg(conflicts_with = "demo")]
    pub input: Option<PathBuf>,

    /// Generate a ROWSxCOLS matrix of consecutive integers starting at 10
    #[arg(long, value_name = "ROWSxCOLS")]
    pub demo: Option<Dims>,

    /// Print the matrix grid before the anti-diagonal listing
    #[arg(long)]
    pub show_matrix: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Matrix dimensions parsed from `ROWSxCOLS`, e.g. `12x12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for Dims {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected ROWSxCOLS, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid dimension '{part}': {e}"))
        };
        Ok(Self {
            rows: parse(rows)?,
            cols: parse(cols)?,
        })
    }
}
