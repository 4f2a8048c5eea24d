use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::buffer::MAX_N;
use crate::output::OutputStyle;
use crate::sink::Sink;

#[derive(Parser, Debug)]
#[command(name = "rv-sort", version)]
#[command(about = "Read a count and that many integers, exchange-sort them, print them")]
pub struct Cli {
    /// Read input from FILE instead of stdin.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Largest value count accepted.
    #[arg(long, env = "RV_SORT_CAPACITY", default_value_t = MAX_N)]
    pub capacity: usize,

    /// Print a space after every value, including the last one.
    #[arg(long)]
    pub trailing_space: bool,

    /// Write the result with a raw `write` ecall instead of std (riscv64 only).
    #[arg(long)]
    pub raw_io: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No diagnostics at all.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Where the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub capacity: usize,
    pub style: OutputStyle,
    pub sink: Sink,
}

impl Cli {
    /// Level requested by flags, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            return Some(LevelFilter::Off);
        }
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }

    pub fn into_config(self) -> Config {
        Config {
            source: self.input.map_or(Source::Stdin, Source::File),
            capacity: self.capacity,
            style: if self.trailing_space {
                OutputStyle::Trailing
            } else {
                OutputStyle::Spaced
            },
            sink: if self.raw_io { Sink::RawEcall } else { Sink::Std },
        }
    }
}
