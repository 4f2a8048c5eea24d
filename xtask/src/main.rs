use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod config;
mod qemu;
mod tasks;
mod util;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    crate::app::run(cli)
}
