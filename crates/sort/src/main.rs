use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

use rv_sort::config::{Cli, Source};
use rv_sort::{logger, sink, sort_text};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level()).context("Failed to install logger")?;
    let config = cli.into_config();

    let text = match &config.source {
        Source::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
        Source::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };

    let line = sort_text(&text, config.capacity, config.style)?;
    sink::emit(config.sink, &line, &mut std::io::stdout().lock())
}
