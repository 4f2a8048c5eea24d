use anyhow::Result;

use crate::cli::{Cli, Cmd};
use crate::config::XtaskConfig;

pub fn run(cli: Cli) -> Result<()> {
    let config = XtaskConfig::load()?;
    match cli.cmd {
        Cmd::Doctor => crate::tasks::doctor::run(&config),
        Cmd::Test { riscv } => crate::tasks::test::run(&config, riscv),
        Cmd::Build { release } => crate::tasks::build::run(&config, release).map(|_| ()),
        Cmd::Run {
            input,
            raw_io,
            strace,
            release,
            args,
        } => crate::tasks::run::run(
            &config,
            &crate::tasks::run::RunOptions {
                input,
                raw_io,
                strace,
                release,
                args,
            },
        ),
    }
}
