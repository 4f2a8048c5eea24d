use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Workspace developer tasks: host tests, riscv64 cross builds, qemu-riscv64 runs")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Check that the cross toolchain and qemu-riscv64 are available.
    Doctor,

    /// Run the host test suites.
    Test {
        /// Also run every crate's tests for riscv64 under qemu-riscv64.
        #[arg(long)]
        riscv: bool,
    },

    /// Cross-build rv-sort for the riscv64 target.
    Build {
        #[arg(long)]
        release: bool,
    },

    /// Cross-build rv-sort and run it under qemu-riscv64.
    Run {
        /// File piped to the program's stdin (default: inherit the terminal).
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Let rv-sort print through its raw `write` ecall.
        #[arg(long)]
        raw_io: bool,

        /// Have qemu log every guest syscall (shows the ecalls rv-sort makes).
        #[arg(long)]
        strace: bool,

        #[arg(long)]
        release: bool,

        /// Extra arguments passed through to rv-sort.
        #[arg(last = true)]
        args: Vec<String>,
    },
}
