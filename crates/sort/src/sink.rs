//! Output path for the sorted line.

use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sink {
    /// Through `std::io`.
    #[default]
    Std,
    /// Straight to fd 1 with the `write` ecall.
    RawEcall,
}

/// Write `line` to `out` (for [`Sink::Std`]) or to fd 1 (for [`Sink::RawEcall`]).
pub fn emit<W: Write>(sink: Sink, line: &str, out: &mut W) -> Result<()> {
    match sink {
        Sink::Std => {
            out.write_all(line.as_bytes())
                .context("Failed to write output")?;
            out.flush().context("Failed to flush output")
        }
        Sink::RawEcall => raw_write(line),
    }
}

#[cfg(target_arch = "riscv64")]
fn raw_write(line: &str) -> Result<()> {
    log::debug!("writing {} bytes with the write ecall", line.len());
    rv_syscall::write_all(rv_syscall::Fd::STDOUT.0, line.as_bytes())
        .context("write ecall to stdout failed")
}

#[cfg(not(target_arch = "riscv64"))]
fn raw_write(_line: &str) -> Result<()> {
    anyhow::bail!(
        "--raw-io needs a riscv64 build, this one targets {}",
        std::env::consts::ARCH
    )
}
