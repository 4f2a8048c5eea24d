//! Run the cross-built rv-sort under qemu user-mode emulation.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::PathBuf;

use crate::config::XtaskConfig;
use crate::qemu::QemuUser;

pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub raw_io: bool,
    pub strace: bool,
    pub release: bool,
    pub args: Vec<String>,
}

impl RunOptions {
    /// Arguments handed to rv-sort inside the guest.
    fn guest_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        if self.raw_io {
            args.push("--raw-io".to_string());
        }
        args.extend(self.args.iter().cloned());
        args
    }
}

pub fn run(config: &XtaskConfig, opts: &RunOptions) -> Result<()> {
    let exe = super::build::run(config, opts.release)?;

    let mut cmd = QemuUser::new(&config.qemu.binary, &exe)
        .sysroot(config.qemu.sysroot.as_deref())
        .strace(opts.strace)
        .args(opts.guest_args())
        .build();

    if let Some(path) = &opts.input {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        cmd.stdin(file);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to launch {}", config.qemu.binary))?;
    if !status.success() {
        bail!("rv-sort exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_io_goes_first() {
        let opts = RunOptions {
            input: None,
            raw_io: true,
            strace: false,
            release: false,
            args: vec!["--trailing-space".to_string()],
        };
        assert_eq!(opts.guest_args(), ["--raw-io", "--trailing-space"]);
    }
}
