use anyhow::{bail, Context, Result};
use std::process::Command;

use crate::config::XtaskConfig;

pub fn run(config: &XtaskConfig) -> Result<()> {
    let mut ok = true;

    if which::which(&config.qemu.binary).is_err() {
        eprintln!("[FAIL] missing `{}` in PATH", config.qemu.binary);
        ok = false;
    } else {
        eprintln!("[OK] {}", config.qemu.binary);
    }

    if let Some(linker) = &config.target.linker {
        if which::which(linker).is_err() {
            eprintln!("[FAIL] missing linker `{linker}` in PATH");
            ok = false;
        } else {
            eprintln!("[OK] {linker}");
        }
    }

    let installed = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .context("Failed to run rustup")?;
    let triple = &config.target.triple;
    if String::from_utf8_lossy(&installed.stdout)
        .lines()
        .any(|t| t.trim() == triple)
    {
        eprintln!("[OK] rust target {triple}");
    } else {
        eprintln!("[FAIL] rust target {triple} not installed (rustup target add {triple})");
        ok = false;
    }

    match &config.qemu.sysroot {
        Some(sysroot) if sysroot.is_dir() => eprintln!("[OK] {}", sysroot.display()),
        Some(sysroot) => eprintln!(
            "[WARN] sysroot {} missing; only static binaries will run",
            sysroot.display()
        ),
        None => {}
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
