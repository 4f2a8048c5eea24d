//! Cross-build of rv-sort for the riscv64 target.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::XtaskConfig;
use crate::util::repo::{repo_root, target_dir};

const PACKAGE: &str = "rv_sort";
const BIN: &str = "rv-sort";

/// The part of cargo's `--message-format=json` output we care about.
#[derive(Debug, Deserialize)]
struct Message {
    reason: String,
    #[serde(default)]
    target: Option<MessageTarget>,
    #[serde(default)]
    executable: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct MessageTarget {
    name: String,
}

/// Build rv-sort and return the path of the produced executable.
pub fn run(config: &XtaskConfig, release: bool) -> Result<PathBuf> {
    let root = repo_root()?;
    let triple = &config.target.triple;
    println!("Building {BIN} for {triple}...");

    let mut cmd = Command::new("cargo");
    cmd.current_dir(&root).args([
        "build",
        "-p",
        PACKAGE,
        "--bin",
        BIN,
        "--target",
        triple,
        "--message-format=json-render-diagnostics",
    ]);
    if release {
        cmd.arg("--release");
    }
    if let Some(linker) = &config.target.linker {
        cmd.env(config.target_env("LINKER"), linker);
    }

    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .context("Failed to run cargo build")?;
    if !output.status.success() {
        bail!("Cross build of {BIN} for {triple} failed");
    }

    let messages = String::from_utf8_lossy(&output.stdout);
    let exe = find_executable(&messages, BIN)
        .unwrap_or_else(|| target_dir(&root, triple, release).join(BIN));
    println!("✅ {}", exe.display());
    Ok(exe)
}

fn find_executable(messages: &str, bin: &str) -> Option<PathBuf> {
    messages
        .lines()
        .filter_map(|line| serde_json::from_str::<Message>(line).ok())
        .filter(|m| m.reason == "compiler-artifact")
        .filter(|m| m.target.as_ref().is_some_and(|t| t.name == bin))
        .find_map(|m| m.executable)
}
