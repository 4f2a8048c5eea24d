//! Configuration file support for xtask
//!
//! Reads xtask.toml from the repository root to pick the cross target, the
//! qemu user-mode binary and the guest sysroot.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "xtask.toml";

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct XtaskConfig {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub qemu: QemuConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    #[serde(default = "default_triple")]
    pub triple: String,

    /// Linker for the cross target; cargo's default is used when unset.
    #[serde(default)]
    pub linker: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            triple: default_triple(),
            linker: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct QemuConfig {
    #[serde(default = "default_qemu_binary")]
    pub binary: String,

    /// Guest sysroot handed to qemu as `-L` for dynamically linked binaries.
    #[serde(default = "default_sysroot")]
    pub sysroot: Option<PathBuf>,
}

impl Default for QemuConfig {
    fn default() -> Self {
        QemuConfig {
            binary: default_qemu_binary(),
            sysroot: default_sysroot(),
        }
    }
}

fn default_triple() -> String {
    "riscv64gc-unknown-linux-gnu".to_string()
}
fn default_qemu_binary() -> String {
    "qemu-riscv64".to_string()
}
#[allow(clippy::unnecessary_wraps)]
fn default_sysroot() -> Option<PathBuf> {
    Some(PathBuf::from("/usr/riscv64-linux-gnu"))
}

impl XtaskConfig {
    /// Load config from xtask.toml (or use defaults if file doesn't exist)
    pub fn load() -> Result<Self> {
        let root = crate::util::repo::repo_root()?;
        Self::load_from(&root.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(XtaskConfig::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `CARGO_TARGET_<TRIPLE>_<SUFFIX>` for the configured triple.
    pub fn target_env(&self, suffix: &str) -> String {
        format!(
            "CARGO_TARGET_{}_{}",
            self.target.triple.to_uppercase().replace('-', "_"),
            suffix
        )
    }
}
