use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn repo_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask is expected at <repo>/xtask")
}

/// Where cargo puts artifacts for `triple`.
pub fn target_dir(root: &Path, triple: &str, release: bool) -> PathBuf {
    let profile = if release { "release" } else { "debug" };
    root.join("target").join(triple).join(profile)
}
