//! qemu user-mode command builder

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs one guest binary under `qemu-<arch>` user-mode emulation.
#[derive(Clone, Debug)]
pub struct QemuUser {
    binary: String,
    sysroot: Option<PathBuf>,
    program: PathBuf,
    args: Vec<OsString>,
    strace: bool,
}

impl QemuUser {
    pub fn new(binary: &str, program: &Path) -> Self {
        Self {
            binary: binary.to_string(),
            sysroot: None,
            program: program.to_path_buf(),
            args: Vec::new(),
            strace: false,
        }
    }

    /// Guest library prefix (`-L`); ignored when the directory is missing.
    pub fn sysroot(mut self, path: Option<&Path>) -> Self {
        self.sysroot = path.filter(|p| p.is_dir()).map(Path::to_path_buf);
        self
    }

    /// Log every guest syscall to stderr.
    pub fn strace(mut self, enabled: bool) -> Self {
        self.strace = enabled;
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Full argument vector passed to qemu, program included.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::new();
        if let Some(sysroot) = &self.sysroot {
            argv.push("-L".into());
            argv.push(sysroot.clone().into_os_string());
        }
        if self.strace {
            argv.push("-strace".into());
        }
        argv.push(self.program.clone().into_os_string());
        argv.extend(self.args.iter().cloned());
        argv
    }

    pub fn build(self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(self.argv());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_without_sysroot() {
        let argv = QemuUser::new("qemu-riscv64", Path::new("target/rv-sort"))
            .sysroot(Some(Path::new("/definitely/not/here")))
            .args(["--raw-io"])
            .argv();
        assert_eq!(argv, ["target/rv-sort", "--raw-io"]);
    }

    #[test]
    fn test_argv_with_sysroot_and_strace() {
        let dir = std::env::temp_dir();
        let argv = QemuUser::new("qemu-riscv64", Path::new("rv-sort"))
            .sysroot(Some(&dir))
            .strace(true)
            .argv();
        assert_eq!(argv[0], "-L");
        assert_eq!(argv[1], dir.as_os_str());
        assert_eq!(argv[2], "-strace");
        assert_eq!(argv[3], "rv-sort");
    }
}
