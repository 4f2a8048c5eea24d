//! Process management

use crate::arch;
use crate::sysno::{SYS_EXIT_GROUP, SYS_GETPID};

/// Exit every thread of the process.
///
/// # Arguments
/// * `code` - Exit code (0 = success)
#[inline]
pub fn exit_group(code: i32) -> ! {
    arch::syscall_exit(SYS_EXIT_GROUP, code as u64)
}

/// Get current process ID.
#[inline]
pub fn getpid() -> i64 {
    arch::syscall0(SYS_GETPID)
}
