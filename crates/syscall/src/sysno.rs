// RISC-V Linux uses the asm-generic syscall table. The numbers are spelled
// out instead of re-exported from linux-raw-sys, whose table follows the
// build host, so host-side tooling and tests see the same values as the
// target.

pub const SYS_READ: u64 = 63;
pub const SYS_WRITE: u64 = 64;
pub const SYS_EXIT: u64 = 93;
pub const SYS_EXIT_GROUP: u64 = 94;
pub const SYS_GETPID: u64 = 172;

#[cfg(all(test, target_arch = "riscv64"))]
mod tests {
    use super::*;

    #[test]
    fn test_matches_linux_raw_sys_on_target() {
        use linux_raw_sys::general::{
            __NR_exit, __NR_exit_group, __NR_getpid, __NR_read, __NR_write,
        };
        assert_eq!(SYS_READ, u64::from(__NR_read));
        assert_eq!(SYS_WRITE, u64::from(__NR_write));
        assert_eq!(SYS_EXIT, u64::from(__NR_exit));
        assert_eq!(SYS_EXIT_GROUP, u64::from(__NR_exit_group));
        assert_eq!(SYS_GETPID, u64::from(__NR_getpid));
    }
}
