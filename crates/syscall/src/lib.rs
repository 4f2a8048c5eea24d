//! RISC-V Linux syscall helpers.
//!
//! Two layers live here:
//! - a pure marshalling model ([`SyscallFrame`], [`Reg`], [`Trap`]) that
//!   describes where every input of a trap lands, testable on any host;
//! - the raw `ecall` primitives and thin fd/process wrappers, compiled only
//!   for `riscv64`.
//!
//! ## Usage
//! ```rust,ignore
//! use rv_syscall::{invoke_syscall, sysno::SYS_GETPID};
//!
//! let pid = invoke_syscall(SYS_GETPID, 0, 0, 0, 0, 0);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod arch;

pub mod errno;
pub mod frame;
pub mod sysno;

#[cfg(target_arch = "riscv64")]
pub mod io;
#[cfg(target_arch = "riscv64")]
pub mod process;

pub use errno::Errno;
pub use frame::{invoke, ArityError, Reg, SyscallFrame, Trap};

#[cfg(target_arch = "riscv64")]
pub use arch::{
    invoke_syscall, invoke_syscall_shifted, syscall0, syscall1, syscall2, syscall3, syscall4,
    syscall5, syscall6, syscall_exit, Ecall,
};
#[cfg(target_arch = "riscv64")]
pub use io::{read, write, write_all, Fd};
#[cfg(target_arch = "riscv64")]
pub use process::{exit_group, getpid};
