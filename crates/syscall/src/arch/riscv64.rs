//! RISC-V syscall primitives
//!
//! Uses the `ecall` instruction with:
//! - a7: syscall number
//! - a0-a5: arguments 1-6
//! - a0: return value (raw, negative errno on failure)
//!
//! The kernel preserves every register other than a0 across the trap.

use crate::frame::{SyscallFrame, Trap};

/// Syscall with 0 arguments
#[inline(always)]
pub fn syscall0(nr: u64) -> i64 {
    let ret: i64;
    // SAFETY: `ecall` from U-mode traps into the kernel, which validates the
    // number in a7 and returns -ENOSYS for unknown ones. Only a0 is written.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            lateout("a0") ret,
            options(nostack)
        );
    }
    ret
}

/// Syscall with 1 argument
#[inline(always)]
pub fn syscall1(nr: u64, a0: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0. The kernel validates pointer-like arguments.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            inlateout("a0") a0 => ret,
            options(nostack)
        );
    }
    ret
}

/// Syscall with 2 arguments
#[inline(always)]
pub fn syscall2(nr: u64, a0: u64, a1: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            options(nostack)
        );
    }
    ret
}

/// Syscall with 3 arguments
#[inline(always)]
pub fn syscall3(nr: u64, a0: u64, a1: u64, a2: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            in("a2") a2,
            options(nostack)
        );
    }
    ret
}

/// Syscall with 4 arguments
#[inline(always)]
pub fn syscall4(nr: u64, a0: u64, a1: u64, a2: u64, a3: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            in("a2") a2,
            in("a3") a3,
            options(nostack)
        );
    }
    ret
}

/// Syscall with 5 arguments
#[inline(always)]
pub fn syscall5(nr: u64, a0: u64, a1: u64, a2: u64, a3: u64, a4: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            in("a2") a2,
            in("a3") a3,
            in("a4") a4,
            options(nostack)
        );
    }
    ret
}

/// Syscall with 6 arguments
#[inline(always)]
pub fn syscall6(nr: u64, a0: u64, a1: u64, a2: u64, a3: u64, a4: u64, a5: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            in("a2") a2,
            in("a3") a3,
            in("a4") a4,
            in("a5") a5,
            options(nostack)
        );
    }
    ret
}

/// Exit syscall (noreturn)
#[inline(always)]
pub fn syscall_exit(nr: u64, code: u64) -> ! {
    // SAFETY: exit/exit_group never return to user mode.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a7") nr,
            in("a0") code,
            options(noreturn, nostack)
        );
    }
}

/// Invoke a syscall with the number in its own operand.
///
/// The number is copied into a7 from a scratch register picked by the
/// compiler, the five arguments go to a0-a4, and a0 is returned untouched.
/// Nothing is validated: an unknown number comes back as the kernel's raw
/// `-ENOSYS`.
#[inline(always)]
pub fn invoke_syscall(sysno: u64, a0: u64, a1: u64, a2: u64, a3: u64, a4: u64) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0. `{sysno}` cannot be allocated to any of the
    // explicit registers below, so the `mv` never clobbers an argument.
    unsafe {
        core::arch::asm!(
            "mv a7, {sysno}",
            "ecall",
            sysno = in(reg) sysno,
            inlateout("a0") a0 => ret,
            in("a1") a1,
            in("a2") a2,
            in("a3") a3,
            in("a4") a4,
            out("a7") _,
            options(nostack)
        );
    }
    ret
}

/// Invoke a syscall laid out in the shifted convention.
///
/// `regs[0]` holds the syscall number and `regs[1..6]` the five arguments,
/// i.e. what a caller passing `(sysno, arg0, .., arg4)` leaves in a0-a5.
/// Every slot is bound to its register explicitly before the shuffle, so
/// the moves are correct wherever this gets inlined.
#[inline(always)]
pub fn invoke_syscall_shifted(regs: [u64; 6]) -> i64 {
    let ret: i64;
    // SAFETY: See syscall0. a1-a4 are overwritten by the shuffle and marked
    // as clobbered; a5 is only read.
    unsafe {
        core::arch::asm!(
            "add a7, zero, a0",
            "add a0, zero, a1",
            "add a1, zero, a2",
            "add a2, zero, a3",
            "add a3, zero, a4",
            "add a4, zero, a5",
            "ecall",
            inlateout("a0") regs[0] => ret,
            inlateout("a1") regs[1] => _,
            inlateout("a2") regs[2] => _,
            inlateout("a3") regs[3] => _,
            inlateout("a4") regs[4] => _,
            in("a5") regs[5],
            out("a7") _,
            options(nostack)
        );
    }
    ret
}

/// The real trap: loads a [`SyscallFrame`] into a7/a0-a5 and executes `ecall`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ecall;

impl Trap for Ecall {
    #[inline]
    fn trap(&mut self, frame: &SyscallFrame) -> i64 {
        let [a0, a1, a2, a3, a4, a5] = frame.args;
        syscall6(frame.nr, a0, a1, a2, a3, a4, a5)
    }
}
