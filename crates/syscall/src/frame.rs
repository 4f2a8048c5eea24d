//! Register marshalling for the RISC-V syscall convention.
//!
//! A [`SyscallFrame`] is the complete input of one trap: the number that goes
//! to a7 and the six argument slots a0-a5. Both listings of the invoke helper
//! reduce to a frame; they only differ in where the caller put the number.

use core::fmt;

/// Integer registers that take part in the syscall convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Reg {
    Zero = 0,
    A0 = 10,
    A1 = 11,
    A2 = 12,
    A3 = 13,
    A4 = 14,
    A5 = 15,
    A6 = 16,
    A7 = 17,
}

impl Reg {
    /// Architectural register number (`xN`).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// ABI mnemonic as written in assembly.
    pub const fn abi_name(self) -> &'static str {
        match self {
            Reg::Zero => "zero",
            Reg::A0 => "a0",
            Reg::A1 => "a1",
            Reg::A2 => "a2",
            Reg::A3 => "a3",
            Reg::A4 => "a4",
            Reg::A5 => "a5",
            Reg::A6 => "a6",
            Reg::A7 => "a7",
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abi_name())
    }
}

/// Register carrying the syscall number.
pub const SYSCALL_NR_REG: Reg = Reg::A7;

/// Argument registers in argument order.
pub const ARG_REGS: [Reg; MAX_ARGS] = [Reg::A0, Reg::A1, Reg::A2, Reg::A3, Reg::A4, Reg::A5];

/// Register the kernel leaves the result in.
pub const RET_REG: Reg = Reg::A0;

/// Argument slots of the native convention.
pub const MAX_ARGS: usize = 6;

/// Argument slots left once the number occupies a0 (shifted convention).
pub const SHIFTED_MAX_ARGS: usize = MAX_ARGS - 1;

/// Too many arguments for the convention in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    pub given: usize,
    pub max: usize,
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syscall takes at most {} arguments, got {}",
            self.max, self.given
        )
    }
}

impl core::error::Error for ArityError {}

/// Everything one `ecall` consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyscallFrame {
    pub nr: u64,
    pub args: [u64; MAX_ARGS],
}

impl SyscallFrame {
    pub const fn new(nr: u64, args: [u64; MAX_ARGS]) -> Self {
        Self { nr, args }
    }

    /// Build a frame from a variable argument list, zero-filling the unused
    /// slots.
    pub fn with_args(nr: u64, args: &[u64]) -> Result<Self, ArityError> {
        if args.len() > MAX_ARGS {
            return Err(ArityError {
                given: args.len(),
                max: MAX_ARGS,
            });
        }
        let mut slots = [0; MAX_ARGS];
        slots[..args.len()].copy_from_slice(args);
        Ok(Self::new(nr, slots))
    }

    /// Read a frame out of the shifted layout: number in a0, arguments in a1-a5.
    pub const fn from_shifted(regs: [u64; MAX_ARGS]) -> Self {
        Self {
            nr: regs[0],
            args: [regs[1], regs[2], regs[3], regs[4], regs[5], 0],
        }
    }

    /// Lay the frame out in the shifted convention.
    ///
    /// Fails if the sixth slot is in use, since the number takes its place.
    pub fn to_shifted(&self) -> Result<[u64; MAX_ARGS], ArityError> {
        if self.args[MAX_ARGS - 1] != 0 {
            return Err(ArityError {
                given: MAX_ARGS,
                max: SHIFTED_MAX_ARGS,
            });
        }
        let [a0, a1, a2, a3, a4, _] = self.args;
        Ok([self.nr, a0, a1, a2, a3, a4])
    }

    /// `(register, value)` pairs in load order: a7 first, then a0-a5.
    pub fn placements(&self) -> [(Reg, u64); MAX_ARGS + 1] {
        let mut out = [(SYSCALL_NR_REG, self.nr); MAX_ARGS + 1];
        for (slot, (reg, value)) in out[1..].iter_mut().zip(ARG_REGS.iter().zip(self.args)) {
            *slot = (*reg, value);
        }
        out
    }

    /// Value this frame puts in `reg`, if the convention uses it.
    pub fn value_of(&self, reg: Reg) -> Option<u64> {
        self.placements()
            .iter()
            .find(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
    }
}

/// Something that can execute a loaded frame and hand back a0.
pub trait Trap {
    fn trap(&mut self, frame: &SyscallFrame) -> i64;
}

/// Marshal `nr` and `args` into a frame and trap through `trap`.
///
/// The raw result is returned as-is; use [`crate::Errno::decode`] to split
/// errors out.
pub fn invoke<T: Trap + ?Sized>(trap: &mut T, nr: u64, args: &[u64]) -> Result<i64, ArityError> {
    let frame = SyscallFrame::with_args(nr, args)?;
    Ok(trap.trap(&frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_numbers() {
        assert_eq!(Reg::Zero.number(), 0);
        assert_eq!(Reg::A0.number(), 10);
        assert_eq!(Reg::A7.number(), 17);
        assert_eq!(SYSCALL_NR_REG.abi_name(), "a7");
        assert_eq!(RET_REG, Reg::A0);
    }

    #[test]
    fn test_with_args_zero_fills() {
        let frame = SyscallFrame::with_args(64, &[1, 2, 3]).unwrap();
        assert_eq!(frame.nr, 64);
        assert_eq!(frame.args, [1, 2, 3, 0, 0, 0]);
    }

    #[test]
    fn test_with_args_rejects_seven() {
        let err = SyscallFrame::with_args(64, &[0; 7]).unwrap_err();
        assert_eq!(err, ArityError { given: 7, max: 6 });
    }

    #[test]
    fn test_placements_order() {
        let frame = SyscallFrame::new(93, [7, 8, 9, 10, 11, 12]);
        let p = frame.placements();
        assert_eq!(p[0], (Reg::A7, 93));
        assert_eq!(p[1], (Reg::A0, 7));
        assert_eq!(p[6], (Reg::A5, 12));
        assert_eq!(frame.value_of(Reg::A3), Some(10));
        assert_eq!(frame.value_of(Reg::A6), None);
    }

    #[test]
    fn test_shifted_layout() {
        let frame = SyscallFrame::from_shifted([64, 1, 0x1000, 5, 0, 0]);
        assert_eq!(frame.nr, 64);
        assert_eq!(frame.args, [1, 0x1000, 5, 0, 0, 0]);
        assert_eq!(frame.to_shifted().unwrap(), [64, 1, 0x1000, 5, 0, 0]);
    }

    #[test]
    fn test_shifted_has_no_sixth_slot() {
        let frame = SyscallFrame::new(1, [0, 0, 0, 0, 0, 9]);
        assert_eq!(
            frame.to_shifted(),
            Err(ArityError { given: 6, max: 5 })
        );
    }
}
