//! Architecture-specific trap primitives.
//!
//! Only RISC-V is provided; every other target builds the marshalling model
//! alone.

#[cfg(target_arch = "riscv64")]
mod riscv64;

#[cfg(target_arch = "riscv64")]
pub use riscv64::*;
