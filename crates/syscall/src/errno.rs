//! Errno values and raw-result decoding.
//!
//! Syscalls return negative errno values on error (e.g., -ENOENT = -2).
//! The constants are re-exported from linux-raw-sys; [`Errno`] wraps one
//! so it can travel through `Result`.
//!
//! ```rust
//! use rv_syscall::errno::{Errno, ENOSYS};
//!
//! assert_eq!(Errno::decode(-38), Err(Errno::new(ENOSYS)));
//! assert_eq!(Errno::decode(5), Ok(5));
//! ```

use core::fmt;

pub use linux_raw_sys::errno::*;

/// Largest errno the kernel encodes in a return value.
pub const MAX_ERRNO: u32 = 4095;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(u32);

impl Errno {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// Split a raw a0 value into success or error.
    ///
    /// Only `-4095..=-1` is an error; anything else (including large
    /// "negative" addresses) is a successful return.
    pub const fn decode(ret: i64) -> Result<u64, Errno> {
        if ret < 0 && ret >= -(MAX_ERRNO as i64) {
            Err(Errno((-ret) as u32))
        } else {
            Ok(ret as u64)
        }
    }

    /// The raw value the kernel would return for this error.
    pub const fn to_raw(self) -> i64 {
        -(self.0 as i64)
    }

    /// Symbolic name for the common codes.
    pub const fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            EPERM => "EPERM",
            ENOENT => "ENOENT",
            ESRCH => "ESRCH",
            EINTR => "EINTR",
            EIO => "EIO",
            EBADF => "EBADF",
            EAGAIN => "EAGAIN",
            ENOMEM => "ENOMEM",
            EACCES => "EACCES",
            EFAULT => "EFAULT",
            EEXIST => "EEXIST",
            EINVAL => "EINVAL",
            EMFILE => "EMFILE",
            ENOSPC => "ENOSPC",
            EPIPE => "EPIPE",
            ERANGE => "ERANGE",
            ENOSYS => "ENOSYS",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "errno {}", self.0),
        }
    }
}

impl core::error::Error for Errno {}

#[cfg(feature = "std")]
impl From<Errno> for std::io::Error {
    fn from(err: Errno) -> Self {
        std::io::Error::from_raw_os_error(err.0 as i32)
    }
}
