//! Core I/O over raw file descriptors.

use core::fmt;

use crate::arch;
use crate::errno::{Errno, EINTR, EIO};
use crate::sysno::{SYS_READ, SYS_WRITE};

/// Read from a file descriptor. Returns the raw kernel result.
#[inline]
pub fn read(fd: usize, buf: &mut [u8]) -> isize {
    arch::syscall3(
        SYS_READ,
        fd as u64,
        buf.as_mut_ptr() as u64,
        buf.len() as u64,
    ) as isize
}

/// Write to a file descriptor. Returns the raw kernel result.
#[inline]
pub fn write(fd: usize, buf: &[u8]) -> isize {
    arch::syscall3(
        SYS_WRITE,
        fd as u64,
        buf.as_ptr() as u64,
        buf.len() as u64,
    ) as isize
}

/// Write the whole buffer, retrying short writes and `EINTR`.
///
/// A zero-length write from the kernel is reported as `EIO`.
pub fn write_all(fd: usize, mut buf: &[u8]) -> Result<(), Errno> {
    while !buf.is_empty() {
        match Errno::decode(write(fd, buf) as i64) {
            Ok(0) => return Err(Errno::new(EIO)),
            Ok(n) => buf = &buf[n as usize..],
            Err(e) if e.code() == EINTR => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// A borrowed file descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fd(pub usize);

impl Fd {
    pub const STDOUT: Fd = Fd(1);
    pub const STDERR: Fd = Fd(2);
}

impl fmt::Write for Fd {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_all(self.0, s.as_bytes()).map_err(|_| fmt::Error)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Fd {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        loop {
            match Errno::decode(write(self.0, buf) as i64) {
                Ok(n) => return Ok(n as usize),
                Err(e) if e.code() == EINTR => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::io::Read for Fd {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        loop {
            match Errno::decode(read(self.0, buf) as i64) {
                Ok(n) => return Ok(n as usize),
                Err(e) if e.code() == EINTR => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}
