//! Raw directory reads through `getdents64(2)`.

use std::{
    ffi::OsString,
    io,
    os::fd::{AsRawFd, BorrowedFd},
    path::Path,
};

use super::{DirentSource, read_names_from};
use crate::{collection::dirent::DirentLayout, utils::error::Result};

/// A [`DirentSource`] backed by the `getdents64` syscall on an open directory.
pub struct Getdents<'fd> {
    fd: BorrowedFd<'fd>,
}

impl<'fd> Getdents<'fd> {
    pub fn new(fd: BorrowedFd<'fd>) -> Self {
        Self { fd }
    }
}

impl DirentSource for Getdents<'_> {
    fn read_batch(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: `buf` is valid for writes of `buf.len()` bytes, and `fd` is
        // borrowed so it stays open for the duration of the call.
        let result = unsafe {
            libc::syscall(
                libc::SYS_getdents64,
                self.fd.as_raw_fd(),
                buf.as_mut_ptr(),
                buf.len(),
            )
        };

        if result < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(result as usize)
        }
    }
}

/// Returns the name of every entry in the open directory `fd`, excluding `.`
/// and `..`, in the order the kernel hands them back.
pub fn read_dir_names(fd: BorrowedFd<'_>, path: &Path) -> Result<Vec<OsString>> {
    read_names_from(&mut Getdents::new(fd), &DirentLayout::NATIVE, path)
}
