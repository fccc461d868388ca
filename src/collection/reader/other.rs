//! Directory reads for Unix-likes without a raw `getdents64`. The entries come
//! from `readdir(3)` instead of being decoded by hand.

use std::{
    ffi::{OsStr, OsString},
    os::{fd::BorrowedFd, unix::ffi::OsStrExt},
    path::Path,
};

use rustix::fs::Dir;

use crate::{
    collection::dirent::is_pseudo_entry,
    utils::error::{DirUsageError, Operation, Result},
};

/// Returns the name of every entry in the open directory `fd`, excluding `.`
/// and `..`, in the order the OS hands them back.
pub fn read_dir_names(fd: BorrowedFd<'_>, path: &Path) -> Result<Vec<OsString>> {
    let read_dir_err = |err: rustix::io::Errno| DirUsageError::io(Operation::ReadDir, path, err.into());

    let dir = Dir::read_from(fd).map_err(read_dir_err)?;
    let mut names = Vec::with_capacity(256);

    for entry in dir {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name().to_bytes();

        if entry.ino() == 0 || is_pseudo_entry(name) {
            continue;
        }

        names.push(OsStr::from_bytes(name).to_os_string());
    }

    Ok(names)
}
