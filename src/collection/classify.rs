//! Classifying a path as a file (with its size) or a directory (with its
//! entries).

use std::{ffi::OsString, os::fd::AsFd, path::Path};

use rustix::fs::{FileType, Mode, OFlags};

use super::reader::read_dir_names;
use crate::utils::error::{DirUsageError, Operation, Result};

/// What a path turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKind {
    /// Anything that isn't a directory, with its size in bytes.
    File(i64),
    /// A directory and the names of its entries, in the order they were read.
    Directory(Vec<OsString>),
}

/// Opens `path` read-only, and either returns its size or lists its entries.
///
/// The descriptor is closed before returning, whether or not this succeeds.
pub fn classify(path: &Path) -> Result<PathKind> {
    // O_NONBLOCK keeps a FIFO from hanging the open; it's ignored for regular
    // files and directories.
    let fd = rustix::fs::open(
        path,
        OFlags::RDONLY | OFlags::CLOEXEC | OFlags::NONBLOCK,
        Mode::empty(),
    )
    .map_err(|err| DirUsageError::io(Operation::Open, path, err.into()))?;

    let stat =
        rustix::fs::fstat(&fd).map_err(|err| DirUsageError::io(Operation::Fstat, path, err.into()))?;

    if FileType::from_raw_mode(stat.st_mode) == FileType::Directory {
        read_dir_names(fd.as_fd(), path).map(PathKind::Directory)
    } else {
        #[allow(clippy::unnecessary_cast)]
        Ok(PathKind::File(stat.st_size as i64))
    }
}
