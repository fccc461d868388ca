//! Error code related to measuring disk usage.

use std::{
    fmt,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::collection::dirent::DecodeError;

/// A type alias for handling disk usage errors.
pub type Result<T> = std::result::Result<T, DirUsageError>;

/// The OS call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open,
    Fstat,
    Getdents,
    ReadDir,
    Statvfs,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Open => "open",
            Operation::Fstat => "fstat",
            Operation::Getdents => "getdents64",
            Operation::ReadDir => "read_dir",
            Operation::Statvfs => "statvfs",
        };

        f.write_str(name)
    }
}

/// The errors that can happen while measuring disk usage.
#[derive(Debug, Error)]
pub enum DirUsageError {
    /// An OS call failed. The underlying error is kept as-is.
    #[error("{op} failed for {path:?}")]
    Io {
        op: Operation,
        path: PathBuf,
        source: io::Error,
    },
    /// A directory handed back a malformed entry buffer.
    #[error("malformed directory entry in {path:?}")]
    Decode { path: PathBuf, source: DecodeError },
    /// The path can't be passed to the OS.
    #[error("{path:?} contains an interior NUL byte")]
    InvalidPath { path: PathBuf },
    /// The total size doesn't fit in an `i64`.
    #[error("total size of {path:?} overflowed")]
    Overflow { path: PathBuf },
}

impl DirUsageError {
    pub(crate) fn io(op: Operation, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &Path, source: DecodeError) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path that was being worked on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Decode { path, .. }
            | Self::InvalidPath { path }
            | Self::Overflow { path } => path,
        }
    }

    /// The raw OS error code, if this came from a failed OS call.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}
