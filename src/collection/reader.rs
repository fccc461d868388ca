//! Reading every entry name out of an open directory.

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod linux;
        pub use linux::*;
    } else {
        mod other;
        pub use other::*;
    }
}

use std::{ffi::OsString, io, path::Path};

use super::dirent::{DirentLayout, EntryLimit, parse_dirents};
use crate::utils::error::{DirUsageError, Operation, Result};

/// The size of the buffer each batch of raw entries is read into. Matches the
/// usual kernel read granularity for directories.
pub const DIRENT_BUF_SIZE: usize = 32 * 1024;

/// Something that fills a buffer with whole raw directory entry records.
pub trait DirentSource {
    /// Reads the next batch of records into `buf`, returning how many bytes
    /// were filled. Zero means the directory is exhausted.
    fn read_batch(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Reads batches from `source` until it is exhausted, decoding each one and
/// accumulating every name. `path` is only used to tag errors.
///
/// Any failed read or malformed batch aborts with no partial result.
pub fn read_names_from<S: DirentSource>(
    source: &mut S, layout: &DirentLayout, path: &Path,
) -> Result<Vec<OsString>> {
    let mut names = Vec::with_capacity(256);
    let mut buf = vec![0; DIRENT_BUF_SIZE];

    loop {
        let filled = source
            .read_batch(&mut buf)
            .map_err(|err| DirUsageError::io(Operation::Getdents, path, err))?;

        if filled == 0 {
            break;
        }

        let batch = &buf[..filled.min(buf.len())];
        parse_dirents(batch, layout, EntryLimit::UNBOUNDED, &mut names)
            .map_err(|err| DirUsageError::decode(path, err))?;
    }

    Ok(names)
}
