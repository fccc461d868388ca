//! The recursive size of a directory tree.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::classify::{PathKind, classify};
use crate::utils::error::{DirUsageError, Result};

/// Returns the size of `path` in bytes if it's a file, or the summed size of
/// every file under it if it's a directory.
///
/// The tree is walked depth-first with an explicit stack, so deep trees don't
/// grow the call stack. The first error anywhere in the tree aborts the walk;
/// no partial total is returned.
pub fn dir_size(path: impl AsRef<Path>) -> Result<i64> {
    let root = path.as_ref();
    let mut total: i64 = 0;
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(current) = pending.pop() {
        match classify(&current) {
            Ok(PathKind::File(size)) => {
                total = total
                    .checked_add(size)
                    .ok_or_else(|| DirUsageError::Overflow {
                        path: root.to_path_buf(),
                    })?;
            }
            Ok(PathKind::Directory(names)) => {
                debug!("{current:?}: {} entries", names.len());

                // Reversed, so children are popped in the order they were read.
                pending.extend(names.into_iter().rev().map(|name| current.join(name)));
            }
            Err(err) => {
                warn!("stopping size walk of {root:?}: {err}");
                return Err(err);
            }
        }
    }

    Ok(total)
}
