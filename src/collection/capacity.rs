//! Filesystem capacity through `statvfs(3)`.

use std::{ffi::CString, mem, os::unix::ffi::OsStrExt, path::Path};

use serde::{Deserialize, Serialize};

use crate::utils::error::{DirUsageError, Operation, Result};

/// Capacity of the filesystem a path lives on, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FsUsage {
    /// Bytes available to unprivileged users.
    #[serde(rename = "avail_size")]
    pub available_size: u64,
    /// Equal to `all_size - available_size`, so space reserved for root
    /// counts as used.
    pub used_size: u64,
    pub all_size: u64,
}

impl FsUsage {
    /// Builds the snapshot from raw block counts.
    pub const fn from_blocks(block_size: u64, total_blocks: u64, available_blocks: u64) -> Self {
        let all_size = total_blocks.saturating_mul(block_size);
        let available_size = available_blocks.saturating_mul(block_size);

        Self {
            available_size,
            used_size: all_size.saturating_sub(available_size),
            all_size,
        }
    }
}

// Note that x86 returns `u32` values while x86-64 returns `u64`s, so we convert
// everything to `u64` for consistency.
#[allow(clippy::useless_conversion)]
fn usage_from_statvfs(vfs: &libc::statvfs) -> FsUsage {
    FsUsage::from_blocks(
        u64::from(vfs.f_frsize),
        u64::from(vfs.f_blocks),
        u64::from(vfs.f_bavail),
    )
}

/// Returns the capacity of the filesystem `path` is on.
pub fn fs_usage(path: impl AsRef<Path>) -> Result<FsUsage> {
    let path = path.as_ref();
    let c_path =
        CString::new(path.as_os_str().as_bytes()).map_err(|_| DirUsageError::InvalidPath {
            path: path.to_path_buf(),
        })?;

    let mut vfs = mem::MaybeUninit::<libc::statvfs>::uninit();

    // SAFETY: libc call, `c_path` is a valid C string and `vfs` is a valid
    // pointer to write to.
    let result = unsafe { libc::statvfs(c_path.as_ptr(), vfs.as_mut_ptr()) };

    if result == 0 {
        // SAFETY: If result is 0, it succeeded, and vfs should be populated.
        let vfs = unsafe { vfs.assume_init() };
        Ok(usage_from_statvfs(&vfs))
    } else {
        Err(DirUsageError::io(
            Operation::Statvfs,
            path,
            std::io::Error::last_os_error(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_blocks_arithmetic() {
        let usage = FsUsage::from_blocks(4096, 1000, 200);

        assert_eq!(usage.all_size, 4_096_000);
        assert_eq!(usage.available_size, 819_200);
        assert_eq!(usage.used_size, 3_276_800);
    }

    #[test]
    fn from_blocks_saturates() {
        let usage = FsUsage::from_blocks(u64::MAX, 2, 1);

        assert_eq!(usage.all_size, u64::MAX);
        assert_eq!(usage.used_size, 0);
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(FsUsage::from_blocks(1, 10, 4)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"avail_size": 4, "used_size": 6, "all_size": 10})
        );
    }

    #[test]
    fn real_filesystem_is_consistent() {
        let dir = tempfile::tempdir().unwrap();
        let usage = fs_usage(dir.path()).unwrap();

        assert!(usage.all_size > 0);
        assert!(usage.available_size <= usage.all_size);
        assert_eq!(usage.used_size, usage.all_size - usage.available_size);
    }

    #[test]
    fn missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = fs_usage(dir.path().join("missing")).unwrap_err();

        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
    }

    #[test]
    fn nul_in_path_is_rejected() {
        let err = fs_usage("bad\0path").unwrap_err();

        assert!(matches!(err, DirUsageError::InvalidPath { .. }));
    }
}
