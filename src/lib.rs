//! A disk usage reporter.
//!
//! Two independent measurements are available for a path:
//!
//! - [`fs_usage`] queries the capacity of the filesystem it lives on.
//! - [`dir_size`] sums the size of every file under it, listing directories by
//!   decoding the raw records handed back by `getdents64(2)` rather than going
//!   through [`std::fs::read_dir`].
//!
//! Both run synchronously on the calling thread and abort on the first error.

#[cfg(not(unix))]
compile_error!("dirusage only supports Unix-like systems.");

pub mod utils {
    pub mod data_units;
    pub mod error;
    pub mod logging;
}
pub mod collection;
pub mod options;
pub mod report;

pub use collection::{FsUsage, PathKind, classify, dir_size, fs_usage};
pub use utils::error::{DirUsageError, Result};
