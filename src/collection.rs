//! Collecting disk usage: filesystem capacity, and the recursive size of a
//! tree walked through raw directory entries.

pub mod capacity;
pub mod classify;
pub mod dirent;
pub mod reader;
pub mod walk;

pub use capacity::{FsUsage, fs_usage};
pub use classify::{PathKind, classify};
pub use walk::dir_size;
