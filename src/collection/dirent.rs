//! Decoding of raw directory entry records, as filled in by calls like
//! `getdents64(2)`.
//!
//! A buffer holds zero or more back-to-back records. Each record has an inode
//! number and a record length at fixed offsets, followed by a NUL-terminated
//! name that runs to the end of the record. The kernel only ever hands back
//! whole records, so walking `record_length` bytes at a time always lands on
//! the next record or the end of the buffer.

use std::{
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
};

use thiserror::Error;

/// The record length field is always a `u16`.
const RECLEN_SIZE: usize = 2;

/// The inode field is always a `u64`.
const INO_SIZE: usize = 8;

/// How many trailing bytes of a long name field are searched for the
/// terminating NUL. Records are padded to 8-byte alignment, so the terminator
/// of a well-formed record always falls in this window.
const NAME_LOOKBACK: usize = 8;

/// Byte offsets of the fields of a raw directory entry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirentLayout {
    pub ino_offset: usize,
    pub reclen_offset: usize,
    pub name_offset: usize,
    /// Byte order of the integer fields.
    pub little_endian: bool,
}

impl DirentLayout {
    /// The `struct linux_dirent64` record returned by `getdents64(2)`.
    pub const LINUX_DIRENT64: Self = Self {
        ino_offset: 0,
        reclen_offset: 16,
        name_offset: 19,
        little_endian: cfg!(target_endian = "little"),
    };

    /// The layout of the host's native directory entry, taken from `libc`.
    #[cfg(target_os = "linux")]
    pub const NATIVE: Self = Self {
        ino_offset: std::mem::offset_of!(libc::dirent64, d_ino),
        reclen_offset: std::mem::offset_of!(libc::dirent64, d_reclen),
        name_offset: std::mem::offset_of!(libc::dirent64, d_name),
        little_endian: cfg!(target_endian = "little"),
    };

    /// The number of bytes needed to read the record length.
    #[inline]
    pub const fn header_len(&self) -> usize {
        self.reclen_offset + RECLEN_SIZE
    }

    /// The smallest record length that still covers every fixed field.
    #[inline]
    pub const fn min_record_len(&self) -> usize {
        let ino_end = self.ino_offset + INO_SIZE;
        let header = self.header_len();

        let fixed = if ino_end > header { ino_end } else { header };
        if self.name_offset > fixed {
            self.name_offset
        } else {
            fixed
        }
    }

    fn read_u16(&self, bytes: &[u8], offset: usize) -> u16 {
        let mut raw = [0; RECLEN_SIZE];
        raw.copy_from_slice(&bytes[offset..offset + RECLEN_SIZE]);

        if self.little_endian {
            u16::from_le_bytes(raw)
        } else {
            u16::from_be_bytes(raw)
        }
    }

    fn read_u64(&self, bytes: &[u8], offset: usize) -> u64 {
        let mut raw = [0; INO_SIZE];
        raw.copy_from_slice(&bytes[offset..offset + INO_SIZE]);

        if self.little_endian {
            u64::from_le_bytes(raw)
        } else {
            u64::from_be_bytes(raw)
        }
    }
}

/// A malformed directory entry buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The record length can't even cover the fixed fields. A length of zero
    /// also lands here, which would otherwise never advance.
    #[error("record at offset {offset} has length {record_len}, below the minimum of {min}")]
    RecordTooShort {
        offset: usize,
        record_len: u16,
        min: usize,
    },
    /// The record claims more bytes than are left in the buffer.
    #[error("record at offset {offset} has length {record_len}, but only {remaining} bytes remain")]
    RecordOverrun {
        offset: usize,
        record_len: u16,
        remaining: usize,
    },
    /// No NUL was found where the name should end.
    #[error("record at offset {offset} has no name terminator in its last {window} bytes")]
    MissingTerminator { offset: usize, window: usize },
}

/// How many names the decoder may still accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLimit(Option<usize>);

impl EntryLimit {
    pub const UNBOUNDED: Self = Self(None);

    pub const fn at_most(count: usize) -> Self {
        Self(Some(count))
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.0 == Some(0)
    }

    #[inline]
    fn consume(&mut self) {
        if let Some(remaining) = &mut self.0 {
            *remaining = remaining.saturating_sub(1);
        }
    }
}

impl Default for EntryLimit {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Negative counts are unbounded.
impl From<i64> for EntryLimit {
    fn from(count: i64) -> Self {
        usize::try_from(count).map_or(Self::UNBOUNDED, Self::at_most)
    }
}

/// One record sliced out of a directory entry buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    offset: usize,
    inode: u64,
    name_field: &'a [u8],
}

impl<'a> RawRecord<'a> {
    /// Where this record starts in the buffer it came from.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The inode number. Zero means the slot is present but the file is gone.
    #[inline]
    pub fn inode(&self) -> u64 {
        self.inode
    }

    /// Returns the name bytes, up to but not including the terminating NUL.
    ///
    /// Name fields of up to 8 bytes are scanned entirely. Longer ones are only
    /// scanned in their last 8 bytes, and a missing terminator there is
    /// reported rather than guessed at.
    pub fn name(&self) -> Result<&'a [u8], DecodeError> {
        let field = self.name_field;
        let start = field.len().saturating_sub(NAME_LOOKBACK);

        field[start..]
            .iter()
            .position(|&b| b == 0)
            .map(|pos| &field[..start + pos])
            .ok_or(DecodeError::MissingTerminator {
                offset: self.offset,
                window: field.len() - start,
            })
    }
}

/// A cursor over the records of an immutable directory entry buffer.
///
/// Iteration stops once fewer than [`DirentLayout::header_len`] bytes remain,
/// and fuses after yielding an error.
#[derive(Debug, Clone)]
pub struct RawRecords<'a> {
    buf: &'a [u8],
    pos: usize,
    layout: DirentLayout,
}

impl<'a> RawRecords<'a> {
    pub fn new(buf: &'a [u8], layout: DirentLayout) -> Self {
        Self {
            buf,
            pos: 0,
            layout,
        }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn fail(&mut self, err: DecodeError) -> Option<Result<RawRecord<'a>, DecodeError>> {
        self.pos = self.buf.len();
        Some(Err(err))
    }
}

impl<'a> Iterator for RawRecords<'a> {
    type Item = Result<RawRecord<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let layout = self.layout;
        let remaining = self.remaining();
        if remaining < layout.header_len() {
            return None;
        }

        let offset = self.pos;
        let rest = &self.buf[offset..];
        let record_len = layout.read_u16(rest, layout.reclen_offset);
        let len = usize::from(record_len);

        if len < layout.min_record_len() {
            return self.fail(DecodeError::RecordTooShort {
                offset,
                record_len,
                min: layout.min_record_len(),
            });
        }
        if len > remaining {
            return self.fail(DecodeError::RecordOverrun {
                offset,
                record_len,
                remaining,
            });
        }

        let record = &rest[..len];
        self.pos += len;

        Some(Ok(RawRecord {
            offset,
            inode: layout.read_u64(record, layout.ino_offset),
            name_field: &record[layout.name_offset..],
        }))
    }
}

/// Whether a name is the `.` or `..` pseudo-entry.
#[inline]
pub(crate) fn is_pseudo_entry(name: &[u8]) -> bool {
    name == b"." || name == b".."
}

/// Decodes the names in `buf` front to back, appending them to `names`.
///
/// Records with a zero inode and the `.`/`..` pseudo-entries are skipped and
/// don't count against `limit`. Returns how many names were appended.
pub fn parse_dirents(
    buf: &[u8], layout: &DirentLayout, mut limit: EntryLimit, names: &mut Vec<OsString>,
) -> Result<usize, DecodeError> {
    let mut records = RawRecords::new(buf, *layout);
    let mut appended = 0;

    while !limit.is_exhausted() {
        let Some(record) = records.next() else {
            break;
        };
        let record = record?;

        if record.inode() == 0 {
            continue;
        }

        let name = record.name()?;
        if is_pseudo_entry(name) {
            continue;
        }

        limit.consume();
        names.push(OsStr::from_bytes(name).to_os_string());
        appended += 1;
    }

    Ok(appended)
}

/// Decodes the names in `buf` into a fresh list.
pub fn decode_names(
    buf: &[u8], layout: &DirentLayout, limit: EntryLimit,
) -> Result<Vec<OsString>, DecodeError> {
    let mut names = Vec::new();
    parse_dirents(buf, layout, limit, &mut names)?;

    Ok(names)
}
