//! Descriptor table reads and string extraction from the data region.
//!
//! Each descriptor table is a run of (length, offset) pairs:
//!
//! ```text
//! +--------+--------+--------+--------+-----
//! | len 0  | off 0  | len 1  | off 1  | ...
//! +--------+--------+--------+--------+-----
//!   4 bytes each, catalog byte order
//! ```
//!
//! `length` counts the string's bytes only; the NUL terminator that the
//! compiler writes after every string is not included. Extraction still
//! requires that terminator byte to lie inside the buffer, so a catalog
//! cut anywhere in its data region fails to load instead of silently
//! serving a shortened final string.

use super::error::{MoError, Result};
use super::models::{Endianness, StringDescriptor};

/// Reads descriptor `index` from the table at `table_offset`.
///
/// The table's extent was validated during header parsing, so the read
/// itself cannot run out of the buffer.
pub(crate) fn read_descriptor(
    bytes: &[u8],
    byte_order: Endianness,
    table_offset: u32,
    index: usize,
) -> StringDescriptor {
    let at = table_offset as usize + index * StringDescriptor::SIZE;
    StringDescriptor {
        length: byte_order.read_u32_at(bytes, at),
        offset: byte_order.read_u32_at(bytes, at + 4),
    }
}

/// Copies the string a descriptor points at out of the catalog.
///
/// # Errors
///
/// Returns [`MoError::OutOfBounds`] when the string plus its terminator
/// does not fit inside the buffer, and [`MoError::InvalidUtf8`] when the
/// stored bytes are not valid UTF-8.
pub(crate) fn extract(bytes: &[u8], descriptor: StringDescriptor, index: usize) -> Result<String> {
    let offset = u64::from(descriptor.offset);
    let length = u64::from(descriptor.length);
    let available = bytes.len() as u64;

    // The terminator at offset + length must be in-buffer too.
    if offset + length >= available {
        return Err(MoError::OutOfBounds {
            index,
            offset,
            length,
            available,
        });
    }

    let start = descriptor.offset as usize;
    let end = start + descriptor.length as usize;
    String::from_utf8(bytes[start..end].to_vec())
        .map_err(|source| MoError::InvalidUtf8 { index, source })
}
