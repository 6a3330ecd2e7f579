//! Fixed header parsing and table extent validation.
//!
//! The header is seven 32-bit fields in the compiler's native byte order:
//!
//! ```text
//! offset 0   magic number (0x950412de, possibly byte-swapped)
//! offset 4   format revision (major << 16 | minor)
//! offset 8   number of string pairs
//! offset 12  offset of the originals descriptor table
//! offset 16  offset of the translations descriptor table
//! offset 20  size of the hash table, in 4-byte words
//! offset 24  offset of the hash table
//! ```
//!
//! Everything the header promises is validated here, before any string is
//! touched: both descriptor tables and the hash table must lie entirely
//! inside the buffer. The hash table itself is never read afterwards.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use super::error::{MoError, Result};
use super::models::{Endianness, MoHeader, RevisionPolicy, StringDescriptor};

/// Parses and validates the fixed header of the catalog in `bytes`.
///
/// # Errors
///
/// Returns [`MoError::TooShort`] when the buffer cannot hold the header,
/// [`MoError::BadMagic`] when the magic matches neither byte order,
/// [`MoError::UnsupportedRevision`] when `policy` rejects the revision,
/// and [`MoError::TruncatedTable`] when a declared table extends past the
/// end of the buffer.
pub(crate) fn parse(bytes: &[u8], policy: RevisionPolicy) -> Result<MoHeader> {
    if bytes.len() < MoHeader::SIZE {
        return Err(MoError::TooShort {
            expected: MoHeader::SIZE,
            actual: bytes.len(),
        });
    }

    let byte_order = Endianness::from_magic(bytes)
        .ok_or_else(|| MoError::BadMagic(LittleEndian::read_u32(&bytes[0..4])))?;
    trace!("Matched catalog magic, byte order: {:?}", byte_order);

    let revision = byte_order.read_u32_at(bytes, 4);
    let header = MoHeader {
        byte_order,
        revision,
        string_count: byte_order.read_u32_at(bytes, 8),
        originals_offset: byte_order.read_u32_at(bytes, 12),
        translations_offset: byte_order.read_u32_at(bytes, 16),
        hash_size: byte_order.read_u32_at(bytes, 20),
        hash_offset: byte_order.read_u32_at(bytes, 24),
    };

    if !policy.accepts(header.revision_major(), header.revision_minor()) {
        return Err(MoError::UnsupportedRevision {
            major: header.revision_major(),
            minor: header.revision_minor(),
        });
    }

    debug!(
        "Catalog header: revision {}.{}, {} strings, originals at {:#x}, translations at {:#x}",
        header.revision_major(),
        header.revision_minor(),
        header.string_count,
        header.originals_offset,
        header.translations_offset
    );

    validate_extents(&header, bytes.len() as u64)?;
    Ok(header)
}

/// Checks that every table the header declares fits inside the buffer.
///
/// All arithmetic is widened to `u64` so that offsets and sizes near
/// `u32::MAX` cannot wrap around.
fn validate_extents(header: &MoHeader, available: u64) -> Result<()> {
    let descriptor_bytes = u64::from(header.string_count) * StringDescriptor::SIZE as u64;
    check_extent(
        "originals",
        u64::from(header.originals_offset),
        descriptor_bytes,
        available,
    )?;
    check_extent(
        "translations",
        u64::from(header.translations_offset),
        descriptor_bytes,
        available,
    )?;
    check_extent(
        "hash",
        u64::from(header.hash_offset),
        u64::from(header.hash_size) * 4,
        available,
    )?;
    Ok(())
}

fn check_extent(table: &'static str, offset: u64, needed: u64, available: u64) -> Result<()> {
    if offset + needed > available {
        return Err(MoError::TruncatedTable {
            table,
            offset,
            needed,
            available,
        });
    }
    Ok(())
}
