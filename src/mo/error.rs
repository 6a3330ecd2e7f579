//! Custom error types for the mo-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is a terminal failure of a load: a catalog is never
/// partially constructed. Lookup misses are `None`, not errors.
#[derive(Debug, Error)]
pub enum MoError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The buffer is smaller than the fixed catalog header.
    #[error("Catalog too short: {actual} bytes, but the header alone is {expected} bytes")]
    TooShort { expected: usize, actual: usize },

    /// The leading 32-bit value matches neither byte-order variant of the
    /// catalog magic.
    #[error("Bad magic: {0:#010x} is not a message catalog in either byte order")]
    BadMagic(u32),

    /// The catalog's format revision is rejected by the active revision
    /// policy.
    #[error("Unsupported catalog revision {major}.{minor}")]
    UnsupportedRevision { major: u16, minor: u16 },

    /// A table declared in the header does not fit inside the buffer.
    #[error("Truncated {table} table: {needed} bytes at offset {offset} exceed catalog size {available}")]
    TruncatedTable {
        table: &'static str,
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// A string descriptor points outside the buffer.
    #[error("String {index} out of bounds: {length} bytes at offset {offset} leave no room for the terminator in a {available}-byte catalog")]
    OutOfBounds {
        index: usize,
        offset: u64,
        length: u64,
        available: u64,
    },

    /// A referenced string is not valid UTF-8. Stored bytes are served
    /// verbatim, so content this reader cannot represent as `str` is
    /// rejected at load rather than transcoded.
    #[error("String {index} is not valid UTF-8")]
    InvalidUtf8 {
        index: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// A convenience `Result` type alias using the crate's `MoError` type.
pub type Result<T> = std::result::Result<T, MoError>;
