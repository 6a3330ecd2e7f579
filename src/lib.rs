//! # mo-reader
//!
//! A reader for compiled gettext message catalogs (.mo files).
//! Handles both byte-order variants of the format and validates every
//! offset before use, so malformed or truncated catalogs fail to load
//! instead of misbehaving.
//!
//! ```no_run
//! use mo_reader::MoCatalog;
//!
//! # fn main() -> mo_reader::mo::Result<()> {
//! let catalog = MoCatalog::open("po/sv.mo")?;
//! let greeting = catalog.translation_for("hello").unwrap_or("hello");
//! # Ok(())
//! # }
//! ```
pub mod mo;

// Re-export the main types for convenience
pub use mo::{
    MoCatalog,
    MoError,
    models::{CatalogMetadata, Endianness, MoEntry, MoHeader, PluralInfo, RevisionPolicy},
};
