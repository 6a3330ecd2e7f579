//! Catalog loading and lookup.
//!
//! [`MoCatalog`] is the parsed, immutable result of one load. All
//! validation happens during construction; afterwards the catalog is a
//! plain value with no interior mutability, safe to share between threads
//! for concurrent lookups.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info, trace, warn};

use super::error::Result;
use super::models::{CatalogMetadata, MoEntry, MoHeader, RevisionPolicy, CONTEXT_SEPARATOR};
use super::{header, metadata, strings};

/// A parsed message catalog.
///
/// Lookups are exact-match against the stored original strings, embedded
/// plural separators and context prefixes included. A miss is `None`,
/// never an error.
#[derive(Debug, Clone)]
pub struct MoCatalog {
    header: MoHeader,
    entries: Vec<MoEntry>,
    lookup: HashMap<String, usize>,
    metadata: CatalogMetadata,
}

impl MoCatalog {
    /// Parses a catalog from `bytes` under the default revision policy.
    ///
    /// The buffer only needs to live for the duration of this call; every
    /// string is copied into owned storage.
    ///
    /// # Errors
    ///
    /// Any [`MoError`](super::MoError) variant except `Io`. Failures are
    /// all-or-nothing: a catalog is never partially constructed.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Self::parse_with(bytes, RevisionPolicy::default())
    }

    /// Parses a catalog from `bytes` under an explicit revision policy.
    pub fn parse_with(bytes: &[u8], policy: RevisionPolicy) -> Result<Self> {
        let header = header::parse(bytes, policy)?;
        let declared = header.string_count as usize;

        let mut entries: Vec<MoEntry> = Vec::with_capacity(declared);
        let mut lookup: HashMap<String, usize> = HashMap::with_capacity(declared);
        let mut catalog_metadata = CatalogMetadata::default();

        for index in 0..declared {
            let original =
                strings::read_descriptor(bytes, header.byte_order, header.originals_offset, index);
            let translation = strings::read_descriptor(
                bytes,
                header.byte_order,
                header.translations_offset,
                index,
            );
            let key = strings::extract(bytes, original, index)?;
            let translated = strings::extract(bytes, translation, index)?;

            // The reserved empty key carries catalog headers, not a
            // translation. It is parsed but never becomes queryable.
            if key.is_empty() {
                trace!("Entry {} carries catalog metadata", index);
                catalog_metadata = metadata::parse(&translated);
                warn_on_foreign_charset(&catalog_metadata);
                continue;
            }

            let variants = translated.split('\0').map(str::to_string).collect();
            let slot = entries.len();
            if let Some(previous) = lookup.insert(key.clone(), slot) {
                debug!("Duplicate key {:?} shadows entry {}", key, previous);
            }
            entries.push(MoEntry { key, variants });
        }

        info!(
            "Loaded catalog: {} queryable entries of {} declared",
            lookup.len(),
            declared
        );

        Ok(Self {
            header,
            entries,
            lookup,
            metadata: catalog_metadata,
        })
    }

    /// Reads the file at `path` fully into memory and parses it under the
    /// default revision policy.
    ///
    /// # Errors
    ///
    /// [`MoError::Io`](super::MoError::Io) when the file cannot be read,
    /// otherwise as [`MoCatalog::parse`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, RevisionPolicy::default())
    }

    /// Reads and parses the file at `path` under an explicit revision
    /// policy.
    pub fn open_with<P: AsRef<Path>>(path: P, policy: RevisionPolicy) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening catalog file: {}", path.display());
        let bytes = fs::read(path)?;
        Self::parse_with(&bytes, policy)
    }

    /// The primary translation for `key`, byte-for-byte as stored.
    ///
    /// `None` when the key is absent or its stored translation is the
    /// empty string, which by convention means "no translation"; callers
    /// fall back to their original text on `None`.
    pub fn translation_for(&self, key: &str) -> Option<&str> {
        self.entry_for(key).and_then(MoEntry::primary)
    }

    /// The translated variant at plural `index` for `key`.
    ///
    /// Plural entries store their original as `singular\0plural`, and the
    /// stored form is what lookup matches. Which index a given count
    /// selects is the caller's plural rule; the catalog only serves the
    /// variants. See [`CatalogMetadata::plural_info`].
    pub fn plural_translation_for(&self, key: &str, index: usize) -> Option<&str> {
        self.entry_for(key).and_then(|entry| entry.variant(index))
    }

    /// The primary translation for `key` qualified by `context`.
    ///
    /// Contextual entries store their original as `context\u{4}key`. When
    /// the qualified form is absent the bare key is tried, so catalogs
    /// that never needed the disambiguation still resolve.
    pub fn translation_for_context(&self, context: &str, key: &str) -> Option<&str> {
        let qualified = format!("{}{}{}", context, CONTEXT_SEPARATOR, key);
        self.translation_for(&qualified)
            .or_else(|| self.translation_for(key))
    }

    /// Number of distinct queryable keys after duplicate resolution. The
    /// metadata entry is not counted.
    pub fn entry_count(&self) -> usize {
        self.lookup.len()
    }

    /// `true` when the catalog holds no queryable entries.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// The validated catalog header.
    pub fn header(&self) -> &MoHeader {
        &self.header
    }

    /// Catalog-level headers parsed from the reserved metadata entry.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Iterates entries in storage order, skipping any entry shadowed by
    /// a later duplicate of its key.
    pub fn entries(&self) -> impl Iterator<Item = &MoEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                (self.lookup.get(&entry.key) == Some(&index)).then_some(entry)
            })
    }

    fn entry_for(&self, key: &str) -> Option<&MoEntry> {
        self.lookup.get(key).map(|&index| &self.entries[index])
    }
}

/// Logs when the catalog declares a charset other than UTF-8.
///
/// Stored bytes are served without conversion, so such a catalog loads
/// only if its strings happen to be valid UTF-8 anyway.
fn warn_on_foreign_charset(metadata: &CatalogMetadata) {
    if let Some(label) = metadata.charset() {
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) if encoding == UTF_8 => {}
            Some(encoding) => warn!(
                "Catalog declares charset {} ({}); strings are read as UTF-8 without conversion",
                label,
                encoding.name()
            ),
            None => warn!("Catalog declares unrecognized charset {}", label),
        }
    }
}
