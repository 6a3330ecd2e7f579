//! Data structures representing the message catalog format components.

use std::collections::HashMap;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// The catalog magic number, as written by the compiler in its own native
/// byte order. A reader sees it either as-is or byte-swapped, which is how
/// the byte order of the whole file is determined.
pub const MO_MAGIC: u32 = 0x950412de;

/// Separator between a message context and its key inside an original
/// string (`context\u{4}key`).
pub const CONTEXT_SEPARATOR: char = '\u{4}';

/// Byte order of a catalog, selected once from the matched magic variant.
///
/// Every multi-byte field after the magic is encoded in the compiler's
/// native order, so the matching variant fixes the read strategy for the
/// entire parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Identifies the byte order from the catalog's first four bytes.
    ///
    /// Returns `None` when neither interpretation yields [`MO_MAGIC`].
    /// Callers must have checked that at least four bytes are present.
    pub(crate) fn from_magic(bytes: &[u8]) -> Option<Self> {
        if LittleEndian::read_u32(bytes) == MO_MAGIC {
            Some(Endianness::Little)
        } else if BigEndian::read_u32(bytes) == MO_MAGIC {
            Some(Endianness::Big)
        } else {
            None
        }
    }

    /// Reads the `u32` starting at `offset` using this byte order.
    ///
    /// Callers must have bounds-checked `offset + 4` against the buffer.
    pub(crate) fn read_u32_at(self, bytes: &[u8], offset: usize) -> u32 {
        let field = &bytes[offset..offset + 4];
        match self {
            Endianness::Little => LittleEndian::read_u32(field),
            Endianness::Big => BigEndian::read_u32(field),
        }
    }
}

/// Policy for accepting catalog format revisions.
///
/// The major number gates structural compatibility; known minor revisions
/// only add sections this reader does not consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisionPolicy {
    /// Accept major revisions 0 and 1 with any minor revision. The entry
    /// layout the reader consumes is identical across these, so they are
    /// parsed on a best-effort basis.
    #[default]
    Compatible,
    /// Accept only revision 0.0, the single well-known value.
    Strict,
}

impl RevisionPolicy {
    /// Whether a catalog carrying revision `major.minor` may be parsed
    /// under this policy.
    pub fn accepts(self, major: u16, minor: u16) -> bool {
        match self {
            RevisionPolicy::Compatible => major <= 1,
            RevisionPolicy::Strict => major == 0 && minor == 0,
        }
    }
}

/// Fixed-layout header at the start of every catalog.
///
/// Seven 32-bit fields: magic, revision, string count, the two descriptor
/// table offsets, and the size and offset of a hash table. The hash table
/// is bounds-validated like the other tables but never consulted; the
/// reader builds its own lookup structure instead.
#[derive(Debug, Clone, Copy)]
pub struct MoHeader {
    /// Byte order selected by the matched magic variant.
    pub byte_order: Endianness,
    /// Raw format revision (`major << 16 | minor`).
    pub revision: u32,
    /// Number of string pairs the catalog declares.
    pub string_count: u32,
    /// Offset of the original-strings descriptor table.
    pub originals_offset: u32,
    /// Offset of the translated-strings descriptor table.
    pub translations_offset: u32,
    /// Size of the hash table, in 4-byte words.
    pub hash_size: u32,
    /// Offset of the hash table.
    pub hash_offset: u32,
}

impl MoHeader {
    /// Size of the fixed header in bytes.
    pub const SIZE: usize = 28;

    /// Major component of the format revision.
    pub fn revision_major(&self) -> u16 {
        (self.revision >> 16) as u16
    }

    /// Minor component of the format revision.
    pub fn revision_minor(&self) -> u16 {
        (self.revision & 0xffff) as u16
    }
}

/// A (length, offset) pair locating one string in the catalog's data
/// region.
///
/// Descriptor `i` of the originals table pairs with descriptor `i` of the
/// translations table. The stored string is followed by a NUL terminator
/// that is not counted in `length`.
#[derive(Debug, Clone, Copy)]
pub struct StringDescriptor {
    /// Length of the string in bytes, excluding the trailing NUL.
    pub length: u32,
    /// Offset of the string from the start of the catalog.
    pub offset: u32,
}

impl StringDescriptor {
    /// Size of one descriptor in bytes.
    pub const SIZE: usize = 8;
}

/// One parsed catalog entry: an original-language key and its translated
/// variants.
#[derive(Debug, Clone)]
pub struct MoEntry {
    /// The original string, exactly as stored. Plural entries embed a NUL
    /// separator (`singular\0plural`), contextual entries an EOT prefix
    /// (`context\u{4}key`).
    pub key: String,
    /// Translated variants in catalog order; index 0 is the primary form.
    pub variants: Vec<String>,
}

impl MoEntry {
    /// The default (index 0) translated variant.
    ///
    /// `None` when the stored variant is the empty string, which by
    /// convention means "no translation available".
    pub fn primary(&self) -> Option<&str> {
        self.variant(0)
    }

    /// The translated variant at plural `index`, or `None` when the index
    /// is out of range or the stored variant is empty.
    pub fn variant(&self, index: usize) -> Option<&str> {
        self.variants
            .get(index)
            .map(String::as_str)
            .filter(|variant| !variant.is_empty())
    }
}

/// Plural rule declaration from the `Plural-Forms:` metadata header.
///
/// The expression is stored verbatim and never evaluated; selecting a
/// plural index for a count is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralInfo {
    /// Declared number of plural forms.
    pub nplurals: usize,
    /// The C-like `plural=` expression, e.g. `(n != 1)`.
    pub expression: String,
}

/// Catalog-level headers parsed from the reserved empty-key entry.
///
/// Catalogs carry their own metadata as newline-separated `Key: value`
/// lines in the translation of the empty original string. The entry is
/// optional; a catalog without one has empty metadata, which is not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct CatalogMetadata {
    pub(crate) headers: HashMap<String, String>,
    pub(crate) charset: Option<String>,
    pub(crate) plural_info: Option<PluralInfo>,
}

impl CatalogMetadata {
    /// Looks up a header value by its exact, case-sensitive name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The charset declared in the `Content-Type` header, if any.
    ///
    /// Purely informational: stored strings are served verbatim, never
    /// transcoded.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// The parsed `Plural-Forms` declaration, if present and well-formed.
    pub fn plural_info(&self) -> Option<&PluralInfo> {
        self.plural_info.as_ref()
    }

    /// `true` when the catalog carried no metadata entry (or an empty one).
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
