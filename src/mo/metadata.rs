//! Parsing of the catalog's metadata entry.
//!
//! The translation of the reserved empty original string is a block of
//! newline-separated `Key: value` lines, e.g.:
//!
//! ```text
//! Project-Id-Version: demo 1.0
//! Content-Type: text/plain; charset=UTF-8
//! Plural-Forms: nplurals=2; plural=(n != 1);
//! ```
//!
//! Parsing is opportunistic: malformed lines are skipped, absent headers
//! leave their derived fields unset, and nothing here can fail a load.

use std::collections::HashMap;

use log::{debug, trace};

use super::models::{CatalogMetadata, PluralInfo};

/// Parses the metadata block stored as the empty key's translation.
pub(crate) fn parse(raw: &str) -> CatalogMetadata {
    let mut headers = HashMap::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(':') {
            Some((name, value)) => {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
            None => trace!("Skipping malformed metadata line: {:?}", line),
        }
    }

    let charset = headers
        .get("Content-Type")
        .and_then(|value| parameter(value, "charset"));
    let plural_info = headers
        .get("Plural-Forms")
        .and_then(|value| parse_plural_forms(value));
    debug!(
        "Parsed {} metadata headers, charset: {:?}",
        headers.len(),
        charset
    );

    CatalogMetadata {
        headers,
        charset,
        plural_info,
    }
}

/// Extracts a `name=value` parameter from a semicolon-separated header
/// value such as `text/plain; charset=UTF-8`.
fn parameter(value: &str, name: &str) -> Option<String> {
    value.split(';').find_map(|segment| {
        segment
            .trim()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|parameter| parameter.trim().to_string())
    })
}

/// Parses a `Plural-Forms` value of the shape
/// `nplurals=N; plural=EXPRESSION;`.
///
/// Both parts must be present and the count must be numeric; otherwise
/// the whole declaration is treated as absent.
fn parse_plural_forms(value: &str) -> Option<PluralInfo> {
    let mut nplurals = None;
    let mut expression = None;
    for segment in value.split(';') {
        let segment = segment.trim();
        if let Some(count) = segment.strip_prefix("nplurals=") {
            nplurals = count.trim().parse::<usize>().ok();
        } else if let Some(rule) = segment.strip_prefix("plural=") {
            expression = Some(rule.trim().to_string());
        }
    }
    Some(PluralInfo {
        nplurals: nplurals?,
        expression: expression?,
    })
}
