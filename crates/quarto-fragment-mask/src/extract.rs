/*
 * extract.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Fragment extraction: replace delimited fragments with placeholder tokens.
//!
//! Extraction runs in two passes. A left-to-right pairing scan first maps
//! every opening marker to the closing marker that ends its fragment,
//! failing fast on unclosed or nested fragments. The replacement pass then
//! walks the paired spans right-to-left, so the byte offsets of spans not
//! yet rewritten stay valid, and substitutes each span with a freshly
//! generated `FRAGMENT<digits>` token. Processing rightmost-first also
//! fixes the table's insertion order, which restoration replays.

use rand::Rng;

use crate::config::{MaskConfig, placeholder_token};
use crate::error::{MaskError, MaskResult};
use crate::table::FragmentTable;

/// Output of one extraction: the placeholder-bearing text and the table
/// needed to reverse the substitution.
///
/// The caller must retain the table unchanged and pass it to the matching
/// [`restore`](crate::restore) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    /// The document with every fragment replaced by its placeholder token.
    pub text: String,

    /// Token key → original fragment text, rightmost fragment first.
    pub table: FragmentTable,
}

/// Extract every `{% ... %}` fragment from `source`, replacing each with a
/// unique placeholder token.
///
/// Returns the transformed text and the per-call [`FragmentTable`]. The
/// input is never mutated. A document with no opening markers comes back
/// unchanged with an empty table.
///
/// # Errors
/// [`MaskError::UnbalancedMarkers`] if an opening marker has no closing
/// marker after it, or if a fragment opens inside another fragment.
/// [`MaskError::UnsupportedInput`] if the configuration fails
/// [`MaskConfig::validate`] or the document carries more fragments than the
/// configured key length can address. No output is produced for such
/// documents.
pub fn extract(source: &str, config: &MaskConfig) -> MaskResult<MaskedText> {
    config.validate()?;

    let spans = pair_marker_spans(source, config)?;
    let keyspace = keyspace_size(config.key_length);
    if spans.len() > keyspace {
        return Err(MaskError::UnsupportedInput {
            message: format!(
                "document has {} fragments but {}-digit keys can only address {}",
                spans.len(),
                config.key_length,
                keyspace
            ),
        });
    }

    let mut text = source.to_string();
    let mut table = FragmentTable::new();
    let mut rng = rand::rng();

    for &(start, end) in spans.iter().rev() {
        let key = generate_key(&mut rng, config.key_length, &table);
        let token = placeholder_token(&key);
        table.insert(key, &text[start..end]);
        text.replace_range(start..end, &token);
    }

    tracing::debug!(fragments = table.len(), "Masked template fragments");

    Ok(MaskedText { text, table })
}

/// Extract fragments from a raw byte buffer.
///
/// The engine only operates on complete in-memory UTF-8 text; adapters that
/// hand over raw file contents go through this entry point so that anything
/// else is rejected up front rather than half-processed.
///
/// # Errors
/// [`MaskError::UnsupportedInput`] if the buffer is not valid UTF-8, plus
/// everything [`extract`] can return.
pub fn extract_bytes(bytes: &[u8], config: &MaskConfig) -> MaskResult<MaskedText> {
    let source = std::str::from_utf8(bytes).map_err(|e| MaskError::UnsupportedInput {
        message: format!("expected a complete UTF-8 text buffer: {}", e),
    })?;
    extract(source, config)
}

/// Pair every opening marker with the closing marker that ends its
/// fragment, left to right.
///
/// Returns `(start, end)` byte spans covering each fragment inclusive of
/// both delimiters. A closing marker outside any fragment is plain text and
/// is ignored; only an unclosed or nested opening marker is an error.
fn pair_marker_spans(source: &str, config: &MaskConfig) -> MaskResult<Vec<(usize, usize)>> {
    let open = config.open.symbol.as_str();
    let close = config.close.symbol.as_str();

    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = source[cursor..].find(open) {
        let start = cursor + rel;
        let body = start + open.len();

        let close_rel =
            source[body..]
                .find(close)
                .ok_or_else(|| MaskError::UnbalancedMarkers {
                    offset: start,
                    message: format!("opening marker `{}` is never closed", open),
                })?;

        // A second opening marker before the close means the input is
        // nested or interleaved, which the engine does not support.
        if let Some(inner) = source[body..body + close_rel].find(open) {
            return Err(MaskError::UnbalancedMarkers {
                offset: body + inner,
                message: format!("opening marker `{}` inside an unclosed fragment", open),
            });
        }

        let end = body + close_rel + close.len();
        spans.push((start, end));
        cursor = end;
    }

    Ok(spans)
}

/// Number of distinct keys a `key_length`-digit key can express.
///
/// Saturates for lengths whose keyspace exceeds `usize`.
fn keyspace_size(key_length: usize) -> usize {
    let Ok(exp) = u32::try_from(key_length) else {
        return usize::MAX;
    };
    10usize.checked_pow(exp).unwrap_or(usize::MAX)
}

/// Generate a placeholder key: `length` decimal digits, collision-checked
/// against the keys already recorded in `table`.
///
/// Collisions are retried internally and never surfaced. Random retries are
/// bounded by the table size; if they all collide, a sequential scan picks
/// the first free key, which must exist among `table.len() + 1` candidates
/// because extraction has already checked that the table fits the keyspace.
/// Uniqueness is scoped to one table; separate extractions may repeat keys.
fn generate_key(rng: &mut impl Rng, length: usize, table: &FragmentTable) -> String {
    for _ in 0..2 * table.len() + 8 {
        let key: String = (0..length)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();
        if !table.contains_key(&key) {
            return key;
        }
    }

    (0..=table.len())
        .map(|n| format!("{:0length$}", n))
        .find(|key| !table.contains_key(key))
        .expect("a free key exists within table.len() + 1 sequential candidates")
}
