/*
 * restore.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Fragment restoration: put original fragments back in place of their
//! placeholder tokens.

use crate::config::placeholder_token;
use crate::error::{MaskError, MaskResult};
use crate::table::FragmentTable;

/// Replace every placeholder token in `text` with its original fragment.
///
/// Keys are replayed in table insertion order (rightmost original fragment
/// first), each replacing the first occurrence of its token in the
/// progressively rewritten text. The table is consumed; one table serves
/// exactly one round trip.
///
/// Matching is against the full `FRAGMENT<digits>` token, not the bare
/// digit key. The engine's original JavaScript incarnation matched bare
/// digits, which clobbered incidental digit runs elsewhere in the document;
/// the full-token match cannot.
///
/// With an empty table this is the identity function, so re-running restore
/// on already-restored text is a no-op.
///
/// # Errors
/// [`MaskError::PlaceholderNotFound`] if any table entry's token does not
/// occur in `text`, which means an intermediate processing stage dropped or
/// rewrote a placeholder. No partially restored text is returned.
pub fn restore(text: &str, table: FragmentTable) -> MaskResult<String> {
    let mut restored = text.to_string();

    for (key, fragment) in table.iter() {
        let token = placeholder_token(key);
        match restored.find(&token) {
            Some(pos) => restored.replace_range(pos..pos + token.len(), fragment),
            None => {
                return Err(MaskError::PlaceholderNotFound { token });
            }
        }
    }

    tracing::debug!(fragments = table.len(), "Restored template fragments");

    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_restore_single_token() {
        let mut table = FragmentTable::new();
        table.insert("1234567", "{% print('x') %}");

        let restored = restore("<html>FRAGMENT1234567</html>", table).unwrap();
        assert_eq!(restored, "<html>{% print('x') %}</html>");
    }

    #[test]
    fn test_restore_empty_table_is_identity() {
        let restored = restore("no placeholders here", FragmentTable::new()).unwrap();
        assert_eq!(restored, "no placeholders here");
    }

    #[test]
    fn test_restore_in_insertion_order() {
        // Rightmost fragment first, matching extraction's recording order.
        let mut table = FragmentTable::new();
        table.insert("2222222", "{%2%}");
        table.insert("1111111", "{%1%}");

        let restored = restore("A FRAGMENT1111111 B FRAGMENT2222222 C", table).unwrap();
        assert_eq!(restored, "A {%1%} B {%2%} C");
    }

    #[test]
    fn test_restore_only_first_occurrence_per_key() {
        let mut table = FragmentTable::new();
        table.insert("1234567", "{% x %}");

        let restored = restore("FRAGMENT1234567 and FRAGMENT1234567", table).unwrap();
        assert_eq!(restored, "{% x %} and FRAGMENT1234567");
    }

    #[test]
    fn test_restore_ignores_bare_digit_run() {
        // The key digits alone, without the FRAGMENT prefix, are ordinary
        // document text and must survive untouched.
        let mut table = FragmentTable::new();
        table.insert("1234567", "{% x %}");

        let restored = restore("build 1234567: FRAGMENT1234567", table).unwrap();
        assert_eq!(restored, "build 1234567: {% x %}");
    }

    #[test]
    fn test_missing_placeholder_is_an_error() {
        let mut table = FragmentTable::new();
        table.insert("1234567", "{% x %}");

        let err = restore("the placeholder went missing", table).unwrap_err();
        match err {
            MaskError::PlaceholderNotFound { token } => {
                assert_eq!(token, "FRAGMENT1234567");
            }
            other => panic!("expected PlaceholderNotFound, got {:?}", other),
        }
    }
}
