/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Engine configuration: the marker symbol pair and placeholder key length.
//!
//! A [`MaskConfig`] is fixed once per engine use and passed explicitly to
//! [`extract`](crate::extract). The defaults match the server-side
//! templating syntax the engine was built for: `{% ... %}` fragments and
//! 7-digit placeholder keys.

use serde::{Deserialize, Serialize};

use crate::error::{MaskError, MaskResult};

/// Default opening marker symbol.
pub const DEFAULT_OPEN_SYMBOL: &str = "{%";

/// Default closing marker symbol.
pub const DEFAULT_CLOSE_SYMBOL: &str = "%}";

/// Default number of digits in a placeholder key.
pub const DEFAULT_KEY_LENGTH: usize = 7;

/// Literal prefix of every placeholder token.
pub const PLACEHOLDER_PREFIX: &str = "FRAGMENT";

/// Build the placeholder token for a key: the literal `FRAGMENT<key>`.
///
/// Extraction writes this exact string into the document and restoration
/// matches against it, so both sides must agree on the shape.
pub fn placeholder_token(key: &str) -> String {
    format!("{}{}", PLACEHOLDER_PREFIX, key)
}

/// One fragment delimiter symbol, either the opening or the closing role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// The literal delimiter text, e.g. `{%`.
    pub symbol: String,
}

impl Marker {
    /// Create a marker from its literal symbol.
    ///
    /// An empty symbol matches at every position and can never delimit
    /// anything; [`MaskConfig::validate`] rejects it before extraction runs.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Byte length of the symbol.
    pub fn len(&self) -> usize {
        self.symbol.len()
    }

    /// Whether the symbol is empty.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// Configuration shared by the extract and restore operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Opening fragment delimiter.
    pub open: Marker,

    /// Closing fragment delimiter.
    pub close: Marker,

    /// Number of digits in each generated placeholder key.
    pub key_length: usize,
}

impl MaskConfig {
    /// Create a configuration with custom marker symbols and the default
    /// key length.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: Marker::new(open),
            close: Marker::new(close),
            key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Override the placeholder key length.
    ///
    /// A length of zero leaves the empty string as the only possible key;
    /// [`MaskConfig::validate`] rejects it before extraction runs.
    pub fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    /// Check that this configuration can drive an extraction.
    ///
    /// # Errors
    /// [`MaskError::UnsupportedInput`] if either marker symbol is empty or
    /// the key length is zero.
    pub fn validate(&self) -> MaskResult<()> {
        if self.open.is_empty() || self.close.is_empty() {
            return Err(MaskError::UnsupportedInput {
                message: "marker symbols must not be empty".to_string(),
            });
        }
        if self.key_length == 0 {
            return Err(MaskError::UnsupportedInput {
                message: "placeholder key length must be at least one digit".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_SYMBOL, DEFAULT_CLOSE_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MaskConfig::default();
        assert_eq!(config.open.symbol, "{%");
        assert_eq!(config.close.symbol, "%}");
        assert_eq!(config.open.len(), 2);
        assert_eq!(config.close.len(), 2);
        assert_eq!(config.key_length, 7);
    }

    #[test]
    fn test_custom_markers() {
        let config = MaskConfig::new("<?", "?>").with_key_length(5);
        assert_eq!(config.open.symbol, "<?");
        assert_eq!(config.close.symbol, "?>");
        assert_eq!(config.key_length, 5);
    }

    #[test]
    fn test_placeholder_token_shape() {
        assert_eq!(placeholder_token("1234567"), "FRAGMENT1234567");
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(MaskConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let config = MaskConfig::new("", "%}");
        assert!(matches!(
            config.validate().unwrap_err(),
            MaskError::UnsupportedInput { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_key_length() {
        let config = MaskConfig::default().with_key_length(0);
        assert!(matches!(
            config.validate().unwrap_err(),
            MaskError::UnsupportedInput { .. }
        ));
    }
}
