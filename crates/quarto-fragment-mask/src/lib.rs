/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template fragment masking engine.
//!
//! Source documents can carry embedded templating fragments (`{% ... %}` by
//! default) that downstream text-processing stages (parsers, linters,
//! minifiers) do not understand and would reject. This crate temporarily
//! removes those fragments and puts them back afterwards:
//!
//! - [`extract`] replaces every fragment with a unique placeholder token of
//!   the form `FRAGMENT<digits>` and records the token → fragment
//!   association in a [`FragmentTable`].
//! - [`restore`] reverses the substitution, reproducing the original
//!   document byte-for-byte.
//!
//! ```text
//! <html>{% print('exampleText') %}</html>
//!     ↓ extract
//! <html>FRAGMENT4821733</html>
//!     ↓ downstream processing stages
//!     ↓ restore
//! <html>{% print('exampleText') %}</html>
//! ```
//!
//! # Architecture
//!
//! The engine is a pair of plain functions sharing an explicit
//! [`MaskConfig`] value; there is no process-wide state. Each `extract` call
//! builds its own [`FragmentTable`], which the caller threads into the
//! matching `restore` call. `restore` consumes the table by value, so a
//! table cannot outlive its round trip or leak across documents, and two
//! concurrent extractions can never interfere.
//!
//! Fragments must be well-paired and non-nested. The pairing scan rejects an
//! opening marker with no closing marker after it, and an opening marker
//! nested inside another fragment, with [`MaskError::UnbalancedMarkers`].
//!
//! # Example
//!
//! ```ignore
//! use quarto_fragment_mask::{extract, restore, MaskConfig};
//!
//! let config = MaskConfig::default();
//! let masked = extract("<html>{% print('x') %}</html>", &config)?;
//!
//! // ... run masked.text through parser/linter stages ...
//!
//! let original = restore(&masked.text, masked.table)?;
//! assert_eq!(original, "<html>{% print('x') %}</html>");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod restore;
pub mod table;

// Re-export main types at crate root
pub use config::{MaskConfig, Marker, PLACEHOLDER_PREFIX, placeholder_token};
pub use error::{MaskError, MaskResult};
pub use extract::{MaskedText, extract, extract_bytes};
pub use restore::restore;
pub use table::FragmentTable;
