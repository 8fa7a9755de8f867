/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for fragment extraction and restoration.

use thiserror::Error;

/// Errors that can occur during fragment masking operations.
///
/// Every variant is a synchronous failure of the whole call; the engine
/// never returns partially transformed text alongside an error.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The input cannot be processed as a complete in-memory text buffer:
    /// raw bytes that are not UTF-8, an empty marker symbol, a zero key
    /// length, or a document with more fragments than the configured key
    /// length can address.
    #[error("Unsupported input: {message}")]
    UnsupportedInput { message: String },

    /// An opening marker has no closing marker after it, or a fragment
    /// opens inside another fragment. The engine only accepts well-paired,
    /// non-nested marker sequences.
    #[error("Unbalanced markers at byte {offset}: {message}")]
    UnbalancedMarkers { offset: usize, message: String },

    /// A table entry's placeholder token does not occur in the text being
    /// restored. The text was altered between extraction and restoration in
    /// a way that lost the placeholder.
    #[error("Placeholder not found during restore: {token}")]
    PlaceholderNotFound { token: String },
}

/// Result type for fragment masking operations.
pub type MaskResult<T> = Result<T, MaskError>;
