//! errors.rs - Custom error types for the wordshield-core library.
//!
//! This module defines a structured error enum for the library,
//! providing specific, actionable error types that can be handled
//! programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

use wordshield_automata::BuildError;

/// This enum represents all possible error types in the
/// `wordshield-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library
/// that new variants may be added in future versions. This prevents
/// them from matching all variants exhaustively, thus avoiding breaking
/// changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordshieldError {
    /// Structural build failure: the only error the detection core
    /// itself can emit, from build or reload.
    #[error("failed to build automaton: {0}")]
    Build(#[from] BuildError),

    #[error("failed to parse dictionary '{source_name}': {message}")]
    DictionaryParse {
        source_name: String,
        message: String,
    },

    #[error("dictionary request to '{url}' returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("an unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
