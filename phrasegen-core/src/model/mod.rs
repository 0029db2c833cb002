//! Top-level module for the passphrase generation system.
//!
//! This module provides:
//! - Per-language word lists loaded on demand (`WordSource`)
//! - Discovery of every word list under a root directory (`Registry`)
//! - Phrase configuration (`PhraseInput`)

/// Word list of one language and the seeded generator drawing from it.
///
/// Handles lazy loading, uniform word draws and phrase assembly.
pub mod word_source;

/// Directory-backed set of word sources indexed by language code.
pub mod registry;

/// Phrase parameters: word count and separator.
pub mod phrase_input;
