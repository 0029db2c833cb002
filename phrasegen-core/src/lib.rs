//! Random passphrase generation from language word lists.
//!
//! This crate provides:
//! - Discovery of word lists stored as one file per language code
//! - Lazy loading of each list on first use
//! - Seeded, reproducible word draws joined into phrases
//!
//! ```no_run
//! use phrasegen_core::Registry;
//!
//! let mut registry = Registry::bundled()?;
//! println!("{:?}", registry.supported_languages());
//! println!("{}", registry.get_mut("en")?.generate(8, "+")?);
//! # Ok::<(), phrasegen_core::Error>(())
//! ```

/// Word sources, registry and phrase parameters.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (word-list reading, root discovery).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
pub use io::WORDLIST_DIR_ENV;
pub use model::phrase_input::PhraseInput;
pub use model::registry::Registry;
pub use model::word_source::{Seed, WordSource};
