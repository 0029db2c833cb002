use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::io;
use crate::model::word_source::WordSource;

/// Every word list found under one root directory, indexed by language code.
///
/// # Responsibilities
/// - Discover the language codes present under the root
/// - Own one [`WordSource`] per code, each with its own securely seeded generator
/// - Look sources up by code
///
/// # Invariants
/// - The set of codes is fixed at construction
/// - `codes` and the keys of `sources` hold exactly the same values
#[derive(Debug)]
pub struct Registry {
	root: PathBuf,
	codes: Vec<String>,
	sources: HashMap<String, WordSource>,
}

impl Registry {
	/// Creates a registry by discovering the word lists under `root`.
	///
	/// # Parameters
	/// - `root`: directory holding one file per language code. When `None`,
	///   `PHRASEGEN_WORDLIST_DIR` is used if set, else the bundled lists.
	///
	/// # Behavior
	/// - Every regular file directly under the root becomes a language code
	/// - Subdirectories and hidden files are ignored
	/// - Files are not read here; a bad file fails on first generation
	///
	/// # Errors
	/// - `RootNotFound` if the root does not exist or is not a directory
	/// - `EntropyUnavailable` if a generator cannot be seeded
	pub fn new<P: AsRef<Path>>(root: Option<P>) -> Result<Self> {
		let root = io::resolve_root(root.as_ref().map(|path| path.as_ref()));
		let codes = io::list_codes(&root)?;

		let mut sources = HashMap::with_capacity(codes.len());
		for code in &codes {
			debug!("registering word list '{code}'");
			sources.insert(code.to_owned(), WordSource::try_new(&root, code, None)?);
		}
		info!("found {} word lists under {}", codes.len(), root.display());

		Ok(Self { root, codes, sources })
	}

	/// Creates a registry over the default root.
	pub fn bundled() -> Result<Self> {
		Self::new(None::<&Path>)
	}

	/// Returns the root directory the codes were discovered in.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Returns the supported language codes, sorted.
	pub fn supported_languages(&self) -> &[String] {
		&self.codes
	}

	/// Returns true if `code` has a word list.
	pub fn contains(&self, code: &str) -> bool {
		self.sources.contains_key(code)
	}

	/// Number of supported languages.
	pub fn len(&self) -> usize {
		self.codes.len()
	}

	/// Returns true if no word list was found.
	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	/// Returns the source registered under `code`.
	///
	/// # Errors
	/// Returns `UnsupportedLanguage` for an unknown code.
	pub fn get(&self, code: &str) -> Result<&WordSource> {
		self.sources
			.get(code)
			.ok_or_else(|| Error::UnsupportedLanguage(code.to_owned()))
	}

	/// Mutable variant of [`Registry::get`], needed to draw words.
	pub fn get_mut(&mut self, code: &str) -> Result<&mut WordSource> {
		self.sources
			.get_mut(code)
			.ok_or_else(|| Error::UnsupportedLanguage(code.to_owned()))
	}

	/// Generates a phrase in the language `code`.
	pub fn generate(&mut self, code: &str, count: isize, separator: &str) -> Result<String> {
		self.get_mut(code)?.generate(count, separator)
	}
}
