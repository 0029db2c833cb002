use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};
use crate::io;
use crate::model::phrase_input::{DEFAULT_COUNT, DEFAULT_SEPARATOR, PhraseInput, checked_count};

/// Seed of the word-drawing generator (32 bytes).
pub type Seed = <ChaCha20Rng as SeedableRng>::Seed;

/// One language's word list plus the generator drawing from it.
///
/// # Responsibilities
/// - Resolve the word-list file as `root/code`
/// - Load the file on first use and keep it for the lifetime of the source
/// - Draw words uniformly, with replacement, and join them into phrases
///
/// # Invariants
/// - `words` is either `None` (not loaded yet) or the full content of the file;
///   once loaded it is never reloaded nor mutated
/// - `rng` is owned by this source only, two sources never share state
///
/// Drawing needs `&mut self`: wrap the source in a `Mutex` to share it
/// between threads.
pub struct WordSource {
	/// Language code, the file name under the root.
	code: String,
	/// Path of the word-list file.
	location: PathBuf,
	/// Cached words, `None` until the first successful load.
	words: Option<Vec<String>>,
	rng: ChaCha20Rng,
}

impl WordSource {
	/// Creates a source for `root/code`.
	///
	/// Without a seed the generator is seeded from the operating system's
	/// secure random source. Nothing is read from disk here.
	///
	/// # Panics
	/// Panics if no seed is given and the operating system's random source
	/// fails. Use [`WordSource::try_new`] to get an error instead.
	pub fn new<P: AsRef<Path>>(root: P, code: &str, seed: Option<Seed>) -> Self {
		let rng = match seed {
			Some(seed) => ChaCha20Rng::from_seed(seed),
			None => ChaCha20Rng::from_os_rng(),
		};
		Self::with_rng(root.as_ref(), code, rng)
	}

	/// Fallible variant of [`WordSource::new`].
	///
	/// # Errors
	/// Returns `EntropyUnavailable` if no seed is given and the operating
	/// system's random source fails.
	pub fn try_new<P: AsRef<Path>>(root: P, code: &str, seed: Option<Seed>) -> Result<Self> {
		let rng = match seed {
			Some(seed) => ChaCha20Rng::from_seed(seed),
			None => ChaCha20Rng::try_from_os_rng()
				.map_err(|err| Error::EntropyUnavailable(err.to_string()))?,
		};
		Ok(Self::with_rng(root.as_ref(), code, rng))
	}

	/// Creates a source whose generator is seeded from a `u64`.
	///
	/// Handy for reproducible demos and tests, not for real passphrases.
	pub fn with_seed_u64<P: AsRef<Path>>(root: P, code: &str, seed: u64) -> Self {
		Self::with_rng(root.as_ref(), code, ChaCha20Rng::seed_from_u64(seed))
	}

	fn with_rng(root: &Path, code: &str, rng: ChaCha20Rng) -> Self {
		Self {
			code: code.to_owned(),
			location: root.join(code),
			words: None,
			rng,
		}
	}

	/// Restarts the generator from `seed`. The loaded words are kept.
	pub fn reseed(&mut self, seed: Seed) {
		self.rng = ChaCha20Rng::from_seed(seed);
	}

	/// Returns the language code.
	pub fn code(&self) -> &str {
		&self.code
	}

	/// Returns the path of the word-list file.
	pub fn location(&self) -> &Path {
		&self.location
	}

	/// Returns true once the word list has been read.
	pub fn is_loaded(&self) -> bool {
		self.words.is_some()
	}

	/// Loads the file if needed. A failed load leaves the source unloaded.
	fn ensure_loaded(&mut self) -> Result<()> {
		if self.words.is_none() {
			let words = io::read_words(&self.location)?;
			debug!("loaded {} words for '{}' from {}", words.len(), self.code, self.location.display());
			self.words = Some(words);
		}
		Ok(())
	}

	/// Returns the word list, reading it from disk on the first call.
	///
	/// # Errors
	/// - `ResourceNotFound` if the file is missing or unreadable
	/// - `DecodeError` if the file is not UTF-8
	pub fn words(&mut self) -> Result<&[String]> {
		self.ensure_loaded()?;
		Ok(self.words.as_deref().unwrap_or_default())
	}

	/// Draws one word uniformly at random.
	///
	/// # Errors
	/// Same as [`WordSource::words`], plus `EmptyWordList` if the file holds no word.
	pub fn pick_one(&mut self) -> Result<String> {
		self.ensure_loaded()?;
		let words = self.words.as_deref().unwrap_or_default();
		let word = words
			.choose(&mut self.rng)
			.ok_or_else(|| Error::EmptyWordList(self.location.clone()))?;
		Ok(word.clone())
	}

	/// Draws `count` words (repeats allowed) and joins them with `separator`.
	///
	/// `count == 0` returns an empty string without touching the file.
	///
	/// # Errors
	/// `InvalidArgument` for a negative count, otherwise the errors of
	/// [`WordSource::pick_one`].
	pub fn generate(&mut self, count: isize, separator: &str) -> Result<String> {
		let count = checked_count(count)?;
		self.draw_phrase(count, separator)
	}

	/// Generates a phrase from a validated [`PhraseInput`].
	pub fn generate_with(&mut self, input: &PhraseInput) -> Result<String> {
		self.draw_phrase(input.count(), input.separator())
	}

	/// Generates six words separated by spaces.
	pub fn generate_default(&mut self) -> Result<String> {
		self.draw_phrase(DEFAULT_COUNT, DEFAULT_SEPARATOR)
	}

	fn draw_phrase(&mut self, count: usize, separator: &str) -> Result<String> {
		let mut phrase = Vec::with_capacity(count);
		for _ in 0..count {
			phrase.push(self.pick_one()?);
		}
		Ok(phrase.join(separator))
	}

	/// Estimated entropy, in bits, of a phrase of `count` words.
	///
	/// Each word contributes `log2(word count)` bits, assuming a well seeded
	/// generator and a list without duplicates.
	///
	/// # Errors
	/// Same as [`WordSource::pick_one`].
	pub fn entropy_bits(&mut self, count: usize) -> Result<f64> {
		let size = self.words()?.len();
		if size == 0 {
			return Err(Error::EmptyWordList(self.location.clone()));
		}
		Ok(count as f64 * (size as f64).log2())
	}
}

impl fmt::Debug for WordSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WordSource")
			.field("code", &self.code)
			.field("location", &self.location)
			.field("loaded", &self.is_loaded())
			.finish_non_exhaustive()
	}
}
