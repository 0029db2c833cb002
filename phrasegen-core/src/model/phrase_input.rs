use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of words in a phrase.
pub const DEFAULT_COUNT: usize = 6;

/// Default word separator.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Input parameters for generating a phrase.
///
/// Holds how many words to draw and how to join them. Missing fields fall
/// back to their defaults when deserialized, so a host can embed this in
/// its own configuration file.
///
/// # Invariants
/// - `count` is never negative (enforced by the type and by `set_count`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PhraseInput {
	/// Number of words to draw.
	count: usize,

	/// String placed between two words.
	separator: String,
}

impl Default for PhraseInput {
	fn default() -> Self {
		Self {
			count: DEFAULT_COUNT,
			separator: DEFAULT_SEPARATOR.to_owned(),
		}
	}
}

impl PhraseInput {
	/// Creates an input from a signed word count and a separator.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `count` is negative.
	pub fn new(count: isize, separator: &str) -> Result<Self> {
		let mut input = Self::default();
		input.set_count(count)?;
		input.set_separator(separator);
		Ok(input)
	}

	/// Returns the number of words to draw.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Returns the separator.
	pub fn separator(&self) -> &str {
		&self.separator
	}

	/// Sets the number of words.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `count` is negative.
	pub fn set_count(&mut self, count: isize) -> Result<()> {
		self.count = checked_count(count)?;
		Ok(())
	}

	/// Sets the separator.
	pub fn set_separator(&mut self, separator: &str) {
		self.separator = separator.to_owned();
	}
}

/// Converts a signed word count, rejecting negative values.
pub(crate) fn checked_count(count: isize) -> Result<usize> {
	usize::try_from(count)
		.map_err(|_| Error::InvalidArgument(format!("word count must be >= 0, got {count}")))
}
