use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by word-list discovery, loading and phrase generation.
///
/// None of these are transient: they describe a misconfigured root,
/// a bad word-list file or an invalid argument, so callers get them
/// immediately and nothing is retried internally.
#[derive(Error, Debug)]
pub enum Error {
	/// The registry root does not exist or is not a directory.
	#[error("word-list root not found: {}", .0.display())]
	RootNotFound(PathBuf),

	/// No word list was discovered for the requested code.
	#[error("unsupported language: {0}")]
	UnsupportedLanguage(String),

	/// The word-list file is missing or could not be read.
	#[error("word list {} could not be read: {source}", .path.display())]
	ResourceNotFound {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The word-list file is not valid UTF-8.
	#[error("word list {} is not valid UTF-8: {source}", .path.display())]
	DecodeError {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	/// The word list loaded fine but holds no usable words.
	#[error("word list {} is empty", .0.display())]
	EmptyWordList(PathBuf),

	/// The operating system's random source could not seed a generator.
	#[error("secure random source unavailable: {0}")]
	EntropyUnavailable(String),

	/// A caller-supplied argument is out of range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
