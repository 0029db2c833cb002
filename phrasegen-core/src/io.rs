use std::path::{Path, PathBuf};
use std::{env, fs};

use log::{debug, warn};

use crate::error::{Error, Result};

/// Environment variable overriding the default word-list root.
pub const WORDLIST_DIR_ENV: &str = "PHRASEGEN_WORDLIST_DIR";

/// Word lists shipped with this crate, one file per language code.
const BUNDLED_WORDLIST_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlist");

/// Reads a word-list file and returns its words in file order.
///
/// - Reads the entire file into memory
/// - Splits on `\n`, a trailing `\r` is stripped from each line
/// - Empty lines (including the one after a final newline) are dropped
pub(crate) fn read_words<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let bytes = fs::read(path).map_err(|source| Error::ResourceNotFound {
		path: path.to_owned(),
		source,
	})?;
	let contents = String::from_utf8(bytes).map_err(|source| Error::DecodeError {
		path: path.to_owned(),
		source,
	})?;

	Ok(split_words(&contents))
}

/// Splits raw word-list text into words.
pub(crate) fn split_words(contents: &str) -> Vec<String> {
	contents
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line))
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_owned()
	}
}

/// Picks the word-list root.
///
/// Order: the explicit path, then `PHRASEGEN_WORDLIST_DIR`, then the
/// bundled `wordlist/` directory of this crate.
pub(crate) fn resolve_root(explicit: Option<&Path>) -> PathBuf {
	if let Some(path) = explicit {
		return normalize_folder(path);
	}
	match env::var_os(WORDLIST_DIR_ENV) {
		Some(dir) if !dir.is_empty() => {
			debug!("word-list root taken from {WORDLIST_DIR_ENV}");
			normalize_folder(Path::new(&dir))
		}
		_ => PathBuf::from(BUNDLED_WORDLIST_DIR),
	}
}

/// Lists the language codes available under `dir`.
///
/// Returns file names only (no paths), sorted. Subdirectories and hidden
/// entries are skipped.
pub(crate) fn list_codes<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
	let dir = dir.as_ref();
	if !dir.is_dir() {
		return Err(Error::RootNotFound(dir.to_owned()));
	}

	let entries = fs::read_dir(dir).map_err(|_| Error::RootNotFound(dir.to_owned()))?;
	let mut codes = Vec::new();

	for entry in entries {
		let entry = entry.map_err(|_| Error::RootNotFound(dir.to_owned()))?;
		let path = entry.path();
		let name = match entry.file_name().into_string() {
			Ok(name) => name,
			Err(raw) => {
				warn!("skipping entry with non UTF-8 name {raw:?} in word-list root");
				continue;
			}
		};

		if name.starts_with('.') {
			debug!("skipping hidden entry {name} in word-list root");
			continue;
		}
		if !path.is_file() {
			warn!("skipping non-file entry {} in word-list root", path.display());
			continue;
		}
		codes.push(name);
	}

	codes.sort();
	Ok(codes)
}
