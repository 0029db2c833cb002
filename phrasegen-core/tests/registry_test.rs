use std::collections::HashSet;
use std::fs;
use std::path::Path;

use phrasegen_core::{Error, PhraseInput, Registry, WordSource};
use tempfile::TempDir;

fn setup_root(lists: &[(&str, &str)]) -> TempDir {
	let dir = tempfile::tempdir().unwrap();
	for (code, contents) in lists {
		fs::write(dir.path().join(code), contents).unwrap();
	}
	dir
}

#[test]
fn seeded_registry_phrase_is_pinned() {
	let dir = setup_root(&[("en", "sun\nmoon\nstar")]);
	let mut registry = Registry::new(Some(dir.path())).unwrap();

	let source = registry.get_mut("en").unwrap();
	source.reseed([0u8; 32]);
	assert_eq!(source.generate(3, "-").unwrap(), "star-moon-star");
}

#[test]
fn phrases_have_count_words_from_the_list() {
	let dir = setup_root(&[("en", "alpha\nbravo\ncharlie\ndelta\necho\n")]);
	let mut registry = Registry::new(Some(dir.path())).unwrap();
	let source = registry.get_mut("en").unwrap();
	let words: HashSet<String> = source.words().unwrap().iter().cloned().collect();

	for count in [1, 2, 6, 17] {
		for separator in [" ", "-", "::"] {
			let phrase = source.generate(count, separator).unwrap();
			let parts: Vec<&str> = phrase.split(separator).collect();
			assert_eq!(parts.len(), count as usize);
			assert!(parts.iter().all(|part| words.contains(*part)), "{phrase}");
		}
	}
}

#[test]
fn zero_words_is_empty_for_any_separator() {
	let dir = setup_root(&[("en", "a\nb")]);
	let mut registry = Registry::new(Some(dir.path())).unwrap();
	for separator in ["", " ", "+"] {
		assert_eq!(registry.generate("en", 0, separator).unwrap(), "");
	}
}

#[test]
fn negative_count_fails() {
	let dir = setup_root(&[("en", "a\nb")]);
	let mut registry = Registry::new(Some(dir.path())).unwrap();
	assert!(matches!(registry.generate("en", -1, " "), Err(Error::InvalidArgument(_))));
}

#[test]
fn same_seed_same_phrases() {
	let dir = setup_root(&[("en", "a\nb\nc\nd\ne\nf\ng\nh")]);
	let seed = [42u8; 32];
	let mut first = WordSource::new(dir.path(), "en", Some(seed));
	let mut second = WordSource::new(dir.path(), "en", Some(seed));

	for count in [3, 0, 8, 1] {
		assert_eq!(first.generate(count, "-").unwrap(), second.generate(count, "-").unwrap());
	}
	assert_eq!(first.pick_one().unwrap(), second.pick_one().unwrap());
}

#[test]
fn unseeded_sources_differ() {
	let words: Vec<String> = (0..256).map(|i| format!("w{i}")).collect();
	let list = words.join("\n");
	let dir = setup_root(&[("en", list.as_str())]);
	let mut first = WordSource::new(dir.path(), "en", None);
	let mut second = WordSource::new(dir.path(), "en", None);

	assert_ne!(first.generate(32, " ").unwrap(), second.generate(32, " ").unwrap());
}

#[test]
fn supported_languages_match_root_entries() {
	let dir = setup_root(&[("en", "a"), ("ja", "b"), ("zh_cn", "c"), ("cs", "d")]);
	let registry = Registry::new(Some(dir.path())).unwrap();

	let codes: HashSet<&str> = registry.supported_languages().iter().map(String::as_str).collect();
	assert_eq!(codes, HashSet::from(["en", "ja", "zh_cn", "cs"]));
	assert_eq!(registry.supported_languages().len(), 4);

	for code in ["de", "EN", ""] {
		assert!(matches!(registry.get(code), Err(Error::UnsupportedLanguage(_))));
	}
}

#[test]
fn codes_are_fixed_after_construction() {
	let dir = setup_root(&[("en", "a")]);
	let registry = Registry::new(Some(dir.path())).unwrap();
	fs::write(dir.path().join("fr"), "b").unwrap();

	assert_eq!(registry.supported_languages(), ["en"]);
	assert!(!registry.contains("fr"));
}

#[test]
fn bad_file_fails_lazily() {
	let dir = setup_root(&[("en", "a\nb")]);
	fs::write(dir.path().join("xx"), [0xffu8, 0xfe, 0x0a]).unwrap();

	let mut registry = Registry::new(Some(dir.path())).unwrap();
	assert!(registry.contains("xx"));
	assert!(matches!(registry.generate("xx", 2, " "), Err(Error::DecodeError { .. })));
	assert_eq!(registry.generate("en", 2, " ").unwrap().split(' ').count(), 2);
}

#[test]
fn bundled_lists_generate_phrases() {
	let mut registry = Registry::new(Some(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/wordlist")))).unwrap();
	assert_eq!(registry.len(), 10);
	for code in ["cs", "en", "es", "fr", "it", "ja", "ko", "pt", "zh_cn", "zh_tw"] {
		assert!(registry.contains(code), "missing bundled list {code}");
	}

	let input = PhraseInput::default();
	let codes = registry.supported_languages().to_vec();
	for code in codes {
		let source = registry.get_mut(&code).unwrap();
		let phrase = source.generate_with(&input).unwrap();
		assert_eq!(phrase.split(' ').count(), 6);
		assert_eq!(source.words().unwrap().len(), 2048, "{code}");
		assert!(source.entropy_bits(6).unwrap() >= 66.0);
	}
}

#[test]
fn phrase_input_from_json() {
	let input: PhraseInput = serde_json::from_str(r#"{ "count": 4 }"#).unwrap();
	assert_eq!(input.count(), 4);
	assert_eq!(input.separator(), " ");

	let input: PhraseInput = serde_json::from_str(r#"{ "separator": "+" }"#).unwrap();
	assert_eq!(input.count(), 6);
	assert_eq!(input.separator(), "+");

	assert!(serde_json::from_str::<PhraseInput>(r#"{ "count": -2 }"#).is_err());
}
