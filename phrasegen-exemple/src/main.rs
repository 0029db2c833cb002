use log::info;
use phrasegen_core::{PhraseInput, Registry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Discover every word list under the bundled "wordlist" directory
    // (or PHRASEGEN_WORDLIST_DIR when it is set)
    let mut registry = Registry::bundled()?;
    info!("word lists loaded from {}", registry.root().display());

    println!("Supported languages: {}", registry.supported_languages().join(", "));

    // Six words separated by spaces, for each language
    let codes = registry.supported_languages().to_vec();
    for code in &codes {
        let source = registry.get_mut(code)?;
        println!("{code}: {}", source.generate_default()?);
    }

    // Phrase parameters can be set once and reused
    let mut input = PhraseInput::default();
    input.set_count(8)?;
    input.set_separator("+");

    // Negative word counts are rejected
    match input.set_count(-1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    if registry.contains("en") {
        let english = registry.get_mut("en")?;
        println!("Generated phrase: {}", english.generate_with(&input)?);
        println!("Entropy of 8 words: {:.1} bits", english.entropy_bits(8)?);

        // A fixed seed always gives the same phrase
        english.reseed([7u8; 32]);
        let first = english.generate(4, "-")?;
        english.reseed([7u8; 32]);
        println!("Seeded phrase: {first} (repeatable: {})", first == english.generate(4, "-")?);
    }

    // Unknown codes are reported as unsupported
    match registry.get("tlh") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
