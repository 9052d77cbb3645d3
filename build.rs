//! Build script to generate the embedded word list
//!
//! Reads `data/words.txt`, checks every entry is a five-letter lowercase word with
//! no repeats, and generates Rust source code with a const array.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INPUT: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");

    let content =
        fs::read_to_string(INPUT).unwrap_or_else(|e| panic!("Failed to read {INPUT}: {e}"));
    let words = checked_words(&content);

    let source = render_word_list(
        "WORDS",
        "Default dictionary: valid guesses and candidate answers",
        &words,
    );
    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={INPUT}");
}

/// Collect the non-blank lines, failing the build on a malformed or repeated word
fn checked_words(content: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{INPUT}:{}: {word:?} is not a five-letter lowercase word",
            i + 1
        );
        assert!(seen.insert(word), "{INPUT}:{}: {word:?} is repeated", i + 1);
        words.push(word);
    }

    assert!(!words.is_empty(), "{INPUT} holds no words");
    words
}

fn render_word_list(const_name: &str, doc_comment: &str, words: &[&str]) -> String {
    let mut out = format!(
        "// Generated from {INPUT}\n\n/// {doc_comment}\npub const {const_name}: &[&str] = &[\n"
    );
    for word in words {
        // Writing to a String cannot fail
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = write!(
        out,
        "];\n\n/// Number of words in {const_name}\npub const {const_name}_COUNT: usize = {};\n",
        words.len()
    );
    out
}
