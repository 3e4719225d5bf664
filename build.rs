//! Build script to embed the default word corpus
//!
//! Reads `data/words.txt` and generates a const array of lowercase words.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const CORPUS: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content =
        fs::read_to_string(CORPUS).unwrap_or_else(|e| panic!("Failed to read {CORPUS}: {e}"));

    // Skip blank lines and comments, normalize case
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    let output_path = Path::new(&out_dir).join("words.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// Default word corpus ({} words)", words.len()).unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    println!("cargo:rerun-if-changed={CORPUS}");
}
