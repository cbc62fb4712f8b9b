//! Build script to embed the sample dictionary
//!
//! Turns `data/sample_words.txt` into a const slice so the CLI and tests can
//! run without an external word list.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SAMPLE_PATH: &str = "data/sample_words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        SAMPLE_PATH,
        &Path::new(&out_dir).join("sample_words.rs"),
        "SAMPLE_WORDS",
        "Sample dictionary, sorted lowercase words",
    );

    println!("cargo:rerun-if-changed={SAMPLE_PATH}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(
        output,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    )
    .unwrap();
}
