//! Build script to generate embedded word banks
//!
//! Reads the line-oriented files under `data/` and generates Rust source code
//! with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_list(
        "data/targets.txt",
        &Path::new(&out_dir).join("targets.rs"),
        "TARGETS",
        "Words a round may pick as its hidden target",
    );

    generate_list(
        "data/valid.txt",
        &Path::new(&out_dir).join("valid.rs"),
        "VALID",
        "Dictionary words offered as hints",
    );

    generate_list(
        "data/congrats.txt",
        &Path::new(&out_dir).join("congrats.rs"),
        "CONGRATS",
        "Messages shown when a round is won",
    );

    println!("cargo:rerun-if-changed=data/targets.txt");
    println!("cargo:rerun-if-changed=data/valid.txt");
    println!("cargo:rerun-if-changed=data/congrats.txt");
}

fn generate_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} entries)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for entry in entries {
        // Debug formatting escapes quotes and backslashes in free-form lines
        writeln!(output, "    {entry:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
