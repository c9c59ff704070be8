//! Golden snapshot tests for the generator
//!
//! These tests transform `.ts` input files and compare the output against
//! stored snapshots. This ensures output changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

/// Transform a unit, failing the test on any error
fn transform(name: &str, source: &str) -> String {
    trax::generate(source, name).unwrap_or_else(|e| panic!("{name}: {e}"))
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.ts", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_basic_data_codegen() {
    let source = load_test_file("basic_data");
    let output = transform("basic_data.ts", &source);
    insta::assert_snapshot!("basic_data", output);
}

#[test]
fn test_defaults_and_references_codegen() {
    let source = load_test_file("defaults_and_references");
    let output = transform("defaults_and_references.ts", &source);
    insta::assert_snapshot!("defaults_and_references", output);
}

#[test]
fn test_multiple_objects_codegen() {
    let source = load_test_file("multiple_objects");
    let output = transform("multiple_objects.ts", &source);
    insta::assert_snapshot!("multiple_objects", output);
}

#[test]
fn test_unicode_offsets_codegen() {
    let source = load_test_file("unicode_offsets");
    let output = transform("unicode_offsets.ts", &source);
    insta::assert_snapshot!("unicode_offsets", output);
}
