//! Trax Frontend
//!
//! This module contains all frontend components:
//! - `syntax`: TypeScript concrete syntax tree (tree-sitter adapter)
//! - `ast`: the declaration list model (import directive, Data objects, properties, types)
//! - `extractor`: syntax tree → declaration list
//! - `diagnostics`: fatal transformation errors and report rendering

pub mod ast;
pub mod diagnostics;
pub mod extractor;
pub mod syntax;

pub use extractor::{extract, extract_tree};
