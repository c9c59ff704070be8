#![forbid(unsafe_code)]
//! trax: source-to-source rewriter for TypeScript `@Data` classes
//!
//! A unit that imports the `Data` marker and decorates classes with `@Data` is rewritten so each
//! primitive property gets a hidden backing field and a generated accessor wired to a runtime
//! factory. Everything else in the unit is preserved byte for byte.
//!
//! - **frontend**: TypeScript parsing (tree-sitter) and extraction of the declaration list
//! - **backend**: text splicing driven by the declaration list
//! - **cli**: the `trax` binary
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Example
//!
//! ```
//! let source = "import { Data } from \"./trax\";\n@Data class A {\n    x: string;\n}\n";
//! let output = trax::generate(source, "a.ts").unwrap();
//! assert!(output.starts_with("import { ΔfStr, Δp } from"));
//! assert!(output.contains("ΔΔx: string; @Δp(ΔfStr) x: string;"));
//! ```

pub mod backend;
pub mod cli;
pub mod frontend;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::diagnostics::TransformError;

pub use backend::{generate, generate_from};
pub use frontend::{extract, extract_tree};
