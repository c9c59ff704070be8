//! trax backend
//!
//! Turns a declaration list plus the original text into the transformed text.
//!
//! ## Module Organization
//!
//! - `generator.rs` - Body and header passes over the source unit
//! - `splicer.rs` - Offset-tracking string buffer the passes edit
//! - `symbols.rs` - Ordered, deduplicated set of runtime symbols to import

pub mod generator;
pub mod splicer;
pub mod symbols;

pub use generator::{generate, generate_from};
pub use splicer::Splicer;
pub use symbols::RequiredSymbols;
