//! Trax marker vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `DecoratorId`, `FactoryId`) and look up spellings via
//! registry tables instead of comparing raw strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no syntax-tree types, no IO, no side effects.
//! - The extractor enforces structure; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use trax_core::lang::decorators::{self, DecoratorId};
//!
//! assert_eq!(decorators::from_str("Data"), Some(DecoratorId::Data));
//! assert_eq!(decorators::as_str(DecoratorId::Data), "Data");
//! ```

pub mod decorators;
pub mod factories;
pub mod registry;
