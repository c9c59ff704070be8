//! Shareable metadata for `trax_core::lang` registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.

/// Describe who writes a vocabulary item.
///
/// ## Examples
/// ```rust
/// use trax_core::lang::registry::Origin;
///
/// let o = Origin::Authored;
/// assert_eq!(format!("{o:?}"), "Authored");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Written by users in source units and recognized by the extractor.
    Authored,
    /// Emitted by the generator and resolved by the Trax runtime.
    Synthesized,
}

/// Shared metadata shape for registry vocabulary items.
///
/// ## Notes
/// - `description` is intentionally mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
    pub origin: Origin,
}
