//! Provide the canonical marker vocabulary shared by the Trax rewriter and its tooling.
//!
//! The rewriter recognizes a handful of fixed spellings (the `@Data` marker, the `ref` shallow
//! reference marker) and synthesizes another handful (`@ΔD()`, `Δp`, one factory per primitive
//! kind). Keeping them in one registry avoids stringly-typed comparisons scattered across the
//! extractor and the generator.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no syntax-tree types.
//! - Fatal user-facing messages live in [`errors`] so diagnostics and tests stay aligned.

pub mod errors;
pub mod lang;

/// Represent a primitive property type that participates in code generation.
///
/// Only these kinds can be inferred from a literal default value and only these kinds receive a
/// synthesized companion declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
}

impl PrimitiveKind {
    /// All primitive kinds, in registry order.
    pub const ALL: [PrimitiveKind; 3] = [PrimitiveKind::String, PrimitiveKind::Number, PrimitiveKind::Boolean];

    /// Resolve a TypeScript predefined type keyword (`string`, `number`, `boolean`).
    ///
    /// ## Returns
    /// - `None` for any other keyword (`any`, `void`, `unknown`, ...).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(PrimitiveKind::String),
            "number" => Some(PrimitiveKind::Number),
            "boolean" => Some(PrimitiveKind::Boolean),
            _ => None,
        }
    }

    /// Return the TypeScript keyword spelling used when restating a declaration.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_keyword(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_non_primitive_keywords_rejected() {
        assert_eq!(PrimitiveKind::from_keyword("any"), None);
        assert_eq!(PrimitiveKind::from_keyword("String"), None);
        assert_eq!(PrimitiveKind::from_keyword(""), None);
    }

    #[test]
    fn test_display_matches_keyword() {
        assert_eq!(PrimitiveKind::Boolean.to_string(), "boolean");
    }
}
