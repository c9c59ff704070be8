//! Runtime factory registry.
//!
//! One factory symbol exists per [`PrimitiveKind`]; the wiring decorator references it as
//! `@Δp(ΔfStr)`.

use crate::PrimitiveKind;
use crate::lang::registry::{LangItemInfo, Origin};

/// Metadata entry for a factory symbol, keyed by the primitive kind it builds.
pub type FactoryInfo = LangItemInfo<PrimitiveKind>;

/// Registry of factory symbols.
pub const FACTORIES: &[FactoryInfo] = &[
    LangItemInfo {
        id: PrimitiveKind::String,
        canonical: "ΔfStr",
        description: "Factory for string properties.",
        origin: Origin::Synthesized,
    },
    LangItemInfo {
        id: PrimitiveKind::Number,
        canonical: "ΔfNbr",
        description: "Factory for number properties.",
        origin: Origin::Synthesized,
    },
    LangItemInfo {
        id: PrimitiveKind::Boolean,
        canonical: "ΔfBool",
        description: "Factory for boolean properties.",
        origin: Origin::Synthesized,
    },
];

/// Return the factory symbol for a primitive kind.
pub fn for_primitive(kind: PrimitiveKind) -> &'static str {
    FACTORIES
        .iter()
        .find(|f| f.id == kind)
        .map(|f| f.canonical)
        .expect("factory info missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_per_primitive() {
        assert_eq!(for_primitive(PrimitiveKind::String), "ΔfStr");
        assert_eq!(for_primitive(PrimitiveKind::Number), "ΔfNbr");
        assert_eq!(for_primitive(PrimitiveKind::Boolean), "ΔfBool");
    }

    #[test]
    fn test_factories_are_distinct() {
        let mut symbols: Vec<_> = PrimitiveKind::ALL.into_iter().map(for_primitive).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), PrimitiveKind::ALL.len());
    }
}
