//! Decorator vocabulary registry.
//!
//! Covers both the markers users write (`@Data`, `@ref`) and the decorators the generator
//! synthesizes in their place (`@ΔD()`, `@Δp(...)`).

use crate::lang::registry::{LangItemInfo, Origin};

/// Stable identifier for decorators known to the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoratorId {
    /// Class-level marker; also the symbol imported from the runtime.
    Data,
    /// Property-level shallow reference marker.
    Ref,
    /// Runtime class decorator replacing `@Data`.
    DataRuntime,
    /// Per-property wiring decorator.
    Prop,
}

/// Prefix inserted in front of every expanded property name.
pub const PROPERTY_PREFIX: &str = "ΔΔ";

/// Metadata entry for a decorator.
pub type DecoratorInfo = LangItemInfo<DecoratorId>;

/// Registry of known decorators.
pub const DECORATORS: &[DecoratorInfo] = &[
    info(
        DecoratorId::Data,
        "Data",
        "Mark a class as a Data object whose properties are expanded.",
        Origin::Authored,
    ),
    info(
        DecoratorId::Ref,
        "ref",
        "Mark a property as a shallow reference.",
        Origin::Authored,
    ),
    info(
        DecoratorId::DataRuntime,
        "ΔD",
        "Runtime class decorator emitted in place of the Data marker.",
        Origin::Synthesized,
    ),
    info(
        DecoratorId::Prop,
        "Δp",
        "Wire a property to the runtime factory of its primitive kind.",
        Origin::Synthesized,
    ),
];

/// Resolve a decorator name to its stable id.
pub fn from_str(name: &str) -> Option<DecoratorId> {
    DECORATORS.iter().find(|d| d.canonical == name).map(|d| d.id)
}

/// Return the canonical spelling for a decorator.
pub fn as_str(id: DecoratorId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a decorator.
pub fn info_for(id: DecoratorId) -> &'static DecoratorInfo {
    DECORATORS.iter().find(|d| d.id == id).expect("decorator info missing")
}

/// Return the canonical replacement for the class-level marker: `@ΔD()`.
pub fn runtime_class_annotation() -> String {
    format!("@{}()", as_str(DecoratorId::DataRuntime))
}

const fn info(id: DecoratorId, canonical: &'static str, description: &'static str, origin: Origin) -> DecoratorInfo {
    LangItemInfo {
        id,
        canonical,
        description,
        origin,
    }
}
