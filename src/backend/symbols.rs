//! Required-symbol bookkeeping for the marker import.
//!
//! An insertion-ordered set seeded with the names the import already binds. Requiring a symbol
//! that is already present is a no-op, so the final import list is deduplicated and keeps first-use
//! order across properties and Data objects.

use indexmap::IndexSet;

#[derive(Debug, Clone, Default)]
pub struct RequiredSymbols {
    symbols: IndexSet<String>,
    /// Number of leading entries that came from the existing import.
    seeded: usize,
}

impl RequiredSymbols {
    /// Create a set seeded with the symbols the import already binds.
    pub fn new<I, S>(existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: IndexSet<String> = existing.into_iter().map(Into::into).collect();
        let seeded = symbols.len();
        Self { symbols, seeded }
    }

    /// Record a symbol as required; returns `true` if it was not present yet.
    pub fn require(&mut self, symbol: &str) -> bool {
        if self.symbols.contains(symbol) {
            return false;
        }
        self.symbols.insert(symbol.to_string())
    }

    /// Newly required symbols, in first-use order.
    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().skip(self.seeded).map(String::as_str)
    }

    pub fn has_added(&self) -> bool {
        self.symbols.len() > self.seeded
    }

    /// Newly required symbols joined as an import list: `ΔfStr, Δp`.
    pub fn joined(&self) -> String {
        self.added().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_is_idempotent() {
        let mut symbols = RequiredSymbols::new(["Data"]);
        assert!(symbols.require("ΔfStr"));
        assert!(!symbols.require("ΔfStr"));
        assert_eq!(symbols.joined(), "ΔfStr");
    }

    #[test]
    fn test_seeded_symbols_are_not_added() {
        let mut symbols = RequiredSymbols::new(["Data", "Δp"]);
        assert!(!symbols.require("Δp"));
        assert!(symbols.require("ΔfNbr"));
        assert_eq!(symbols.added().collect::<Vec<_>>(), vec!["ΔfNbr"]);
        assert!(symbols.has_added());
    }

    #[test]
    fn test_first_use_order() {
        let mut symbols = RequiredSymbols::new(Vec::<String>::new());
        for s in ["ΔfBool", "Δp", "ΔfStr", "Δp", "ΔfBool"] {
            symbols.require(s);
        }
        assert_eq!(symbols.joined(), "ΔfBool, Δp, ΔfStr");
    }

    #[test]
    fn test_empty_when_nothing_required() {
        let symbols = RequiredSymbols::new(["Data"]);
        assert!(!symbols.has_added());
        assert_eq!(symbols.joined(), "");
    }
}
