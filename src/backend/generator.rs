//! Generator: declaration list + original text → transformed text.
//!
//! The generator runs two passes over one [`Splicer`]:
//!
//! 1. **Body pass**: for each Data object, in list order, replace `@Data` with `@ΔD()` and expand
//!    each primitive property:
//!    `street: string;` → `ΔΔstreet: string; @Δp(ΔfStr) street: string;`
//! 2. **Header pass**: replace the bare `Data` name in the import with the symbols the body pass
//!    required, comma-joined in first-use order.
//!
//! ## Notes
//! - The header pass runs against a zero delta. This relies on the import preceding every Data
//!   object, which the declaration list guarantees (the import must come first).
//! - Non-primitive properties (`reference`, `array`, `dictionary`) pass through untouched.

use trax_core::PrimitiveKind;
use trax_core::lang::decorators::{self, DecoratorId, PROPERTY_PREFIX};
use trax_core::lang::factories;

use crate::backend::splicer::Splicer;
use crate::backend::symbols::RequiredSymbols;
use crate::frontend::ast::{DataObject, DataProperty, Declaration, ImportDirective};
use crate::frontend::diagnostics::TransformError;
use crate::frontend::{extractor, syntax};

/// Transform a whole source unit.
///
/// ## Errors
/// - [`TransformError::Syntax`] if the unit does not parse.
/// - Any extraction or generation error; no partial output is ever returned.
#[tracing::instrument(skip_all, fields(file = file, source_len = source.len()))]
pub fn generate(source: &str, file: &str) -> Result<String, TransformError> {
    let tree = syntax::parse(source)?;
    if let Some(span) = tree.first_error() {
        return Err(TransformError::syntax(file, span));
    }
    let declarations = extractor::extract_tree(&tree)?;
    generate_from(&declarations, source)
}

/// Run the generator on an already extracted declaration list.
///
/// An empty list leaves the source unchanged.
pub fn generate_from(declarations: &[Declaration], source: &str) -> Result<String, TransformError> {
    let Some((first, rest)) = declarations.split_first() else {
        return Ok(source.to_string());
    };
    let Declaration::Import(import) = first else {
        return Err(TransformError::missing_import(first.span()));
    };

    let mut generator = Generator::new(source, import);
    for declaration in rest {
        match declaration {
            Declaration::Import(duplicate) => return Err(TransformError::duplicate_import(duplicate.span)),
            Declaration::DataObject(obj) => generator.data_object(obj)?,
        }
    }
    Ok(generator.finish(import))
}

struct Generator<'src> {
    source: &'src str,
    splicer: Splicer,
    symbols: RequiredSymbols,
    objects: usize,
    expanded: usize,
}

impl<'src> Generator<'src> {
    fn new(source: &'src str, import: &ImportDirective) -> Self {
        Self {
            source,
            splicer: Splicer::new(source),
            symbols: RequiredSymbols::new(import.values.iter().cloned()),
            objects: 0,
            expanded: 0,
        }
    }

    fn data_object(&mut self, obj: &DataObject) -> Result<(), TransformError> {
        let marker = self.source.get(obj.decorator.range()).unwrap_or_default();
        self.splicer
            .replace(marker, &decorators::runtime_class_annotation(), obj.decorator.start);

        for prop in &obj.properties {
            let Some(ty) = &prop.ty else {
                return Err(TransformError::untyped_property(&prop.name, prop.span));
            };
            match ty.primitive() {
                Some(kind) => self.primitive_property(prop, kind),
                None => tracing::trace!(class = %obj.class_name, property = %prop.name, %ty, "passed through"),
            }
        }
        self.objects += 1;
        Ok(())
    }

    /// `street: string;` → `ΔΔstreet: string; @Δp(ΔfStr) street: string;`
    fn primitive_property(&mut self, prop: &DataProperty, kind: PrimitiveKind) {
        self.splicer.insert(PROPERTY_PREFIX, prop.name_pos);

        let factory = factories::for_primitive(kind);
        self.symbols.require(factory);

        let separator = if self.splicer.ends_with_terminator(prop.end) { "" } else { ";" };
        let wiring = decorators::as_str(DecoratorId::Prop);
        self.symbols.require(wiring);
        let companion = format!("{separator} @{wiring}({factory}) {}: {kind};", prop.name);
        self.splicer.insert(&companion, prop.end);
        self.expanded += 1;
    }

    /// Header pass: splice the required symbols into the import, then return the buffer.
    fn finish(mut self, import: &ImportDirective) -> String {
        tracing::debug!(
            objects = self.objects,
            expanded = self.expanded,
            symbols = %self.symbols.joined(),
            "body pass complete"
        );
        // Nothing to import: keep the original specifier so the import stays valid.
        if !self.symbols.has_added() {
            return self.splicer.finish();
        }

        let marker = decorators::as_str(DecoratorId::Data);
        self.splicer.rebase();
        self.splicer.replace(
            marker,
            &self.symbols.joined(),
            import.insert_pos.saturating_sub(marker.len()),
        );
        self.splicer.finish()
    }
}
