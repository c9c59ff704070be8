//! Structural extractor: syntax tree → declaration list.
//!
//! The extractor walks the tree top-down. Each node is either *consumed* (the `Data` import clause,
//! an annotated class) or recursed into. A consumed class has its members walked separately and
//! must only contain typed property declarations; anything else aborts the whole unit.
//!
//! ## Notes
//! - Output order is source order: the first marker import, then Data objects. A second marker
//!   import is recorded as well so the generator can reject it.
//! - Nested classes inside non-annotated classes are scanned like any other node.

use tree_sitter::Node;
use trax_core::PrimitiveKind;
use trax_core::lang::decorators::{self, DecoratorId};

use crate::frontend::ast::{
    DataObject, DataProperty, DataType, Declaration, DeclarationList, DefaultValue, ImportDirective,
};
use crate::frontend::diagnostics::TransformError;
use crate::frontend::syntax::{self, SyntaxTree, span_of};

/// Extract the declaration list from a source unit.
///
/// ## Returns
/// - `Ok(None)` if the unit has a syntax error (nothing is extracted).
/// - `Ok(Some(list))` otherwise; the list may be empty when the unit neither imports the marker
///   nor declares Data objects.
///
/// ## Errors
/// Any unsupported construct inside a Data object is fatal.
#[tracing::instrument(skip_all, fields(file = file, source_len = source.len()))]
pub fn extract(source: &str, file: &str) -> Result<Option<DeclarationList>, TransformError> {
    let tree = syntax::parse(source)?;
    if let Some(span) = tree.first_error() {
        tracing::debug!(start = span.start, end = span.end, "syntax error; unit not extracted");
        return Ok(None);
    }
    extract_tree(&tree).map(Some)
}

/// Extract the declaration list from an already parsed, error-free tree.
pub fn extract_tree(tree: &SyntaxTree<'_>) -> Result<DeclarationList, TransformError> {
    let mut extractor = Extractor::new(tree);
    extractor.scan(tree.root())?;
    Ok(extractor.declarations)
}

struct Extractor<'a, 'src> {
    tree: &'a SyntaxTree<'src>,
    import_found: bool,
    declarations: DeclarationList,
}

impl<'a, 'src> Extractor<'a, 'src> {
    fn new(tree: &'a SyntaxTree<'src>) -> Self {
        Self {
            tree,
            import_found: false,
            declarations: Vec::new(),
        }
    }

    fn text(&self, node: Node<'_>) -> &'src str {
        self.tree.text(node)
    }

    /// Pre-order walk with an explicit stack; nesting depth is unbounded in valid sources.
    fn scan(&mut self, root: Node<'_>) -> Result<(), TransformError> {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if self.visit(node)? {
                let mut cursor = node.walk();
                let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
                stack.extend(children.into_iter().rev());
            }
        }
        Ok(())
    }

    /// Handle one node; returns whether its children should be scanned.
    fn visit(&mut self, node: Node<'_>) -> Result<bool, TransformError> {
        match node.kind() {
            "import_clause" => {
                self.visit_import(node);
                Ok(false)
            }
            "class_declaration" | "abstract_class_declaration" | "class" => {
                let consumed = self.visit_class(node)?;
                Ok(!consumed)
            }
            _ => Ok(true),
        }
    }

    fn visit_import(&mut self, clause: Node<'_>) {
        let marker = decorators::as_str(DecoratorId::Data);
        let mut cursor = clause.walk();
        let Some(named) = clause.named_children(&mut cursor).find(|c| c.kind() == "named_imports") else {
            return;
        };

        let mut values = indexmap::IndexSet::new();
        let mut marker_name = None;
        let mut cursor = named.walk();
        for specifier in named.named_children(&mut cursor) {
            if specifier.kind() != "import_specifier" {
                continue;
            }
            // The local binding is the alias when present (`X as Data`).
            let Some(local) = specifier
                .child_by_field_name("alias")
                .or_else(|| specifier.child_by_field_name("name"))
            else {
                continue;
            };
            let name = self.text(local);
            if name == marker && marker_name.is_none() {
                marker_name = Some((local, specifier));
            }
            values.insert(name.to_string());
        }

        let Some((local, specifier)) = marker_name else {
            return;
        };
        if self.import_found {
            tracing::debug!(start = specifier.start_byte(), "second import of the Data marker");
        }
        self.import_found = true;
        self.declarations.push(Declaration::Import(ImportDirective {
            insert_pos: local.end_byte(),
            span: span_of(specifier),
            values,
        }));
    }

    /// Consume `class` if it carries the `@Data` marker; returns whether it was consumed.
    fn visit_class(&mut self, class: Node<'_>) -> Result<bool, TransformError> {
        let Some(decorator) = self.marker_decorator(class) else {
            return Ok(false);
        };
        let Some(name) = class.child_by_field_name("name") else {
            return Err(TransformError::missing_class_name(span_of(class)));
        };

        let mut properties = Vec::new();
        if let Some(body) = class.child_by_field_name("body") {
            let mut cursor = body.walk();
            for member in body.named_children(&mut cursor) {
                match member.kind() {
                    // Decorators in the body belong to the following method, which is rejected.
                    "comment" | "decorator" => {}
                    "public_field_definition" => properties.push(self.property(member)?),
                    "method_definition" if self.is_constructor(member) => {
                        return Err(TransformError::constructor(span_of(member)));
                    }
                    kind => return Err(TransformError::invalid_member(kind, span_of(member))),
                }
            }
        }

        let class_name = self.text(name).to_string();
        tracing::trace!(class = %class_name, properties = properties.len(), "Data object");
        self.declarations.push(Declaration::DataObject(DataObject {
            decorator: span_of(decorator),
            class_name,
            class_name_end: name.end_byte(),
            properties,
        }));
        Ok(true)
    }

    /// Find a class-level `@Data` decorator, including decorators written before `export`.
    fn marker_decorator<'t>(&self, class: Node<'t>) -> Option<Node<'t>> {
        let mut candidates = Vec::new();
        if let Some(parent) = class.parent().filter(|p| p.kind() == "export_statement") {
            let mut cursor = parent.walk();
            candidates.extend(parent.children_by_field_name("decorator", &mut cursor));
        }
        let mut cursor = class.walk();
        candidates.extend(class.children_by_field_name("decorator", &mut cursor));

        candidates
            .into_iter()
            .find(|d| self.decorator_is(*d, DecoratorId::Data))
    }

    /// Whether a decorator's expression is the bare identifier for `id`.
    fn decorator_is(&self, decorator: Node<'_>, id: DecoratorId) -> bool {
        decorator
            .named_child(0)
            .filter(|expr| expr.kind() == "identifier")
            .is_some_and(|expr| decorators::from_str(self.text(expr)) == Some(id))
    }

    /// `constructor() {}` and its quoted spelling `"constructor"() {}`.
    fn is_constructor(&self, method: Node<'_>) -> bool {
        method.child_by_field_name("name").is_some_and(|name| {
            let text = self.text(name);
            let unquoted = match name.kind() {
                "string" => text.get(1..text.len().saturating_sub(1)).unwrap_or_default(),
                _ => text,
            };
            unquoted == "constructor"
        })
    }

    fn property(&self, member: Node<'_>) -> Result<DataProperty, TransformError> {
        let name_node = member.child_by_field_name("name");
        let mut prop = DataProperty {
            name: String::new(),
            name_pos: 0,
            name_end: 0,
            end: declaration_end(member),
            span: span_of(member),
            shallow_ref: false,
            ty: None,
            default_value: None,
        };

        let mut cursor = member.walk();
        for child in member.children(&mut cursor) {
            match child.kind() {
                "comment" | "=" => {}
                "decorator" => {
                    if self.decorator_is(child, DecoratorId::Ref) {
                        prop.shallow_ref = true;
                    }
                }
                "type_annotation" => {
                    let Some(inner) = child.named_child(0) else {
                        return Err(TransformError::unsupported_syntax(child.kind(), span_of(child)));
                    };
                    match self.classify_type(inner, false)? {
                        Some(ty) => prop.ty = Some(ty),
                        None => return Err(TransformError::unsupported_syntax(inner.kind(), span_of(inner))),
                    }
                }
                _ if Some(child) == name_node && child.kind() == "property_identifier" => {
                    prop.name = self.text(child).to_string();
                    prop.name_pos = child.start_byte();
                    prop.name_end = child.end_byte();
                }
                _ if Some(child) == name_node => {
                    return Err(TransformError::unsupported_syntax(child.kind(), span_of(child)));
                }
                kind => {
                    if !self.default_value(child, &mut prop) {
                        return Err(TransformError::unsupported_syntax(kind, span_of(child)));
                    }
                }
            }
        }

        if prop.ty.is_none() {
            return Err(TransformError::untyped_property(&prop.name, prop.span));
        }
        Ok(prop)
    }

    /// Classify a type node.
    ///
    /// ## Parameters
    /// - `strict`: when set, an unrecognized type is fatal instead of `Ok(None)`.
    fn classify_type(&self, node: Node<'_>, strict: bool) -> Result<Option<DataType>, TransformError> {
        let ty = match node.kind() {
            "predefined_type" => PrimitiveKind::from_keyword(self.text(node)).map(DataType::from),
            "type_identifier" | "nested_type_identifier" | "generic_type" => Some(DataType::Reference {
                identifier: self.text(node).to_string(),
            }),
            "array_type" => match node.named_child(0) {
                Some(item) => self.classify_type(item, true)?.map(|item| DataType::Array {
                    item_type: Box::new(item),
                }),
                None => None,
            },
            "object_type" => self.classify_dictionary(node)?,
            _ => None,
        };

        if ty.is_none() && strict && node.kind() != "decorator" {
            return Err(TransformError::unsupported_type(node.kind(), span_of(node)));
        }
        Ok(ty)
    }

    /// `{ [key: K]: V }` with exactly one index signature maps to a dictionary over `K`.
    ///
    /// The shape alone decides; an unrecognized `K` leaves the item type unknown.
    fn classify_dictionary(&self, object: Node<'_>) -> Result<Option<DataType>, TransformError> {
        let mut cursor = object.walk();
        let members: Vec<Node<'_>> = object
            .named_children(&mut cursor)
            .filter(|m| m.kind() != "comment")
            .collect();
        let [member] = members.as_slice() else {
            return Ok(None);
        };
        if member.kind() != "index_signature" {
            return Ok(None);
        }
        let Some(index_type) = member.child_by_field_name("index_type") else {
            return Ok(None);
        };
        let item_type = self.classify_type(index_type, false)?.map(Box::new);
        Ok(Some(DataType::Dictionary { item_type }))
    }

    /// Record a string/number/boolean literal default; adopts its kind when no type is declared.
    fn default_value(&self, node: Node<'_>, prop: &mut DataProperty) -> bool {
        let kind = match node.kind() {
            "string" => PrimitiveKind::String,
            "number" => PrimitiveKind::Number,
            "true" | "false" => PrimitiveKind::Boolean,
            _ => return false,
        };
        prop.default_value = Some(DefaultValue {
            span: span_of(node),
            text: self.text(node).to_string(),
        });
        if prop.ty.is_none() {
            prop.ty = Some(DataType::from(kind));
        }
        true
    }
}

/// End of a property declaration, covering a directly following `;`.
fn declaration_end(member: Node<'_>) -> usize {
    match member.next_sibling() {
        Some(next) if next.kind() == ";" => next.end_byte(),
        _ => member.end_byte(),
    }
}
