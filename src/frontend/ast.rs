//! Intermediate model produced by the extractor.
//!
//! One [`ImportDirective`] followed by zero or more
//! [`DataObject`]s, each with typed [`DataProperty`] entries. Every object carries the byte
//! offsets the generator needs to splice text back into the *original* source.

use std::fmt;
use std::ops::Range;

use indexmap::IndexSet;
use serde::Serialize;
use trax_core::PrimitiveKind;

/// Byte range in the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Ordered output of the extractor: the import directive first, then Data objects in source order.
pub type DeclarationList = Vec<Declaration>;

/// One element of the declaration list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Import(ImportDirective),
    DataObject(DataObject),
}

/// The import statement that brings the `Data` marker into scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDirective {
    /// Offset immediately after the marker symbol's name; required symbols are spliced here.
    pub insert_pos: usize,
    /// Span of the import specifier naming the marker.
    pub span: Span,
    /// Every local name bound by the same import, in source order.
    pub values: IndexSet<String>,
}

/// A class carrying the `@Data` marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataObject {
    /// Span of the `@Data` decorator, replaced by the runtime class annotation.
    pub decorator: Span,
    pub class_name: String,
    pub class_name_end: usize,
    pub properties: Vec<DataProperty>,
}

/// One property member of a Data object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataProperty {
    pub name: String,
    /// Offset of the first byte of the name (prefix insertion point).
    pub name_pos: usize,
    /// Offset immediately following the name.
    pub name_end: usize,
    /// End of the declaration, including a directly following `;`.
    pub end: usize,
    /// Whole declaration, used for diagnostics.
    pub span: Span,
    pub shallow_ref: bool,
    #[serde(rename = "type")]
    pub ty: Option<DataType>,
    pub default_value: Option<DefaultValue>,
}

/// Literal default value of a property (`= "x"`, `= 42`, `= true`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultValue {
    pub span: Span,
    pub text: String,
}

/// Type of a Data property.
///
/// Only primitive kinds participate in code generation; the others are recorded and passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Reference { identifier: String },
    Array { item_type: Box<DataType> },
    /// `{ [key: K]: V }`; `item_type` is the classified index parameter type `K`, `None` when `K`
    /// is not a recognized type.
    Dictionary { item_type: Option<Box<DataType>> },
}

impl DataType {
    /// Return the primitive kind, if this type is `string`, `number` or `boolean`.
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            DataType::String => Some(PrimitiveKind::String),
            DataType::Number => Some(PrimitiveKind::Number),
            DataType::Boolean => Some(PrimitiveKind::Boolean),
            DataType::Reference { .. } | DataType::Array { .. } | DataType::Dictionary { .. } => None,
        }
    }
}

impl From<PrimitiveKind> for DataType {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::String => DataType::String,
            PrimitiveKind::Number => DataType::Number,
            PrimitiveKind::Boolean => DataType::Boolean,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => f.write_str("string"),
            DataType::Number => f.write_str("number"),
            DataType::Boolean => f.write_str("boolean"),
            DataType::Reference { identifier } => f.write_str(identifier),
            DataType::Array { item_type } => write!(f, "{item_type}[]"),
            DataType::Dictionary { item_type: Some(item) } => write!(f, "{{ [key: {item}]: ... }}"),
            DataType::Dictionary { item_type: None } => f.write_str("{ [key: ?]: ... }"),
        }
    }
}

impl Declaration {
    /// Span used when reporting a problem about this declaration.
    pub fn span(&self) -> Span {
        match self {
            Declaration::Import(import) => import.span,
            Declaration::DataObject(obj) => obj.decorator,
        }
    }
}
