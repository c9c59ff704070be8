//! Fatal errors raised while transforming a source unit.
//!
//! Every variant aborts the whole unit: there is no partial output and no recovery. Messages start
//! with the shared prefixes from [`trax_core::errors`] so callers can match on them.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;
use trax_core::errors::{
    CONSTRUCTOR_MSG, DUPLICATE_IMPORT_MSG, INVALID_MEMBER_MSG, MISSING_CLASS_NAME_MSG, MISSING_IMPORT_MSG,
    UNSUPPORTED_SYNTAX_MSG, UNSUPPORTED_TYPE_MSG, UNTYPED_PROPERTY_MSG,
};

use crate::frontend::ast::Span;

/// A fatal, non-recoverable transformation error.
#[derive(Debug, Error, Diagnostic)]
pub enum TransformError {
    #[error("TypeScript syntax error in {file}")]
    #[diagnostic(code(trax::syntax), help("fix the syntax error; units that do not parse are never rewritten"))]
    Syntax {
        file: String,
        #[label("not valid TypeScript")]
        span: SourceSpan,
    },

    #[error("failed to load the TypeScript grammar: {0}")]
    #[diagnostic(code(trax::frontend))]
    Frontend(String),

    #[error("{}", MISSING_IMPORT_MSG)]
    #[diagnostic(code(trax::missing_import), help("add `import {{ Data }} from \"...\"` before the first Data class"))]
    MissingImport {
        #[label("first Data object")]
        span: SourceSpan,
    },

    #[error("{}", DUPLICATE_IMPORT_MSG)]
    #[diagnostic(code(trax::duplicate_import))]
    DuplicateImport {
        #[label("`Data` is already imported earlier in this unit")]
        span: SourceSpan,
    },

    #[error("{}", MISSING_CLASS_NAME_MSG)]
    #[diagnostic(code(trax::missing_class_name))]
    MissingClassName {
        #[label("anonymous Data class")]
        span: SourceSpan,
    },

    #[error("{}", CONSTRUCTOR_MSG)]
    #[diagnostic(code(trax::constructor))]
    Constructor {
        #[label("constructor declared here")]
        span: SourceSpan,
    },

    #[error("{msg} [kind: {kind}]", msg = INVALID_MEMBER_MSG)]
    #[diagnostic(code(trax::invalid_member), help("Data objects may only declare properties"))]
    InvalidMember {
        kind: String,
        #[label("not a property declaration")]
        span: SourceSpan,
    },

    #[error("{msg} [kind: {kind}]", msg = UNSUPPORTED_SYNTAX_MSG)]
    #[diagnostic(code(trax::unsupported_syntax))]
    UnsupportedSyntax {
        kind: String,
        #[label("unsupported in a Data property")]
        span: SourceSpan,
    },

    #[error("{msg} [kind: {kind}]", msg = UNSUPPORTED_TYPE_MSG)]
    #[diagnostic(code(trax::unsupported_type))]
    UnsupportedType {
        kind: String,
        #[label("unsupported type")]
        span: SourceSpan,
    },

    #[error("{msg} `{name}` is not supported", msg = UNTYPED_PROPERTY_MSG)]
    #[diagnostic(code(trax::untyped_property), help("add a type annotation or a string/number/boolean default value"))]
    UntypedProperty {
        name: String,
        #[label("no type and no literal default")]
        span: SourceSpan,
    },
}

impl TransformError {
    pub fn syntax(file: impl Into<String>, span: Span) -> Self {
        TransformError::Syntax {
            file: file.into(),
            span: span.into(),
        }
    }

    pub fn missing_import(span: Span) -> Self {
        TransformError::MissingImport { span: span.into() }
    }

    pub fn duplicate_import(span: Span) -> Self {
        TransformError::DuplicateImport { span: span.into() }
    }

    pub fn missing_class_name(span: Span) -> Self {
        TransformError::MissingClassName { span: span.into() }
    }

    pub fn constructor(span: Span) -> Self {
        TransformError::Constructor { span: span.into() }
    }

    pub fn invalid_member(kind: impl Into<String>, span: Span) -> Self {
        TransformError::InvalidMember {
            kind: kind.into(),
            span: span.into(),
        }
    }

    pub fn unsupported_syntax(kind: impl Into<String>, span: Span) -> Self {
        TransformError::UnsupportedSyntax {
            kind: kind.into(),
            span: span.into(),
        }
    }

    pub fn unsupported_type(kind: impl Into<String>, span: Span) -> Self {
        TransformError::UnsupportedType {
            kind: kind.into(),
            span: span.into(),
        }
    }

    pub fn untyped_property(name: impl Into<String>, span: Span) -> Self {
        TransformError::UntypedProperty {
            name: name.into(),
            span: span.into(),
        }
    }

    /// Source offset the error points at, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            TransformError::Frontend(_) => None,
            TransformError::Syntax { span, .. }
            | TransformError::MissingImport { span }
            | TransformError::DuplicateImport { span }
            | TransformError::MissingClassName { span }
            | TransformError::Constructor { span }
            | TransformError::InvalidMember { span, .. }
            | TransformError::UnsupportedSyntax { span, .. }
            | TransformError::UnsupportedType { span, .. }
            | TransformError::UntypedProperty { span, .. } => Some(span.offset()),
        }
    }
}

/// Render an error as a report with the offending source line highlighted.
///
/// ## Notes
/// - Uses a colorless theme so output is stable in logs and tests.
pub fn render(file: &str, source: &str, error: TransformError) -> String {
    let report = miette::Report::new(error).with_source_code(NamedSource::new(file, source.to_string()));
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, report.as_ref()).is_err() {
        // Fall back to the bare message if the report itself cannot be laid out.
        out = format!("{report}");
    }
    out
}
