//! Shared user-facing fatal messages.
//!
//! Each constant is the stable *prefix* of a diagnostic; call sites may append detail such as a
//! property name or a syntax kind.

/// A Data object was found but no import of the marker symbol precedes it.
pub const MISSING_IMPORT_MSG: &str = "@Data import not found";

/// A second import of the marker symbol was found.
pub const DUPLICATE_IMPORT_MSG: &str = "Duplicate Data import";

/// An annotated class has no name (e.g. an anonymous class expression).
pub const MISSING_CLASS_NAME_MSG: &str = "Data class name must be defined";

/// An annotated class declares a constructor.
pub const CONSTRUCTOR_MSG: &str = "Constructors are not authorized in Data objects";

/// An annotated class declares something other than a plain property.
pub const INVALID_MEMBER_MSG: &str = "Invalid Data object member";

/// A property declaration contains a construct the rewriter does not understand.
pub const UNSUPPORTED_SYNTAX_MSG: &str = "Unsupported syntax";

/// A type annotation that must be classified could not be.
pub const UNSUPPORTED_TYPE_MSG: &str = "Unsupported type";

/// A property has neither a type annotation nor a literal default value.
pub const UNTYPED_PROPERTY_MSG: &str = "Untyped property";
