//! TypeScript syntax front-end.
//!
//! Thin adapter over `tree-sitter` and the `tree-sitter-typescript` grammar. It offers what the
//! extractor consumes and nothing more: a concrete syntax tree with stable byte offsets, child
//! enumeration, node text, node kinds, and the location of the first syntax error.

use tree_sitter::{Node, Parser, Tree};

use crate::frontend::ast::Span;
use crate::frontend::diagnostics::TransformError;

/// A parsed source unit.
pub struct SyntaxTree<'src> {
    tree: Tree,
    source: &'src str,
}

impl<'src> SyntaxTree<'src> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by a node.
    pub fn text(&self, node: Node<'_>) -> &'src str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Location of the first `ERROR` or `MISSING` node, if the unit failed to parse.
    pub fn first_error(&self) -> Option<Span> {
        let root = self.root();
        if !root.has_error() {
            return None;
        }
        find_error(root).or_else(|| Some(span_of(root)))
    }
}

/// Parse TypeScript source text.
///
/// ## Errors
/// Returns [`TransformError::Frontend`] if the grammar cannot be loaded. A unit with syntax errors
/// still parses; check [`SyntaxTree::first_error`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<SyntaxTree<'_>, TransformError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| TransformError::Frontend(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| TransformError::Frontend("parser produced no tree".to_string()))?;
    Ok(SyntaxTree { tree, source })
}

/// Byte span of a node.
pub fn span_of(node: Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// First `ERROR` / `MISSING` node in pre-order, descending only into subtrees that contain one.
fn find_error(root: Node<'_>) -> Option<Span> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(span_of(node));
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).filter(|c| c.has_error()).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}
