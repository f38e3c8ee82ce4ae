use std::{any::Any, fmt::Debug, fmt::Display};

use crate::Span;

use super::expressions::{ConstantSyntax, IdentifierSyntax};

/// The kinds of tokens a syntax node holds onto for diagnostics. Only the
/// tokens that survive into the tree are represented here; the full token
/// stream belongs to the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Caret,
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token kept by a syntax node, with its source text and span.
#[derive(Debug, Clone)]
pub struct SyntaxToken {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// Syntax Node Trait
///
/// Defines the behavior common to all node kinds in the tree.
pub trait Syntax: Debug {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
}

/// A visitor over syntax nodes, one method per node kind.
///
/// Nodes dispatch to the matching method through their `accept` function, so
/// a visitor implementation can specialize behavior per kind without the
/// node knowing anything about the visitor's internals.
pub trait SyntaxVisitor {
    type Output;

    fn visit_identifier(&mut self, node: &IdentifierSyntax) -> Self::Output;
    fn visit_constant(&mut self, node: &ConstantSyntax) -> Self::Output;
}
