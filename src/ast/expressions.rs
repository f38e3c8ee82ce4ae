use std::any::Any;

use crate::Span;

use super::ast::{Syntax, SyntaxToken, SyntaxVisitor};

/// An identifier written in the source.
#[derive(Debug, Clone)]
pub struct IdentifierSyntax {
    span: Span,
    pub text: String,
}

impl IdentifierSyntax {
    pub fn new(span: Span, text: String) -> Self {
        IdentifierSyntax { span, text }
    }

    pub fn accept<V: SyntaxVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_identifier(self)
    }
}

impl Syntax for IdentifierSyntax {
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The two-phase lifecycle of a constant reference: parsed nodes start
/// unresolved, and a later pass fills in the literal text of the constant
/// they name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantValue {
    Unresolved,
    Resolved(String),
}

/// A constant reference, written as a caret sigil followed by the constant's
/// name. Constants are temporal "variables" replaced with their value at
/// compile time.
#[derive(Debug, Clone)]
pub struct ConstantSyntax {
    span: Span,
    caret_token: SyntaxToken,
    name: IdentifierSyntax,
    value: ConstantValue,
}

impl ConstantSyntax {
    /// Creates an unresolved constant node. The node's span is widened to
    /// bound the sigil token and the child identifier.
    pub fn new(span: Span, caret_token: SyntaxToken, name: IdentifierSyntax) -> Self {
        let mut span = span;
        span.add(&caret_token.span);
        span.add(name.get_span());
        ConstantSyntax {
            span,
            caret_token,
            name,
            value: ConstantValue::Unresolved,
        }
    }

    pub fn caret_token(&self) -> &SyntaxToken {
        &self.caret_token
    }

    pub fn name(&self) -> &IdentifierSyntax {
        &self.name
    }

    pub fn value(&self) -> &ConstantValue {
        &self.value
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.value, ConstantValue::Resolved(_))
    }

    /// Moves the node from unresolved to resolved. Resolution happens exactly
    /// once; resolving an already resolved node is a compiler bug.
    pub fn resolve(&mut self, value: String) {
        if self.is_resolved() {
            panic!("Attempted to resolve an already resolved constant");
        }
        self.value = ConstantValue::Resolved(value);
    }

    pub fn accept<V: SyntaxVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_constant(self)
    }
}

impl Syntax for ConstantSyntax {
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
