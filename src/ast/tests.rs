//! Unit tests for syntax nodes.
//!
//! This module contains tests for the constant reference node including:
//! - Span coverage of child nodes
//! - Visitor dispatch
//! - Two-phase value resolution

use crate::Span;

use super::ast::{Syntax, SyntaxToken, SyntaxVisitor, TokenKind};
use super::expressions::{ConstantSyntax, ConstantValue, IdentifierSyntax};

fn constant_node() -> ConstantSyntax {
    let caret = SyntaxToken {
        kind: TokenKind::Caret,
        value: "^".to_string(),
        span: Span::new(4, 4),
    };
    let name = IdentifierSyntax::new(Span::new(5, 14), "max_health".to_string());
    ConstantSyntax::new(Span::new(4, 4), caret, name)
}

#[test]
fn test_constant_span_bounds_children() {
    let node = constant_node();

    // The parent span covers the sigil and the whole identifier.
    assert_eq!(node.get_span(), &Span::new(4, 14));
    assert!(node.get_span().contains(node.name().get_span().begin()));
    assert!(node.get_span().contains(node.name().get_span().end()));
}

#[test]
fn test_constant_starts_unresolved() {
    let node = constant_node();

    assert_eq!(node.value(), &ConstantValue::Unresolved);
    assert!(!node.is_resolved());
}

#[test]
fn test_constant_resolution() {
    let mut node = constant_node();
    node.resolve("99".to_string());

    assert!(node.is_resolved());
    assert_eq!(node.value(), &ConstantValue::Resolved("99".to_string()));
}

#[test]
#[should_panic]
fn test_constant_double_resolution_panics() {
    let mut node = constant_node();
    node.resolve("99".to_string());
    node.resolve("100".to_string());
}

#[test]
fn test_visitor_dispatch() {
    struct NameCollector {
        names: Vec<String>,
    }

    impl SyntaxVisitor for NameCollector {
        type Output = ();

        fn visit_identifier(&mut self, node: &IdentifierSyntax) {
            self.names.push(node.text.clone());
        }

        fn visit_constant(&mut self, node: &ConstantSyntax) {
            node.name().accept(self);
        }
    }

    let node = constant_node();
    let mut visitor = NameCollector { names: Vec::new() };
    node.accept(&mut visitor);

    assert_eq!(visitor.names, vec!["max_health".to_string()]);
}

#[test]
fn test_downcast_through_as_any() {
    let node = constant_node();
    let syntax: &dyn Syntax = &node;

    let constant = syntax.as_any().downcast_ref::<ConstantSyntax>().unwrap();
    assert_eq!(constant.caret_token().kind, TokenKind::Caret);
    assert_eq!(constant.name().text, "max_health");
}
