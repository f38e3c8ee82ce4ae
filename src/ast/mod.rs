//! Syntax tree node definitions.
//!
//! This module contains the syntax-node contract shared by every node the
//! parser produces:
//!
//! - ast: the node and visitor traits plus the syntax token carried by nodes
//! - expressions: the expression nodes, currently the identifier and the
//!   constant reference it names
//!
//! Every node carries a [`crate::Span`] covering the whole construct, built
//! to at least bound the spans of its children.

pub mod ast;
pub mod expressions;

#[cfg(test)]
mod tests;
