//! The symbol model and per-kind symbol tables.
//!
//! This module defines the polymorphic symbol model used for name
//! resolution. It handles:
//!
//! - The closed set of symbol variants (basic, typed, config, constant,
//!   database column)
//! - Loading and saving symbols through the line-oriented persisted table
//!   format, one strategy per kind
//! - Per-kind symbol tables enforcing name uniqueness
//!
//! Symbols are immutable values; a symbol is superseded by constructing a
//! new one, never mutated in place.

pub mod list;
pub mod loader;
pub mod symbol;
