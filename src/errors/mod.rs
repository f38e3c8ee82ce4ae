//! Error types and error handling for the compiler core.
//!
//! This module defines the error types used by the type catalog and the
//! symbol-table layer. It includes:
//!
//! - Type literal resolution failures
//! - Persisted symbol line parse failures (fail-fast, per line)
//! - Symbol table configuration errors (duplicate names)
//!
//! Lookup misses are deliberately not errors anywhere in this crate; they are
//! `Option`s the caller turns into its own diagnostics.

pub mod errors;

#[cfg(test)]
mod tests;
