//! The primitive type system.
//!
//! This module defines the closed universe of value types the compiler
//! reasons about:
//!
//! - The VM stack representations every type reduces to
//! - The fixed catalog of primitive types with their signature codes,
//!   literal representations, default values, and loader associations
//! - Derived predicates (declarable, arrayable, nullable, config) that drive
//!   validation decisions throughout semantic analysis
//! - Literal lookup tables for resolving user-written type names
//!
//! No runtime registration of new types is supported; the catalog is static
//! and its lookup indices are built once and never mutated.

pub mod primitive;
pub mod stack;
