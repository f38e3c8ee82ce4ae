//! Unit tests for error handling.
//!
//! This module contains tests for error display and conversions.

use crate::errors::errors::{LoadError, SymbolError, TypeResolutionError};

#[test]
fn test_type_resolution_error_display() {
    let error = TypeResolutionError("widget".to_string());

    assert_eq!(
        error.to_string(),
        "no type could be found for the literal \"widget\""
    );
}

#[test]
fn test_load_error_field_count_display() {
    let error = LoadError::FieldCount {
        line: "foo!1".to_string(),
        expected: 3,
        found: 2,
    };

    assert_eq!(
        error.to_string(),
        "malformed symbol line \"foo!1\": expected 3 fields, found 2"
    );
}

#[test]
fn test_load_error_wraps_type_resolution() {
    let error = LoadError::from(TypeResolutionError("widget".to_string()));

    // Transparent wrapping keeps the inner message.
    assert_eq!(
        error.to_string(),
        "no type could be found for the literal \"widget\""
    );
}

#[test]
fn test_symbol_error_duplicate_display() {
    let error = SymbolError::DuplicateSymbol {
        name: "max_health".to_string(),
    };

    assert_eq!(error.to_string(), "the symbol \"max_health\" is already defined");
}

#[test]
fn test_symbol_error_wraps_load_error() {
    let error = SymbolError::from(LoadError::InvalidId {
        line: "foo!x".to_string(),
        value: "x".to_string(),
    });

    assert!(matches!(error, SymbolError::Load(LoadError::InvalidId { .. })));
}
