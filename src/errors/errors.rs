use thiserror::Error;

/// Raised when a type literal cannot be resolved against the primitive type
/// catalog in a context where every literal is expected to resolve, such as
/// symbol deserialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no type could be found for the literal {0:?}")]
pub struct TypeResolutionError(pub String);

/// A failure while parsing or serializing one line of a persisted symbol
/// table. Loading never skips a bad line; the first failure aborts the whole
/// load so a missing symbol cannot silently corrupt later analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("malformed symbol line {line:?}: expected {expected} fields, found {found}")]
    FieldCount {
        line: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid symbol id {value:?} in line {line:?}")]
    InvalidId { line: String, value: String },
    #[error(transparent)]
    UnknownType(#[from] TypeResolutionError),
    #[error("invalid transmit flag {value:?} in line {line:?}, expected \"true\" or \"false\"")]
    InvalidTransmit { line: String, value: String },
    #[error("unrecognised column property {value:?} in line {line:?}")]
    UnknownProperty { line: String, value: String },
    #[error("the type {type_:?} has no literal form and cannot be saved")]
    UnrepresentableType { type_: String },
    #[error("saving is not supported for {kind} symbols")]
    SaveUnsupported { kind: &'static str },
}

/// A failure while populating a symbol table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("the symbol {name:?} is already defined")]
    DuplicateSymbol { name: String },
    #[error(transparent)]
    Load(#[from] LoadError),
}
