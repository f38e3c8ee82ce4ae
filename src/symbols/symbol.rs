use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::types::primitive::PrimitiveType;

/// The id every constant symbol carries: constants are resolved by value
/// substitution and are never numerically identified.
pub const CONSTANT_ID: i32 = -1;

/// A named, numerically identified declaration resolved during name lookup.
///
/// Ids are stable, externally assigned, and non-negative for every kind but
/// constants, which always report [`CONSTANT_ID`].
pub trait Symbol: Debug {
    /// Returns the name of the symbol. Never empty.
    fn name(&self) -> &str;
    /// Returns the id of the symbol.
    fn id(&self) -> i32;
}

/// The minimal symbol shape, used for varbits, NPCs, objects, and most other
/// game-content kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicSymbol {
    pub name: String,
    pub id: i32,
}

impl Symbol for BasicSymbol {
    fn name(&self) -> &str {
        &self.name
    }
    fn id(&self) -> i32 {
        self.id
    }
}

/// A symbol additionally carrying the primitive type of its value, used for
/// varps, varcs, and enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSymbol {
    pub name: String,
    pub id: i32,
    pub ty: PrimitiveType,
}

impl Symbol for TypedSymbol {
    fn name(&self) -> &str {
        &self.name
    }
    fn id(&self) -> i32 {
        self.id
    }
}

/// A config/parameter declaration. `transmit` marks whether the value is
/// sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSymbol {
    pub name: String,
    pub id: i32,
    pub ty: PrimitiveType,
    pub transmit: bool,
}

impl Symbol for ConfigSymbol {
    fn name(&self) -> &str {
        &self.name
    }
    fn id(&self) -> i32 {
        self.id
    }
}

/// A compile-time constant. The value is kept as raw literal text and
/// interpreted by the consumer according to context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantSymbol {
    pub name: String,
    pub value: String,
}

impl Symbol for ConstantSymbol {
    fn name(&self) -> &str {
        &self.name
    }
    fn id(&self) -> i32 {
        CONSTANT_ID
    }
}

/// A property a database column may carry. Property names are persisted in
/// upper case and matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DbColumnProp {
    Required,
    Indexed,
    Clientside,
    List,
}

impl DbColumnProp {
    pub fn from_name(name: &str) -> Option<DbColumnProp> {
        match name {
            "REQUIRED" => Some(DbColumnProp::Required),
            "INDEXED" => Some(DbColumnProp::Indexed),
            "CLIENTSIDE" => Some(DbColumnProp::Clientside),
            "LIST" => Some(DbColumnProp::List),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DbColumnProp::Required => "REQUIRED",
            DbColumnProp::Indexed => "INDEXED",
            DbColumnProp::Clientside => "CLIENTSIDE",
            DbColumnProp::List => "LIST",
        }
    }
}

/// A database column declaration. A column may be untyped (a marker column),
/// in which case `types` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbColumnSymbol {
    pub name: String,
    pub id: i32,
    pub types: Vec<PrimitiveType>,
    pub props: BTreeSet<DbColumnProp>,
}

impl Symbol for DbColumnSymbol {
    fn name(&self) -> &str {
        &self.name
    }
    fn id(&self) -> i32 {
        self.id
    }
}
