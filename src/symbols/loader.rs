use std::collections::BTreeSet;

use crate::errors::errors::LoadError;
use crate::types::primitive::PrimitiveType;

use super::symbol::{
    BasicSymbol, ConfigSymbol, ConstantSymbol, DbColumnProp, DbColumnSymbol, Symbol, TypedSymbol,
};

/// A per-kind strategy for moving symbols across the persisted table format:
/// one symbol per line, fields separated by `!`, field count fixed per kind.
///
/// `load` fails fast on anything malformed rather than returning a partial
/// symbol. `save` is implemented for round-trip-capable kinds and explicitly
/// unsupported otherwise.
pub trait SymbolLoader<T: Symbol> {
    fn load(&self, line: &str) -> Result<T, LoadError>;
    fn save(&self, symbol: &T) -> Result<String, LoadError>;
}

/// Splits a persisted line into its `!`-separated fields, rejecting any line
/// whose field count does not match the kind's fixed layout.
fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, LoadError> {
    let fields: Vec<&str> = line.split('!').collect();
    if fields.len() != expected {
        return Err(LoadError::FieldCount {
            line: line.to_string(),
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_id(line: &str, field: &str) -> Result<i32, LoadError> {
    field.parse().map_err(|_| LoadError::InvalidId {
        line: line.to_string(),
        value: field.to_string(),
    })
}

/// Looks up the literal a type serializes to, for `save` paths. Every type a
/// loader can produce has one; a type without one cannot round-trip.
fn type_literal(ty: PrimitiveType) -> Result<&'static str, LoadError> {
    ty.representation()
        .ok_or_else(|| LoadError::UnrepresentableType {
            type_: format!("{:?}", ty),
        })
}

/// Loads `name!id` lines.
pub struct BasicSymbolLoader;

impl SymbolLoader<BasicSymbol> for BasicSymbolLoader {
    fn load(&self, line: &str) -> Result<BasicSymbol, LoadError> {
        let fields = split_fields(line, 2)?;
        Ok(BasicSymbol {
            name: fields[0].to_string(),
            id: parse_id(line, fields[1])?,
        })
    }

    fn save(&self, symbol: &BasicSymbol) -> Result<String, LoadError> {
        Ok(format!("{}!{}", symbol.name, symbol.id))
    }
}

/// Loads `name!id!type` lines.
pub struct TypedSymbolLoader;

impl SymbolLoader<TypedSymbol> for TypedSymbolLoader {
    fn load(&self, line: &str) -> Result<TypedSymbol, LoadError> {
        let fields = split_fields(line, 3)?;
        Ok(TypedSymbol {
            name: fields[0].to_string(),
            id: parse_id(line, fields[1])?,
            ty: PrimitiveType::for_literal(fields[2])?,
        })
    }

    fn save(&self, symbol: &TypedSymbol) -> Result<String, LoadError> {
        Ok(format!(
            "{}!{}!{}",
            symbol.name,
            symbol.id,
            type_literal(symbol.ty)?
        ))
    }
}

/// Loads `name!id!type!transmit` lines. The transmit flag is parsed
/// strictly: anything but `true` or `false` is a parse error, never a
/// default.
pub struct ConfigSymbolLoader;

impl SymbolLoader<ConfigSymbol> for ConfigSymbolLoader {
    fn load(&self, line: &str) -> Result<ConfigSymbol, LoadError> {
        let fields = split_fields(line, 4)?;
        let transmit = match fields[3] {
            "true" => true,
            "false" => false,
            other => {
                return Err(LoadError::InvalidTransmit {
                    line: line.to_string(),
                    value: other.to_string(),
                })
            }
        };
        Ok(ConfigSymbol {
            name: fields[0].to_string(),
            id: parse_id(line, fields[1])?,
            ty: PrimitiveType::for_literal(fields[2])?,
            transmit,
        })
    }

    fn save(&self, _symbol: &ConfigSymbol) -> Result<String, LoadError> {
        Err(LoadError::SaveUnsupported { kind: "config" })
    }
}

/// Loads `name!value` lines. Only the first `!` separates, so the raw
/// literal text may itself contain `!`.
pub struct ConstantSymbolLoader;

impl SymbolLoader<ConstantSymbol> for ConstantSymbolLoader {
    fn load(&self, line: &str) -> Result<ConstantSymbol, LoadError> {
        let Some((name, value)) = line.split_once('!') else {
            return Err(LoadError::FieldCount {
                line: line.to_string(),
                expected: 2,
                found: 1,
            });
        };
        Ok(ConstantSymbol {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    fn save(&self, symbol: &ConstantSymbol) -> Result<String, LoadError> {
        Ok(format!("{}!{}", symbol.name, symbol.value))
    }
}

/// Loads `name!id!types!props` lines, where `types` is a comma-joined list
/// of type literals and `props` a comma-joined list of property names, either
/// of which may be the empty string for none.
pub struct DbColumnSymbolLoader;

impl SymbolLoader<DbColumnSymbol> for DbColumnSymbolLoader {
    fn load(&self, line: &str) -> Result<DbColumnSymbol, LoadError> {
        let fields = split_fields(line, 4)?;

        let mut types = Vec::new();
        if !fields[2].is_empty() {
            for literal in fields[2].split(',') {
                types.push(PrimitiveType::for_literal(literal)?);
            }
        }

        let mut props = BTreeSet::new();
        if !fields[3].is_empty() {
            for name in fields[3].split(',') {
                let prop = DbColumnProp::from_name(name).ok_or_else(|| {
                    LoadError::UnknownProperty {
                        line: line.to_string(),
                        value: name.to_string(),
                    }
                })?;
                props.insert(prop);
            }
        }

        Ok(DbColumnSymbol {
            name: fields[0].to_string(),
            id: parse_id(line, fields[1])?,
            types,
            props,
        })
    }

    fn save(&self, symbol: &DbColumnSymbol) -> Result<String, LoadError> {
        let mut types = Vec::with_capacity(symbol.types.len());
        for ty in &symbol.types {
            types.push(type_literal(*ty)?);
        }
        let props: Vec<&str> = symbol.props.iter().map(|prop| prop.name()).collect();
        Ok(format!(
            "{}!{}!{}!{}",
            symbol.name,
            symbol.id,
            types.join(","),
            props.join(",")
        ))
    }
}

/// The kind tag a catalog entry carries for its persisted symbols. The tag
/// selects the parse strategy when loading is driven off the catalog.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolKind {
    Basic,
    Typed,
    Config,
    Constant,
    DbColumn,
}

/// A symbol of any kind, produced when loading is driven off the catalog's
/// kind tags rather than a concrete loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedSymbol {
    Basic(BasicSymbol),
    Typed(TypedSymbol),
    Config(ConfigSymbol),
    Constant(ConstantSymbol),
    DbColumn(DbColumnSymbol),
}

impl Symbol for LoadedSymbol {
    fn name(&self) -> &str {
        match self {
            LoadedSymbol::Basic(symbol) => symbol.name(),
            LoadedSymbol::Typed(symbol) => symbol.name(),
            LoadedSymbol::Config(symbol) => symbol.name(),
            LoadedSymbol::Constant(symbol) => symbol.name(),
            LoadedSymbol::DbColumn(symbol) => symbol.name(),
        }
    }

    fn id(&self) -> i32 {
        match self {
            LoadedSymbol::Basic(symbol) => symbol.id(),
            LoadedSymbol::Typed(symbol) => symbol.id(),
            LoadedSymbol::Config(symbol) => symbol.id(),
            LoadedSymbol::Constant(symbol) => symbol.id(),
            LoadedSymbol::DbColumn(symbol) => symbol.id(),
        }
    }
}

impl SymbolKind {
    /// Parses one persisted line with this kind's loader.
    pub fn load_line(self, line: &str) -> Result<LoadedSymbol, LoadError> {
        match self {
            SymbolKind::Basic => BasicSymbolLoader.load(line).map(LoadedSymbol::Basic),
            SymbolKind::Typed => TypedSymbolLoader.load(line).map(LoadedSymbol::Typed),
            SymbolKind::Config => ConfigSymbolLoader.load(line).map(LoadedSymbol::Config),
            SymbolKind::Constant => ConstantSymbolLoader.load(line).map(LoadedSymbol::Constant),
            SymbolKind::DbColumn => DbColumnSymbolLoader.load(line).map(LoadedSymbol::DbColumn),
        }
    }
}
