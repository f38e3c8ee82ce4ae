use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::errors::errors::TypeResolutionError;
use crate::symbols::loader::SymbolKind;

use super::stack::StackType;

/// The value a freshly declared variable of some type holds before it is
/// assigned. Types with no stack representation have none.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DefaultValue {
    Int(i32),
    Long(i64),
    Bool(bool),
    String(&'static str),
}

/// One entry in the compiler's closed catalog of primitive types.
///
/// Every entry carries a signature code (a `char` unique across the whole
/// catalog, including codes outside printable ASCII), an optional literal
/// representation, an optional [`StackType`], an optional [`DefaultValue`],
/// and, for types whose named instances are persisted, the [`SymbolKind`]
/// that loads them. All of those are derived by exhaustive match, so adding
/// a catalog entry without describing it fails to compile.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PrimitiveType {
    Undefined,
    Hook,
    Void,
    Constant,
    Type,
    Param,
    Flo,
    Flu,
    Varp,
    Varbit,
    Varc,
    Null,
    Int,
    String,
    SpotAnim,
    Seq,
    Stat,
    Synth,
    CoordGrid,
    Char,
    FontMetrics,
    MapArea,
    Enum,
    Npc,
    Model,
    TopLevelInterface,
    OverlayInterface,
    ClientInterface,
    Interface,
    Component,
    Long,
    Boolean,
    Category,
    NamedObj,
    Obj,
    Inv,
    Texture,
    MapElement,
    Graphic,
    Struct,
    Loc,
    Colour,
    Idk,
    ChatPhrase,
    Bas,
    DbRow,
    DbTable,
    DbColumn,
    NewVar,
    NpcUid,
    LocShape,
}

/// The static description of one catalog entry.
struct TypeInfo {
    code: char,
    representation: Option<&'static str>,
    stack_type: Option<StackType>,
    default_value: Option<DefaultValue>,
    symbol_kind: Option<SymbolKind>,
}

const fn info(
    code: char,
    representation: Option<&'static str>,
    stack_type: Option<StackType>,
    default_value: Option<DefaultValue>,
    symbol_kind: Option<SymbolKind>,
) -> TypeInfo {
    TypeInfo {
        code,
        representation,
        stack_type,
        default_value,
        symbol_kind,
    }
}

impl PrimitiveType {
    /// Every catalog entry, in declaration order. The code-character space is
    /// hand-assigned; tests assert the codes and representations stay
    /// pairwise unique.
    pub const VALUES: [PrimitiveType; 51] = [
        PrimitiveType::Undefined,
        PrimitiveType::Hook,
        PrimitiveType::Void,
        PrimitiveType::Constant,
        PrimitiveType::Type,
        PrimitiveType::Param,
        PrimitiveType::Flo,
        PrimitiveType::Flu,
        PrimitiveType::Varp,
        PrimitiveType::Varbit,
        PrimitiveType::Varc,
        PrimitiveType::Null,
        PrimitiveType::Int,
        PrimitiveType::String,
        PrimitiveType::SpotAnim,
        PrimitiveType::Seq,
        PrimitiveType::Stat,
        PrimitiveType::Synth,
        PrimitiveType::CoordGrid,
        PrimitiveType::Char,
        PrimitiveType::FontMetrics,
        PrimitiveType::MapArea,
        PrimitiveType::Enum,
        PrimitiveType::Npc,
        PrimitiveType::Model,
        PrimitiveType::TopLevelInterface,
        PrimitiveType::OverlayInterface,
        PrimitiveType::ClientInterface,
        PrimitiveType::Interface,
        PrimitiveType::Component,
        PrimitiveType::Long,
        PrimitiveType::Boolean,
        PrimitiveType::Category,
        PrimitiveType::NamedObj,
        PrimitiveType::Obj,
        PrimitiveType::Inv,
        PrimitiveType::Texture,
        PrimitiveType::MapElement,
        PrimitiveType::Graphic,
        PrimitiveType::Struct,
        PrimitiveType::Loc,
        PrimitiveType::Colour,
        PrimitiveType::Idk,
        PrimitiveType::ChatPhrase,
        PrimitiveType::Bas,
        PrimitiveType::DbRow,
        PrimitiveType::DbTable,
        PrimitiveType::DbColumn,
        PrimitiveType::NewVar,
        PrimitiveType::NpcUid,
        PrimitiveType::LocShape,
    ];

    fn info(self) -> TypeInfo {
        use DefaultValue::{Bool, Long};
        use StackType as St;
        use SymbolKind as Sk;

        // Shorthand for the common int-stacked, -1-defaulted content types.
        const MINUS_ONE: Option<DefaultValue> = Some(DefaultValue::Int(-1));

        match self {
            PrimitiveType::Undefined => info('\u{fff0}', Some("undefined"), None, None, None),
            PrimitiveType::Hook => info('\u{fff1}', Some("hook"), None, None, None),
            PrimitiveType::Void => info('\u{fff2}', Some("void"), None, None, None),
            PrimitiveType::Constant => {
                info('\u{fff3}', Some("constant"), None, None, Some(Sk::Constant))
            }
            PrimitiveType::Type => info('\u{fff6}', Some("type"), None, None, None),
            PrimitiveType::Param => info('\u{ffd0}', Some("param"), None, None, Some(Sk::Config)),
            PrimitiveType::Flo => info('\u{ffd1}', Some("flo"), None, None, None),
            PrimitiveType::Flu => info('\u{ffd2}', Some("flu"), None, None, None),
            PrimitiveType::Varp => info('\u{ffd3}', Some("varp"), None, None, Some(Sk::Typed)),
            PrimitiveType::Varbit => info('\u{ffd4}', Some("varbit"), None, None, Some(Sk::Basic)),
            PrimitiveType::Varc => info('\u{ffd6}', Some("varc"), None, None, Some(Sk::Typed)),
            PrimitiveType::Null => info('\u{ffd7}', None, None, None, None),
            PrimitiveType::Int => info(
                'i',
                Some("int"),
                Some(St::Int),
                Some(DefaultValue::Int(0)),
                None,
            ),
            PrimitiveType::String => info(
                's',
                Some("string"),
                Some(St::String),
                Some(DefaultValue::String("")),
                None,
            ),
            PrimitiveType::SpotAnim => {
                info('t', Some("spotanim"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Seq => info('A', Some("seq"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::Stat => info('S', Some("stat"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::Synth => {
                info('P', Some("synth"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::CoordGrid => {
                info('c', Some("coord"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Char => info('z', Some("char"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::FontMetrics => {
                info('f', Some("fontmetrics"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::MapArea => {
                info('`', Some("wma"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Enum => info('g', Some("enum"), Some(St::Int), MINUS_ONE, Some(Sk::Typed)),
            PrimitiveType::Npc => info('n', Some("npc"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::Model => {
                info('m', Some("model"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::TopLevelInterface => info(
                'F',
                Some("toplevelinterface"),
                Some(St::Int),
                MINUS_ONE,
                Some(Sk::Basic),
            ),
            PrimitiveType::OverlayInterface => info(
                'L',
                Some("overlayinterface"),
                Some(St::Int),
                MINUS_ONE,
                Some(Sk::Basic),
            ),
            PrimitiveType::ClientInterface => info(
                '\u{a9}',
                Some("clientinterface"),
                Some(St::Int),
                MINUS_ONE,
                Some(Sk::Basic),
            ),
            PrimitiveType::Interface => {
                info('a', Some("interface"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Component => {
                info('I', Some("component"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Long => info('\u{cf}', Some("long"), Some(St::Long), Some(Long(0)), None),
            PrimitiveType::Boolean => {
                info('1', Some("boolean"), Some(St::Int), Some(Bool(false)), None)
            }
            PrimitiveType::Category => {
                info('y', Some("category"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::NamedObj => {
                info('O', Some("namedobj"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Obj => info('o', Some("obj"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::Inv => info('v', Some("inv"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::Texture => {
                info('x', Some("texture"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::MapElement => {
                info('\u{b5}', Some("mapelement"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Graphic => {
                info('d', Some("graphic"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Struct => {
                info('J', Some("struct"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Loc => info('l', Some("loc"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::Colour => {
                info('C', Some("colour"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Idk => info('K', Some("idkit"), Some(St::Int), MINUS_ONE, Some(Sk::Basic)),
            PrimitiveType::ChatPhrase => {
                info('e', Some("chatphrase"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::Bas => {
                info('\u{20ac}', Some("bas"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::DbRow => {
                info('\u{d0}', Some("dbrow"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::DbTable => {
                info('\u{d1}', Some("dbtable"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::DbColumn => {
                info('\u{d2}', Some("dbcolumn"), Some(St::Int), MINUS_ONE, Some(Sk::DbColumn))
            }
            PrimitiveType::NewVar => {
                info('-', Some("newvar"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::NpcUid => {
                info('u', Some("npc_uid"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
            PrimitiveType::LocShape => {
                info('H', Some("locshape"), Some(St::Int), MINUS_ONE, Some(Sk::Basic))
            }
        }
    }

    /// The signature char code of the type, used by the code generator as the
    /// type's binary identifier.
    pub fn code(self) -> char {
        self.info().code
    }

    /// The textual representation of the type, if it has one. Some internal
    /// types (the null marker) have none.
    pub fn representation(self) -> Option<&'static str> {
        self.info().representation
    }

    /// The VM stack representation of the type, if it has one.
    pub fn stack_type(self) -> Option<StackType> {
        self.info().stack_type
    }

    /// The default value of the type, if it has one.
    pub fn default_value(self) -> Option<DefaultValue> {
        self.info().default_value
    }

    /// The kind of persisted symbol that names instances of this type, for
    /// types that are looked up by identifier.
    pub fn symbol_kind(self) -> Option<SymbolKind> {
        self.info().symbol_kind
    }

    /// Whether the type may be written literally as a type name by a user.
    /// `type` denotes "a type value itself" and is excluded even though it
    /// has a representation.
    pub fn is_referencable(self) -> bool {
        match self {
            PrimitiveType::Type => false,
            _ => self.representation().is_some(),
        }
    }

    /// Whether the type may be used as a local variable. Only types with a
    /// runtime stack representation qualify.
    pub fn is_declarable(self) -> bool {
        self.stack_type().is_some()
    }

    /// Whether the type may be stored in an array. Arrays hold int-stacked
    /// values, and boolean is excluded from an integer array slot.
    pub fn is_arrayable(self) -> bool {
        if self == PrimitiveType::Boolean {
            false
        } else {
            self.stack_type() == Some(StackType::Int)
        }
    }

    /// Whether the type may be referenced as config content inside a
    /// parameter or config declaration.
    pub fn is_config_type(self) -> bool {
        matches!(
            self,
            PrimitiveType::Seq
                | PrimitiveType::Stat
                | PrimitiveType::MapArea
                | PrimitiveType::Enum
                | PrimitiveType::Npc
                | PrimitiveType::Category
                | PrimitiveType::NamedObj
                | PrimitiveType::Obj
                | PrimitiveType::Inv
                | PrimitiveType::MapElement
                | PrimitiveType::Varp
                | PrimitiveType::Varbit
                | PrimitiveType::Varc
                | PrimitiveType::Struct
                | PrimitiveType::Loc
                | PrimitiveType::Param
                | PrimitiveType::Flo
                | PrimitiveType::Flu
                | PrimitiveType::SpotAnim
        )
    }

    /// Whether a value of this type may be the null sentinel. Only int-stacked
    /// types can hold it, and the null marker and param types never do.
    pub fn is_nullable(self) -> bool {
        if self.stack_type() != Some(StackType::Int) {
            false
        } else {
            !matches!(self, PrimitiveType::Null | PrimitiveType::Param)
        }
    }

    /// Resolves a user-written type name, restricted to referencable types.
    /// Absence is not an error; callers decide whether it is.
    pub fn for_representation(representation: &str) -> Option<PrimitiveType> {
        REFERENCABLE_LOOKUP.get(representation).copied()
    }

    /// Resolves any type with a representation, including non-referencable
    /// ones such as `type`.
    pub fn for_literal_or_null(literal: &str) -> Option<PrimitiveType> {
        LITERAL_LOOKUP.get(literal).copied()
    }

    /// Like [`PrimitiveType::for_literal_or_null`], but an unresolvable
    /// literal is a hard failure. Used where the literal originates from
    /// persisted data and a miss means the data is corrupt.
    pub fn for_literal(literal: &str) -> Result<PrimitiveType, TypeResolutionError> {
        PrimitiveType::for_literal_or_null(literal)
            .ok_or_else(|| TypeResolutionError(literal.to_string()))
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.representation() {
            Some(representation) => write!(f, "{}", representation),
            None => write!(f, "{:?}", self),
        }
    }
}

fn build_lookup(referencable_only: bool) -> HashMap<&'static str, PrimitiveType> {
    let mut map = HashMap::new();
    for ty in PrimitiveType::VALUES {
        if referencable_only && !ty.is_referencable() {
            continue;
        }
        let Some(representation) = ty.representation() else {
            continue;
        };
        if map.insert(representation, ty).is_some() {
            // Duplicate keys mean the hand-assigned catalog is broken.
            panic!("Duplicate type representation {:?}", representation);
        }
    }
    map
}

lazy_static! {
    static ref REFERENCABLE_LOOKUP: HashMap<&'static str, PrimitiveType> = build_lookup(true);
    static ref LITERAL_LOOKUP: HashMap<&'static str, PrimitiveType> = build_lookup(false);
}
