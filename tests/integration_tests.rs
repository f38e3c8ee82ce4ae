//! Integration tests for the symbol-table layer.
//!
//! These tests verify that persisted symbol tables flow end to end: table
//! text is parsed through the catalog's loader associations, fed into
//! per-kind symbol lists, and looked up the way the semantic checker does
//! during name resolution.

use scriptc::{
    line_at_offset,
    symbols::{
        list::SymbolList,
        loader::{
            BasicSymbolLoader, ConstantSymbolLoader, LoadedSymbol, SymbolLoader, TypedSymbolLoader,
        },
        symbol::Symbol,
    },
    types::{primitive::PrimitiveType, stack::StackType},
    Span,
};

#[test]
fn test_load_tables_for_multiple_kinds() {
    let varbit_table = "chatbox_unlocked!0\nprayer_enabled!1\n";
    let varp_table = "option_music!168!int\nplayer_title!278!string\n";

    let mut varbits = SymbolList::new();
    varbits.load_all(&BasicSymbolLoader, varbit_table).unwrap();
    let mut varps = SymbolList::new();
    varps.load_all(&TypedSymbolLoader, varp_table).unwrap();

    assert_eq!(varbits.len(), 2);
    assert_eq!(varps.len(), 2);

    let varp = varps.lookup_by_name("option_music").unwrap();
    assert_eq!(varp.id, 168);
    assert_eq!(varp.ty, PrimitiveType::Int);
    assert_eq!(varp.ty.stack_type(), Some(StackType::Int));
}

#[test]
fn test_load_driven_by_catalog_association() {
    // The external loader step picks the parse strategy off the type the
    // table belongs to, not off the file contents.
    let kind = PrimitiveType::Varp.symbol_kind().unwrap();
    let loaded = kind.load_line("option_music!168!int").unwrap();

    assert_eq!(loaded.name(), "option_music");
    assert!(matches!(loaded, LoadedSymbol::Typed(_)));

    let kind = PrimitiveType::Constant.symbol_kind().unwrap();
    let loaded = kind.load_line("max_level!99").unwrap();

    assert_eq!(loaded.id(), -1);
    assert!(matches!(loaded, LoadedSymbol::Constant(_)));
}

#[test]
fn test_constant_reference_resolves_against_loaded_table() {
    use scriptc::ast::ast::{Syntax, SyntaxToken, TokenKind};
    use scriptc::ast::expressions::{ConstantSyntax, ConstantValue, IdentifierSyntax};

    let mut constants = SymbolList::new();
    constants
        .load_all(&ConstantSymbolLoader, "max_level!99\ngame_name!Stackworld\n")
        .unwrap();

    // The parser would produce this node for a `^max_level` reference.
    let source = "level = ^max_level;";
    let caret = SyntaxToken {
        kind: TokenKind::Caret,
        value: "^".to_string(),
        span: Span::new(8, 8),
    };
    let name = IdentifierSyntax::new(Span::new(9, 17), "max_level".to_string());
    let mut node = ConstantSyntax::new(Span::new(8, 8), caret, name);

    let symbol = constants.lookup_by_name(&node.name().text).unwrap();
    node.resolve(symbol.value.clone());

    assert_eq!(node.value(), &ConstantValue::Resolved("99".to_string()));

    // The node's span slices the reference back out of the source line.
    let (line_number, line, column) = line_at_offset(source, node.get_span().begin() as usize);
    assert_eq!(line_number, 1);
    assert_eq!(&line[column..=node.get_span().end() as usize], "^max_level");
}

#[test]
fn test_unresolved_reference_is_an_absent_lookup() {
    let mut constants = SymbolList::new();
    constants
        .load_all(&ConstantSymbolLoader, "max_level!99\n")
        .unwrap();

    // The semantic checker turns this absence into an "undefined symbol"
    // diagnostic; the table itself reports nothing.
    assert!(constants.lookup_by_name("min_level").is_none());
}

#[test]
fn test_conflicting_tables_abort_loading() {
    let mut varbits = SymbolList::new();
    varbits
        .load_all(&BasicSymbolLoader, "chatbox_unlocked!0\n")
        .unwrap();

    let result = varbits.load_all(&BasicSymbolLoader, "chatbox_unlocked!7\n");
    assert!(result.is_err());

    // The first source's entry survives.
    assert_eq!(varbits.lookup_by_name("chatbox_unlocked").unwrap().id, 0);
}
