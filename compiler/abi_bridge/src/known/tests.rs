use abi_ir::StringInterner;
use abi_types::{Decl, DeclKind, DeclTable};
use pretty_assertions::assert_eq;

use crate::{BridgeConfig, KnownDecls, WellKnown};

#[test]
fn resolves_configured_names() {
    let interner = StringInterner::new();
    let mut decls = DeclTable::new();
    let string = decls.add(Decl::new(interner.intern("String"), DeclKind::Struct));
    let ns_string = decls.add(Decl::new(interner.intern("NSString"), DeclKind::Class).foreign());
    let array = decls.add(Decl::new(interner.intern("Array"), DeclKind::Struct));

    let known = KnownDecls::resolve(&BridgeConfig::default(), &decls, &interner);

    assert_eq!(known.native(WellKnown::String), Some(string));
    assert_eq!(known.foreign(WellKnown::String), Some(ns_string));
    assert_eq!(known.native(WellKnown::Array), Some(array));
    assert_eq!(known.foreign(WellKnown::Array), None);
    assert_eq!(known.native(WellKnown::Set), None);

    assert_eq!(known.classify(string), Some(WellKnown::String));
    assert_eq!(known.classify(array), Some(WellKnown::Array));
    assert_eq!(known.classify(ns_string), None);
}

#[test]
fn empty_table_resolves_nothing() {
    let interner = StringInterner::new();
    let decls = DeclTable::new();
    let known = KnownDecls::resolve(&BridgeConfig::default(), &decls, &interner);
    for kind in WellKnown::ALL {
        assert_eq!(known.native(kind), None);
        assert_eq!(known.foreign(kind), None);
    }
    // Lookup never interns.
    assert!(interner.get("String").is_none());
}

#[test]
fn custom_names_are_honored() {
    let interner = StringInterner::new();
    let mut decls = DeclTable::new();
    let text = decls.add(Decl::new(interner.intern("Text"), DeclKind::Struct));
    let cf = decls.add(Decl::new(interner.intern("CFString"), DeclKind::Class).foreign());
    decls.add(Decl::new(interner.intern("String"), DeclKind::Struct));

    let config = BridgeConfig::new().with_pair(WellKnown::String, "Text", "CFString");
    let known = KnownDecls::resolve(&config, &decls, &interner);
    assert_eq!(known.native(WellKnown::String), Some(text));
    assert_eq!(known.foreign(WellKnown::String), Some(cf));
}

#[test]
fn collection_kinds() {
    assert!(WellKnown::Array.is_collection());
    assert!(WellKnown::Dictionary.is_collection());
    assert!(WellKnown::Set.is_collection());
    assert!(!WellKnown::String.is_collection());
    assert!(!WellKnown::Bool.is_collection());
    assert_eq!(WellKnown::Dictionary.to_string(), "dictionary");
}
