use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_intern_dedup() {
    let interner = StringInterner::new();
    let a = interner.intern("NSString");
    let b = interner.intern("NSString");
    let c = interner.intern("NSArray");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_lookup_roundtrip() {
    let interner = StringInterner::new();
    let name = interner.intern("Dictionary");
    assert_eq!(interner.lookup(name), "Dictionary");
}

#[test]
fn test_empty_is_preinterned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(interner.is_empty());
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("Set"), None);
    let name = interner.intern("Set");
    assert_eq!(interner.get("Set"), Some(name));
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let names: Vec<Name> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| interner.intern("ObjCBool")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| panic!("interning thread panicked")))
            .collect()
    });
    assert!(names.windows(2).all(|w| w[0] == w[1]));
}
