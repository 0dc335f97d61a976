//! Shared test fixture for bridging tests.
//!
//! Builds a small standard library: the native string, boolean and
//! collection structs, their foreign classes, a few protocols, and the
//! foreign descriptors the patterns refer to. Only compiled in test builds.

use abi_diagnostic::DiagnosticQueue;
use abi_ir::{Span, StringInterner};
use abi_types::{
    AbstractionPattern, Decl, DeclId, DeclKind, DeclTable, ExtInfo, ForeignType, ForeignTypeId,
    ForeignTypes, Idx, Pool, Representation,
};

use crate::{BridgeConfig, BridgeContext};

pub(crate) struct Stdlib {
    pub interner: StringInterner,
    pub decls: DeclTable,
    pub foreign: ForeignTypes,
    pub pool: Pool,

    pub string: DeclId,
    pub bool_: DeclId,
    pub array: DeclId,
    pub dictionary: DeclId,
    pub set: DeclId,
    pub ns_string: DeclId,
    pub objc_bool: DeclId,
    pub ns_array: DeclId,
    pub ns_dictionary: DeclId,
    pub ns_set: DeclId,
    pub ns_object: DeclId,
    pub point: DeclId,
    pub ns_copying: DeclId,
    pub hashable: DeclId,

    /// `_Bool`
    pub c_bool: ForeignTypeId,
    /// `typedef _Bool bool_t`
    pub c_bool_typedef: ForeignTypeId,
    /// `typedef signed char BOOL`
    pub objc_bool_typedef: ForeignTypeId,
    /// `NSString *`
    pub ns_string_ptr: ForeignTypeId,
}

/// Which well-known foreign classes to leave out of the fixture.
#[derive(Copy, Clone, Default)]
pub(crate) struct Omit {
    pub ns_string: bool,
    pub objc_bool: bool,
    pub ns_array: bool,
}

impl Stdlib {
    pub(crate) fn new() -> Self {
        Self::without(Omit::default())
    }

    pub(crate) fn without(omit: Omit) -> Self {
        let interner = StringInterner::new();
        let mut decls = DeclTable::new();
        let mut add = |name: &str, kind: DeclKind, foreign: bool| {
            let decl = Decl::new(interner.intern(name), kind);
            decls.add(if foreign { decl.foreign() } else { decl })
        };

        let string = add("String", DeclKind::Struct, false);
        let bool_ = add("Bool", DeclKind::Struct, false);
        let array = add("Array", DeclKind::Struct, false);
        let dictionary = add("Dictionary", DeclKind::Struct, false);
        let set = add("Set", DeclKind::Struct, false);
        let ns_string = add(
            if omit.ns_string { "_NSStringMissing" } else { "NSString" },
            DeclKind::Class,
            true,
        );
        let objc_bool = add(
            if omit.objc_bool { "_ObjCBoolMissing" } else { "ObjCBool" },
            DeclKind::Struct,
            true,
        );
        let ns_array = add(
            if omit.ns_array { "_NSArrayMissing" } else { "NSArray" },
            DeclKind::Class,
            true,
        );
        let ns_dictionary = add("NSDictionary", DeclKind::Class, true);
        let ns_set = add("NSSet", DeclKind::Class, true);
        let ns_object = add("NSObject", DeclKind::Class, true);
        let point = add("Point", DeclKind::Struct, false);
        let ns_copying = add("NSCopying", DeclKind::Protocol, true);
        let hashable = add("Hashable", DeclKind::Protocol, false);

        let mut foreign = ForeignTypes::new();
        let c_bool = foreign.add(ForeignType::Bool);
        let c_bool_typedef = foreign.add(ForeignType::Typedef {
            name: interner.intern("bool_t"),
            underlying: c_bool,
        });
        let schar = foreign.add(ForeignType::Char { signed: true });
        let objc_bool_typedef = foreign.add(ForeignType::Typedef {
            name: interner.intern("BOOL"),
            underlying: schar,
        });
        let ns_string_ptr = foreign.add(ForeignType::ObjectPointer {
            class: Some(interner.intern("NSString")),
        });

        Stdlib {
            interner,
            decls,
            foreign,
            pool: Pool::new(),
            string,
            bool_,
            array,
            dictionary,
            set,
            ns_string,
            objc_bool,
            ns_array,
            ns_dictionary,
            ns_set,
            ns_object,
            point,
            ns_copying,
            hashable,
            c_bool,
            c_bool_typedef,
            objc_bool_typedef,
            ns_string_ptr,
        }
    }

    pub(crate) fn cx(&self) -> BridgeContext<'_> {
        BridgeContext::new(&self.pool, &self.decls, &self.foreign, &self.interner)
    }

    pub(crate) fn cx_with(&self, config: BridgeConfig) -> BridgeContext<'_> {
        BridgeContext::with_config(&self.pool, &self.decls, &self.foreign, &self.interner, config)
    }

    // === Types ===

    pub(crate) fn string_ty(&self) -> Idx {
        self.pool.nominal(self.string, &[])
    }

    pub(crate) fn bool_ty(&self) -> Idx {
        self.pool.nominal(self.bool_, &[])
    }

    pub(crate) fn array_of(&self, elem: Idx) -> Idx {
        self.pool.nominal(self.array, &[elem])
    }

    pub(crate) fn dictionary_of(&self, key: Idx, value: Idx) -> Idx {
        self.pool.nominal(self.dictionary, &[key, value])
    }

    pub(crate) fn set_of(&self, elem: Idx) -> Idx {
        self.pool.nominal(self.set, &[elem])
    }

    pub(crate) fn class_ty(&self, decl: DeclId) -> Idx {
        self.pool.nominal(decl, &[])
    }

    pub(crate) fn closure(&self, params: &[Idx], ret: Idx, rep: Representation) -> Idx {
        self.pool.function(params, ret, ExtInfo::new(rep))
    }

    // === Patterns ===

    /// A foreign-declared pattern for `ty` with descriptor `foreign`.
    pub(crate) fn shaped(&self, ty: Idx, foreign: ForeignTypeId) -> AbstractionPattern {
        AbstractionPattern::Foreign { ty, foreign }
    }

    pub(crate) fn fmt(&self, ty: Idx) -> String {
        self.pool.format_type(ty, &self.decls, &self.interner)
    }
}

/// A fresh queue that keeps every diagnostic.
pub(crate) fn sink() -> DiagnosticQueue {
    DiagnosticQueue::new()
}

pub(crate) fn span() -> Span {
    Span::new(10, 24)
}
