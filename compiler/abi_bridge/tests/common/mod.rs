//! Standard-library fixture shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use abi_ir::StringInterner;
use abi_types::{
    Decl, DeclId, DeclKind, DeclTable, ForeignType, ForeignTypeId, ForeignTypes, Idx, Pool,
};
use abi_bridge::BridgeContext;

pub struct Stdlib {
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
    pub c_bool: ForeignTypeId,
    pub object_ptr: ForeignTypeId,
}

impl Stdlib {
    /// Every well-known declaration present.
    pub fn new() -> Self {
        Self::build(&[])
    }

    /// Leave out the named declarations.
    pub fn without(missing: &[&str]) -> Self {
        Self::build(missing)
    }

    fn build(missing: &[&str]) -> Self {
        let interner = StringInterner::new();
        let mut decls = DeclTable::new();
        let mut add = |name: &str, kind: DeclKind, foreign: bool| {
            let stored = if missing.contains(&name) {
                format!("_{name}Missing")
            } else {
                name.to_string()
            };
            let decl = Decl::new(interner.intern(&stored), kind);
            decls.add(if foreign { decl.foreign() } else { decl })
        };

        let string = add("String", DeclKind::Struct, false);
        let bool_ = add("Bool", DeclKind::Struct, false);
        let array = add("Array", DeclKind::Struct, false);
        let dictionary = add("Dictionary", DeclKind::Struct, false);
        let set = add("Set", DeclKind::Struct, false);
        let ns_string = add("NSString", DeclKind::Class, true);
        let objc_bool = add("ObjCBool", DeclKind::Struct, true);
        let ns_array = add("NSArray", DeclKind::Class, true);
        let ns_dictionary = add("NSDictionary", DeclKind::Class, true);
        let ns_set = add("NSSet", DeclKind::Class, true);
        let ns_object = add("NSObject", DeclKind::Class, true);
        let point = add("Point", DeclKind::Struct, false);
        let ns_copying = add("NSCopying", DeclKind::Protocol, true);

        let mut foreign = ForeignTypes::new();
        let c_bool = foreign.add(ForeignType::Bool);
        let object_ptr = foreign.add(ForeignType::ObjectPointer { class: None });

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
            c_bool,
            object_ptr,
        }
    }

    pub fn cx(&self) -> BridgeContext<'_> {
        BridgeContext::new(&self.pool, &self.decls, &self.foreign, &self.interner)
    }

    pub fn ty(&self, decl: DeclId) -> Idx {
        self.pool.nominal(decl, &[])
    }

    pub fn fmt(&self, ty: Idx) -> String {
        self.pool.format_type(ty, &self.decls, &self.interner)
    }
}
