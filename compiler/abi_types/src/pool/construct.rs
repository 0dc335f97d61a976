//! Type construction helpers for the Pool.
//!
//! Every constructor interns, so building a type that already exists
//! returns the existing handle.

use smallvec::SmallVec;

use crate::{DeclId, ExtInfo, Idx, MetatypeRepr, OptionalKind, Pool, Tag, TupleElem};

impl Pool {
    // === Wrappers ===

    /// Create `inner?`.
    pub fn optional(&self, inner: Idx) -> Idx {
        self.optional_of(OptionalKind::Optional, inner)
    }

    /// Create an optional of the given kind.
    pub fn optional_of(&self, kind: OptionalKind, inner: Idx) -> Idx {
        self.intern_complex(Tag::Optional, &[kind as u32, inner.raw()])
    }

    /// Create `instance.Type` with the given representation.
    pub fn metatype(&self, instance: Idx, repr: MetatypeRepr) -> Idx {
        self.intern_complex(Tag::Metatype, &[repr as u32, instance.raw()])
    }

    /// Create the metatype of an existential.
    pub fn existential_metatype(&self, instance: Idx, repr: MetatypeRepr) -> Idx {
        self.intern_complex(Tag::ExistentialMetatype, &[repr as u32, instance.raw()])
    }

    // === Structural ===

    /// Create a tuple type. The empty tuple is [`Idx::UNIT`].
    pub fn tuple(&self, elems: &[TupleElem]) -> Idx {
        if elems.is_empty() {
            return Idx::UNIT;
        }
        let mut payload: SmallVec<[u32; 8]> = SmallVec::with_capacity(elems.len() * 2);
        for elem in elems {
            payload.push(elem.label.raw());
            payload.push(elem.ty.raw());
        }
        self.intern_complex(Tag::Tuple, &payload)
    }

    /// Create a tuple of unlabeled elements.
    pub fn tuple_unlabeled(&self, tys: &[Idx]) -> Idx {
        let elems: Vec<TupleElem> = tys.iter().copied().map(TupleElem::new).collect();
        self.tuple(&elems)
    }

    /// Create a function type `(params...) -> ret`.
    pub fn function(&self, params: &[Idx], ret: Idx, ext: ExtInfo) -> Idx {
        // Layout: [ext_bits, param0, param1, ..., return_type]
        let mut payload: SmallVec<[u32; 8]> = SmallVec::with_capacity(params.len() + 2);
        payload.push(ext.to_bits());
        payload.extend(params.iter().map(|p| p.raw()));
        payload.push(ret.raw());
        self.intern_complex(Tag::Function, &payload)
    }

    /// Rebuild a function type with different ext-info.
    ///
    /// # Panics
    ///
    /// Panics if `fn_ty` is not a function.
    pub fn function_with_ext(&self, fn_ty: Idx, ext: ExtInfo) -> Idx {
        let sig = self.function_sig(fn_ty);
        if sig.ext == ext {
            return fn_ty;
        }
        self.function(&sig.params, sig.result, ext)
    }

    // === Declaration-backed ===

    /// Create a nominal type with generic arguments.
    pub fn nominal(&self, decl: DeclId, args: &[Idx]) -> Idx {
        let mut payload: SmallVec<[u32; 8]> = SmallVec::with_capacity(args.len() + 1);
        payload.push(decl.raw());
        payload.extend(args.iter().map(|a| a.raw()));
        self.intern_complex(Tag::Nominal, &payload)
    }

    /// Create a protocol composition. Order and repetition do not matter.
    pub fn existential(&self, protocols: &[DeclId]) -> Idx {
        let mut payload: SmallVec<[u32; 8]> = protocols.iter().map(|p| p.raw()).collect();
        payload.sort_unstable();
        payload.dedup();
        self.intern_complex(Tag::Existential, &payload)
    }
}
