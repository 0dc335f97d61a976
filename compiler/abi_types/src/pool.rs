//! Interning pool for canonical types.
//!
//! # Layout
//!
//! Each type is an [`Item`]: a [`Tag`] plus a slice of the shared `extra`
//! array holding its payload. Primitives have an empty payload. Compound
//! payloads:
//!
//! | Tag | Payload |
//! |---|---|
//! | `Optional` | `[kind, inner]` |
//! | `Metatype`, `ExistentialMetatype` | `[repr, instance]` |
//! | `Tuple` | `[label0, ty0, label1, ty1, ..]` |
//! | `Function` | `[ext_bits, param0, .., paramN, result]` |
//! | `Nominal` | `[decl, arg0, ..]` |
//! | `Existential` | `[proto0, ..]` (sorted, deduplicated) |
//!
//! # Sharing
//!
//! Interning goes through `&self`. Storage sits behind a
//! `parking_lot::RwLock`: lookups of already-interned types take the read
//! lock only, and a miss re-checks under the write lock before inserting,
//! so two threads interning the same structure get the same [`Idx`].

mod construct;
mod format;

use std::fmt;

use abi_ir::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{DeclId, ExtInfo, Idx, MetatypeRepr, OptionalKind, Tag};

/// Payload storage used for intern keys. Most payloads are short.
type Payload = SmallVec<[u32; 8]>;

/// One tuple element: an optional label and a type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TupleElem {
    /// `Name::EMPTY` when unlabeled.
    pub label: Name,
    pub ty: Idx,
}

impl TupleElem {
    /// Unlabeled element.
    pub const fn new(ty: Idx) -> Self {
        TupleElem {
            label: Name::EMPTY,
            ty,
        }
    }

    pub const fn labeled(label: Name, ty: Idx) -> Self {
        TupleElem { label, ty }
    }

    /// Same label, different type.
    #[must_use]
    pub const fn with_type(self, ty: Idx) -> Self {
        TupleElem {
            label: self.label,
            ty,
        }
    }
}

/// Decomposed function type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionSig {
    pub params: Vec<Idx>,
    pub result: Idx,
    pub ext: ExtInfo,
}

#[derive(Copy, Clone, Debug)]
struct Item {
    tag: Tag,
    start: u32,
    len: u32,
}

struct PoolData {
    items: Vec<Item>,
    extra: Vec<u32>,
    map: FxHashMap<(Tag, Payload), Idx>,
}

/// The canonical type pool.
pub struct Pool {
    data: RwLock<PoolData>,
}

impl Pool {
    /// Create a pool holding only the primitive types.
    pub fn new() -> Self {
        let primitives = [Tag::Int, Tag::Float, Tag::Unit, Tag::Never, Tag::Error];
        let items: Vec<Item> = primitives
            .iter()
            .map(|&tag| Item {
                tag,
                start: 0,
                len: 0,
            })
            .collect();
        debug_assert_eq!(items.len(), Idx::PRIMITIVE_COUNT as usize);

        Pool {
            data: RwLock::new(PoolData {
                items,
                extra: Vec::new(),
                map: FxHashMap::default(),
            }),
        }
    }

    /// Number of interned types, primitives included.
    pub fn len(&self) -> usize {
        self.data.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Intern a compound type by tag and payload.
    pub(crate) fn intern_complex(&self, tag: Tag, payload: &[u32]) -> Idx {
        let key = (tag, Payload::from_slice(payload));
        if let Some(&idx) = self.data.read().map.get(&key) {
            return idx;
        }

        let mut data = self.data.write();
        // Another writer may have interned it between the two locks.
        if let Some(&idx) = data.map.get(&key) {
            return idx;
        }

        let idx = Idx::from_raw(to_u32(data.items.len(), "type pool"));
        let start = to_u32(data.extra.len(), "type pool payload");
        data.extra.extend_from_slice(payload);
        data.items.push(Item {
            tag,
            start,
            len: to_u32(payload.len(), "type pool payload"),
        });
        data.map.insert(key, idx);
        idx
    }

    fn item(&self, idx: Idx) -> Item {
        let data = self.data.read();
        match data.items.get(idx.raw() as usize) {
            Some(item) => *item,
            None => panic!("{idx:?} is not in this pool ({} types)", data.items.len()),
        }
    }

    fn payload(&self, idx: Idx) -> Payload {
        let data = self.data.read();
        let Some(item) = data.items.get(idx.raw() as usize) else {
            panic!("{idx:?} is not in this pool ({} types)", data.items.len());
        };
        let start = item.start as usize;
        Payload::from_slice(&data.extra[start..start + item.len as usize])
    }

    fn expect_tag(&self, idx: Idx, expected: Tag) -> Payload {
        let found = self.tag(idx);
        if found != expected {
            panic!("expected {expected:?} for {idx:?}, found {found:?}");
        }
        self.payload(idx)
    }

    // === Queries ===

    /// Kind of a type.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in this pool.
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).tag
    }

    /// Optional kind and wrapped type, if `idx` is an optional of either kind.
    pub fn optional_payload(&self, idx: Idx) -> Option<(OptionalKind, Idx)> {
        if self.tag(idx) != Tag::Optional {
            return None;
        }
        let payload = self.payload(idx);
        let kind = u8::try_from(payload[0])
            .ok()
            .and_then(OptionalKind::from_u8)
            .unwrap_or_else(|| corrupt(idx));
        Some((kind, Idx::from_raw(payload[1])))
    }

    /// Instance type and representation of a metatype of either flavour.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a metatype.
    pub fn metatype_parts(&self, idx: Idx) -> (Idx, MetatypeRepr) {
        let tag = self.tag(idx);
        if !tag.is_metatype() {
            panic!("expected a metatype for {idx:?}, found {tag:?}");
        }
        let payload = self.payload(idx);
        let repr = u8::try_from(payload[0])
            .ok()
            .and_then(MetatypeRepr::from_u8)
            .unwrap_or_else(|| corrupt(idx));
        (Idx::from_raw(payload[1]), repr)
    }

    /// Elements of a tuple. The unit type is the empty tuple.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is neither a tuple nor unit.
    pub fn tuple_elems(&self, idx: Idx) -> Vec<TupleElem> {
        if idx == Idx::UNIT {
            return Vec::new();
        }
        self.expect_tag(idx, Tag::Tuple)
            .chunks_exact(2)
            .map(|pair| TupleElem::labeled(Name::from_raw(pair[0]), Idx::from_raw(pair[1])))
            .collect()
    }

    /// Decompose a function type.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a function.
    pub fn function_sig(&self, idx: Idx) -> FunctionSig {
        let payload = self.expect_tag(idx, Tag::Function);
        let ext = ExtInfo::from_bits(payload[0]).unwrap_or_else(|| corrupt(idx));
        let (&result, params) = payload[1..]
            .split_last()
            .unwrap_or_else(|| corrupt(idx));
        FunctionSig {
            params: params.iter().copied().map(Idx::from_raw).collect(),
            result: Idx::from_raw(result),
            ext,
        }
    }

    /// Declaration of a nominal type, if `idx` is one.
    pub fn nominal_decl(&self, idx: Idx) -> Option<DeclId> {
        if self.tag(idx) != Tag::Nominal {
            return None;
        }
        Some(DeclId::from_raw(self.payload(idx)[0]))
    }

    /// Generic arguments of a nominal type.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not nominal.
    pub fn nominal_args(&self, idx: Idx) -> Vec<Idx> {
        self.expect_tag(idx, Tag::Nominal)[1..]
            .iter()
            .copied()
            .map(Idx::from_raw)
            .collect()
    }

    /// Protocols of an existential, sorted by declaration id.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not an existential.
    pub fn existential_protocols(&self, idx: Idx) -> Vec<DeclId> {
        self.expect_tag(idx, Tag::Existential)
            .iter()
            .copied()
            .map(DeclId::from_raw)
            .collect()
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.read();
        f.debug_struct("Pool")
            .field("types", &data.items.len())
            .field("extra", &data.extra.len())
            .finish()
    }
}

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} overflow"))
}

#[cold]
fn corrupt(idx: Idx) -> ! {
    panic!("corrupt payload for {idx:?}")
}
