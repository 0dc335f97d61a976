//! Nominal declarations referenced by the type pool.
//!
//! The bridging engine only needs a declaration's identity, its kind and
//! whether it is exposed to the foreign runtime; everything else about a
//! declaration belongs to earlier phases.

use abi_ir::{Name, Span};
use rustc_hash::FxHashMap;

/// Index of a declaration in a [`DeclTable`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DeclId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a nominal declaration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeclKind {
    Struct,
    Enum,
    Class,
    Protocol,
}

/// A nominal declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Decl {
    pub name: Name,
    pub kind: DeclKind,
    /// Declared in, or exposed to, the foreign object runtime.
    ///
    /// For protocols this decides whether an existential of the protocol
    /// has a foreign representation.
    pub foreign: bool,
    pub span: Span,
}

impl Decl {
    pub fn new(name: Name, kind: DeclKind) -> Self {
        Decl {
            name,
            kind,
            foreign: false,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn foreign(mut self) -> Self {
        self.foreign = true;
        self
    }

    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Table of every nominal declaration visible to lowering.
///
/// Names map to the most recently added declaration with that name.
#[derive(Clone, Debug, Default)]
pub struct DeclTable {
    decls: Vec<Decl>,
    by_name: FxHashMap<Name, DeclId>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the table already holds `u32::MAX` declarations.
    pub fn add(&mut self, decl: Decl) -> DeclId {
        let id = DeclId(
            u32::try_from(self.decls.len())
                .unwrap_or_else(|_| panic!("declaration table overflow")),
        );
        self.by_name.insert(decl.name, id);
        self.decls.push(decl);
        id
    }

    /// Look up a declaration.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this table.
    pub fn get(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Find a declaration by name.
    pub fn lookup(&self, name: Name) -> Option<DeclId> {
        self.by_name.get(&name).copied()
    }

    #[inline]
    pub fn kind(&self, id: DeclId) -> DeclKind {
        self.get(id).kind
    }

    #[inline]
    pub fn name(&self, id: DeclId) -> Name {
        self.get(id).name
    }

    #[inline]
    pub fn is_class(&self, id: DeclId) -> bool {
        self.kind(id) == DeclKind::Class
    }

    /// Whether `id` is a protocol exposed to the foreign runtime.
    pub fn is_foreign_protocol(&self, id: DeclId) -> bool {
        let decl = self.get(id);
        decl.kind == DeclKind::Protocol && decl.foreign
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Decl)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, decl)| (DeclId(i as u32), decl))
    }
}
