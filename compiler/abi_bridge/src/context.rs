//! Bridging context.

use abi_ir::StringInterner;
use abi_types::{DeclTable, ForeignTypes, Idx, Pool};

use crate::{BridgeConfig, KnownDecls};

/// Everything the engine reads while bridging.
///
/// Only the pool is written to, and the pool interns through `&self`, so a
/// context can be shared by threads lowering different functions.
#[derive(Debug)]
pub struct BridgeContext<'a> {
    pub pool: &'a Pool,
    pub decls: &'a DeclTable,
    pub foreign: &'a ForeignTypes,
    pub interner: &'a StringInterner,
    config: BridgeConfig,
    known: KnownDecls,
}

impl<'a> BridgeContext<'a> {
    /// Create a context with the default declaration names.
    pub fn new(
        pool: &'a Pool,
        decls: &'a DeclTable,
        foreign: &'a ForeignTypes,
        interner: &'a StringInterner,
    ) -> Self {
        Self::with_config(pool, decls, foreign, interner, BridgeConfig::default())
    }

    /// Create a context resolving well-known declarations from `config`.
    pub fn with_config(
        pool: &'a Pool,
        decls: &'a DeclTable,
        foreign: &'a ForeignTypes,
        interner: &'a StringInterner,
        config: BridgeConfig,
    ) -> Self {
        let known = KnownDecls::resolve(&config, decls, interner);
        BridgeContext {
            pool,
            decls,
            foreign,
            interner,
            config,
            known,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn known(&self) -> &KnownDecls {
        &self.known
    }

    /// Render a type for diagnostics.
    pub fn format_type(&self, ty: Idx) -> String {
        self.pool.format_type(ty, self.decls, self.interner)
    }
}
