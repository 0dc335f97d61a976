//! Bridging failures.
//!
//! [`BridgeProblem`] is what the mapper reports. The orchestration entries
//! turn a problem into a diagnostic and hand the caller a
//! [`BridgeFailure`] carrying the proof that the diagnostic was emitted.

use abi_diagnostic::{Diagnostic, ErrorCode, ErrorGuaranteed};
use abi_ir::Span;
use abi_types::Idx;
use thiserror::Error;

use crate::{BridgeContext, WellKnown};

/// A type that cannot be represented in the foreign convention.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum BridgeProblem {
    /// A well-known native type matched, but the declaration it bridges to
    /// is not available.
    #[error("no foreign bridge type for {ty} ({kind})")]
    NoBridgeType { ty: Idx, kind: WellKnown },
}

impl BridgeProblem {
    /// The leaf type that could not be bridged.
    pub fn ty(&self) -> Idx {
        match *self {
            BridgeProblem::NoBridgeType { ty, .. } => ty,
        }
    }

    /// Build the user-facing diagnostic for this problem.
    pub fn into_diagnostic(self, cx: &BridgeContext<'_>, span: Span) -> Diagnostic {
        match self {
            BridgeProblem::NoBridgeType { ty, kind } => {
                let foreign = &cx.config().pair(kind).foreign;
                let mut diag = Diagnostic::error(ErrorCode::E3001)
                    .with_message(format!(
                        "could not find a foreign bridge type for '{}'",
                        cx.format_type(ty)
                    ))
                    .with_label(span, "used in a foreign-convention signature here");
                if let Some(native) = cx.known().native(kind) {
                    let decl_span = cx.decls.get(native).span;
                    if !decl_span.is_dummy() {
                        diag = diag.with_label(decl_span, "native type declared here");
                    }
                }
                diag.with_note(format!(
                    "the {kind} bridge type '{foreign}' is not declared"
                ))
            }
        }
    }
}

/// A bridging problem that has been reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("could not bridge {ty}: {guarantee}")]
pub struct BridgeFailure {
    /// The leaf type that could not be bridged.
    pub ty: Idx,
    pub guarantee: ErrorGuaranteed,
}
