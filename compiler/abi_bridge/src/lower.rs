//! Orchestration entries.
//!
//! These are what signature lowering calls. Each entry decides from the
//! representation whether bridging applies, runs the recurser, and on
//! failure reports exactly one diagnostic.

use abi_diagnostic::DiagnosticSink;
use abi_ir::Span;
use abi_types::{AbstractionPattern, Idx, Representation};

use crate::recurse::bridge_type;
use crate::{classify, BridgeContext, BridgeFailure, BridgeProblem, BridgePurpose};

/// A global variable as seen by lowering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GlobalVar {
    /// The declared type.
    pub ty: Idx,
    /// Pattern recorded for the storage, if any.
    pub pattern: AbstractionPattern,
}

/// Lowered storage type of a global variable.
///
/// Globals are stored natively as values: no bridging happens here. The
/// recorded pattern's type wins over the declared type when one exists.
pub fn lowered_type_of_global(cx: &BridgeContext<'_>, global: &GlobalVar) -> Idx {
    let ty = global.pattern.ty().unwrap_or(global.ty);
    tracing::trace!(ty = %cx.format_type(ty), "lowered global storage");
    ty
}

/// Bridge `ty` for a signature with representation `rep`.
///
/// Native representations return `ty` unchanged. Nothing is reported;
/// callers that must report failures use the other entries.
pub fn lowered_bridged_type(
    cx: &BridgeContext<'_>,
    pattern: AbstractionPattern,
    ty: Idx,
    rep: Representation,
    purpose: BridgePurpose,
) -> Result<Idx, BridgeProblem> {
    if !classify(rep).needs_bridging() {
        return Ok(ty);
    }
    bridge_type(cx, pattern, ty, purpose)
}

/// Bridge a parameter type.
pub fn bridged_input_type<S: DiagnosticSink + ?Sized>(
    cx: &BridgeContext<'_>,
    sink: &mut S,
    rep: Representation,
    pattern: AbstractionPattern,
    ty: Idx,
    span: Span,
) -> Result<Idx, BridgeFailure> {
    lowered_bridged_type(cx, pattern, ty, rep, BridgePurpose::ForArgument)
        .map_err(|problem| escalate(cx, sink, problem, span))
}

/// Bridge a result type.
///
/// `suppress_optional` is set when the foreign declaration promises a
/// non-null result; bridged strings and collections then stay non-optional.
pub fn bridged_result_type<S: DiagnosticSink + ?Sized>(
    cx: &BridgeContext<'_>,
    sink: &mut S,
    rep: Representation,
    pattern: AbstractionPattern,
    ty: Idx,
    suppress_optional: bool,
    span: Span,
) -> Result<Idx, BridgeFailure> {
    let purpose = BridgePurpose::for_result(suppress_optional);
    lowered_bridged_type(cx, pattern, ty, rep, purpose)
        .map_err(|problem| escalate(cx, sink, problem, span))
}

/// Abstraction patterns for a whole function signature.
#[derive(Copy, Clone, Debug)]
pub struct FunctionPatterns<'p> {
    /// One pattern per parameter. Missing entries are opaque.
    pub params: &'p [AbstractionPattern],
    pub result: AbstractionPattern,
    pub suppress_optional_result: bool,
}

impl FunctionPatterns<'_> {
    /// Nothing known about any position.
    pub const fn opaque() -> Self {
        FunctionPatterns {
            params: &[],
            result: AbstractionPattern::Opaque,
            suppress_optional_result: false,
        }
    }

    fn param(&self, index: usize) -> AbstractionPattern {
        self.params
            .get(index)
            .copied()
            .unwrap_or(AbstractionPattern::Opaque)
    }
}

/// Bridge every parameter and the result of a function type under the
/// function's own representation.
///
/// Returns `fn_ty` itself when nothing changed. Stops at the first
/// position that cannot be bridged.
///
/// # Panics
///
/// Panics if `fn_ty` is not a function type.
#[tracing::instrument(level = "trace", skip(cx, sink, patterns))]
pub fn bridged_function_type<S: DiagnosticSink + ?Sized>(
    cx: &BridgeContext<'_>,
    sink: &mut S,
    fn_ty: Idx,
    patterns: &FunctionPatterns<'_>,
    span: Span,
) -> Result<Idx, BridgeFailure> {
    let sig = cx.pool.function_sig(fn_ty);
    let rep = sig.ext.representation;
    if !classify(rep).needs_bridging() {
        return Ok(fn_ty);
    }

    let mut params = Vec::with_capacity(sig.params.len());
    for (i, &param) in sig.params.iter().enumerate() {
        params.push(bridged_input_type(cx, sink, rep, patterns.param(i), param, span)?);
    }
    let result = bridged_result_type(
        cx,
        sink,
        rep,
        patterns.result,
        sig.result,
        patterns.suppress_optional_result,
        span,
    )?;

    if params == sig.params && result == sig.result {
        return Ok(fn_ty);
    }
    Ok(cx.pool.function(&params, result, sig.ext))
}

/// Report `problem` and produce the failure value.
#[cold]
fn escalate<S: DiagnosticSink + ?Sized>(
    cx: &BridgeContext<'_>,
    sink: &mut S,
    problem: BridgeProblem,
    span: Span,
) -> BridgeFailure {
    let ty = problem.ty();
    tracing::debug!(ty = %cx.format_type(ty), %problem, "bridging failed");
    let guarantee = sink.emit_error(problem.into_diagnostic(cx, span));
    BridgeFailure { ty, guarantee }
}
