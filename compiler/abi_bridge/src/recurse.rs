//! Structural recurser.
//!
//! Walks tuples and a top-level optional, handing every leaf to the
//! mapper. Structure is rebuilt only when some leaf actually changed, so
//! an input with nothing to bridge comes back as the same [`Idx`].

use abi_types::{AbstractionPattern, Idx, Tag, TupleElem};
use smallvec::SmallVec;

use crate::mapper::map_leaf;
use crate::{BridgeContext, BridgeProblem, BridgePurpose};

/// Bridge `ty` for `purpose`, recursing through tuples.
#[tracing::instrument(level = "trace", skip(cx))]
pub(crate) fn bridge_type(
    cx: &BridgeContext<'_>,
    pattern: AbstractionPattern,
    ty: Idx,
    purpose: BridgePurpose,
) -> Result<Idx, BridgeProblem> {
    if cx.pool.tag(ty) == Tag::Tuple {
        bridge_tuple(cx, pattern, ty, purpose)
    } else {
        bridge_non_tuple(cx, pattern, ty, purpose)
    }
}

fn bridge_tuple(
    cx: &BridgeContext<'_>,
    pattern: AbstractionPattern,
    ty: Idx,
    purpose: BridgePurpose,
) -> Result<Idx, BridgeProblem> {
    let elems = cx.pool.tuple_elems(ty);
    let mut bridged: SmallVec<[TupleElem; 8]> = SmallVec::with_capacity(elems.len());
    let mut changed = false;

    for (i, elem) in elems.iter().enumerate() {
        let elem_pattern = pattern.tuple_element(cx.pool, cx.foreign, i);
        let elem_ty = bridge_type(cx, elem_pattern, elem.ty, purpose)?;
        changed |= elem_ty != elem.ty;
        bridged.push(elem.with_type(elem_ty));
    }

    if !changed {
        return Ok(ty);
    }
    Ok(cx.pool.tuple(&bridged))
}

fn bridge_non_tuple(
    cx: &BridgeContext<'_>,
    pattern: AbstractionPattern,
    ty: Idx,
    purpose: BridgePurpose,
) -> Result<Idx, BridgeProblem> {
    // An optional is wrapped at most once: the payload never picks up a
    // second optional layer from the result policy.
    if let Some((kind, inner)) = cx.pool.optional_payload(ty) {
        let bridged = map_leaf(cx, pattern, inner, false)?;
        if bridged == inner {
            return Ok(ty);
        }
        return Ok(cx.pool.optional_of(kind, bridged));
    }
    map_leaf(cx, pattern, ty, purpose.may_wrap_optional())
}
