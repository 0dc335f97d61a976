//! Core type mapper.
//!
//! Substitutes one leaf type with its foreign equivalent. Leaves are
//! dispatched on their [`Tag`]; the rules are disjoint by tag, so their
//! order within the match does not matter.
//!
//! | Leaf | Foreign form |
//! |---|---|
//! | string | foreign string class |
//! | boolean | unchanged for a primitive boolean shape, else boxed boolean |
//! | class metatype | same instance, foreign representation |
//! | foreign existential metatype | same instance, foreign representation |
//! | thick function | block with the same flags |
//! | array, dictionary, set | foreign collection class |
//!
//! Strings and collections become optional when the caller allows it and
//! the pattern carries a foreign shape.

use abi_types::{AbstractionPattern, Idx, MetatypeRepr, Representation, Tag};

use crate::{BridgeContext, BridgeProblem, WellKnown};

/// Map one leaf type.
///
/// `wrap_optional` is the result-position nullability policy; it only has
/// an effect on strings and collections, and only when `pattern` has a
/// foreign shape.
pub(crate) fn map_leaf(
    cx: &BridgeContext<'_>,
    pattern: AbstractionPattern,
    ty: Idx,
    wrap_optional: bool,
) -> Result<Idx, BridgeProblem> {
    let mapped = match cx.pool.tag(ty) {
        Tag::Nominal => map_nominal(cx, pattern, ty, wrap_optional)?,
        Tag::Metatype => map_class_metatype(cx, ty),
        Tag::ExistentialMetatype => map_existential_metatype(cx, ty),
        Tag::Function => map_function(cx, ty),
        Tag::Int
        | Tag::Float
        | Tag::Unit
        | Tag::Never
        | Tag::Error
        | Tag::Optional
        | Tag::Tuple
        | Tag::Existential => ty,
    };
    if mapped != ty {
        tracing::debug!(from = %cx.format_type(ty), to = %cx.format_type(mapped), "bridged leaf");
    }
    Ok(mapped)
}

fn map_nominal(
    cx: &BridgeContext<'_>,
    pattern: AbstractionPattern,
    ty: Idx,
    wrap_optional: bool,
) -> Result<Idx, BridgeProblem> {
    let Some(kind) = cx.pool.nominal_decl(ty).and_then(|d| cx.known().classify(d)) else {
        return Ok(ty);
    };

    if kind == WellKnown::Bool {
        let primitive_shape = pattern
            .foreign_type()
            .is_some_and(|shape| cx.foreign.is_boolean(shape));
        if primitive_shape {
            return Ok(ty);
        }
        return foreign_nominal(cx, ty, kind);
    }

    let bridged = foreign_nominal(cx, ty, kind)?;
    if wrap_optional && pattern.foreign_type().is_some() {
        return Ok(cx.pool.optional(bridged));
    }
    Ok(bridged)
}

/// The foreign declaration for `kind`, as a type.
fn foreign_nominal(cx: &BridgeContext<'_>, ty: Idx, kind: WellKnown) -> Result<Idx, BridgeProblem> {
    match cx.known().foreign(kind) {
        Some(decl) => Ok(cx.pool.nominal(decl, &[])),
        None => Err(BridgeProblem::NoBridgeType { ty, kind }),
    }
}

fn map_class_metatype(cx: &BridgeContext<'_>, ty: Idx) -> Idx {
    let (instance, _) = cx.pool.metatype_parts(ty);
    let is_class = cx
        .pool
        .nominal_decl(instance)
        .is_some_and(|decl| cx.decls.is_class(decl));
    if is_class {
        cx.pool.metatype(instance, MetatypeRepr::Foreign)
    } else {
        ty
    }
}

fn map_existential_metatype(cx: &BridgeContext<'_>, ty: Idx) -> Idx {
    let (instance, _) = cx.pool.metatype_parts(ty);
    if is_foreign_existential(cx, instance) {
        cx.pool.existential_metatype(instance, MetatypeRepr::Foreign)
    } else {
        ty
    }
}

/// A non-empty composition of protocols that are all foreign-exposed.
fn is_foreign_existential(cx: &BridgeContext<'_>, ty: Idx) -> bool {
    if cx.pool.tag(ty) != Tag::Existential {
        return false;
    }
    let protocols = cx.pool.existential_protocols(ty);
    !protocols.is_empty() && protocols.iter().all(|&p| cx.decls.is_foreign_protocol(p))
}

fn map_function(cx: &BridgeContext<'_>, ty: Idx) -> Idx {
    let ext = cx.pool.function_sig(ty).ext;
    match ext.representation {
        Representation::Block
        | Representation::CFunctionPointer
        | Representation::Thin
        | Representation::Method
        | Representation::ForeignMethod
        | Representation::WitnessMethod => ty,
        Representation::Thick => cx
            .pool
            .function_with_ext(ty, ext.with_representation(Representation::Block)),
    }
}
