//! Type formatting for diagnostics and debugging.

#![allow(clippy::format_push_string)] // Debug formatting prioritizes clarity over allocation

use abi_ir::StringInterner;

use crate::{DeclTable, Idx, MetatypeRepr, Pool, Representation, Tag};

impl Pool {
    /// Format a type as a human-readable string.
    ///
    /// Declaration names are resolved through `decls` and `interner`.
    pub fn format_type(&self, idx: Idx, decls: &DeclTable, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, decls, interner, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(
        &self,
        idx: Idx,
        decls: &DeclTable,
        interner: &StringInterner,
        buf: &mut String,
    ) {
        match self.tag(idx) {
            Tag::Int => buf.push_str("Int"),
            Tag::Float => buf.push_str("Double"),
            Tag::Unit => buf.push_str("()"),
            Tag::Never => buf.push_str("Never"),
            Tag::Error => buf.push_str("<error>"),

            Tag::Optional => {
                if let Some((kind, inner)) = self.optional_payload(idx) {
                    self.format_operand(inner, decls, interner, buf);
                    buf.push(kind.sigil());
                }
            }
            Tag::Metatype | Tag::ExistentialMetatype => {
                let (instance, repr) = self.metatype_parts(idx);
                match repr {
                    MetatypeRepr::Thin => buf.push_str("@thin "),
                    MetatypeRepr::Thick => {}
                    MetatypeRepr::Foreign => buf.push_str("@foreign "),
                }
                self.format_operand(instance, decls, interner, buf);
                buf.push_str(".Type");
            }

            Tag::Tuple => {
                buf.push('(');
                for (i, elem) in self.tuple_elems(idx).iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    if !elem.label.is_empty() {
                        buf.push_str(interner.lookup(elem.label));
                        buf.push_str(": ");
                    }
                    self.format_type_into(elem.ty, decls, interner, buf);
                }
                buf.push(')');
            }
            Tag::Function => {
                let sig = self.function_sig(idx);
                if sig.ext.noescape() {
                    buf.push_str("@noescape ");
                }
                if sig.ext.representation != Representation::Thick {
                    buf.push_str(&format!("@convention({}) ", sig.ext.representation));
                }
                buf.push('(');
                for (i, &param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(param, decls, interner, buf);
                }
                buf.push(')');
                if sig.ext.throws() {
                    buf.push_str(" throws");
                }
                buf.push_str(" -> ");
                self.format_type_into(sig.result, decls, interner, buf);
            }

            Tag::Nominal => {
                if let Some(decl) = self.nominal_decl(idx) {
                    buf.push_str(interner.lookup(decls.name(decl)));
                }
                let args = self.nominal_args(idx);
                if !args.is_empty() {
                    buf.push('<');
                    for (i, &arg) in args.iter().enumerate() {
                        if i > 0 {
                            buf.push_str(", ");
                        }
                        self.format_type_into(arg, decls, interner, buf);
                    }
                    buf.push('>');
                }
            }
            Tag::Existential => {
                let protocols = self.existential_protocols(idx);
                if protocols.is_empty() {
                    buf.push_str("Any");
                    return;
                }
                buf.push_str("any ");
                for (i, &proto) in protocols.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(" & ");
                    }
                    buf.push_str(interner.lookup(decls.name(proto)));
                }
            }
        }
    }

    /// Format a type in postfix-operand position, parenthesizing the forms
    /// that would otherwise bind wrongly (`(() -> Int)?`).
    fn format_operand(
        &self,
        idx: Idx,
        decls: &DeclTable,
        interner: &StringInterner,
        buf: &mut String,
    ) {
        let needs_parens = matches!(self.tag(idx), Tag::Function)
            || (self.tag(idx) == Tag::Existential && !self.existential_protocols(idx).is_empty());
        if needs_parens {
            buf.push('(');
            self.format_type_into(idx, decls, interner, buf);
            buf.push(')');
        } else {
            self.format_type_into(idx, decls, interner, buf);
        }
    }
}
