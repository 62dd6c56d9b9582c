//! The substitution engine.
//!
//! After a successful unification, [`substitute`] rewrites a type tree
//! under the completed [`InferSet`]: resolved variables become their
//! closed type, members of a purely variable class collapse onto the
//! class root, and quantifiers shed the variables that were substituted
//! away, dropping the wrapper entirely once nothing remains quantified.
//!
//! Rebuilt composites go back through the pool's interning constructors,
//! so the results participate in structural sharing like every other
//! type.

use crate::infer::records::InferSet;

use rill_types::{TypeId, TypeKind, TypePool};

/// Rewrites `ty` under the equivalences collected in `infs`.
pub(crate) fn substitute(pool: &mut TypePool, infs: &mut InferSet, ty: TypeId) -> TypeId {
    match pool.kind(ty).clone() {
        // Atoms are shared singletons; nothing to rewrite.
        TypeKind::Atom(_) => ty,

        TypeKind::Fn { from, to } => {
            let from = substitute(pool, infs, from);
            let to = substitute(pool, infs, to);
            pool.fn_ty(from, to)
        }

        TypeKind::List(element) => {
            let element = substitute(pool, infs, element);
            pool.list(element)
        }

        TypeKind::Tuple(elements) => {
            let mut rebuilt = Vec::with_capacity(elements.len());
            for element in elements {
                rebuilt.push(substitute(pool, infs, element));
            }
            pool.tuple(rebuilt)
        }

        TypeKind::Var(_) => match infs.lookup(ty) {
            // A resolved class replaces the variable by its closed type;
            // an unresolved one canonicalizes every member to the root,
            // so equal-but-distinct occurrences print and compare alike.
            Some(root) => infs.closed_of(root).unwrap_or(root),
            None => ty,
        },

        TypeKind::Forall { vars, body } => {
            let body = substitute(pool, infs, body);

            // A quantified variable survives unless it was substituted
            // away: either its class resolved to a closed type, or it
            // collapsed onto another representative.
            let mut kept = Vec::with_capacity(vars.len());
            for var in vars {
                let substituted = match infs.lookup(var) {
                    Some(root) => infs.closed_of(root).is_some() || root != var,
                    None => false,
                };

                if !substituted {
                    kept.push(var);
                }
            }

            if kept.is_empty() {
                body
            } else {
                pool.forall(kept, body)
            }
        }
    }
}
