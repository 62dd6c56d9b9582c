//! The structural unifier.
//!
//! [`unify`] walks two type trees in lock-step, recording every
//! constraint it discovers in the [`InferSet`]. The set may be partially
//! mutated by the time a failure surfaces; callers discard the whole set
//! on failure, so no rollback is attempted.
//!
//! Dispatch order matters:
//! 1. variables resolve through the inference set before anything else;
//! 2. quantifiers are unwrapped transparently: their own variable sets
//!    grant no assignability here, only the bound set built by the
//!    orchestration layer does (that is how instantiation works);
//! 3. everything else is a kind-by-kind structural walk.

use crate::error::{Result, TypeError};
use crate::infer::records::InferSet;

use rill_log::trace;
use rill_types::{TypeId, TypeKind, TypePool};

/// Unifies `l` with `r` under the bound set of `infs`.
///
/// On success the inference set holds every equivalence discovered; on
/// failure it is in an unspecified partial state and must be dropped.
pub(crate) fn unify(pool: &TypePool, infs: &mut InferSet, l: TypeId, r: TypeId) -> Result<()> {
    trace!("unifying {} with {}", pool.display(l), pool.display(r));

    match (pool.kind(l), pool.kind(r)) {
        (TypeKind::Var(_), _) | (_, TypeKind::Var(_)) => infer_equal(pool, infs, l, r),

        // A quantifier is transparent to the walk: which of its
        // variables are assignable was decided by the caller.
        (TypeKind::Forall { body, .. }, _) => unify(pool, infs, *body, r),
        (_, TypeKind::Forall { body, .. }) => unify(pool, infs, l, *body),

        // Interning makes identity the structural check for atoms.
        (TypeKind::Atom(_), TypeKind::Atom(_)) => {
            if l == r {
                Ok(())
            } else {
                Err(TypeError::Mismatch {
                    expected: l,
                    found: r,
                })
            }
        }

        (
            TypeKind::Fn { from: l_from, to: l_to },
            TypeKind::Fn { from: r_from, to: r_to },
        ) => {
            unify(pool, infs, *l_from, *r_from)?;
            unify(pool, infs, *l_to, *r_to)
        }

        (TypeKind::List(l_elem), TypeKind::List(r_elem)) => {
            unify(pool, infs, *l_elem, *r_elem)
        }

        (TypeKind::Tuple(l_elems), TypeKind::Tuple(r_elems)) => {
            if l_elems.len() != r_elems.len() {
                return Err(TypeError::Mismatch {
                    expected: l,
                    found: r,
                });
            }

            for (&l_elem, &r_elem) in l_elems.iter().zip(r_elems.iter()) {
                unify(pool, infs, l_elem, r_elem)?;
            }

            Ok(())
        }

        // Different kinds on each side.
        _ => Err(TypeError::Mismatch {
            expected: l,
            found: r,
        }),
    }
}

/// Resolves an equation in which at least one side is a variable.
///
/// A variable outside the bound set behaves like a closed, opaque type:
/// it may be compared but never assigned.
pub(crate) fn infer_equal(
    pool: &TypePool,
    infs: &mut InferSet,
    l: TypeId,
    r: TypeId,
) -> Result<()> {
    trace!("{} = {}", pool.display(l), pool.display(r));

    // The identical instance trivially equals itself.
    if l == r {
        return Ok(());
    }

    let l_bound = pool.is_var(l) && infs.is_bound(l);
    let r_bound = pool.is_var(r) && infs.is_bound(r);

    if l_bound && r_bound {
        match (infs.lookup(l), infs.lookup(r)) {
            // Both constrained already: merge their classes.
            (Some(l_root), Some(r_root)) => infs.union(l_root, r_root).map(|_| ()),

            // One constrained: the other joins its class.
            (Some(l_root), None) => {
                infs.add_member(l_root, r);
                Ok(())
            }
            (None, Some(r_root)) => {
                infs.add_member(r_root, l);
                Ok(())
            }

            // Neither constrained: they form a new class together.
            (None, None) => {
                let root = infs.insert(l, None);
                infs.add_member(root, r);
                Ok(())
            }
        }
    } else if l_bound || r_bound {
        // One assignable variable against a closed type. A rigid
        // variable on the other side counts as closed.
        let (var, closed) = if l_bound { (l, r) } else { (r, l) };

        match infs.lookup(var) {
            Some(root) => infs.assign_closed(root, closed),
            None => {
                infs.insert(var, Some(closed));
                Ok(())
            }
        }
    } else {
        // Two non-assignable things; only the identical instance would
        // have unified, and that was handled above.
        Err(TypeError::Mismatch {
            expected: l,
            found: r,
        })
    }
}
