//! Unification and instantiation of pooled types.
//!
//! The submodules split the work the way the data flows: [`records`]
//! holds the per-call equivalence classes, [`unify`](self::unify) walks
//! the trees and fills them in, and [`subst`] rewrites the result. The
//! entry points here are what the checker actually calls; they decide
//! which quantified variables are opened up for a given unification and
//! drive the walk/substitute sequence.

mod records;
mod subst;
mod unify;

pub use records::InferSet;

use crate::error::{Result, TypeError};

use rill_log::debug;
use rill_types::{TypeId, TypePool};

/// Applies an argument type to a generalized function type.
///
/// `fn_ty` must be a quantifier wrapping a function; anything else is a
/// caller bug surfaced as [`TypeError::IllFormedFunction`] so an
/// upstream checker defect stays a diagnostic instead of a crash.
///
/// The function's quantified variables are opened for assignment, and so
/// are the argument's own if it is generic too (a generic argument may
/// specialize against a generic parameter): the argument's quantifier is
/// stripped before the walk, and whichever of its variables survive
/// unification stay quantified in the result. On success the whole
/// function quantifier is substituted, yielding the specialized (and
/// possibly still partially generic) function type.
///
/// # Examples
///
/// ```
/// use rill_types::TypePool;
/// use rill_typecheck::apply_arg_to_fn;
///
/// let mut pool = TypePool::new();
/// let a = pool.fresh_var();
/// let body = pool.fn_ty(a, a);
/// let identity = pool.forall(vec![a], body);
///
/// let str_ty = pool.str_ty();
/// let applied = apply_arg_to_fn(&mut pool, str_ty, identity).unwrap();
/// assert_eq!(pool.display(applied).to_string(), "Str -> Str");
/// ```
pub fn apply_arg_to_fn(pool: &mut TypePool, arg: TypeId, fn_ty: TypeId) -> Result<TypeId> {
    debug!(
        "applying {} to {}",
        pool.display(arg),
        pool.display(fn_ty)
    );

    let Some((fn_vars, body)) = pool.as_forall(fn_ty) else {
        return Err(TypeError::IllFormedFunction { found: fn_ty });
    };

    let Some((domain, _)) = pool.as_fn(body) else {
        return Err(TypeError::IllFormedFunction { found: fn_ty });
    };

    let mut bound = fn_vars.to_vec();
    let (arg_vars, arg_inner) = match pool.as_forall(arg) {
        Some((vars, inner)) => (vars.to_vec(), inner),
        None => (Vec::new(), arg),
    };
    bound.extend_from_slice(&arg_vars);

    let mut infs = InferSet::new(bound);
    unify::unify(pool, &mut infs, arg_inner, domain)?;

    let specialized = subst::substitute(pool, &mut infs, fn_ty);

    // Argument variables the unification never pinned down remain
    // generic in the result.
    let free = pool.free_vars(specialized);
    let mut kept: Vec<TypeId> = arg_vars
        .into_iter()
        .filter(|var| free.contains(var))
        .collect();

    if kept.is_empty() {
        return Ok(specialized);
    }

    let (vars, body) = match pool.as_forall(specialized) {
        Some((inner_vars, inner_body)) => {
            kept.extend_from_slice(inner_vars);
            (kept, inner_body)
        }
        None => (kept, specialized),
    };

    Ok(pool.forall(vars, body))
}

/// Unifies two types that may each independently be generic, returning
/// the unified type.
///
/// Used when two types must agree without either being applied to the
/// other: list and tuple literal elements, pipeline stages, branches of
/// a conditional. The bound set is the union of whichever sides are
/// quantifiers.
///
/// When neither side is generic no inference set is built at all: with
/// full interning, structural equality is id equality.
pub fn unify_equivalent(pool: &mut TypePool, l: TypeId, r: TypeId) -> Result<TypeId> {
    if !pool.is_forall(l) && !pool.is_forall(r) {
        return if pool.equal(l, r) {
            Ok(l)
        } else {
            Err(TypeError::Mismatch {
                expected: l,
                found: r,
            })
        };
    }

    let mut bound = Vec::new();
    if let Some((vars, _)) = pool.as_forall(l) {
        bound.extend_from_slice(vars);
    }
    if let Some((vars, _)) = pool.as_forall(r) {
        bound.extend_from_slice(vars);
    }

    let mut infs = InferSet::new(bound);
    unify::unify(pool, &mut infs, l, r)?;

    Ok(subst::substitute(pool, &mut infs, l))
}

/// Wraps `ty` in a quantifier over its free variables.
///
/// The let-generalization step: a binding whose inferred type still
/// contains unresolved variables becomes generic over them. A type with
/// no free variables is returned unchanged.
pub fn generalize(pool: &mut TypePool, ty: TypeId) -> TypeId {
    let free = pool.free_vars(ty);

    if free.is_empty() {
        ty
    } else {
        pool.forall(free, ty)
    }
}
