//! Type unification for pooled types.
//!
//! This crate decides whether two types can be made equal, and produces
//! the specialized type when they can. It is the engine behind the
//! checker's two questions:
//!
//! - *can this argument be passed to this function?*
//!   [`apply_arg_to_fn`] instantiates a generalized function type
//!   against an argument and returns the specialized function;
//! - *do these two types agree?* [`unify_equivalent`] merges two
//!   possibly generic types, with a no-allocation fast path when neither
//!   is generic.
//!
//! Generalization of inferred types into quantifiers is the inverse
//! operation, provided by [`generalize`].
//!
//! All types live in a [`rill_types::TypePool`]; this crate only ever
//! handles [`rill_types::TypeId`]s. Each top-level call builds its own
//! [`InferSet`] of equivalence classes, discarded when the call returns,
//! so independent unifications never observe each other.

#![warn(missing_docs)]

pub mod error;
pub mod infer;

pub use error::{Result, TypeError};
pub use infer::{InferSet, apply_arg_to_fn, generalize, unify_equivalent};
