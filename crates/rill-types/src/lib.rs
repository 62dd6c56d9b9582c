//! Type representation for the `rill` language.
//!
//! This crate provides the interned type store shared by the type engine
//! and the checker:
//! - [`TypeId`]: a 4-byte handle into the pool
//! - [`TypeKind`]: atoms, functions, lists, tuples, type variables and
//!   `forall` quantifiers
//! - [`TypePool`]: smart constructors that deduplicate structurally
//!   identical types, so `TypeId` equality doubles as structural equality
//!
//! # Example
//!
//! ```
//! use rill_types::TypePool;
//!
//! let mut pool = TypePool::new();
//!
//! let int = pool.int();
//! let a = pool.list(int);
//! let b = pool.list(int);
//!
//! assert_eq!(a, b); // same structure = same id
//! assert_eq!(format!("{}", pool.display(a)), "[Int]");
//! ```

#![warn(missing_docs)]

pub mod display;
pub mod pool;
pub mod ty;

pub use display::DisplayTy;
pub use pool::TypePool;
pub use ty::{AtomTy, TypeId, TypeKind};
