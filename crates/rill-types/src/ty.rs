//! Type handles and kinds.
//!
//! A [`TypeId`] is a lightweight identifier pointing into the [`TypePool`].
//! Because the pool interns every composite it builds, two ids are equal
//! exactly when the types they denote are structurally equal. The one
//! exception is [`TypeKind::Var`]: every call to
//! [`TypePool::fresh_var`] mints a distinct variable, and variables
//! compare by identity only, never by shape.
//!
//! [`TypePool`]: crate::pool::TypePool
//! [`TypePool::fresh_var`]: crate::pool::TypePool::fresh_var

use std::fmt;

/// A handle to a type stored in the pool.
///
/// `TypeId`s are 32-bit indices. They provide:
/// - O(1) equality (structural equality for pool-built types)
/// - Copy semantics, 4-byte footprint
/// - Type safety through the newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
    /// Creates a handle from a raw index. Only the pool mints valid ids.
    pub(crate) const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw index as usize.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Atomic (nullary) type kinds.
///
/// Each atom is pre-interned once at pool creation, so the same kind
/// always resolves to the same `TypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomTy {
    /// The unit type, `()`.
    Unit,
    /// Integers.
    Int,
    /// Floating-point numbers.
    Num,
    /// Booleans.
    Bool,
    /// Strings.
    Str,
    /// Files, the language's primary currency.
    File,
    /// The error-recovery type produced for ill-typed expressions.
    Invalid,
}

impl AtomTy {
    /// All atoms, in pre-interning order (ids 0..=6).
    pub const ALL: [AtomTy; 7] = [
        AtomTy::Unit,
        AtomTy::Int,
        AtomTy::Num,
        AtomTy::Bool,
        AtomTy::Str,
        AtomTy::File,
        AtomTy::Invalid,
    ];

    /// The surface-syntax name of this atom.
    pub const fn name(self) -> &'static str {
        match self {
            AtomTy::Unit => "()",
            AtomTy::Int => "Int",
            AtomTy::Num => "Num",
            AtomTy::Bool => "Bool",
            AtomTy::Str => "Str",
            AtomTy::File => "File",
            AtomTy::Invalid => "<invalid>",
        }
    }
}

/// The shape of a stored type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A nullary atom: `()`, `Int`, `Num`, `Bool`, `Str`, `File` or the
    /// error-recovery type.
    Atom(AtomTy),

    /// A unification/type variable. The `u32` is a creation counter that
    /// makes every variable unique; variables have no substructure and
    /// equality is identity.
    Var(u32),

    /// A unary function type, `from -> to`.
    Fn {
        /// Parameter type.
        from: TypeId,
        /// Result type.
        to: TypeId,
    },

    /// A homogeneous list, `[element]`.
    List(TypeId),

    /// A tuple. Arity is part of the identity: tuples of different
    /// length never compare equal.
    Tuple(Vec<TypeId>),

    /// A generalized (universally quantified) type:
    /// `forall vars. body`. `vars` only ever holds `Var` ids; variables
    /// free in `body` but absent from `vars` are rigid with respect to
    /// this quantifier.
    Forall {
        /// The quantified variables.
        vars: Vec<TypeId>,
        /// The quantified-over body.
        body: TypeId,
    },
}

impl TypeKind {
    /// Whether this kind carries no substructure (atoms and variables).
    pub const fn is_unitary(&self) -> bool {
        matches!(self, TypeKind::Atom(_) | TypeKind::Var(_))
    }
}
