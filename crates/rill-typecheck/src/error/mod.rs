//! Type engine errors.
//!
//! Unification failures are ordinary, recoverable values: the checker
//! turns them into user-facing diagnostics against the source expression.
//! Nothing in this module aborts the process.
//!
//! Errors carry [`TypeId`]s rather than rendered strings; call
//! [`TypeError::display`] with the pool to render them.

use rill_types::{TypeId, TypePool};

use std::fmt;

/// Errors produced by unification and the application entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeError {
    /// Two types have incompatible shapes: different kinds, or tuples of
    /// different arity.
    Mismatch {
        /// The type the left-hand side demanded.
        expected: TypeId,
        /// The type actually found on the right-hand side.
        found: TypeId,
    },

    /// One equivalence class was forced to equal two different closed
    /// types.
    Conflict {
        /// The closed type the class already held.
        existing: TypeId,
        /// The closed type that contradicted it.
        incoming: TypeId,
    },

    /// The function-application entry point was handed something that is
    /// not a generalized function type. This signals a bug in the
    /// caller, surfaced as an error rather than a crash so an upstream
    /// checker defect cannot take the process down.
    IllFormedFunction {
        /// The offending "function" type.
        found: TypeId,
    },
}

impl TypeError {
    /// A short category label for this error.
    pub const fn description(&self) -> &'static str {
        match self {
            TypeError::Mismatch { .. } => "type mismatch",
            TypeError::Conflict { .. } => "conflicting inferences",
            TypeError::IllFormedFunction { .. } => "ill-formed function type",
        }
    }

    /// Renders this error with type names resolved through the pool.
    #[must_use]
    pub fn display<'a>(&'a self, pool: &'a TypePool) -> DisplayError<'a> {
        DisplayError { error: self, pool }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::Mismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }

            TypeError::Conflict { existing, incoming } => {
                write!(f, "conflicting inferences: {existing} vs {incoming}")
            }

            TypeError::IllFormedFunction { found } => {
                write!(f, "ill-formed function type: {found}")
            }
        }
    }
}

impl std::error::Error for TypeError {}

/// An error bundled with its pool for rendering.
pub struct DisplayError<'a> {
    error: &'a TypeError,
    pool: &'a TypePool,
}

impl fmt::Display for DisplayError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            TypeError::Mismatch { expected, found } => {
                write!(
                    f,
                    "type mismatch: expected {}, found {}",
                    self.pool.display(*expected),
                    self.pool.display(*found)
                )
            }

            TypeError::Conflict { existing, incoming } => {
                write!(
                    f,
                    "conflicting inferences: {} vs {}",
                    self.pool.display(*existing),
                    self.pool.display(*incoming)
                )
            }

            TypeError::IllFormedFunction { found } => {
                write!(
                    f,
                    "cannot apply an argument to {}",
                    self.pool.display(*found)
                )
            }
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, TypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_with_pool() {
        let mut pool = TypePool::new();
        let int = pool.int();
        let bool_ty = pool.bool_ty();

        let err = TypeError::Mismatch {
            expected: int,
            found: bool_ty,
        };
        assert_eq!(
            format!("{}", err.display(&pool)),
            "type mismatch: expected Int, found Bool"
        );

        let list = pool.list(int);
        let err = TypeError::Conflict {
            existing: list,
            incoming: int,
        };
        assert_eq!(
            format!("{}", err.display(&pool)),
            "conflicting inferences: [Int] vs Int"
        );
    }

    #[test]
    fn test_descriptions() {
        let pool = TypePool::new();
        let int = pool.int();

        let err = TypeError::IllFormedFunction { found: int };
        assert_eq!(err.description(), "ill-formed function type");
        assert!(format!("{}", err.display(&pool)).contains("Int"));
    }
}
