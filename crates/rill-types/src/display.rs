//! Type pretty-printing.
//!
//! Types are stored as pool indices, so rendering one needs the pool.
//! [`TypePool::display`] hands out a borrow wrapper that implements
//! `fmt::Display`, which keeps diagnostics a one-liner:
//!
//! ```
//! use rill_types::TypePool;
//!
//! let mut pool = TypePool::new();
//! let int = pool.int();
//! let f = pool.fn_ty(int, int);
//!
//! assert_eq!(format!("{}", pool.display(f)), "Int -> Int");
//! ```

use crate::pool::TypePool;
use crate::ty::{TypeId, TypeKind};

use std::fmt;

/// A type bundled with its pool for rendering.
pub struct DisplayTy<'a> {
    ty: TypeId,
    pool: &'a TypePool,
}

impl TypePool {
    /// Creates a display wrapper for a stored type.
    #[must_use]
    pub fn display(&self, ty: TypeId) -> DisplayTy<'_> {
        DisplayTy { ty, pool: self }
    }
}

impl fmt::Display for DisplayTy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_type(self.ty, f)
    }
}

impl DisplayTy<'_> {
    fn format_type(&self, ty: TypeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pool.kind(ty) {
            TypeKind::Atom(atom) => write!(f, "{}", atom.name()),

            TypeKind::Var(n) => format_var(*n, f),

            TypeKind::Fn { from, to } => {
                // Parenthesize a function domain: `(a -> b) -> c`.
                if self.pool.is_fn(*from) {
                    write!(f, "(")?;
                    self.format_type(*from, f)?;
                    write!(f, ")")?;
                } else {
                    self.format_type(*from, f)?;
                }

                write!(f, " -> ")?;
                self.format_type(*to, f)
            }

            TypeKind::List(element) => {
                write!(f, "[")?;
                self.format_type(*element, f)?;
                write!(f, "]")
            }

            TypeKind::Tuple(elements) => {
                write!(f, "(")?;
                for (i, &element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    self.format_type(element, f)?;
                }
                write!(f, ")")
            }

            TypeKind::Forall { vars, body } => {
                write!(f, "forall")?;
                for &var in vars {
                    write!(f, " ")?;
                    self.format_type(var, f)?;
                }
                write!(f, ". ")?;
                self.format_type(*body, f)
            }
        }
    }
}

/// Renders variable `n` as `'a`, `'b`, …, `'z`, `'a1`, `'b1`, …
fn format_var(n: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let letter = (b'a' + (n % 26) as u8) as char;
    let round = n / 26;

    if round == 0 {
        write!(f, "'{letter}")
    } else {
        write!(f, "'{letter}{round}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_atoms() {
        let pool = TypePool::new();

        assert_eq!(format!("{}", pool.display(pool.unit())), "()");
        assert_eq!(format!("{}", pool.display(pool.int())), "Int");
        assert_eq!(format!("{}", pool.display(pool.num())), "Num");
        assert_eq!(format!("{}", pool.display(pool.file())), "File");
        assert_eq!(format!("{}", pool.display(pool.invalid())), "<invalid>");
    }

    #[test]
    fn test_display_vars() {
        let mut pool = TypePool::new();

        let a = pool.fresh_var();
        let b = pool.fresh_var();

        assert_eq!(format!("{}", pool.display(a)), "'a");
        assert_eq!(format!("{}", pool.display(b)), "'b");
    }

    #[test]
    fn test_display_var_wraparound() {
        let mut pool = TypePool::new();

        let mut last = pool.fresh_var();
        for _ in 0..26 {
            last = pool.fresh_var();
        }

        assert_eq!(format!("{}", pool.display(last)), "'a1");
    }

    #[test]
    fn test_display_functions() {
        let mut pool = TypePool::new();
        let int = pool.int();
        let str_ty = pool.str_ty();

        let f = pool.fn_ty(int, str_ty);
        assert_eq!(format!("{}", pool.display(f)), "Int -> Str");

        // Domain functions get parenthesized, codomain ones do not.
        let g = pool.fn_ty(f, int);
        assert_eq!(format!("{}", pool.display(g)), "(Int -> Str) -> Int");

        let h = pool.fn_ty(int, f);
        assert_eq!(format!("{}", pool.display(h)), "Int -> Int -> Str");
    }

    #[test]
    fn test_display_lists_and_tuples() {
        let mut pool = TypePool::new();
        let int = pool.int();
        let bool_ty = pool.bool_ty();

        let l = pool.list(int);
        assert_eq!(format!("{}", pool.display(l)), "[Int]");

        let t = pool.tuple(vec![int, bool_ty, l]);
        assert_eq!(format!("{}", pool.display(t)), "(Int, Bool, [Int])");

        let empty = pool.tuple(vec![]);
        assert_eq!(format!("{}", pool.display(empty)), "()");
    }

    #[test]
    fn test_display_forall() {
        let mut pool = TypePool::new();

        let a = pool.fresh_var();
        let body = pool.fn_ty(a, a);
        let generic = pool.forall(vec![a], body);

        assert_eq!(format!("{}", pool.display(generic)), "forall 'a. 'a -> 'a");
    }
}
