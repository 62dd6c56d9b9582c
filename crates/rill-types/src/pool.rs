//! The interned type pool.
//!
//! The pool is the single owner of every type in a checking session.
//! Composite types are deduplicated on construction (hash lookup fast
//! path, append slow path), which is what makes `TypeId` equality a
//! correct structural-equality check. Types are never individually
//! freed; the pool lives as long as the session.
//!
//! Everything downstream (the unifier, the substitution engine, the
//! checker) builds types exclusively through these constructors, so
//! even types rebuilt during substitution re-enter the intern table.

use crate::ty::{AtomTy, TypeId, TypeKind};

use hashbrown::HashMap;

/// Deduplicating store of types.
///
/// # Examples
///
/// ```
/// use rill_types::{AtomTy, TypePool};
///
/// let mut pool = TypePool::new();
///
/// // Atoms are pre-interned with stable ids.
/// assert_eq!(pool.int(), pool.atom(AtomTy::Int));
///
/// // Structurally identical composites share an id.
/// let int = pool.int();
/// let str_ty = pool.str_ty();
/// let f1 = pool.fn_ty(int, str_ty);
/// let f2 = pool.fn_ty(int, str_ty);
/// assert_eq!(f1, f2);
///
/// // Variables are identity-only: every fresh_var is distinct.
/// assert_ne!(pool.fresh_var(), pool.fresh_var());
/// ```
pub struct TypePool {
    /// Kind of each stored type, indexed by `TypeId`.
    kinds: Vec<TypeKind>,

    /// Dedupe map from kind to id. Variables are deliberately absent:
    /// they are unique by construction.
    interned: HashMap<TypeKind, TypeId>,

    /// Creation counter for variables.
    next_var: u32,
}

impl TypePool {
    /// Creates a pool with the seven atoms pre-interned (ids 0..=6).
    #[must_use]
    pub fn new() -> Self {
        let mut pool = Self {
            kinds: Vec::new(),
            interned: HashMap::new(),
            next_var: 0,
        };

        for atom in AtomTy::ALL {
            pool.intern(TypeKind::Atom(atom));
        }

        pool
    }

    /// Interns a kind, returning the existing id when the structure is
    /// already present.
    fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.interned.get(&kind) {
            return id;
        }

        let id = TypeId::new(self.kinds.len() as u32);
        self.interned.insert(kind.clone(), id);
        self.kinds.push(kind);
        id
    }

    /// The id of an atomic singleton.
    #[must_use]
    pub fn atom(&self, atom: AtomTy) -> TypeId {
        // Stable by the pre-interning order in `new`.
        TypeId::new(atom as u32)
    }

    /// The unit type, `()`.
    #[must_use]
    pub fn unit(&self) -> TypeId {
        self.atom(AtomTy::Unit)
    }

    /// The integer type.
    #[must_use]
    pub fn int(&self) -> TypeId {
        self.atom(AtomTy::Int)
    }

    /// The floating-point type.
    #[must_use]
    pub fn num(&self) -> TypeId {
        self.atom(AtomTy::Num)
    }

    /// The boolean type.
    #[must_use]
    pub fn bool_ty(&self) -> TypeId {
        self.atom(AtomTy::Bool)
    }

    /// The string type.
    #[must_use]
    pub fn str_ty(&self) -> TypeId {
        self.atom(AtomTy::Str)
    }

    /// The file type.
    #[must_use]
    pub fn file(&self) -> TypeId {
        self.atom(AtomTy::File)
    }

    /// The error-recovery type.
    #[must_use]
    pub fn invalid(&self) -> TypeId {
        self.atom(AtomTy::Invalid)
    }

    /// Mints a new type variable, distinct from every existing one.
    pub fn fresh_var(&mut self) -> TypeId {
        let var = self.next_var;
        self.next_var += 1;

        let id = TypeId::new(self.kinds.len() as u32);
        self.kinds.push(TypeKind::Var(var));
        id
    }

    /// Builds (or reuses) the function type `from -> to`.
    pub fn fn_ty(&mut self, from: TypeId, to: TypeId) -> TypeId {
        self.intern(TypeKind::Fn { from, to })
    }

    /// Builds (or reuses) the list type `[element]`.
    pub fn list(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeKind::List(element))
    }

    /// Builds (or reuses) a tuple type. Arity is part of the identity.
    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.intern(TypeKind::Tuple(elements))
    }

    /// Builds (or reuses) `forall vars. body`.
    ///
    /// `vars` must all denote `Var` kinds; handing anything else over is
    /// a programming error in the caller.
    pub fn forall(&mut self, vars: Vec<TypeId>, body: TypeId) -> TypeId {
        debug_assert!(
            vars.iter()
                .all(|&v| matches!(self.kind(v), TypeKind::Var(_))),
            "forall over a non-variable type"
        );

        self.intern(TypeKind::Forall { vars, body })
    }

    /// The kind of a stored type.
    ///
    /// # Panics
    ///
    /// Panics on an id not minted by this pool.
    #[must_use]
    pub fn kind(&self, ty: TypeId) -> &TypeKind {
        &self.kinds[ty.as_usize()]
    }

    /// Deep structural equality.
    ///
    /// With full interning this is id comparison; it is kept as a named
    /// operation because it is the documented fast-path predicate of the
    /// orchestration layer.
    #[must_use]
    pub fn equal(&self, l: TypeId, r: TypeId) -> bool {
        l == r
    }

    /// Whether the type has no substructure (atom or variable).
    #[must_use]
    pub fn is_unitary(&self, ty: TypeId) -> bool {
        self.kind(ty).is_unitary()
    }

    /// Whether the type is a variable.
    #[must_use]
    pub fn is_var(&self, ty: TypeId) -> bool {
        matches!(self.kind(ty), TypeKind::Var(_))
    }

    /// Whether the type is a function.
    #[must_use]
    pub fn is_fn(&self, ty: TypeId) -> bool {
        matches!(self.kind(ty), TypeKind::Fn { .. })
    }

    /// Whether the type is a list.
    #[must_use]
    pub fn is_list(&self, ty: TypeId) -> bool {
        matches!(self.kind(ty), TypeKind::List(_))
    }

    /// Whether the type is a quantifier.
    #[must_use]
    pub fn is_forall(&self, ty: TypeId) -> bool {
        matches!(self.kind(ty), TypeKind::Forall { .. })
    }

    /// The `(from, to)` pair of a function type.
    #[must_use]
    pub fn as_fn(&self, ty: TypeId) -> Option<(TypeId, TypeId)> {
        match self.kind(ty) {
            TypeKind::Fn { from, to } => Some((*from, *to)),
            _ => None,
        }
    }

    /// The quantified variables and body of a `forall`.
    #[must_use]
    pub fn as_forall(&self, ty: TypeId) -> Option<(&[TypeId], TypeId)> {
        match self.kind(ty) {
            TypeKind::Forall { vars, body } => Some((vars, *body)),
            _ => None,
        }
    }

    /// The element type of a list.
    #[must_use]
    pub fn elements(&self, ty: TypeId) -> Option<TypeId> {
        match self.kind(ty) {
            TypeKind::List(element) => Some(*element),
            _ => None,
        }
    }

    /// Free variables of a type, in first-appearance order.
    ///
    /// Variables captured by an inner `forall` are not free. Used by the
    /// checker's let-generalization step.
    #[must_use]
    pub fn free_vars(&self, ty: TypeId) -> Vec<TypeId> {
        let mut free = Vec::new();
        let mut captured = Vec::new();
        self.collect_free_vars(ty, &mut captured, &mut free);
        free
    }

    fn collect_free_vars(
        &self,
        ty: TypeId,
        captured: &mut Vec<TypeId>,
        free: &mut Vec<TypeId>,
    ) {
        match self.kind(ty) {
            TypeKind::Atom(_) => {}

            TypeKind::Var(_) => {
                if !captured.contains(&ty) && !free.contains(&ty) {
                    free.push(ty);
                }
            }

            TypeKind::Fn { from, to } => {
                let (from, to) = (*from, *to);
                self.collect_free_vars(from, captured, free);
                self.collect_free_vars(to, captured, free);
            }

            TypeKind::List(element) => {
                let element = *element;
                self.collect_free_vars(element, captured, free);
            }

            TypeKind::Tuple(elements) => {
                for &element in elements {
                    self.collect_free_vars(element, captured, free);
                }
            }

            TypeKind::Forall { vars, body } => {
                let body = *body;
                let depth = captured.len();
                captured.extend_from_slice(vars);
                self.collect_free_vars(body, captured, free);
                captured.truncate(depth);
            }
        }
    }

    /// Number of stored types (atoms included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the pool is empty. Never true: atoms are pre-interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}
