//! Equivalence-class bookkeeping for one unification attempt.
//!
//! An [`InferSet`] tracks two things while the unifier walks a pair of
//! types:
//! - the *bound* set: the variables the current call is allowed to
//!   assign to (everything else is rigid for the duration);
//! - the equivalence classes discovered so far: groups of variables
//!   known to be mutually equal, each carrying at most one *closed*
//!   (non-variable-like) type the whole class must equal.
//!
//! Classes are a union-find with path compression and union-by-rank
//! keyed by variable [`TypeId`]; the class root is the canonical
//! representative the substitution engine rewrites members to. A
//! variable belongs to at most one class, and the set lives only for a
//! single top-level unification call.

use crate::error::{Result, TypeError};

use hashbrown::{HashMap, HashSet};
use rill_types::TypeId;

/// Union-find node. `parent == self` marks a class root.
#[derive(Debug, Clone, Copy)]
struct Node {
    parent: TypeId,
    rank: u32,
}

/// Bound-variable set plus the evolving equivalence classes of one
/// unification attempt.
pub struct InferSet {
    /// Variables eligible for assignment in this attempt.
    bound: HashSet<TypeId>,

    /// Union-find forest over constrained variables.
    nodes: HashMap<TypeId, Node>,

    /// Closed type of each class, keyed by root.
    closed: HashMap<TypeId, TypeId>,
}

impl InferSet {
    /// Creates a set whose bound variables are exactly `bound`.
    pub fn new(bound: impl IntoIterator<Item = TypeId>) -> Self {
        Self {
            bound: bound.into_iter().collect(),
            nodes: HashMap::new(),
            closed: HashMap::new(),
        }
    }

    /// Whether `var` may be assigned to in this attempt.
    #[must_use]
    pub fn is_bound(&self, var: TypeId) -> bool {
        self.bound.contains(&var)
    }

    /// Whether `var` belongs to any equivalence class yet.
    #[must_use]
    pub fn is_constrained(&self, var: TypeId) -> bool {
        self.nodes.contains_key(&var)
    }

    /// Number of equivalence classes currently alive.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|(var, node)| node.parent == **var)
            .count()
    }

    /// Whether any class has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root of `var`'s class, compressing the path walked.
    fn find(&mut self, var: TypeId) -> TypeId {
        let mut root = var;
        while let Some(node) = self.nodes.get(&root) {
            if node.parent == root {
                break;
            }
            root = node.parent;
        }

        let mut current = var;
        while let Some(node) = self.nodes.get_mut(&current) {
            if node.parent == current {
                break;
            }
            let next = node.parent;
            node.parent = root;
            current = next;
        }

        root
    }

    /// The class containing `var`, as its root, or `None` if `var` was
    /// never constrained.
    pub fn lookup(&mut self, var: TypeId) -> Option<TypeId> {
        self.is_constrained(var).then(|| self.find(var))
    }

    /// Creates a fresh singleton class for `var`, optionally pre-assigned
    /// a closed type. Returns the class root (`var` itself).
    ///
    /// Registering a variable twice is internal misuse; the unifier's
    /// dispatch guarantees it cannot happen.
    pub fn insert(&mut self, var: TypeId, closed: Option<TypeId>) -> TypeId {
        debug_assert!(!self.is_constrained(var), "variable registered twice");

        self.nodes.insert(var, Node { parent: var, rank: 0 });
        if let Some(ty) = closed {
            self.closed.insert(var, ty);
        }

        var
    }

    /// Adds the unconstrained variable `var` to the class rooted at
    /// `root`.
    pub fn add_member(&mut self, root: TypeId, var: TypeId) {
        debug_assert!(!self.is_constrained(var), "variable registered twice");
        debug_assert!(self.is_root(root));

        self.nodes.insert(var, Node { parent: root, rank: 0 });
        if let Some(node) = self.nodes.get_mut(&root)
            && node.rank == 0
        {
            node.rank = 1;
        }
    }

    /// Assigns `ty` as the closed type of the class rooted at `root`.
    ///
    /// Assigning the closed type the class already holds is a no-op;
    /// assigning a different one is a conflict and leaves the class
    /// untouched.
    pub fn assign_closed(&mut self, root: TypeId, ty: TypeId) -> Result<()> {
        debug_assert!(self.is_root(root));

        match self.closed.get(&root) {
            Some(&existing) if existing == ty => Ok(()),
            Some(&existing) => Err(TypeError::Conflict {
                existing,
                incoming: ty,
            }),
            None => {
                self.closed.insert(root, ty);
                Ok(())
            }
        }
    }

    /// Merges the classes rooted at `a` and `b`, returning the surviving
    /// root.
    ///
    /// Fails without mutating if the two classes hold different closed
    /// types; otherwise the survivor inherits whichever closed type
    /// exists.
    pub fn union(&mut self, a: TypeId, b: TypeId) -> Result<TypeId> {
        debug_assert!(self.is_root(a) && self.is_root(b));

        if a == b {
            return Ok(a);
        }

        let closed_a = self.closed.get(&a).copied();
        let closed_b = self.closed.get(&b).copied();

        if let (Some(existing), Some(incoming)) = (closed_a, closed_b)
            && existing != incoming
        {
            return Err(TypeError::Conflict { existing, incoming });
        }

        let rank_a = self.rank(a);
        let rank_b = self.rank(b);
        let (root, child) = if rank_a >= rank_b { (a, b) } else { (b, a) };

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = root;
        }
        if rank_a == rank_b
            && let Some(node) = self.nodes.get_mut(&root)
        {
            node.rank += 1;
        }

        self.closed.remove(&a);
        self.closed.remove(&b);
        if let Some(ty) = closed_a.or(closed_b) {
            self.closed.insert(root, ty);
        }

        Ok(root)
    }

    /// The closed type of the class rooted at `root`, if any.
    #[must_use]
    pub fn closed_of(&self, root: TypeId) -> Option<TypeId> {
        debug_assert!(!self.is_constrained(root) || self.is_root(root));
        self.closed.get(&root).copied()
    }

    fn rank(&self, root: TypeId) -> u32 {
        self.nodes.get(&root).map_or(0, |node| node.rank)
    }

    fn is_root(&self, var: TypeId) -> bool {
        self.nodes
            .get(&var)
            .is_some_and(|node| node.parent == var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_types::TypePool;

    #[test]
    fn test_bound_membership() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let b = pool.fresh_var();

        let infs = InferSet::new([a]);
        assert!(infs.is_bound(a));
        assert!(!infs.is_bound(b));
        assert!(infs.is_empty());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let b = pool.fresh_var();
        let int = pool.int();

        let mut infs = InferSet::new([a, b]);
        assert_eq!(infs.lookup(a), None);

        let root = infs.insert(a, Some(int));
        assert_eq!(infs.lookup(a), Some(root));
        assert_eq!(infs.closed_of(root), Some(int));
        assert_eq!(infs.lookup(b), None);
        assert_eq!(infs.class_count(), 1);
    }

    #[test]
    fn test_members_share_a_root() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let b = pool.fresh_var();
        let c = pool.fresh_var();

        let mut infs = InferSet::new([a, b, c]);
        let root = infs.insert(a, None);
        infs.add_member(root, b);
        infs.add_member(root, c);

        assert_eq!(infs.lookup(b), Some(root));
        assert_eq!(infs.lookup(c), Some(root));
        assert_eq!(infs.class_count(), 1);
    }

    #[test]
    fn test_assign_closed_conflicts() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let int = pool.int();
        let bool_ty = pool.bool_ty();

        let mut infs = InferSet::new([a]);
        let root = infs.insert(a, None);

        assert!(infs.assign_closed(root, int).is_ok());
        // Re-assigning the identical closed type is a no-op.
        assert!(infs.assign_closed(root, int).is_ok());
        // A different one is a conflict, and the class keeps Int.
        assert_eq!(
            infs.assign_closed(root, bool_ty),
            Err(TypeError::Conflict {
                existing: int,
                incoming: bool_ty
            })
        );
        assert_eq!(infs.closed_of(root), Some(int));
    }

    #[test]
    fn test_union_moves_closed_type() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let b = pool.fresh_var();
        let int = pool.int();

        let mut infs = InferSet::new([a, b]);
        let ra = infs.insert(a, None);
        let rb = infs.insert(b, Some(int));

        let root = infs.union(ra, rb).unwrap();
        assert_eq!(infs.closed_of(root), Some(int));
        assert_eq!(infs.lookup(a), Some(root));
        assert_eq!(infs.lookup(b), Some(root));
        assert_eq!(infs.class_count(), 1);
    }

    #[test]
    fn test_union_conflict() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let b = pool.fresh_var();
        let int = pool.int();
        let str_ty = pool.str_ty();

        let mut infs = InferSet::new([a, b]);
        let ra = infs.insert(a, Some(int));
        let rb = infs.insert(b, Some(str_ty));

        assert!(infs.union(ra, rb).is_err());
        // Both classes survive a failed merge.
        assert_eq!(infs.class_count(), 2);
    }

    #[test]
    fn test_union_same_class_is_noop() {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();

        let mut infs = InferSet::new([a]);
        let root = infs.insert(a, None);
        assert_eq!(infs.union(root, root), Ok(root));
    }

    #[test]
    fn test_path_compression_chains() {
        let mut pool = TypePool::new();
        let vars: Vec<_> = (0..8).map(|_| pool.fresh_var()).collect();

        let mut infs = InferSet::new(vars.iter().copied());
        let mut roots: Vec<_> = vars.iter().map(|&v| infs.insert(v, None)).collect();

        // Fold everything into one class pairwise.
        while roots.len() > 1 {
            let b = roots.pop().unwrap();
            let a = roots.pop().unwrap();
            roots.push(infs.union(a, b).unwrap());
        }

        let root = roots[0];
        for &v in &vars {
            assert_eq!(infs.lookup(v), Some(root));
        }
        assert_eq!(infs.class_count(), 1);
    }
}
