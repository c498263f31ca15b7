//! A `UnionFind` implementation (also known as Disjoint-Set Union), used to track the
//! connected components of a graph while edges are merged into it.

use std::cell::Cell;

use crate::did::Did;

pub type SetId = usize;

/// A `UnionFind` data structure, also known as a Disjoint-Set Union (DSU).
///
/// Maintains a partition of `0..size` into disjoint components. Two operations
/// are supported:
///
/// 1. **Union**: merges the components of two elements, attaching the
///    lower-rank root under the higher-rank one.
/// 2. **Find**: returns the representative root of an element's component,
///    re-parenting every element on the visited path directly onto the root.
///
/// With both optimizations any sequence of `m` operations over `n` elements
/// runs in `O(m * α(n))` amortized, where `α` is the inverse Ackermann
/// function.
///
/// `parents` uses `Cell` for interior mutability, so `find` can compress paths
/// behind a shared reference. `ranks` is only meaningful at roots and is only
/// ever consulted to pick the surviving root of a union, never read as an
/// exact tree height.
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    parents: Vec<Cell<SetId>>,
    ranks: Vec<u8>,
}

impl UnionFind {
    pub fn with_size(size: usize) -> Self {
        let mut parents = Vec::with_capacity(size);

        for i in 0..size {
            parents.push(Cell::new(i));
        }

        Self {
            parents,
            ranks: vec![0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.parents.len()
    }

    pub fn add(&mut self) -> SetId {
        let new_id = self.size();
        self.parents.push(Cell::new(new_id));
        self.ranks.push(0);
        new_id
    }

    pub fn parent(&self, id: SetId) -> SetId {
        self.parents[id].get()
    }

    /// Returns the root of `id`'s component without modifying the structure.
    pub fn find_no_compress(&self, mut id: SetId) -> SetId {
        loop {
            let parent = self.parent(id);
            if parent == id {
                return id;
            }

            id = parent;
        }
    }

    /// Returns the root of `id`'s component, re-parenting every element on the
    /// walked path directly onto that root. The root itself never changes as a
    /// result of compression. Iterative, so pathological chains cannot
    /// overflow the stack.
    pub fn find(&self, id: SetId) -> SetId {
        let root = self.find_no_compress(id);

        let mut current = id;
        while current != root {
            current = self.parents[current].replace(root);
        }

        root
    }

    pub fn connected(&self, id_1: SetId, id_2: SetId) -> bool {
        self.find(id_1) == self.find(id_2)
    }

    /// Merges the components of `id_1` and `id_2`.
    ///
    /// Returns [`Did::Nothing`] if both already share a root; in that case the
    /// call has no structural effect and no rank changes. Otherwise the
    /// lower-rank root is attached under the higher-rank one and, on a rank
    /// tie, the surviving root's rank grows by exactly 1.
    pub fn union(&mut self, id_1: SetId, id_2: SetId) -> Did {
        let root_1 = self.find(id_1);
        let root_2 = self.find(id_2);

        if root_1 == root_2 {
            return Did::Nothing;
        }

        let (child, parent) = if self.ranks[root_1] < self.ranks[root_2] {
            (root_1, root_2)
        } else {
            (root_2, root_1)
        };

        if self.ranks[child] == self.ranks[parent] {
            self.ranks[parent] += 1;
        }

        self.parents[child].set(parent);
        Did::Something
    }
}

impl PartialEq for UnionFind {
    fn eq(&self, other: &Self) -> bool {
        if self.parents.len() != other.parents.len() {
            return false;
        }

        for id_1 in 0..self.parents.len() {
            for id_2 in (id_1 + 1)..self.parents.len() {
                if self.connected(id_1, id_2) != other.connected(id_1, id_2) {
                    return false;
                }
            }
        }

        true
    }
}

impl Eq for UnionFind {}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn creation() {
        let uf = UnionFind::with_size(10);

        assert_eq!(uf.size(), 10);
        for id in 0..10 {
            assert_eq!(uf.find(id), id);
        }
    }

    #[test]
    fn union_and_find() {
        let mut uf = UnionFind::with_size(4);
        uf.union(0, 2);
        uf.union(3, 1);
        uf.union(1, 0);

        assert_eq!(uf.find(0), uf.find(1));
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.find(0), uf.find(3));
    }

    #[test]
    fn add_set() {
        let mut uf = UnionFind::with_size(1);
        let new_id = uf.add();

        assert_eq!(new_id, 1);
        assert_eq!(uf.size(), 2);
        assert!(!uf.connected(0, 1));
    }

    #[test]
    fn compression() {
        let mut uf = UnionFind::with_size(4);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(1, 3);

        // 3 still hangs off its old root until a find walks through it
        assert_ne!(uf.parent(3), uf.find_no_compress(3));
        let root = uf.find(3);
        assert_eq!(uf.parent(3), root);
        assert_eq!(uf.parent(2), root);
    }

    #[test]
    fn find_is_idempotent() {
        let mut uf = UnionFind::with_size(5);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(2, 3);

        let first = uf.find(3);
        assert_eq!(uf.find(3), first);
        assert_eq!(uf.find_no_compress(3), first);
    }

    #[test]
    fn union_is_commutative_in_effect() {
        let mut left = UnionFind::with_size(6);
        left.union(0, 1);
        left.union(4, 5);
        left.union(1, 4);

        let mut right = UnionFind::with_size(6);
        right.union(1, 0);
        right.union(5, 4);
        right.union(4, 1);

        assert_eq!(left, right);
        assert!(left.connected(0, 5));
        assert!(!left.connected(0, 2));
    }

    #[test]
    fn union_of_connected_sets_is_a_no_op() {
        let mut uf = UnionFind::with_size(3);
        assert!(uf.union(0, 1).did_something());

        let parents_before: Vec<_> = (0..3).map(|id| uf.parent(id)).collect();
        let ranks_before = uf.ranks.clone();

        assert!(uf.union(0, 1).did_nothing());
        assert!(uf.union(1, 0).did_nothing());
        assert!(uf.union(2, 2).did_nothing());

        let parents_after: Vec<_> = (0..3).map(|id| uf.parent(id)).collect();
        assert_eq!(parents_before, parents_after);
        assert_eq!(ranks_before, uf.ranks);
    }

    #[test]
    fn rank_grows_only_on_ties() {
        let mut uf = UnionFind::with_size(4);

        uf.union(0, 1);
        let root = uf.find(0);
        assert_eq!(uf.ranks[root], 1);

        // attaching a singleton to a taller tree leaves the rank alone
        uf.union(root, 2);
        assert_eq!(uf.find(2), root);
        assert_eq!(uf.ranks[root], 1);

        uf.union(root, 3);
        assert_eq!(uf.ranks[root], 1);
    }

    #[test]
    fn taller_tree_keeps_its_root() {
        let mut uf = UnionFind::with_size(3);
        uf.union(0, 1);
        let tall_root = uf.find(0);

        uf.union(2, 0);
        assert_eq!(uf.find(2), tall_root);
    }
}
