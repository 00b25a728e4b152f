/// Disjoint sets over lattice indices, with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`'s set, reparenting every node on the way to the root.
    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already in the same set.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] = self.rank[root_x].saturating_add(1);
            }
        }
        true
    }

    /// Number of disjoint sets.
    pub fn set_count(&mut self) -> usize {
        (0..self.len()).filter(|&i| self.find(i) == i).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_unite_reports_merges() {
        let mut uf = UnionFind::new(4);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(!uf.unite(1, 0));
        assert!(uf.unite(1, 3));
        assert!(!uf.unite(0, 2));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut uf = UnionFind::new(6);
        uf.unite(0, 1);
        uf.unite(1, 2);
        uf.unite(4, 5);
        let roots = (0..6).map(|i| uf.find(i)).collect::<Vec<_>>();
        let again = (0..6).map(|i| uf.find(i)).collect::<Vec<_>>();
        assert_eq!(roots, again);
        assert_eq!(roots[0], roots[2]);
        assert_ne!(roots[0], roots[3]);
        assert_ne!(roots[3], roots[4]);
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        (1..n).for_each(|i| {
            uf.unite(i - 1, i);
        });
        assert_eq!(uf.find(n - 1), uf.find(0));
    }

    #[test]
    fn test_matches_naive_connectivity() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 40;
        let mut uf = UnionFind::new(n);
        // Naive labels: relabel one whole component on every merge
        let mut label = (0..n).collect::<Vec<_>>();
        for _ in 0..60 {
            let (a, b) = (rng.random_range(0..n), rng.random_range(0..n));
            let merged = uf.unite(a, b);
            assert_eq!(merged, label[a] != label[b]);
            let (from, to) = (label[b], label[a]);
            label.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
            for x in 0..n {
                for y in 0..n {
                    assert_eq!(uf.find(x) == uf.find(y), label[x] == label[y]);
                }
            }
        }
    }
}
