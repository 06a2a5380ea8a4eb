//! Disjoint-set forest with union by rank and path compression

/// Disjoint sets over ids `0..len`
///
/// Ids are not range-checked: methods taking an id panic on one `>= len`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `None` marks a root
    parent: Vec<Option<usize>>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Create `len` singleton sets
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Make `x` the root of its own singleton tree
    ///
    /// # Panics
    ///
    /// If `x >= len()`.
    pub fn make_set(&mut self, x: usize) {
        self.parent[x] = None;
        self.rank[x] = 0;
    }

    /// Root of the tree containing `x`.
    ///
    /// Walks to the root recording every node on the way, then points each
    /// recorded node straight at the root.
    ///
    /// # Panics
    ///
    /// If `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut visited = Vec::new();
        let mut root = x;
        while let Some(up) = self.parent[root] {
            visited.push(root);
            root = up;
        }

        for node in visited {
            self.parent[node] = Some(root);
        }
        root
    }

    /// Merge the trees rooted at `r1` and `r2`; returns the surviving root.
    ///
    /// Both arguments must already be roots (resolve them with [`find`]
    /// first). On equal rank `r2` survives and its rank grows.
    ///
    /// # Panics
    ///
    /// If either root is `>= len()`.
    ///
    /// [`find`]: UnionFind::find
    pub fn union(&mut self, r1: usize, r2: usize) -> usize {
        debug_assert!(self.parent[r1].is_none() && self.parent[r2].is_none());
        if r1 == r2 {
            return r1;
        }

        if self.rank[r1] > self.rank[r2] {
            self.parent[r2] = Some(r1);
            r1
        } else if self.rank[r1] < self.rank[r2] {
            self.parent[r1] = Some(r2);
            r2
        } else {
            self.parent[r1] = Some(r2);
            self.rank[r2] += 1;
            r2
        }
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|p| p.is_none()).count()
    }

    pub fn rank(&self, x: usize) -> u32 {
        self.rank[x]
    }
}
