use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OutOfRange, Result};

/// Height-weighted quick-union with optional single-pass path halving.
///
/// Sites are the integers `0..n`, fixed at construction. `union` attaches the
/// root of the shorter tree under the root of the taller one; when halving is
/// enabled, every `find` shortens the path it walks by pointing each visited
/// site at its grandparent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionFind {
    parent: Vec<usize>, // parent[i] == i iff i is a root
    height: Vec<usize>, // meaningful at roots only; an upper bound, never recomputed
    count: usize,       // Number of disjoint sets
    path_compression: bool,
}

impl UnionFind {
    /// Creates a new UnionFind structure with `n` sites, each initially in
    /// its own set, with path halving enabled.
    pub fn new(n: usize) -> Self {
        Self::with_path_compression(n, true)
    }

    /// Creates a new UnionFind structure with `n` sites and an explicit
    /// path-halving setting.
    pub fn with_path_compression(n: usize, path_compression: bool) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            height: vec![1; n],
            count: n,
            path_compression,
        }
    }

    /// Finds the representative (root) of the set containing `p`.
    ///
    /// With halving enabled, each site on the walked path is repointed at its
    /// grandparent before the walk advances, so repeated `find`s flatten the
    /// tree incrementally until every walked site points straight at the
    /// root. The returned root is the same either way.
    pub fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        let mut root = p;
        while root != self.parent[root] {
            if self.path_compression {
                // No-op when the parent is already a root.
                self.parent[root] = self.parent[self.parent[root]];
            }
            root = self.parent[root];
        }
        Ok(root)
    }

    /// Checks whether sites `p` and `q` are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        self.validate(p)?;
        self.validate(q)?;
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Unites the sets containing `p` and `q`, keeping the taller tree's
    /// root (ties keep `p`'s root).
    ///
    /// Returns `Ok(true)` if the two sites were in different sets. Uniting an
    /// already-merged pair is a no-op returning `Ok(false)`; the set count is
    /// only decremented when a merge actually happens, so callers may use
    /// either this or [`connect`](Self::connect) without risk of the count
    /// drifting.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        self.validate(p)?;
        self.validate(q)?;
        let rp = self.find(p)?;
        let rq = self.find(q)?;
        if rp == rq {
            return Ok(false);
        }
        if self.height[rp] < self.height[rq] {
            self.parent[rp] = rq;
            self.height[rq] += self.height[rp];
        } else {
            self.parent[rq] = rp;
            self.height[rp] += self.height[rq];
        }
        self.count -= 1;
        Ok(true)
    }

    /// Ensures sites `p` and `q` are in the same set, merging only if they
    /// are not already. Convenience wrapper over [`union`](Self::union) for
    /// callers that do not care whether a merge happened.
    pub fn connect(&mut self, p: usize, q: usize) -> Result<()> {
        self.union(p, q).map(|_| ())
    }

    /// Returns the number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the total number of sites.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns whether `find` currently performs path halving.
    pub fn path_compression(&self) -> bool {
        self.path_compression
    }

    /// Toggles path halving for subsequent `find` calls. Connectivity answers
    /// are unaffected; only the internal tree shape differs.
    pub fn set_path_compression(&mut self, path_compression: bool) {
        self.path_compression = path_compression;
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p >= self.parent.len() {
            Err(OutOfRange {
                index: p,
                len: self.parent.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for UnionFind {
    /// Diagnostic dump: the set count, the halving flag, then one
    /// `site: parent, height` line per site.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "UnionFind with {} sites in {} sets (path compression: {})",
            self.len(),
            self.count,
            self.path_compression
        )?;
        for i in 0..self.len() {
            writeln!(f, "{}: {}, {}", i, self.parent[i], self.height[i])?;
        }
        Ok(())
    }
}
