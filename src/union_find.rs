// Union-Find (Disjoint Sets) over a fixed universe of n elements.
//
// Three variants with the same operation contract but different cost
// profiles: QuickFind (constant find, linear union), QuickUnion (root
// chasing, unbalanced), and WeightedQuickUnion (union by size, with
// optional path halving for near-constant amortized cost).

use crate::error::Error;

fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Eager union-find: every element stores its component id directly.
///
/// `find` is a single array lookup; `union` relabels the whole array and is
/// O(n) per call, which makes this variant impractical beyond small universes.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
}

impl QuickFind {
    /// Create n singleton sets. Fails on an empty universe.
    pub fn new(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(QuickFind {
            id: (0..n).collect(),
        })
    }

    /// Component id of element p.
    pub fn find(&self, p: usize) -> Result<usize, Error> {
        check_index(p, self.id.len())?;
        Ok(self.id[p])
    }

    /// Merge the components containing p and q. No-op if already merged.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let pid = self.find(p)?;
        let qid = self.find(q)?;
        if pid == qid {
            return Ok(());
        }
        for slot in self.id.iter_mut() {
            if *slot == pid {
                *slot = qid;
            }
        }
        Ok(())
    }

    /// Check if two elements are in the same set.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Universe size.
    pub fn len(&self) -> usize {
        self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// Lazy union-find: elements form trees via parent pointers, a root is its
/// own parent. No balancing, so a degenerate union order builds a chain and
/// `find` degrades to O(n).
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parent: Vec<usize>,
}

impl QuickUnion {
    /// Create n singleton sets. Fails on an empty universe.
    pub fn new(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(QuickUnion {
            parent: (0..n).collect(),
        })
    }

    /// Find the root of element p by chasing parent pointers.
    pub fn find(&self, p: usize) -> Result<usize, Error> {
        check_index(p, self.parent.len())?;
        let mut i = p;
        while self.parent[i] != i {
            i = self.parent[i];
        }
        Ok(i)
    }

    /// Merge the sets containing p and q by linking root to root.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let proot = self.find(p)?;
        let qroot = self.find(q)?;
        if proot != qroot {
            self.parent[proot] = qroot;
        }
        Ok(())
    }

    /// Check if two elements are in the same set.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Universe size.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Union-by-size with optional path halving.
///
/// `union` always attaches the smaller tree under the larger one, bounding
/// tree height to O(log n). With path halving enabled, `find` additionally
/// redirects every visited node to its grandparent, which flattens the trees
/// over time and brings the amortized cost close to constant.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    // size[r] is the tree size, meaningful only while r is a root
    size: Vec<usize>,
    halve: bool,
}

impl WeightedQuickUnion {
    /// Create n singleton sets without path compression.
    pub fn new(n: usize) -> Result<Self, Error> {
        Self::build(n, false)
    }

    /// Create n singleton sets with path halving enabled.
    pub fn with_path_compression(n: usize) -> Result<Self, Error> {
        Self::build(n, true)
    }

    fn build(n: usize, halve: bool) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(WeightedQuickUnion {
            parent: (0..n).collect(),
            size: vec![1; n],
            halve,
        })
    }

    /// Find the root of element p, halving the path behind it when enabled.
    pub fn find(&mut self, p: usize) -> Result<usize, Error> {
        check_index(p, self.parent.len())?;
        let mut i = p;
        while self.parent[i] != i {
            if self.halve {
                self.parent[i] = self.parent[self.parent[i]];
            }
            i = self.parent[i];
        }
        Ok(i)
    }

    /// Merge the sets containing p and q, smaller tree under the larger.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let proot = self.find(p)?;
        let qroot = self.find(q)?;
        if proot == qroot {
            return Ok(());
        }
        if self.size[proot] < self.size[qroot] {
            self.parent[proot] = qroot;
            self.size[qroot] += self.size[proot];
        } else {
            self.parent[qroot] = proot;
            self.size[proot] += self.size[qroot];
        }
        Ok(())
    }

    /// Check if two elements are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Universe size.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
