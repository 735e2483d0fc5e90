// Percolation grid over two independent union-find structures.
//
// An n-by-n grid of initially blocked sites. Opening sites connects them to
// their open orthogonal neighbors; the grid percolates once an open path
// exists from the top row to the bottom row. Connectivity is tracked twice:
// one structure carries both virtual end nodes and answers `percolates`, the
// other never links the bottom node and answers `is_full`. Keeping the
// fullness structure free of the bottom node is what prevents backwash: an
// open bottom-row site whose only route to the top runs through the shared
// bottom node must not report as full.

use crate::error::Error;
use crate::union_find::WeightedQuickUnion;

// orthogonal neighbor offsets as (drow, dcol)
const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An n-by-n percolation system.
///
/// The public API is 1-indexed in both coordinates, matching the usual
/// presentation of the model; storage is 0-indexed and row-major. The
/// conversion happens once, in `site_index`.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    /// Connectivity including both virtual nodes; answers `percolates`.
    both_ends: WeightedQuickUnion,
    /// Connectivity with the top virtual node only; answers `is_full`.
    top_only: WeightedQuickUnion,
    top: usize,
    bottom: usize,
}

impl Percolation {
    /// Create an n-by-n grid with all sites blocked. Fails if n is zero.
    pub fn new(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        let sites = n * n;
        Ok(Percolation {
            n,
            open: vec![false; sites],
            open_sites: 0,
            both_ends: WeightedQuickUnion::with_path_compression(sites + 2)?,
            top_only: WeightedQuickUnion::with_path_compression(sites + 2)?,
            top: sites,
            bottom: sites + 1,
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of currently open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Open the site at (row, col), connecting it to its open neighbors.
    /// Opening an already-open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), Error> {
        let site = self.site_index(row, col)?;
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_sites += 1;

        if row == 1 {
            self.both_ends.union(site, self.top)?;
            self.top_only.union(site, self.top)?;
        }
        if row == self.n {
            // bottom node joins both_ends only; top_only must never see it
            self.both_ends.union(site, self.bottom)?;
        }

        for (drow, dcol) in NEIGHBORS {
            let nrow = row as i64 + drow;
            let ncol = col as i64 + dcol;
            if nrow < 1 || ncol < 1 || nrow > self.n as i64 || ncol > self.n as i64 {
                continue;
            }
            let neighbor = self.site_index(nrow as usize, ncol as usize)?;
            if self.open[neighbor] {
                self.both_ends.union(site, neighbor)?;
                self.top_only.union(site, neighbor)?;
            }
        }
        Ok(())
    }

    /// Is the site at (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, Error> {
        let site = self.site_index(row, col)?;
        Ok(self.open[site])
    }

    /// Is the site at (row, col) full, i.e. connected to the top row through
    /// a chain of open sites?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, Error> {
        let site = self.site_index(row, col)?;
        if !self.open[site] {
            return Ok(false);
        }
        self.top_only.connected(site, self.top)
    }

    /// Does an open path connect the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        // both virtual nodes are fixed in-range indices
        self.both_ends
            .connected(self.top, self.bottom)
            .unwrap_or(false)
    }

    /// Map a 1-indexed (row, col) to the flat 0-indexed site, rejecting
    /// out-of-range coordinates. All public operations go through here.
    fn site_index(&self, row: usize, col: usize) -> Result<usize, Error> {
        if row == 0 || col == 0 || row > self.n || col > self.n {
            return Err(Error::SiteOutOfRange {
                row,
                col,
                n: self.n,
            });
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}
