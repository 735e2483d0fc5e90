use thiserror::Error;

/// Errors reported by the union-find structures and the percolation grid.
///
/// Every variant is a programming error on the caller's side. Callers are
/// expected to propagate these with `?`, never to catch and retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("size must be at least 1")]
    InvalidSize,
    #[error("index {index} out of range for universe of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("site ({row}, {col}) out of range for {n}x{n} grid (rows and columns are 1-indexed)")]
    SiteOutOfRange { row: usize, col: usize, n: usize },
}
