// Monte Carlo estimation of the percolation threshold.
//
// Each trial shuffles the full list of grid sites, opens them one at a time
// on a fresh grid until it percolates, and records the fraction of sites
// that had to be opened. The aggregate over many trials estimates the
// percolation threshold p* (empirically about 0.593 for large square grids).

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;
use crate::percolation::Percolation;

const CONFIDENCE_95: f64 = 1.96;

/// Threshold statistics collected from repeated percolation trials.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    trials: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Set up an estimator for `trials` runs on an n-by-n grid.
    /// Fails if either count is zero. No trials run until [`run`](Self::run).
    pub fn new(n: usize, trials: usize) -> Result<Self, Error> {
        if n == 0 || trials == 0 {
            return Err(Error::InvalidSize);
        }
        Ok(PercolationStats {
            n,
            trials,
            thresholds: Vec::with_capacity(trials),
        })
    }

    /// Grid side length used for each trial.
    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Number of trials this estimator performs.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run all trials, replacing any previously recorded samples.
    ///
    /// Each trial draws a fresh uniformly random permutation of the n*n
    /// sites (Fisher-Yates via `shuffle`) and opens them in that order until
    /// the grid percolates. Every permutation is finite and opening sites
    /// never un-percolates a grid, so each trial terminates.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        let sites = self.n * self.n;
        let mut order: Vec<usize> = (0..sites).collect();
        self.thresholds.clear();

        for trial in 0..self.trials {
            order.shuffle(rng);
            let mut grid = Percolation::new(self.n)?;
            for &site in &order {
                let row = site / self.n + 1;
                let col = site % self.n + 1;
                grid.open(row, col)?;
                if grid.percolates() {
                    break;
                }
            }
            let threshold = grid.number_of_open_sites() as f64 / sites as f64;
            debug!(
                "trial {}/{}: opened {} of {} sites (threshold {:.4})",
                trial + 1,
                self.trials,
                grid.number_of_open_sites(),
                sites,
                threshold
            );
            self.thresholds.push(threshold);
        }
        Ok(())
    }

    /// Sample mean of the recorded thresholds. NaN before [`run`](Self::run).
    pub fn mean(&self) -> f64 {
        let count = self.thresholds.len() as f64;
        self.thresholds.iter().sum::<f64>() / count
    }

    /// Sample standard deviation of the recorded thresholds, using the n-1
    /// denominator. Defined as NaN for a single trial, where a sample
    /// standard deviation does not exist.
    pub fn stddev(&self) -> f64 {
        if self.thresholds.len() < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq: f64 = self
            .thresholds
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum();
        (sum_sq / (self.thresholds.len() - 1) as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval for the mean.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.trials as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval for the mean.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.trials as f64).sqrt()
    }
}
