//! Power profile matrix.

use std::ops::Range;

use serde::Serialize;

/// Dense matrix of per-core power consumption values indexed by `[step][core]`.
///
/// Values are stored row-major with the stride equal to the number of cores. Each row corresponds to one time step
/// of the profile (either a variable-length step produced by [partition](crate::partition::partition) or a fixed
/// sampling interval produced by [sample](crate::sample::sample)). Cells not covered by any task are zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PowerProfile {
    cores: usize,
    steps: usize,
    data: Vec<f64>,
}

impl PowerProfile {
    /// Creates zero-filled profile with `steps` rows and `cores` columns.
    pub fn new(cores: usize, steps: usize) -> Self {
        Self {
            cores,
            steps,
            data: vec![0.; cores * steps],
        }
    }

    /// Returns the number of cores (columns).
    pub fn cores(&self) -> usize {
        self.cores
    }

    /// Returns the number of time steps (rows).
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the power consumption of `core` at `step`.
    pub fn get(&self, step: usize, core: usize) -> f64 {
        self.data[step * self.cores + core]
    }

    /// Returns the power consumption of all cores at `step`.
    pub fn row(&self, step: usize) -> &[f64] {
        &self.data[step * self.cores..(step + 1) * self.cores]
    }

    /// Returns an iterator over profile rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.steps).map(move |step| self.row(step))
    }

    /// Returns the underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the profile and returns the underlying row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Sets the power consumption of `core` to `power` for every step in `steps`.
    pub(crate) fn fill(&mut self, core: usize, steps: Range<usize>, power: f64) {
        for step in steps {
            self.data[step * self.cores + core] = power;
        }
    }
}
