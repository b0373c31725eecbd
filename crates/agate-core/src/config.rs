//! Simulation parameters and fail-fast validation.
//!
//! Every run is fully described by one `SimParams` value. The automaton
//! itself has no recoverable error states — all branches are total over the
//! cell-state space — so the only thing that can fail is configuration, and
//! it fails here, before any lattice is allocated.

use crate::{AgateError, AgateResult};

/// Margin below which the 15/10/5-cell offsets used throughout the engine
/// would collide with each other.
const MIN_SIZE: usize = 32;

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Side length of the square lattice.
    pub size: usize,

    /// Particles dropped per ballistic deposition layer.
    pub block_number: usize,

    /// Cluster attachments between layering passes.
    pub layer_step: u64,

    /// Probability that a layer after the first grows by surface-normal
    /// deposition instead of ballistic deposition.
    pub temp_prob: f64,

    /// Number of seed particles placed on row 1.
    pub seed_count: usize,

    /// Attachment probability for walkers that fail the alignment test.
    pub align_prob: f64,

    /// Moderating divisor for surface-normal deposition probabilities.
    pub dep_mod: f64,

    /// Moderating divisor for cluster-adjacent deposition probabilities.
    pub cluster_mod: f64,

    /// Master RNG seed. The same seed always produces identical results.
    pub seed: u64,

    /// Call the snapshot observer hook every N walker releases. 0 disables
    /// snapshots.
    pub snapshot_interval: u64,

    /// Safety breaker: force termination after this many walker releases.
    pub max_walkers: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            size: 200,
            block_number: 10_000,
            layer_step: 500,
            temp_prob: 0.99,
            seed_count: 1,
            align_prob: 0.05,
            dep_mod: 1.0,
            cluster_mod: 1.0,
            seed: 42,
            snapshot_interval: 0,
            max_walkers: 20_000_000,
        }
    }
}

impl SimParams {
    /// Validate the configuration, or return the first problem found.
    pub fn validate(&self) -> AgateResult<()> {
        if self.size < MIN_SIZE {
            return Err(AgateError::Config(format!(
                "size {} is below the minimum {MIN_SIZE} required by the \
                 engine's edge margins",
                self.size
            )));
        }
        if self.seed_count == 0 {
            return Err(AgateError::Config("seed_count must be at least 1".into()));
        }
        if self.block_number == 0 {
            return Err(AgateError::Config("block_number must be at least 1".into()));
        }
        if self.layer_step == 0 {
            return Err(AgateError::Config("layer_step must be at least 1".into()));
        }
        for (name, p) in [("temp_prob", self.temp_prob), ("align_prob", self.align_prob)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(AgateError::Config(format!(
                    "{name} = {p} is outside [0, 1]"
                )));
            }
        }
        for (name, m) in [("dep_mod", self.dep_mod), ("cluster_mod", self.cluster_mod)] {
            if !m.is_finite() || m <= 0.0 {
                return Err(AgateError::Config(format!(
                    "{name} = {m} must be a positive finite divisor"
                )));
            }
        }

        // Seed columns must land on distinct cells.
        let cols = self.seed_columns();
        for pair in cols.windows(2) {
            if pair[0] == pair[1] {
                return Err(AgateError::Config(format!(
                    "seed_count {} exceeds feasible spacing on a size-{} \
                     lattice: two seeds would share column {}",
                    self.seed_count, self.size, pair[0]
                )));
            }
        }
        Ok(())
    }

    /// Seed x-coordinates: evenly spaced across the middle half of the
    /// width, or centered when there is a single seed.
    ///
    /// Spacing truncates to integer columns, so infeasible `seed_count`
    /// values produce duplicates — `validate` rejects those.
    pub fn seed_columns(&self) -> Vec<usize> {
        if self.seed_count == 1 {
            return vec![self.size / 2];
        }
        let lo = self.size as f64 / 4.0;
        let hi = 3.0 * self.size as f64 / 4.0;
        let step = (hi - lo) / (self.seed_count - 1) as f64;
        (0..self.seed_count)
            .map(|i| (lo + step * i as f64) as usize)
            .collect()
    }

    /// The fixed termination radius measured from the bottom-center point.
    #[inline]
    pub fn cluster_radius(&self) -> f64 {
        self.size as f64 / 2.0 - 5.0
    }
}
