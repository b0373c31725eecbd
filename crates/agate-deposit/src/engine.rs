//! The layering state machine.
//!
//! Owns the layer buffer for the run's duration. Each `add_layer` call:
//!
//! 1. trims the clustering headroom left by the previous call (layers > 0);
//! 2. solidifies the previous call's solution into the parity band;
//! 3. grows one new layer — ballistic for layer 0, thereafter ballistic or
//!    surface-normal by a `temp_prob` draw;
//! 4. gap-fills each column between the new solution surface and the
//!    solidified material below it;
//! 5. re-adds 10 cells of solution headroom per column so the next batch of
//!    cluster growth has room above the surface.
//!
//! Columns that received no deposition in a pass are skipped — a normal
//! condition, not an error.

use agate_core::{CellState, SimParams, SimRng};
use agate_grid::CellLattice;

use crate::ballistic::ballistic_layer;
use crate::surface::surface_layer;

/// Cells of solution headroom added (and later trimmed) per column.
const HEADROOM: usize = 10;
/// Columns whose surface is within this margin of the top get no headroom.
const TOP_MARGIN: usize = 15;

/// Which growth process built a layer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerKind {
    Ballistic,
    SurfaceNormal,
}

/// The deposition engine: layer buffer plus the monotone layer counter.
pub struct LayerEngine {
    buffer: CellLattice,
    layer_index: u64,
}

impl LayerEngine {
    pub fn new(size: usize) -> Self {
        Self {
            buffer: CellLattice::new(size, CellState::Empty),
            layer_index: 0,
        }
    }

    /// The layer buffer, for merging into the main lattice.
    #[inline]
    pub fn buffer(&self) -> &CellLattice {
        &self.buffer
    }

    /// Number of layers deposited so far.
    #[inline]
    pub fn layer_index(&self) -> u64 {
        self.layer_index
    }

    /// Deposit one layer. `cells` is the main lattice, consulted by the
    /// surface-normal sweep for cluster-adjacent growth.
    pub fn add_layer(
        &mut self,
        cells: &CellLattice,
        params: &SimParams,
        rng: &mut SimRng,
    ) -> LayerKind {
        if self.layer_index > 0 {
            self.trim_headroom();
        }
        self.solidify();

        let kind = if self.layer_index == 0 || params.temp_prob < rng.uniform() {
            ballistic_layer(&mut self.buffer, params.block_number, rng);
            LayerKind::Ballistic
        } else {
            let sweep_seed: u64 = rng.random();
            let exposed = self.exposed_band();
            surface_layer(&mut self.buffer, cells, exposed, params, sweep_seed);
            LayerKind::SurfaceNormal
        };

        self.layer_index += 1;
        self.gap_fill();
        self.add_headroom();
        kind
    }

    /// The solidified band type currently forming the exposed surface.
    ///
    /// Bands alternate: the solution laid down in layer k solidifies at the
    /// start of layer k+1 into `SolidA` when k is even, `SolidB` when odd,
    /// so the surface the sweep grows from matches the previous layer's
    /// parity.
    #[inline]
    fn exposed_band(&self) -> CellState {
        if self.layer_index % 2 == 0 {
            CellState::SolidB
        } else {
            CellState::SolidA
        }
    }

    // ── Pass steps ────────────────────────────────────────────────────────

    /// Remove up to `HEADROOM` solution cells below each column's topmost
    /// solution cell — undoes the clustering room added by the previous call.
    fn trim_headroom(&mut self) {
        let n = self.buffer.size();
        for x in 0..n {
            let Some(top) = self.topmost(x, |v| v == CellState::Solution) else {
                continue;
            };
            let floor = top.saturating_sub(HEADROOM - 1);
            for y in (floor..=top).rev() {
                if self.buffer.get(x, y) == CellState::Solution {
                    self.buffer.set(x, y, CellState::Empty);
                }
            }
        }
    }

    /// Previous layer's solution solidifies into the parity band.
    fn solidify(&mut self) {
        let n = self.buffer.size();
        let band = self.exposed_band();
        for y in 0..n {
            for x in 0..n {
                if self.buffer.get(x, y) == CellState::Solution {
                    self.buffer.set(x, y, band);
                }
            }
        }
    }

    /// Fill empty cells between each column's solution surface and the
    /// solidified material below it (down to row 1 when no solid exists
    /// yet), keeping the surface contiguous.
    fn gap_fill(&mut self) {
        let n = self.buffer.size();
        for x in 0..n {
            let Some(sol_top) = self.topmost(x, |v| v == CellState::Solution) else {
                continue;
            };
            let floor = self.topmost(x, CellState::is_solid).unwrap_or(0);
            for y in floor + 1..=sol_top {
                if self.buffer.get(x, y) == CellState::Empty {
                    self.buffer.set(x, y, CellState::Solution);
                }
            }
        }
    }

    /// Add `HEADROOM` cells of solution above each column's surface so the
    /// next round of cluster growth has room. Columns whose surface already
    /// sits within `TOP_MARGIN` of the lattice top are skipped.
    fn add_headroom(&mut self) {
        let n = self.buffer.size();
        for x in 0..n {
            let Some(top) = self.topmost(x, CellState::is_surface_material) else {
                continue;
            };
            if top >= n - TOP_MARGIN {
                continue;
            }
            for y in top + 1..=top + HEADROOM {
                if self.buffer.get(x, y) == CellState::Empty {
                    self.buffer.set(x, y, CellState::Solution);
                }
            }
        }
    }

    /// Topmost row in column `x` whose cell satisfies `pred`.
    fn topmost(&self, x: usize, pred: impl Fn(CellState) -> bool) -> Option<usize> {
        (0..self.buffer.size())
            .rev()
            .find(|&y| pred(self.buffer.get(x, y)))
    }
}

#[cfg(test)]
impl LayerEngine {
    /// Test hook: direct mutable access to the layer buffer.
    pub(crate) fn buffer_mut(&mut self) -> &mut CellLattice {
        &mut self.buffer
    }
}
