//! Surface-normal deposition — a stochastic cellular automaton sweep.
//!
//! # Synchronous update
//!
//! All candidate conversions are collected during the scan and applied only
//! after the full sweep completes, so no converted cell can influence later
//! checks within the same sweep. The scan reads only the pre-sweep buffer,
//! which makes each row independent: with the `parallel` feature rows are
//! sharded across Rayon workers and their buffers concatenated in row
//! order, producing output identical to the serial scan.
//!
//! # Probabilities
//!
//! An `Empty` neighbor of an exposed surface cell converts to `Solution`
//! with probability `0.9717 / dep_mod` (von Neumann offsets) or
//! `0.54544 / dep_mod` (diagonals). An `Empty` neighbor of a qualifying
//! cluster cell converts to `ClusterSolution` with the same constants over
//! `cluster_mod`. Per-row RNG streams are derived from a per-sweep base
//! seed, so draws do not depend on scan scheduling.

use agate_core::{CellState, SimParams, SimRng};
use agate_grid::CellLattice;

/// Sticking coefficient for the four von Neumann offsets.
const VON_NEUMANN_COEFF: f64 = 0.9717;
/// Sticking coefficient for the four diagonal offsets.
const DIAGONAL_COEFF: f64 = 0.54544;

/// The 8 Moore offsets as `(dx, dy, diagonal)`, in sweep order.
const OFFSETS: [(i64, i64, bool); 8] = [
    (0, 1, false),
    (0, -1, false),
    (1, 0, false),
    (-1, 0, false),
    (1, 1, true),
    (1, -1, true),
    (-1, 1, true),
    (-1, -1, true),
];

/// One row's buffered conversions.
struct RowSweep {
    solution: Vec<(usize, usize)>,
    cluster: Vec<(usize, usize)>,
}

/// Run one surface-normal sweep over the layer buffer.
///
/// `exposed` is the solidified band type currently forming the surface
/// (selected by layer parity). `cells` is the main lattice, consulted only
/// to locate `Particle` cells for cluster-adjacent deposition. Both axes
/// wrap.
pub fn surface_layer(
    buffer: &mut CellLattice,
    cells: &CellLattice,
    exposed: CellState,
    params: &SimParams,
    sweep_seed: u64,
) {
    let n = buffer.size();

    // Shared pre-sweep snapshot: the scan only reads, the apply phase below
    // is the only writer.
    let snapshot: &CellLattice = buffer;

    // Interior rows only; offsets may still wrap onto the boundary rows.
    let rows: Vec<RowSweep>;
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        rows = (1..n - 1)
            .into_par_iter()
            .map(|y| scan_row(snapshot, cells, exposed, params, sweep_seed, y))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    {
        rows = (1..n - 1)
            .map(|y| scan_row(snapshot, cells, exposed, params, sweep_seed, y))
            .collect();
    }

    // Apply phase: solution first, cluster-adjacent second (last write wins
    // when one cell was targeted by both buffers).
    for row in &rows {
        for &(x, y) in &row.solution {
            buffer.set(x, y, CellState::Solution);
        }
    }
    for row in &rows {
        for &(x, y) in &row.cluster {
            buffer.set(x, y, CellState::ClusterSolution);
        }
    }
}

/// Scan one row against the pre-sweep buffer state.
fn scan_row(
    buffer: &CellLattice,
    cells: &CellLattice,
    exposed: CellState,
    params: &SimParams,
    sweep_seed: u64,
    y: usize,
) -> RowSweep {
    let mut rng = SimRng::derive(sweep_seed, y as u64);
    let mut row = RowSweep { solution: Vec::new(), cluster: Vec::new() };

    for x in 0..buffer.size() {
        if buffer.get(x, y) == exposed {
            deposit_around(buffer, x, y, params.dep_mod, &mut rng, &mut row.solution);
        } else if cells.get(x, y) == CellState::Particle && touches_surface(buffer, x, y, exposed) {
            deposit_around(buffer, x, y, params.cluster_mod, &mut rng, &mut row.cluster);
        }
    }
    row
}

/// Evaluate all 8 offsets around a source cell, buffering conversions.
fn deposit_around(
    buffer: &CellLattice,
    x: usize,
    y: usize,
    moderator: f64,
    rng: &mut SimRng,
    out: &mut Vec<(usize, usize)>,
) {
    for &(dx, dy, diagonal) in &OFFSETS {
        let tx = buffer.wrap(x as i64 + dx);
        let ty = buffer.wrap(y as i64 + dy);
        if buffer.get(tx, ty) != CellState::Empty {
            continue;
        }
        let coeff = if diagonal { DIAGONAL_COEFF } else { VON_NEUMANN_COEFF };
        if rng.chance(coeff / moderator) {
            out.push((tx, ty));
        }
    }
}

/// Does the Moore neighborhood (in the buffer) contain the exposed band or
/// earlier cluster-adjacent solution?
fn touches_surface(buffer: &CellLattice, x: usize, y: usize, exposed: CellState) -> bool {
    OFFSETS.iter().any(|&(dx, dy, _)| {
        let v = buffer.get_wrapped(x as i64 + dx, y as i64 + dy);
        v == exposed || v == CellState::ClusterSolution
    })
}
