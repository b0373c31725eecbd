//! small — smallest runnable configuration of the rust_agate simulation.
//!
//! Grows a metal-oxide DLA cluster inside a layering silica matrix on a
//! 50 × 50 lattice and prints the final lattice as characters. Scale
//! comment: research runs use `SimParams::default()` (200 × 200, 10 000
//! blocks per layer) — swap the constants below to reproduce those.

use std::time::Instant;

use anyhow::Result;

use agate_core::{CellState, SimParams};
use agate_grid::CellLattice;
use agate_sim::{RunReport, SimObserver, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIZE:         usize = 50;
const BLOCK_NUMBER: usize = 200;
const LAYER_STEP:   u64   = 25;
const TEMP_PROB:    f64   = 0.6;  // surface-normal growth for most layers
const SEED_COUNT:   usize = 1;
const ALIGN_PROB:   f64   = 0.25;
const SEED:         u64   = 42;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints layering progress and collects counts for the summary.
#[derive(Default)]
struct Progress {
    layers: u64,
}

impl SimObserver for Progress {
    fn on_layer(&mut self, layer: u64, islands: usize) {
        self.layers = layer;
        println!("  layer {layer:>3} merged — islands = {islands}");
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn glyph(cell: CellState) -> char {
    match cell {
        CellState::Empty => ' ',
        CellState::Particle => '#',
        CellState::SolidA => 'a',
        CellState::SolidB => 'b',
        CellState::Solution => '~',
        CellState::ClusterSolution => '+',
    }
}

/// Character rendering, row 0 at the top (the display orientation the color
/// maps of the research plots use).
fn render(cells: &CellLattice) {
    let n = cells.size();
    println!("+{}+", "-".repeat(n));
    for y in 0..n {
        let row: String = (0..n).map(|x| glyph(cells.get(x, y))).collect();
        println!("|{row}|");
    }
    println!("+{}+", "-".repeat(n));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== small — rust_agate DLA/KPZ co-evolution ===");
    println!("Lattice: {SIZE} × {SIZE}  |  Seeds: {SEED_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Configuration.
    let params = SimParams {
        size: SIZE,
        block_number: BLOCK_NUMBER,
        layer_step: LAYER_STEP,
        temp_prob: TEMP_PROB,
        seed_count: SEED_COUNT,
        align_prob: ALIGN_PROB,
        seed: SEED,
        ..SimParams::default()
    };

    // 2. Build and run.
    let mut sim = Simulation::new(params)?;
    let mut progress = Progress::default();
    let t0 = Instant::now();
    let report: RunReport = sim.run(&mut progress);
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!();
    println!("Run complete in {:.3} s — {}", elapsed.as_secs_f64(), report.termination);
    println!("{:<22} {:>12}", "walkers released", report.walkers_released);
    println!("{:<22} {:>12}", "walkers attached", report.attached);
    println!("{:<22} {:>12}", "layers deposited", progress.layers);
    println!("{:<22} {:>12}", "islands", report.islands);
    println!("{:<22} {:>12.1}", "cluster radius", report.radius);
    println!("{:<22} {:>12}", "bounding-box area", report.area);
    println!();

    // 4. Final lattice.
    render(sim.cells());

    Ok(())
}
