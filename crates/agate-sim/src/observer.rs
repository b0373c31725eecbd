//! Run observer trait for progress reporting and data collection.

use agate_grid::CellLattice;

use crate::RunReport;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the walker loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — layer progress printer
///
/// ```rust,ignore
/// struct LayerPrinter;
///
/// impl SimObserver for LayerPrinter {
///     fn on_layer(&mut self, layer: u64, islands: usize) {
///         println!("layer {layer} merged, {islands} islands");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each layering pass has been merged into the main
    /// lattice, with the fresh anastomosis (island) count.
    fn on_layer(&mut self, _layer: u64, _islands: usize) {}

    /// Called after each successful attachment with the running total.
    fn on_attachment(&mut self, _attached: u64) {}

    /// Called every `snapshot_interval` walker releases (never when the
    /// interval is 0).
    ///
    /// Provides read-only access to the lattice so rendering or recording
    /// collaborators can sample intermediate states without the simulation
    /// knowing about any output format.
    fn on_snapshot(&mut self, _walkers_released: u64, _cells: &CellLattice) {}

    /// Called once, after the run has terminated.
    fn on_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
