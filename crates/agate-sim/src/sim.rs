//! The `Simulation` struct and its walker loop.

use agate_core::{CellState, Contact, Direction, SimParams, SimRng};
use agate_deposit::LayerEngine;
use agate_grid::{AlignLattice, CellLattice, count_islands};

use crate::walker::{self, StepOutcome};
use crate::{RunReport, SimObserver, SimResult, Termination};

/// Rows at the top of the lattice that count as "the edge" for the
/// surface-termination predicate.
const TOP_BAND: usize = 15;

/// The run orchestrator.
///
/// Owns all simulation state: the main cell lattice, the parallel alignment
/// lattice, the layering engine's buffer, and the sequential RNG. The loop
/// in [`run`](Simulation::run):
///
/// 1. releases one walker from a boundary position;
/// 2. drives it step by step until contact, edge loss, or a step into solid
///    sediment;
/// 3. on contact, applies the crystallographic attachment rule and checks
///    the radial-completion predicate;
/// 4. every `layer_step` attachments, deposits a sediment layer, merges the
///    layer buffer into the main lattice, re-counts islands, and evaluates
///    the surface-at-edge and cluster-enclosed predicates.
pub struct Simulation {
    params: SimParams,
    cells: CellLattice,
    align: AlignLattice,
    engine: LayerEngine,
    rng: SimRng,
    attached: u64,
    walkers_released: u64,
    islands: usize,
}

impl Simulation {
    /// Validate `params` and build the initial state: row 0 all `SolidB`,
    /// seed particles on row 1 at the configured columns, each pre-aligned
    /// `South`.
    pub fn new(params: SimParams) -> SimResult<Self> {
        params.validate()?;

        let n = params.size;
        let mut cells = CellLattice::new(n, CellState::Empty);
        let mut align = AlignLattice::new(n, None);
        for x in 0..n {
            cells.set(x, 0, CellState::SolidB);
        }
        for x in params.seed_columns() {
            cells.set(x, 1, CellState::Particle);
            align.set(x, 1, Some(Direction::South));
        }

        let rng = SimRng::new(params.seed);
        let engine = LayerEngine::new(n);
        Ok(Self {
            params,
            cells,
            align,
            engine,
            rng,
            attached: 0,
            walkers_released: 0,
            islands: 0,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run to termination. The initial sediment layer is deposited before
    /// the first walker; use [`NoopObserver`][crate::NoopObserver] if you
    /// don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunReport {
        let termination = self.run_loop(observer);
        let report = self.report(termination);
        observer.on_end(&report);
        report
    }

    /// The main lattice. After [`run`](Simulation::run), this is the final
    /// grid handed to rendering or analysis collaborators.
    #[inline]
    pub fn cells(&self) -> &CellLattice {
        &self.cells
    }

    /// The crystallographic alignment lattice (meaningful only where
    /// [`cells`](Simulation::cells) holds `Particle`).
    #[inline]
    pub fn align(&self) -> &AlignLattice {
        &self.align
    }

    /// Walkers attached to the cluster so far (seeds excluded).
    #[inline]
    pub fn attached(&self) -> u64 {
        self.attached
    }

    /// Total walker releases so far.
    #[inline]
    pub fn walkers_released(&self) -> u64 {
        self.walkers_released
    }

    // ── Walker driving ────────────────────────────────────────────────────

    fn run_loop<O: SimObserver>(&mut self, observer: &mut O) -> Termination {
        // Initial cavity-edge layer.
        if self.engine.layer_index() == 0 {
            if let Some(t) = self.layer_pass(observer) {
                return t;
            }
        }

        loop {
            self.walkers_released += 1;
            if let Some(t) = self.drive_walker(observer) {
                return t;
            }
            if self.params.snapshot_interval > 0
                && self.walkers_released % self.params.snapshot_interval == 0
            {
                observer.on_snapshot(self.walkers_released, &self.cells);
            }
            if self.walkers_released >= self.params.max_walkers {
                return Termination::WalkerBudget;
            }
        }
    }

    /// Release one walker and drive it to its end. Returns a termination
    /// condition if this walker's attachment (or the layering pass it
    /// triggered) ended the run.
    fn drive_walker<O: SimObserver>(&mut self, observer: &mut O) -> Option<Termination> {
        let (mut x, mut y) = walker::release_position(self.params.size, &mut self.rng);

        loop {
            match walker::step(x, y, &self.cells, &mut self.rng) {
                StepOutcome::Lost => return None,
                StepOutcome::Moved(nx, ny) => {
                    // Solid silica blocks: the walker is discarded rather
                    // than moved.
                    if self.cells.get(nx, ny).is_solid() {
                        return None;
                    }
                    x = nx;
                    y = ny;
                }
                StepOutcome::Contacted(side) => {
                    // Contact ends the walker whether or not it attaches.
                    if !self.try_attach(x, y, side) {
                        return None;
                    }
                    observer.on_attachment(self.attached);

                    if self.radial_cap_reached(x, y) {
                        return Some(Termination::RadialCap);
                    }
                    if self.attached % self.params.layer_step == 0 {
                        return self.layer_pass(observer);
                    }
                    return None;
                }
            }
        }
    }

    /// Apply the attachment rule at a contacted walker's position.
    ///
    /// Attachment requires the walker to stand in solution-phase silica
    /// below the top margin. The walker draws a uniform orientation; if the
    /// contacted neighbor's alignment equals both the draw and the contact
    /// side's required alignment, attachment is deterministic, otherwise it
    /// happens with probability `align_prob`.
    fn try_attach(&mut self, x: usize, y: usize, side: Contact) -> bool {
        let n = self.params.size;
        if !self.cells.get(x, y).is_solution() || y >= n - 5 {
            return false;
        }

        let drawn = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        let marker = self.rng.uniform();

        let (dx, dy) = side.offset();
        let neighbor = self
            .align
            .get((x as i64 + dx) as usize, (y as i64 + dy) as usize);
        let aligned = neighbor == Some(drawn) && drawn == side.required_alignment();

        if aligned || marker < self.params.align_prob {
            self.cells.set(x, y, CellState::Particle);
            self.align.set(x, y, Some(drawn));
            self.attached += 1;
            true
        } else {
            false
        }
    }

    /// Has the newly attached cell crossed the fixed cluster radius,
    /// measured from the bottom-center point `(size / 2, 0)`?
    fn radial_cap_reached(&self, x: usize, y: usize) -> bool {
        let half = self.params.size as f64 / 2.0;
        let dx = x as f64 - half;
        let dist = ((y * y) as f64 + dx * dx).sqrt();
        dist > self.params.cluster_radius()
    }

    // ── Layering ──────────────────────────────────────────────────────────

    /// Deposit one sediment layer, merge it, re-count islands, and evaluate
    /// the surface termination predicates.
    fn layer_pass<O: SimObserver>(&mut self, observer: &mut O) -> Option<Termination> {
        self.engine.add_layer(&self.cells, &self.params, &mut self.rng);
        self.merge_buffer();
        self.islands = count_islands(&self.cells);
        observer.on_layer(self.engine.layer_index(), self.islands);

        if surface_at_edge(&self.cells) {
            return Some(Termination::SurfaceAtEdge);
        }
        if cluster_enclosed(&self.cells) {
            return Some(Termination::ClusterEnclosed);
        }
        None
    }

    /// Overwrite every main-lattice cell above row 0 that is not `Particle`
    /// with the corresponding layer-buffer cell.
    fn merge_buffer(&mut self) {
        let n = self.params.size;
        for y in 1..n {
            for x in 0..n {
                if self.cells.get(x, y) != CellState::Particle {
                    self.cells.set(x, y, self.engine.buffer().get(x, y));
                }
            }
        }
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    fn report(&self, termination: Termination) -> RunReport {
        RunReport {
            attached: self.attached,
            radius: self.params.cluster_radius(),
            area: particle_bbox_area(&self.cells),
            islands: self.islands,
            walkers_released: self.walkers_released,
            termination,
        }
    }
}

// ── Termination predicates ────────────────────────────────────────────────────

/// Any sediment material (solid bands or solution) in the topmost 15 rows.
pub fn surface_at_edge(cells: &CellLattice) -> bool {
    let n = cells.size();
    (n - TOP_BAND..n).any(|y| (0..n).any(|x| cells.get(x, y).is_surface_material()))
}

/// Is the cluster sealed in by the surface?
///
/// Per column, scanning from the top down, the first cell that is neither
/// `Empty` nor plain `Solution` blocks the column. The cluster is enclosed
/// when no column's blocking cell is a `Particle`. Columns with no blocking
/// cell above row 0 don't expose the cluster either.
pub fn cluster_enclosed(cells: &CellLattice) -> bool {
    let n = cells.size();
    (0..n).all(|x| {
        let first = (1..n)
            .rev()
            .map(|y| cells.get(x, y))
            .find(|&v| v != CellState::Empty && v != CellState::Solution);
        first != Some(CellState::Particle)
    })
}

/// Bounding-box area `(max_x - min_x) * (max_y - min_y)` over `Particle`
/// cells. Zero when the particles span a single row or column.
fn particle_bbox_area(cells: &CellLattice) -> usize {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (x, y, v) in cells.iter() {
        if v != CellState::Particle {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, x, y, y),
            Some((lo_x, hi_x, lo_y, hi_y)) => {
                (lo_x.min(x), hi_x.max(x), lo_y.min(y), hi_y.max(y))
            }
        });
    }
    match bounds {
        None => 0,
        Some((lo_x, hi_x, lo_y, hi_y)) => (hi_x - lo_x) * (hi_y - lo_y),
    }
}
