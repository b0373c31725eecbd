//! Integration tests for agate-sim.

use agate_core::{CellState, Contact, SimParams, SimRng};
use agate_grid::CellLattice;

use crate::walker::{self, StepOutcome};
use crate::{RunReport, SimObserver, Simulation, Termination, cluster_enclosed, surface_at_edge};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The small deterministic regression configuration.
fn small_params() -> SimParams {
    SimParams {
        size: 50,
        block_number: 200,
        layer_step: 25,
        temp_prob: 0.0,
        seed_count: 1,
        align_prob: 1.0,
        dep_mod: 1.0,
        cluster_mod: 1.0,
        seed: 42,
        snapshot_interval: 0,
        max_walkers: 40_000,
    }
}

fn empty_cells(size: usize) -> CellLattice {
    CellLattice::new(size, CellState::Empty)
}

/// Observer that records every callback, for loop-structure assertions.
#[derive(Default)]
struct Recorder {
    layers: Vec<(u64, usize)>,
    attachments: u64,
    snapshots: u64,
    ended: Option<RunReport>,
}

impl SimObserver for Recorder {
    fn on_layer(&mut self, layer: u64, islands: usize) {
        self.layers.push((layer, islands));
    }
    fn on_attachment(&mut self, attached: u64) {
        self.attachments = attached;
    }
    fn on_snapshot(&mut self, _walkers_released: u64, _cells: &CellLattice) {
        self.snapshots += 1;
    }
    fn on_end(&mut self, report: &RunReport) {
        self.ended = Some(report.clone());
    }
}

// ── Walker step function ──────────────────────────────────────────────────────

#[cfg(test)]
mod walker_tests {
    use super::*;

    #[test]
    fn releases_stay_inside_corner_insets() {
        let size = 50;
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let (x, y) = walker::release_position(size, &mut rng);
            assert!((5..=size - 6).contains(&x), "x = {x} outside the inset");
            assert!((5..=size - 5).contains(&y), "y = {y} outside the inset");
        }
    }

    /// Positions within the 5-cell margin of any boundary are lost before
    /// any neighbor check or move — so forced near-edge releases can never
    /// attach.
    #[test]
    fn near_edge_positions_are_lost() {
        let size = 50;
        let cells = empty_cells(size);
        let mut rng = SimRng::new(2);

        let near_edge = [
            (25, size - 5), // top release row: y + 1 > size - 5
            (25, 1),        // y - 1 < 1
            (size - 1, 25), // x + 1 > size - 1
            (1, 25),        // x - 1 < 1
        ];
        for (x, y) in near_edge {
            assert_eq!(
                walker::step(x, y, &cells, &mut rng),
                StepOutcome::Lost,
                "({x}, {y}) should be near-edge"
            );
        }
    }

    /// Neighbors are checked down, up, right, left with the last match
    /// winning, so left outranks every other side.
    #[test]
    fn contact_priority_left_wins() {
        let mut cells = empty_cells(20);
        cells.set(10, 11, CellState::Particle); // down
        cells.set(9, 10, CellState::Particle); // left
        let mut rng = SimRng::new(3);
        assert_eq!(
            walker::step(10, 10, &cells, &mut rng),
            StepOutcome::Contacted(Contact::Left)
        );
    }

    #[test]
    fn contact_priority_right_beats_down() {
        let mut cells = empty_cells(20);
        cells.set(10, 11, CellState::Particle); // down
        cells.set(11, 10, CellState::Particle); // right
        let mut rng = SimRng::new(3);
        assert_eq!(
            walker::step(10, 10, &cells, &mut rng),
            StepOutcome::Contacted(Contact::Right)
        );
    }

    #[test]
    fn free_step_moves_one_cell() {
        let cells = empty_cells(20);
        let mut rng = SimRng::new(4);
        for _ in 0..100 {
            match walker::step(10, 10, &cells, &mut rng) {
                StepOutcome::Moved(x, y) => {
                    let manhattan = x.abs_diff(10) + y.abs_diff(10);
                    assert_eq!(manhattan, 1, "moved to ({x}, {y})");
                }
                other => panic!("expected a move, got {other:?}"),
            }
        }
    }
}

// ── Termination predicates ────────────────────────────────────────────────────

#[cfg(test)]
mod predicate_tests {
    use super::*;

    #[test]
    fn surface_at_edge_sees_only_the_top_band() {
        let size = 40;
        let mut cells = empty_cells(size);
        assert!(!surface_at_edge(&cells));

        cells.set(5, size - 16, CellState::Solution); // one row below the band
        assert!(!surface_at_edge(&cells));

        cells.set(5, size - 15, CellState::Solution);
        assert!(surface_at_edge(&cells));
    }

    #[test]
    fn exposed_particle_is_not_enclosed() {
        let mut cells = empty_cells(40);
        cells.set(5, 10, CellState::Particle);
        assert!(!cluster_enclosed(&cells));
    }

    #[test]
    fn solid_above_particle_encloses_it() {
        let mut cells = empty_cells(40);
        cells.set(5, 10, CellState::Particle);
        cells.set(5, 20, CellState::SolidB);
        assert!(cluster_enclosed(&cells));
    }

    /// Plain solution is transparent to the scan, cluster-adjacent solution
    /// is not.
    #[test]
    fn solution_does_not_block_but_cluster_solution_does() {
        let mut cells = empty_cells(40);
        cells.set(5, 10, CellState::Particle);
        cells.set(5, 20, CellState::Solution);
        assert!(!cluster_enclosed(&cells));

        cells.set(5, 20, CellState::ClusterSolution);
        assert!(cluster_enclosed(&cells));
    }
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod orchestrator_tests {
    use super::*;

    #[test]
    fn invalid_params_are_rejected() {
        let p = SimParams { size: 10, ..small_params() };
        assert!(Simulation::new(p).is_err());
    }

    #[test]
    fn initial_state_has_floor_and_seed() {
        let sim = Simulation::new(small_params()).unwrap();
        let cells = sim.cells();
        for x in 0..50 {
            assert_eq!(cells.get(x, 0), CellState::SolidB);
        }
        assert_eq!(cells.get(25, 1), CellState::Particle);
        assert_eq!(sim.align().get(25, 1), Some(agate_core::Direction::South));
    }

    #[test]
    fn walker_budget_is_surfaced_not_swallowed() {
        let p = SimParams { max_walkers: 3, ..small_params() };
        let mut sim = Simulation::new(p).unwrap();
        let report = sim.run(&mut crate::NoopObserver);
        assert_eq!(report.termination, Termination::WalkerBudget);
        assert_eq!(report.walkers_released, 3);
    }

    #[test]
    fn attached_count_matches_particle_census() {
        let mut sim = Simulation::new(small_params()).unwrap();
        let report = sim.run(&mut crate::NoopObserver);

        let particles = sim
            .cells()
            .iter()
            .filter(|&(_, _, v)| v == CellState::Particle)
            .count() as u64;
        let seeds = 1;
        assert_eq!(report.attached, particles - seeds);
    }

    #[test]
    fn floor_row_survives_the_whole_run() {
        let mut sim = Simulation::new(small_params()).unwrap();
        sim.run(&mut crate::NoopObserver);
        for x in 0..50 {
            assert_eq!(sim.cells().get(x, 0), CellState::SolidB);
        }
    }

    #[test]
    fn every_particle_carries_an_alignment() {
        let mut sim = Simulation::new(small_params()).unwrap();
        sim.run(&mut crate::NoopObserver);
        for (x, y, v) in sim.cells().iter() {
            if v == CellState::Particle {
                assert!(
                    sim.align().get(x, y).is_some(),
                    "particle at ({x}, {y}) has no alignment"
                );
            }
        }
    }

    #[test]
    fn observer_sees_initial_layer_and_final_report() {
        let p = SimParams { max_walkers: 5, ..small_params() };
        let mut sim = Simulation::new(p).unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec);

        assert_eq!(rec.layers.first().map(|&(layer, _)| layer), Some(1));
        assert_eq!(rec.attachments, report.attached);
        assert_eq!(rec.ended.as_ref(), Some(&report));
    }

    #[test]
    fn snapshot_interval_samples_every_nth_release() {
        let p = SimParams {
            max_walkers: 10,
            snapshot_interval: 2,
            ..small_params()
        };
        let mut sim = Simulation::new(p).unwrap();
        let mut rec = Recorder::default();
        let report = sim.run(&mut rec);
        assert_eq!(report.termination, Termination::WalkerBudget);
        assert_eq!(rec.snapshots, 5);
    }
}

// ── Fixed-seed regression ─────────────────────────────────────────────────────

#[cfg(test)]
mod regression {
    use super::*;

    /// The small configuration must reproduce an identical final grid and
    /// attachment count across repeated runs with the same seed.
    #[test]
    fn fixed_seed_reproduces_grid_and_count() {
        let mut a = Simulation::new(small_params()).unwrap();
        let mut b = Simulation::new(small_params()).unwrap();
        let report_a = a.run(&mut crate::NoopObserver);
        let report_b = b.run(&mut crate::NoopObserver);

        assert_eq!(report_a, report_b);
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.align(), b.align());
    }

    /// A different seed should (overwhelmingly) produce a different walk
    /// history.
    #[test]
    fn different_seed_diverges() {
        let mut a = Simulation::new(small_params()).unwrap();
        let mut b = Simulation::new(SimParams { seed: 43, ..small_params() }).unwrap();
        let report_a = a.run(&mut crate::NoopObserver);
        let report_b = b.run(&mut crate::NoopObserver);
        assert_ne!(
            (report_a.walkers_released, a.cells().clone()),
            (report_b.walkers_released, b.cells().clone())
        );
    }
}
