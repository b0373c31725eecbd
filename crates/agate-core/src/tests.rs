//! Unit tests for agate-core primitives.

#[cfg(test)]
mod cell {
    use crate::{CellState, Contact, Direction};

    #[test]
    fn discriminants_match_lattice_encoding() {
        assert_eq!(CellState::Empty as u8, 0);
        assert_eq!(CellState::Particle as u8, 1);
        assert_eq!(CellState::SolidA as u8, 2);
        assert_eq!(CellState::SolidB as u8, 3);
        assert_eq!(CellState::Solution as u8, 4);
        assert_eq!(CellState::ClusterSolution as u8, 6);
    }

    #[test]
    fn state_predicates() {
        assert!(CellState::SolidA.is_solid());
        assert!(CellState::SolidB.is_solid());
        assert!(!CellState::Solution.is_solid());
        assert!(CellState::Solution.is_surface_material());
        assert!(!CellState::ClusterSolution.is_surface_material());
        assert!(CellState::ClusterSolution.is_solution());
        assert!(!CellState::Particle.is_solution());
    }

    #[test]
    fn required_alignment_table() {
        assert_eq!(Contact::Down.required_alignment(), Direction::North);
        assert_eq!(Contact::Up.required_alignment(), Direction::South);
        assert_eq!(Contact::Left.required_alignment(), Direction::East);
        assert_eq!(Contact::Right.required_alignment(), Direction::West);
    }

    #[test]
    fn contact_offsets_are_unit_steps() {
        for c in [Contact::Down, Contact::Up, Contact::Right, Contact::Left] {
            let (dx, dy) = c.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::SimParams;

    fn valid() -> SimParams {
        SimParams { size: 50, ..SimParams::default() }
    }

    #[test]
    fn default_params_validate() {
        SimParams::default().validate().unwrap();
    }

    #[test]
    fn undersized_lattice_rejected() {
        let p = SimParams { size: 20, ..valid() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_seed_count_rejected() {
        let p = SimParams { seed_count: 0, ..valid() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn out_of_range_probabilities_rejected() {
        assert!(SimParams { temp_prob: 1.5, ..valid() }.validate().is_err());
        assert!(SimParams { align_prob: -0.1, ..valid() }.validate().is_err());
    }

    #[test]
    fn non_positive_moderators_rejected() {
        assert!(SimParams { dep_mod: 0.0, ..valid() }.validate().is_err());
        assert!(SimParams { cluster_mod: -1.0, ..valid() }.validate().is_err());
    }

    #[test]
    fn single_seed_is_centered() {
        let p = SimParams { seed_count: 1, ..valid() };
        assert_eq!(p.seed_columns(), vec![25]);
    }

    #[test]
    fn seed_columns_span_middle_half() {
        let p = SimParams { seed_count: 3, size: 100, ..valid() };
        let cols = p.seed_columns();
        assert_eq!(cols, vec![25, 50, 75]);
    }

    #[test]
    fn crowded_seeds_rejected_not_duplicated() {
        // Enough seeds that integer truncation would stack two on one cell.
        let p = SimParams { seed_count: 40, size: 50, ..valid() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn cluster_radius_is_fixed_margin() {
        let p = valid();
        assert_eq!(p.cluster_radius(), 20.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn derived_streams_differ_by_row() {
        let mut a = SimRng::derive(7, 0);
        let mut b = SimRng::derive(7, 1);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y, "adjacent row streams should diverge");
    }

    #[test]
    fn derived_streams_are_reproducible() {
        let mut a = SimRng::derive(99, 12);
        let mut b = SimRng::derive(99, 12);
        for _ in 0..50 {
            assert_eq!(a.uniform(), b.uniform());
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
        // Over-unity probabilities clamp to certainty.
        assert!(rng.chance(4.2));
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(5..=44usize);
            assert!((5..=44).contains(&v));
        }
    }
}
