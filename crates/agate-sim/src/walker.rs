//! The per-step walker state machine.
//!
//! A walker is ephemeral: a lattice position driven one step at a time until
//! it contacts the cluster, wanders near a boundary, or (in the
//! orchestrator) steps into solid sediment. Nothing about a walker is
//! persisted; the orchestrator owns the loop and applies the attachment rule
//! on contact.

use agate_core::{CellState, Contact, SimRng};
use agate_grid::CellLattice;

/// Inset from every boundary inside which a walker counts as lost.
const EDGE_MARGIN: usize = 5;

/// Neighbor scan order. Each matching neighbor overwrites the previous
/// result, so the last match wins: left outranks right outranks up outranks
/// down. Attachment-orientation statistics depend on this priority.
const CONTACT_ORDER: [Contact; 4] = [Contact::Down, Contact::Up, Contact::Right, Contact::Left];

/// Result of one walker step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The walker wandered near a boundary and is discarded.
    Lost,
    /// A von Neumann neighbor holds a cluster particle.
    Contacted(Contact),
    /// No contact; the walker took one random step.
    Moved(usize, usize),
}

/// Draw a boundary release position: top edge with probability 2/3, left
/// and right edges with 1/6 each, uniform along the chosen edge and inset
/// five cells from the corners.
pub fn release_position(size: usize, rng: &mut SimRng) -> (usize, usize) {
    let u = rng.uniform();
    if u < 4.0 / 6.0 {
        (rng.gen_range(EDGE_MARGIN..size - EDGE_MARGIN), size - EDGE_MARGIN)
    } else if u > 5.0 / 6.0 {
        (EDGE_MARGIN, rng.gen_range(EDGE_MARGIN..size - EDGE_MARGIN))
    } else {
        (size - EDGE_MARGIN - 1, rng.gen_range(EDGE_MARGIN..size - EDGE_MARGIN))
    }
}

/// Advance a walker by one step.
///
/// Edge proximity is checked first, then cluster contact, then one
/// unweighted random move from a single uniform draw partitioned into
/// quarters. A `Contacted` outcome is only possible away from the
/// boundaries, so the contacted position always has all four neighbors in
/// bounds.
pub fn step(x: usize, y: usize, cells: &CellLattice, rng: &mut SimRng) -> StepOutcome {
    let n = cells.size();

    if y + 1 > n - EDGE_MARGIN || y < 2 || x + 1 > n - 1 || x < 2 {
        return StepOutcome::Lost;
    }

    let mut contact = None;
    for side in CONTACT_ORDER {
        let (dx, dy) = side.offset();
        let (nx, ny) = ((x as i64 + dx) as usize, (y as i64 + dy) as usize);
        if cells.get(nx, ny) == CellState::Particle {
            contact = Some(side);
        }
    }
    if let Some(side) = contact {
        return StepOutcome::Contacted(side);
    }

    let u = rng.uniform();
    let (nx, ny) = if u < 0.25 {
        (x - 1, y)
    } else if u < 0.5 {
        (x + 1, y)
    } else if u < 0.75 {
        (x, y + 1)
    } else {
        (x, y - 1)
    };
    StepOutcome::Moved(nx, ny)
}
