//! `agate-grid` — lattice storage and connectivity analysis for the
//! `rust_agate` simulation.
//!
//! Two things live here: [`Lattice`], the square row-major grid the whole
//! simulation state is kept in, and [`count_islands`], the 4-connected
//! component count of the silica phase used both as a diagnostic and as
//! part of the enclosure termination test.

pub mod islands;
pub mod lattice;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use islands::count_islands;
pub use lattice::{AlignLattice, CellLattice, Lattice};
