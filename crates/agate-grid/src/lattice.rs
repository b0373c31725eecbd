//! Square lattice storage.
//!
//! # Coordinate conventions
//!
//! `(x, y)` with row `y = 0` at the bottom of the simulation area. The x
//! axis is periodic for the deposition engine's neighbor lookups — use
//! [`Lattice::wrap`] — while y is a hard boundary everywhere: callers
//! validate `y` before access, and nothing wraps vertically outside the
//! surface-normal sweep (which wraps both axes explicitly).

use agate_core::{CellState, Direction};

/// A square `N × N` lattice of copyable cell values, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lattice<T: Copy> {
    size: usize,
    cells: Vec<T>,
}

/// The particle/surface state lattice.
pub type CellLattice = Lattice<CellState>;

/// Crystallographic alignment, meaningful only where the cell lattice holds
/// `Particle`.
pub type AlignLattice = Lattice<Option<Direction>>;

impl<T: Copy> Lattice<T> {
    /// Create a lattice with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Self { size, cells: vec![fill; size * size] }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.size && y < self.size);
        self.cells[y * self.size + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.size && y < self.size);
        self.cells[y * self.size + x] = value;
    }

    /// Wrap a possibly-negative coordinate onto the lattice (`mod N`).
    #[inline]
    pub fn wrap(&self, coord: i64) -> usize {
        coord.rem_euclid(self.size as i64) as usize
    }

    /// Periodic read: `x` and `y` wrap modulo the side length.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> T {
        self.cells[self.wrap(y) * self.size + self.wrap(x)]
    }

    /// Iterate `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (i % self.size, i / self.size, v))
    }
}
