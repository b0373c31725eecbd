//! Ballistic deposition — particles fall vertically and stick on contact.

use agate_core::{CellState, SimRng};
use agate_grid::CellLattice;

/// Drop `block_number` particles of silica solution onto the layer buffer.
///
/// Each particle starts at a uniformly random column on the top row and
/// falls one row at a time. It freezes where it stands when it reaches the
/// floor or when any sticking neighbor — the cell below, plus the side
/// cells on the current row — is non-empty. Columns at the x boundary use
/// the 2-neighbor rule (below + inward side); x does not wrap while
/// falling.
pub fn ballistic_layer(buffer: &mut CellLattice, block_number: usize, rng: &mut SimRng) {
    let n = buffer.size();
    for _ in 0..block_number {
        let x = rng.gen_range(0..n);
        let mut y = n - 1;
        buffer.set(x, y, CellState::Solution);

        while y > 0 && !stuck(buffer, x, y) {
            buffer.set(x, y - 1, CellState::Solution);
            buffer.set(x, y, CellState::Empty);
            y -= 1;
        }
    }
}

/// Any non-empty sticking neighbor freezes the falling particle.
#[inline]
fn stuck(buffer: &CellLattice, x: usize, y: usize) -> bool {
    let n = buffer.size();
    let below = buffer.get(x, y - 1) != CellState::Empty;
    let left = x > 0 && buffer.get(x - 1, y) != CellState::Empty;
    let right = x + 1 < n && buffer.get(x + 1, y) != CellState::Empty;
    below || left || right
}
