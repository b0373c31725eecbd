//! Silica island counting — the anastomosis metric.
//!
//! The lattice is binarized to metal-oxide vs everything-else, and the
//! number of 4-connected components of non-particle cells is counted by
//! breadth-first search. For a simply connected silica matrix the count is
//! 1; it grows as the cluster perforates the matrix into disjoint sheets.
//!
//! Pure function over a snapshot: repeated invocation on the same lattice
//! yields the same count.

use std::collections::VecDeque;

use agate_core::CellState;

use crate::CellLattice;

/// Count connected components of non-`Particle` cells (4-connectivity).
pub fn count_islands(lattice: &CellLattice) -> usize {
    let n = lattice.size();
    let mut visited = vec![false; n * n];
    let mut islands = 0;

    for y in 0..n {
        for x in 0..n {
            if lattice.get(x, y) == CellState::Particle || visited[y * n + x] {
                continue;
            }
            bfs_fill(lattice, x, y, &mut visited);
            islands += 1;
        }
    }
    islands
}

/// Flood one component of non-particle cells starting at `(x, y)`.
fn bfs_fill(lattice: &CellLattice, x: usize, y: usize, visited: &mut [bool]) {
    let n = lattice.size();
    let mut queue = VecDeque::new();
    visited[y * n + x] = true;
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        let mut visit = |nx: usize, ny: usize, visited: &mut [bool], queue: &mut VecDeque<_>| {
            let idx = ny * n + nx;
            if !visited[idx] && lattice.get(nx, ny) != CellState::Particle {
                visited[idx] = true;
                queue.push_back((nx, ny));
            }
        };
        if cx + 1 < n {
            visit(cx + 1, cy, visited, &mut queue);
        }
        if cx > 0 {
            visit(cx - 1, cy, visited, &mut queue);
        }
        if cy + 1 < n {
            visit(cx, cy + 1, visited, &mut queue);
        }
        if cy > 0 {
            visit(cx, cy - 1, visited, &mut queue);
        }
    }
}
