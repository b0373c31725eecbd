//! Cell states and crystallographic directions.
//!
//! The lattice encoding is shared with downstream analysis tooling, so the
//! discriminants are fixed: `5` is deliberately unused (a retired state in
//! the encoding) and `6` marks solution deposited next to the metal-oxide
//! cluster rather than on the sediment surface.

use std::fmt;

// ── CellState ─────────────────────────────────────────────────────────────────

/// State of one lattice cell.
///
/// The closed set of values a cell may ever hold. `Empty` is pore space
/// (silica gel); `Solution` is freshly deposited silica that solidifies into
/// `SolidA`/`SolidB` bands on the next layering pass.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellState {
    /// Silica gel — pore space walkers move through.
    #[default]
    Empty = 0,
    /// Metal-oxide cluster cell.
    Particle = 1,
    /// Solidified silica, even band.
    SolidA = 2,
    /// Solidified silica, odd band.
    SolidB = 3,
    /// Silica solution from the most recent layer.
    Solution = 4,
    /// Solution deposited adjacent to the cluster.
    ClusterSolution = 6,
}

impl CellState {
    /// Solidified silica of either band.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, CellState::SolidA | CellState::SolidB)
    }

    /// Any sediment material: solid bands or un-solidified solution.
    #[inline]
    pub fn is_surface_material(self) -> bool {
        matches!(
            self,
            CellState::SolidA | CellState::SolidB | CellState::Solution
        )
    }

    /// Solution-phase silica (plain or cluster-adjacent).
    #[inline]
    pub fn is_solution(self) -> bool {
        matches!(self, CellState::Solution | CellState::ClusterSolution)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Crystallographic orientation assigned to a particle at attachment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

impl Direction {
    /// All four orientations, in encoding order — used for uniform draws.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{s}")
    }
}

// ── Contact ───────────────────────────────────────────────────────────────────

/// Which side of a walker touched the cluster.
///
/// `Down` is the neighbor at `y + 1` and `Up` the neighbor at `y - 1`; the
/// naming follows the display orientation, where row 0 renders at the top.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Contact {
    Down,
    Up,
    Right,
    Left,
}

impl Contact {
    /// The orientation the contacted neighbor must hold (and the walker must
    /// draw) for deterministic, aligned attachment.
    #[inline]
    pub fn required_alignment(self) -> Direction {
        match self {
            Contact::Down => Direction::North,
            Contact::Up => Direction::South,
            Contact::Left => Direction::East,
            Contact::Right => Direction::West,
        }
    }

    /// Unit offset from the walker to the contacted neighbor.
    #[inline]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Contact::Down => (0, 1),
            Contact::Up => (0, -1),
            Contact::Right => (1, 0),
            Contact::Left => (-1, 0),
        }
    }
}
