//! Final run outputs.

use std::fmt;

/// Why a run stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A walker attached farther than the cluster radius from the
    /// bottom-center point.
    RadialCap,
    /// Sediment material reached the topmost 15 rows of the lattice.
    SurfaceAtEdge,
    /// Every column's topmost blocking cell is sediment: the surface has
    /// sealed the cluster in.
    ClusterEnclosed,
    /// The walker-release safety breaker tripped — the run did not converge
    /// naturally. The report still carries the best-effort final state.
    WalkerBudget,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::RadialCap => "cluster reached the radial cap",
            Termination::SurfaceAtEdge => "surface reached the lattice edge",
            Termination::ClusterEnclosed => "cluster enclosed by the surface",
            Termination::WalkerBudget => "walker budget exhausted",
        };
        write!(f, "{s}")
    }
}

/// Scalar outputs of a completed run.
///
/// The final lattice stays on the [`Simulation`](crate::Simulation) and is
/// read separately; rendering collaborators take it from there.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Walkers that attached to the cluster (seeds excluded).
    pub attached: u64,
    /// The fixed termination radius, `size / 2 - 5`.
    pub radius: f64,
    /// Particle bounding-box area, `(max_x - min_x) * (max_y - min_y)`.
    pub area: usize,
    /// Island count from the last connectivity pass.
    pub islands: usize,
    /// Total walker releases, attached and lost alike.
    pub walkers_released: u64,
    pub termination: Termination,
}
