//! `agate-sim` — walker state machine and run orchestrator for the
//! `rust_agate` simulation.
//!
//! # The run loop
//!
//! ```text
//! deposit initial layer; merge; count islands
//! loop:
//!   ① Release  — draw a boundary release position (top 2/3, sides 1/6 each).
//!   ② Walk     — step until cluster contact, edge loss, or solid sediment.
//!   ③ Attach   — on contact, apply the crystallographic alignment rule;
//!                check the radial-completion predicate.
//!   ④ Layer    — every layer_step attachments: deposit a sediment layer,
//!                merge the buffer, count islands, evaluate surface-at-edge
//!                and cluster-enclosed.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Shards the surface-normal sweep across Rayon workers.   |
//! | `serde`    | Serde derives on public types.                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use agate_core::SimParams;
//! use agate_sim::{NoopObserver, Simulation};
//!
//! let mut sim = Simulation::new(SimParams::default())?;
//! let report = sim.run(&mut NoopObserver);
//! println!("{} walkers attached ({})", report.attached, report.termination);
//! ```

pub mod error;
pub mod observer;
pub mod report;
pub mod sim;
pub mod walker;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{RunReport, Termination};
pub use sim::{cluster_enclosed, surface_at_edge, Simulation};
pub use walker::{release_position, step, StepOutcome};
