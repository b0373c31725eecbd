//! `agate-deposit` — the layered sediment deposition engine for the
//! `rust_agate` simulation.
//!
//! The sedimentary silica matrix grows in discrete layers, alternating (by
//! a temperature-controlled draw) between ballistic deposition and a
//! surface-normal stochastic cellular automaton. [`LayerEngine`] owns the
//! layer buffer and the pass pipeline; the orchestrator merges the buffer
//! into the main lattice after each call.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Shards the surface-normal sweep across Rayon workers.   |
//! | `serde`    | Serde derives on public types.                          |

pub mod ballistic;
pub mod engine;
pub mod surface;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ballistic::ballistic_layer;
pub use engine::{LayerEngine, LayerKind};
pub use surface::surface_layer;
