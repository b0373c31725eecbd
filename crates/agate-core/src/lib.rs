//! `agate-core` — foundational types for the `rust_agate` simulation.
//!
//! This crate is a dependency of every other `agate-*` crate. It
//! intentionally has no `agate-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`cell`]   | `CellState`, `Direction`, `Contact`               |
//! | [`config`] | `SimParams` and validation                        |
//! | [`rng`]    | `SimRng` — deterministic, derivable streams       |
//! | [`error`]  | `AgateError`, `AgateResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CellState, Contact, Direction};
pub use config::SimParams;
pub use error::{AgateError, AgateResult};
pub use rng::SimRng;
