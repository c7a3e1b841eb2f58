//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `violators.rs` — rank nations over their endorsement cap.
//! - `endorsers.rs` — rank nations by the violators they endorse.
//!
//! ## Principles
//! - Parse/match CLI inputs in `main`.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod endorsers;
pub mod violators;
