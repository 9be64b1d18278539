//! Symbiote behavior for BURDEN.
//!
//! Implements the per-instance state machine driving attraction, stretch,
//! pivot swap, shrink, and projectile flight, plus the supporting tip and
//! pivot geometry. Pure functions over plain data — no ECS dependency.

pub mod fsm;
pub mod geometry;

pub use burden_core as core;

#[cfg(test)]
mod tests;
