//! Simulation engine for BURDEN.
//!
//! Owns the hecs ECS world and the burden registry, runs systems each
//! logic tick (with a fixed-rate physics tick for line-of-sight queries),
//! and produces SessionSnapshots for the frontend.

pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use burden_core as core;
pub use engine::SimulationEngine;
