//! BURDEN headless application.
//!
//! Wires the simulation engine into a paced game loop thread and exposes
//! a channel-and-snapshot surface a frontend can sit on top of.

pub mod game_loop;
pub mod state;

pub use burden_core as core;
