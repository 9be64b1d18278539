//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session (spawns the player and a symbiote scatter).
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f32 },
    /// Set the direction the player is moving. Length is clamped to 1.
    SetMoveInput { direction: Vec2 },
}
