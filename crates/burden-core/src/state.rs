//! Session snapshot — the complete visible state emitted after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, PlayerForm, SymbioteStatus};
use crate::events::GameEvent;
use crate::types::{Color, SimTime};

/// Complete session state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub symbiotes: Vec<SymbioteView>,
    pub events: Vec<GameEvent>,
}

/// Player status for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub form: PlayerForm,
    pub burden_count: u32,
}

/// One visible symbiote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SymbioteView {
    pub symbiote_id: u32,
    pub status: SymbioteStatus,
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: Vec2,
    /// World-space tip of the anchor node.
    pub tip: Vec2,
    pub color: Color,
}
