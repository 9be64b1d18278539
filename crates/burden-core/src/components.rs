//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{PlayerForm, SymbioteStatus};
use crate::types::Color;

/// Marks an entity as the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as a symbiote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Symbiote;

/// Stable per-symbiote identifier, assigned at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbioteId(pub u32);

/// Player state: form, burden counter, collider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    pub form: PlayerForm,
    /// Burdens collected since the last form swap.
    pub burden_count: u32,
    /// Collider radius for projectile impacts and LOS rays.
    pub collider_radius: f32,
}

/// Per-symbiote state machine data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SymbioteState {
    pub status: SymbioteStatus,
    /// `scale.x * scale.y` at spawn. Never changes; every scale mutation in
    /// area-preserving phases solves `scale.x = area / scale.y`.
    pub area: f32,
    /// `scale.y` at spawn; the relax target and the RestScale shrink floor.
    pub rest_scale_y: f32,
    /// Maximum stretch multiplier: max size over the spawn tip length.
    pub scale_ratio: f32,
    /// Remaining projectile travel distance (TravelBudget mode only).
    pub projectile_range: f32,
    /// Set by the collision system; read once at termination.
    pub collided_with_player: bool,
}

/// One child geometry node, owned by the symbiote as plain data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyNode {
    /// Local-space offset from the symbiote root.
    pub offset: Vec2,
    /// Local scale of the node.
    pub scale: Vec2,
    /// Height of the node's mesh bounds, before any scaling.
    pub mesh_height: f32,
}

/// The symbiote's child geometry. `anchor` indexes the bottom-most node,
/// found once at spawn; its tip is the effective interaction point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub nodes: Vec<BodyNode>,
    pub anchor: usize,
}

/// Result of one line-of-sight ray query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LosResult {
    pub hit_something: bool,
    /// True only when the first intersected body is the player.
    pub hit_player: bool,
    pub hit_point: Option<Vec2>,
}

/// Single-slot buffer for the most recent LOS query.
///
/// Written by the fixed-rate LOS system, read by the logic-tick state
/// machine. The result is one physics tick stale by construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LosSensor {
    pub latest: Option<LosResult>,
}

/// Current material color of all of an instance's surfaces. Broadcasts
/// replace it wholesale, so surfaces can never desync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tint {
    pub color: Color,
}

/// Movement direction the player is currently holding.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    pub direction: Vec2,
}
