//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PlayerForm;
use crate::types::Color;

/// Events raised during a tick, delivered with the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A symbiote's root snapped onto the player.
    SymbioteSnapped { symbiote_id: u32 },
    /// A symbiote detached and entered projectile flight.
    SymbioteLaunched { symbiote_id: u32 },
    /// The player absorbed a burden.
    BurdenCollected { count: u32 },
    /// The player's form toggled.
    FormSwapped { form: PlayerForm },
    /// A new color was pushed to every registered symbiote.
    ColorBroadcast { color: Color, instances: u32 },
}
