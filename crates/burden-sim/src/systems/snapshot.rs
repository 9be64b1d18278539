//! Snapshot system: queries the ECS world and builds a SessionSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use burden_core::components::*;
use burden_core::enums::GamePhase;
use burden_core::events::GameEvent;
use burden_core::state::{PlayerView, SessionSnapshot, SymbioteView};
use burden_core::types::{SimTime, Transform2};

use burden_symbiote::geometry;

/// Build a complete SessionSnapshot from the current world state.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        symbiotes: build_symbiotes(world),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Transform2, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, transform, state))| PlayerView {
            position: transform.position,
            form: state.form,
            burden_count: state.burden_count,
        })
        .unwrap_or_default()
}

fn build_symbiotes(world: &World) -> Vec<SymbioteView> {
    let mut views: Vec<SymbioteView> = world
        .query::<(&Symbiote, &SymbioteId, &Transform2, &SymbioteState, &Body, &Tint)>()
        .iter()
        .map(|(_, (_, id, transform, state, body, tint))| SymbioteView {
            symbiote_id: id.0,
            status: state.status,
            position: transform.position,
            rotation_deg: transform.rotation_deg,
            scale: transform.scale,
            tip: geometry::body_tip(body, transform),
            color: tint.color,
        })
        .collect();
    // Stable ordering for the frontend and for determinism checks.
    views.sort_by_key(|view| view.symbiote_id);
    views
}
