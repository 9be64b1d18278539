//! Symbiote update system — drives the per-instance state machine.
//!
//! Runs the pure FSM from burden-symbiote for every live instance, applies
//! the resulting transforms, and handles the Done state: notify the player
//! (when the terminating cause was a player collision), deregister from
//! the burden registry, and buffer the entity for despawn. Termination is
//! processed exactly once — the entity is gone before the next tick.

use hecs::{Entity, World};

use burden_core::components::{Body, LosSensor, Symbiote, SymbioteId, SymbioteState};
use burden_core::config::SymbioteTuning;
use burden_core::enums::SymbioteStatus;
use burden_core::events::GameEvent;
use burden_core::types::Transform2;

use burden_symbiote::fsm::{evaluate, SymbioteContext, SymbioteUpdate};

use crate::registry::BurdenRegistry;
use crate::systems::player;

/// Run the symbiote system for one logic tick.
pub fn run(
    world: &mut World,
    registry: &mut BurdenRegistry,
    tuning: &SymbioteTuning,
    dt: f32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_pos = match crate::systems::player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    // Terminations entered since the last tick (collision callbacks or a
    // travel budget running out).
    let mut finished: Vec<(Entity, u32, bool)> = Vec::new();
    {
        let mut query = world.query::<(&Symbiote, &SymbioteId, &SymbioteState)>();
        for (entity, (_symbiote, id, state)) in query.iter() {
            if state.status == SymbioteStatus::Done {
                finished.push((entity, id.0, state.collided_with_player));
            }
        }
    }
    for (entity, symbiote_id, collided) in finished {
        if collided {
            player::collect_burden(world, registry, events);
        }
        registry.deregister(entity);
        despawn_buffer.push(entity);
        tracing::debug!(symbiote_id, collided, "symbiote terminated");
    }

    // Advance every remaining instance through the FSM.
    let mut updates: Vec<(Entity, u32, SymbioteUpdate)> = Vec::new();
    {
        let mut query =
            world.query::<(&Symbiote, &SymbioteId, &Transform2, &SymbioteState, &Body, &LosSensor)>();
        for (entity, (_symbiote, id, transform, state, body, sensor)) in query.iter() {
            if state.status == SymbioteStatus::Done {
                continue; // despawns at the end of this tick
            }
            let ctx = SymbioteContext {
                status: state.status,
                transform: *transform,
                body,
                area: state.area,
                rest_scale_y: state.rest_scale_y,
                scale_ratio: state.scale_ratio,
                projectile_range: state.projectile_range,
                collided_with_player: state.collided_with_player,
                latest_los: sensor.latest,
                player_pos,
                tuning,
                dt,
            };
            updates.push((entity, id.0, evaluate(&ctx)));
        }
    }

    // Apply buffered updates.
    for (entity, symbiote_id, update) in updates {
        if update.status_changed {
            match update.status {
                SymbioteStatus::Snapped => events.push(GameEvent::SymbioteSnapped { symbiote_id }),
                SymbioteStatus::Projectile => {
                    events.push(GameEvent::SymbioteLaunched { symbiote_id })
                }
                _ => {}
            }
        }
        if let Ok(mut transform) = world.get::<&mut Transform2>(entity) {
            *transform = update.transform;
        }
        if let Ok(mut state) = world.get::<&mut SymbioteState>(entity) {
            state.status = update.status;
            state.projectile_range = update.projectile_range;
            state.collided_with_player = update.collided_with_player;
        }
        if let Some(offset) = update.anchor_offset {
            if let Ok(mut body) = world.get::<&mut Body>(entity) {
                let anchor = body.anchor;
                body.nodes[anchor].offset = offset;
            }
        }
    }
}
