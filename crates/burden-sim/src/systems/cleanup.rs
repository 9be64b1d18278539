//! Cleanup system: expires runaway projectiles and despawns terminated
//! entities. This is the only place entities are destroyed, and it runs
//! after every other system in the tick.

use hecs::{Entity, World};

use burden_core::components::{Symbiote, SymbioteState};
use burden_core::constants::WORLD_RADIUS;
use burden_core::enums::SymbioteStatus;
use burden_core::types::Transform2;

/// Projectiles that left the world without hitting anything are finished
/// uncollected; buffered entities are despawned.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    let bound_sq = (WORLD_RADIUS * 2.0) * (WORLD_RADIUS * 2.0);
    for (_entity, (_symbiote, transform, state)) in
        world.query_mut::<(&Symbiote, &Transform2, &mut SymbioteState)>()
    {
        if state.status == SymbioteStatus::Projectile
            && transform.position.length_squared() > bound_sq
        {
            state.status = SymbioteStatus::Done;
            state.collided_with_player = false;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
