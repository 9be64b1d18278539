//! Projectile collision system.
//!
//! Stands in for the physics engine's collision callbacks: it only ever
//! sets status and the collided flag, never geometry — the symbiote
//! system remains the sole writer of transform state.

use glam::Vec2;
use hecs::World;

use burden_core::components::{Player, PlayerState, Symbiote, SymbioteState};
use burden_core::config::SymbioteTuning;
use burden_core::enums::{ProjectileEnd, SymbioteStatus};
use burden_core::types::Transform2;

use burden_world::OcclusionMap;

/// Check every projectile against the player collider and the static
/// obstacles. Only meaningful in Collision termination mode.
pub fn run(world: &mut World, occlusion: &OcclusionMap, tuning: &SymbioteTuning) {
    if tuning.projectile_end != ProjectileEnd::Collision {
        return;
    }

    let player = world
        .query::<(&Player, &Transform2, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, transform, state))| (transform.position, state.collider_radius));
    let Some((player_pos, player_radius)) = player else {
        return;
    };

    for (_entity, (_symbiote, transform, state)) in
        world.query_mut::<(&Symbiote, &Transform2, &mut SymbioteState)>()
    {
        if state.status != SymbioteStatus::Projectile {
            continue;
        }
        if hits_player(transform.position, player_pos, player_radius) {
            state.status = SymbioteStatus::Done;
            state.collided_with_player = true;
        } else if occlusion.contains(transform.position) {
            state.status = SymbioteStatus::Done;
            state.collided_with_player = false;
        }
    }
}

fn hits_player(position: Vec2, player_pos: Vec2, player_radius: f32) -> bool {
    position.distance_squared(player_pos) <= player_radius * player_radius
}
