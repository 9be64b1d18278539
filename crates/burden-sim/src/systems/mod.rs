//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components,
//! the registry, or the engine.

use glam::Vec2;
use hecs::World;

use burden_core::components::Player;
use burden_core::types::Transform2;

pub mod cleanup;
pub mod collision;
pub mod los;
pub mod player;
pub mod snapshot;
pub mod symbiote;

/// The shared player position every symbiote polls each tick.
pub(crate) fn player_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Player, &Transform2)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| transform.position)
}
