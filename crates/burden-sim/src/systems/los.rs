//! Line-of-sight producer — runs once per fixed physics tick.
//!
//! Issues one ray per symbiote from its current tip along its down axis
//! and writes the result into the instance's single-slot sensor. The
//! state machine reads that slot on the next logic tick; the one-tick
//! staleness is an accepted trade between query cost and responsiveness.

use hecs::World;

use burden_core::components::{Body, LosResult, LosSensor, Player, PlayerState, Symbiote};
use burden_core::enums::HitTag;
use burden_core::types::Transform2;

use burden_symbiote::geometry;
use burden_world::{Collider, OcclusionMap};

/// Run one physics step of LOS queries.
pub fn run(world: &mut World, occlusion: &OcclusionMap) {
    let player = world
        .query::<(&Player, &Transform2, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, transform, state))| {
            Collider::new(transform.position, state.collider_radius, HitTag::Player)
        });
    let Some(player) = player else {
        return;
    };

    for (_entity, (_symbiote, transform, body, sensor)) in
        world.query_mut::<(&Symbiote, &Transform2, &Body, &mut LosSensor)>()
    {
        let tip = geometry::body_tip(body, transform);
        let result = match occlusion.cast(tip, transform.down(), player) {
            Some(hit) => LosResult {
                hit_something: true,
                hit_player: hit.tag == HitTag::Player,
                hit_point: Some(hit.point),
            },
            None => LosResult {
                hit_something: false,
                hit_player: false,
                hit_point: None,
            },
        };
        sensor.latest = Some(result);
    }
}
