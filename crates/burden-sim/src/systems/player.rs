//! Player systems: movement integration and burden collection.

use hecs::World;

use burden_core::components::{MoveIntent, Player, PlayerState};
use burden_core::constants::{BURDENS_PER_FORM_SWAP, PLAYER_SPEED};
use burden_core::events::GameEvent;
use burden_core::types::Transform2;

use crate::registry::BurdenRegistry;

/// Integrate the held movement direction: position += intent * speed * dt.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (_player, transform, intent)) in
        world.query_mut::<(&Player, &mut Transform2, &MoveIntent)>()
    {
        transform.position += intent.direction * PLAYER_SPEED * dt;
    }
}

/// One burden reached the player: bump the counter, toggle the form every
/// fifth collect, and broadcast the complementary color to all live
/// symbiotes when it does.
pub fn collect_burden(world: &mut World, registry: &BurdenRegistry, events: &mut Vec<GameEvent>) {
    let mut swapped = None;
    for (_entity, (_player, state)) in world.query_mut::<(&Player, &mut PlayerState)>() {
        state.burden_count += 1;
        events.push(GameEvent::BurdenCollected {
            count: state.burden_count,
        });
        if state.burden_count >= BURDENS_PER_FORM_SWAP {
            state.burden_count = 0;
            state.form = state.form.toggled();
            swapped = Some(state.form);
        }
    }

    if let Some(form) = swapped {
        events.push(GameEvent::FormSwapped { form });
        let (color, instances) = registry.swap_burden_type(world, form);
        events.push(GameEvent::ColorBroadcast { color, instances });
        tracing::info!(?form, instances, "form swapped, burdens recolored");
    }
}
