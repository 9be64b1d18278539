//! Burden registry: the live set of symbiote instances and the color
//! broadcast fan-out.
//!
//! The registry is owned by the engine and passed by reference — no
//! global lookup. Entries are added at spawn and removed exactly once at
//! termination; `deregister` tolerates a missing entry as a no-op.

use hecs::{Entity, World};

use burden_core::components::Tint;
use burden_core::enums::PlayerForm;
use burden_core::types::Color;

/// Registry of live symbiote entities.
#[derive(Debug, Default)]
pub struct BurdenRegistry {
    live: Vec<Entity>,
}

impl BurdenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance at spawn. Duplicate registration is ignored.
    pub fn register(&mut self, entity: Entity) {
        if !self.live.contains(&entity) {
            self.live.push(entity);
        }
    }

    /// Remove an instance at termination. No-op when absent.
    pub fn deregister(&mut self, entity: Entity) {
        self.live.retain(|&e| e != entity);
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Push `color` to every currently registered instance. Instances
    /// registered after this call are unaffected until the next broadcast.
    /// Returns the number of instances recolored.
    pub fn broadcast_color(&self, world: &mut World, color: Color) -> u32 {
        let mut applied = 0;
        for &entity in &self.live {
            if let Ok(mut tint) = world.get::<&mut Tint>(entity) {
                tint.color = color;
                applied += 1;
            }
        }
        tracing::debug!(applied, "color broadcast");
        applied
    }

    /// Map the player's form to the complementary burden color and
    /// broadcast it. Returns the color and the number of instances hit.
    pub fn swap_burden_type(&self, world: &mut World, form: PlayerForm) -> (Color, u32) {
        let color = form.complementary_color();
        let applied = self.broadcast_color(world, color);
        (color, applied)
    }
}
