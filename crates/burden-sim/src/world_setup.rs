//! Entity spawn factories for setting up a session.
//!
//! Creates the player and symbiote entities with their component bundles.
//! Spawn-time validation is where configuration errors become fatal: a
//! missing player, an empty body, or degenerate mesh bounds abort the
//! offending spawn instead of running degraded.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use burden_core::components::*;
use burden_core::config::{SymbioteTuning, TuningError};
use burden_core::constants::*;
use burden_core::enums::PlayerForm;
use burden_core::types::Transform2;

use burden_symbiote::geometry;

/// A symbiote or session that cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("no player entity in the scene")]
    PlayerNotFound,
    #[error("symbiote body has no child nodes")]
    EmptyBody,
    #[error("body node {index} has non-positive mesh bounds")]
    DegenerateMesh { index: usize },
    #[error("symbiote body has no extent below its root")]
    ZeroExtent,
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Set up a session: the player at the origin and a deterministic scatter
/// of symbiotes in a ring around it.
pub fn setup_session(
    world: &mut World,
    registry: &mut crate::registry::BurdenRegistry,
    rng: &mut ChaCha8Rng,
    tuning: &SymbioteTuning,
    symbiote_count: usize,
    next_id: &mut u32,
) -> Result<(), SetupError> {
    tuning.validate()?;
    spawn_player(world);

    for _ in 0..symbiote_count {
        let bearing: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let range: f32 = rng.gen_range(SPAWN_MIN_RANGE..SPAWN_MAX_RANGE);
        let position = Vec2::new(range * bearing.cos(), range * bearing.sin());
        spawn_symbiote(world, registry, tuning, position, default_body_nodes(), next_id)?;
    }
    Ok(())
}

/// Spawn the player at the origin.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Transform2::default(),
        PlayerState {
            form: PlayerForm::default(),
            burden_count: 0,
            collider_radius: PLAYER_COLLIDER_RADIUS,
        },
        MoveIntent::default(),
    ))
}

/// The default single-segment body: one node hanging half a unit below
/// the root, tip one unit below at rest scale.
pub fn default_body_nodes() -> Vec<BodyNode> {
    vec![BodyNode {
        offset: Vec2::new(0.0, -0.5),
        scale: Vec2::ONE,
        mesh_height: 1.0,
    }]
}

/// Spawn a single symbiote, validate its configuration, orient it toward
/// the player, and register it with the burden registry.
pub fn spawn_symbiote(
    world: &mut World,
    registry: &mut crate::registry::BurdenRegistry,
    tuning: &SymbioteTuning,
    position: Vec2,
    nodes: Vec<BodyNode>,
    next_id: &mut u32,
) -> Result<hecs::Entity, SetupError> {
    tuning.validate()?;

    let player_pos = crate::systems::player_position(world).ok_or(SetupError::PlayerNotFound)?;

    if nodes.is_empty() {
        return Err(SetupError::EmptyBody);
    }
    for (index, node) in nodes.iter().enumerate() {
        if !(node.mesh_height > 0.0) || !(node.scale.y > 0.0) {
            return Err(SetupError::DegenerateMesh { index });
        }
    }

    // Orient toward the player before measuring anything, so the tip
    // already points the right way.
    let transform = Transform2 {
        position,
        rotation_deg: geometry::look_at(position, player_pos),
        scale: Vec2::ONE,
    };

    let anchor = geometry::anchor_node(&nodes, &transform).ok_or(SetupError::EmptyBody)?;
    let body = Body { nodes, anchor };

    let tip_len = geometry::body_tip(&body, &transform).distance(transform.position);
    if tip_len <= f32::EPSILON {
        return Err(SetupError::ZeroExtent);
    }

    let state = SymbioteState {
        status: Default::default(),
        area: transform.scale.x * transform.scale.y,
        rest_scale_y: transform.scale.y,
        scale_ratio: tuning.max_size / tip_len,
        projectile_range: 0.0,
        collided_with_player: false,
    };

    let symbiote_id = SymbioteId(*next_id);
    *next_id += 1;

    let entity = world.spawn((
        Symbiote,
        symbiote_id,
        transform,
        state,
        body,
        LosSensor::default(),
        Tint {
            // Burdens start complementary to the player's initial form.
            color: PlayerForm::default().complementary_color(),
        },
    ));
    registry.register(entity);
    Ok(entity)
}
