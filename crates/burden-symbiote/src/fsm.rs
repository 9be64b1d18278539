//! Symbiote finite state machine.
//!
//! Pure functions that compute the next transform and status for one
//! symbiote from its current state, the player's position, and the tuning
//! knobs. No ECS dependency — operates on plain data. Side effects of the
//! Done state (notify, deregister, destroy) belong to the caller.

use burden_core::components::{Body, LosResult};
use burden_core::config::SymbioteTuning;
use burden_core::constants::MIN_SCALE_Y;
use burden_core::enums::{ProjectileEnd, ShrinkFloor, SymbioteStatus};
use burden_core::types::Transform2;
use glam::Vec2;

use crate::geometry;

/// Input to the symbiote FSM for a single logic tick.
pub struct SymbioteContext<'a> {
    pub status: SymbioteStatus,
    pub transform: Transform2,
    pub body: &'a Body,
    /// Spawn-time `scale.x * scale.y`, preserved by every stretch.
    pub area: f32,
    /// Spawn-time `scale.y`.
    pub rest_scale_y: f32,
    /// Maximum stretch multiplier computed at spawn.
    pub scale_ratio: f32,
    /// Remaining projectile travel (TravelBudget mode).
    pub projectile_range: f32,
    pub collided_with_player: bool,
    /// Most recent LOS query result; one physics tick stale by design.
    pub latest_los: Option<LosResult>,
    pub player_pos: Vec2,
    pub tuning: &'a SymbioteTuning,
    pub dt: f32,
}

/// Output from the symbiote FSM.
pub struct SymbioteUpdate {
    pub status: SymbioteStatus,
    pub transform: Transform2,
    /// New local offset for the anchor node when the pivot swap fired.
    pub anchor_offset: Option<Vec2>,
    pub projectile_range: f32,
    pub collided_with_player: bool,
    pub status_changed: bool,
}

impl SymbioteUpdate {
    fn unchanged(ctx: &SymbioteContext) -> Self {
        Self {
            status: ctx.status,
            transform: ctx.transform,
            anchor_offset: None,
            projectile_range: ctx.projectile_range,
            collided_with_player: ctx.collided_with_player,
            status_changed: false,
        }
    }
}

/// Advance one symbiote by one logic tick.
pub fn evaluate(ctx: &SymbioteContext) -> SymbioteUpdate {
    match ctx.status {
        // Terminal: the caller notifies, deregisters, and destroys.
        SymbioteStatus::Done => SymbioteUpdate::unchanged(ctx),
        SymbioteStatus::Projectile => evaluate_projectile(ctx),
        SymbioteStatus::Snapped => evaluate_snapped(ctx),
        SymbioteStatus::NotAttracted | SymbioteStatus::Attracted => evaluate_attraction(ctx),
    }
}

/// Projectile flight: travel along the down axis, optionally re-aiming at
/// the player first. TravelBudget mode counts the budget down and finishes
/// as collected; Collision mode waits for the collision system.
fn evaluate_projectile(ctx: &SymbioteContext) -> SymbioteUpdate {
    let mut update = SymbioteUpdate::unchanged(ctx);
    let transform = &mut update.transform;

    if ctx.tuning.follow_player_in_projectile {
        transform.rotation_deg = geometry::look_at(transform.position, ctx.player_pos);
    }

    let step = ctx.tuning.projectile_speed * ctx.dt;
    transform.position += transform.down() * step;

    if ctx.tuning.projectile_end == ProjectileEnd::TravelBudget {
        update.projectile_range = ctx.projectile_range - step;
        if update.projectile_range <= 0.0 {
            // Budget flight always ends on the player.
            update.status = SymbioteStatus::Done;
            update.collided_with_player = true;
            update.status_changed = true;
        }
    }

    update
}

/// Snapped: shrink `scale.y` toward the floor, then detach as a
/// projectile with a travel budget equal to the tip-to-player distance.
fn evaluate_snapped(ctx: &SymbioteContext) -> SymbioteUpdate {
    let mut update = SymbioteUpdate::unchanged(ctx);
    let transform = &mut update.transform;

    let shrunk = (transform.scale.y - ctx.tuning.shrink_speed * ctx.dt).max(MIN_SCALE_Y);
    transform.scale.y = shrunk;
    if ctx.tuning.area_preserving_shrink {
        transform.scale.x = ctx.area / shrunk;
    }

    let floor = match ctx.tuning.shrink_floor {
        ShrinkFloor::Unit => 1.0,
        ShrinkFloor::RestScale => ctx.rest_scale_y,
    };
    if shrunk <= floor {
        update.status = SymbioteStatus::Projectile;
        update.status_changed = true;
        let tip = geometry::body_tip(ctx.body, transform);
        update.projectile_range = tip.distance(ctx.player_pos);
    }

    update
}

/// NotAttracted / Attracted: poll the player's position, gate on the stale
/// LOS result when configured, stretch toward the player, and snap when
/// close enough.
fn evaluate_attraction(ctx: &SymbioteContext) -> SymbioteUpdate {
    let mut update = SymbioteUpdate::unchanged(ctx);

    let tip = geometry::body_tip(ctx.body, &ctx.transform);
    let dist = tip.distance(ctx.player_pos);

    let los_clear = !ctx.tuning.los_gated
        || ctx
            .latest_los
            .map_or(false, |los| los.hit_player);

    if dist > ctx.tuning.attraction_radius || !los_clear {
        update.status = SymbioteStatus::NotAttracted;
        update.status_changed = ctx.status != SymbioteStatus::NotAttracted;
        if ctx.tuning.relax_when_idle {
            relax(ctx, &mut update.transform);
        }
        return update;
    }

    update.status = SymbioteStatus::Attracted;
    update.status_changed = ctx.status != SymbioteStatus::Attracted;

    let transform = &mut update.transform;
    transform.rotation_deg = geometry::look_at(transform.position, ctx.player_pos);

    // Stretch: 1x at the attraction radius up to scale_ratio at the snap
    // radius, extrapolating linearly in between ticks.
    let target = geometry::remap(
        dist,
        ctx.tuning.attraction_radius,
        ctx.tuning.snap_radius,
        1.0,
        ctx.scale_ratio,
    );
    let stretched = match ctx.tuning.stretch_speed {
        None => target,
        Some(rate) => {
            let blend = (rate * ctx.dt).min(1.0);
            transform.scale.y + (target - transform.scale.y) * blend
        }
    };
    let stretched = stretched.max(MIN_SCALE_Y);
    transform.scale.y = stretched;
    transform.scale.x = ctx.area / stretched;

    if dist <= ctx.tuning.snap_radius {
        update.status = SymbioteStatus::Snapped;
        update.status_changed = true;
        let anchor = &ctx.body.nodes[ctx.body.anchor];
        let (offset, position) = geometry::swap_pivot(transform, anchor, ctx.tuning.pivot_mirror);
        transform.position = position;
        update.anchor_offset = Some(offset);
    }

    update
}

/// Ease stretch back toward the rest scale while idle, never below it.
fn relax(ctx: &SymbioteContext, transform: &mut Transform2) {
    if transform.scale.y <= ctx.rest_scale_y {
        return;
    }
    let relaxed = (transform.scale.y - ctx.tuning.shrink_speed * ctx.dt).max(ctx.rest_scale_y);
    transform.scale.y = relaxed;
    transform.scale.x = ctx.area / relaxed;
}
