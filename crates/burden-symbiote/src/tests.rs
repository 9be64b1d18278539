//! Tests for symbiote geometry and the state machine: remap identities,
//! tip math, pivot swap, attraction gating, and full lifecycle runs.

use glam::Vec2;

use burden_core::components::{Body, BodyNode, LosResult};
use burden_core::config::SymbioteTuning;
use burden_core::constants::DT;
use burden_core::enums::{PivotMirror, ProjectileEnd, SymbioteStatus};
use burden_core::types::Transform2;

use crate::fsm::{evaluate, SymbioteContext, SymbioteUpdate};
use crate::geometry;

/// A body with a single node hanging half a unit below the root.
/// At rest scale the tip sits exactly one unit below the root.
fn single_node_body() -> Body {
    Body {
        nodes: vec![BodyNode {
            offset: Vec2::new(0.0, -0.5),
            scale: Vec2::ONE,
            mesh_height: 1.0,
        }],
        anchor: 0,
    }
}

/// A standalone symbiote for driving the FSM tick by tick.
struct Rig {
    transform: Transform2,
    body: Body,
    status: SymbioteStatus,
    area: f32,
    rest_scale_y: f32,
    scale_ratio: f32,
    projectile_range: f32,
    collided_with_player: bool,
    latest_los: Option<LosResult>,
    tuning: SymbioteTuning,
}

impl Rig {
    fn new(position: Vec2, player_pos: Vec2, tuning: SymbioteTuning) -> Self {
        let transform = Transform2 {
            position,
            rotation_deg: geometry::look_at(position, player_pos),
            scale: Vec2::ONE,
        };
        Self {
            transform,
            body: single_node_body(),
            status: SymbioteStatus::NotAttracted,
            area: 1.0,
            rest_scale_y: 1.0,
            scale_ratio: 2.5,
            projectile_range: 0.0,
            collided_with_player: false,
            latest_los: None,
            tuning,
        }
    }

    fn tick(&mut self, player_pos: Vec2) -> SymbioteUpdate {
        let ctx = SymbioteContext {
            status: self.status,
            transform: self.transform,
            body: &self.body,
            area: self.area,
            rest_scale_y: self.rest_scale_y,
            scale_ratio: self.scale_ratio,
            projectile_range: self.projectile_range,
            collided_with_player: self.collided_with_player,
            latest_los: self.latest_los,
            player_pos,
            tuning: &self.tuning,
            dt: DT,
        };
        let update = evaluate(&ctx);
        self.status = update.status;
        self.transform = update.transform;
        self.projectile_range = update.projectile_range;
        self.collided_with_player = update.collided_with_player;
        if let Some(offset) = update.anchor_offset {
            let anchor = self.body.anchor;
            self.body.nodes[anchor].offset = offset;
        }
        update
    }

    fn tip(&self) -> Vec2 {
        geometry::body_tip(&self.body, &self.transform)
    }
}

// ---- Geometry ----

#[test]
fn test_angle_to_cardinal_directions() {
    let origin = Vec2::ZERO;
    assert!((geometry::angle_to(origin, Vec2::X) - 0.0).abs() < 1e-5);
    assert!((geometry::angle_to(origin, Vec2::Y) - 90.0).abs() < 1e-5);
    assert!((geometry::angle_to(origin, Vec2::NEG_X) - 180.0).abs() < 1e-5);
    assert!((geometry::angle_to(origin, Vec2::NEG_Y) - 270.0).abs() < 1e-5);
}

#[test]
fn test_remap_endpoint_identities() {
    assert!((geometry::remap(5.0, 5.0, 3.0, 1.0, 2.5) - 1.0).abs() < 1e-6);
    assert!((geometry::remap(3.0, 5.0, 3.0, 1.0, 2.5) - 2.5).abs() < 1e-6);
}

#[test]
fn test_remap_extrapolates_without_clamping() {
    // Beyond from_max by d: result is to_max + d * slope.
    let slope = (2.5 - 1.0) / (3.0 - 5.0);
    let expected = 2.5 + 0.5 * slope;
    assert!((geometry::remap(3.5, 5.0, 3.0, 1.0, 2.5) - expected).abs() < 1e-5);
    // Below from_min as well: value 6 is from_min + 1.
    let expected = 1.0 + 1.0 * slope;
    assert!((geometry::remap(6.0, 5.0, 3.0, 1.0, 2.5) - expected).abs() < 1e-5);
}

#[test]
fn test_tip_of_rest_pose() {
    let body = single_node_body();
    let tip = geometry::body_tip(&body, &Transform2::default());
    assert!(tip.abs_diff_eq(Vec2::new(0.0, -1.0), 1e-6));
}

#[test]
fn test_tip_scales_with_parent() {
    let body = single_node_body();
    let t = Transform2 {
        scale: Vec2::new(0.5, 2.0),
        ..Default::default()
    };
    // Offset scales to (0, -1); half-height scales to 1.
    let tip = geometry::body_tip(&body, &t);
    assert!(tip.abs_diff_eq(Vec2::new(0.0, -2.0), 1e-6));
}

#[test]
fn test_look_at_points_down_axis_at_target() {
    let position = Vec2::new(2.0, -1.0);
    let target = Vec2::new(-3.0, 4.0);
    let t = Transform2 {
        position,
        rotation_deg: geometry::look_at(position, target),
        scale: Vec2::ONE,
    };
    let dir = (target - position).normalize();
    assert!(t.down().abs_diff_eq(dir, 1e-5));
}

#[test]
fn test_anchor_node_picks_lowest_tip() {
    let nodes = vec![
        BodyNode {
            offset: Vec2::new(0.0, -0.25),
            scale: Vec2::ONE,
            mesh_height: 0.5,
        },
        BodyNode {
            offset: Vec2::new(0.2, -0.75),
            scale: Vec2::ONE,
            mesh_height: 0.5,
        },
    ];
    assert_eq!(geometry::anchor_node(&nodes, &Transform2::default()), Some(1));
    assert_eq!(geometry::anchor_node(&[], &Transform2::default()), None);
}

#[test]
fn test_anchor_node_tie_breaks_to_first() {
    let node = BodyNode {
        offset: Vec2::new(0.0, -0.5),
        scale: Vec2::ONE,
        mesh_height: 1.0,
    };
    let nodes = vec![node, node];
    assert_eq!(geometry::anchor_node(&nodes, &Transform2::default()), Some(0));
}

#[test]
fn test_swap_pivot_preserves_tip() {
    let parent = Transform2 {
        position: Vec2::new(3.0, 2.0),
        rotation_deg: 37.0,
        scale: Vec2::new(0.8, 2.3),
    };
    let node = BodyNode {
        offset: Vec2::new(0.1, -0.5),
        scale: Vec2::new(1.0, 0.9),
        mesh_height: 1.2,
    };

    for mirror in [PivotMirror::YOnly, PivotMirror::Both] {
        let before = geometry::tip_of(&node, &parent);
        let (offset, position) = geometry::swap_pivot(&parent, &node, mirror);
        let swapped_node = BodyNode { offset, ..node };
        let swapped_parent = Transform2 { position, ..parent };
        let after = geometry::tip_of(&swapped_node, &swapped_parent);
        assert!(
            before.abs_diff_eq(after, 1e-4),
            "tip moved across pivot swap ({mirror:?}): {before} -> {after}"
        );
    }
}

#[test]
fn test_swap_pivot_mirrors_offset() {
    let parent = Transform2::default();
    let node = BodyNode {
        offset: Vec2::new(0.3, -0.5),
        scale: Vec2::ONE,
        mesh_height: 1.0,
    };
    let (both, _) = geometry::swap_pivot(&parent, &node, PivotMirror::Both);
    assert!(both.abs_diff_eq(Vec2::new(-0.3, 0.5), 1e-6));
    let (y_only, _) = geometry::swap_pivot(&parent, &node, PivotMirror::YOnly);
    assert!(y_only.abs_diff_eq(Vec2::new(0.3, 0.5), 1e-6));
}

// ---- Attraction ----

#[test]
fn test_attraction_entry_by_distance() {
    let player = Vec2::ZERO;
    // Root at 7 puts the tip at distance 6 — outside the radius.
    let mut rig = Rig::new(Vec2::new(7.0, 0.0), player, SymbioteTuning::default());
    rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::NotAttracted);

    // Root at 5 puts the tip at distance 4 — inside.
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, SymbioteTuning::default());
    let update = rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::Attracted);
    assert!(update.status_changed);
}

#[test]
fn test_attracted_stretch_matches_remap() {
    let player = Vec2::ZERO;
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, SymbioteTuning::default());
    rig.tick(player);
    // Tip distance 4 remaps to (2.5 - 1) * 0.5 + 1 = 1.75.
    assert!((rig.transform.scale.y - 1.75).abs() < 1e-5);
    assert!((rig.transform.scale.x * rig.transform.scale.y - rig.area).abs() < 1e-4);
}

#[test]
fn test_stretch_smoothing_approaches_target() {
    let player = Vec2::ZERO;
    let tuning = SymbioteTuning {
        stretch_speed: Some(10.0),
        ..Default::default()
    };
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, tuning);
    rig.tick(player);
    let first = rig.transform.scale.y;
    assert!(first > 1.0 && first < 1.75, "one smoothed step, got {first}");
    for _ in 0..600 {
        rig.tick(player);
        if rig.status != SymbioteStatus::Attracted {
            break;
        }
    }
    // Smoothing still snaps eventually as the tip creeps in.
    assert!(rig.status >= SymbioteStatus::Snapped);
}

#[test]
fn test_not_attracted_holds_shape_by_default() {
    let player = Vec2::ZERO;
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, SymbioteTuning::default());
    rig.tick(player);
    let stretched = rig.transform.scale;

    // Player leaves; shape is held.
    let far = Vec2::new(100.0, 0.0);
    rig.tick(far);
    assert_eq!(rig.status, SymbioteStatus::NotAttracted);
    assert_eq!(rig.transform.scale, stretched);
}

#[test]
fn test_not_attracted_relaxes_when_configured() {
    let player = Vec2::ZERO;
    let tuning = SymbioteTuning {
        relax_when_idle: true,
        ..Default::default()
    };
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, tuning);
    rig.tick(player);
    assert!(rig.transform.scale.y > 1.0);

    let far = Vec2::new(100.0, 0.0);
    for _ in 0..10 {
        rig.tick(far);
    }
    assert!((rig.transform.scale.y - rig.rest_scale_y).abs() < 1e-5);
    assert!((rig.transform.scale.x * rig.transform.scale.y - rig.area).abs() < 1e-4);
}

#[test]
fn test_los_gate_blocks_attraction_within_radius() {
    let player = Vec2::ZERO;
    let tuning = SymbioteTuning {
        los_gated: true,
        ..Default::default()
    };
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, tuning);

    // No query result yet: blocked.
    rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::NotAttracted);

    // Obstructed: blocked despite proximity.
    rig.latest_los = Some(LosResult {
        hit_something: true,
        hit_player: false,
        hit_point: Some(Vec2::new(2.0, 0.0)),
    });
    rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::NotAttracted);

    // Clear line to the player: attracted.
    rig.latest_los = Some(LosResult {
        hit_something: true,
        hit_player: true,
        hit_point: Some(Vec2::ZERO),
    });
    rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::Attracted);
}

// ---- Snap and shrink ----

#[test]
fn test_snap_fires_pivot_swap_once() {
    let player = Vec2::ZERO;
    // Root at 3 puts the tip at distance 2, inside the snap radius.
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), player, SymbioteTuning::default());
    let update = rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::Snapped);
    let offset = update.anchor_offset.expect("pivot swap at snap");
    // Default mirror flips both axes of the (0, -0.5) offset.
    assert!(offset.abs_diff_eq(Vec2::new(0.0, 0.5), 1e-6));

    // Subsequent ticks never swap again.
    let update = rig.tick(player);
    assert!(update.anchor_offset.is_none());
}

#[test]
fn test_snapped_shrinks_at_shrink_speed_then_launches() {
    let player = Vec2::ZERO;
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), player, SymbioteTuning::default());
    rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::Snapped);

    let mut ticks = 0;
    while rig.status == SymbioteStatus::Snapped {
        let before = rig.transform.scale.y;
        rig.tick(player);
        ticks += 1;
        assert!(ticks < 100, "snapped phase never ended");
        if rig.status == SymbioteStatus::Snapped {
            let step = before - rig.transform.scale.y;
            assert!(
                (step - rig.tuning.shrink_speed * DT).abs() < 1e-4,
                "shrink step was {step}"
            );
            let area = rig.transform.scale.x * rig.transform.scale.y;
            assert!((area - rig.area).abs() < 1e-3);
        }
    }

    assert_eq!(rig.status, SymbioteStatus::Projectile);
    // Budget captured as the tip-to-player distance at launch.
    let expected = rig.tip().distance(player);
    assert!((rig.projectile_range - expected).abs() < 1e-4);
}

#[test]
fn test_legacy_free_shrink_ignores_area() {
    let player = Vec2::ZERO;
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), player, SymbioteTuning::legacy());
    rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::Snapped);
    let x_before = rig.transform.scale.x;
    rig.tick(player);
    assert_eq!(rig.transform.scale.x, x_before, "legacy shrink leaves x alone");
}

// ---- Projectile ----

#[test]
fn test_projectile_travel_budget_terminates_as_collected() {
    let player = Vec2::ZERO;
    let tuning = SymbioteTuning {
        projectile_end: ProjectileEnd::TravelBudget,
        follow_player_in_projectile: false,
        ..Default::default()
    };
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), player, tuning);
    rig.status = SymbioteStatus::Projectile;
    rig.projectile_range = 1.0;

    let start = rig.transform.position;
    let mut ticks = 0;
    while rig.status == SymbioteStatus::Projectile {
        rig.tick(player);
        ticks += 1;
        assert!(ticks <= 61, "budget of 1.0 at speed 1.0 is ~60 ticks");
    }
    assert_eq!(rig.status, SymbioteStatus::Done);
    assert!(rig.collided_with_player);
    let traveled = rig.transform.position.distance(start);
    assert!((traveled - 1.0).abs() < 0.05, "traveled {traveled}");
}

#[test]
fn test_projectile_collision_mode_waits_for_external_flag() {
    let player = Vec2::ZERO;
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), player, SymbioteTuning::default());
    rig.status = SymbioteStatus::Projectile;
    for _ in 0..240 {
        rig.tick(player);
    }
    assert_eq!(rig.status, SymbioteStatus::Projectile);
}

#[test]
fn test_projectile_follow_reaims_every_tick() {
    let tuning = SymbioteTuning::default();
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), Vec2::ZERO, tuning);
    rig.status = SymbioteStatus::Projectile;

    // Player moves; the down axis keeps pointing at it.
    let player = Vec2::new(0.0, 5.0);
    rig.tick(player);
    let dir = (player - rig.transform.position).normalize();
    assert!(rig.transform.down().abs_diff_eq(dir, 1e-3));
}

#[test]
fn test_done_is_inert_in_the_fsm() {
    let player = Vec2::ZERO;
    let mut rig = Rig::new(Vec2::new(3.0, 0.0), player, SymbioteTuning::default());
    rig.status = SymbioteStatus::Done;
    let before = rig.transform;
    let update = rig.tick(player);
    assert_eq!(rig.status, SymbioteStatus::Done);
    assert!(!update.status_changed);
    assert_eq!(rig.transform, before);
}

// ---- Lifecycle properties ----

#[test]
fn test_full_lifecycle_is_monotonic_and_area_preserving() {
    let player = Vec2::ZERO;
    let tuning = SymbioteTuning {
        projectile_end: ProjectileEnd::TravelBudget,
        ..Default::default()
    };
    let mut rig = Rig::new(Vec2::new(5.0, 0.0), player, tuning);

    let mut observed = vec![rig.status];
    let mut snapped_seen = false;
    for _ in 0..20_000 {
        rig.tick(player);
        if *observed.last().unwrap() != rig.status {
            observed.push(rig.status);
        }
        snapped_seen |= rig.status == SymbioteStatus::Snapped;
        if snapped_seen {
            assert!(
                rig.status >= SymbioteStatus::Snapped,
                "regressed to {:?} after snapping",
                rig.status
            );
        }
        if matches!(
            rig.status,
            SymbioteStatus::Attracted | SymbioteStatus::Snapped
        ) {
            let area = rig.transform.scale.x * rig.transform.scale.y;
            assert!((area - rig.area).abs() < 1e-3, "area drifted to {area}");
        }
        if rig.status == SymbioteStatus::Done {
            break;
        }
    }

    assert_eq!(*observed.last().unwrap(), SymbioteStatus::Done);
    // Statuses only ever step forward or oscillate before the snap.
    let first_snap = observed
        .iter()
        .position(|s| *s == SymbioteStatus::Snapped)
        .expect("lifecycle must snap");
    for s in &observed[first_snap..] {
        assert!(*s >= SymbioteStatus::Snapped);
    }
}
