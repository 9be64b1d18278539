//! Geometry utilities: angles, linear remapping, tip points, and the
//! pivot swap.
//!
//! Tip points depend on the parent's current scale, which changes every
//! tick, so they are recomputed on every call rather than cached.

use glam::Vec2;

use burden_core::components::{Body, BodyNode};
use burden_core::constants::LOOK_AT_OFFSET_DEG;
use burden_core::enums::PivotMirror;
use burden_core::types::Transform2;

/// Angle in degrees of the vector `to - from`, measured from the +X axis,
/// normalized to `[0, 360)`.
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let dir = to - from;
    dir.y.atan2(dir.x).to_degrees().rem_euclid(360.0)
}

/// Linear remap of `value` from `[from_min, from_max]` to
/// `[to_min, to_max]`. Not clamped: out-of-range values extrapolate.
/// The caller guarantees `from_max != from_min`.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (to_max - to_min) * ((value - from_min) / (from_max - from_min)) + to_min
}

/// Rotation that points a transform's down axis from `position` toward
/// `target`. The +90° offset compensates for the mesh's authored up
/// direction.
pub fn look_at(position: Vec2, target: Vec2) -> f32 {
    (angle_to(position, target) + LOOK_AT_OFFSET_DEG).rem_euclid(360.0)
}

/// World-space point at the far end of a child node: the node's world
/// position, pushed down along the parent's up axis by half the node's
/// scaled mesh height.
pub fn tip_of(node: &BodyNode, parent: &Transform2) -> Vec2 {
    let node_pos = parent.to_world(node.offset);
    node_pos - parent.up() * (parent.scale.y * node.scale.y * 0.5 * node.mesh_height)
}

/// World-space tip of the body's anchor node.
pub fn body_tip(body: &Body, parent: &Transform2) -> Vec2 {
    tip_of(&body.nodes[body.anchor], parent)
}

/// Index of the structural bottom of the body: the node whose tip has the
/// smallest projection on the parent's up axis. First enumerated wins
/// ties. Returns `None` for an empty body.
pub fn anchor_node(nodes: &[BodyNode], parent: &Transform2) -> Option<usize> {
    let up = parent.up();
    let mut best: Option<(usize, f32)> = None;
    for (index, node) in nodes.iter().enumerate() {
        let proj = tip_of(node, parent).dot(up);
        match best {
            Some((_, lowest)) if proj >= lowest => {}
            _ => best = Some((index, proj)),
        }
    }
    best.map(|(index, _)| index)
}

/// The pivot swap, executed exactly once at the Snapped transition.
///
/// Mirrors the anchor node's local offset and shifts the parent so the
/// node's world placement — and with it the tip — is unchanged. Returns
/// the mirrored offset and the compensated parent position.
pub fn swap_pivot(parent: &Transform2, node: &BodyNode, mirror: PivotMirror) -> (Vec2, Vec2) {
    let mirrored = match mirror {
        PivotMirror::YOnly => Vec2::new(node.offset.x, -node.offset.y),
        PivotMirror::Both => -node.offset,
    };
    let rad = parent.rotation_deg.to_radians();
    let delta = Vec2::from_angle(rad).rotate(parent.scale * (node.offset - mirrored));
    (mirrored, parent.position + delta)
}
