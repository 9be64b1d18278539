//! Ray casting against tagged circle colliders.
//!
//! The line-of-sight gate issues one ray per symbiote per physics tick,
//! from the tip along the down axis. Only the first intersected body
//! matters: a hit tagged `Player` means clear line of sight, anything
//! closer blocks attraction.

use glam::Vec2;

use burden_core::constants::RAY_EPSILON;
use burden_core::enums::HitTag;

/// A circle collider with an identity tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub center: Vec2,
    pub radius: f32,
    pub tag: HitTag,
}

impl Collider {
    pub fn new(center: Vec2, radius: f32, tag: HitTag) -> Self {
        Self {
            center,
            radius,
            tag,
        }
    }
}

/// The first body intersected by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec2,
    pub tag: HitTag,
}

/// Cast a ray from `origin` along `dir` (need not be normalized) and
/// return the nearest intersection, if any.
pub fn cast_ray(origin: Vec2, dir: Vec2, colliders: &[Collider]) -> Option<RayHit> {
    let dir = dir.normalize_or_zero();
    if dir == Vec2::ZERO {
        return None;
    }

    let mut nearest: Option<RayHit> = None;
    for collider in colliders {
        let Some(distance) = ray_circle(origin, dir, collider.center, collider.radius) else {
            continue;
        };
        if nearest.map_or(true, |hit| distance < hit.distance) {
            nearest = Some(RayHit {
                distance,
                point: origin + dir * distance,
                tag: collider.tag,
            });
        }
    }
    nearest
}

/// Smallest ray parameter at which a unit-direction ray enters a circle.
/// Origins inside the circle hit at the exit point.
fn ray_circle(origin: Vec2, dir: Vec2, center: Vec2, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let proj = to_center.dot(dir);
    let closest_sq = to_center.length_squared() - proj * proj;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let entry = proj - half_chord;
    if entry > RAY_EPSILON {
        return Some(entry);
    }
    let exit = proj + half_chord;
    (exit > RAY_EPSILON).then_some(exit)
}

/// Static obstacles of the scene, plus per-query dynamic bodies.
#[derive(Debug, Clone, Default)]
pub struct OcclusionMap {
    obstacles: Vec<Collider>,
}

impl OcclusionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static obstacle circle.
    pub fn add_obstacle(&mut self, center: Vec2, radius: f32) {
        self.obstacles
            .push(Collider::new(center, radius, HitTag::Obstacle));
    }

    pub fn obstacles(&self) -> &[Collider] {
        &self.obstacles
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Cast against the static obstacles plus the player's collider.
    pub fn cast(&self, origin: Vec2, dir: Vec2, player: Collider) -> Option<RayHit> {
        let mut hit = cast_ray(origin, dir, &self.obstacles);
        if let Some(player_hit) = cast_ray(origin, dir, std::slice::from_ref(&player)) {
            if hit.map_or(true, |h| player_hit.distance < h.distance) {
                hit = Some(player_hit);
            }
        }
        hit
    }

    /// True when a body's center is inside any static obstacle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.obstacles
            .iter()
            .any(|c| point.distance_squared(c.center) <= c.radius * c.radius)
    }
}
