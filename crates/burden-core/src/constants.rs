//! Simulation constants and tuning defaults.

use crate::types::Color;

/// Logic tick rate (Hz). Individual ticks may still carry a variable `dt`.
pub const TICK_RATE: u32 = 60;

/// Nominal seconds per logic tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Fixed physics tick rate (Hz) for line-of-sight queries.
pub const PHYSICS_RATE: u32 = 50;

/// Seconds per physics tick.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_RATE as f32;

// --- World bounds ---

/// Radius of the playable area. Symbiotes scatter inside it; projectiles
/// beyond twice this distance are expired.
pub const WORLD_RADIUS: f32 = 30.0;

/// Spawn scatter distance range from the origin.
pub const SPAWN_MIN_RANGE: f32 = 6.0;
pub const SPAWN_MAX_RANGE: f32 = 25.0;

/// Number of symbiotes in a default session.
pub const SESSION_SYMBIOTE_COUNT: usize = 10;

// --- Symbiote tuning defaults ---

/// The symbiote starts moving toward the player within this radius.
pub const ATTRACTION_RADIUS: f32 = 5.0;

/// The radius at which the root snaps off toward the player.
pub const SNAP_RADIUS: f32 = 3.0;

/// Maximum stretched extent; divided by the spawn tip length to get the
/// per-instance stretch ratio.
pub const MAX_SIZE: f32 = 2.5;

/// Speed at which a snapped symbiote shrinks (scale units per second).
pub const SHRINK_SPEED: f32 = 40.0;

/// Speed at which the symbiote travels in projectile mode.
pub const PROJECTILE_SPEED: f32 = 1.0;

/// Floor for `scale.y` before it is used as a divisor.
pub const MIN_SCALE_Y: f32 = 1e-3;

/// Offset added to the angle-to-player so the mesh's authored up axis
/// faces away from the player (tip toward the player).
pub const LOOK_AT_OFFSET_DEG: f32 = 90.0;

// --- Player ---

/// Player movement speed (units per second).
pub const PLAYER_SPEED: f32 = 2.0;

/// Player collider radius for projectile collisions and LOS rays.
pub const PLAYER_COLLIDER_RADIUS: f32 = 0.5;

/// Burdens collected before the player's form toggles.
pub const BURDENS_PER_FORM_SWAP: u32 = 5;

// --- Palette ---

/// Burden color while the player is in the dark form.
pub const LIGHT_COLOR: Color = Color::rgb(0.93, 0.89, 0.78);

/// Burden color while the player is in the light form.
pub const DARK_COLOR: Color = Color::rgb(0.13, 0.11, 0.19);

// --- Ray casting ---

/// Minimum ray parameter accepted as a hit; rejects self-intersection at
/// the ray origin.
pub const RAY_EPSILON: f32 = 1e-4;
