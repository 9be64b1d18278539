//! Symbiote behavior tuning.
//!
//! One canonical state machine covers every observed behavior variant;
//! the knobs here enumerate the variation. Validation happens at
//! construction time — degenerate radii are a configuration error, not a
//! runtime branch.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{PivotMirror, ProjectileEnd, ShrinkFloor};

/// Behavior knobs for the symbiote state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbioteTuning {
    /// Attraction begins within this tip-to-player distance.
    pub attraction_radius: f32,
    /// The root snaps off within this distance. Must differ from
    /// `attraction_radius` (the stretch remap divides by the difference).
    pub snap_radius: f32,
    /// Maximum stretched extent; `scale_ratio = max_size / tip length`.
    pub max_size: f32,
    /// Shrink rate in Snapped (and idle relax), scale units per second.
    pub shrink_speed: f32,
    /// Exponential smoothing rate for the stretch; `None` applies the
    /// remapped target instantly.
    pub stretch_speed: Option<f32>,
    /// Projectile travel speed, units per second.
    pub projectile_speed: f32,
    /// Re-aim at the player every tick while in projectile flight.
    pub follow_player_in_projectile: bool,
    /// Preserve `scale.x * scale.y` while shrinking. Off reproduces the
    /// legacy free shrink that only collapses the Y axis.
    pub area_preserving_shrink: bool,
    /// Relax stretch back toward rest scale while not attracted, instead
    /// of holding shape.
    pub relax_when_idle: bool,
    /// Gate the Attracted transition on a line-of-sight query.
    pub los_gated: bool,
    pub projectile_end: ProjectileEnd,
    pub pivot_mirror: PivotMirror,
    pub shrink_floor: ShrinkFloor,
}

impl Default for SymbioteTuning {
    fn default() -> Self {
        Self {
            attraction_radius: ATTRACTION_RADIUS,
            snap_radius: SNAP_RADIUS,
            max_size: MAX_SIZE,
            shrink_speed: SHRINK_SPEED,
            stretch_speed: None,
            projectile_speed: PROJECTILE_SPEED,
            follow_player_in_projectile: true,
            area_preserving_shrink: true,
            relax_when_idle: false,
            los_gated: false,
            projectile_end: ProjectileEnd::default(),
            pivot_mirror: PivotMirror::default(),
            shrink_floor: ShrinkFloor::default(),
        }
    }
}

impl SymbioteTuning {
    /// The earliest behavior variant: free shrink, fixed travel budget,
    /// Y-axis pivot mirror, no player following.
    pub fn legacy() -> Self {
        Self {
            follow_player_in_projectile: false,
            area_preserving_shrink: false,
            projectile_end: ProjectileEnd::TravelBudget,
            pivot_mirror: PivotMirror::YOnly,
            ..Default::default()
        }
    }

    /// Reject configurations that would produce degenerate arithmetic.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.attraction_radius == self.snap_radius {
            return Err(TuningError::EqualRadii(self.attraction_radius));
        }
        for (field, value) in [
            ("attraction_radius", self.attraction_radius),
            ("snap_radius", self.snap_radius),
            ("max_size", self.max_size),
            ("shrink_speed", self.shrink_speed),
            ("projectile_speed", self.projectile_speed),
        ] {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        if let Some(rate) = self.stretch_speed {
            if !(rate > 0.0) {
                return Err(TuningError::NonPositive {
                    field: "stretch_speed",
                    value: rate,
                });
            }
        }
        Ok(())
    }
}

/// A symbiote tuning configuration that cannot be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TuningError {
    #[error("attraction radius and snap radius must differ (both are {0})")]
    EqualRadii(f32),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}
