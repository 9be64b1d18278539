//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{DARK_COLOR, LIGHT_COLOR};
use crate::types::Color;

/// Symbiote lifecycle status.
///
/// Progression is monotonic: `NotAttracted` and `Attracted` may oscillate
/// any number of times, but once `Snapped` is reached the instance only
/// moves forward through `Projectile` to `Done`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SymbioteStatus {
    /// Outside the attraction radius (or line of sight is blocked).
    #[default]
    NotAttracted,
    /// Within the attraction radius; stretching toward the player.
    Attracted,
    /// Root snapped off; shrinking back down toward rest scale.
    Snapped,
    /// Detached and flying along its down axis.
    Projectile,
    /// Terminal state: notify, deregister, destroy.
    Done,
}

/// The player's visual/behavioral form. Toggles every fifth burden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerForm {
    #[default]
    Light,
    Dark,
}

impl PlayerForm {
    pub fn toggled(self) -> Self {
        match self {
            PlayerForm::Light => PlayerForm::Dark,
            PlayerForm::Dark => PlayerForm::Light,
        }
    }

    /// The burden color complementary to this form: a light player carries
    /// dark symbiotes and vice versa.
    pub fn complementary_color(self) -> Color {
        match self {
            PlayerForm::Light => DARK_COLOR,
            PlayerForm::Dark => LIGHT_COLOR,
        }
    }
}

/// What a line-of-sight ray can intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTag {
    Player,
    Obstacle,
}

/// How the projectile phase ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileEnd {
    /// Fly a fixed distance (captured at launch), then finish.
    TravelBudget,
    /// Fly until a collision callback flags the instance as done.
    #[default]
    Collision,
}

/// Which axes of the anchor node's local offset the pivot swap mirrors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotMirror {
    YOnly,
    #[default]
    Both,
}

/// The `scale.y` threshold at which a snapped symbiote detaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShrinkFloor {
    /// Detach at `scale.y <= 1.0`.
    Unit,
    /// Detach at the spawn-time rest scale.
    #[default]
    RestScale,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Active,
    Paused,
    /// Every symbiote has been collected.
    Complete,
}
