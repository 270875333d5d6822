//! Data-driven launch and gravity balance
//!
//! Two variants of the game exist, differing in force cap, launch multiplier,
//! tick rate and whether the start/win/lose screens are shown. Both share
//! the same simulation and are expressed here as presets.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game variant preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Force cap 7, launch velocity = 2 × force, 30 Hz, with session screens
    #[default]
    Classic,
    /// Force cap 10, launch velocity = force, 60 Hz, no session screens
    Arcade,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Arcade => "Arcade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "a" => Some(Variant::Classic),
            "arcade" | "b" => Some(Variant::Arcade),
            _ => None,
        }
    }

    /// Simulation ticks per second
    pub fn tick_rate(&self) -> u32 {
        match self {
            Variant::Classic => 30,
            Variant::Arcade => 60,
        }
    }

    /// Whether start/win/lose screens gate the session
    pub fn session_screens(&self) -> bool {
        match self {
            Variant::Classic => true,
            Variant::Arcade => false,
        }
    }

    /// Physics and launch-control tuning for this variant
    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Classic => Tuning::default(),
            Variant::Arcade => Tuning {
                max_force: ARCADE_MAX_FORCE,
                launch_multiplier: ARCADE_LAUNCH_MULTIPLIER,
                ..Tuning::default()
            },
        }
    }
}

/// Launch-control and gravity parameters consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Lowest aim force reachable by LEFT presses
    pub min_force: f64,
    /// Highest aim force reachable by RIGHT presses
    pub max_force: f64,
    /// Aim force change per tick while LEFT/RIGHT is held
    pub force_step: f64,
    /// Aim force of a freshly spawned projectile
    pub default_force: f64,
    /// Spin change per tick while UP/DOWN is held
    pub spin_step: f64,
    /// Lateral curve per tick is `spin / curve_divisor`
    pub curve_divisor: f64,
    /// Launch velocity is `(force * launch_multiplier, 0)`
    pub launch_multiplier: f64,
    /// Gravitational constant
    pub gravity_constant: f64,
    /// Mass shared by all attractors
    pub attractor_mass: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_force: MIN_FORCE,
            max_force: CLASSIC_MAX_FORCE,
            force_step: FORCE_STEP,
            default_force: DEFAULT_FORCE,
            spin_step: SPIN_STEP,
            curve_divisor: CURVE_DIVISOR,
            launch_multiplier: CLASSIC_LAUNCH_MULTIPLIER,
            gravity_constant: GRAVITY,
            attractor_mass: BLACK_HOLE_MASS,
        }
    }
}

impl Tuning {
    /// Clamp a force value into `[min_force, max_force]`
    #[inline]
    pub fn clamp_force(&self, force: f64) -> f64 {
        force.clamp(self.min_force, self.max_force)
    }
}
