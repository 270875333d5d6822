//! Fixed timestep projectile update
//!
//! One tick is one unit of time: velocities are in pixels per tick and there
//! is no sub-stepping.

use std::f64::consts::FRAC_PI_2;

use super::error::SimError;
use super::gravity::compute_acceleration;
use super::state::{Attractor, Projectile};
use crate::tuning::Tuning;
use crate::{heading, polar_to_cartesian};

/// Key state sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Spin up (aiming only)
    pub up: bool,
    /// Spin down (aiming only)
    pub down: bool,
    /// Lower aim force (aiming only)
    pub left: bool,
    /// Raise aim force (aiming only)
    pub right: bool,
    /// Launch the meteor (space)
    pub launch: bool,
    /// Leave the start screen (enter)
    pub confirm: bool,
    /// Try again after losing (R)
    pub restart: bool,
    /// Close the game
    pub quit: bool,
}

impl TickInput {
    /// True if any key is held
    pub fn any_pressed(&self) -> bool {
        self.up
            || self.down
            || self.left
            || self.right
            || self.launch
            || self.confirm
            || self.restart
            || self.quit
    }
}

/// Advance the projectile by one tick.
///
/// While aiming, input adjusts spin and force and may launch. Rotation runs
/// every tick. Once launched, the pull of every attractor is evaluated at the
/// position the projectile held at the start of the tick, then the spin curve
/// is applied to the updated velocity, then position is integrated.
///
/// # Errors
///
/// Propagates [`SimError::Singularity`] if the projectile sits exactly on an
/// attractor.
pub fn advance(
    projectile: &mut Projectile,
    input: &TickInput,
    attractors: &[Attractor],
    tuning: &Tuning,
) -> Result<(), SimError> {
    if !projectile.launched() {
        if input.up {
            projectile.add_spin(tuning.spin_step);
        }
        if input.down {
            projectile.add_spin(-tuning.spin_step);
        }
        if input.right {
            projectile.raise_force(tuning);
        }
        if input.left {
            projectile.lower_force(tuning);
        }
        if input.launch {
            projectile.launch(tuning.launch_multiplier);
        }
    }

    projectile.rotate();

    if projectile.launched() {
        let from = projectile.pos;
        for attractor in attractors {
            projectile.vel +=
                compute_acceleration(from, attractor.pos, attractor.mass, tuning.gravity_constant)?;
        }

        // Spin curves the path sideways, perpendicular to the current heading
        let normal = heading(projectile.vel) + FRAC_PI_2;
        projectile.vel += polar_to_cartesian(projectile.spin / tuning.curve_divisor, normal);

        projectile.pos += projectile.vel;
    }

    Ok(())
}
