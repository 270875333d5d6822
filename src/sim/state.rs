//! Simulation bodies
//!
//! The meteor (projectile) is the only moving body. Black holes (attractors)
//! pull it each tick; the planet (target) only ends the run when hit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Rect, rotated_size};
use crate::consts::*;
use crate::tuning::Tuning;

/// Anything with a position and a collision box
pub trait Body {
    fn position(&self) -> DVec2;
    fn bounds(&self) -> Rect;
}

/// Launch-control phase of the projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimPhase {
    /// Force and spin adjustable, projectile held at spawn
    Aiming,
    /// Free flight under gravity; control inputs ignored
    Launched,
}

/// The player's meteor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Center of the collision box
    pub pos: DVec2,
    pub vel: DVec2,
    /// Aim force, kept within the tuning's force bounds
    pub force: f64,
    /// Spin added to `angle` every tick; also curves the flight path
    pub spin: f64,
    /// Accumulated sprite rotation (degrees)
    pub angle: f64,
    pub phase: AimPhase,
    /// Side of the unrotated square sprite
    pub size: f64,
    /// Where the projectile (re)spawns
    pub spawn: DVec2,
}

impl Projectile {
    /// Fresh projectile waiting at `spawn`
    pub fn spawn(spawn: DVec2, tuning: &Tuning) -> Self {
        Self {
            pos: spawn,
            vel: DVec2::ZERO,
            force: tuning.default_force,
            spin: 0.0,
            angle: 0.0,
            phase: AimPhase::Aiming,
            size: METEOR_SIZE,
            spawn,
        }
    }

    /// Fresh projectile at this one's spawn point, discarding all flight state
    pub fn reset(&self, tuning: &Tuning) -> Self {
        Self::spawn(self.spawn, tuning)
    }

    #[inline]
    pub fn launched(&self) -> bool {
        self.phase == AimPhase::Launched
    }

    /// Change spin while aiming (unclamped)
    pub fn add_spin(&mut self, delta: f64) {
        if !self.launched() {
            self.spin += delta;
        }
    }

    /// Increase aim force by one step, never past `max_force`
    pub fn raise_force(&mut self, tuning: &Tuning) {
        if self.launched() {
            return;
        }
        if self.force < tuning.max_force {
            self.force = tuning.clamp_force(self.force + tuning.force_step);
        } else {
            log::debug!("Aim force already at max ({})", tuning.max_force);
        }
    }

    /// Decrease aim force by one step, never below `min_force`
    pub fn lower_force(&mut self, tuning: &Tuning) {
        if self.launched() {
            return;
        }
        if self.force > tuning.min_force {
            self.force = tuning.clamp_force(self.force - tuning.force_step);
        } else {
            log::debug!("Aim force already at min ({})", tuning.min_force);
        }
    }

    /// Launch along +x from the aimed force. No-op once launched.
    pub fn launch(&mut self, launch_multiplier: f64) {
        if self.launched() {
            return;
        }
        self.vel = DVec2::new(self.force * launch_multiplier, 0.0);
        self.phase = AimPhase::Launched;
        log::info!(
            "Meteor launched: force={:.2} spin={:.2} vel=({:.2}, {:.2})",
            self.force,
            self.spin,
            self.vel.x,
            self.vel.y
        );
    }

    /// Rotate the sprite by the current spin
    pub fn rotate(&mut self) {
        self.angle += self.spin;
    }
}

impl Body for Projectile {
    fn position(&self) -> DVec2 {
        self.pos
    }

    /// Bounding box of the rotated sprite, centred on `pos`
    fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, rotated_size(DVec2::splat(self.size), self.angle))
    }
}

/// A black hole: fixed, pulls the projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attractor {
    pub pos: DVec2,
    pub mass: f64,
    pub size: DVec2,
}

impl Attractor {
    pub fn new(pos: DVec2, mass: f64) -> Self {
        Self {
            pos,
            mass,
            size: BLACK_HOLE_SIZE,
        }
    }
}

impl Body for Attractor {
    fn position(&self) -> DVec2 {
        self.pos
    }

    fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

/// The planet: fixed, exerts no force, wins the run when hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Target {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            size: PLANET_SIZE,
        }
    }
}

impl Body for Target {
    fn position(&self) -> DVec2 {
        self.pos
    }

    fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}
