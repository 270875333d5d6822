//! Level layout: the ordered black holes, the planet and the meteor spawn
//!
//! Built once per session. Restarting only replaces the projectile; the level
//! is never mutated after construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{Attractor, Target};
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    attractors: Vec<Attractor>,
    target: Target,
    spawn: DVec2,
}

impl Level {
    pub fn new(attractors: Vec<Attractor>, target: Target, spawn: DVec2) -> Self {
        Self {
            attractors,
            target,
            spawn,
        }
    }

    /// The standard layout: two black holes guarding the planet
    pub fn standard(tuning: &Tuning) -> Self {
        let attractors = BLACK_HOLE_POSITIONS
            .iter()
            .map(|&pos| Attractor::new(pos, tuning.attractor_mass))
            .collect();
        Self::new(attractors, Target::new(PLANET_POSITION), METEOR_SPAWN)
    }

    /// Black holes in registration order
    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn spawn(&self) -> DVec2 {
        self.spawn
    }
}
