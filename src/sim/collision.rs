//! Collision outcome for the meteor
//!
//! All bodies collide through axis-aligned boxes. Touching a black hole loses
//! the run, touching the planet wins it; when both happen on the same tick the
//! black hole wins (loss takes precedence).

use serde::{Deserialize, Serialize};

use super::state::{Attractor, Body, Projectile, Target};

/// Result of evaluating one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Lose,
    Win,
}

/// Decide the run outcome from the projectile's current collision box
pub fn evaluate(projectile: &Projectile, attractors: &[Attractor], target: &Target) -> Outcome {
    let bounds = projectile.bounds();

    if attractors.iter().any(|a| bounds.intersects(&a.bounds())) {
        Outcome::Lose
    } else if bounds.intersects(&target.bounds()) {
        Outcome::Win
    } else {
        Outcome::Continue
    }
}
