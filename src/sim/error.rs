//! Simulation errors

use glam::DVec2;

/// Errors raised by the simulation core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// Gravity was evaluated with the projectile exactly on an attractor.
    Singularity {
        /// Position shared by both bodies
        position: DVec2,
    },
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Singularity { position } => write!(
                f,
                "gravity singularity: projectile coincides with attractor at ({}, {})",
                position.x, position.y
            ),
        }
    }
}

impl std::error::Error for SimError {}
