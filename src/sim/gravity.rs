//! Black hole gravity
//!
//! Pull falls off with the inverse of distance (not its square): the
//! simplified law the game is balanced around.

use glam::DVec2;

use super::error::SimError;

/// Acceleration pulling a body at `from` toward an attractor.
///
/// Magnitude is `gravity_constant * attractor_mass / distance`, directed along
/// the unit vector from `from` to `attractor_pos`.
///
/// # Errors
///
/// Returns [`SimError::Singularity`] when both positions coincide.
pub fn compute_acceleration(
    from: DVec2,
    attractor_pos: DVec2,
    attractor_mass: f64,
    gravity_constant: f64,
) -> Result<DVec2, SimError> {
    let delta = attractor_pos - from;
    let distance = delta.length();
    if distance == 0.0 {
        return Err(SimError::Singularity { position: from });
    }

    let magnitude = gravity_constant * attractor_mass / distance;
    Ok(delta / distance * magnitude)
}
