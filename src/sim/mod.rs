//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per frame
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (attractors in registration order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bounds;
pub mod collision;
pub mod error;
pub mod gravity;
pub mod level;
pub mod session;
pub mod state;
pub mod tick;

pub use autopilot::{AimPlan, Autopilot};
pub use bounds::{Rect, rotated_size};
pub use collision::{Outcome, evaluate};
pub use error::SimError;
pub use gravity::compute_acceleration;
pub use level::Level;
pub use session::{Control, Session, SessionPhase};
pub use state::{AimPhase, Attractor, Body, Projectile, Target};
pub use tick::{TickInput, advance};
