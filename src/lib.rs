//! Meteor Strike - a gravity slingshot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, launch control, collisions, session flow)
//! - `render`: Draw requests issued to an external render target
//! - `platform`: Fixed-rate tick clock
//! - `tuning`: Physics and launch-control balance presets
//! - `settings`: Runtime configuration (variant, tick rate, screens)

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, Variant};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    use glam::DVec2;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f64 = 1920.0;
    pub const ARENA_HEIGHT: f64 = 1080.0;

    /// Gravity defaults shared by every black hole
    pub const GRAVITY: f64 = 10.0;
    pub const BLACK_HOLE_MASS: f64 = 5.0;

    /// Launch control defaults
    pub const DEFAULT_FORCE: f64 = 0.2;
    pub const MIN_FORCE: f64 = 0.2;
    pub const FORCE_STEP: f64 = 0.2;
    pub const SPIN_STEP: f64 = 0.1;
    /// Spin is divided by this to get the per-tick lateral curve
    pub const CURVE_DIVISOR: f64 = 200.0;

    /// Classic variant: force cap and launch velocity = multiplier × force
    pub const CLASSIC_MAX_FORCE: f64 = 7.0;
    pub const CLASSIC_LAUNCH_MULTIPLIER: f64 = 2.0;
    /// Arcade variant
    pub const ARCADE_MAX_FORCE: f64 = 10.0;
    pub const ARCADE_LAUNCH_MULTIPLIER: f64 = 1.0;

    /// Default level layout
    pub const METEOR_SPAWN: DVec2 = DVec2::new(100.0, 100.0);
    pub const BLACK_HOLE_POSITIONS: [DVec2; 2] = [DVec2::new(400.0, 400.0), DVec2::new(1000.0, 600.0)];
    pub const PLANET_POSITION: DVec2 = DVec2::new(1400.0, 900.0);

    /// Sprite footprints (collision boxes before rotation)
    pub const METEOR_SIZE: f64 = 50.0;
    pub const BLACK_HOLE_SIZE: DVec2 = DVec2::new(100.0, 100.0);
    pub const PLANET_SIZE: DVec2 = DVec2::new(150.0, 150.0);

    /// Aim arrow geometry
    pub const ARROW_GAP: f64 = 10.0;
    pub const ARROW_LENGTH_PER_FORCE: f64 = 30.0;
    pub const ARROW_THICKNESS_PER_FORCE: f64 = 2.0;
    pub const ARROW_HEAD_BASE: f64 = 10.0;
    pub const ARROW_HEAD_PER_FORCE: f64 = 15.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Heading of a velocity vector in radians (atan2 convention, y down-screen)
#[inline]
pub fn heading(vel: DVec2) -> f64 {
    vel.y.atan2(vel.x)
}
