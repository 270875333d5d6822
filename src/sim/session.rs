//! Session flow: start screen, play, win/lose
//!
//! The session owns the level, the projectile and the phase. Each tick the
//! outer loop hands it one key snapshot and gets back whether to keep going.

use serde::{Deserialize, Serialize};

use super::collision::{Outcome, evaluate};
use super::error::SimError;
use super::level::Level;
use super::state::Projectile;
use super::tick::{TickInput, advance};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title screen, waiting for confirm
    Start,
    /// Aiming or in flight
    Playing,
    /// Hit a black hole, waiting for restart
    Lost,
    /// Hit the planet, any key exits
    Won,
}

/// What the outer loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: SessionPhase,
    pub projectile: Projectile,
    pub level: Level,
    pub tuning: Tuning,
    /// Ticks simulated in the current attempt
    pub ticks: u64,
    /// Attempts started (1 for the first run)
    pub attempts: u32,
}

impl Session {
    /// New session on the standard level
    pub fn new(settings: &Settings) -> Self {
        let tuning = settings.tuning();
        let level = Level::standard(&tuning);
        Self::with_level(settings, level)
    }

    /// New session on a custom level
    pub fn with_level(settings: &Settings, level: Level) -> Self {
        let tuning = settings.tuning();
        let phase = if settings.session_screens {
            SessionPhase::Start
        } else {
            SessionPhase::Playing
        };
        Self {
            phase,
            projectile: Projectile::spawn(level.spawn(), &tuning),
            level,
            tuning,
            ticks: 0,
            attempts: 1,
        }
    }

    /// Run one tick of session flow.
    ///
    /// # Errors
    ///
    /// Propagates [`SimError`] from the projectile update.
    pub fn step(&mut self, input: &TickInput) -> Result<Control, SimError> {
        if input.quit {
            log::info!("Quit requested");
            return Ok(Control::Exit);
        }

        match self.phase {
            SessionPhase::Start => {
                if input.confirm {
                    self.set_phase(SessionPhase::Playing);
                }
            }

            SessionPhase::Playing => {
                advance(
                    &mut self.projectile,
                    input,
                    self.level.attractors(),
                    &self.tuning,
                )?;
                self.ticks += 1;

                match evaluate(&self.projectile, self.level.attractors(), self.level.target()) {
                    Outcome::Continue => {}
                    Outcome::Lose => {
                        log::info!("Meteor swallowed by a black hole after {} ticks", self.ticks);
                        self.set_phase(SessionPhase::Lost);
                    }
                    Outcome::Win => {
                        log::info!("Planet hit after {} ticks", self.ticks);
                        self.set_phase(SessionPhase::Won);
                    }
                }
            }

            SessionPhase::Lost => {
                if input.restart {
                    self.restart();
                }
            }

            SessionPhase::Won => {
                if input.any_pressed() {
                    return Ok(Control::Exit);
                }
            }
        }

        Ok(Control::Continue)
    }

    /// Start a new attempt with a fresh projectile. The level is untouched.
    pub fn restart(&mut self) {
        self.projectile = self.projectile.reset(&self.tuning);
        self.ticks = 0;
        self.attempts += 1;
        log::info!("Restarting (attempt {})", self.attempts);
        self.set_phase(SessionPhase::Playing);
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        if self.phase != phase {
            log::info!("Session phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
