//! Demo autopilot
//!
//! Plays the game without a human: picks a random aim from a seeded RNG,
//! dials it in one key at a time, launches, and presses restart after a loss.
//! Same seed, same inputs.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::session::{Session, SessionPhase};
use super::tick::TickInput;

/// Maximum spin key presses per shot (either direction)
const MAX_SPIN_PRESSES: i32 = 10;

/// One planned shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimPlan {
    /// Force to dial in before launching
    pub force: f64,
    /// Signed number of spin presses (positive = up)
    pub spin_presses: i32,
}

/// Seeded input generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    plan: Option<AimPlan>,
    spin_done: i32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            plan: None,
            spin_done: 0,
        }
    }

    /// Current shot plan, if one has been drawn
    pub fn plan(&self) -> Option<AimPlan> {
        self.plan
    }

    fn draw_plan(&mut self, session: &Session) -> AimPlan {
        let tuning = &session.tuning;
        let plan = AimPlan {
            force: self.rng.random_range(tuning.min_force..=tuning.max_force),
            spin_presses: self.rng.random_range(-MAX_SPIN_PRESSES..=MAX_SPIN_PRESSES),
        };
        log::info!(
            "Autopilot plan: force={:.2} spin_presses={}",
            plan.force,
            plan.spin_presses
        );
        self.spin_done = 0;
        plan
    }

    /// Keys to press this tick for the given session state
    pub fn next_input(&mut self, session: &Session) -> TickInput {
        let mut input = TickInput::default();

        match session.phase {
            SessionPhase::Start => input.confirm = true,
            SessionPhase::Lost => {
                input.restart = true;
                self.plan = None;
            }
            SessionPhase::Won => {}
            SessionPhase::Playing => {
                let projectile = &session.projectile;
                if projectile.launched() {
                    return input;
                }

                let plan = match self.plan {
                    Some(plan) => plan,
                    None => {
                        let plan = self.draw_plan(session);
                        self.plan = Some(plan);
                        plan
                    }
                };

                let step = session.tuning.force_step;
                let mut aimed = true;
                if self.spin_done < plan.spin_presses {
                    input.up = true;
                    self.spin_done += 1;
                    aimed = false;
                } else if self.spin_done > plan.spin_presses {
                    input.down = true;
                    self.spin_done -= 1;
                    aimed = false;
                }
                if projectile.force + step / 2.0 < plan.force {
                    input.right = true;
                    aimed = false;
                } else if projectile.force - step / 2.0 > plan.force {
                    input.left = true;
                    aimed = false;
                }
                input.launch = aimed;
            }
        }

        input
    }
}
