//! Draw requests for the external renderer
//!
//! The simulation never touches a graphics API. Each frame the session is
//! turned into a short list of calls on a [`RenderTarget`] implemented by
//! whatever windowing layer hosts the game.

use glam::DVec2;
use std::f64::consts::FRAC_PI_6;

use crate::consts::*;
use crate::heading;
use crate::sim::{Body, Projectile, Rect, Session, SessionPhase};

/// Images the renderer knows how to blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Meteor,
    BlackHole,
    Planet,
}

/// Full-screen states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title image
    Start,
    /// "Game Over. Press R to try again."
    GameOver,
    /// "You Win!"
    Win,
}

impl Screen {
    /// Overlay text, if the screen has any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Screen::Start => None,
            Screen::GameOver => Some("Game Over. Press R to try again."),
            Screen::Win => Some("You Win!"),
        }
    }
}

/// Aim indicator: a line along +x with a triangular head
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub start: DVec2,
    pub end: DVec2,
    /// Line width in whole pixels
    pub thickness: u32,
    pub head: [DVec2; 3],
}

/// Sink for one frame of draw calls
pub trait RenderTarget {
    /// Blit a sprite into `bounds`, rotated by `angle` degrees
    fn draw_sprite(&mut self, sprite: Sprite, bounds: Rect, angle: f64);
    fn draw_arrow(&mut self, arrow: &Arrow);
    fn draw_screen(&mut self, screen: Screen);
    /// Flush the frame
    fn present(&mut self);
}

/// Arrow showing the aimed force; `None` once the meteor is launched.
///
/// Length and thickness grow with force, starting just right of the meteor.
pub fn aim_arrow(projectile: &Projectile) -> Option<Arrow> {
    if projectile.launched() {
        return None;
    }

    let force = projectile.force;
    let start = DVec2::new(projectile.bounds().right() + ARROW_GAP, projectile.pos.y);
    let end = start + DVec2::new(force * ARROW_LENGTH_PER_FORCE, 0.0);
    let thickness = (force * ARROW_THICKNESS_PER_FORCE) as u32;

    let head_size = ARROW_HEAD_BASE + ARROW_HEAD_PER_FORCE * force;
    let back = heading(start - end);
    let head = [
        DVec2::new(end.x, end.y + head_size * (back + FRAC_PI_6).sin()),
        DVec2::new(end.x - head_size * (back + FRAC_PI_6).cos(), end.y),
        DVec2::new(end.x, end.y + head_size * (back - FRAC_PI_6).sin()),
    ];

    Some(Arrow {
        start,
        end,
        thickness,
        head,
    })
}

fn draw_playfield(session: &Session, target: &mut impl RenderTarget) {
    let arena = Rect {
        min: DVec2::ZERO,
        max: DVec2::new(ARENA_WIDTH, ARENA_HEIGHT),
    };
    target.draw_sprite(Sprite::Background, arena, 0.0);

    let projectile = &session.projectile;
    target.draw_sprite(Sprite::Meteor, projectile.bounds(), projectile.angle);
    if let Some(arrow) = aim_arrow(projectile) {
        target.draw_arrow(&arrow);
    }

    for hole in session.level.attractors() {
        target.draw_sprite(Sprite::BlackHole, hole.bounds(), 0.0);
    }
    target.draw_sprite(Sprite::Planet, session.level.target().bounds(), 0.0);
}

/// Issue every draw call for the session's current phase, then present
pub fn render_frame(session: &Session, target: &mut impl RenderTarget) {
    match session.phase {
        SessionPhase::Start => target.draw_screen(Screen::Start),
        SessionPhase::Playing => draw_playfield(session, target),
        SessionPhase::Lost => {
            draw_playfield(session, target);
            target.draw_screen(Screen::GameOver);
        }
        SessionPhase::Won => {
            draw_playfield(session, target);
            target.draw_screen(Screen::Win);
        }
    }
    target.present();
}
