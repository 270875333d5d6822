//! Meteor Strike entry point
//!
//! Runs a headless session driven by the demo autopilot and prints a JSON
//! summary. A windowed host would replace the autopilot with keyboard
//! snapshots and the frame counter with a real renderer.
//!
//! Usage: `meteor-strike [classic|arcade] [--realtime]`

#[cfg(not(target_arch = "wasm32"))]
use meteor_strike::{
    Settings,
    platform::TickClock,
    render::{Arrow, RenderTarget, Screen, Sprite, render_frame},
    sim::{Autopilot, Control, Rect, Session, SessionPhase},
};

/// Give up after this many seconds of game time
#[cfg(not(target_arch = "wasm32"))]
const MAX_GAME_SECONDS: u64 = 120;

/// Counts frames instead of drawing them
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct FrameCounter {
    frames: u64,
    sprites: u64,
}

#[cfg(not(target_arch = "wasm32"))]
impl RenderTarget for FrameCounter {
    fn draw_sprite(&mut self, _sprite: Sprite, _bounds: Rect, _angle: f64) {
        self.sprites += 1;
    }

    fn draw_arrow(&mut self, _arrow: &Arrow) {}

    fn draw_screen(&mut self, screen: Screen) {
        if let Some(message) = screen.message() {
            log::debug!("{}", message);
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(serde::Serialize)]
struct Summary<'a> {
    variant: &'static str,
    phase: SessionPhase,
    attempts: u32,
    ticks: u64,
    frames: u64,
    projectile: &'a meteor_strike::sim::Projectile,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Meteor Strike (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let realtime = args.iter().any(|a| a == "--realtime");
    let preset = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let settings = Settings::from_preset_name(preset);
    let mut session = Session::new(&settings);
    let mut pilot = Autopilot::new(settings.autopilot_seed);
    let mut clock = TickClock::new(settings.tick_rate);
    let mut counter = FrameCounter::default();

    let max_frames = MAX_GAME_SECONDS * u64::from(settings.tick_rate);
    while counter.frames < max_frames {
        if realtime {
            clock.wait();
        }

        let input = pilot.next_input(&session);
        match session.step(&input) {
            Ok(Control::Continue) => {}
            Ok(Control::Exit) => break,
            Err(e) => {
                log::error!("Simulation failed: {}", e);
                std::process::exit(1);
            }
        }
        render_frame(&session, &mut counter);

        // The demo ends on the win screen instead of waiting for a key
        if session.phase == SessionPhase::Won {
            break;
        }
    }

    log::info!(
        "Finished in {:?} after {} frames ({} sprites drawn)",
        session.phase,
        counter.frames,
        counter.sprites
    );

    let summary = Summary {
        variant: settings.variant.as_str(),
        phase: session.phase,
        attempts: session.attempts,
        ticks: session.ticks,
        frames: counter.frames,
        projectile: &session.projectile,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven by the embedding page
}
