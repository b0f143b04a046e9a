//! Headless launch-range demo
//!
//! Drives the simulation the way a windowed host would, but with a scripted
//! mouse instead of a real one: one cross-range shot that knocks out the two
//! lower targets, then a vertical shot abandoned with the Space key. Run
//! with `RUST_LOG=info` to watch the rounds unfold.
//!
//! An optional first argument names a TOML or RON config file; without it
//! the built-in scene is used.

use bee_sim::prelude::*;
use std::env;
use std::process;

/// Fixed simulation step, matching a 60 Hz host
const DT: f32 = 1.0 / 60.0;

/// Hard cap per round so a bad config cannot spin forever
const MAX_TICKS: u32 = 3600;

fn main() {
    bee_sim::foundation::logging::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            match SimConfig::load_from_file(&path) {
                Ok(config) => config,
                Err(error) => {
                    log::error!("Failed to load {path}: {error}");
                    process::exit(1);
                }
            }
        }
        None => SimConfig::default(),
    };

    let mut app = match RangeApp::new(config) {
        Ok(app) => app,
        Err(error) => {
            log::error!("Failed to create session: {error}");
            process::exit(1);
        }
    };

    app.run();
}

/// The demo application: a session plus the scripted input that drives it
struct RangeApp {
    session: Session,
    viewport: Viewport,
    timer: Timer,
}

impl RangeApp {
    fn new(config: SimConfig) -> Result<Self, SimError> {
        let session = Session::new(config)?;
        log::info!(
            "Range ready: {} targets, projectile at ({:.1}, {:.1}, {:.1})",
            session.targets().len(),
            session.projectile().start_position().x,
            session.projectile().start_position().y,
            session.projectile().start_position().z,
        );

        Ok(Self {
            session,
            viewport: Viewport::new(800, 600),
            timer: Timer::new(),
        })
    }

    fn run(&mut self) {
        // Round one: a flat cross-range drag. One full NDC unit to the
        // right and a third of a unit up launches at (30, 10, 0).
        self.play_round((200.0, 420.0), (600.0, 320.0));

        // Round two: straight up, then bail out with Space mid-flight.
        self.session.pointer_down(
            MouseButton::Left,
            self.viewport.to_ndc(400.0, 500.0),
        );
        self.session.pointer_moved(self.viewport.to_ndc(400.0, 200.0));
        self.session.pointer_up(MouseButton::Left);

        for _ in 0..30 {
            self.step();
        }
        log::info!("Abandoning the vertical shot");
        self.session.key_down(KeyCode::Space);

        log::info!(
            "Done: {} frames simulated in {:.2}s of wall time",
            self.timer.frame_count(),
            self.timer.total_time(),
        );
    }

    /// Press at `from`, drag to `to`, release, and step until the round
    /// resets itself.
    fn play_round(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.session
            .pointer_down(MouseButton::Left, self.viewport.to_ndc(from.0, from.1));
        self.session.pointer_moved(self.viewport.to_ndc(to.0, to.1));
        self.session.pointer_up(MouseButton::Left);

        for tick in 0..MAX_TICKS {
            self.step();
            if self.session.phase() == RoundPhase::Idle {
                log::info!(
                    "Round over after {tick} ticks ({:.2}s of flight)",
                    tick as f32 * DT
                );
                return;
            }
        }
        log::warn!("Round hit the {MAX_TICKS}-tick cap without landing");
    }

    fn step(&mut self) {
        self.timer.update();

        let standing_before = self.standing_targets();
        let frame = self.session.tick(DT);
        let standing_after = frame.target_visible.iter().filter(|v| **v).count();

        if standing_after < standing_before {
            let position = self.session.projectile().position();
            log::info!(
                "Hit! {} of {} targets still standing at ({:.1}, {:.1}, {:.1})",
                standing_after,
                frame.target_visible.len(),
                position.x,
                position.y,
                position.z,
            );
        }
    }

    fn standing_targets(&self) -> usize {
        self.session
            .targets()
            .iter()
            .filter(|target| target.is_active())
            .count()
    }
}
