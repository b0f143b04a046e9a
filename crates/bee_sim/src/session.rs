//! Round/session state machine
//!
//! One play cycle runs Idle -> Aiming -> Flying -> Idle: a left press starts
//! a fresh round and anchors the drag, moves stretch the aim vector, release
//! launches the projectile, and the round ends when the projectile drops
//! below the ground plane or the player resets explicitly.
//!
//! The session is single-threaded and cooperative: the host calls `tick`
//! once per frame and delivers input strictly between ticks.

use crate::collision::{sphere_intersects_box, Target};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::input::{KeyCode, MouseButton};
use crate::projectile::Projectile;
use log::{debug, info};

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No launch in progress; projectile at rest at the start position
    Idle,

    /// Drag in progress; the aim vector tracks the pointer
    Aiming,

    /// Projectile in ballistic flight
    Flying,
}

/// Everything the host renderer needs to draw one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Parent-relative transform of the projectile
    pub projectile_transform: Mat4,

    /// Current aim-indicator vector (zero outside a drag)
    pub aim_vector: Vec3,

    /// Whether the aim indicator should be drawn
    pub aim_visible: bool,

    /// Visibility flag per target, in creation order
    pub target_visible: Vec<bool>,
}

/// The interactive launch session
///
/// Owns the projectile and the targets, maps pointer input to launches, and
/// steps the simulation once per host frame.
pub struct Session {
    gravity: Vec3,
    aim_scale: f32,
    launch_multiplier: f32,
    rest_heading: Vec3,
    projectile: Projectile,
    targets: Vec<Target>,
    phase: RoundPhase,
    drag_start: Vec2,
    aim: Vec3,
}

impl Session {
    /// Build a session from a validated configuration
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let rest_heading = Vec3::from(config.projectile.default_heading);
        let projectile = Projectile::new(
            Vec3::from(config.projectile.start_position),
            config.projectile.size,
            rest_heading,
        )?;

        let target_size = Vec3::from(config.targets.size);
        let targets = config
            .targets
            .positions
            .iter()
            .map(|position| Target::new(Vec3::from(*position), target_size))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            gravity: Vec3::from(config.gravity),
            aim_scale: config.aim_scale,
            launch_multiplier: config.launch_multiplier,
            rest_heading,
            projectile,
            targets,
            phase: RoundPhase::Idle,
            drag_start: Vec2::zeros(),
            aim: Vec3::zeros(),
        })
    }

    /// Current round phase
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The projectile body
    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    /// The target boxes, in creation order
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Current aim vector (zero outside a drag)
    pub fn aim_vector(&self) -> Vec3 {
        self.aim
    }

    /// Left press: start a fresh round and anchor the drag
    pub fn pointer_down(&mut self, button: MouseButton, ndc: Vec2) {
        if button != MouseButton::Left {
            return;
        }

        self.reset();
        self.drag_start = ndc;
        self.phase = RoundPhase::Aiming;
        debug!("aiming from ndc ({:.3}, {:.3})", ndc.x, ndc.y);
    }

    /// Drag: stretch the aim vector and face the projectile along it
    ///
    /// The drag is embedded in the world XY plane, scaled by the configured
    /// aim scale. The projectile's resting heading follows the aim so it
    /// visibly points where it will fly.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        if self.phase != RoundPhase::Aiming {
            return;
        }

        let drag = ndc - self.drag_start;
        self.aim = Vec3::new(self.aim_scale * drag.x, self.aim_scale * drag.y, 0.0);

        // A drag that returns to its anchor has no direction to face.
        if self.aim != Vec3::zeros() {
            self.projectile.set_default_heading(self.aim);
        }
    }

    /// Release: launch with the stored aim vector
    ///
    /// The release position is ignored; the launch velocity is the last aim
    /// vector times the launch multiplier. A release without any drag leaves
    /// the projectile at rest.
    pub fn pointer_up(&mut self, button: MouseButton) {
        if button != MouseButton::Left || self.phase != RoundPhase::Aiming {
            return;
        }

        let velocity = self.aim * self.launch_multiplier;
        self.projectile.set_velocity(velocity);
        self.projectile.set_default_heading(self.rest_heading);

        if self.projectile.is_at_rest() {
            self.phase = RoundPhase::Idle;
        } else {
            self.phase = RoundPhase::Flying;
            info!(
                "launched with velocity ({:.2}, {:.2}, {:.2})",
                velocity.x, velocity.y, velocity.z
            );
        }
    }

    /// Key press: Space resets the round
    pub fn key_down(&mut self, key: KeyCode) {
        if key == KeyCode::Space {
            self.reset();
        }
    }

    /// Reset the round: projectile back to its start at rest, all targets
    /// restored, aim cleared
    pub fn reset(&mut self) {
        if self.phase != RoundPhase::Idle {
            debug!("round reset");
        }

        self.projectile.reset();
        self.projectile.set_default_heading(self.rest_heading);
        self.aim = Vec3::zeros();
        for target in &mut self.targets {
            target.reactivate();
        }
        self.phase = RoundPhase::Idle;
    }

    /// Advance one simulation step and report what to draw
    ///
    /// The ground check runs before the integration step, then the
    /// projectile sphere is tested against every still-active target. Hits
    /// deactivate targets individually; they come back only with a full
    /// reset.
    pub fn tick(&mut self, dt: f32) -> FrameOutput {
        if self.projectile.position().y < 0.0 {
            info!("projectile hit the ground; round over");
            self.reset();
        }

        self.projectile.step(dt, self.gravity);

        let center = self.projectile.position();
        let radius = self.projectile.size();
        for (index, target) in self.targets.iter_mut().enumerate() {
            if target.is_active() && sphere_intersects_box(center, radius, &target.aabb()) {
                target.deactivate();
                info!(
                    "target {} hit at ({:.2}, {:.2}, {:.2})",
                    index, center.x, center.y, center.z
                );
            }
        }

        FrameOutput {
            projectile_transform: self.projectile.local_transform(),
            aim_vector: self.aim,
            aim_visible: self.phase == RoundPhase::Aiming,
            target_visible: self.targets.iter().map(Target::is_active).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn session() -> Session {
        Session::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_drag_maps_to_aim_and_launch_velocity() {
        let mut session = session();

        session.pointer_down(MouseButton::Left, Vec2::new(0.0, 0.0));
        assert_eq!(session.phase(), RoundPhase::Aiming);

        // Unit drag straight up: aim (0, 10, 0), launch velocity (0, 30, 0)
        session.pointer_moved(Vec2::new(0.0, 1.0));
        assert_relative_eq!(
            session.aim_vector(),
            Vec3::new(0.0, 10.0, 0.0),
            epsilon = EPSILON
        );

        session.pointer_up(MouseButton::Left);
        assert_eq!(session.phase(), RoundPhase::Flying);
        assert_relative_eq!(
            session.projectile().velocity(),
            Vec3::new(0.0, 30.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_projectile_faces_aim_while_dragging() {
        let mut session = session();

        session.pointer_down(MouseButton::Left, Vec2::new(0.0, 0.0));
        session.pointer_moved(Vec2::new(0.3, 0.4));

        // Still at rest, so the heading is the (aim-shaped) default heading
        assert!(session.projectile().is_at_rest());
        assert_relative_eq!(
            session.projectile().heading(),
            Vec3::new(3.0, 4.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_release_restores_rest_heading() {
        let mut session = session();

        session.pointer_down(MouseButton::Left, Vec2::new(0.0, 0.0));
        session.pointer_moved(Vec2::new(0.0, 0.5));
        session.pointer_up(MouseButton::Left);

        assert_relative_eq!(
            session.projectile().default_heading(),
            Vec3::x(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_release_without_drag_stays_idle() {
        let mut session = session();

        session.pointer_down(MouseButton::Left, Vec2::new(0.2, -0.1));
        session.pointer_up(MouseButton::Left);

        assert_eq!(session.phase(), RoundPhase::Idle);
        assert!(session.projectile().is_at_rest());
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        let mut session = session();

        session.pointer_down(MouseButton::Right, Vec2::new(0.0, 0.0));
        assert_eq!(session.phase(), RoundPhase::Idle);

        session.pointer_down(MouseButton::Left, Vec2::new(0.0, 0.0));
        session.pointer_up(MouseButton::Middle);
        assert_eq!(session.phase(), RoundPhase::Aiming);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut session = session();
        let start = session.projectile().start_position();

        session.pointer_down(MouseButton::Left, Vec2::new(0.0, 0.0));
        session.pointer_moved(Vec2::new(0.5, 0.5));
        session.pointer_up(MouseButton::Left);
        session.tick(0.1);

        session.key_down(KeyCode::Space);

        assert_eq!(session.phase(), RoundPhase::Idle);
        assert_eq!(session.projectile().position(), start);
        assert!(session.projectile().is_at_rest());
        assert!(session.targets().iter().all(Target::is_active));
        assert_eq!(session.aim_vector(), Vec3::zeros());
    }

    #[test]
    fn test_aim_indicator_visible_only_while_aiming() {
        let mut session = session();

        let frame = session.tick(1.0 / 60.0);
        assert!(!frame.aim_visible);

        session.pointer_down(MouseButton::Left, Vec2::new(0.0, 0.0));
        session.pointer_moved(Vec2::new(0.1, 0.1));
        let frame = session.tick(1.0 / 60.0);
        assert!(frame.aim_visible);
        assert_relative_eq!(
            frame.aim_vector,
            Vec3::new(1.0, 1.0, 0.0),
            epsilon = EPSILON
        );

        session.pointer_up(MouseButton::Left);
        let frame = session.tick(1.0 / 60.0);
        assert!(!frame.aim_visible);
    }

    #[test]
    fn test_idle_tick_leaves_scene_untouched() {
        let mut session = session();
        let start = session.projectile().start_position();

        for _ in 0..10 {
            let frame = session.tick(1.0 / 60.0);
            assert!(frame.target_visible.iter().all(|v| *v));
        }

        assert_eq!(session.projectile().position(), start);
        assert!(session.projectile().is_at_rest());
    }
}
