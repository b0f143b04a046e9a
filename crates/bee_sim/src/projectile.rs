//! The ballistic projectile body
//!
//! Holds position, velocity, a default facing direction, and a uniform
//! scale/collision radius. Each simulation step applies gravity to the
//! velocity, integrates the position, and derives a fresh parent-relative
//! transform from a look-at construction.

use crate::error::SimError;
use crate::foundation::math::{heading_rotation, world_up, Mat4, Transform, Vec3};

/// The ballistic projectile
///
/// The body owns its state exclusively: reads return copies and all mutation
/// goes through explicit setters, so internal vectors are never aliased to
/// callers.
#[derive(Debug, Clone)]
pub struct Projectile {
    position: Vec3,
    velocity: Vec3,
    default_heading: Vec3,
    size: f32,
    start_position: Vec3,
}

impl Projectile {
    /// Create a projectile at rest at `start_position`
    ///
    /// `size` is both the collision radius and the uniform render scale; a
    /// non-positive or non-finite value is a caller contract violation.
    /// `default_heading` is the facing used while at rest and must be
    /// non-zero.
    pub fn new(start_position: Vec3, size: f32, default_heading: Vec3) -> Result<Self, SimError> {
        if !(size > 0.0 && size.is_finite()) {
            return Err(SimError::InvalidProjectileSize(size));
        }
        if default_heading == Vec3::zeros() {
            return Err(SimError::ZeroDefaultHeading);
        }

        Ok(Self {
            position: start_position,
            velocity: Vec3::zeros(),
            default_heading,
            size,
            start_position,
        })
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Facing direction used while the velocity is exactly zero
    pub fn default_heading(&self) -> Vec3 {
        self.default_heading
    }

    /// Collision radius and uniform scale
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The resting position the projectile resets to
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    /// Set the velocity (launching happens by setting a non-zero velocity)
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Set the at-rest facing direction
    pub fn set_default_heading(&mut self, heading: Vec3) {
        self.default_heading = heading;
    }

    /// Whether the projectile is in the unlaunched/resting state
    ///
    /// Exact-zero velocity is the sentinel for "not yet launched". Any
    /// non-zero velocity, however small, switches the body into ballistic
    /// mode; there is deliberately no epsilon threshold.
    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec3::zeros()
    }

    /// Advance the body by `dt` seconds under `gravity`
    ///
    /// At rest the motion is frozen entirely. Otherwise the step is
    /// semi-implicit Euler: gravity folds into the velocity first and the
    /// updated velocity moves the position. No clamping, no terminal
    /// velocity, no collision response.
    pub fn step(&mut self, dt: f32, gravity: Vec3) {
        if self.is_at_rest() {
            return;
        }

        self.velocity += gravity * dt;
        self.position += self.velocity * dt;
    }

    /// Current facing: the normalized velocity in flight, the default
    /// heading at rest
    pub fn heading(&self) -> Vec3 {
        if self.is_at_rest() {
            self.default_heading
        } else {
            self.velocity.normalize()
        }
    }

    /// The parent-relative transform for the renderer
    ///
    /// Translate(position) * look-at rotation toward `heading()` * uniform
    /// Scale(size). Recomputed from state every call, never updated
    /// incrementally.
    pub fn local_transform(&self) -> Mat4 {
        let rotation = heading_rotation(self.heading(), world_up());
        let scale = Vec3::new(self.size, self.size, self.size);
        Transform::new(self.position, rotation, scale).to_matrix()
    }

    /// Return to the start position, at rest
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.velocity = Vec3::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn gravity() -> Vec3 {
        Vec3::new(0.0, -10.0, 0.0)
    }

    fn launched() -> Projectile {
        let mut projectile =
            Projectile::new(Vec3::new(-30.0, 5.0, -35.0), 1.0, Vec3::x()).unwrap();
        projectile.set_velocity(Vec3::new(1.0, 2.0, 3.0));
        projectile
    }

    #[test]
    fn test_step_is_semi_implicit_euler() {
        let mut projectile = launched();
        let dt = 0.1;

        projectile.step(dt, gravity());

        // Velocity updates first, then the *new* velocity moves the position.
        let expected_velocity = Vec3::new(1.0, 1.0, 3.0);
        let expected_position = Vec3::new(-30.0, 5.0, -35.0) + expected_velocity * dt;
        assert_relative_eq!(projectile.velocity(), expected_velocity, epsilon = EPSILON);
        assert_relative_eq!(projectile.position(), expected_position, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_velocity_freezes_motion() {
        let start = Vec3::new(-30.0, 5.0, -35.0);
        let mut projectile = Projectile::new(start, 1.0, Vec3::x()).unwrap();

        projectile.step(0.5, gravity());

        assert_eq!(projectile.position(), start);
        assert_eq!(projectile.velocity(), Vec3::zeros());
        assert_eq!(projectile.heading(), Vec3::x());
    }

    #[test]
    fn test_any_nonzero_velocity_enters_ballistic_mode() {
        let mut projectile = launched();
        projectile.set_velocity(Vec3::new(0.0, 1e-20, 0.0));

        assert!(!projectile.is_at_rest());
        projectile.step(0.1, gravity());
        assert!(projectile.velocity().y < 0.0);
    }

    #[test]
    fn test_heading_follows_velocity_in_flight() {
        let projectile = launched();
        let heading = projectile.heading();

        assert_relative_eq!(heading.magnitude(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(
            heading,
            Vec3::new(1.0, 2.0, 3.0).normalize(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_local_transform_translation_and_scale() {
        let mut projectile =
            Projectile::new(Vec3::new(2.0, 3.0, 4.0), 0.5, Vec3::x()).unwrap();
        projectile.set_velocity(Vec3::new(0.0, 0.0, -7.0));

        let matrix = projectile.local_transform();

        // Translation column carries the position
        assert_relative_eq!(matrix.m14, 2.0, epsilon = EPSILON);
        assert_relative_eq!(matrix.m24, 3.0, epsilon = EPSILON);
        assert_relative_eq!(matrix.m34, 4.0, epsilon = EPSILON);

        // Each rotated basis column keeps the uniform scale
        let x_column = Vec3::new(matrix.m11, matrix.m21, matrix.m31);
        assert_relative_eq!(x_column.magnitude(), 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_reset_returns_to_start_at_rest() {
        let mut projectile = launched();
        projectile.step(0.3, gravity());

        projectile.reset();

        assert_eq!(projectile.position(), projectile.start_position());
        assert!(projectile.is_at_rest());
    }

    #[test]
    fn test_rejects_non_positive_size() {
        for size in [0.0, -1.0, f32::NAN] {
            let result = Projectile::new(Vec3::zeros(), size, Vec3::x());
            assert!(matches!(result, Err(SimError::InvalidProjectileSize(_))));
        }
    }

    #[test]
    fn test_rejects_zero_default_heading() {
        let result = Projectile::new(Vec3::zeros(), 1.0, Vec3::zeros());
        assert!(matches!(result, Err(SimError::ZeroDefaultHeading)));
    }
}
