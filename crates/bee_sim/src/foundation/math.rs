//! Math utilities and types
//!
//! Provides the fundamental math types for the simulation. All coordinates
//! are Y-up right-handed; the canonical facing axis of a body is -Z, the
//! usual look-at convention.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector2, Vector3};

use nalgebra::Rotation3;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and uniform or per-axis scale
///
/// Derived data: the simulation recomputes a body's transform from its state
/// every step rather than mutating it incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform from position, rotation, and scale
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (Translate * Rotate * Scale)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: nalgebra::Point3<f32>) -> nalgebra::Point3<f32> {
        self.to_matrix().transform_point(&point)
    }

    /// Apply this transform to a vector (ignores translation)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.to_matrix().transform_vector(&vector)
    }
}

/// The fixed world up direction, +Y
pub fn world_up() -> Vec3 {
    Vec3::y()
}

/// Rotation orienting the canonical -Z facing axis along `heading`
///
/// Builds a look-at basis anchored at the origin: the body's -Z axis points
/// along `heading` and its +Y axis stays as close to `up` as the heading
/// allows. When `heading` is (anti)parallel to `up` the basis would collapse;
/// we substitute the world Z axis as the secondary direction so the rotation
/// is always well formed.
///
/// # Panics
///
/// Panics in debug builds if `heading` is the zero vector; callers hold a
/// non-zero heading at all times (a resting projectile faces its default
/// heading, which configuration validation keeps non-zero).
pub fn heading_rotation(heading: Vec3, up: Vec3) -> Quat {
    debug_assert!(heading.magnitude_squared() > 0.0, "zero heading");

    let forward = heading.normalize();

    // Degenerate secondary axis: heading parallel to up
    let up = if forward.cross(&up).magnitude_squared() < 1e-10 {
        Vec3::z()
    } else {
        up
    };

    let right = forward.cross(&up).normalize();
    let local_up = right.cross(&forward);

    // Basis columns: right, up, back. Back is -forward so that the canonical
    // -Z axis lands on the heading.
    let basis = Mat3::from_columns(&[right, local_up, -forward]);
    Quat::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis))
}
