//! Collision detection for the target boxes
//!
//! The projectile is a sphere and the targets are axis-aligned boxes. The
//! overlap test grows the box bounds outward by the sphere radius on every
//! axis and checks the sphere center for containment. This is deliberately
//! the conservative expanded-box approximation, not an exact closest-point
//! distance test: near box corners it reports hits for centers slightly
//! farther away than the radius.

use crate::error::SimError;
use crate::foundation::math::Vec3;

/// An axis-aligned bounding box stored as center and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Box center in world space
    pub center: Vec3,

    /// Half the box size per axis
    pub half_extents: Vec3,
}

impl Aabb {
    /// Create an AABB from its center and full size per axis
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            half_extents: size / 2.0,
        }
    }

    /// Minimum corner of the box
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner of the box
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// Test a sphere against an AABB using the expanded-box approximation
///
/// Each axis interval of the box is widened by `radius` at both ends and the
/// sphere center is tested for containment in all three widened intervals.
/// Bounds are closed: a center exactly on an expanded face counts as a hit.
pub fn sphere_intersects_box(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    let min = aabb.min();
    let max = aabb.max();

    center.x >= min.x - radius
        && center.x <= max.x + radius
        && center.y >= min.y - radius
        && center.y <= max.y + radius
        && center.z >= min.z - radius
        && center.z <= max.z + radius
}

/// A static target box
///
/// Position and size are immutable after creation; only the `active` flag
/// changes, flipping to false when the projectile hits and back to true on a
/// full round reset.
#[derive(Debug, Clone)]
pub struct Target {
    aabb: Aabb,
    active: bool,
}

impl Target {
    /// Create a target box from its center and full size per axis
    ///
    /// Non-positive extents are a caller contract violation.
    pub fn new(center: Vec3, size: Vec3) -> Result<Self, SimError> {
        if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) {
            return Err(SimError::InvalidTargetSize(size.x, size.y, size.z));
        }

        Ok(Self {
            aabb: Aabb::from_center_size(center, size),
            active: true,
        })
    }

    /// The target's bounds
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Whether the target is still standing (visible to the renderer)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Knock the target out; it stays inactive until `reactivate`
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Restore the target on round reset
    pub fn reactivate(&mut self) {
        self.active = true;
    }
}
