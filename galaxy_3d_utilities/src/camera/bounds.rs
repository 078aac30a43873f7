/// Axis-aligned bounding volumes used by the visibility checks.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with full extents `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// All 8 corners: every min/max combination per axis.
    ///
    /// Order: x-major, then y, then z (min before max on each axis).
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            min,
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            max,
        ]
    }

    /// Transform local-space bounds by a matrix, returning world-space bounds.
    ///
    /// Arvo method: projects each matrix axis onto the extents for a tight
    /// result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> Bounds {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Bounds { min: new_min, max: new_max }
    }
}

/// Anything the host scene can report world-space bounds for
/// (mesh renderer, skinned mesh renderer, collider, ...).
pub trait BoundsProvider {
    fn world_bounds(&self) -> Bounds;
}

impl BoundsProvider for Bounds {
    fn world_bounds(&self) -> Bounds {
        *self
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
