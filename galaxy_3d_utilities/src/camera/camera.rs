/// Camera — passive view/projection container and the viewport projection seam.
///
/// The Camera computes nothing on its own except the world-to-viewport
/// mapping. The caller builds a new one whenever the view or projection
/// changes (right-handed view space, camera looking down -Z).

use glam::{Mat4, Vec3};

/// World-to-viewport projection, as provided by a host renderer's camera.
///
/// Returns normalized viewport coordinates: x and y in [0, 1] across the
/// visible area (origin bottom-left), z the distance in front of the camera
/// in world units (negative behind it).
pub trait ViewportProjector {
    fn world_to_viewport(&self, point: Vec3) -> Vec3;
}

/// Low-level camera. A passive data container.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a new camera from view and projection matrices.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

impl ViewportProjector for Camera {
    fn world_to_viewport(&self, point: Vec3) -> Vec3 {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        // Degenerate w is not special-cased; the division yields inf/NaN.
        let ndc = clip.truncate() / clip.w;
        let depth = -self.view_matrix.transform_point3(point).z;

        Vec3::new(ndc.x * 0.5 + 0.5, ndc.y * 0.5 + 0.5, depth)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
