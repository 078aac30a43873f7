/// Visibility checks: is a point or box at least partially inside the
/// camera's view.
///
/// These are pointwise projection tests. A box whose 8 corners all fall
/// outside the view is reported as not visible even if its body crosses it
/// (e.g. a box straddling the camera).

use glam::Vec3;
use super::bounds::{Bounds, BoundsProvider};
use super::camera::ViewportProjector;

/// `true` if `point` projects strictly inside the viewport and in front of
/// the camera.
///
/// Projected x and y must lie in the open interval (0, 1); points exactly on
/// the viewport edge are not visible. Depth must be strictly positive.
pub fn is_point_visible<P: ViewportProjector + ?Sized>(camera: &P, point: Vec3) -> bool {
    let viewport = camera.world_to_viewport(point);
    viewport.x > 0.0 && viewport.x < 1.0
        && viewport.y > 0.0 && viewport.y < 1.0
        && viewport.z > 0.0
}

/// `true` if any of the 8 corners of `bounds` is visible.
pub fn is_bounds_visible<P: ViewportProjector + ?Sized>(camera: &P, bounds: &Bounds) -> bool {
    bounds.corners().into_iter().any(|corner| is_point_visible(camera, corner))
}

/// Visibility of a renderer, collider, or any object exposing world bounds.
pub fn is_object_visible<P, B>(camera: &P, object: &B) -> bool
where
    P: ViewportProjector + ?Sized,
    B: BoundsProvider + ?Sized,
{
    is_bounds_visible(camera, &object.world_bounds())
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
