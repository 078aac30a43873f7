//! Camera module — viewport projection, bounds, and visibility checks.
//!
//! The camera is a passive data container owned by the caller. Visibility
//! checks are pure functions over any `ViewportProjector`, so a host
//! renderer's camera can be plugged in without going through `Camera`.

mod bounds;
mod camera;
mod visibility;

pub use bounds::{Bounds, BoundsProvider};
pub use camera::{Camera, ViewportProjector};
pub use visibility::{is_point_visible, is_bounds_visible, is_object_visible};
