/// Rotated prefab variants.
///
/// A rotated variant is saved beside the original prefab with the rotation
/// spelled into its name: `Crate.prefab` rotated by (0, 90, 0) becomes
/// `Crate-y90°.prefab`.

use std::fmt::Write;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::{toolkit_bail, toolkit_debug, toolkit_info};
use super::asset_database::{AssetDatabase, AssetId};

const SOURCE: &str = "galaxy3d::PrefabUtilities";

const PREFAB_EXTENSION: &str = ".prefab";

/// Host prefab pipeline, on top of the asset database.
pub trait PrefabDatabase: AssetDatabase {
    /// Save `object` as a prefab asset at `path`, replacing any prefab there.
    /// Returns the saved prefab root.
    fn save_as_prefab_asset(&mut self, object: AssetId, path: &str) -> Result<AssetId>;

    /// Rotate an object's root transform by Euler angles in degrees
    /// (applied in Z, X, Y order, local space).
    fn rotate(&mut self, object: AssetId, euler_degrees: Vec3) -> Result<()>;
}

/// Rotation axis for single-axis variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Euler rotation of `angle` degrees about this axis only; the other
    /// components stay exactly zero.
    pub fn rotation(&self, angle: f32) -> Vec3 {
        let mut rotation = Vec3::ZERO;
        match self {
            Axis::X => rotation.x = angle,
            Axis::Y => rotation.y = angle,
            Axis::Z => rotation.z = angle,
        }
        rotation
    }
}

/// `x10°y20°z30°`; zero components are omitted.
pub fn rotation_label(rotation: Vec3) -> String {
    let mut label = String::new();
    for (name, angle) in [('x', rotation.x), ('y', rotation.y), ('z', rotation.z)] {
        if angle != 0.0 {
            // Writing into a String cannot fail
            let _ = write!(label, "{}{}°", name, angle);
        }
    }
    label
}

/// Save a copy of `original` rotated by `rotation` (degrees) as
/// `<original>-<label>.prefab` and return it.
///
/// Returns `original` unchanged for a zero rotation or when `original` is
/// not a persisted asset.
pub fn create_rotated_prefab<D: PrefabDatabase + ?Sized>(
    db: &mut D,
    original: AssetId,
    rotation: Vec3,
) -> Result<AssetId> {
    if rotation == Vec3::ZERO {
        return Ok(original);
    }
    let Some(original_path) = db.asset_path(original) else {
        toolkit_debug!(SOURCE, "{} is not an asset, nothing to rotate", original);
        return Ok(original);
    };

    let Some(stem) = original_path.strip_suffix(PREFAB_EXTENSION) else {
        toolkit_bail!(SOURCE, kind = Error::InvalidPath,
            "'{}' is not a prefab", original_path);
    };
    let prefab_path = format!("{}-{}{}", stem, rotation_label(rotation), PREFAB_EXTENSION);

    let prefab = db.save_as_prefab_asset(original, &prefab_path)?;
    db.rotate(prefab, rotation)?;

    toolkit_info!(SOURCE, "Created rotated prefab '{}'", prefab_path);
    Ok(prefab)
}

/// Single-axis form of `create_rotated_prefab`.
pub fn create_rotated_prefab_about<D: PrefabDatabase + ?Sized>(
    db: &mut D,
    original: AssetId,
    angle: f32,
    axis: Axis,
) -> Result<AssetId> {
    if angle == 0.0 {
        return Ok(original);
    }
    create_rotated_prefab(db, original, axis.rotation(angle))
}

#[cfg(test)]
#[path = "prefab_tests.rs"]
mod tests;
