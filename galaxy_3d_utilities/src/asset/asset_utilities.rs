/// Asset operations over any `AssetDatabase`: save, save variant,
/// duplicate, delete.
///
/// Skipped requests (bad folder, occupied path, non-asset source) are not
/// errors; they are reported through `SaveOutcome` / `Option` / `bool` and
/// logged at WARN. Errors are reserved for malformed paths and host failures.

use crate::error::{Error, Result};
use crate::{toolkit_bail, toolkit_info, toolkit_warn};
use super::asset_database::{AssetDatabase, AssetId, SaveOptions, SaveOutcome};

const SOURCE: &str = "galaxy3d::AssetUtilities";

/// Extension of serialized data assets
const ASSET_EXTENSION: &str = ".asset";

/// Persist `asset` at `path`.
///
/// The parent folder (everything before the last `/`) must exist and
/// `asset` must not already be persisted elsewhere; both are checked before
/// anything at `path` is touched. An asset already at `path` is replaced
/// only with `options.overwrite`. Writes are followed by `save_assets` and
/// `refresh`.
pub fn save_asset<D: AssetDatabase + ?Sized>(
    db: &mut D,
    asset: AssetId,
    path: &str,
    options: SaveOptions,
) -> Result<SaveOutcome> {
    let folder_ok = match path.rfind('/') {
        Some(index) => db.is_valid_folder(&path[..index]),
        None => false,
    };
    if !folder_ok {
        toolkit_warn!(SOURCE, "Not saving {}: '{}' has no valid parent folder", asset, path);
        return Ok(SaveOutcome::InvalidFolder);
    }

    if let Some(existing) = db.asset_path(asset) {
        toolkit_warn!(SOURCE, "Not saving {} to '{}': already stored at '{}'", asset, path, existing);
        return Ok(SaveOutcome::AlreadyPersisted);
    }

    let outcome = if db.asset_at_path(path).is_some() {
        if !options.overwrite {
            toolkit_warn!(SOURCE, "Not saving {}: '{}' already exists", asset, path);
            return Ok(SaveOutcome::AlreadyExists);
        }
        db.delete_asset(path)?;
        SaveOutcome::Overwritten
    } else {
        SaveOutcome::Created
    };

    db.create_asset(asset, path)?;
    db.save_assets()?;
    db.refresh()?;

    toolkit_info!(SOURCE, "Saved {} to '{}' ({:?})", asset, path, outcome);
    Ok(outcome)
}

/// `Assets/original.asset` + `variant` → `Assets/original-variant.asset`
pub fn variant_path(path: &str, suffix: &str, extension: &str) -> Result<String> {
    match path.strip_suffix(extension) {
        Some(stem) => Ok(format!("{}-{}{}", stem, suffix, extension)),
        None => toolkit_bail!(SOURCE, kind = Error::InvalidPath,
            "'{}' does not end in '{}'", path, extension),
    }
}

/// Save `variant` next to `original` as `<original>-<suffix>.asset`.
///
/// Returns `SaveOutcome::NotAnAsset` when `original` is not persisted.
pub fn save_variant<D: AssetDatabase + ?Sized>(
    db: &mut D,
    original: AssetId,
    variant: AssetId,
    suffix: &str,
    options: SaveOptions,
) -> Result<SaveOutcome> {
    let Some(original_path) = db.asset_path(original) else {
        toolkit_warn!(SOURCE, "Not saving variant '{}': {} is not an asset", suffix, original);
        return Ok(SaveOutcome::NotAnAsset);
    };

    let path = variant_path(&original_path, suffix, ASSET_EXTENSION)?;
    save_asset(db, variant, &path, options)
}

/// Copy `original` to a unique path beside it (`Assets/original 1.asset`).
///
/// Returns `None` when `original` is not persisted. The copy is returned even
/// if the host skips saving it; it then stays a loose object.
pub fn duplicate_asset<D: AssetDatabase + ?Sized>(
    db: &mut D,
    original: AssetId,
) -> Result<Option<AssetId>> {
    let Some(path) = db.asset_path(original) else {
        toolkit_warn!(SOURCE, "Not duplicating {}: not an asset", original);
        return Ok(None);
    };

    let new_path = db.generate_unique_asset_path(&path);
    let duplicate = db.instantiate(original)?;
    let outcome = save_asset(db, duplicate, &new_path, SaveOptions::default())?;
    if !outcome.is_saved() {
        toolkit_warn!(SOURCE, "Duplicate {} of {} was not saved ({:?})", duplicate, original, outcome);
    }
    Ok(Some(duplicate))
}

/// Delete a persisted asset. Returns `false` when `asset` is not persisted.
pub fn delete_asset<D: AssetDatabase + ?Sized>(db: &mut D, asset: AssetId) -> Result<bool> {
    let Some(path) = db.asset_path(asset) else {
        return Ok(false);
    };

    db.delete_asset(&path)?;
    db.save_assets()?;
    db.refresh()?;

    toolkit_info!(SOURCE, "Deleted {} at '{}'", asset, path);
    Ok(true)
}

#[cfg(test)]
#[path = "asset_utilities_tests.rs"]
mod tests;
