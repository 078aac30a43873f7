/// Host asset database capability and the value types shared by the asset
/// operations.

use std::fmt;
use crate::error::Result;

/// Opaque handle to a host object (asset or in-memory object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host asset pipeline.
///
/// Paths are forward-slash separated and rooted at the project folder
/// (e.g. `Assets/Prefabs/Crate.prefab`).
pub trait AssetDatabase {
    /// `true` if `path` names an existing folder.
    fn is_valid_folder(&self, path: &str) -> bool;

    /// Asset stored at `path`, if any.
    fn asset_at_path(&self, path: &str) -> Option<AssetId>;

    /// Path of a persisted asset; `None` for objects not in the database.
    fn asset_path(&self, asset: AssetId) -> Option<String>;

    /// `true` if `asset` is persisted in the database.
    fn contains(&self, asset: AssetId) -> bool {
        self.asset_path(asset).is_some()
    }

    /// Persist `asset` at `path`.
    fn create_asset(&mut self, asset: AssetId, path: &str) -> Result<()>;

    /// Delete the asset at `path`. Returns `false` if nothing was there.
    fn delete_asset(&mut self, path: &str) -> Result<bool>;

    /// A free path derived from `path` (`path` itself when free).
    fn generate_unique_asset_path(&self, path: &str) -> String;

    /// Copy an object into a new, non-persisted object.
    fn instantiate(&mut self, original: AssetId) -> Result<AssetId>;

    /// Flush pending asset writes.
    fn save_assets(&mut self) -> Result<()>;

    /// Re-import changed files.
    fn refresh(&mut self) -> Result<()>;
}

/// Options for `save_asset` and `save_variant`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Replace an asset already stored at the target path
    pub overwrite: bool,
}

impl SaveOptions {
    pub fn overwrite() -> Self {
        Self { overwrite: true }
    }
}

/// What a save request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to a free path
    Created,
    /// Replaced the asset previously stored at the path
    Overwritten,
    /// Skipped: the parent folder does not exist
    InvalidFolder,
    /// Skipped: an asset exists at the path and overwrite was off
    AlreadyExists,
    /// Skipped: the source object is not a persisted asset
    NotAnAsset,
    /// Skipped: the object to save is already persisted at another path
    AlreadyPersisted,
}

impl SaveOutcome {
    /// `true` if the asset was written.
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Created | SaveOutcome::Overwritten)
    }
}
