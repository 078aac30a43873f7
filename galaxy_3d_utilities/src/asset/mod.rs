//! Asset module — asset-database operations and rotated prefab variants.
//!
//! The host asset pipeline is reached only through the `AssetDatabase` and
//! `PrefabDatabase` traits. `MemoryAssetDatabase` implements both in memory
//! for tests and offline tooling.

mod asset_database;
mod asset_utilities;
mod memory_asset_database;
mod prefab;

pub use asset_database::{AssetDatabase, AssetId, SaveOptions, SaveOutcome};
pub use asset_utilities::{
    save_asset, save_variant, duplicate_asset, delete_asset, variant_path,
};
pub use memory_asset_database::{MemoryAssetDatabase, MemoryObject, ROOT_FOLDER};
pub use prefab::{
    Axis, PrefabDatabase,
    create_rotated_prefab, create_rotated_prefab_about, rotation_label,
};
