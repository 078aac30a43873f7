/// In-memory asset database.
///
/// Mirrors the host pipeline's observable behavior closely enough to drive
/// the asset and prefab operations without an editor: folders, a path
/// index, object names derived from file names, unique-path generation and
/// transform rotation.

use glam::{EulerRot, Quat, Vec3};
use rustc_hash::{FxHashMap, FxHashSet};
use crate::error::{Error, Result};
use crate::{toolkit_bail, toolkit_trace};
use super::asset_database::{AssetDatabase, AssetId};
use super::prefab::PrefabDatabase;

const SOURCE: &str = "galaxy3d::MemoryAssetDatabase";

/// Root folder present in every database
pub const ROOT_FOLDER: &str = "Assets";

/// An object held by `MemoryAssetDatabase`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryObject {
    pub name: String,
    /// Root transform rotation
    pub rotation: Quat,
    /// Asset path, `None` while not persisted
    pub path: Option<String>,
}

impl MemoryObject {
    /// Root rotation as Euler angles in degrees (x, y, z).
    pub fn euler_degrees(&self) -> Vec3 {
        let (y, x, z) = self.rotation.to_euler(EulerRot::YXZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

pub struct MemoryAssetDatabase {
    folders: FxHashSet<String>,
    objects: FxHashMap<AssetId, MemoryObject>,
    paths: FxHashMap<String, AssetId>,
    next_id: u64,
    save_count: u32,
    refresh_count: u32,
}

fn parent_folder(path: &str) -> Option<&str> {
    path.rfind('/').map(|index| &path[..index])
}

/// `Assets/Props/Crate.prefab` → `Crate`
fn file_stem(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(index) if index > 0 => &file[..index],
        _ => file,
    }
}

impl MemoryAssetDatabase {
    /// Create a database containing only the `Assets` folder
    pub fn new() -> Self {
        let mut folders = FxHashSet::default();
        folders.insert(ROOT_FOLDER.to_string());
        Self {
            folders,
            objects: FxHashMap::default(),
            paths: FxHashMap::default(),
            next_id: 1,
            save_count: 0,
            refresh_count: 0,
        }
    }

    /// Register a folder and all of its parents
    pub fn add_folder(&mut self, path: &str) {
        let mut current = path.trim_end_matches('/');
        while !current.is_empty() {
            self.folders.insert(current.to_string());
            match parent_folder(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    /// Create a new, non-persisted object
    pub fn create_object(&mut self, name: &str) -> AssetId {
        self.insert_object(MemoryObject {
            name: name.to_string(),
            rotation: Quat::IDENTITY,
            path: None,
        })
    }

    pub fn object(&self, id: AssetId) -> Option<&MemoryObject> {
        self.objects.get(&id)
    }

    /// Number of `save_assets` calls so far
    pub fn save_count(&self) -> u32 {
        self.save_count
    }

    /// Number of `refresh` calls so far
    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    /// Number of persisted assets
    pub fn asset_count(&self) -> usize {
        self.paths.len()
    }

    fn insert_object(&mut self, object: MemoryObject) -> AssetId {
        let id = AssetId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    fn require_folder(&self, path: &str) -> Result<()> {
        match parent_folder(path) {
            Some(folder) if self.folders.contains(folder) => Ok(()),
            _ => toolkit_bail!(SOURCE, kind = Error::InvalidPath,
                "No folder for '{}'", path),
        }
    }

    fn remove_asset(&mut self, path: &str) -> bool {
        match self.paths.remove(path) {
            Some(id) => {
                self.objects.remove(&id);
                true
            }
            None => false,
        }
    }
}

impl Default for MemoryAssetDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetDatabase for MemoryAssetDatabase {
    fn is_valid_folder(&self, path: &str) -> bool {
        self.folders.contains(path)
    }

    fn asset_at_path(&self, path: &str) -> Option<AssetId> {
        self.paths.get(path).copied()
    }

    fn asset_path(&self, asset: AssetId) -> Option<String> {
        self.objects.get(&asset).and_then(|object| object.path.clone())
    }

    fn create_asset(&mut self, asset: AssetId, path: &str) -> Result<()> {
        self.require_folder(path)?;
        if self.paths.contains_key(path) {
            toolkit_bail!(SOURCE, kind = Error::AssetAlreadyExists, "{}", path);
        }
        let Some(object) = self.objects.get_mut(&asset) else {
            toolkit_bail!(SOURCE, kind = Error::AssetNotFound, "object {}", asset);
        };
        if let Some(existing) = &object.path {
            toolkit_bail!(SOURCE, kind = Error::AssetAlreadyExists,
                "object {} is already stored at '{}'", asset, existing);
        }

        object.name = file_stem(path).to_string();
        object.path = Some(path.to_string());
        self.paths.insert(path.to_string(), asset);
        toolkit_trace!(SOURCE, "Created {} at '{}'", asset, path);
        Ok(())
    }

    fn delete_asset(&mut self, path: &str) -> Result<bool> {
        Ok(self.remove_asset(path))
    }

    fn generate_unique_asset_path(&self, path: &str) -> String {
        if !self.paths.contains_key(path) {
            return path.to_string();
        }

        let file_start = path.rfind('/').map_or(0, |index| index + 1);
        let (base, extension) = match path[file_start..].rfind('.') {
            Some(dot) if dot > 0 => path.split_at(file_start + dot),
            _ => (path, ""),
        };

        (1u32..)
            .map(|n| format!("{} {}{}", base, n, extension))
            .find(|candidate| !self.paths.contains_key(candidate))
            .unwrap_or_else(|| path.to_string())
    }

    fn instantiate(&mut self, original: AssetId) -> Result<AssetId> {
        let Some(source) = self.objects.get(&original) else {
            toolkit_bail!(SOURCE, kind = Error::AssetNotFound, "object {}", original);
        };
        let copy = MemoryObject {
            name: format!("{}(Clone)", source.name),
            rotation: source.rotation,
            path: None,
        };
        Ok(self.insert_object(copy))
    }

    fn save_assets(&mut self) -> Result<()> {
        self.save_count += 1;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refresh_count += 1;
        Ok(())
    }
}

impl PrefabDatabase for MemoryAssetDatabase {
    fn save_as_prefab_asset(&mut self, object: AssetId, path: &str) -> Result<AssetId> {
        self.require_folder(path)?;
        let Some(source) = self.objects.get(&object) else {
            toolkit_bail!(SOURCE, kind = Error::AssetNotFound, "object {}", object);
        };
        let rotation = source.rotation;

        self.remove_asset(path);
        let prefab = self.insert_object(MemoryObject {
            name: file_stem(path).to_string(),
            rotation,
            path: Some(path.to_string()),
        });
        self.paths.insert(path.to_string(), prefab);
        toolkit_trace!(SOURCE, "Saved prefab {} at '{}'", prefab, path);
        Ok(prefab)
    }

    fn rotate(&mut self, object: AssetId, euler_degrees: Vec3) -> Result<()> {
        let Some(target) = self.objects.get_mut(&object) else {
            toolkit_bail!(SOURCE, kind = Error::AssetNotFound, "object {}", object);
        };
        let delta = Quat::from_euler(
            EulerRot::YXZ,
            euler_degrees.y.to_radians(),
            euler_degrees.x.to_radians(),
            euler_degrees.z.to_radians(),
        );
        target.rotation = target.rotation * delta;
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_asset_database_tests.rs"]
mod tests;
