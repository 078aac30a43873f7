//! Integration tests for asset and prefab operations
//!
//! Drives the public API against MemoryAssetDatabase and checks the log
//! trail. The logger is global, so every test is #[serial].
//!
//! Run with: cargo test --test asset_integration_tests

use galaxy_3d_utilities::galaxy3d::Toolkit;
use galaxy_3d_utilities::galaxy3d::asset::{
    self, AssetDatabase, Axis, MemoryAssetDatabase, SaveOptions, SaveOutcome,
};
use galaxy_3d_utilities::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use galaxy_3d_utilities::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Toolkit::set_logger(Self { entries: entries.clone() });
        entries
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn count(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> usize {
    entries.lock().unwrap().iter().filter(|e| e.severity == severity).count()
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
#[serial]
fn test_asset_workflow() {
    let entries = TestLogger::install();
    let mut db = MemoryAssetDatabase::new();
    db.add_folder("Assets/Items");

    let sword = db.create_object("Sword");
    let outcome = asset::save_asset(&mut db, sword, "Assets/Items/Sword.asset", SaveOptions::default()).unwrap();
    assert_eq!(outcome, SaveOutcome::Created);

    let rusty = db.create_object("RustySword");
    asset::save_variant(&mut db, sword, rusty, "rusty", SaveOptions::default()).unwrap();
    assert_eq!(db.asset_path(rusty).as_deref(), Some("Assets/Items/Sword-rusty.asset"));

    let copy = asset::duplicate_asset(&mut db, sword).unwrap().unwrap();
    assert_eq!(db.asset_path(copy).as_deref(), Some("Assets/Items/Sword 1.asset"));

    assert!(asset::delete_asset(&mut db, sword).unwrap());
    assert!(!db.contains(sword));
    assert_eq!(db.asset_count(), 2);

    // 3 saves + 1 delete
    assert_eq!(count(&entries, LogSeverity::Info), 4);
    assert_eq!(count(&entries, LogSeverity::Warn), 0);

    Toolkit::reset_logger();
}

#[test]
#[serial]
fn test_skipped_saves_are_logged_as_warnings() {
    let entries = TestLogger::install();
    let mut db = MemoryAssetDatabase::new();

    let a = db.create_object("a");
    let b = db.create_object("b");
    asset::save_asset(&mut db, a, "Assets/a.asset", SaveOptions::default()).unwrap();

    assert_eq!(
        asset::save_asset(&mut db, b, "Assets/a.asset", SaveOptions::default()).unwrap(),
        SaveOutcome::AlreadyExists
    );
    assert_eq!(
        asset::save_asset(&mut db, b, "Nowhere/b.asset", SaveOptions::default()).unwrap(),
        SaveOutcome::InvalidFolder
    );
    assert_eq!(asset::duplicate_asset(&mut db, b).unwrap(), None);

    assert_eq!(count(&entries, LogSeverity::Warn), 3);

    Toolkit::reset_logger();
}

#[test]
#[serial]
fn test_invalid_variant_path_is_logged_as_error() {
    let entries = TestLogger::install();
    let mut db = MemoryAssetDatabase::new();
    let prefab_source = db.create_object("Crate");
    let prefab = asset::PrefabDatabase::save_as_prefab_asset(&mut db, prefab_source, "Assets/Crate.prefab").unwrap();
    let variant = db.create_object("variant");

    let result = asset::save_variant(&mut db, prefab, variant, "red", SaveOptions::default());

    assert!(result.is_err());
    let entries_guard = entries.lock().unwrap();
    let error = entries_guard.iter().find(|e| e.severity == LogSeverity::Error).unwrap();
    assert!(error.message.contains("Assets/Crate.prefab"));
    assert!(error.file.is_some());
    drop(entries_guard);

    Toolkit::reset_logger();
}

#[test]
#[serial]
fn test_rotated_prefab_variants() {
    let _entries = TestLogger::install();
    let mut db = MemoryAssetDatabase::new();
    db.add_folder("Assets/Props");
    let source = db.create_object("Fence");
    let fence = asset::PrefabDatabase::save_as_prefab_asset(&mut db, source, "Assets/Props/Fence.prefab").unwrap();

    let quarter = asset::create_rotated_prefab_about(&mut db, fence, 90.0, Axis::Y).unwrap();
    let tilted = asset::create_rotated_prefab(&mut db, fence, Vec3::new(15.0, 0.0, -5.0)).unwrap();

    assert_eq!(db.asset_path(quarter).as_deref(), Some("Assets/Props/Fence-y90°.prefab"));
    assert_eq!(db.asset_path(tilted).as_deref(), Some("Assets/Props/Fence-x15°z-5°.prefab"));
    assert_eq!(db.object(quarter).unwrap().name, "Fence-y90°");
    assert!((db.object(quarter).unwrap().euler_degrees().y - 90.0).abs() < 0.01);

    Toolkit::reset_logger();
}
