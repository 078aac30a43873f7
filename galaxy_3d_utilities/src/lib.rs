/*!
# Galaxy 3D Utilities

Editor and runtime convenience utilities for the Galaxy3D engine.

Every host engine API (camera projection, scene bounds, object layers, the
asset pipeline) is reached through a trait, so the logic here is testable
without a running engine or editor.

## Modules

- **camera**: `Camera`, `Bounds`, point/box visibility checks
- **layer**: `LayerMask`, a 32-bit layer set
- **asset**: save, variant, duplicate and delete operations over an
  `AssetDatabase`; rotated prefab variants over a `PrefabDatabase`
- **log**: pluggable logger used by all operations
*/

// Internal modules
mod error;
mod toolkit;
pub mod log;
pub mod camera;
pub mod layer;
pub mod asset;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger singleton
    pub use crate::toolkit::Toolkit;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Visibility checks
    pub mod camera {
        pub use crate::camera::*;
    }

    // Layer masks
    pub mod layer {
        pub use crate::layer::*;
    }

    // Asset database operations
    pub mod asset {
        pub use crate::asset::*;
    }
}

// Re-export math library at crate root
pub use glam;
