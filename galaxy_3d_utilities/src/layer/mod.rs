//! Layer module — 32-bit layer membership masks.
//!
//! A layer is an integer in [0, 31] used by the host engine to group objects
//! for collision and rendering filters. `LayerMask` stores one bit per layer.

mod layer_mask;

pub use layer_mask::{LayerMask, LayerMaskIter, Layered, MAX_LAYERS};
