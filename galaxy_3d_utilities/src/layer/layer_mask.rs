/// LayerMask — a set of layers packed into a `u32`.
///
/// Layer indices outside [0, 31] are validated rather than shifted:
/// `contains` reports them as non-members and the mutators reject them
/// with `Error::LayerOutOfRange`, leaving the mask untouched.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use bytemuck::{Pod, Zeroable};
use crate::error::{Error, Result};

/// Number of layers a mask can hold
pub const MAX_LAYERS: u32 = 32;

/// An object with an assigned layer (e.g. a host scene object).
pub trait Layered {
    fn layer(&self) -> u32;
}

/// 32-bit layer set. Bit `i` set means layer `i` is a member.
///
/// `#[repr(transparent)]` + `Pod`, so masks can be written straight into
/// GPU buffers alongside other per-instance data.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Empty mask
    pub const NONE: LayerMask = LayerMask(0);
    /// Every layer
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Build a mask containing exactly `layers`.
    pub fn from_layers(layers: &[u32]) -> Result<Self> {
        let mut mask = Self::NONE;
        mask.fill(layers)?;
        Ok(mask)
    }

    fn bit(layer: u32) -> Result<u32> {
        if layer < MAX_LAYERS {
            Ok(1 << layer)
        } else {
            Err(Error::LayerOutOfRange(layer))
        }
    }

    /// `true` if `layer` is a member. Out-of-range layers never are.
    pub fn contains(&self, layer: u32) -> bool {
        match Self::bit(layer) {
            Ok(bit) => self.0 & bit != 0,
            Err(_) => false,
        }
    }

    /// `true` if the object's assigned layer is a member.
    pub fn contains_object<T: Layered + ?Sized>(&self, object: &T) -> bool {
        self.contains(object.layer())
    }

    /// All member layers in ascending order.
    pub fn layers(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// Member layers in ascending order, lazily.
    pub fn iter(&self) -> LayerMaskIter {
        LayerMaskIter { remaining: self.0 }
    }

    /// Reset the mask to exactly `layers`. Duplicates are harmless.
    ///
    /// All indices are validated before the mask is touched.
    pub fn fill(&mut self, layers: &[u32]) -> Result<()> {
        let mut bits = 0;
        for &layer in layers {
            bits |= Self::bit(layer)?;
        }
        self.0 = bits;
        Ok(())
    }

    /// Set `layer`, leaving all other layers unchanged.
    pub fn add_layer(&mut self, layer: u32) -> Result<()> {
        self.0 |= Self::bit(layer)?;
        Ok(())
    }

    /// Clear `layer`, leaving all other layers unchanged.
    pub fn remove_layer(&mut self, layer: u32) -> Result<()> {
        self.0 &= !Self::bit(layer)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of member layers
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Ascending iterator over the layers of a mask.
#[derive(Debug, Clone)]
pub struct LayerMaskIter {
    remaining: u32,
}

impl Iterator for LayerMaskIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let layer = self.remaining.trailing_zeros();
        // Clear lowest set bit
        self.remaining &= self.remaining - 1;
        Some(layer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LayerMaskIter {}

impl IntoIterator for LayerMask {
    type Item = u32;
    type IntoIter = LayerMaskIter;

    fn into_iter(self) -> LayerMaskIter {
        self.iter()
    }
}

impl From<u32> for LayerMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<LayerMask> for u32 {
    fn from(mask: LayerMask) -> Self {
        mask.0
    }
}

// ===== BITWISE OPERATORS =====

impl BitOr for LayerMask {
    type Output = LayerMask;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayerMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LayerMask {
    type Output = LayerMask;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for LayerMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitXor for LayerMask {
    type Output = LayerMask;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for LayerMask {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for LayerMask {
    type Output = LayerMask;
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// ===== FORMATTING =====

/// `LayerMask(3, 5)`
impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerMask(")?;
        for (i, layer) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerMask({:#034b})", self.0)
    }
}

#[cfg(test)]
#[path = "layer_mask_tests.rs"]
mod tests;
