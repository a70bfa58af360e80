//! Physics types
//!
//! Math types re-exported from glam plus the collision layer mask used by
//! ground queries.

pub use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Bitmask selecting which collision layers a query may hit.
///
/// Layer `n` is bit `n` (0..32). A collider on layer `n` is eligible for a
/// query when the query mask contains bit `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only `layer`. Layers above 31 yield an empty mask.
    pub const fn layer(layer: u32) -> Self {
        if layer < 32 {
            LayerMask(1 << layer)
        } else {
            LayerMask::NONE
        }
    }

    /// Whether a collider on `layer` passes this mask.
    #[inline]
    pub fn contains(&self, layer: u32) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// Combine two masks.
    pub const fn union(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::layer(0)
    }
}
