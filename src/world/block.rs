//! # Block Kinds
//!
//! This module defines the closed set of block/tile kinds shared by both game
//! variants, along with their static attributes (display tint, hardness,
//! transparency) and the compact integer representation used by the voxel
//! save format.

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::item::ItemKind;

/// The underlying integer type used to represent block kinds in the voxel
/// save format (the `t` field of a block record).
pub type BlockKindSize = u8;

/// Enumerates every block/tile kind in both prototypes.
///
/// The set is fixed at compile time. The `FromPrimitive` derive allows
/// conversion from the integers stored in voxel save records; the serde
/// derives produce the lowercase strings stored in the tile save grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Empty space. Never stored in a voxel world; the tile grid stores it
    /// explicitly because the grid is dense.
    Air,

    /// Surface block. Mining it drops a grass item; tilling turns it to soil.
    Grass,

    /// Common filler block beneath the surface.
    Dirt,

    /// Deep-layer block, also the out-of-bounds sentinel for the tile world.
    Stone,

    /// Tree trunks and canopies.
    Wood,

    /// Transparent building block (voxel variant only). Does not block
    /// movement or ground probes.
    Glass,

    /// Farmland produced by the till action (tile variant only). Mines as
    /// dirt when no crop occupies it.
    Tilled,
}

/// Static, immutable attributes of a block kind.
///
/// `hardness` is flavor only; nothing in the core derives behavior from it.
/// `transparent` controls collision: transparent kinds never count as solid
/// for movement or ground probes.
pub struct BlockAttributes {
    /// Display tint as RGB, consumed by the host renderer.
    pub tint: [u8; 3],
    /// Relative mining hardness (flavor).
    pub hardness: f32,
    /// Whether the block is see-through and non-colliding.
    pub transparent: bool,
}

/// Attribute table indexed by `BlockKind as usize`.
///
/// Kept in declaration order of the enum; `BlockKind::attributes` is the
/// only supported way to read it.
pub static BLOCK_ATTRIBUTES: [BlockAttributes; 7] = [
    // Air
    BlockAttributes { tint: [135, 206, 235], hardness: 0.0, transparent: true },
    // Grass
    BlockAttributes { tint: [80, 180, 70], hardness: 0.6, transparent: false },
    // Dirt
    BlockAttributes { tint: [120, 85, 60], hardness: 0.5, transparent: false },
    // Stone
    BlockAttributes { tint: [100, 100, 100], hardness: 1.5, transparent: false },
    // Wood
    BlockAttributes { tint: [120, 70, 20], hardness: 1.0, transparent: false },
    // Glass
    BlockAttributes { tint: [200, 230, 240], hardness: 0.3, transparent: true },
    // Tilled
    BlockAttributes { tint: [160, 110, 60], hardness: 0.5, transparent: false },
];

impl BlockKind {
    /// Converts a `BlockKindSize` back into a `BlockKind`.
    ///
    /// Used when decoding the voxel save format. Returns `None` for values
    /// outside the enum so the codec can reject the record instead of
    /// panicking.
    ///
    /// # Arguments
    /// * `kind` - The block kind as a `BlockKindSize`
    pub fn from_int(kind: BlockKindSize) -> Option<Self> {
        num::FromPrimitive::from_u8(kind)
    }

    /// Returns the static attributes for this kind.
    pub fn attributes(self) -> &'static BlockAttributes {
        &BLOCK_ATTRIBUTES[self as usize]
    }

    /// Whether this kind is see-through and non-colliding.
    pub fn is_transparent(self) -> bool {
        self.attributes().transparent
    }

    /// Whether the tile-variant player may stand on top of this kind when
    /// auto-stepping up onto an obstruction.
    pub fn is_steppable(self) -> bool {
        matches!(
            self,
            BlockKind::Grass
                | BlockKind::Dirt
                | BlockKind::Stone
                | BlockKind::Wood
                | BlockKind::Tilled
        )
    }

    /// The item granted when this kind is mined, or `None` if mining it is
    /// a no-op (air).
    ///
    /// Tilled soil drops plain dirt rather than a distinct item.
    pub fn drops(self) -> Option<ItemKind> {
        match self {
            BlockKind::Air => None,
            BlockKind::Grass => Some(ItemKind::Grass),
            BlockKind::Dirt => Some(ItemKind::Dirt),
            BlockKind::Stone => Some(ItemKind::Stone),
            BlockKind::Wood => Some(ItemKind::Wood),
            BlockKind::Glass => Some(ItemKind::Glass),
            BlockKind::Tilled => Some(ItemKind::Dirt),
        }
    }
}
