//! # Items and Inventory
//!
//! This module defines the closed set of item kinds and the count-based
//! inventory shared by both variants. The inventory is statically keyed over
//! the `ItemKind` enumeration rather than free-form strings, so a typo can
//! never create a phantom item slot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::block::BlockKind;

/// Enumerates every item a player can hold.
///
/// Serialized as lowercase strings so inventory maps in save files read as
/// `{"seed": 5, "hoe": 1}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Mined grass blocks.
    Grass,
    /// Mined dirt (also the harvest by-product).
    Dirt,
    /// Mined stone.
    Stone,
    /// Mined wood.
    Wood,
    /// Glass blocks (voxel variant only).
    Glass,
    /// Plantable seeds.
    Seed,
    /// The tilling tool. Never consumed, only required.
    Hoe,
}

impl ItemKind {
    /// The block kind this item places, or `None` for non-placeable items
    /// (seeds go through the plant action, the hoe through till).
    pub fn placeable_block(self) -> Option<BlockKind> {
        match self {
            ItemKind::Grass => Some(BlockKind::Grass),
            ItemKind::Dirt => Some(BlockKind::Dirt),
            ItemKind::Stone => Some(BlockKind::Stone),
            ItemKind::Wood => Some(BlockKind::Wood),
            ItemKind::Glass => Some(BlockKind::Glass),
            ItemKind::Seed | ItemKind::Hoe => None,
        }
    }
}

/// A mapping from item kind to a non-negative count.
///
/// Counts are never stored at zero: granting zero is ignored and a take that
/// empties a slot removes the entry. This keeps content equality meaningful
/// across save/load round trips regardless of which slots were ever touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: HashMap<ItemKind, u32>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            counts: HashMap::new(),
        }
    }

    /// Returns the count for `kind`, zero if the slot is empty.
    pub fn count(&self, kind: ItemKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Adds `amount` of `kind`. Granting zero is a no-op.
    pub fn grant(&mut self, kind: ItemKind, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.counts.entry(kind).or_insert(0) += amount;
    }

    /// Removes one `kind` if at least one is held.
    ///
    /// # Returns
    /// `true` if an item was consumed, `false` if the slot was empty (the
    /// caller's operation must then be a no-op).
    pub fn take_one(&mut self, kind: ItemKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&kind);
                }
                true
            }
            _ => false,
        }
    }

    /// Whether at least one of `kind` is held.
    pub fn has(&self, kind: ItemKind) -> bool {
        self.count(kind) > 0
    }
}
