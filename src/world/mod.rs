//! # World Data Model
//!
//! The block/item/crop vocabulary shared by both game variants. The actual
//! spatial stores live with their variants (`crate::voxel::world`,
//! `crate::tile::world`); this module only defines what can occupy space and
//! what a player can hold.

pub mod block;
pub mod crop;
pub mod item;

pub use block::{BlockAttributes, BlockKind, BlockKindSize};
pub use crop::{Crop, CropMap};
pub use item::{Inventory, ItemKind};
