//! # Voxel Variant
//!
//! The 3D "mini-Minecraft" prototype: a sparse infinite block store seeded by
//! a deterministic terrain function, a gravity-and-probe player controller,
//! and mine/place mutation through the owning session object.

pub mod player;
pub mod session;
pub mod world;

pub use player::{MoveIntent, VoxelPlayer};
pub use session::VoxelSession;
pub use world::VoxelWorld;
