//! # Tile Variant
//!
//! The 2D farming/mining prototype: a bounded dense tile grid with seeded
//! terrain, day-driven crop growth, and the full mutation set
//! (mine/place/till/plant/harvest) through the owning session object.

pub mod player;
pub mod session;
pub mod world;

pub use player::TilePlayer;
pub use session::TileSession;
pub use world::TileWorld;
