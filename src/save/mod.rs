//! # Persistence Codec
//!
//! JSON save/load for both variants. Encoding is a pure snapshot of the
//! world store, crop map, inventory, and player scalars; decoding validates
//! strictly and rebuilds the whole state or nothing. A malformed file never
//! partially overwrites a running session — the session only swaps state in
//! after the entire document decoded.
//!
//! A missing file on load is not an error: it logs a diagnostic and yields
//! `None`, leaving the caller's state untouched.
//!
//! ## Formats
//!
//! Voxel: `{"blocks": [{"x":…,"y":…,"z":…,"t":…}], "player": {…}, "inventory": {…}}`
//! where `t` indexes the fixed block-kind table.
//!
//! Tile: `{"world": [["air","grass",…]], "plants": {"x,y": {"planted_day":…,
//! "grow_days":…}}, "player": {"x":…,"y":…,"day":…,"time":…}, "inventory": {…}}`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cgmath::{Point2, Point3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameClock;
use crate::tile::TileWorld;
use crate::voxel::VoxelWorld;
use crate::world::{BlockKind, BlockKindSize, Crop, CropMap, Inventory};

/// Everything that can go wrong while saving or loading.
///
/// Gameplay never produces these; only the persistence boundary does.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Reading or writing the save file failed.
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not valid JSON for the expected document shape.
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    /// A voxel block record carried a `t` outside the block-kind table.
    #[error("unknown block kind {0} in save record")]
    UnknownBlockKind(BlockKindSize),

    /// A plant map key was not of the form `"x,y"` with integer parts.
    #[error("malformed plant key `{0}`")]
    MalformedPlantKey(String),

    /// The tile grid was empty or its columns had unequal heights.
    #[error("malformed world grid in save data")]
    MalformedWorldGrid,
}

// ---------------------------------------------------------------------------
// Voxel format
// ---------------------------------------------------------------------------

/// One occupied cell in the voxel save: coordinate plus the block kind as an
/// index into the fixed kind table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoxelBlockRecord {
    /// Cell x.
    pub x: i32,
    /// Cell y.
    pub y: i32,
    /// Cell z.
    pub z: i32,
    /// Block kind index.
    pub t: BlockKindSize,
}

/// Player scalars in the voxel save.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VoxelPlayerRecord {
    /// Feet x.
    pub x: f32,
    /// Feet y.
    pub y: f32,
    /// Feet z.
    pub z: f32,
}

/// The voxel save document.
#[derive(Debug, Serialize, Deserialize)]
pub struct VoxelSaveData {
    /// Every occupied cell, in unspecified order.
    pub blocks: Vec<VoxelBlockRecord>,
    /// Player position.
    pub player: VoxelPlayerRecord,
    /// Item counts.
    pub inventory: Inventory,
}

/// Snapshots a voxel session into a save document.
pub fn encode_voxel(
    world: &VoxelWorld,
    player_position: Point3<f32>,
    inventory: &Inventory,
) -> VoxelSaveData {
    VoxelSaveData {
        blocks: world
            .iter()
            .map(|(position, kind)| VoxelBlockRecord {
                x: position.x,
                y: position.y,
                z: position.z,
                t: *kind as BlockKindSize,
            })
            .collect(),
        player: VoxelPlayerRecord {
            x: player_position.x,
            y: player_position.y,
            z: player_position.z,
        },
        inventory: inventory.clone(),
    }
}

/// Rebuilds voxel session state from a save document.
///
/// Strict: any record with an unknown kind index fails the whole decode.
pub fn decode_voxel(
    data: VoxelSaveData,
) -> Result<(VoxelWorld, Point3<f32>, Inventory), SaveError> {
    let mut world = VoxelWorld::new();
    for record in &data.blocks {
        let kind = BlockKind::from_int(record.t).ok_or(SaveError::UnknownBlockKind(record.t))?;
        world.set_block(Point3::new(record.x, record.y, record.z), kind);
    }
    let position = Point3::new(data.player.x, data.player.y, data.player.z);
    Ok((world, position, data.inventory))
}

/// Serializes a voxel session snapshot to `path`.
pub fn save_voxel(
    path: &Path,
    world: &VoxelWorld,
    player_position: Point3<f32>,
    inventory: &Inventory,
) -> Result<(), SaveError> {
    let data = encode_voxel(world, player_position, inventory);
    fs::write(path, serde_json::to_string(&data)?)?;
    log::info!("saved {} blocks to {}", data.blocks.len(), path.display());
    Ok(())
}

/// Reads and decodes a voxel save from `path`.
///
/// # Returns
/// `Ok(None)` if the file does not exist (with a diagnostic); the decoded
/// state otherwise.
pub fn load_voxel(
    path: &Path,
) -> Result<Option<(VoxelWorld, Point3<f32>, Inventory)>, SaveError> {
    if !path.exists() {
        log::warn!("no save file at {}", path.display());
        return Ok(None);
    }
    let data: VoxelSaveData = serde_json::from_str(&fs::read_to_string(path)?)?;
    let decoded = decode_voxel(data)?;
    log::info!("loaded {}", path.display());
    Ok(Some(decoded))
}

// ---------------------------------------------------------------------------
// Tile format
// ---------------------------------------------------------------------------

/// Player scalars in the tile save, including the clock that crop growth
/// derives from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TilePlayerRecord {
    /// Column position.
    pub x: i32,
    /// Row position.
    pub y: i32,
    /// Current day index.
    pub day: u32,
    /// Hours into the current day.
    pub time: f32,
}

/// The tile save document.
#[derive(Debug, Serialize, Deserialize)]
pub struct TileSaveData {
    /// The dense grid as columns of lowercase kind strings.
    pub world: Vec<Vec<BlockKind>>,
    /// Crops keyed by `"x,y"` strings.
    pub plants: HashMap<String, Crop>,
    /// Player and clock scalars.
    pub player: TilePlayerRecord,
    /// Item counts.
    pub inventory: Inventory,
}

/// The decoded contents of a tile save, ready for the session to adopt.
pub struct TileSnapshot {
    /// The restored grid.
    pub world: TileWorld,
    /// The restored crop map.
    pub plants: CropMap,
    /// The restored inventory.
    pub inventory: Inventory,
    /// Player column.
    pub player_x: i32,
    /// Player row.
    pub player_y: i32,
    /// The restored clock; crop stages recompute from it on read.
    pub clock: GameClock,
}

/// Snapshots a tile session into a save document.
pub fn encode_tile(
    world: &TileWorld,
    plants: &CropMap,
    inventory: &Inventory,
    player: (i32, i32),
    clock: GameClock,
) -> TileSaveData {
    TileSaveData {
        world: world.to_grid(),
        plants: plants
            .iter()
            .map(|(position, crop)| (format!("{},{}", position.x, position.y), *crop))
            .collect(),
        player: TilePlayerRecord {
            x: player.0,
            y: player.1,
            day: clock.day,
            time: clock.time_of_day,
        },
        inventory: inventory.clone(),
    }
}

/// Rebuilds tile session state from a save document.
///
/// Strict: a ragged grid or an unparseable plant key fails the whole decode.
pub fn decode_tile(data: TileSaveData) -> Result<TileSnapshot, SaveError> {
    let world = TileWorld::from_grid(&data.world).ok_or(SaveError::MalformedWorldGrid)?;

    let mut plants = CropMap::new();
    for (key, crop) in &data.plants {
        let (x, y) = parse_plant_key(key)?;
        plants.insert(Point2::new(x, y), *crop);
    }

    Ok(TileSnapshot {
        world,
        plants,
        inventory: data.inventory,
        player_x: data.player.x,
        player_y: data.player.y,
        clock: GameClock::restore(data.player.day, data.player.time),
    })
}

/// Serializes a tile session snapshot to `path`.
pub fn save_tile(
    path: &Path,
    world: &TileWorld,
    plants: &CropMap,
    inventory: &Inventory,
    player: (i32, i32),
    clock: GameClock,
) -> Result<(), SaveError> {
    let data = encode_tile(world, plants, inventory, player, clock);
    fs::write(path, serde_json::to_string(&data)?)?;
    log::info!("saved to {}", path.display());
    Ok(())
}

/// Reads and decodes a tile save from `path`.
///
/// # Returns
/// `Ok(None)` if the file does not exist (with a diagnostic); the decoded
/// snapshot otherwise.
pub fn load_tile(path: &Path) -> Result<Option<TileSnapshot>, SaveError> {
    if !path.exists() {
        log::warn!("no save file at {}", path.display());
        return Ok(None);
    }
    let data: TileSaveData = serde_json::from_str(&fs::read_to_string(path)?)?;
    let snapshot = decode_tile(data)?;
    log::info!("loaded {}", path.display());
    Ok(Some(snapshot))
}

/// Parses a `"x,y"` plant key into its coordinates.
fn parse_plant_key(key: &str) -> Result<(i32, i32), SaveError> {
    let malformed = || SaveError::MalformedPlantKey(key.to_string());
    let (x, y) = key.split_once(',').ok_or_else(malformed)?;
    Ok((
        x.trim().parse().map_err(|_| malformed())?,
        y.trim().parse().map_err(|_| malformed())?,
    ))
}
