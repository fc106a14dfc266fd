//! # Voxel World Store
//!
//! The sparse 3D world of the mini-Minecraft variant. Only occupied cells are
//! stored; absence means air. The map is the single source of truth for
//! occupied space — collision, mining, and persistence all go through it.
//!
//! ## Terrain
//!
//! The surface height is a pure function of the horizontal coordinates, so
//! generation is fully deterministic: the same coordinates always yield the
//! same column, with no seed involved.

use std::collections::HashMap;

use cgmath::Point3;

use crate::world::BlockKind;

/// Mean surface height of the generated terrain.
pub const BASE_HEIGHT: i32 = 8;

/// Peak-to-trough amplitude of the surface waves.
pub const MAX_AMPLITUDE: i32 = 6;

/// Dirt layers between the grass surface and the stone body.
pub const DIRT_DEPTH: i32 = 3;

/// Lowest generated layer; columns stop here.
pub const WORLD_FLOOR_Y: i32 = 0;

/// Half-width of the square region seeded at startup, in cells.
pub const GENERATION_RADIUS: i32 = 24;

/// Deterministic surface height for a column.
///
/// `height(x, z) = BASE + floor(0.5 * AMPLITUDE * (sin(0.25x) + cos(0.3z)))`.
/// The player respawn and world generation both derive from this, so the two
/// can never disagree about where the ground is.
pub fn surface_height(x: i32, z: i32) -> i32 {
    let wave = (x as f32 * 0.25).sin() + (z as f32 * 0.3).cos();
    BASE_HEIGHT + (0.5 * MAX_AMPLITUDE as f32 * wave).floor() as i32
}

/// Sparse mapping from cell coordinate to block kind.
///
/// Invariant: a present coordinate is occupied, an absent one is air. The
/// store never holds `BlockKind::Air` — setting air removes the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoxelWorld {
    blocks: HashMap<Point3<i32>, BlockKind>,
}

impl VoxelWorld {
    /// Creates a world with no blocks.
    pub fn new() -> Self {
        VoxelWorld {
            blocks: HashMap::new(),
        }
    }

    /// Generates the startup world: a `GENERATION_RADIUS`-sized square of
    /// terrain columns around the origin.
    ///
    /// Each column is grass at the surface, `DIRT_DEPTH` layers of dirt
    /// below it, and stone down to `WORLD_FLOOR_Y`.
    pub fn generate() -> Self {
        let mut world = VoxelWorld::new();
        for x in -GENERATION_RADIUS..=GENERATION_RADIUS {
            for z in -GENERATION_RADIUS..=GENERATION_RADIUS {
                let surface = surface_height(x, z);
                for y in WORLD_FLOOR_Y..=surface {
                    let kind = if y == surface {
                        BlockKind::Grass
                    } else if y >= surface - DIRT_DEPTH {
                        BlockKind::Dirt
                    } else {
                        BlockKind::Stone
                    };
                    world.blocks.insert(Point3::new(x, y, z), kind);
                }
            }
        }
        world
    }

    /// Returns the block at `position`, `None` for air.
    pub fn block_at(&self, position: Point3<i32>) -> Option<BlockKind> {
        self.blocks.get(&position).copied()
    }

    /// Sets the block at `position`. Setting `Air` clears the cell instead,
    /// preserving the sparseness invariant.
    pub fn set_block(&mut self, position: Point3<i32>, kind: BlockKind) {
        if kind == BlockKind::Air {
            self.blocks.remove(&position);
        } else {
            self.blocks.insert(position, kind);
        }
    }

    /// Clears the cell at `position`, returning what was there.
    pub fn remove_block(&mut self, position: Point3<i32>) -> Option<BlockKind> {
        self.blocks.remove(&position)
    }

    /// Whether `position` blocks movement: occupied by a non-transparent
    /// kind. Glass is occupied but never solid.
    pub fn is_solid(&self, position: Point3<i32>) -> bool {
        self.block_at(position)
            .map(|kind| !kind.is_transparent())
            .unwrap_or(false)
    }

    /// The number of occupied cells.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the world holds no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over all occupied cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point3<i32>, &BlockKind)> {
        self.blocks.iter()
    }
}
