//! # Tile World Store
//!
//! The bounded 2D grid of the farming/mining variant. Unlike the sparse
//! voxel store, every cell exists and air is stored explicitly. Out-of-bounds
//! reads return a stone sentinel, so neither the player nor mining can escape
//! the map without any call site handling edges itself.
//!
//! ## Terrain
//!
//! Generation is driven by a seeded RNG: a jittered surface line, grass over
//! dirt over stone stratification, and scattered trees. The same seed always
//! produces the same grid.

use crate::world::BlockKind;

/// Default world width in tiles.
pub const MAP_WIDTH: i32 = 60;

/// Default world height in tiles.
pub const MAP_HEIGHT: i32 = 40;

/// Dirt layers between the grass surface and the stone body.
const DIRT_DEPTH: i32 = 4;

/// A dense, bounded grid of tiles, stored column-major (`[x][y]`, y growing
/// downward).
#[derive(Debug, Clone, PartialEq)]
pub struct TileWorld {
    width: i32,
    height: i32,
    tiles: Vec<BlockKind>,
}

impl TileWorld {
    /// Creates an all-air world of the given size.
    pub fn empty(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        TileWorld {
            width,
            height,
            tiles: vec![BlockKind::Air; (width * height) as usize],
        }
    }

    /// Generates terrain from `seed`: a surface line at roughly 40% depth
    /// with per-column jitter, grass on top, `DIRT_DEPTH` dirt layers, stone
    /// below, and `width / 8` trees with wood trunks and canopies.
    pub fn generate(seed: u64, width: i32, height: i32) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut world = TileWorld::empty(width, height);

        let surface = (height as f32 * 0.4) as i32 + rng.i32(-2..=2);
        for x in 0..width {
            let ground = surface + (2.0 * rng.f32()) as i32;
            for y in 0..height {
                let kind = if y < ground {
                    BlockKind::Air
                } else if y == ground {
                    BlockKind::Grass
                } else if y < ground + DIRT_DEPTH {
                    BlockKind::Dirt
                } else {
                    BlockKind::Stone
                };
                world.set_tile(x, y, kind);
            }
        }

        for _ in 0..width / 8 {
            let trunk_x = rng.i32(3..=width - 4);
            let Some(ground_y) = world.surface_y(trunk_x) else {
                continue;
            };
            let trunk_height = rng.i32(3..=5);
            for step in 1..=trunk_height {
                if ground_y - step >= 0 {
                    world.set_tile(trunk_x, ground_y - step, BlockKind::Wood);
                }
            }
            // Canopy: a patch around the trunk top, only over air.
            let top = ground_y - trunk_height;
            for canopy_x in trunk_x - 2..=trunk_x + 2 {
                for canopy_y in top - 2..=top {
                    if world.in_bounds(canopy_x, canopy_y)
                        && world.tile_at(canopy_x, canopy_y) == BlockKind::Air
                    {
                        world.set_tile(canopy_x, canopy_y, BlockKind::Wood);
                    }
                }
            }
        }

        world
    }

    /// World width in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// World height in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `(x, y)` lies inside the map bounds.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// The tile at `(x, y)`. Out-of-bounds reads return the stone sentinel.
    pub fn tile_at(&self, x: i32, y: i32) -> BlockKind {
        if !self.in_bounds(x, y) {
            return BlockKind::Stone;
        }
        self.tiles[(x * self.height + y) as usize]
    }

    /// Sets the tile at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, kind: BlockKind) {
        if self.in_bounds(x, y) {
            self.tiles[(x * self.height + y) as usize] = kind;
        }
    }

    /// The y of the first grass or dirt tile in column `x`, scanning from
    /// the top. Used to seat the player and trees on the surface.
    pub fn surface_y(&self, x: i32) -> Option<i32> {
        (0..self.height).find(|&y| {
            matches!(self.tile_at(x, y), BlockKind::Grass | BlockKind::Dirt)
        })
    }

    /// Copies the grid out as columns of tile kinds, for the save codec.
    pub fn to_grid(&self) -> Vec<Vec<BlockKind>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.tile_at(x, y)).collect())
            .collect()
    }

    /// Rebuilds a world from saved columns. Returns `None` if the grid is
    /// empty or ragged.
    pub fn from_grid(grid: &[Vec<BlockKind>]) -> Option<Self> {
        let width = grid.len() as i32;
        let height = grid.first()?.len() as i32;
        if height == 0 || grid.iter().any(|column| column.len() as i32 != height) {
            return None;
        }
        let mut world = TileWorld::empty(width, height);
        for (x, column) in grid.iter().enumerate() {
            for (y, kind) in column.iter().enumerate() {
                world.set_tile(x as i32, y as i32, *kind);
            }
        }
        Some(world)
    }
}
