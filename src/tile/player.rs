//! # Tile Player
//!
//! Discrete 4-directional movement on the tile grid. A step into air always
//! succeeds; a step onto a steppable obstruction succeeds only when the cell
//! above it is free (auto-step-up), otherwise the move is rejected. The
//! out-of-bounds stone sentinel makes the map edge behave like a wall.

use super::world::TileWorld;
use crate::world::BlockKind;

/// The tile variant's player: grid position and hotbar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlayer {
    /// Column position.
    pub x: i32,
    /// Row position, growing downward.
    pub y: i32,
    /// Selected hotbar slot index.
    pub selected_slot: usize,
}

impl TilePlayer {
    /// Seats the player on the surface of the given column, one tile above
    /// the first grass or dirt.
    pub fn spawn(world: &TileWorld, x: i32) -> Self {
        let y = world.surface_y(x).map(|surface| surface - 1).unwrap_or(0);
        TilePlayer {
            x,
            y,
            selected_slot: 0,
        }
    }

    /// Attempts one grid step by `(dx, dy)`.
    ///
    /// # Returns
    /// `true` if the player moved (including via auto-step-up).
    pub fn step(&mut self, dx: i32, dy: i32, world: &TileWorld) -> bool {
        let next_x = self.x + dx;
        let next_y = self.y + dy;
        if !world.in_bounds(next_x, next_y) {
            return false;
        }

        match world.tile_at(next_x, next_y) {
            BlockKind::Air => {
                self.x = next_x;
                self.y = next_y;
                true
            }
            kind if dy > 0 && kind.is_steppable() => {
                // Stepping down onto a solid tile: stand on top of it if the
                // cell above is free.
                if next_y - 1 >= 0 && world.tile_at(next_x, next_y - 1) == BlockKind::Air {
                    self.x = next_x;
                    self.y = next_y - 1;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 6x6 world with a solid floor at y=4 and one raised block at (3,3).
    fn stepped_world() -> TileWorld {
        let mut world = TileWorld::empty(6, 6);
        for x in 0..6 {
            world.set_tile(x, 4, BlockKind::Grass);
            world.set_tile(x, 5, BlockKind::Stone);
        }
        world.set_tile(3, 3, BlockKind::Dirt);
        world
    }

    #[test]
    fn step_into_air_succeeds() {
        let world = stepped_world();
        let mut player = TilePlayer {
            x: 1,
            y: 3,
            selected_slot: 0,
        };
        assert!(player.step(1, 0, &world));
        assert_eq!((player.x, player.y), (2, 3));
    }

    #[test]
    fn step_into_wall_is_rejected() {
        let world = stepped_world();
        let mut player = TilePlayer {
            x: 2,
            y: 3,
            selected_slot: 0,
        };
        assert!(!player.step(1, 0, &world));
        assert_eq!((player.x, player.y), (2, 3));
    }

    #[test]
    fn stepping_down_onto_floor_stands_on_top() {
        let world = stepped_world();
        let mut player = TilePlayer {
            x: 1,
            y: 3,
            selected_slot: 0,
        };
        assert!(player.step(0, 1, &world));
        assert_eq!((player.x, player.y), (1, 3));
    }

    #[test]
    fn auto_step_up_is_blocked_when_headroom_is_occupied() {
        let mut world = stepped_world();
        world.set_tile(1, 2, BlockKind::Wood);
        world.set_tile(1, 3, BlockKind::Wood);
        let mut player = TilePlayer {
            x: 0,
            y: 2,
            selected_slot: 0,
        };
        assert!(!player.step(1, 1, &world));
        assert_eq!((player.x, player.y), (0, 2));
    }

    #[test]
    fn map_edge_is_a_wall() {
        let world = stepped_world();
        let mut player = TilePlayer {
            x: 0,
            y: 3,
            selected_slot: 0,
        };
        assert!(!player.step(-1, 0, &world));
        assert_eq!((player.x, player.y), (0, 3));
    }
}
