//! # Tile Session
//!
//! The owning object of the farming/mining variant: grid world, crop map,
//! inventory, player, clock, and input tracker, advanced by a synchronous
//! tick. The action key applies exactly one mutation per press, resolved by
//! the documented priority: harvest a mature crop first, then plant if a seed
//! is selected, then place if a placeable item is selected, then mine.

use std::path::Path;

use cgmath::Point2;

use crate::core::clock::GameClock;
use crate::core::input::{Key, SLOT_KEYS};
use crate::core::InputTracker;
use crate::save::{self, SaveError};
use crate::world::crop::{Crop, HARVEST_DIRT_YIELD, HARVEST_SEED_YIELD};
use crate::world::{BlockKind, CropMap, Inventory, ItemKind};

use super::player::TilePlayer;
use super::world::{TileWorld, MAP_HEIGHT, MAP_WIDTH};

/// Hotbar layout of the tile variant, in slot order.
pub const TILE_HOTBAR: [ItemKind; 5] = [
    ItemKind::Dirt,
    ItemKind::Stone,
    ItemKind::Wood,
    ItemKind::Seed,
    ItemKind::Hoe,
];

/// Visible viewport width in tiles, for the camera clamp.
pub const VIEW_WIDTH: i32 = 20;

/// Visible viewport height in tiles.
pub const VIEW_HEIGHT: i32 = 15;

/// Seconds between accepted action-key presses.
pub const ACTION_COOLDOWN: f32 = 0.2;

/// In-game hours that pass per real second.
pub const HOURS_PER_SECOND: f32 = 10.0;

/// A running farming/mining game: exclusive owner of all mutable state for
/// the session's lifetime.
pub struct TileSession {
    /// The bounded tile grid.
    pub world: TileWorld,
    /// Planted crops, keyed by tile coordinate.
    pub plants: CropMap,
    /// The player's item counts.
    pub inventory: Inventory,
    /// The grid-stepping player.
    pub player: TilePlayer,
    /// The day/time accumulator driving crop growth.
    pub clock: GameClock,
    /// Key state fed by the host loop.
    pub input: InputTracker,
    /// Top-left corner of the viewport, clamped to the map.
    pub camera: Point2<i32>,
    action_cooldown: f32,
    quit_requested: bool,
}

impl TileSession {
    /// Creates a session with terrain generated from `seed`, the starting
    /// inventory, and the player seated on the surface at map center.
    pub fn new(seed: u64) -> Self {
        let world = TileWorld::generate(seed, MAP_WIDTH, MAP_HEIGHT);
        let player = TilePlayer::spawn(&world, MAP_WIDTH / 2);

        let mut inventory = Inventory::new();
        inventory.grant(ItemKind::Seed, 5);
        inventory.grant(ItemKind::Hoe, 1);
        inventory.grant(ItemKind::Dirt, 10);
        inventory.grant(ItemKind::Stone, 2);
        inventory.grant(ItemKind::Wood, 3);

        let mut session = TileSession {
            world,
            plants: CropMap::new(),
            inventory,
            player,
            clock: GameClock::new(),
            input: InputTracker::new(),
            camera: Point2::new(0, 0),
            action_cooldown: 0.0,
            quit_requested: false,
        };
        session.follow_camera();
        session
    }

    /// The item in the player's selected hotbar slot.
    pub fn selected_item(&self) -> Option<ItemKind> {
        TILE_HOTBAR.get(self.player.selected_slot).copied()
    }

    /// The tile the action key operates on: directly below the player.
    pub fn action_target(&self) -> (i32, i32) {
        (self.player.x, self.player.y + 1)
    }

    /// Mines the tile at `(x, y)`.
    ///
    /// No-op out of bounds, on air, or while any crop occupies the
    /// coordinate — a growing crop is not minable, and a mature one must be
    /// harvested instead. Otherwise the dropped item is granted and the tile
    /// cleared, atomically with respect to world and inventory.
    pub fn mine(&mut self, x: i32, y: i32) {
        if !self.world.in_bounds(x, y) {
            return;
        }
        if self.plants.contains_key(&Point2::new(x, y)) {
            return;
        }
        let Some(item) = self.world.tile_at(x, y).drops() else {
            return;
        };
        self.inventory.grant(item, 1);
        self.world.set_tile(x, y, BlockKind::Air);
    }

    /// Places `item` at `(x, y)` if the tile is air and at least one is
    /// held. The inventory is only decremented when the tile actually lands.
    pub fn place(&mut self, x: i32, y: i32, item: ItemKind) {
        if !self.world.in_bounds(x, y) {
            return;
        }
        if self.world.tile_at(x, y) != BlockKind::Air {
            return;
        }
        let Some(kind) = item.placeable_block() else {
            return;
        };
        if !self.inventory.take_one(item) {
            return;
        }
        self.world.set_tile(x, y, kind);
    }

    /// Tills grass or dirt at `(x, y)` into farmland.
    ///
    /// Requires a hoe in the inventory (the hoe is never consumed).
    /// Tilling an already-tilled tile is an accepted no-op.
    pub fn till(&mut self, x: i32, y: i32) {
        if !self.inventory.has(ItemKind::Hoe) {
            return;
        }
        if !self.world.in_bounds(x, y) {
            return;
        }
        if matches!(self.world.tile_at(x, y), BlockKind::Grass | BlockKind::Dirt) {
            self.world.set_tile(x, y, BlockKind::Tilled);
        }
    }

    /// Plants a seed at `(x, y)`.
    ///
    /// Requires a tilled tile, a vacant crop slot, and at least one seed.
    /// On success a crop planted on the current day is created and one seed
    /// is consumed.
    pub fn plant_seed(&mut self, x: i32, y: i32) {
        if !self.world.in_bounds(x, y) {
            return;
        }
        if self.world.tile_at(x, y) != BlockKind::Tilled {
            return;
        }
        let key = Point2::new(x, y);
        if self.plants.contains_key(&key) {
            return;
        }
        if !self.inventory.take_one(ItemKind::Seed) {
            return;
        }
        self.plants.insert(key, Crop::new(self.clock.day));
    }

    /// Harvests the crop at `(x, y)`.
    ///
    /// No-op without a crop; an immature crop is left untouched. A mature
    /// one grants the fixed yield and is removed, leaving the tile tilled
    /// for replanting.
    pub fn harvest(&mut self, x: i32, y: i32) {
        let key = Point2::new(x, y);
        let Some(crop) = self.plants.get(&key) else {
            return;
        };
        if !crop.is_mature(self.clock.day) {
            return;
        }
        self.inventory.grant(ItemKind::Seed, HARVEST_SEED_YIELD);
        self.inventory.grant(ItemKind::Dirt, HARVEST_DIRT_YIELD);
        self.plants.remove(&key);
    }

    /// Applies the action key to the target tile, resolving the priority
    /// rule: harvest a mature crop, else plant if a seed is selected, else
    /// place if a placeable item is selected, else mine.
    pub fn try_action(&mut self) {
        let (x, y) = self.action_target();

        if let Some(crop) = self.plants.get(&Point2::new(x, y)) {
            if crop.is_mature(self.clock.day) {
                self.harvest(x, y);
                return;
            }
        }

        match self.selected_item() {
            Some(ItemKind::Seed) => {
                if self.world.tile_at(x, y) == BlockKind::Tilled {
                    self.plant_seed(x, y);
                    return;
                }
            }
            Some(item) if item.placeable_block().is_some() => {
                self.place(x, y, item);
                return;
            }
            _ => {}
        }

        if self.world.tile_at(x, y) != BlockKind::Air {
            self.mine(x, y);
        }
    }

    /// Advances the session by one tick: clock, cooldown, movement, action
    /// and tool keys, save/load/quit, camera follow, input rotation.
    pub fn tick(&mut self, dt: f32, save_path: &Path) {
        self.clock.advance(dt * HOURS_PER_SECOND);
        self.action_cooldown = (self.action_cooldown - dt).max(0.0);

        let mut dx = 0;
        let mut dy = 0;
        if self.input.key_state(Key::KeyA).is_active() {
            dx -= 1;
        }
        if self.input.key_state(Key::KeyD).is_active() {
            dx += 1;
        }
        if self.input.key_state(Key::KeyW).is_active() {
            dy -= 1;
        }
        if self.input.key_state(Key::KeyS).is_active() {
            dy += 1;
        }
        if dx != 0 || dy != 0 {
            self.player.step(dx, dy, &self.world);
        }

        if self.input.key_state(Key::Space).is_just_pressed() && self.action_cooldown <= 0.0 {
            self.try_action();
            self.action_cooldown = ACTION_COOLDOWN;
        }
        if self.input.key_state(Key::KeyE).is_just_pressed() {
            let (x, y) = self.action_target();
            self.till(x, y);
        }

        for (slot, key) in SLOT_KEYS.iter().enumerate() {
            if self.input.key_state(*key).is_just_pressed() {
                self.player.selected_slot = slot;
            }
        }

        if self.input.key_state(Key::KeyO).is_just_pressed() {
            if let Err(error) = self.save(save_path) {
                log::error!("save failed: {error}");
            }
        }
        if self.input.key_state(Key::KeyL).is_just_pressed() {
            if let Err(error) = self.load(save_path) {
                log::error!("load failed: {error}");
            }
        }
        if self.input.key_state(Key::KeyQ).is_just_pressed() {
            self.quit_requested = true;
        }

        self.follow_camera();
        self.input.end_tick();
    }

    /// Whether the quit key was pressed. Quitting never saves implicitly.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Clamps the viewport so it follows the player without leaving the map.
    fn follow_camera(&mut self) {
        let max_x = (self.world.width() - VIEW_WIDTH).max(0);
        let max_y = (self.world.height() - VIEW_HEIGHT).max(0);
        self.camera.x = (self.player.x - VIEW_WIDTH / 2).clamp(0, max_x);
        self.camera.y = (self.player.y - VIEW_HEIGHT / 2).clamp(0, max_y);
    }

    /// Writes the session snapshot to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        save::save_tile(
            path,
            &self.world,
            &self.plants,
            &self.inventory,
            (self.player.x, self.player.y),
            self.clock,
        )
    }

    /// Restores the session from `path`.
    ///
    /// A missing file is a diagnostic no-op; a malformed one is an error.
    /// State is only replaced after the whole file decoded successfully —
    /// never partially.
    pub fn load(&mut self, path: &Path) -> Result<(), SaveError> {
        let Some(snapshot) = save::load_tile(path)? else {
            return Ok(());
        };
        self.world = snapshot.world;
        self.plants = snapshot.plants;
        self.inventory = snapshot.inventory;
        self.player.x = snapshot.player_x;
        self.player.y = snapshot.player_y;
        self.clock = snapshot.clock;
        self.follow_camera();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A session over a flat handmade world, so the tests control every tile.
    fn flat_session() -> TileSession {
        let mut session = TileSession::new(1);
        let mut world = TileWorld::empty(12, 8);
        for x in 0..12 {
            world.set_tile(x, 5, BlockKind::Grass);
            for y in 6..8 {
                world.set_tile(x, y, BlockKind::Dirt);
            }
        }
        session.world = world;
        session.plants = CropMap::new();
        session.player = TilePlayer {
            x: 5,
            y: 4,
            selected_slot: 0,
        };
        session
    }

    #[test]
    fn till_requires_a_hoe() {
        let mut session = flat_session();
        while session.inventory.take_one(ItemKind::Hoe) {}
        session.till(5, 5);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Grass);
    }

    #[test]
    fn till_converts_grass_and_is_idempotent() {
        let mut session = flat_session();
        session.till(5, 5);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Tilled);
        session.till(5, 5);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Tilled);
        // Stone is not tillable.
        session.world.set_tile(6, 5, BlockKind::Stone);
        session.till(6, 5);
        assert_eq!(session.world.tile_at(6, 5), BlockKind::Stone);
    }

    #[test]
    fn plant_requires_tilled_ground() {
        let mut session = flat_session();
        let seeds = session.inventory.count(ItemKind::Seed);
        session.plant_seed(5, 5);
        assert!(session.plants.is_empty());
        assert_eq!(session.inventory.count(ItemKind::Seed), seeds);
    }

    #[test]
    fn plant_consumes_one_seed_and_refuses_double_planting() {
        let mut session = flat_session();
        session.till(5, 5);
        let seeds = session.inventory.count(ItemKind::Seed);
        session.plant_seed(5, 5);
        assert_eq!(session.inventory.count(ItemKind::Seed), seeds - 1);
        assert_eq!(
            session.plants.get(&Point2::new(5, 5)),
            Some(&Crop::new(session.clock.day))
        );
        session.plant_seed(5, 5);
        assert_eq!(session.inventory.count(ItemKind::Seed), seeds - 1);
    }

    #[test]
    fn harvest_leaves_immature_crops_alone() {
        let mut session = flat_session();
        session.till(5, 5);
        session.plant_seed(5, 5);
        let inventory_before = session.inventory.clone();
        session.harvest(5, 5);
        assert!(session.plants.contains_key(&Point2::new(5, 5)));
        assert_eq!(session.inventory, inventory_before);
    }

    #[test]
    fn mature_harvest_yields_and_keeps_the_tile_tilled() {
        let mut session = flat_session();
        session.till(5, 5);
        session.plant_seed(5, 5);
        let seeds = session.inventory.count(ItemKind::Seed);
        let dirt = session.inventory.count(ItemKind::Dirt);

        session.clock.day += 3;
        session.harvest(5, 5);
        assert!(session.plants.is_empty());
        assert_eq!(session.inventory.count(ItemKind::Seed), seeds + HARVEST_SEED_YIELD);
        assert_eq!(session.inventory.count(ItemKind::Dirt), dirt + HARVEST_DIRT_YIELD);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Tilled);
    }

    #[test]
    fn crops_block_mining() {
        let mut session = flat_session();
        session.till(5, 5);
        session.plant_seed(5, 5);
        let inventory_before = session.inventory.clone();
        session.mine(5, 5);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Tilled);
        assert_eq!(session.inventory, inventory_before);

        // Mature crops block mining too: harvest takes precedence.
        session.clock.day += 10;
        session.mine(5, 5);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Tilled);
        assert_eq!(session.inventory, inventory_before);
    }

    #[test]
    fn action_priority_prefers_harvest_over_place() {
        let mut session = flat_session();
        session.till(5, 5);
        session.plant_seed(5, 5);
        session.clock.day += 3;
        // Dirt selected: without the priority rule this press would place.
        session.player.selected_slot = 0;
        let dirt = session.inventory.count(ItemKind::Dirt);
        session.try_action();
        assert!(session.plants.is_empty());
        assert_eq!(session.inventory.count(ItemKind::Dirt), dirt + HARVEST_DIRT_YIELD);
    }

    #[test]
    fn mined_tilled_soil_drops_dirt() {
        let mut session = flat_session();
        session.till(5, 5);
        let dirt = session.inventory.count(ItemKind::Dirt);
        session.mine(5, 5);
        assert_eq!(session.world.tile_at(5, 5), BlockKind::Air);
        assert_eq!(session.inventory.count(ItemKind::Dirt), dirt + 1);
    }

    #[test]
    fn camera_stays_inside_the_map() {
        let mut session = TileSession::new(2);
        session.player.x = 0;
        session.player.y = 0;
        session.follow_camera();
        assert_eq!(session.camera, Point2::new(0, 0));

        session.player.x = MAP_WIDTH - 1;
        session.player.y = MAP_HEIGHT - 1;
        session.follow_camera();
        assert_eq!(session.camera.x, MAP_WIDTH - VIEW_WIDTH);
        assert_eq!(session.camera.y, MAP_HEIGHT - VIEW_HEIGHT);
    }
}
