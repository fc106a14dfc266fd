//! # Voxel Session
//!
//! The owning object of the mini-Minecraft variant: world store, inventory,
//! player, and input tracker, coordinated by a synchronous tick. All mutation
//! goes through the session's mine/place operations; nothing else writes the
//! world. Target coordinates for mine/place come from the host's raycast —
//! picking is a rendering concern and stays outside the core.

use std::path::Path;

use cgmath::Point3;

use crate::core::input::{Key, SLOT_KEYS};
use crate::core::InputTracker;
use crate::save::{self, SaveError};
use crate::world::{Inventory, ItemKind};

use super::player::{MoveIntent, VoxelPlayer};
use super::world::{VoxelWorld, WORLD_FLOOR_Y};

/// Placement below this height is silently rejected, preventing unbounded
/// downward building under the generated floor.
pub const PLACEMENT_FLOOR_Y: i32 = WORLD_FLOOR_Y;

/// Hotbar layout of the voxel variant, in slot order.
pub const VOXEL_HOTBAR: [ItemKind; 4] = [
    ItemKind::Dirt,
    ItemKind::Stone,
    ItemKind::Wood,
    ItemKind::Glass,
];

/// A running mini-Minecraft game: exclusive owner of all mutable state for
/// the session's lifetime.
pub struct VoxelSession {
    /// The sparse block store.
    pub world: VoxelWorld,
    /// The player's item counts.
    pub inventory: Inventory,
    /// The physics-driven player.
    pub player: VoxelPlayer,
    /// Key state fed by the host loop.
    pub input: InputTracker,
    quit_requested: bool,
}

impl Default for VoxelSession {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelSession {
    /// Creates a session with freshly generated terrain, the starting
    /// inventory, and the player at the spawn point.
    pub fn new() -> Self {
        let mut inventory = Inventory::new();
        inventory.grant(ItemKind::Dirt, 10);
        inventory.grant(ItemKind::Stone, 2);
        inventory.grant(ItemKind::Wood, 3);
        inventory.grant(ItemKind::Glass, 2);

        VoxelSession {
            world: VoxelWorld::generate(),
            inventory,
            player: VoxelPlayer::spawn(),
            input: InputTracker::new(),
            quit_requested: false,
        }
    }

    /// The item in the player's selected hotbar slot.
    pub fn selected_item(&self) -> Option<ItemKind> {
        VOXEL_HOTBAR.get(self.player.selected_slot).copied()
    }

    /// Mines the block at `position`.
    ///
    /// No-op on air. Otherwise the dropped item is granted and the cell is
    /// cleared, atomically with respect to world and inventory.
    pub fn mine(&mut self, position: Point3<i32>) {
        let Some(kind) = self.world.block_at(position) else {
            return;
        };
        if let Some(item) = kind.drops() {
            self.inventory.grant(item, 1);
        }
        self.world.remove_block(position);
    }

    /// Places the selected hotbar item at `position`.
    ///
    /// No-op if the cell is occupied, below the placement floor, the slot
    /// holds a non-placeable item, or the count is zero. The inventory is
    /// only decremented when the block actually lands.
    pub fn place(&mut self, position: Point3<i32>) {
        if position.y < PLACEMENT_FLOOR_Y {
            return;
        }
        if self.world.block_at(position).is_some() {
            return;
        }
        let Some(item) = self.selected_item() else {
            return;
        };
        let Some(kind) = item.placeable_block() else {
            return;
        };
        if !self.inventory.take_one(item) {
            return;
        }
        self.world.set_block(position, kind);
    }

    /// Advances the session by one tick: translates input into a movement
    /// intent, steps the player, handles slot/save/load/quit keys, and
    /// rotates the input tracker.
    pub fn tick(&mut self, dt: f32, save_path: &Path) {
        let intent = MoveIntent {
            forward: self.input.key_state(Key::KeyW).is_active(),
            backward: self.input.key_state(Key::KeyS).is_active(),
            left: self.input.key_state(Key::KeyA).is_active(),
            right: self.input.key_state(Key::KeyD).is_active(),
            jump: self.input.key_state(Key::Space).is_just_pressed(),
        };
        self.player.update(dt, &intent, &self.world);

        for (slot, key) in SLOT_KEYS.iter().enumerate() {
            if self.input.key_state(*key).is_just_pressed() && slot < VOXEL_HOTBAR.len() {
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

        self.input.end_tick();
    }

    /// Whether the quit key was pressed. Quitting never saves implicitly.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Writes the session snapshot to `path`.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        save::save_voxel(path, &self.world, self.player.position, &self.inventory)
    }

    /// Restores the session from `path`.
    ///
    /// A missing file is a diagnostic no-op; a malformed one is an error.
    /// Either way the current state is only replaced after the whole file
    /// decoded successfully.
    pub fn load(&mut self, path: &Path) -> Result<(), SaveError> {
        let Some((world, position, inventory)) = save::load_voxel(path)? else {
            return Ok(());
        };
        self.world = world;
        self.inventory = inventory;
        self.player.position = position;
        self.player.vertical_velocity = 0.0;
        self.player.grounded = false;
        Ok(())
    }
}
