//! End-to-end scenarios driving whole sessions through their public
//! surface: the farming day cycle, inventory-guarded building, and full
//! save/load round trips through real files.

use cgmath::{Point2, Point3};

use craftcore::core::input::Key;
use craftcore::core::GameClock;
use craftcore::tile::{TilePlayer, TileSession, TileWorld};
use craftcore::voxel::world::surface_height;
use craftcore::voxel::VoxelSession;
use craftcore::world::{BlockKind, Crop, ItemKind};

const TICK: f32 = 1.0 / 60.0;

fn temp_save(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("craftcore_test_{}_{}.json", name, std::process::id()))
}

/// Spec scenario: till (5,5), plant on day 1, harvest on day 4.
/// Starting inventory {dirt:10, seed:5, hoe:1}; after the harvest the crop
/// is gone, seeds are 6, dirt is 11, and the tile stays tilled.
#[test]
fn farming_day_cycle() {
    let mut session = TileSession::new(9);
    let mut world = TileWorld::empty(10, 10);
    for x in 0..10 {
        world.set_tile(x, 6, BlockKind::Grass);
    }
    session.world = world;
    session.player = TilePlayer {
        x: 5,
        y: 4,
        selected_slot: 0,
    };
    session.clock = GameClock::restore(1, 8.0);
    assert_eq!(session.inventory.count(ItemKind::Dirt), 10);
    assert_eq!(session.inventory.count(ItemKind::Seed), 5);
    assert_eq!(session.inventory.count(ItemKind::Hoe), 1);

    // Tilling the empty cell above the surface is a no-op.
    session.till(5, 5);
    assert_eq!(session.world.tile_at(5, 5), BlockKind::Air);
    session.till(5, 6);
    assert_eq!(session.world.tile_at(5, 6), BlockKind::Tilled);

    session.plant_seed(5, 6);
    assert_eq!(session.inventory.count(ItemKind::Seed), 4);
    let crop = session.plants[&Point2::new(5, 6)];
    assert_eq!(crop, Crop { planted_day: 1, grow_days: 3 });

    // Day 3: stage 2, immature, harvest is a no-op.
    session.clock = GameClock::restore(3, 8.0);
    assert_eq!(crop.stage(3), 2);
    session.harvest(5, 6);
    assert!(session.plants.contains_key(&Point2::new(5, 6)));

    // Day 4: stage == grow_days, harvest succeeds.
    session.clock = GameClock::restore(4, 8.0);
    assert!(crop.is_mature(4));
    session.harvest(5, 6);
    assert!(session.plants.is_empty());
    assert_eq!(session.inventory.count(ItemKind::Seed), 6);
    assert_eq!(session.inventory.count(ItemKind::Dirt), 11);
    assert_eq!(session.world.tile_at(5, 6), BlockKind::Tilled);
}

/// Spec scenario: placing glass with zero glass in the inventory changes
/// nothing.
#[test]
fn placing_without_stock_is_a_no_op() {
    let mut session = VoxelSession::new();
    while session.inventory.take_one(ItemKind::Glass) {}
    session.player.selected_slot = 3; // glass
    let target = Point3::new(0, surface_height(0, 0) + 2, 0);
    let world_len = session.world.len();
    session.place(target);
    assert_eq!(session.world.block_at(target), None);
    assert_eq!(session.world.len(), world_len);
}

/// A tile session saved to disk and loaded into a fresh session reproduces
/// world, crops, inventory, player, and clock exactly.
#[test]
fn tile_save_load_round_trip() {
    let path = temp_save("tile_round_trip");
    let mut session = TileSession::new(77);
    let (x, y) = session.action_target();
    session.till(x, y);
    session.plant_seed(x, y);
    session.save(&path).unwrap();

    let mut restored = TileSession::new(1);
    restored.load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.world, session.world);
    assert_eq!(restored.plants, session.plants);
    assert_eq!(restored.inventory, session.inventory);
    assert_eq!((restored.player.x, restored.player.y), (session.player.x, session.player.y));
    assert_eq!(restored.clock, session.clock);
}

/// Growth stays consistent across a reload: a crop saved immature comes back
/// with its stage derived from the restored day counter.
#[test]
fn growth_is_retroactively_consistent_after_load() {
    let path = temp_save("growth_reload");
    let mut session = TileSession::new(5);
    let (x, y) = session.action_target();
    session.till(x, y);
    session.plant_seed(x, y);
    session.clock.day += 2;
    session.save(&path).unwrap();

    let mut restored = TileSession::new(2);
    restored.load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let crop = restored.plants[&Point2::new(x, y)];
    assert_eq!(crop.stage(restored.clock.day), 2);
    assert!(!crop.is_mature(restored.clock.day));
    restored.clock.day += 1;
    assert!(crop.is_mature(restored.clock.day));
}

/// A voxel session with player-made edits survives a save/load round trip
/// through the session's own key bindings.
#[test]
fn voxel_save_load_through_key_bindings() {
    let path = temp_save("voxel_keys");
    let _ = std::fs::remove_file(&path);

    let mut session = VoxelSession::new();
    let target = Point3::new(4, surface_height(4, 4), 4);
    session.mine(target);
    let edited_world = session.world.clone();
    let edited_inventory = session.inventory.clone();

    session.input.set_key(Key::KeyO, true);
    session.tick(TICK, &path);
    session.input.set_key(Key::KeyO, false);
    session.tick(TICK, &path);

    // Wreck the live state, then load it back.
    session.mine(Point3::new(0, surface_height(0, 0), 0));
    session.input.set_key(Key::KeyL, true);
    session.tick(TICK, &path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(session.world, edited_world);
    assert_eq!(session.inventory, edited_inventory);
}

/// Loading with no file on disk leaves a running session untouched.
#[test]
fn load_without_a_file_changes_nothing() {
    let path = temp_save("missing_file");
    let _ = std::fs::remove_file(&path);

    let mut session = TileSession::new(11);
    let world_before = session.world.clone();
    let inventory_before = session.inventory.clone();
    session.load(&path).unwrap();
    assert_eq!(session.world, world_before);
    assert_eq!(session.inventory, inventory_before);
}
