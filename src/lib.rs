#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # craftcore
//!
//! The shared core of two prototype games: a 3D voxel "mini-Minecraft" and a
//! 2D tile-based farming/mining game. Both are built around the same model —
//! a coordinate-to-block store as the single source of truth for occupied
//! space, player-driven mutation (place/mine/till/plant/harvest) with
//! occupancy and resource-count guards, day-derived crop growth, and JSON
//! persistence.
//!
//! ## Key Modules
//!
//! * `core` - the in-game clock and engine-agnostic input tracking
//! * `world` - the block/item/crop vocabulary shared by both variants
//! * `voxel` - the 3D variant: sparse infinite store, physics player
//! * `tile` - the 2D variant: bounded grid, farming, day/night
//! * `save` - the persistence codec for both variants
//!
//! ## Architecture
//!
//! Everything is single-threaded and tick-driven. Each variant has one
//! session object that exclusively owns its world store, inventory, player,
//! and clock; all mutation runs to completion inside the owning tick.
//! Rendering, windowing, and input devices are host concerns: the host feeds
//! raw key flags into the session's `InputTracker` and draws from the
//! session's public state.

use std::path::PathBuf;

use crate::core::input::Key;
use crate::tile::TileSession;
use crate::voxel::VoxelSession;

pub mod core;
pub mod save;
pub mod tile;
pub mod voxel;
pub mod world;

/// Simulated frame time of the scripted demo.
const TICK: f32 = 1.0 / 60.0;

/// Runs a short headless demo of both prototypes.
///
/// Initializes logging, then drives each session through a scripted input
/// sequence: the tile session tills, plants, waits out the growth days, and
/// harvests; the voxel session mines, builds, and jumps. Both save and
/// reload their state along the way.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    log::info!("logger initialized");

    run_tile_demo(std::env::temp_dir().join("craftcore_tile_save.json"));
    run_voxel_demo(std::env::temp_dir().join("craftcore_voxel_save.json"));
}

/// Presses and releases a key across two ticks.
fn tap_tile(session: &mut TileSession, key: Key, save_path: &std::path::Path) {
    session.input.set_key(key, true);
    session.tick(TICK, save_path);
    session.input.set_key(key, false);
    session.tick(TICK, save_path);
}

fn run_tile_demo(save_path: PathBuf) {
    use crate::world::ItemKind;

    let mut session = TileSession::new(1337);
    log::info!(
        "tile demo: day {}, player at ({}, {})",
        session.clock.day,
        session.player.x,
        session.player.y
    );

    // Till the tile underfoot, switch to the seed slot, plant.
    tap_tile(&mut session, Key::KeyE, &save_path);
    tap_tile(&mut session, Key::Digit4, &save_path);
    tap_tile(&mut session, Key::Space, &save_path);
    log::info!(
        "planted; {} seeds left, {} crops in the ground",
        session.inventory.count(ItemKind::Seed),
        session.plants.len()
    );

    // Let three in-game days pass, then harvest with another action press.
    let planted_day = session.clock.day;
    while session.clock.day < planted_day + 3 {
        session.tick(TICK, &save_path);
    }
    tap_tile(&mut session, Key::Space, &save_path);
    log::info!(
        "harvested on day {}; {} seeds, {} dirt",
        session.clock.day,
        session.inventory.count(ItemKind::Seed),
        session.inventory.count(ItemKind::Dirt)
    );

    // Save, then load straight back.
    tap_tile(&mut session, Key::KeyO, &save_path);
    tap_tile(&mut session, Key::KeyL, &save_path);
    log::info!("tile demo done on day {}", session.clock.day);
}

fn run_voxel_demo(save_path: PathBuf) {
    use cgmath::Point3;

    use crate::voxel::world::surface_height;
    use crate::world::ItemKind;

    let mut session = VoxelSession::new();
    let surface = surface_height(2, 2);

    // Mine two blocks, then build a glass block on the surface next door.
    session.mine(Point3::new(2, surface, 2));
    session.mine(Point3::new(2, surface - 1, 2));
    session.player.selected_slot = 3; // glass
    session.place(Point3::new(3, surface_height(3, 2) + 1, 2));
    log::info!(
        "voxel demo: {} blocks stored, {} glass left",
        session.world.len(),
        session.inventory.count(ItemKind::Glass)
    );

    // Walk forward and jump once.
    session.input.set_key(Key::KeyW, true);
    session.input.set_key(Key::Space, true);
    for _ in 0..60 {
        session.tick(TICK, &save_path);
    }
    session.input.set_key(Key::KeyW, false);
    session.input.set_key(Key::Space, false);

    // Save, then load straight back.
    session.input.set_key(Key::KeyO, true);
    session.tick(TICK, &save_path);
    session.input.set_key(Key::KeyO, false);
    session.input.set_key(Key::KeyL, true);
    session.tick(TICK, &save_path);
    session.input.set_key(Key::KeyL, false);
    session.tick(TICK, &save_path);

    log::info!(
        "voxel demo done: player at {:?}, grounded: {}",
        session.player.position,
        session.player.grounded
    );
}
