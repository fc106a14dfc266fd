//! # Voxel Player Controller
//!
//! Continuous movement with gravity and a ground-snap probe. Each tick the
//! controller applies gravity unconditionally, integrates the position, then
//! casts a short probe below the feet; hitting a solid cell grounds the
//! player, zeroes vertical velocity, and snaps the feet to the cell top.
//! Transparent kinds (air, glass) never ground the player.

use cgmath::Point3;

use super::world::{surface_height, VoxelWorld};

/// Downward acceleration, cells per second squared.
pub const GRAVITY: f32 = -24.0;

/// Initial upward velocity of a jump, cells per second.
pub const JUMP_SPEED: f32 = 8.0;

/// Horizontal movement speed, cells per second.
pub const MOVE_SPEED: f32 = 4.5;

/// Length of the downward ground probe from the feet, in cells.
pub const GROUND_PROBE: f32 = 0.1;

/// Falling below this height triggers a respawn.
pub const RESPAWN_Y: f32 = -32.0;

/// Player body height in cells, for horizontal collision.
const BODY_HEIGHT: i32 = 2;

/// Movement intent for one tick, already edge-filtered by the session:
/// `jump` is true only on the tick the jump key went down.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    /// Move towards negative z.
    pub forward: bool,
    /// Move towards positive z.
    pub backward: bool,
    /// Move towards negative x.
    pub left: bool,
    /// Move towards positive x.
    pub right: bool,
    /// Jump, edge-triggered.
    pub jump: bool,
}

/// The voxel variant's player: feet position, vertical velocity, grounded
/// flag, and the selected hotbar slot.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelPlayer {
    /// Feet position in world space.
    pub position: Point3<f32>,
    /// Vertical velocity, cells per second. Zero while grounded.
    pub vertical_velocity: f32,
    /// Whether the ground probe hit a solid cell last tick.
    pub grounded: bool,
    /// Selected hotbar slot index.
    pub selected_slot: usize,
}

impl VoxelPlayer {
    /// Spawns the player centered on the origin column, just above the
    /// terrain surface.
    pub fn spawn() -> Self {
        VoxelPlayer {
            position: spawn_position(),
            vertical_velocity: 0.0,
            grounded: false,
            selected_slot: 0,
        }
    }

    /// Advances the player by one tick.
    ///
    /// Order matters: jump (edge-triggered, grounded only), then gravity,
    /// then integration, then the ground probe, then the respawn guard.
    /// Gravity is applied every tick regardless of ground state and the
    /// probe corrects for it, which keeps the grounded check self-healing
    /// when the block underneath is mined away.
    pub fn update(&mut self, dt: f32, intent: &MoveIntent, world: &VoxelWorld) {
        self.step_horizontal(dt, intent, world);

        if intent.jump && self.grounded {
            self.vertical_velocity = JUMP_SPEED;
            self.grounded = false;
        }

        self.vertical_velocity += GRAVITY * dt;
        self.position.y += self.vertical_velocity * dt;

        self.probe_ground(world);

        if self.position.y < RESPAWN_Y {
            log::debug!("player fell below y={RESPAWN_Y}, respawning");
            self.position = spawn_position();
            self.vertical_velocity = 0.0;
            self.grounded = false;
        }
    }

    /// Axis-separated horizontal movement with solid-cell collision.
    fn step_horizontal(&mut self, dt: f32, intent: &MoveIntent, world: &VoxelWorld) {
        let mut dx = 0.0;
        let mut dz = 0.0;
        if intent.left {
            dx -= MOVE_SPEED * dt;
        }
        if intent.right {
            dx += MOVE_SPEED * dt;
        }
        if intent.forward {
            dz -= MOVE_SPEED * dt;
        }
        if intent.backward {
            dz += MOVE_SPEED * dt;
        }

        let candidate_x = self.position.x + dx;
        if !self.body_collides(candidate_x, self.position.y, self.position.z, world) {
            self.position.x = candidate_x;
        }
        let candidate_z = self.position.z + dz;
        if !self.body_collides(self.position.x, self.position.y, candidate_z, world) {
            self.position.z = candidate_z;
        }
    }

    /// Whether a body standing at the candidate position overlaps any solid
    /// cell. Checks one cell per unit of body height at the feet column.
    fn body_collides(&self, x: f32, y: f32, z: f32, world: &VoxelWorld) -> bool {
        let cell_x = x.floor() as i32;
        let cell_z = z.floor() as i32;
        let feet_y = y.floor() as i32;
        (0..BODY_HEIGHT).any(|layer| world.is_solid(Point3::new(cell_x, feet_y + layer, cell_z)))
    }

    /// Casts the downward probe and snaps onto solid ground.
    ///
    /// Only runs while not moving upward, so a fresh jump is not cancelled
    /// by the probe re-grounding the player on the block it just left.
    fn probe_ground(&mut self, world: &VoxelWorld) {
        if self.vertical_velocity > 0.0 {
            self.grounded = false;
            return;
        }

        let cell_x = self.position.x.floor() as i32;
        let cell_z = self.position.z.floor() as i32;
        let probe_cell_y = (self.position.y - GROUND_PROBE).floor() as i32;

        if world.is_solid(Point3::new(cell_x, probe_cell_y, cell_z)) {
            self.grounded = true;
            self.vertical_velocity = 0.0;
            self.position.y = (probe_cell_y + 1) as f32;
        } else {
            self.grounded = false;
        }
    }
}

/// The spawn point: origin column, two cells above the surface.
pub fn spawn_position() -> Point3<f32> {
    Point3::new(0.5, (surface_height(0, 0) + 2) as f32, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BlockKind;

    const DT: f32 = 1.0 / 60.0;

    fn flat_world() -> VoxelWorld {
        let mut world = VoxelWorld::new();
        for x in -4..4 {
            for z in -4..4 {
                world.set_block(Point3::new(x, 0, z), BlockKind::Stone);
            }
        }
        world
    }

    fn resting_player(y: f32) -> VoxelPlayer {
        VoxelPlayer {
            position: Point3::new(0.5, y, 0.5),
            vertical_velocity: 0.0,
            grounded: false,
            selected_slot: 0,
        }
    }

    #[test]
    fn at_rest_just_above_ground_is_grounded_after_one_tick() {
        let world = flat_world();
        let mut player = resting_player(1.01);
        player.update(DT, &MoveIntent::default(), &world);
        assert!(player.grounded);
        assert_eq!(player.vertical_velocity, 0.0);
        assert_eq!(player.position.y, 1.0);
    }

    #[test]
    fn gravity_accelerates_an_airborne_player() {
        let world = flat_world();
        let mut player = resting_player(5.0);
        player.update(DT, &MoveIntent::default(), &world);
        assert!(!player.grounded);
        assert!(player.vertical_velocity < 0.0);
        assert!(player.position.y < 5.0);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let world = flat_world();
        let jump = MoveIntent {
            jump: true,
            ..MoveIntent::default()
        };

        let mut airborne = resting_player(5.0);
        airborne.update(DT, &jump, &world);
        assert!(airborne.vertical_velocity < 0.0);

        let mut grounded = resting_player(1.0);
        grounded.update(DT, &MoveIntent::default(), &world);
        assert!(grounded.grounded);
        grounded.update(DT, &jump, &world);
        assert!(grounded.vertical_velocity > 0.0);
        assert!(!grounded.grounded);
    }

    #[test]
    fn glass_does_not_ground_the_player() {
        let mut world = VoxelWorld::new();
        world.set_block(Point3::new(0, 0, 0), BlockKind::Glass);
        let mut player = resting_player(1.01);
        player.update(DT, &MoveIntent::default(), &world);
        assert!(!player.grounded);
    }

    #[test]
    fn solid_cells_block_horizontal_movement() {
        let mut world = flat_world();
        world.set_block(Point3::new(1, 1, 0), BlockKind::Stone);
        world.set_block(Point3::new(1, 2, 0), BlockKind::Stone);

        let mut player = resting_player(1.0);
        player.update(DT, &MoveIntent::default(), &world);
        let intent = MoveIntent {
            right: true,
            ..MoveIntent::default()
        };
        for _ in 0..120 {
            player.update(DT, &intent, &world);
        }
        assert!(player.position.x < 1.0);
    }

    #[test]
    fn falling_out_of_the_world_respawns() {
        let world = VoxelWorld::new();
        let mut player = resting_player(RESPAWN_Y + 0.5);
        player.update(1.0, &MoveIntent::default(), &world);
        assert_eq!(player.position, spawn_position());
        assert_eq!(player.vertical_velocity, 0.0);
    }
}
