//! # Crops
//!
//! A crop is a planted entity at a tile coordinate. Growth is never ticked:
//! the stage is derived on read from the current day counter, which keeps
//! growth retroactively consistent after a load (restore the day, and every
//! stage recomputes itself — no migration).

use std::collections::HashMap;

use cgmath::Point2;
use serde::{Deserialize, Serialize};

/// Days a freshly planted crop needs to mature.
pub const DEFAULT_GROW_DAYS: u32 = 3;

/// Seeds granted by harvesting a mature crop.
pub const HARVEST_SEED_YIELD: u32 = 2;

/// Dirt granted by harvesting a mature crop.
pub const HARVEST_DIRT_YIELD: u32 = 1;

/// A planted crop, identified by the day it went into the ground.
///
/// The serialized field names match the tile save format
/// (`{"planted_day": 1, "grow_days": 3}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    /// The day index this crop was planted on.
    pub planted_day: u32,
    /// Days required to reach maturity.
    pub grow_days: u32,
}

/// Mapping from tile coordinate to the crop planted there.
///
/// Keyed independently of the tile grid: a tile can simultaneously be
/// `Tilled` in the world and hold a crop here.
pub type CropMap = HashMap<Point2<i32>, Crop>;

impl Crop {
    /// Creates a crop planted on `planted_day` with the default grow time.
    pub fn new(planted_day: u32) -> Self {
        Crop {
            planted_day,
            grow_days: DEFAULT_GROW_DAYS,
        }
    }

    /// Growth progress on `current_day`, clamped to `[0, grow_days]`.
    ///
    /// Saturating on the low side covers a day counter that was restored to
    /// an earlier value than the planting day.
    pub fn stage(&self, current_day: u32) -> u32 {
        current_day.saturating_sub(self.planted_day).min(self.grow_days)
    }

    /// Whether the crop is ready to harvest on `current_day`.
    pub fn is_mature(&self, current_day: u32) -> bool {
        self.stage(current_day) == self.grow_days
    }
}
