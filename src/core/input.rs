//! # Input Tracking
//!
//! Engine-agnostic key state tracking. The host (a windowing loop, or the
//! scripted demo binary) feeds raw down/up flags into an `InputTracker`; the
//! sessions read per-key `KeyState` transitions from it. Keeping previous and
//! current state side by side is what makes edge-triggered actions (jump,
//! save, slot selection) distinguishable from held movement keys.

use std::collections::HashMap;

/// The keys the sessions care about, decoupled from any windowing library's
/// key code type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move forward / up.
    KeyW,
    /// Move left.
    KeyA,
    /// Move backward / down.
    KeyS,
    /// Move right.
    KeyD,
    /// Till the targeted tile.
    KeyE,
    /// Load the save file.
    KeyL,
    /// Write the save file.
    KeyO,
    /// Quit the session (no implicit save).
    KeyQ,
    /// Primary action (tile variant) / jump (voxel variant).
    Space,
    /// Select hotbar slot 1.
    Digit1,
    /// Select hotbar slot 2.
    Digit2,
    /// Select hotbar slot 3.
    Digit3,
    /// Select hotbar slot 4.
    Digit4,
    /// Select hotbar slot 5.
    Digit5,
}

/// Every key the tracker maintains state for.
pub const TRACKED_KEYS: [Key; 14] = [
    Key::KeyW,
    Key::KeyA,
    Key::KeyS,
    Key::KeyD,
    Key::KeyE,
    Key::KeyL,
    Key::KeyO,
    Key::KeyQ,
    Key::Space,
    Key::Digit1,
    Key::Digit2,
    Key::Digit3,
    Key::Digit4,
    Key::Digit5,
];

/// The hotbar slot keys in slot order.
pub const SLOT_KEYS: [Key; 5] = [
    Key::Digit1,
    Key::Digit2,
    Key::Digit3,
    Key::Digit4,
    Key::Digit5,
];

/// Represents the state of a key across a tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    /// Key is not pressed.
    #[default]
    NotPressed,
    /// Key went down this tick.
    Pressed,
    /// Key has been down for multiple ticks.
    Held,
    /// Key went up this tick.
    Released,
}

impl KeyState {
    /// Whether the key is actively down (pressed or held).
    pub fn is_active(&self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Held)
    }

    /// Whether the key went down this tick. Edge-triggered actions key off
    /// this.
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, KeyState::Pressed)
    }

    /// Derives the transition state from the previous and current raw flags.
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => KeyState::Pressed,
            (true, true) => KeyState::Held,
            (true, false) => KeyState::Released,
            (false, false) => KeyState::NotPressed,
        }
    }
}

/// Tracks raw key flags for the previous and current tick.
///
/// The host calls `set_key` as device events arrive, the session reads
/// `key_state` during its tick, and `end_tick` shifts current state into
/// previous state once the tick completes.
pub struct InputTracker {
    keys_old: HashMap<Key, bool>,
    keys_new: HashMap<Key, bool>,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTracker {
    /// Creates a tracker with every tracked key released.
    pub fn new() -> Self {
        let mut keys_old = HashMap::new();
        let mut keys_new = HashMap::new();
        for key in TRACKED_KEYS {
            keys_old.insert(key, false);
            keys_new.insert(key, false);
        }
        InputTracker { keys_old, keys_new }
    }

    /// Records a raw down/up flag for `key`.
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.keys_new.insert(key, down);
    }

    /// Returns the transition state of `key` for the current tick.
    pub fn key_state(&self, key: Key) -> KeyState {
        let previous = self.keys_old.get(&key).copied().unwrap_or(false);
        let current = self.keys_new.get(&key).copied().unwrap_or(false);
        KeyState::from_raw_states(previous, current)
    }

    /// Shifts current state into previous state to prepare the next tick.
    ///
    /// Must run exactly once at the end of every session tick, otherwise a
    /// held key keeps reporting `Pressed`.
    pub fn end_tick(&mut self) {
        for (key, current) in self.keys_new.iter() {
            if let Some(previous) = self.keys_old.get_mut(key) {
                *previous = *current;
            }
        }
    }
}
