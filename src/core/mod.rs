//! # Core Utilities
//!
//! Plumbing shared by both game variants: the in-game day/time clock and the
//! engine-agnostic input tracker.

pub mod clock;
pub mod input;

pub use clock::GameClock;
pub use input::{InputTracker, Key, KeyState};
