//! # Game Clock
//!
//! An accumulating in-game clock. Time of day runs over `[0, 24)` hours and
//! the day counter increments on wraparound. Crops derive their growth from
//! the day counter alone, so the clock is the only thing growth state depends
//! on.

/// Hours in one in-game day.
pub const HOURS_PER_DAY: f32 = 24.0;

/// Hour at which night ends.
pub const DAWN_HOUR: f32 = 6.0;

/// Hour at which night begins.
pub const DUSK_HOUR: f32 = 18.0;

/// The in-game day/time accumulator.
///
/// Wraparound rule: `time_of_day >= 24.0` rolls the excess into the next day
/// and increments `day`. The boundary is inclusive — advancing to exactly
/// 24.0 starts the next day at 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    /// The current day index, starting at 1.
    pub day: u32,
    /// Hours into the current day, always in `[0, 24)`.
    pub time_of_day: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// Creates a clock at 8:00 on day 1, the session start time.
    pub fn new() -> Self {
        GameClock {
            day: 1,
            time_of_day: 8.0,
        }
    }

    /// Restores a clock from persisted scalars.
    pub fn restore(day: u32, time_of_day: f32) -> Self {
        GameClock { day, time_of_day }
    }

    /// Advances the clock by `hours` of in-game time.
    ///
    /// A single large step can roll over several days; the loop keeps
    /// `time_of_day` inside `[0, 24)` regardless of step size.
    pub fn advance(&mut self, hours: f32) {
        self.time_of_day += hours;
        while self.time_of_day >= HOURS_PER_DAY {
            self.time_of_day -= HOURS_PER_DAY;
            self.day += 1;
        }
    }

    /// Whether the current hour falls in the night window.
    pub fn is_night(&self) -> bool {
        self.time_of_day < DAWN_HOUR || self.time_of_day > DUSK_HOUR
    }

    /// How deep into the night the clock is, in `[0, 1]`.
    ///
    /// Zero during daytime, rising linearly towards midnight from either
    /// edge of the night window. The host renderer scales its darkness
    /// overlay by this.
    pub fn night_factor(&self) -> f32 {
        if self.time_of_day < DAWN_HOUR {
            (DAWN_HOUR - self.time_of_day) / DAWN_HOUR
        } else if self.time_of_day > DUSK_HOUR {
            (self.time_of_day - DUSK_HOUR) / (HOURS_PER_DAY - DUSK_HOUR)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_within_a_day() {
        let mut clock = GameClock::new();
        clock.advance(2.5);
        assert_eq!(clock.day, 1);
        assert!((clock.time_of_day - 10.5).abs() < 1e-6);
    }

    #[test]
    fn wraparound_at_exactly_24_starts_the_next_day() {
        let mut clock = GameClock::restore(1, 0.0);
        clock.advance(24.0);
        assert_eq!(clock.day, 2);
        assert_eq!(clock.time_of_day, 0.0);
    }

    #[test]
    fn large_step_rolls_over_multiple_days() {
        let mut clock = GameClock::restore(1, 8.0);
        clock.advance(48.0);
        assert_eq!(clock.day, 3);
        assert!((clock.time_of_day - 8.0).abs() < 1e-4);
    }

    #[test]
    fn night_window_edges() {
        assert!(GameClock::restore(1, 5.9).is_night());
        assert!(!GameClock::restore(1, 6.0).is_night());
        assert!(!GameClock::restore(1, 18.0).is_night());
        assert!(GameClock::restore(1, 18.1).is_night());
    }

    #[test]
    fn night_factor_is_zero_during_the_day() {
        assert_eq!(GameClock::restore(1, 12.0).night_factor(), 0.0);
        assert!(GameClock::restore(1, 21.0).night_factor() > 0.0);
        assert!(GameClock::restore(1, 1.0).night_factor() > 0.0);
    }
}
