// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Daily light schedule and schedule editing.
//!
//! A schedule cycles through four phases: sunrise, day, sunset and night.
//! Each phase starts at a boundary expressed as [`Seconds`] since midnight.
//! Sunrise and night must always be at least one hour apart.

use serde::Serialize;

use crate::error::ScheduleError;
use crate::types::{Seconds, Settings};

/// Day/night settings and the four phase boundaries of a fixture.
///
/// # Examples
///
/// ```
/// use grove_light::light::{Schedule, ScheduleChanges};
/// use grove_light::types::{Seconds, Settings};
///
/// let schedule = Schedule::new(
///     Settings::new(10, 100),
///     Settings::new(0, 100),
///     Seconds::from_hms(6, 0, 0),
///     Seconds::from_hms(7, 0, 0),
///     Seconds::from_hms(18, 0, 0),
///     Seconds::from_hms(20, 0, 0),
/// )
/// .unwrap();
/// assert_eq!(schedule.printable_range(), "06:00 - 20:00");
///
/// let longer = schedule
///     .with_changes(&ScheduleChanges::new().with_day_length(Seconds::from_hms(16, 0, 0)))
///     .unwrap();
/// assert_eq!(longer.printable_range(), "06:00 - 22:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Schedule {
    day: Settings,
    night: Settings,
    sunrise_begins: Seconds,
    day_begins: Seconds,
    sunset_begins: Seconds,
    night_begins: Seconds,
}

impl Schedule {
    /// Minimum separation between sunrise and night.
    pub const MIN_DAY_LENGTH: Seconds = Seconds::new(60 * 60);

    /// How long before night the sunset phase starts after a day length edit.
    pub const SUNSET_LEAD: Seconds = Seconds::new(30 * 60);

    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::DayLengthTooShort`] if `sunrise_begins` and
    /// `night_begins` are less than [`Self::MIN_DAY_LENGTH`] apart.
    pub fn new(
        day: Settings,
        night: Settings,
        sunrise_begins: Seconds,
        day_begins: Seconds,
        sunset_begins: Seconds,
        night_begins: Seconds,
    ) -> Result<Self, ScheduleError> {
        if !is_long_enough(sunrise_begins, night_begins) {
            return Err(ScheduleError::DayLengthTooShort {
                sunrise_begins,
                night_begins,
            });
        }
        Ok(Self {
            day,
            night,
            sunrise_begins,
            day_begins,
            sunset_begins,
            night_begins,
        })
    }

    /// Returns the settings used during the day.
    #[must_use]
    pub const fn day(&self) -> Settings {
        self.day
    }

    /// Returns the settings used during the night.
    #[must_use]
    pub const fn night(&self) -> Settings {
        self.night
    }

    /// Returns when sunrise begins.
    #[must_use]
    pub const fn sunrise_begins(&self) -> Seconds {
        self.sunrise_begins
    }

    /// Returns when the day phase begins.
    #[must_use]
    pub const fn day_begins(&self) -> Seconds {
        self.day_begins
    }

    /// Returns when sunset begins.
    #[must_use]
    pub const fn sunset_begins(&self) -> Seconds {
        self.sunset_begins
    }

    /// Returns when night begins.
    #[must_use]
    pub const fn night_begins(&self) -> Seconds {
        self.night_begins
    }

    /// Returns the raw distance from sunrise to night.
    ///
    /// Negative when night falls numerically before sunrise, i.e. the lit
    /// period spans midnight.
    #[must_use]
    pub fn day_length(&self) -> Seconds {
        Seconds::new(
            self.night_begins
                .value()
                .saturating_sub(self.sunrise_begins.value()),
        )
    }

    /// Returns `"<sunrise> - <night>"` as `HH:MM` times.
    ///
    /// Returns an empty string if either boundary cannot be formatted.
    #[must_use]
    pub fn printable_range(&self) -> String {
        match (
            self.sunrise_begins.to_printable_time(),
            self.night_begins.to_printable_time(),
        ) {
            (Some(sunrise), Some(night)) => format!("{sunrise} - {night}"),
            _ => String::new(),
        }
    }

    /// Returns a new schedule with the given changes applied.
    ///
    /// Intensity and color replace the day settings. A new sunrise is taken
    /// as is. A new day length moves night to `sunrise + day_length` and
    /// sunset to half an hour before night, both folded into the cycle.
    /// Night settings and the day boundary are never changed.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::DayLengthTooShort`] if a requested day length
    /// is below [`Self::MIN_DAY_LENGTH`], or if the resulting sunrise and
    /// night are less than [`Self::MIN_DAY_LENGTH`] apart. That distance is
    /// measured without wrapping around midnight.
    pub fn with_changes(&self, changes: &ScheduleChanges) -> Result<Self, ScheduleError> {
        let day = Settings::new(
            changes.intensity.unwrap_or(self.day.intensity()),
            changes.color.unwrap_or(self.day.color_temp()),
        );

        let sunrise_begins = changes.sunrise_begins.unwrap_or(self.sunrise_begins);

        let (sunset_begins, night_begins) = match changes.day_length {
            Some(day_length) => {
                let night_begins =
                    (sunrise_begins.normalized() + day_length.normalized()).normalized();
                let sunset_begins = (night_begins - Self::SUNSET_LEAD).normalized();
                (sunset_begins, night_begins)
            }
            None => (self.sunset_begins, self.night_begins),
        };

        let requested_too_short = changes
            .day_length
            .is_some_and(|day_length| day_length < Self::MIN_DAY_LENGTH);

        if requested_too_short || !is_long_enough(sunrise_begins, night_begins) {
            tracing::debug!(
                sunrise = %sunrise_begins,
                night = %night_begins,
                "Rejected schedule change"
            );
            return Err(ScheduleError::DayLengthTooShort {
                sunrise_begins,
                night_begins,
            });
        }

        Ok(Self {
            day,
            night: self.night,
            sunrise_begins,
            day_begins: self.day_begins,
            sunset_begins,
            night_begins,
        })
    }
}

fn is_long_enough(sunrise_begins: Seconds, night_begins: Seconds) -> bool {
    night_begins.value().abs_diff(sunrise_begins.value())
        >= Schedule::MIN_DAY_LENGTH.value().unsigned_abs()
}

/// Edits to apply with [`Schedule::with_changes`].
///
/// Every field is optional; `None` keeps the current value.
///
/// # Examples
///
/// ```
/// use grove_light::light::ScheduleChanges;
/// use grove_light::types::Seconds;
///
/// let changes = ScheduleChanges::new()
///     .with_intensity(8)
///     .with_sunrise_begins(Seconds::from_hms(5, 30, 0));
/// assert_eq!(changes.intensity, Some(8));
/// assert!(changes.day_length.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleChanges {
    /// New day intensity.
    pub intensity: Option<u16>,
    /// New day color temperature.
    pub color: Option<u16>,
    /// New sunrise boundary.
    pub sunrise_begins: Option<Seconds>,
    /// New distance from sunrise to night.
    pub day_length: Option<Seconds>,
}

impl ScheduleChanges {
    /// Creates an empty set of changes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day intensity.
    #[must_use]
    pub fn with_intensity(mut self, intensity: u16) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Sets the day color temperature.
    #[must_use]
    pub fn with_color(mut self, color: u16) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the sunrise boundary.
    #[must_use]
    pub fn with_sunrise_begins(mut self, sunrise_begins: Seconds) -> Self {
        self.sunrise_begins = Some(sunrise_begins);
        self
    }

    /// Sets the day length.
    #[must_use]
    pub fn with_day_length(mut self, day_length: Seconds) -> Self {
        self.day_length = Some(day_length);
        self
    }

    /// Returns true if no change is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intensity.is_none()
            && self.color.is_none()
            && self.sunrise_begins.is_none()
            && self.day_length.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule::new(
            Settings::new(10, 100),
            Settings::new(0, 100),
            Seconds::new(21_600),
            Seconds::new(25_200),
            Seconds::new(64_800),
            Seconds::new(72_000),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_short_day() {
        let result = Schedule::new(
            Settings::default(),
            Settings::default(),
            Seconds::new(21_600),
            Seconds::new(21_600),
            Seconds::new(21_600),
            Seconds::new(23_400),
        );
        assert!(matches!(
            result,
            Err(ScheduleError::DayLengthTooShort { .. })
        ));
    }

    #[test]
    fn new_accepts_exactly_one_hour() {
        let result = Schedule::new(
            Settings::default(),
            Settings::default(),
            Seconds::new(21_600),
            Seconds::new(21_600),
            Seconds::new(23_400),
            Seconds::new(25_200),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn printable_range() {
        assert_eq!(sample().printable_range(), "06:00 - 20:00");
    }

    #[test]
    fn printable_range_empty_when_unformattable() {
        let schedule = sample()
            .with_changes(&ScheduleChanges::new().with_sunrise_begins(Seconds::new(-7_200)))
            .unwrap();
        assert_eq!(schedule.printable_range(), "");
    }

    #[test]
    fn no_changes_returns_equal_schedule() {
        let schedule = sample();
        let changes = ScheduleChanges::new();
        assert!(changes.is_empty());
        assert_eq!(schedule.with_changes(&changes).unwrap(), schedule);
    }

    #[test]
    fn with_changes_is_pure() {
        let schedule = sample();
        let changes = ScheduleChanges::new()
            .with_intensity(4)
            .with_day_length(Seconds::new(36_000));
        assert_eq!(
            schedule.with_changes(&changes).unwrap(),
            schedule.with_changes(&changes).unwrap()
        );
    }

    #[test]
    fn intensity_and_color_only_touch_day() {
        let schedule = sample();
        let changed = schedule
            .with_changes(&ScheduleChanges::new().with_intensity(7).with_color(30))
            .unwrap();

        assert_eq!(changed.day(), Settings::new(7, 30));
        assert_eq!(changed.night(), schedule.night());
        assert_eq!(changed.sunrise_begins(), schedule.sunrise_begins());
        assert_eq!(changed.sunset_begins(), schedule.sunset_begins());
        assert_eq!(changed.night_begins(), schedule.night_begins());
    }

    #[test]
    fn partial_settings_change_keeps_other_value() {
        let changed = sample()
            .with_changes(&ScheduleChanges::new().with_color(55))
            .unwrap();
        assert_eq!(changed.day(), Settings::new(10, 55));
    }

    #[test]
    fn day_length_recomputes_sunset_and_night() {
        let schedule = sample();
        let changed = schedule
            .with_changes(&ScheduleChanges::new().with_day_length(Seconds::new(43_200)))
            .unwrap();

        assert_eq!(changed.night_begins(), Seconds::new(64_800));
        assert_eq!(changed.sunset_begins(), Seconds::new(63_000));
        assert_eq!(changed.day_begins(), schedule.day_begins());
        assert_eq!(changed.night(), schedule.night());
    }

    #[test]
    fn day_length_wraps_past_midnight() {
        let changed = sample()
            .with_changes(
                &ScheduleChanges::new()
                    .with_sunrise_begins(Seconds::new(72_000))
                    .with_day_length(Seconds::new(36_000)),
            )
            .unwrap();

        // 20:00 + 10h = 06:00 next day
        assert_eq!(changed.night_begins(), Seconds::new(21_600));
        assert_eq!(changed.sunset_begins(), Seconds::new(19_800));
        assert_eq!(changed.printable_range(), "20:00 - 06:00");
    }

    #[test]
    fn sunset_wraps_below_midnight() {
        let changed = sample()
            .with_changes(
                &ScheduleChanges::new()
                    .with_sunrise_begins(Seconds::new(72_000))
                    .with_day_length(Seconds::new(14_400 + 600)),
            )
            .unwrap();

        assert_eq!(changed.night_begins(), Seconds::new(600));
        assert_eq!(changed.sunset_begins(), Seconds::new(85_200));
    }

    #[test]
    fn sunrise_without_day_length_keeps_night() {
        let changed = sample()
            .with_changes(&ScheduleChanges::new().with_sunrise_begins(Seconds::new(18_000)))
            .unwrap();

        assert_eq!(changed.sunrise_begins(), Seconds::new(18_000));
        assert_eq!(changed.night_begins(), Seconds::new(72_000));
        assert_eq!(changed.sunset_begins(), Seconds::new(64_800));
    }

    #[test]
    fn half_hour_day_is_too_short() {
        let schedule = sample();
        for sunrise in [0, 21_600, 43_200, 84_000, 86_000] {
            let result = schedule.with_changes(
                &ScheduleChanges::new()
                    .with_sunrise_begins(Seconds::new(sunrise))
                    .with_day_length(Seconds::new(1_800)),
            );
            assert!(
                matches!(result, Err(ScheduleError::DayLengthTooShort { .. })),
                "sunrise {sunrise} should be rejected"
            );
        }
    }

    #[test]
    fn sunrise_moved_next_to_night_is_rejected() {
        let result =
            sample().with_changes(&ScheduleChanges::new().with_sunrise_begins(Seconds::new(70_000)));
        assert_eq!(
            result,
            Err(ScheduleError::DayLengthTooShort {
                sunrise_begins: Seconds::new(70_000),
                night_begins: Seconds::new(72_000),
            })
        );
    }

    #[test]
    fn closeness_across_midnight_is_not_detected() {
        // 23:45 and 00:15 are half an hour apart on the clock, but the
        // check compares raw values.
        let schedule = Schedule::new(
            Settings::default(),
            Settings::default(),
            Seconds::new(85_500),
            Seconds::new(86_000),
            Seconds::new(86_200),
            Seconds::new(900),
        )
        .unwrap();

        let changed = schedule
            .with_changes(&ScheduleChanges::new().with_intensity(3))
            .unwrap();
        assert_eq!(changed.night_begins(), Seconds::new(900));
    }

    #[test]
    fn short_day_length_rejected_near_midnight() {
        let result = sample().with_changes(
            &ScheduleChanges::new()
                .with_sunrise_begins(Seconds::new(85_500))
                .with_day_length(Seconds::new(1_800)),
        );
        assert!(matches!(
            result,
            Err(ScheduleError::DayLengthTooShort { .. })
        ));
    }

    #[test]
    fn one_hour_day_length_is_accepted() {
        let changed = sample()
            .with_changes(&ScheduleChanges::new().with_day_length(Schedule::MIN_DAY_LENGTH))
            .unwrap();
        assert_eq!(changed.night_begins(), Seconds::new(25_200));
        assert_eq!(changed.sunset_begins(), Seconds::new(23_400));
    }

    #[test]
    fn extreme_sunrise_with_day_length() {
        let changed = sample()
            .with_changes(
                &ScheduleChanges::new()
                    .with_sunrise_begins(Seconds::new(i64::MAX))
                    .with_day_length(Seconds::new(7_200)),
            )
            .unwrap();

        // i64::MAX folds to 55_807 within the day
        assert_eq!(changed.night_begins(), Seconds::new(63_007));
        assert_eq!(changed.sunset_begins(), Seconds::new(61_207));
        assert_eq!(changed.sunrise_begins(), Seconds::new(i64::MAX));
    }

    #[test]
    fn extreme_day_length() {
        let changed = sample()
            .with_changes(&ScheduleChanges::new().with_day_length(Seconds::new(i64::MAX)))
            .unwrap();
        assert!(changed.night_begins().is_normalized());
    }

    #[test]
    fn extreme_boundaries_do_not_overflow() {
        let schedule = Schedule::new(
            Settings::default(),
            Settings::default(),
            Seconds::new(i64::MIN),
            Seconds::MIDNIGHT,
            Seconds::MIDNIGHT,
            Seconds::new(i64::MAX),
        )
        .unwrap();
        assert_eq!(schedule.day_length(), Seconds::new(i64::MAX));

        let result = Schedule::new(
            Settings::default(),
            Settings::default(),
            Seconds::new(i64::MIN),
            Seconds::MIDNIGHT,
            Seconds::MIDNIGHT,
            Seconds::new(i64::MIN + 10),
        );
        assert!(result.is_err());
    }

    #[test]
    fn day_length_accessor() {
        assert_eq!(sample().day_length(), Seconds::new(50_400));
    }
}
