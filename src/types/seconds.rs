// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time-of-day arithmetic on a 24-hour cycle.
//!
//! Schedule boundaries are reported by the fixture as a number of seconds
//! since midnight. Arithmetic on them is raw (a sum may run past midnight or
//! below zero) and [`Seconds::normalized`] folds the result back into the
//! cycle.
//!
//! # Examples
//!
//! ```
//! use grove_light::types::Seconds;
//!
//! let night = Seconds::from_hms(23, 0, 0) + Seconds::from_hms(2, 0, 0);
//! assert_eq!(night.to_printable_time(), None);
//! assert_eq!(night.normalized().to_printable_time().as_deref(), Some("01:00"));
//! ```

use std::fmt;
use std::ops::{Add, Sub};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Length of one day/night cycle in seconds.
pub const DAY_LENGTH: i64 = 24 * 60 * 60;

/// A count of seconds, usually within a single day/night cycle.
///
/// Values are not forced into `[0, DAY_LENGTH)` on construction; use
/// [`normalized`](Self::normalized) after arithmetic that may cross midnight.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Seconds(i64);

impl Seconds {
    /// Midnight, the start of the cycle.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a value from a raw number of seconds.
    #[must_use]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Creates a value from hours, minutes and seconds.
    ///
    /// ```
    /// use grove_light::types::Seconds;
    ///
    /// assert_eq!(Seconds::from_hms(6, 30, 0).value(), 23_400);
    /// ```
    #[must_use]
    pub const fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }

    /// Returns the raw number of seconds.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns true if the value lies within `[0, DAY_LENGTH)`.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.0 >= 0 && self.0 < DAY_LENGTH
    }

    /// Folds the value into `[0, DAY_LENGTH)`.
    ///
    /// ```
    /// use grove_light::types::Seconds;
    ///
    /// assert_eq!(Seconds::new(90_000).normalized(), Seconds::new(3_600));
    /// assert_eq!(Seconds::new(-1_800).normalized(), Seconds::new(84_600));
    /// ```
    #[must_use]
    pub const fn normalized(self) -> Self {
        Self(self.0.rem_euclid(DAY_LENGTH))
    }

    /// Formats the value as a zero-padded 24-hour `HH:MM` string.
    ///
    /// Returns `None` when the value is outside `[0, DAY_LENGTH)`.
    ///
    /// ```
    /// use grove_light::types::Seconds;
    ///
    /// assert_eq!(Seconds::new(21_600).to_printable_time().as_deref(), Some("06:00"));
    /// assert_eq!(Seconds::new(86_400).to_printable_time(), None);
    /// ```
    #[must_use]
    pub fn to_printable_time(&self) -> Option<String> {
        if !self.is_normalized() {
            return None;
        }
        let secs = u32::try_from(self.0).ok()?;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
            .map(|time| time.format("%H:%M").to_string())
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<i64> for Seconds {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Seconds> for i64 {
    fn from(value: Seconds) -> Self {
        value.0
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_printable_time() {
            Some(time) => f.write_str(&time),
            None => write!(f, "{}s", self.0),
        }
    }
}
