// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temporary override of the schedule.

use std::time::Duration;

use serde::Serialize;

use crate::types::Settings;

/// An override that is currently in effect.
///
/// This is a snapshot: the fixture counts `seconds_left` down on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interruption {
    setting: Settings,
    duration: u32,
    seconds_left: i64,
}

impl Interruption {
    /// Creates an interruption snapshot.
    ///
    /// `duration` is the total length in minutes.
    #[must_use]
    pub const fn new(setting: Settings, duration: u32, seconds_left: i64) -> Self {
        Self {
            setting,
            duration,
            seconds_left,
        }
    }

    /// Returns the settings applied while interrupted.
    #[must_use]
    pub const fn setting(&self) -> Settings {
        self.setting
    }

    /// Returns the total duration in minutes.
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Returns the seconds left as reported by the fixture.
    #[must_use]
    pub const fn seconds_left(&self) -> i64 {
        self.seconds_left
    }

    /// Returns the time left, treating negative counts as zero.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.seconds_left).unwrap_or(0))
    }
}
