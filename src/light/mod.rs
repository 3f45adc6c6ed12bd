// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The light aggregate and its parts.
//!
//! A [`Light`] is what a fixture reports about itself: the schedule it
//! follows and, while one is running, the [`Interruption`] overriding it.
//! Values are usually obtained from [`crate::payload::decode_light`].

mod interruption;
mod schedule;

pub use interruption::Interruption;
pub use schedule::{Schedule, ScheduleChanges};

use serde::Serialize;

use crate::types::{LightMode, Settings};

/// Current state of a light fixture.
///
/// # Examples
///
/// ```
/// use grove_light::payload::parse_light;
///
/// let light = parse_light(r#"{
///     "mode": "SCHED_SS",
///     "sched": {"day": [10, 100], "night": [0, 100], "times": [21600, 25200, 64800, 72000]}
/// }"#).unwrap();
///
/// assert!(!light.is_interrupted());
/// assert_eq!(light.schedule().printable_range(), "06:00 - 20:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Light {
    mode: LightMode,
    schedule: Schedule,
    interruption: Option<Interruption>,
}

impl Light {
    /// Creates a light state.
    #[must_use]
    pub const fn new(
        mode: LightMode,
        schedule: Schedule,
        interruption: Option<Interruption>,
    ) -> Self {
        Self {
            mode,
            schedule,
            interruption,
        }
    }

    /// Returns the reported mode.
    #[must_use]
    pub const fn mode(&self) -> LightMode {
        self.mode
    }

    /// Returns the schedule.
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the active interruption, if any.
    #[must_use]
    pub const fn interruption(&self) -> Option<&Interruption> {
        self.interruption.as_ref()
    }

    /// Returns true while an interruption is active.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interruption.is_some()
    }

    /// Returns the settings the fixture is aiming for.
    ///
    /// This is the interruption setting when interrupted, otherwise the
    /// schedule's day settings.
    #[must_use]
    pub fn active_settings(&self) -> Settings {
        self.interruption
            .map_or(self.schedule.day(), |inter| inter.setting())
    }
}
