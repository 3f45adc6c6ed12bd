// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `grove_light` - Schedule model and status decoding for grow-light fixtures.
//!
//! A grow-light cycles through sunrise, day, sunset and night every 24 hours
//! and can be temporarily overridden by an interruption (a preset or a
//! manual setting). This library:
//!
//! - **Decodes** the JSON status a fixture reports into a validated [`Light`]
//! - **Edits** schedules with [`Schedule::with_changes`], keeping at least an
//!   hour between sunrise and night
//! - **Formats** phase boundaries as `HH:MM` for display
//!
//! It performs no I/O: callers supply the payload and consume the values.
//!
//! # Quick Start
//!
//! ```
//! use grove_light::{ScheduleChanges, parse_light};
//! use grove_light::types::Seconds;
//!
//! # fn main() -> grove_light::Result<()> {
//! let light = parse_light(r#"{
//!     "mode": "SCHED_SS",
//!     "sched": {"day": [10, 100], "night": [0, 100], "times": [21600, 25200, 64800, 72000]}
//! }"#)?;
//!
//! let edited = light
//!     .schedule()
//!     .with_changes(&ScheduleChanges::new().with_day_length(Seconds::from_hms(12, 0, 0)))?;
//! assert_eq!(edited.printable_range(), "06:00 - 18:00");
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Decoding and rejected edits are reported through [`tracing`] at `debug`
//! and `trace` level. Install a subscriber in the application to see them.

pub mod error;
pub mod light;
pub mod payload;
pub mod types;

pub use error::{Error, ParseError, Result, ScheduleError};
pub use light::{Interruption, Light, Schedule, ScheduleChanges};
pub use payload::{decode_interruption, decode_light, decode_schedule, parse_light};
pub use types::{DAY_LENGTH, LightMode, Location, Preset, Seconds, Settings};
