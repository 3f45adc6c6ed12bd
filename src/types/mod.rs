// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the schedule model and the payload decoder.
//!
//! # Types
//!
//! - [`Seconds`] - Time of day in seconds, with wraparound at [`DAY_LENGTH`]
//! - [`Settings`] - Intensity and color temperature pair
//! - [`Preset`] - Named settings with an auto-revert duration
//! - [`LightMode`] - Operating mode reported by the fixture
//! - [`Location`] - Installation site of a fixture

mod location;
mod mode;
mod seconds;
mod settings;

pub use location::Location;
pub use mode::LightMode;
pub use seconds::{DAY_LENGTH, Seconds};
pub use settings::{Preset, Settings};
