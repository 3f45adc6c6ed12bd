// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of fixture status payloads.
//!
//! A fixture reports its state as a JSON object:
//!
//! ```text
//! {
//!   "mode":  "SCHED_SS" | "FADEtoSCHED" | "INTER_SS" | "FADEtoINTER" | "WAITbfINTER",
//!   "sched": { "day": [intensity, color], "night": [intensity, color],
//!              "times": [sunrise, day, sunset, night] },
//!   "inter": { "ls": [intensity, color], "dur": minutes, "secsLeft": seconds }
//! }
//! ```
//!
//! `inter` is only required in the interruption modes. Decoding is strict:
//! the first missing or malformed field aborts with a [`ParseError`] naming
//! that field.
//!
//! # Examples
//!
//! ```
//! use grove_light::payload::decode_light;
//! use grove_light::types::LightMode;
//!
//! let payload = serde_json::json!({
//!     "mode": "INTER_SS",
//!     "sched": {"day": [10, 100], "night": [0, 100], "times": [21600, 25200, 64800, 72000]},
//!     "inter": {"ls": [1, 0], "dur": 120, "secsLeft": 5400}
//! });
//!
//! let light = decode_light(&payload).unwrap();
//! assert_eq!(light.mode(), LightMode::Interruption);
//! assert_eq!(light.interruption().unwrap().duration(), 120);
//! ```

mod fields;

use serde_json::Value;

use crate::error::ParseError;
use crate::light::{Interruption, Light, Schedule};
use crate::types::{DAY_LENGTH, LightMode, Seconds, Settings};

use fields::Object;

/// Parses a JSON status payload into a [`Light`].
///
/// # Errors
///
/// Returns [`ParseError::Json`] if the text is not valid JSON, otherwise any
/// error of [`decode_light`].
pub fn parse_light(payload: &str) -> Result<Light, ParseError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_light(&value)
}

/// Decodes a status payload into a [`Light`].
///
/// # Errors
///
/// Returns [`ParseError`] if:
/// - the payload is not an object
/// - `sched`, `mode`, or (in interruption modes) `inter` is missing
/// - `mode` is not a recognized value
/// - the schedule or interruption is malformed
pub fn decode_light(payload: &Value) -> Result<Light, ParseError> {
    let map = fields::as_object(payload, "payload")?;

    let sched = fields::object(map, "sched")?;
    let mode: LightMode = fields::string(map, "mode")?.parse()?;

    tracing::trace!(mode = %mode, "Decoding light payload");

    let interruption = if mode.requires_interruption() {
        let inter = fields::object(map, "inter")?;
        Some(interruption_from(inter)?)
    } else {
        None
    };

    let schedule = schedule_from(sched)?;

    Ok(Light::new(mode, schedule, interruption))
}

/// Decodes a schedule object (the `sched` member of a status payload).
///
/// # Errors
///
/// Returns [`ParseError::MissingField`] if `day`, `night` or `times` is
/// absent or not an integer array, and [`ParseError::InvalidField`] if an
/// array is too short, holds out-of-range values (times must lie within one
/// day), or sunrise and night are less than an hour apart.
pub fn decode_schedule(value: &Value) -> Result<Schedule, ParseError> {
    schedule_from(fields::as_object(value, "schedule")?)
}

/// Decodes an interruption object (the `inter` member of a status payload).
///
/// # Errors
///
/// Returns [`ParseError::MissingField`] if `ls`, `dur` or `secsLeft` is
/// absent or of the wrong type, and [`ParseError::InvalidField`] if a value
/// is out of range.
pub fn decode_interruption(value: &Value) -> Result<Interruption, ParseError> {
    interruption_from(fields::as_object(value, "interruption")?)
}

fn schedule_from(map: &Object) -> Result<Schedule, ParseError> {
    let day = fields::raw_integer_array(map, "day")?;
    let night = fields::raw_integer_array(map, "night")?;
    let times = fields::raw_integer_array(map, "times")?;

    let day = settings_from(&fields::narrow_array::<u16>("day", &day)?, "day")?;
    let night = settings_from(&fields::narrow_array::<u16>("night", &night)?, "night")?;

    tracing::debug!(?times, "Decoded schedule times");

    let [sunrise, day_begins, sunset, night_begins, ..] = times.as_slice() else {
        return Err(ParseError::InvalidField {
            field: "times".to_string(),
            message: format!("expected 4 values, got {}", times.len()),
        });
    };

    let boundaries = [sunrise, day_begins, sunset, night_begins].map(|&value| Seconds::new(value));
    if let Some(outside) = boundaries.iter().find(|time| !time.is_normalized()) {
        return Err(ParseError::InvalidField {
            field: "times".to_string(),
            message: format!("{} is outside [0, {})", outside.value(), DAY_LENGTH),
        });
    }
    let [sunrise, day_begins, sunset, night_begins] = boundaries;

    Schedule::new(day, night, sunrise, day_begins, sunset, night_begins).map_err(|err| {
        ParseError::InvalidField {
            field: "times".to_string(),
            message: err.to_string(),
        }
    })
}

fn interruption_from(map: &Object) -> Result<Interruption, ParseError> {
    let setting = fields::raw_integer_array(map, "ls")?;
    let duration = fields::raw_integer(map, "dur")?;
    let seconds_left = fields::raw_integer(map, "secsLeft")?;

    let setting = settings_from(&fields::narrow_array::<u16>("ls", &setting)?, "ls")?;
    let duration = fields::narrow::<u32>("dur", duration)?;

    Ok(Interruption::new(setting, duration, seconds_left))
}

fn settings_from(values: &[u16], key: &str) -> Result<Settings, ParseError> {
    Settings::from_compact_form(values).map_err(|err| match err {
        ParseError::InvalidField { message, .. } => ParseError::InvalidField {
            field: key.to_string(),
            message,
        },
        other => other,
    })
}
