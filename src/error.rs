// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `grove_light` library.
//!
//! Decoding failures ([`ParseError`]) and schedule edit failures
//! ([`ScheduleError`]) are separate types so that callers can present an
//! edit rejection as a validation message rather than a transport problem.

use thiserror::Error;

use crate::types::Seconds;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while decoding a status payload.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A schedule edit was rejected.
    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Errors related to decoding device status payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required key is absent or does not have the expected shape.
    #[error("missing field in payload: {0}")]
    MissingField(String),

    /// A field is present but its value is not one of the recognized set.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The offending field.
        field: String,
        /// The value that was rejected.
        value: String,
    },

    /// A field has the expected shape but unusable content.
    #[error("invalid field {field}: {message}")]
    InvalidField {
        /// The offending field.
        field: String,
        /// Description of the problem.
        message: String,
    },

    /// The payload does not have the expected overall layout.
    #[error("unexpected payload format: {0}")]
    UnexpectedFormat(String),
}

impl ParseError {
    /// Returns the name of the field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field)
            | Self::InvalidValue { field, .. }
            | Self::InvalidField { field, .. } => Some(field),
            Self::Json(_) | Self::UnexpectedFormat(_) => None,
        }
    }
}

/// Errors raised when editing a schedule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// Less than one hour would separate sunrise from night.
    #[error("day length too short: sunrise at {sunrise_begins}, night at {night_begins}")]
    DayLengthTooShort {
        /// The sunrise boundary that was computed.
        sunrise_begins: Seconds,
        /// The night boundary that was computed.
        night_begins: Seconds,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
