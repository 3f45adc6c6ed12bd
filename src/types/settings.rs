// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light output settings and the named presets.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Intensity and color temperature of the light output.
///
/// On the wire a setting is the compact pair `[intensity, color_temp]`.
///
/// # Examples
///
/// ```
/// use grove_light::types::{Preset, Settings};
///
/// let settings = Settings::from_compact_form(&[10, 100]).unwrap();
/// assert_eq!(settings, Settings::preset(Preset::Harvest));
/// assert_eq!(settings.describe(), "010:100");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settings {
    intensity: u16,
    color_temp: u16,
}

impl Settings {
    /// Creates new settings.
    #[must_use]
    pub const fn new(intensity: u16, color_temp: u16) -> Self {
        Self {
            intensity,
            color_temp,
        }
    }

    /// Creates settings from the compact `[intensity, color_temp]` form.
    ///
    /// Elements after the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidField`] if fewer than two values are given.
    pub fn from_compact_form(values: &[u16]) -> Result<Self, ParseError> {
        match values {
            [intensity, color_temp, ..] => Ok(Self::new(*intensity, *color_temp)),
            _ => Err(ParseError::InvalidField {
                field: "settings".to_string(),
                message: format!("expected 2 values, got {}", values.len()),
            }),
        }
    }

    /// Returns the settings of a named preset.
    #[must_use]
    pub const fn preset(preset: Preset) -> Self {
        preset.settings()
    }

    /// Returns the intensity.
    #[must_use]
    pub const fn intensity(&self) -> u16 {
        self.intensity
    }

    /// Returns the color temperature.
    #[must_use]
    pub const fn color_temp(&self) -> u16 {
        self.color_temp
    }

    /// Returns a copy with a different intensity.
    #[must_use]
    pub const fn with_intensity(self, intensity: u16) -> Self {
        Self { intensity, ..self }
    }

    /// Returns a copy with a different color temperature.
    #[must_use]
    pub const fn with_color_temp(self, color_temp: u16) -> Self {
        Self { color_temp, ..self }
    }

    /// Returns the compact `"III:CCC"` description used in logs.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{:03}:{:03}", self.intensity, self.color_temp)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Named settings for common situations in the grow room.
///
/// Each preset also carries how long it should stay active before the
/// schedule resumes.
///
/// | Preset | Intensity | Color | Minutes |
/// |--------|-----------|-------|---------|
/// | Off | 0 | 100 | 30 |
/// | Harvest | 10 | 100 | 30 |
/// | Movie | 1 | 0 | 120 |
/// | Photo | 5 | 50 | 10 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Lights out.
    Off,
    /// Bright neutral light for working on the plants.
    Harvest,
    /// Dim warm light.
    Movie,
    /// Balanced light for taking pictures.
    Photo,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Self; 4] = [Self::Off, Self::Harvest, Self::Movie, Self::Photo];

    /// Returns the light settings of this preset.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        match self {
            Self::Off => Settings::new(0, 100),
            Self::Harvest => Settings::new(10, 100),
            Self::Movie => Settings::new(1, 0),
            Self::Photo => Settings::new(5, 50),
        }
    }

    /// Returns how long the preset stays active, in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        match self {
            Self::Off | Self::Harvest => 30,
            Self::Movie => 120,
            Self::Photo => 10,
        }
    }

    /// Returns how long the preset stays active.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_minutes()) * 60)
    }

    /// Returns the lowercase preset name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Harvest => "harvest",
            Self::Movie => "movie",
            Self::Photo => "photo",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "harvest" => Ok(Self::Harvest),
            "movie" => Ok(Self::Movie),
            "photo" => Ok(Self::Photo),
            _ => Err(ParseError::InvalidValue {
                field: "preset".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl From<Preset> for Settings {
    fn from(preset: Preset) -> Self {
        preset.settings()
    }
}
