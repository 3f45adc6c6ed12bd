// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Where a fixture is installed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Installation site of a light fixture.
///
/// # Examples
///
/// ```
/// use grove_light::types::Location;
///
/// let location: Location = "seedling".parse().unwrap();
/// assert_eq!(location, Location::Seedling);
/// assert_eq!(location.to_string(), "seedling");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Main growing area.
    Garden,
    /// Seedling tray.
    Seedling,
    /// Aquarium lighting.
    Aquarium,
}

impl Location {
    /// All locations.
    pub const ALL: [Self; 3] = [Self::Garden, Self::Seedling, Self::Aquarium];

    /// Returns the lowercase location name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Garden => "garden",
            Self::Seedling => "seedling",
            Self::Aquarium => "aquarium",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "garden" => Ok(Self::Garden),
            "seedling" => Ok(Self::Seedling),
            "aquarium" => Ok(Self::Aquarium),
            _ => Err(ParseError::InvalidValue {
                field: "location".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for location in Location::ALL {
            assert_eq!(location.as_str().parse::<Location>().unwrap(), location);
        }
        assert_eq!("Garden".parse::<Location>().unwrap(), Location::Garden);
    }

    #[test]
    fn parse_unknown() {
        assert!("balcony".parse::<Location>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let parsed: Location = serde_json::from_str(r#""aquarium""#).unwrap();
        assert_eq!(parsed, Location::Aquarium);
    }
}
