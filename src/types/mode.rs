// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode reported by the fixture.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Which behavior the fixture is currently running.
///
/// The fixture either follows its schedule or runs an interruption, and
/// reports fade transitions between the two as separate modes.
///
/// # Examples
///
/// ```
/// use grove_light::types::LightMode;
///
/// let mode: LightMode = "FADEtoINTER".parse().unwrap();
/// assert_eq!(mode, LightMode::FadeToInterruption);
/// assert!(mode.requires_interruption());
/// assert!(mode.is_fading());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightMode {
    /// Following the schedule (`SCHED_SS`).
    #[serde(rename = "SCHED_SS")]
    Schedule,
    /// Fading back to the schedule (`FADEtoSCHED`).
    #[serde(rename = "FADEtoSCHED")]
    FadeToSchedule,
    /// Running an interruption (`INTER_SS`).
    #[serde(rename = "INTER_SS")]
    Interruption,
    /// Fading into an interruption (`FADEtoINTER`).
    #[serde(rename = "FADEtoINTER")]
    FadeToInterruption,
    /// About to start an interruption (`WAITbfINTER`).
    #[serde(rename = "WAITbfINTER")]
    WaitBeforeInterruption,
}

impl LightMode {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Schedule => "SCHED_SS",
            Self::FadeToSchedule => "FADEtoSCHED",
            Self::Interruption => "INTER_SS",
            Self::FadeToInterruption => "FADEtoINTER",
            Self::WaitBeforeInterruption => "WAITbfINTER",
        }
    }

    /// Returns true if a payload in this mode must carry an interruption.
    #[must_use]
    pub const fn requires_interruption(&self) -> bool {
        matches!(
            self,
            Self::Interruption | Self::FadeToInterruption | Self::WaitBeforeInterruption
        )
    }

    /// Returns true for the fade transition modes.
    #[must_use]
    pub const fn is_fading(&self) -> bool {
        matches!(self, Self::FadeToSchedule | Self::FadeToInterruption)
    }
}

impl fmt::Display for LightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHED_SS" => Ok(Self::Schedule),
            "FADEtoSCHED" => Ok(Self::FadeToSchedule),
            "INTER_SS" => Ok(Self::Interruption),
            "FADEtoINTER" => Ok(Self::FadeToInterruption),
            "WAITbfINTER" => Ok(Self::WaitBeforeInterruption),
            _ => Err(ParseError::InvalidValue {
                field: "mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
