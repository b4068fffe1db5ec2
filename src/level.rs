// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The fixed severity taxonomy.
//!
//! Each level is a distinct bit flag, so that several levels can be combined into a mask
//! without redefining the taxonomy. [`Level::Exclude`] is a sentinel far above the regular
//! levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Severity of an event.
///
/// The discriminant of each variant is its bit-flag value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Level {
    /// A self-diagnosed problem, such as a failed health check of an attached resource.
    Alert = 1,
    /// A failure of a component that must always work; worth knowing about even once.
    Critical = 2,
    /// A required action failed; worth reporting when it repeats soon.
    Error = 4,
    /// A non-essential action failed; worth reporting at high frequency.
    Warning = 8,
    /// An expected deviation that is part of normal operation.
    Notice = 16,
    /// A sign of normal operation.
    Info = 32,
    /// Detail for debugging a process.
    Debug = 64,
    /// An event deliberately excluded by configuration.
    Exclude = 8192,
}

/// Static metadata about a [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelMetadata {
    /// The canonical uppercase name.
    pub name: &'static str,
    /// Whether a single occurrence deserves near-immediate notification.
    pub is_alert: bool,
}

impl Level {
    /// All levels, most severe first, with [`Level::Exclude`] last.
    pub const ALL: [Level; 8] = [
        Level::Alert,
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
        Level::Exclude,
    ];

    /// The bit-flag value of this level.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// The canonical uppercase name of this level.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Alert => "ALERT",
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Exclude => "EXCLUDE",
        }
    }

    /// Whether this level is an alert level.
    pub const fn is_alert(self) -> bool {
        matches!(
            self,
            Level::Alert | Level::Critical | Level::Error | Level::Warning
        )
    }

    /// The metadata of this level.
    pub const fn metadata(self) -> LevelMetadata {
        LevelMetadata {
            name: self.name(),
            is_alert: self.is_alert(),
        }
    }

    /// Look up the metadata for a raw level value.
    ///
    /// # Errors
    ///
    /// Return [`Error::UnknownLevel`] if `value` is not one of the defined levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventforth::Level;
    ///
    /// let meta = Level::metadata_for(8).unwrap();
    /// assert_eq!(meta.name, "WARNING");
    /// assert!(meta.is_alert);
    /// assert!(Level::metadata_for(3).is_err());
    /// ```
    pub fn metadata_for(value: u32) -> Result<LevelMetadata, Error> {
        Level::try_from(value).map(Level::metadata)
    }

    /// Look up a level by its canonical name.
    ///
    /// The match is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Return [`Error::UnknownLevelName`] if `name` is not a canonical level name.
    pub fn level_for(name: &str) -> Result<Level, Error> {
        Level::ALL
            .into_iter()
            .find(|level| level.name() == name)
            .ok_or_else(|| Error::UnknownLevelName(name.to_string()))
    }
}

impl TryFrom<u32> for Level {
    type Error = Error;

    // `Self::Error` would be ambiguous with the `Level::Error` variant
    fn try_from(value: u32) -> Result<Self, Error> {
        Level::ALL
            .into_iter()
            .find(|level| level.bits() == value)
            .ok_or(Error::UnknownLevel(value))
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.bits()
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        Level::level_for(s)
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_alert_classification() {
        let expected = [
            (Level::Alert, "ALERT", true),
            (Level::Critical, "CRITICAL", true),
            (Level::Error, "ERROR", true),
            (Level::Warning, "WARNING", true),
            (Level::Notice, "NOTICE", false),
            (Level::Info, "INFO", false),
            (Level::Debug, "DEBUG", false),
            (Level::Exclude, "EXCLUDE", false),
        ];

        for (level, name, is_alert) in expected {
            let meta = Level::metadata_for(level.bits()).unwrap();
            assert_eq!(meta.name, name);
            assert_eq!(meta.is_alert, is_alert, "{name}");
            assert_eq!(level.to_string(), name);
        }
    }

    #[test]
    fn test_values_are_disjoint_bits() {
        for a in Level::ALL {
            assert!(a.bits().is_power_of_two(), "{a}");
            for b in Level::ALL {
                if a != b {
                    assert_eq!(a.bits() & b.bits(), 0, "{a} overlaps {b}");
                }
            }
        }
        assert_eq!(Level::Exclude.bits(), 8192);
    }

    #[test]
    fn test_value_name_bijection() {
        for level in Level::ALL {
            assert_eq!(Level::try_from(level.bits()).unwrap(), level);
            assert_eq!(Level::level_for(level.name()).unwrap(), level);
            assert_eq!(level.name().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_lookups() {
        assert!(matches!(Level::metadata_for(0), Err(Error::UnknownLevel(0))));
        assert!(matches!(
            Level::metadata_for(128),
            Err(Error::UnknownLevel(128))
        ));
        assert!(matches!(
            Level::level_for("info"),
            Err(Error::UnknownLevelName(name)) if name == "info"
        ));
        assert!("WARN".parse::<Level>().is_err());
    }
}
