//! crates/logging/src/level.rs
//! Numeric severity levels shared by loggers, handlers and records.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record or threshold of a logger.
///
/// Levels are plain integers so callers may define custom severities between
/// the named constants. Higher values are more severe; `NOTSET` (zero) means
/// "inherit from the parent logger" when used as a logger threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    /// No level configured; loggers holding it defer to their parent.
    pub const NOTSET: Self = Self(0);
    /// Detailed diagnostic output.
    pub const DEBUG: Self = Self(10);
    /// Confirmation that things work as expected.
    pub const INFO: Self = Self(20);
    /// Something unexpected happened; the default library threshold.
    pub const WARNING: Self = Self(30);
    /// An operation failed.
    pub const ERROR: Self = Self(40);
    /// A failure the program may not recover from.
    pub const CRITICAL: Self = Self(50);

    /// Creates a level from its raw numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Reports whether this is the `NOTSET` sentinel.
    #[must_use]
    pub const fn is_notset(self) -> bool {
        self.0 == 0
    }

    /// Returns the canonical upper-case name, or `None` for custom values.
    #[must_use]
    pub const fn canonical_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("NOTSET"),
            10 => Some("DEBUG"),
            20 => Some("INFO"),
            30 => Some("WARNING"),
            40 => Some("ERROR"),
            50 => Some("CRITICAL"),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical_name() {
            Some(name) => f.pad(name),
            None => f.pad(&format!("Level {}", self.0)),
        }
    }
}

impl From<u32> for Level {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Error returned when a string names neither a known level nor an integer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let level = match trimmed.to_ascii_uppercase().as_str() {
            "NOTSET" => Self::NOTSET,
            "DEBUG" => Self::DEBUG,
            "INFO" => Self::INFO,
            "WARNING" | "WARN" => Self::WARNING,
            "ERROR" => Self::ERROR,
            "CRITICAL" | "FATAL" => Self::CRITICAL,
            other => other.parse::<u32>().map(Self).map_err(|_| ParseLevelError {
                input: s.to_owned(),
            })?,
        };
        Ok(level)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
