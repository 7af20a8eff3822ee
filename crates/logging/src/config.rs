//! crates/logging/src/config.rs
//! Declarative logger levels applied to a registry.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::level::{Level, ParseLevelError};
use crate::registry::Registry;

/// Key that sets the manager-wide disable threshold inside a directive list.
pub const DISABLE_DIRECTIVE: &str = "disable";

/// Errors produced while parsing logging directives.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A directive between commas was blank.
    #[error("empty logging directive")]
    EmptyDirective,
    /// A `name=LEVEL` directive had nothing before the `=`.
    #[error("missing logger name in directive {0:?}")]
    EmptyName(String),
    /// The level part of a directive did not parse.
    #[error("invalid level in directive {directive:?}")]
    InvalidLevel {
        /// The offending directive.
        directive: String,
        /// Underlying parse failure.
        #[source]
        source: ParseLevelError,
    },
}

/// Root level, per-namespace levels and disable threshold for a registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Level for the root logger.
    pub root: Option<Level>,
    /// Levels keyed by dotted namespace.
    pub levels: BTreeMap<String, Level>,
    /// Manager-wide disable threshold.
    pub disable: Option<Level>,
}

impl LoggingConfig {
    /// Maps a `-v` count onto a namespace level.
    ///
    /// `0` keeps the namespace at `WARNING`, `1` selects `INFO`, anything
    /// higher selects `DEBUG`.
    #[must_use]
    pub fn from_verbose_level(namespace: &str, verbose: u8) -> Self {
        let level = match verbose {
            0 => Level::WARNING,
            1 => Level::INFO,
            _ => Level::DEBUG,
        };
        let mut config = Self::default();
        config.levels.insert(namespace.to_owned(), level);
        config
    }

    /// Parses a comma-separated directive list such as `"app=info,app.pool=debug"`.
    pub fn parse_directives(directives: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for token in directives.split(',') {
            config.apply_directive(token)?;
        }
        Ok(config)
    }

    /// Reads a directive list from the environment variable `var`.
    ///
    /// A missing or non-UTF-8 variable yields an empty configuration.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Self::parse_directives(&value),
            _ => Ok(Self::default()),
        }
    }

    /// Applies one directive: `LEVEL` (root), `name=LEVEL`, or `disable=LEVEL`.
    pub fn apply_directive(&mut self, token: &str) -> Result<(), ConfigError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyDirective);
        }

        let invalid = |source| ConfigError::InvalidLevel {
            directive: token.to_owned(),
            source,
        };

        match token.split_once('=') {
            None => {
                self.root = Some(token.parse().map_err(invalid)?);
            }
            Some((name, level)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ConfigError::EmptyName(token.to_owned()));
                }
                let level: Level = level.parse().map_err(invalid)?;
                if name == DISABLE_DIRECTIVE {
                    self.disable = Some(level);
                } else {
                    self.levels.insert(name.to_owned(), level);
                }
            }
        }
        Ok(())
    }

    /// Pushes the configured levels into `registry`.
    pub fn apply(&self, registry: &Registry) {
        if let Some(level) = self.root {
            registry.root().set_level(level);
        }
        for (name, level) in &self.levels {
            registry.get_logger(name).set_level(*level);
        }
        if let Some(level) = self.disable {
            registry.disable(level);
        }
    }
}
