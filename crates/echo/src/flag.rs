//! crates/echo/src/flag.rs
//! The per-instance echo override value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Verbosity override carried by one instance.
///
/// `Unset` and `False` leave the instance at the ambient level of its
/// namespace; `True` forces `INFO` output and `Debug` forces `DEBUG` output
/// for that instance only. The stored value is kept verbatim, so reading it
/// back returns exactly what was written rather than a resolved level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EchoOverride {
    /// No override was ever given.
    #[default]
    Unset,
    /// Echo explicitly switched off.
    False,
    /// Echo at `INFO`.
    True,
    /// Echo at `DEBUG`.
    Debug,
}

impl EchoOverride {
    /// Reports whether the value asks for output beyond the ambient level.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::True | Self::Debug)
    }

    /// Canonical text form: `none`, `false`, `true` or `debug`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "none",
            Self::False => "false",
            Self::True => "true",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for EchoOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<bool> for EchoOverride {
    fn from(enabled: bool) -> Self {
        if enabled { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for EchoOverride {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

/// Error returned when text does not name an echo override.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid echo value {0:?}; expected none, true, false or debug")]
pub struct ParseEchoError(String);

impl FromStr for EchoOverride {
    type Err = ParseEchoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "unset" => Ok(Self::Unset),
            "false" | "no" | "off" | "0" => Ok(Self::False),
            "true" | "yes" | "on" | "1" => Ok(Self::True),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseEchoError(s.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EchoOverride {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::False => serializer.serialize_bool(false),
            Self::True => serializer.serialize_bool(true),
            Self::Debug => serializer.serialize_str("debug"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EchoOverride {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EchoVisitor;

        impl<'de> serde::de::Visitor<'de> for EchoVisitor {
            type Value = EchoOverride;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, a boolean, or the string \"debug\"")
            }

            fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(EchoOverride::from(value))
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(EchoOverride::Unset)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(EchoOverride::Unset)
            }

            fn visit_some<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(EchoVisitor)
    }
}
