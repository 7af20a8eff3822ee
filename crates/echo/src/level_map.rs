//! crates/echo/src/level_map.rs
//! Echo override to severity threshold mapping.

use logging::Level;

use crate::flag::EchoOverride;

/// Threshold forced by `echo`, or `None` when the ambient level applies.
///
/// | echo    | result        |
/// |---------|---------------|
/// | `Unset` | `None`        |
/// | `False` | `None`        |
/// | `True`  | `Some(INFO)`  |
/// | `Debug` | `Some(DEBUG)` |
#[must_use]
pub const fn effective_override_level(echo: EchoOverride) -> Option<Level> {
    match echo {
        EchoOverride::Unset | EchoOverride::False => None,
        EchoOverride::True => Some(Level::INFO),
        EchoOverride::Debug => Some(Level::DEBUG),
    }
}
