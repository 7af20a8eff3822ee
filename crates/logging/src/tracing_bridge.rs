//! crates/logging/src/tracing_bridge.rs
//! Bridge from logger records into the tracing crate.
//!
//! [`TracingHandler`] lets an application that already runs a `tracing`
//! subscriber receive records from the logger hierarchy alongside its own
//! spans and events. Records become events with target `"logging"` and carry
//! the originating namespace and call site as fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Registry, TracingHandler, init_tracing};
//!
//! init_tracing("info");
//! Registry::global().root().add_handler(Arc::new(TracingHandler::new()));
//! ```

use tracing::Level as TracingLevel;

use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;

/// Handler that re-emits records as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHandler {
    level: Level,
}

impl TracingHandler {
    /// Creates a handler forwarding every record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: Level::NOTSET,
        }
    }

    /// Creates a handler forwarding records at `level` and above.
    #[must_use]
    pub const fn with_level(level: Level) -> Self {
        Self { level }
    }

    /// Maps a logger level onto the closest tracing level.
    const fn tracing_level(level: Level) -> TracingLevel {
        match level.as_u32() {
            40.. => TracingLevel::ERROR,
            30..=39 => TracingLevel::WARN,
            20..=29 => TracingLevel::INFO,
            10..=19 => TracingLevel::DEBUG,
            _ => TracingLevel::TRACE,
        }
    }
}

macro_rules! forward {
    ($level:expr, $record:expr) => {
        ::tracing::event!(
            target: "logging",
            $level,
            namespace = $record.name(),
            file = $record.file(),
            line = $record.line(),
            error = $record.error(),
            "{}",
            $record.args()
        )
    };
}

impl Handler for TracingHandler {
    fn handle(&self, record: &Record<'_>) {
        match Self::tracing_level(record.level()) {
            TracingLevel::ERROR => forward!(TracingLevel::ERROR, record),
            TracingLevel::WARN => forward!(TracingLevel::WARN, record),
            TracingLevel::INFO => forward!(TracingLevel::INFO, record),
            TracingLevel::DEBUG => forward!(TracingLevel::DEBUG, record),
            _ => forward!(TracingLevel::TRACE, record),
        }
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`.
///
/// `default_directive` is used when `RUST_LOG` is unset or invalid. Returns
/// `false` without touching anything if a global subscriber already exists.
pub fn init_tracing(default_directive: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
