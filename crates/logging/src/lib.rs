#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a hierarchical, namespace-keyed logging backend. Loggers are
//! looked up by dotted name (`"app.engine.base"`) in a [`Registry`]; each one
//! either carries its own [`Level`] or inherits the first level set on an
//! ancestor. Records that pass the level check are handed to the
//! [`Handler`]s attached along the propagation chain.
//!
//! # Design
//!
//! - [`Registry`] owns the loggers and a [`Manager`] holding the registry-wide
//!   disable threshold. [`Registry::global`] is the lazily created process
//!   registry; tests build their own with [`Registry::new`].
//! - [`Logger`] exposes level-checked methods (`debug`, `info`, ...) and the
//!   unchecked [`Logger::emit`] primitive, which takes the caller
//!   [`Location`](std::panic::Location) explicitly so wrappers can report the
//!   original call site.
//! - Every public logging method is `#[track_caller]`.
//! - [`StreamHandler`] writes `<timestamp> <LEVEL> <namespace> <message>`
//!   lines; [`CaptureHandler`] keeps records in memory.
//!
//! # Invariants
//!
//! - The same name always yields the same [`Logger`] handle.
//! - A suppressed level (see [`Manager::disable`]) is never emitted through
//!   the level-checked API, whatever the logger levels say.
//! - Logging never panics or returns errors into caller code; handler I/O
//!   failures are dropped.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{CaptureHandler, Level, Registry};
//!
//! let registry = Registry::new();
//! let capture = Arc::new(CaptureHandler::new());
//! registry.root().add_handler(capture.clone());
//!
//! let pool = registry.get_logger("app.pool");
//! registry.get_logger("app").set_level(Level::INFO);
//!
//! logging::info!(pool, "checked out {}", 7);
//! logging::debug!(pool, "not shown");
//!
//! let records = capture.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name, "app.pool");
//! assert_eq!(records[0].message, "checked out 7");
//! ```

mod config;
mod handler;
mod level;
mod line_mode;
mod logger;
mod macros;
mod record;
mod registry;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ConfigError, DISABLE_DIRECTIVE, LoggingConfig};
pub use handler::{
    CaptureHandler, CapturedRecord, Formatter, Handler, SharedBuffer, StreamHandler,
    format_timestamp,
};
pub use level::{Level, ParseLevelError};
pub use line_mode::LineMode;
pub use logger::Logger;
pub use record::Record;
pub use registry::{Manager, ROOT_LOGGER_NAME, Registry, disable, get_logger};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{TracingHandler, init_tracing};
