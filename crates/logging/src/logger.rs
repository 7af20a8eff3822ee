//! crates/logging/src/logger.rs
//! Per-namespace logger handles.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;
use crate::registry::Manager;

/// A named node in the logger hierarchy.
///
/// Handles are created and owned by a [`Registry`](crate::Registry) and shared
/// through [`Arc`]; every caller asking for the same namespace receives the same
/// handle. The parent link is fixed when the handle is created.
pub struct Logger {
    name: String,
    level: AtomicU32,
    propagate: AtomicBool,
    parent: Option<Arc<Logger>>,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
    manager: Arc<Manager>,
}

impl Logger {
    pub(crate) fn new(
        name: String,
        level: Level,
        parent: Option<Arc<Self>>,
        manager: Arc<Manager>,
    ) -> Self {
        Self {
            name,
            level: AtomicU32::new(level.as_u32()),
            propagate: AtomicBool::new(true),
            parent,
            handlers: RwLock::new(Vec::new()),
            manager,
        }
    }

    /// Dotted namespace of this logger.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Threshold configured directly on this logger (`NOTSET` if inherited).
    #[must_use]
    pub fn level(&self) -> Level {
        Level::new(self.level.load(Ordering::Relaxed))
    }

    /// Sets the threshold of this logger.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.as_u32(), Ordering::Relaxed);
    }

    /// Parent in the hierarchy; `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Whether records are passed on to the parent's handlers.
    #[must_use]
    pub fn propagate(&self) -> bool {
        self.propagate.load(Ordering::Relaxed)
    }

    /// Enables or disables propagation to ancestor handlers.
    pub fn set_propagate(&self, propagate: bool) {
        self.propagate.store(propagate, Ordering::Relaxed);
    }

    /// The manager holding the registry-wide disable threshold.
    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// First non-`NOTSET` level found walking from this logger to the root.
    #[must_use]
    pub fn effective_level(&self) -> Level {
        let mut current = Some(self);
        while let Some(logger) = current {
            let level = logger.level();
            if !level.is_notset() {
                return level;
            }
            current = logger.parent.as_deref();
        }
        Level::NOTSET
    }

    /// Reports whether a record at `level` would be emitted by this logger.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        if self.manager.is_disabled(level) {
            return false;
        }
        level >= self.effective_level()
    }

    /// Attaches `handler`; returns `false` if the same handler is already attached.
    pub fn add_handler(&self, handler: Arc<dyn Handler>) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(|poison| poison.into_inner());
        if handlers.iter().any(|existing| Arc::ptr_eq(existing, &handler)) {
            return false;
        }
        handlers.push(handler);
        true
    }

    /// Attaches the handler built by `make` only if this logger has none yet.
    ///
    /// The check and the insert happen under one lock, so concurrent callers
    /// attach at most one handler between them.
    pub fn add_handler_if_empty<F>(&self, make: F) -> bool
    where
        F: FnOnce() -> Arc<dyn Handler>,
    {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(|poison| poison.into_inner());
        if !handlers.is_empty() {
            return false;
        }
        handlers.push(make());
        true
    }

    /// Detaches `handler`; returns `false` if it was not attached.
    pub fn remove_handler(&self, handler: &Arc<dyn Handler>) -> bool {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(|poison| poison.into_inner());
        let before = handlers.len();
        handlers.retain(|existing| !Arc::ptr_eq(existing, handler));
        handlers.len() != before
    }

    /// Snapshot of the handlers attached directly to this logger.
    #[must_use]
    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    /// Reports whether this logger itself has at least one handler.
    #[must_use]
    pub fn has_own_handlers(&self) -> bool {
        !self
            .handlers
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .is_empty()
    }

    /// Reports whether any handler is reachable along the propagation chain.
    #[must_use]
    pub fn has_handlers(&self) -> bool {
        let mut current = Some(self);
        while let Some(logger) = current {
            if logger.has_own_handlers() {
                return true;
            }
            if !logger.propagate() {
                break;
            }
            current = logger.parent.as_deref();
        }
        false
    }

    /// Low-level emit primitive.
    ///
    /// Performs no level or disable check: callers that already decided the
    /// record should be emitted call this directly. `location` is reported as
    /// the record's call site. Handlers on this logger and on its ancestors
    /// (while propagation holds) each see the record if it meets their own
    /// threshold. With no handler anywhere on the chain, WARNING and above is
    /// written to standard error.
    pub fn emit(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let record = Record::new(level, &self.name, args, location, error);
        let mut found = false;
        let mut current = Some(self);
        while let Some(logger) = current {
            for handler in logger.handlers() {
                found = true;
                if record.level() >= handler.level() {
                    handler.handle(&record);
                }
            }
            if !logger.propagate() {
                break;
            }
            current = logger.parent.as_deref();
        }
        if !found && level >= Level::WARNING {
            let _ = writeln!(io::stderr().lock(), "{}", record.args());
        }
    }

    /// Emits `args` at `level` if this logger is enabled for it.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            self.emit(level, args, Location::caller(), None);
        }
    }

    /// Logs at `DEBUG`.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    /// Logs at `INFO`.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    /// Logs at `WARNING`.
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Level::WARNING, args);
    }

    /// Logs at `ERROR`.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    /// Logs at `CRITICAL`.
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(Level::CRITICAL, args);
    }

    /// Logs at `ERROR`, attaching `error` and its source chain to the record.
    #[track_caller]
    pub fn exception(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        if self.is_enabled_for(Level::ERROR) {
            self.emit(Level::ERROR, args, Location::caller(), Some(error));
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("propagate", &self.propagate())
            .field("parent", &self.parent.as_ref().map(|parent| parent.name()))
            .field("handlers", &self.handlers().len())
            .finish_non_exhaustive()
    }
}
