//! crates/echo/src/adapter.rs
//! Logger wrappers that honor a per-instance echo override.

use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use logging::{Level, Logger};

use crate::flag::EchoOverride;
use crate::level_map::effective_override_level;

/// Wraps a shared [`Logger`] and applies one instance's echo override.
///
/// The override replaces the ambient threshold of the wrapped namespace for
/// records emitted through this wrapper only; other holders of the same
/// [`Logger`] are unaffected. The registry-wide disable threshold still wins
/// over the override.
#[derive(Clone, Debug)]
pub struct InstanceLogger {
    echo: EchoOverride,
    logger: Arc<Logger>,
}

impl InstanceLogger {
    /// Wraps `logger` with `echo`.
    #[must_use]
    pub const fn new(echo: EchoOverride, logger: Arc<Logger>) -> Self {
        Self { echo, logger }
    }

    /// Override this wrapper was built with.
    #[must_use]
    pub const fn echo(&self) -> EchoOverride {
        self.echo
    }

    /// Wrapped namespace logger.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Namespace of the wrapped logger.
    #[must_use]
    pub fn name(&self) -> &str {
        self.logger.name()
    }

    /// Threshold in force: the override level, else the wrapped logger's
    /// effective level.
    #[must_use]
    pub fn effective_level(&self) -> Level {
        effective_override_level(self.echo).unwrap_or_else(|| self.logger.effective_level())
    }

    /// Reports whether a record at `level` would be emitted.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        !self.logger.manager().is_disabled(level) && level >= self.effective_level()
    }

    /// Emits `args` at `level` when enabled, attributed to the caller.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            self.logger.emit(level, args, Location::caller(), None);
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

    /// Logs at `ERROR` with `error` attached.
    #[track_caller]
    pub fn exception(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        if self.is_enabled_for(Level::ERROR) {
            self.logger
                .emit(Level::ERROR, args, Location::caller(), Some(error));
        }
    }
}

/// The logger slot of an instance.
///
/// Holds either the shared namespace logger itself, used when no override is
/// in effect, or an [`InstanceLogger`] applying one. Both variants expose the
/// same logging surface.
#[derive(Clone, Debug)]
pub enum EchoLogger {
    /// Plain namespace logger; ambient levels apply.
    Direct(Arc<Logger>),
    /// Override-aware wrapper.
    Instance(InstanceLogger),
}

macro_rules! dispatch {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            Self::Direct(logger) => logger.$method($($arg),*),
            Self::Instance(adapter) => adapter.$method($($arg),*),
        }
    };
}

impl EchoLogger {
    /// Underlying namespace logger in either variant.
    #[must_use]
    pub const fn handle(&self) -> &Arc<Logger> {
        match self {
            Self::Direct(logger) => logger,
            Self::Instance(adapter) => adapter.logger(),
        }
    }

    /// Namespace the records are attributed to.
    #[must_use]
    pub fn name(&self) -> &str {
        self.handle().name()
    }

    /// Reports whether this slot holds an override-aware wrapper.
    #[must_use]
    pub const fn is_instance(&self) -> bool {
        matches!(self, Self::Instance(_))
    }

    /// Threshold in force for records emitted through this slot.
    #[must_use]
    pub fn effective_level(&self) -> Level {
        dispatch!(self, effective_level())
    }

    /// Reports whether a record at `level` would be emitted.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        dispatch!(self, is_enabled_for(level))
    }

    /// Emits `args` at `level` when enabled.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        dispatch!(self, log(level, args));
    }

    /// Logs at `DEBUG`.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        dispatch!(self, debug(args));
    }

    /// Logs at `INFO`.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        dispatch!(self, info(args));
    }

    /// Logs at `WARNING`.
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        dispatch!(self, warning(args));
    }

    /// Logs at `ERROR`.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        dispatch!(self, error(args));
    }

    /// Logs at `CRITICAL`.
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        dispatch!(self, critical(args));
    }

    /// Logs at `ERROR` with `error` attached.
    #[track_caller]
    pub fn exception(&self, error: &(dyn Error + 'static), args: fmt::Arguments<'_>) {
        dispatch!(self, exception(error, args));
    }
}

impl From<Arc<Logger>> for EchoLogger {
    fn from(logger: Arc<Logger>) -> Self {
        Self::Direct(logger)
    }
}

impl From<InstanceLogger> for EchoLogger {
    fn from(adapter: InstanceLogger) -> Self {
        Self::Instance(adapter)
    }
}

#[cfg(test)]
mod tests {
    use logging::{CaptureHandler, Registry};

    use super::*;

    fn wrapped(registry: &Registry, echo: EchoOverride) -> (InstanceLogger, Arc<CaptureHandler>) {
        let capture = Arc::new(CaptureHandler::new());
        let logger = registry.get_logger("app.engine");
        logger.add_handler(capture.clone());
        (InstanceLogger::new(echo, logger), capture)
    }

    #[test]
    fn debug_override_emits_below_ambient_level() {
        let registry = Registry::new();
        let (adapter, capture) = wrapped(&registry, EchoOverride::Debug);

        adapter.debug(format_args!("SELECT 1"));

        assert_eq!(capture.len(), 1);
        assert!(!registry.get_logger("app.engine").is_enabled_for(Level::DEBUG));
    }

    #[test]
    fn true_override_stops_at_info() {
        let registry = Registry::new();
        let (adapter, capture) = wrapped(&registry, EchoOverride::True);

        adapter.debug(format_args!("hidden"));
        adapter.info(format_args!("shown"));

        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::INFO);
    }

    #[test]
    fn override_can_suppress_below_ambient_level() {
        let registry = Registry::new();
        registry.get_logger("app").set_level(Level::DEBUG);
        let (adapter, capture) = wrapped(&registry, EchoOverride::True);

        adapter.debug(format_args!("suppressed by override"));
        assert!(capture.is_empty());
    }

    #[test]
    fn unset_falls_back_to_ambient_level() {
        let registry = Registry::new();
        let (adapter, _capture) = wrapped(&registry, EchoOverride::Unset);
        assert_eq!(adapter.effective_level(), Level::WARNING);

        registry.get_logger("app").set_level(Level::INFO);
        assert_eq!(adapter.effective_level(), Level::INFO);
    }

    #[test]
    fn disable_threshold_beats_override() {
        let registry = Registry::new();
        let (adapter, capture) = wrapped(&registry, EchoOverride::Debug);
        registry.disable(Level::INFO);

        adapter.info(format_args!("suppressed"));
        adapter.warning(format_args!("kept"));

        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
    }

    #[test]
    fn enum_slot_dispatches_to_variant() {
        let registry = Registry::new();
        let (adapter, capture) = wrapped(&registry, EchoOverride::Debug);
        let direct = EchoLogger::from(Arc::clone(adapter.logger()));
        let instance = EchoLogger::from(adapter);

        direct.debug(format_args!("dropped"));
        instance.debug(format_args!("kept"));

        assert!(!direct.is_instance());
        assert!(instance.is_instance());
        assert_eq!(direct.name(), instance.name());
        assert_eq!(capture.len(), 1);
    }
}
