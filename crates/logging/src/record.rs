//! crates/logging/src/record.rs
//! Log records passed from loggers to handlers.

use std::error::Error;
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::thread::{self, Thread};
use std::time::SystemTime;

use crate::level::Level;

/// A single log event on its way to the handlers.
///
/// The message arguments are borrowed and rendered lazily, so a record that
/// no handler accepts never pays for formatting.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    level: Level,
    name: &'a str,
    args: fmt::Arguments<'a>,
    location: &'static Location<'static>,
    time: SystemTime,
    thread: Thread,
    error: Option<String>,
}

impl<'a> Record<'a> {
    pub(crate) fn new(
        level: Level,
        name: &'a str,
        args: fmt::Arguments<'a>,
        location: &'static Location<'static>,
        error: Option<&(dyn Error + 'static)>,
    ) -> Self {
        Self {
            level,
            name,
            args,
            location,
            time: SystemTime::now(),
            thread: thread::current(),
            error: error.map(render_error_chain),
        }
    }

    /// Returns the severity of the record.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the dotted namespace of the logger that created the record.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the unrendered message arguments.
    #[must_use]
    pub const fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    /// Renders the message.
    #[must_use]
    pub fn message(&self) -> String {
        self.args.to_string()
    }

    /// Returns the call site that issued the log call.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Source file of the call site.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Source line of the call site.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Wall-clock time at which the record was created.
    #[must_use]
    pub const fn time(&self) -> SystemTime {
        self.time
    }

    /// Name of the emitting thread, if it has one.
    #[must_use]
    pub fn thread_name(&self) -> Option<&str> {
        self.thread.name()
    }

    /// Rendered error chain attached by `exception` calls.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn render_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut rendered = format!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "\ncaused by: {cause}");
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection failed")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    fn with_record(
        level: Level,
        args: fmt::Arguments<'_>,
        error: Option<&(dyn Error + 'static)>,
        check: impl FnOnce(&Record<'_>),
    ) {
        let record = Record::new(level, "app.pool", args, Location::caller(), error);
        check(&record);
    }

    #[test]
    fn record_renders_message_lazily() {
        let value = 42;
        with_record(Level::INFO, format_args!("checked out {value}"), None, |record| {
            assert_eq!(record.message(), "checked out 42");
            assert_eq!(record.name(), "app.pool");
            assert_eq!(record.level(), Level::INFO);
            assert!(record.error().is_none());
        });
    }

    #[test]
    fn record_captures_error_chain() {
        let err = Wrapped(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        with_record(Level::ERROR, format_args!("boom"), Some(&err), |record| {
            let rendered = record.error().expect("error attached");
            assert_eq!(rendered, "error: connection failed\ncaused by: pipe closed");
        });
    }

    #[test]
    fn record_points_at_constructing_file() {
        with_record(Level::DEBUG, format_args!(""), None, |record| {
            assert!(record.file().ends_with("record.rs"));
            assert!(record.line() > 0);
        });
    }

    #[test]
    fn record_reports_current_thread_name() {
        with_record(Level::INFO, format_args!("tick"), None, |record| {
            assert_eq!(record.thread_name(), std::thread::current().name());
        });
    }
}
