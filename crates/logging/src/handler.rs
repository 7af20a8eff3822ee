//! crates/logging/src/handler.rs
//! Output destinations attached to loggers.
//!
//! Handlers receive every record that passes the logger's level check and
//! their own threshold. Writing is best-effort: I/O failures are dropped so a
//! broken destination can never raise into the code that issued the log call.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::SystemTime;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::level::Level;
use crate::line_mode::LineMode;
use crate::record::Record;

/// A destination for log records.
pub trait Handler: Send + Sync {
    /// Writes or stores a record that passed this handler's threshold.
    fn handle(&self, record: &Record<'_>);

    /// Minimum severity this handler accepts; `NOTSET` accepts everything.
    fn level(&self) -> Level {
        Level::NOTSET
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poison| poison.into_inner())
}

/// Renders records as `<timestamp> <LEVEL> <namespace> <message>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Formatter {
    timestamps: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Formatter with a leading local-time timestamp.
    #[must_use]
    pub const fn new() -> Self {
        Self { timestamps: true }
    }

    /// Formatter that omits the timestamp column, for deterministic output.
    #[must_use]
    pub const fn without_timestamp() -> Self {
        Self { timestamps: false }
    }

    /// Renders `record` without a trailing newline.
    ///
    /// Attached error context follows the message on subsequent lines.
    #[must_use]
    pub fn format(&self, record: &Record<'_>) -> String {
        let mut line = String::new();
        if self.timestamps {
            line.push_str(&format_timestamp(record.time()));
            line.push(' ');
        }
        line.push_str(&format!("{} {} {}", record.level(), record.name(), record.args()));
        if let Some(error) = record.error() {
            line.push('\n');
            line.push_str(error);
        }
        line
    }
}

/// Formats `time` as `YYYY-MM-DD HH:MM:SS,mmm` in local time, falling back to UTC.
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    let utc = OffsetDateTime::from(time);
    let moment = UtcOffset::current_local_offset().map_or(utc, |offset| utc.to_offset(offset));
    moment
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"
        ))
        .unwrap_or_else(|_| "1970-01-01 00:00:00,000".to_owned())
}

/// Writes formatted records to an [`io::Write`] target.
///
/// The writer sits behind a mutex so concurrent log calls from several
/// threads produce whole lines rather than interleaved fragments.
#[derive(Debug)]
pub struct StreamHandler<W> {
    writer: Mutex<W>,
    formatter: Formatter,
    line_mode: LineMode,
    level: Level,
}

impl StreamHandler<io::Stdout> {
    /// Handler writing to standard output with the default format.
    ///
    /// This is the destination attached by verbose-mode instance loggers.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamHandler<io::Stderr> {
    /// Handler writing to standard error with the default format.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> StreamHandler<W> {
    /// Creates a handler with the default formatter and newline-terminated records.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            formatter: Formatter::new(),
            line_mode: LineMode::WithNewline,
            level: Level::NOTSET,
        }
    }

    /// Replaces the formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replaces the line mode.
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Sets the minimum severity written by this handler.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the configured line mode.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the handler and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl<W> Handler for StreamHandler<W>
where
    W: Write + Send,
{
    fn handle(&self, record: &Record<'_>) {
        let mut rendered = self.formatter.format(record);
        if self.line_mode.append_newline() {
            rendered.push('\n');
        }
        let mut writer = lock(&self.writer);
        let _ = writer.write_all(rendered.as_bytes());
        let _ = writer.flush();
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// Clonable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffered output as (lossy) UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.bytes)).into_owned()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        lock(&self.bytes).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.bytes).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Owned snapshot of a record stored by a [`CaptureHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Severity of the record.
    pub level: Level,
    /// Namespace of the emitting logger.
    pub name: String,
    /// Rendered message.
    pub message: String,
    /// Source file of the call site.
    pub file: &'static str,
    /// Source line of the call site.
    pub line: u32,
    /// Name of the emitting thread, if it has one.
    pub thread: Option<String>,
    /// Rendered error chain, if one was attached.
    pub error: Option<String>,
}

impl From<&Record<'_>> for CapturedRecord {
    fn from(record: &Record<'_>) -> Self {
        Self {
            level: record.level(),
            name: record.name().to_owned(),
            message: record.message(),
            file: record.file(),
            line: record.line(),
            thread: record.thread_name().map(str::to_owned),
            error: record.error().map(str::to_owned),
        }
    }
}

/// Handler that keeps every accepted record in memory.
#[derive(Debug, Default)]
pub struct CaptureHandler {
    records: Mutex<Vec<CapturedRecord>>,
    level: Level,
}

impl CaptureHandler {
    /// Creates a handler accepting every level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler accepting `level` and above.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            level,
        }
    }

    /// Removes and returns all captured records in emission order.
    pub fn drain(&self) -> Vec<CapturedRecord> {
        lock(&self.records).drain(..).collect()
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    /// Reports whether no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }
}

impl Handler for CaptureHandler {
    fn handle(&self, record: &Record<'_>) {
        lock(&self.records).push(CapturedRecord::from(record));
    }

    fn level(&self) -> Level {
        self.level
    }
}
