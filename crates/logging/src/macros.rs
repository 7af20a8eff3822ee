//! crates/logging/src/macros.rs
//! Format-string front ends for the logging methods.
//!
//! Each macro expands to a method call on its first argument, so it works
//! with anything exposing the logger method surface: a [`Logger`](crate::Logger)
//! handle or a wrapper with the same methods. The message is passed as
//! [`format_args!`] and only rendered if a handler accepts the record.

/// Log at an explicit level.
///
/// # Example
/// ```ignore
/// log!(logger, Level::new(25), "pool size {}", size);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}

/// Log at `DEBUG`.
///
/// # Example
/// ```ignore
/// debug!(logger, "checked out connection {}", id);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
}

/// Log at `INFO`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
}

/// Log at `WARNING`.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::core::format_args!($($arg)+))
    };
}

/// Log at `ERROR`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
}

/// Log at `CRITICAL`.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critical(::core::format_args!($($arg)+))
    };
}

/// Log at `ERROR` with an attached error and its source chain.
///
/// # Example
/// ```ignore
/// exception!(logger, &err, "rollback failed for {}", name);
/// ```
#[macro_export]
macro_rules! exception {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.exception($err, ::core::format_args!($($arg)+))
    };
}
