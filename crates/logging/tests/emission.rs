//! Integration tests for record emission through handlers.
//!
//! These tests verify handler dispatch along the propagation chain, handler
//! thresholds, the unchecked emit primitive, error attachment and caller
//! location reporting.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

use logging::{
    CaptureHandler, Formatter, Handler, Level, LineMode, Registry, SharedBuffer, StreamHandler,
};

fn capture_on_root(registry: &Registry) -> Arc<CaptureHandler> {
    let capture = Arc::new(CaptureHandler::new());
    registry.root().add_handler(capture.clone());
    capture
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Verifies records propagate to handlers on ancestors.
#[test]
fn records_reach_ancestor_handlers() {
    let registry = Registry::new();
    let root_capture = capture_on_root(&registry);
    let app_capture = Arc::new(CaptureHandler::new());
    registry.get_logger("app").add_handler(app_capture.clone());

    registry.get_logger("app.pool").warning(format_args!("pool exhausted"));

    assert_eq!(root_capture.len(), 1);
    assert_eq!(app_capture.len(), 1);
    assert_eq!(app_capture.drain()[0].name, "app.pool");
}

/// Verifies propagation stops at a logger with propagate disabled.
#[test]
fn propagation_can_be_cut() {
    let registry = Registry::new();
    let root_capture = capture_on_root(&registry);
    let app = registry.get_logger("app");
    let app_capture = Arc::new(CaptureHandler::new());
    app.add_handler(app_capture.clone());
    app.set_propagate(false);

    registry.get_logger("app.pool").error(format_args!("lost connection"));

    assert_eq!(app_capture.len(), 1);
    assert!(root_capture.is_empty());
}

/// Verifies handler thresholds filter independently of logger levels.
#[test]
fn handler_threshold_filters_records() {
    let registry = Registry::new();
    let errors_only = Arc::new(CaptureHandler::with_level(Level::ERROR));
    let logger = registry.get_logger("app");
    logger.set_level(Level::DEBUG);
    logger.add_handler(errors_only.clone());

    logger.info(format_args!("ignored"));
    logger.error(format_args!("kept"));

    let records = errors_only.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "kept");
}

/// Verifies the level-checked API drops records below the effective level.
#[test]
fn level_checked_methods_respect_effective_level() {
    let registry = Registry::new();
    let capture = capture_on_root(&registry);
    let logger = registry.get_logger("app");

    logger.debug(format_args!("no"));
    logger.info(format_args!("no"));
    logger.warning(format_args!("yes"));
    logger.critical(format_args!("yes"));
    logger.log(Level::new(35), format_args!("custom"));

    let levels: Vec<Level> = capture.drain().into_iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![Level::WARNING, Level::CRITICAL, Level::new(35)]);
}

/// Verifies emit bypasses level and disable checks.
#[test]
fn emit_skips_level_checks() {
    let registry = Registry::new();
    let capture = capture_on_root(&registry);
    registry.disable(Level::CRITICAL);
    let logger = registry.get_logger("app");

    logger.emit(Level::DEBUG, format_args!("forced"), Location::caller(), None);

    let records = capture.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::DEBUG);
}

/// Verifies duplicate handlers are attached only once.
#[test]
fn duplicate_handler_is_rejected() {
    let registry = Registry::new();
    let logger = registry.get_logger("app");
    let capture: Arc<dyn Handler> = Arc::new(CaptureHandler::new());

    assert!(logger.add_handler(Arc::clone(&capture)));
    assert!(!logger.add_handler(Arc::clone(&capture)));
    assert_eq!(logger.handlers().len(), 1);

    assert!(logger.remove_handler(&capture));
    assert!(!logger.remove_handler(&capture));
    assert!(!logger.has_own_handlers());
}

/// Verifies conditional attachment only fills an empty handler list.
#[test]
fn add_handler_if_empty_attaches_once() {
    let registry = Registry::new();
    let logger = registry.get_logger("app");

    assert!(logger.add_handler_if_empty(|| Arc::new(CaptureHandler::new())));
    assert!(!logger.add_handler_if_empty(|| Arc::new(CaptureHandler::new())));
    assert_eq!(logger.handlers().len(), 1);
}

/// Verifies has_handlers looks up the propagation chain.
#[test]
fn has_handlers_walks_ancestors() {
    let registry = Registry::new();
    let leaf = registry.get_logger("app.pool");
    assert!(!leaf.has_handlers());

    registry.get_logger("app").add_handler(Arc::new(CaptureHandler::new()));
    assert!(leaf.has_handlers());
    assert!(!leaf.has_own_handlers());

    leaf.set_propagate(false);
    assert!(!leaf.has_handlers());
}

// ============================================================================
// Record Content Tests
// ============================================================================

#[derive(Debug)]
struct CheckoutError;

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pool timeout")
    }
}

impl std::error::Error for CheckoutError {}

/// Verifies exception attaches the error at ERROR severity.
#[test]
fn exception_attaches_error() {
    let registry = Registry::new();
    let capture = capture_on_root(&registry);

    registry
        .get_logger("app")
        .exception(&CheckoutError, format_args!("checkout failed"));

    let records = capture.drain();
    assert_eq!(records[0].level, Level::ERROR);
    assert_eq!(records[0].error.as_deref(), Some("error: pool timeout"));
}

/// Verifies records report the line of the user's call, not the library's.
#[test]
fn records_report_caller_location() {
    let registry = Registry::new();
    let capture = capture_on_root(&registry);
    let logger = registry.get_logger("app");

    let expected_line = line!() + 1;
    logging::warning!(logger, "from {}", "here");

    let records = capture.drain();
    assert_eq!(records[0].file, file!());
    assert_eq!(records[0].line, expected_line);
    assert_eq!(records[0].message, "from here");
}

/// Verifies records carry the name of the emitting thread.
#[test]
fn records_carry_thread_name() {
    let registry = Arc::new(Registry::new());
    let capture = capture_on_root(&registry);

    let worker = {
        let registry = Arc::clone(&registry);
        std::thread::Builder::new()
            .name("pool-reaper".to_owned())
            .spawn(move || registry.get_logger("app.pool").warning(format_args!("reaped")))
            .expect("spawn named thread")
    };
    worker.join().expect("worker thread");
    std::thread::Builder::new()
        .spawn({
            let registry = Arc::clone(&registry);
            move || registry.get_logger("app.pool").warning(format_args!("anonymous"))
        })
        .expect("spawn unnamed thread")
        .join()
        .expect("unnamed thread");

    let records = capture.drain();
    assert_eq!(records[0].thread.as_deref(), Some("pool-reaper"));
    assert_eq!(records[1].thread, None);
}

/// Verifies message content passes through untouched.
#[test]
fn message_content_is_not_altered() {
    let registry = Registry::new();
    let capture = capture_on_root(&registry);

    let text = "  100% done, ünïcødé\ttab  ";
    registry.get_logger("app").error(format_args!("{text}"));

    assert_eq!(capture.drain()[0].message, text);
}

// ============================================================================
// Stream Output Tests
// ============================================================================

/// Verifies the stream handler renders one line per record.
#[test]
fn stream_handler_renders_lines() {
    let registry = Registry::new();
    let buffer = SharedBuffer::new();
    let handler = StreamHandler::new(buffer.clone()).with_formatter(Formatter::without_timestamp());
    let logger = registry.get_logger("app.engine");
    logger.set_level(Level::INFO);
    logger.add_handler(Arc::new(handler));

    logger.info(format_args!("BEGIN (implicit)"));
    logger.warning(format_args!("COMMIT"));

    assert_eq!(
        buffer.contents(),
        "INFO app.engine BEGIN (implicit)\nWARNING app.engine COMMIT\n"
    );
}

/// Verifies error context follows the message line.
#[test]
fn stream_handler_renders_error_context() {
    let registry = Registry::new();
    let buffer = SharedBuffer::new();
    let handler = StreamHandler::new(buffer.clone())
        .with_formatter(Formatter::without_timestamp())
        .with_line_mode(LineMode::WithNewline);
    let logger = registry.get_logger("app");
    logger.add_handler(Arc::new(handler));

    let err = io::Error::other("disk full");
    logger.exception(&err, format_args!("flush failed"));

    assert_eq!(buffer.contents(), "ERROR app flush failed\nerror: disk full\n");
}

/// Verifies concurrent emission from several threads keeps whole lines.
#[test]
fn concurrent_emission_keeps_lines_intact() {
    let registry = Arc::new(Registry::new());
    let buffer = SharedBuffer::new();
    registry.root().add_handler(Arc::new(
        StreamHandler::new(buffer.clone()).with_formatter(Formatter::without_timestamp()),
    ));

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let logger = registry.get_logger("app.worker");
                for i in 0..25 {
                    logger.warning(format_args!("worker {worker} item {i}"));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker thread");
    }

    let output = buffer.contents();
    assert_eq!(output.lines().count(), 100);
    assert!(output.lines().all(|line| line.starts_with("WARNING app.worker worker ")));
}
