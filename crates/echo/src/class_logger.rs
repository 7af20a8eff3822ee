//! crates/echo/src/class_logger.rs
//! Class-level loggers and the process-wide record of logged classes.

use std::any;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, OnceLock};

use logging::{Level, Logger, Registry};

use crate::identified::Identified;
use crate::name::resolve_class_name;

static LOGGED_CLASSES: OnceLock<Mutex<BTreeSet<&'static str>>> = OnceLock::new();

fn logged() -> &'static Mutex<BTreeSet<&'static str>> {
    LOGGED_CLASSES.get_or_init(|| Mutex::new(BTreeSet::new()))
}

/// Shared logger for the class namespace of `T` in the global registry.
#[must_use]
pub fn class_logger<T: Identified + ?Sized>() -> Arc<Logger> {
    class_logger_in::<T>(Registry::global())
}

/// Shared logger for the class namespace of `T` in `registry`.
///
/// Also records `T` as a logged class.
#[must_use]
pub fn class_logger_in<T: Identified + ?Sized>(registry: &Registry) -> Arc<Logger> {
    logged()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .insert(any::type_name::<T>());
    registry.get_logger(&resolve_class_name::<T>())
}

/// Reports whether a class logger was ever requested for `T`.
#[must_use]
pub fn is_class_logged<T: ?Sized>() -> bool {
    logged()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .contains(any::type_name::<T>())
}

/// Type names of every class that requested a class logger, sorted.
#[must_use]
pub fn logged_classes() -> Vec<&'static str> {
    logged()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .iter()
        .copied()
        .collect()
}

/// Gives `namespace` a `WARNING` level unless a level is already set.
///
/// Returns `true` if the level was installed.
pub fn install_default_level(registry: &Registry, namespace: &str) -> bool {
    let logger = registry.get_logger(namespace);
    if logger.level().is_notset() {
        logger.set_level(Level::WARNING);
        true
    } else {
        false
    }
}
