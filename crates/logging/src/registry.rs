//! crates/logging/src/registry.rs
//! Namespace-keyed logger registry and the manager-wide disable threshold.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use crate::level::Level;
use crate::logger::Logger;

/// Name reported by the root logger.
pub const ROOT_LOGGER_NAME: &str = "root";

/// Registry-wide settings shared by every logger of one [`Registry`].
#[derive(Debug, Default)]
pub struct Manager {
    disable: AtomicU32,
}

impl Manager {
    /// Suppresses every record at or below `level`, regardless of logger levels.
    ///
    /// Passing [`Level::NOTSET`] lifts the suppression.
    pub fn disable(&self, level: Level) {
        self.disable.store(level.as_u32(), Ordering::Relaxed);
    }

    /// Current suppression threshold.
    #[must_use]
    pub fn disabled_at(&self) -> Level {
        Level::new(self.disable.load(Ordering::Relaxed))
    }

    /// Reports whether records at `level` are suppressed (`threshold >= level`).
    #[must_use]
    pub fn is_disabled(&self, level: Level) -> bool {
        self.disabled_at() >= level
    }
}

/// Hierarchical registry of loggers keyed by dotted namespace.
///
/// Loggers are created lazily and never removed. Requesting `"a.b.c"` creates
/// any missing ancestor (`"a"`, `"a.b"`) with a `NOTSET` level so parent
/// links are exact from the start; `"a"`'s parent is the root logger, whose
/// level defaults to `WARNING`.
#[derive(Debug)]
pub struct Registry {
    manager: Arc<Manager>,
    root: Arc<Logger>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an isolated registry with a fresh root logger.
    #[must_use]
    pub fn new() -> Self {
        let manager = Arc::new(Manager::default());
        let root = Arc::new(Logger::new(
            ROOT_LOGGER_NAME.to_owned(),
            Level::WARNING,
            None,
            Arc::clone(&manager),
        ));
        Self {
            manager,
            root,
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry, created on first use and never torn down.
    #[must_use]
    pub fn global() -> &'static Arc<Self> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Self::new()))
    }

    /// Manager shared by all loggers in this registry.
    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// The root logger.
    #[must_use]
    pub fn root(&self) -> &Arc<Logger> {
        &self.root
    }

    /// Returns the shared logger for `name`, creating it on first request.
    ///
    /// An empty name or [`ROOT_LOGGER_NAME`] returns the root logger.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if name.is_empty() || name == ROOT_LOGGER_NAME {
            return Arc::clone(&self.root);
        }
        if let Some(existing) = self
            .loggers
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .get(name)
        {
            return Arc::clone(existing);
        }
        let mut loggers = self
            .loggers
            .write()
            .unwrap_or_else(|poison| poison.into_inner());
        self.get_or_create(&mut loggers, name)
    }

    fn get_or_create(&self, loggers: &mut HashMap<String, Arc<Logger>>, name: &str) -> Arc<Logger> {
        if let Some(existing) = loggers.get(name) {
            return Arc::clone(existing);
        }
        let parent = match name.rsplit_once('.') {
            Some((prefix, _)) if !prefix.is_empty() => self.get_or_create(loggers, prefix),
            _ => Arc::clone(&self.root),
        };
        let logger = Arc::new(Logger::new(
            name.to_owned(),
            Level::NOTSET,
            Some(parent),
            Arc::clone(&self.manager),
        ));
        loggers.insert(name.to_owned(), Arc::clone(&logger));
        logger
    }

    /// Reports whether a logger for `name` has been created.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.loggers
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .contains_key(name)
    }

    /// Sorted names of every non-root logger created so far.
    #[must_use]
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .loggers
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Shorthand for [`Manager::disable`].
    pub fn disable(&self, level: Level) {
        self.manager.disable(level);
    }
}

/// Returns the logger for `name` from the global registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    Registry::global().get_logger(name)
}

/// Sets the disable threshold of the global registry.
pub fn disable(level: Level) {
    Registry::global().disable(level);
}
