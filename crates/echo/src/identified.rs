//! crates/echo/src/identified.rs
//! The capability trait for types that log under their own namespace.

use std::sync::Arc;

use logging::{Level, Registry};

use crate::adapter::EchoLogger;
use crate::class_logger::class_logger_in;
use crate::factory::build_logger;
use crate::flag::EchoOverride;
use crate::name::instance_name_for;
use crate::property::EchoProperty;

/// Logging state embedded in every [`Identified`] instance.
///
/// Holds the stored echo override, the current logger slot and the registry
/// the instance resolves its namespace in. The slot is built from the
/// instance's label and initial override when the state is created, so a
/// labelled instance logs under `<class>.<label>` from construction on.
#[derive(Clone, Debug)]
pub struct LogState {
    echo: EchoOverride,
    logger: EchoLogger,
    registry: Arc<Registry>,
}

impl LogState {
    /// State for a new instance of `T` in the global registry.
    ///
    /// `label` must be what the instance will report from
    /// [`Identified::logging_name`].
    #[must_use]
    pub fn new<T: Identified + ?Sized>(label: Option<&str>, echo: EchoOverride) -> Self {
        Self::new_in::<T>(Arc::clone(Registry::global()), label, echo)
    }

    /// State for a new instance of `T` in `registry`.
    #[must_use]
    pub fn new_in<T: Identified + ?Sized>(
        registry: Arc<Registry>,
        label: Option<&str>,
        echo: EchoOverride,
    ) -> Self {
        let _class = class_logger_in::<T>(&registry);
        let logger = build_logger(&registry, &instance_name_for::<T>(label), echo);
        Self {
            echo,
            logger,
            registry,
        }
    }

    /// Stored override, exactly as last written.
    #[must_use]
    pub const fn echo(&self) -> EchoOverride {
        self.echo
    }

    /// Current logger slot.
    #[must_use]
    pub const fn logger(&self) -> &EchoLogger {
        &self.logger
    }

    /// Registry this state resolves namespaces in.
    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub(crate) fn replace(&mut self, echo: EchoOverride, logger: EchoLogger) {
        self.echo = echo;
        self.logger = logger;
    }
}

/// A type whose instances log under a class namespace with an optional
/// per-instance label and echo override.
///
/// Implementors embed a [`LogState`] and expose it through
/// [`log_state`](Self::log_state) and [`log_state_mut`](Self::log_state_mut);
/// everything else is provided.
///
/// ```
/// use echo::{EchoOverride, Identified, LogState};
///
/// struct Pool {
///     label: Option<String>,
///     log: LogState,
/// }
///
/// impl Identified for Pool {
///     const LOGGER_NAMESPACE: Option<&'static str> = Some("app.pool");
///
///     fn logging_name(&self) -> Option<&str> {
///         self.label.as_deref()
///     }
///
///     fn log_state(&self) -> &LogState {
///         &self.log
///     }
///
///     fn log_state_mut(&mut self) -> &mut LogState {
///         &mut self.log
///     }
/// }
///
/// let mut pool = Pool {
///     label: Some("primary".into()),
///     log: LogState::new::<Pool>(Some("primary"), EchoOverride::Unset),
/// };
/// assert_eq!(pool.logger().name(), "app.pool.primary");
///
/// pool.set_echo(EchoOverride::Debug);
/// assert_eq!(pool.logger().name(), "app.pool.primary");
/// assert!(pool.should_log_debug());
/// ```
pub trait Identified {
    /// Explicit class namespace; when `None` or empty the type path is used.
    const LOGGER_NAMESPACE: Option<&'static str> = None;

    /// Per-instance label appended to the class namespace.
    fn logging_name(&self) -> Option<&str> {
        None
    }

    /// Embedded logging state.
    fn log_state(&self) -> &LogState;

    /// Embedded logging state, mutably.
    fn log_state_mut(&mut self) -> &mut LogState;

    /// Current logger slot.
    fn logger(&self) -> &EchoLogger {
        self.log_state().logger()
    }

    /// Stored echo override.
    fn echo(&self) -> EchoOverride {
        EchoProperty.get(self)
    }

    /// Stores `echo` and rebuilds the logger slot for it.
    fn set_echo(&mut self, echo: impl Into<EchoOverride>) {
        EchoProperty.set(self, echo);
    }

    /// Class-level access to the echo accessor pair.
    #[must_use]
    fn echo_property() -> EchoProperty
    where
        Self: Sized,
    {
        EchoProperty
    }

    /// Reports whether a `DEBUG` record would currently be emitted.
    fn should_log_debug(&self) -> bool {
        self.logger().is_enabled_for(Level::DEBUG)
    }

    /// Reports whether an `INFO` record would currently be emitted.
    fn should_log_info(&self) -> bool {
        self.logger().is_enabled_for(Level::INFO)
    }
}
