//! crates/echo/src/factory.rs
//! Builds the logger slot for an instance from its echo override.

use std::sync::Arc;

use logging::{Handler, Level, Registry, StreamHandler};

use crate::adapter::{EchoLogger, InstanceLogger};
use crate::flag::EchoOverride;
use crate::identified::Identified;
use crate::level_map::effective_override_level;
use crate::name::resolve_instance_name;

/// Stores `echo` on `instance` and installs the matching logger slot.
///
/// The namespace is resolved with
/// [`resolve_instance_name`](crate::resolve_instance_name) in the instance's
/// own registry. An `Unset` or `False` override yields the plain namespace
/// logger; `True` or `Debug` yields an [`InstanceLogger`], and the namespace
/// gets a standard-output handler unless it already has one of its own.
pub fn instance_logger<T: Identified + ?Sized>(instance: &mut T, echo: EchoOverride) {
    let name = resolve_instance_name(instance);
    let registry = Arc::clone(instance.log_state().registry());
    let logger = build_logger(&registry, &name, echo);
    instance.log_state_mut().replace(echo, logger);
}

/// Logger slot for `name` under `echo`, attaching a standard-output handler
/// when the override needs one.
#[must_use]
pub fn build_logger(registry: &Registry, name: &str, echo: EchoOverride) -> EchoLogger {
    build_logger_with(registry, name, echo, || Arc::new(StreamHandler::stdout()))
}

/// Like [`build_logger`], with the default handler supplied by `make_handler`.
///
/// `make_handler` runs only when the override level is `INFO` or lower and
/// the namespace logger has no handler attached directly; handlers reachable
/// through ancestors do not count.
pub fn build_logger_with<F>(
    registry: &Registry,
    name: &str,
    echo: EchoOverride,
    make_handler: F,
) -> EchoLogger
where
    F: FnOnce() -> Arc<dyn Handler>,
{
    let logger = registry.get_logger(name);
    let Some(level) = effective_override_level(echo) else {
        return EchoLogger::Direct(logger);
    };
    if level <= Level::INFO {
        logger.add_handler_if_empty(make_handler);
    }
    EchoLogger::Instance(InstanceLogger::new(echo, logger))
}
