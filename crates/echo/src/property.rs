//! crates/echo/src/property.rs
//! Getter/setter pair for the echo override of an [`Identified`] instance.

use crate::factory::instance_logger;
use crate::flag::EchoOverride;
use crate::identified::Identified;

/// Accessor pair for the `echo` attribute of [`Identified`] types.
///
/// Reading returns the stored override unchanged; writing stores the new
/// value and rebuilds the instance's logger slot through
/// [`instance_logger`]. Accessed without an instance (through
/// [`Identified::echo_property`]) it is just this value, carrying
/// [`EchoProperty::DOC`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EchoProperty;

impl EchoProperty {
    /// User-facing description of the attribute.
    pub const DOC: &'static str = "When `true`, enable log output for this element.\n\n\
        This sets the logging level of the element's namespace logger for this \
        instance only: `true` logs at INFO and above, `debug` also logs DEBUG \
        records. Other instances sharing the namespace are not affected.";

    /// Documentation attached to the attribute.
    #[must_use]
    pub const fn doc(self) -> &'static str {
        Self::DOC
    }

    /// Stored override of `instance`.
    pub fn get<T: Identified + ?Sized>(self, instance: &T) -> EchoOverride {
        instance.log_state().echo()
    }

    /// Stores `value` on `instance` and rebuilds its logger slot.
    pub fn set<T, V>(self, instance: &mut T, value: V)
    where
        T: Identified + ?Sized,
        V: Into<EchoOverride>,
    {
        instance_logger(instance, value.into());
    }
}
