#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/echo/src/lib.rs
//!
//! # Overview
//!
//! `echo` lets one object turn its own log output up without touching the
//! level of the namespace it shares with every other object of its kind.
//! Types implement [`Identified`]; each instance carries an
//! [`EchoOverride`] and a logger slot ([`EchoLogger`]) that is rebuilt
//! whenever the override changes.
//!
//! # Design
//!
//! - [`effective_override_level`] maps `True` to `INFO` and `Debug` to
//!   `DEBUG`; `Unset` and `False` defer to the ambient level.
//! - [`LogState::new_in`] builds an instance's slot at construction time
//!   from its label and initial override; [`instance_logger`] rebuilds it
//!   whenever the override is written.
//! - [`instance_logger`] resolves the instance namespace
//!   (`<class>.<label>`), then stores either the plain namespace logger or an
//!   [`InstanceLogger`] applying the override. Enabling echo attaches a
//!   standard-output handler to the namespace once, unless it already has one.
//! - [`InstanceLogger`] checks the registry disable threshold first, then the
//!   override, then emits through the unchecked [`logging::Logger::emit`]
//!   with the caller's location.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use echo::{EchoOverride, Identified, LogState};
//! use logging::{CaptureHandler, Level, Registry};
//!
//! struct Connection {
//!     log: LogState,
//! }
//!
//! impl Identified for Connection {
//!     const LOGGER_NAMESPACE: Option<&'static str> = Some("app.conn");
//!
//!     fn log_state(&self) -> &LogState {
//!         &self.log
//!     }
//!
//!     fn log_state_mut(&mut self) -> &mut LogState {
//!         &mut self.log
//!     }
//! }
//!
//! let registry = Arc::new(Registry::new());
//! let capture = Arc::new(CaptureHandler::new());
//! registry.get_logger("app.conn").add_handler(capture.clone());
//!
//! let quiet = Connection {
//!     log: LogState::new_in::<Connection>(registry.clone(), None, EchoOverride::Unset),
//! };
//! let loud = Connection {
//!     log: LogState::new_in::<Connection>(registry.clone(), None, EchoOverride::Debug),
//! };
//!
//! quiet.logger().debug(format_args!("hidden"));
//! loud.logger().debug(format_args!("shown"));
//!
//! let records = capture.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].level, Level::DEBUG);
//! assert_eq!(quiet.echo(), EchoOverride::Unset);
//! ```

mod adapter;
mod class_logger;
mod factory;
mod flag;
mod identified;
mod level_map;
mod name;
mod property;

pub use adapter::{EchoLogger, InstanceLogger};
pub use class_logger::{
    class_logger, class_logger_in, install_default_level, is_class_logged, logged_classes,
};
pub use factory::{build_logger, build_logger_with, instance_logger};
pub use flag::{EchoOverride, ParseEchoError};
pub use identified::{Identified, LogState};
pub use level_map::effective_override_level;
pub use name::{instance_name_for, qualified_type_name, resolve_class_name, resolve_instance_name};
pub use property::EchoProperty;
