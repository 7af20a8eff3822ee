//! crates/echo/src/name.rs
//! Logger namespace resolution for classes and instances.

use std::any;

use crate::identified::Identified;

/// Dotted path of `T`: module path segments joined by `.`, generic
/// arguments dropped.
///
/// `my_app::engine::Engine<u8>` becomes `my_app.engine.Engine`.
#[must_use]
pub fn qualified_type_name<T: ?Sized>() -> String {
    let raw = any::type_name::<T>();
    let base = raw.split_once('<').map_or(raw, |(head, _)| head);
    base.replace("::", ".")
}

/// Namespace shared by every instance of `T`.
///
/// An explicit non-empty [`Identified::LOGGER_NAMESPACE`] wins; otherwise the
/// type's [`qualified_type_name`] is used.
#[must_use]
pub fn resolve_class_name<T: Identified + ?Sized>() -> String {
    T::LOGGER_NAMESPACE
        .filter(|namespace| !namespace.is_empty())
        .map_or_else(qualified_type_name::<T>, str::to_owned)
}

/// Namespace for one instance: the class namespace, plus `.<label>` when the
/// instance carries a non-empty logging name.
#[must_use]
pub fn resolve_instance_name<T: Identified + ?Sized>(instance: &T) -> String {
    instance_name_for::<T>(instance.logging_name())
}

/// Namespace an instance of `T` labelled `label` logs under.
///
/// Used before the instance exists, while its [`LogState`](crate::LogState)
/// is being built.
#[must_use]
pub fn instance_name_for<T: Identified + ?Sized>(label: Option<&str>) -> String {
    let class = resolve_class_name::<T>();
    match label {
        Some(label) if !label.is_empty() => format!("{class}.{label}"),
        _ => class,
    }
}

#[cfg(test)]
mod tests {
    use std::marker::PhantomData;

    use super::*;

    struct Plain;

    struct Generic<T>(PhantomData<T>);

    #[test]
    fn module_path_uses_dots() {
        let name = qualified_type_name::<Plain>();
        assert!(name.starts_with("echo."), "{name}");
        assert!(name.ends_with(".tests.Plain"), "{name}");
        assert!(!name.contains("::"));
    }

    #[test]
    fn generic_arguments_are_dropped() {
        let name = qualified_type_name::<Generic<std::string::String>>();
        assert!(name.ends_with(".tests.Generic"), "{name}");
    }
}
