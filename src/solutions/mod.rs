pub mod day01;

use crate::core::registry::Registry;

/// Every solution shipped with the crate.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(Box::new(day01::Trebuchet));
    registry
}
