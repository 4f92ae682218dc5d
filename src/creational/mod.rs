//! Patterns about creating objects.

pub mod abstract_factory;
pub mod borg;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod simple_factory;
pub mod singleton;
pub mod vehicle;
