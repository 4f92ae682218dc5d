//! Patterns about composing objects into larger structures.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
