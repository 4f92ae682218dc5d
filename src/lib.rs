//! # Design Patterns Catalog
//!
//! Each pattern lives in its own module with a small toy domain and a
//! `demo` function that writes the pattern's transcript to any writer.
//!
//! ## Creational Patterns
//! - Simple Factory (user accounts)
//! - Factory Method (platform dialogs)
//! - Abstract Factory (GUI families)
//! - Builder + Director (car parts and car manuals)
//! - Builder, alternate variant (jeep and passenger vehicles)
//! - Prototype (shape registry with deep cloning)
//! - Singleton (database connection)
//! - Borg (handles sharing one state)
//!
//! ## Structural Patterns
//! - Adapter (guitar and ear)
//! - Bridge (remotes and devices)
//! - Composite (graphic trees)
//! - Decorator (notification channels)
//!
//! Run demos with:
//! ```bash
//! cargo run --bin catalog -- list
//! cargo run --bin catalog -- run builder prototype
//! cargo run --bin catalog -- run --all
//! ```

pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod platform;
pub mod structural;

pub use config::CatalogConfig;
pub use error::{PatternError, Result};
pub use platform::Platform;
