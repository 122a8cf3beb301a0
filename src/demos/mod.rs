//! Named demo scenes
//!
//! Demos are registered explicitly in a [`Registry`] built at startup and
//! passed to whoever renders them; nothing is initialised globally.

/// The built-in scenes
pub mod catalog;
/// Name to builder mapping
pub mod registry;

pub use catalog::{CatalogOptions, standard_registry};
pub use registry::{Demo, DemoBuilder, DemoEntry, Registry};
