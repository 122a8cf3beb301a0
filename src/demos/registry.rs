//! Registry mapping demo names to zero-argument builders

use crate::algebra::color::Color;
use crate::algebra::image::Image;
use crate::io::error::{AlgebraError, Result, invalid_parameter};
use crate::render::animation::Animation;
use std::fmt;

/// A scene ready to render
#[derive(Clone, Debug)]
pub enum Demo {
    /// Rendered once
    Still(Image<Color>),
    /// Rendered once per frame by the animation driver
    Animated(Animation<Color>),
}

impl Demo {
    /// Whether the demo changes over time
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }
}

/// Builds a demo on demand; failures propagate instead of yielding a blank scene
pub type DemoBuilder = Box<dyn Fn() -> Result<Demo> + Send + Sync>;

/// A registered demo: name, description, preferred size and builder
pub struct DemoEntry {
    name: &'static str,
    summary: &'static str,
    size: (usize, usize),
    builder: DemoBuilder,
}

impl fmt::Debug for DemoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoEntry")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl DemoEntry {
    /// Name used to select the demo
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description
    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// Preferred `(width, height)` in pixels
    pub const fn size(&self) -> (usize, usize) {
        self.size
    }

    /// Construct the demo
    ///
    /// # Errors
    ///
    /// Propagates any error raised while assembling the scene, such as a
    /// missing bitmap or an invalid scale factor
    pub fn build(&self) -> Result<Demo> {
        (self.builder)()
    }
}

/// Ordered collection of demos, looked up by name
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<DemoEntry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder under `name`
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or already registered
    pub fn register<F>(
        &mut self,
        name: &'static str,
        summary: &'static str,
        size: (usize, usize),
        builder: F,
    ) -> Result<()>
    where
        F: Fn() -> Result<Demo> + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(invalid_parameter("name", &name, &"must not be empty"));
        }
        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(invalid_parameter("name", &name, &"is already registered"));
        }

        self.entries.push(DemoEntry {
            name,
            summary,
            size,
            builder: Box::new(builder),
        });
        Ok(())
    }

    /// Look up a demo by name
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnknownDemo`] if nothing is registered under `name`
    pub fn get(&self, name: &str) -> Result<&DemoEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| AlgebraError::UnknownDemo {
                name: name.to_string(),
            })
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(DemoEntry::name).collect()
    }

    /// Iterate over entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &DemoEntry> {
        self.entries.iter()
    }

    /// Number of registered demos
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no demo is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
