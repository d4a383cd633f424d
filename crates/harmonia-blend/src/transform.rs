//! Named color transforms.
//!
//! A [`TransformRegistry`] maps names to [`ColorTransform`]s. It is filled
//! once, then only read: lookups are exact-match and a missing name is not
//! an error here, just `None`. The harmonizer decides what absence means.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use harmonia_color::Color;

use crate::builtin::{builtin_names, builtin_transform};

/// A unary `Color -> Color` transform.
///
/// Implemented for every `Fn(Color) -> Color + Send + Sync`, so plain
/// functions, method paths like `Color::invert`, and closures all register
/// directly.
pub trait ColorTransform: Send + Sync {
    /// Derive a color from `color`.
    fn apply(&self, color: Color) -> Color;
}

impl<F> ColorTransform for F
where
    F: Fn(Color) -> Color + Send + Sync,
{
    fn apply(&self, color: Color) -> Color {
        self(color)
    }
}

static BUILTIN: LazyLock<TransformRegistry> = LazyLock::new(TransformRegistry::with_builtins);

/// Name → transform lookup table.
#[derive(Default)]
pub struct TransformRegistry {
    transforms: BTreeMap<String, Box<dyn ColorTransform>>,
}

impl TransformRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every builtin transform.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &name in builtin_names() {
            if let Some(transform) = builtin_transform(name) {
                registry.register(name, transform);
            }
        }
        registry
    }

    /// The shared, immutable builtin registry.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Register `transform` under `name`.
    ///
    /// Returns `true` if an existing entry with that name was replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transform: impl ColorTransform + 'static,
    ) -> bool {
        self.transforms
            .insert(name.into(), Box::new(transform))
            .is_some()
    }

    /// Look up a transform by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ColorTransform> {
        self.transforms.get(name).map(|transform| &**transform)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }

    /// Number of registered transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
