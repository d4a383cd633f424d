//! The harmonizer — resolve, weigh, mix.
//!
//! ```text
//! harmonize(color, options)
//!   1. harmony = options.harmony as a color, or registry[name](color)
//!   2. weight  = weight(color, harmony, median, margin)      ∈ [0%, 50%]
//!   3. result  = mix(harmony, color, weight)
//! ```
//!
//! Step 3 keeps the argument order of `mix`: the weight is the share of the
//! *harmony* color, the base keeps the rest.

use harmonia_color::{Color, mix};
use tracing::debug;

use crate::error::InvalidHarmonyError;
use crate::harmony::Harmony;
use crate::options::HarmonizeOptions;
use crate::transform::TransformRegistry;
use crate::weight::weight;

/// Harmonizes colors against a borrowed [`TransformRegistry`].
///
/// Holds nothing but the registry reference, so it is `Copy` and can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Harmonizer<'r> {
    registry: &'r TransformRegistry,
}

impl Default for Harmonizer<'static> {
    /// A harmonizer over [`TransformRegistry::builtin`].
    fn default() -> Self {
        Self::new(TransformRegistry::builtin())
    }
}

impl<'r> Harmonizer<'r> {
    /// Harmonize against `registry`.
    #[must_use]
    pub const fn new(registry: &'r TransformRegistry) -> Self {
        Self { registry }
    }

    /// Turn `harmony` into a concrete color for base `color`.
    ///
    /// A literal color is returned as-is and the registry is not consulted.
    /// A name is looked up and applied to `color`.
    ///
    /// # Errors
    ///
    /// [`InvalidHarmonyError`] if the name is not registered.
    pub fn resolve(&self, color: Color, harmony: &Harmony) -> Result<Color, InvalidHarmonyError> {
        let name = match harmony {
            Harmony::Color(literal) => {
                debug!(%color, harmony = %literal, "using literal harmony color");
                return Ok(*literal);
            }
            Harmony::Transform(name) => name,
        };

        let Some(transform) = self.registry.get(name) else {
            let err = InvalidHarmonyError::unresolved(name);
            debug!(%color, %err, "harmony did not resolve to a color");
            return Err(err);
        };

        let resolved = transform.apply(color);
        debug!(%color, transform = %name, %resolved, "resolved harmony transform");
        Ok(resolved)
    }

    /// Blend `color` with its harmony, weighted by relative brightness.
    ///
    /// # Errors
    ///
    /// [`InvalidHarmonyError`] if `options.harmony` names an unregistered
    /// transform.
    pub fn harmonize(
        &self,
        color: Color,
        options: &HarmonizeOptions,
    ) -> Result<Color, InvalidHarmonyError> {
        let harmony = self.resolve(color, &options.harmony)?;
        let weight = weight(color, harmony, options.median, options.margin);
        Ok(mix(harmony, color, weight))
    }
}

/// Harmonize `color` using the builtin transforms.
///
/// ```
/// use harmonia_blend::{HarmonizeOptions, harmonize};
/// use harmonia_color::Color;
///
/// let base = Color::hex("#336699").unwrap();
/// let accent = harmonize(base, &HarmonizeOptions::default()).unwrap();
/// assert_ne!(accent, base);
/// ```
///
/// # Errors
///
/// [`InvalidHarmonyError`] if `options.harmony` names an unknown transform.
pub fn harmonize(color: Color, options: &HarmonizeOptions) -> Result<Color, InvalidHarmonyError> {
    Harmonizer::default().harmonize(color, options)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
