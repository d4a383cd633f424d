//! # harmonia-blend — brightness-weighted harmonizing
//!
//! Blends a base color with a "harmony" color, where the share of harmony
//! color is not fixed but follows how much brighter or darker it is than
//! the base. Brighter harmonies pull the weight up, darker ones pull it
//! down, and the weight never exceeds 50% so the base always dominates.
//!
//! # Architecture
//!
//! ```text
//! Harmony (literal color | transform name) + HarmonizeOptions
//!     │
//!     ▼
//! harmonize.rs: resolve the harmony against a TransformRegistry
//!     │          (unknown name → InvalidHarmonyError)
//!     ▼
//! weight.rs:    median + round(brightness diff × margin), clamped to 0–50%
//!     │
//!     ▼
//! harmonia_color::mix(harmony, base, weight)
//! ```
//!
//! Everything here is pure. The builtin registry is built once and never
//! mutated, so `harmonize` can be called from any thread.

pub mod builtin;
pub mod error;
pub mod harmonize;
pub mod harmony;
pub mod options;
pub mod transform;
mod weight;

pub use error::{InvalidHarmonyError, ValueKind};
pub use harmonize::{Harmonizer, harmonize};
pub use harmony::Harmony;
pub use options::HarmonizeOptions;
pub use transform::{ColorTransform, TransformRegistry};
