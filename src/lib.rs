// SPDX-License-Identifier: MIT
//
// harmonia — brightness-weighted color harmonizing.
//
// This crate wires the workspace together behind one import:
//
//   harmonia-color → Color, Percentage, brightness, mix
//   harmonia-blend → harmonize, Harmony, transform registry, options
//
// A harmonize call flows through:
//
//   Harmony → resolve (literal | registry[name](base)) → weight → mix
//
// Example:
//
//   let accent = harmonia::harmonize(base, &HarmonizeOptions::default())?;

pub use harmonia_blend::builtin::{builtin_names, builtin_transform};
pub use harmonia_blend::options::{DEFAULT_MARGIN, DEFAULT_MEDIAN};
pub use harmonia_blend::{
    ColorTransform, HarmonizeOptions, Harmonizer, Harmony, InvalidHarmonyError,
    TransformRegistry, ValueKind, harmonize,
};
pub use harmonia_color::{Color, Percentage, brightness, mix, percent};
