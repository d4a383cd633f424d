// SPDX-License-Identifier: MIT
//
// harmonia-color — the color math underneath harmonia.
//
// Colors live in OKLCH, so "brightness" is perceptual lightness and a
// linear mix moves through perceptual space instead of raw RGB. The crate
// exposes exactly what the harmonizer leans on:
//
//   brightness(color)         → Percentage (black 0%, white 100%)
//   mix(a, b, weight)         → Color      (weight = share of `a`)
//   complement/invert/grayscale → unary Color → Color transforms
//
// sRGB only appears at the edges: hex and rgb() literals on the way in,
// hex strings for display. Serialized colors are `oklch(..)` text so they
// load back unchanged.

pub mod color;
pub mod percent;

pub use color::{Color, ParseColorError, brightness, mix};
pub use percent::{Percentage, percent};
