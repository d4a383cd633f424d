// SPDX-License-Identifier: MIT
//
// harmonia color — OKLCH storage, brightness, and weighted mixing.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// The harmonizer only ever asks two questions of a color: "how bright are
// you?" and "what do you look like blended with that?". Both are answered
// in OKLCH, where lightness tracks what the eye sees, so a 10% step in
// brightness looks like a 10% step regardless of hue.
//
// Conversion pipeline (only used at the text boundary and for `invert`):
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ hex / rgb()

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::percent::Percentage;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space with alpha transparency.
///
/// # Examples
///
/// ```
/// use harmonia_color::{Color, percent};
///
/// let teal = Color::hex("#008080").unwrap();
/// let accent = teal.complement();
///
/// // 25% of the accent, 75% of teal.
/// let blended = harmonia_color::mix(accent, teal, percent(25.0));
/// assert!(blended.brightness().value() > 0.0);
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid).
    pub c: f32,

    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f32,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from OKLCH values with alpha.
    #[inline]
    #[must_use]
    pub const fn oklcha(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    /// Create a color from sRGB values with alpha.
    #[must_use]
    pub fn srgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h, alpha }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit sRGB values with 8-bit alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::srgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, with or without `#`.
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Parse a color literal: `#`-prefixed hex, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)` with 0–255 channels and a 0–1 alpha, or
    /// `oklch(l c h)` / `oklch(l c h / a)` as written by
    /// [`Color::to_oklch_string`].
    ///
    /// Unlike [`Color::hex`], a bare hex string without `#` is rejected so
    /// words like `fade` or `add` are never mistaken for colors.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s);
        }
        parse_oklch_function(s).or_else(|| parse_rgb_function(s))
    }

    /// Create a pure gray color at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f32) -> Self {
        Self::oklch(lightness, 0.0, 0.0)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white. Its brightness is the 100% reference.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Perceptual brightness: OKLCH lightness as a percentage.
    ///
    /// Black is 0%, white is 100%.
    #[inline]
    #[must_use]
    pub fn brightness(self) -> Percentage {
        Percentage::from_fraction(f64::from(self.l))
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Adjusters ───────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    // ─── Unary Transforms ────────────────────────────────────────────────

    /// The complementary color (hue shifted 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Invert each sRGB channel, keeping alpha.
    #[must_use]
    pub fn invert(self) -> Self {
        let (r, g, b) = self.to_srgb();
        Self::srgba(1.0 - r, 1.0 - g, 1.0 - b, self.alpha)
    }

    /// Drop all chroma, keeping lightness and alpha.
    #[inline]
    #[must_use]
    pub const fn grayscale(self) -> Self {
        Self { c: 0.0, ..self }
    }

    // ─── Mixing ──────────────────────────────────────────────────────────

    /// Blend `weight` of this color with `100% - weight` of `other`.
    ///
    /// The weight is clamped to 0–100%. At 0% the result is exactly `other`,
    /// at 100% exactly `self`. In between, lightness, chroma and alpha
    /// interpolate linearly and hue takes the shortest arc. An achromatic
    /// endpoint has no meaningful hue, so the other endpoint's hue is used.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mix(self, other: Self, weight: Percentage) -> Self {
        let w = weight.clamp(Percentage::ZERO, Percentage::FULL).fraction() as f32;
        if w <= 0.0 {
            return other;
        }
        if w >= 1.0 {
            return self;
        }
        let inv_w = 1.0 - w;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(other.h, self.h, w)
        };

        Self {
            l: self.l.mul_add(w, other.l * inv_w),
            c: self.c.mul_add(w, other.c * inv_w),
            h,
            alpha: self.alpha.mul_add(w, other.alpha * inv_w),
        }
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB, channels clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha.clamp(0.0, 1.0));
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Format as `oklch(l c h / alpha)`.
    ///
    /// Unlike [`Color::to_hex`] nothing is clamped or quantized: parsing the
    /// result gives back the same bits. This is the serialized form.
    #[must_use]
    pub fn to_oklch_string(self) -> String {
        format!("oklch({} {} {} / {})", self.l, self.c, self.h, self.alpha)
    }
}

/// Brightness of `color` as a percentage. See [`Color::brightness`].
#[inline]
#[must_use]
pub fn brightness(color: Color) -> Percentage {
    color.brightness()
}

/// Blend `weight` of `a` into `b`. See [`Color::mix`].
#[inline]
#[must_use]
pub fn mix(a: Color, b: Color, weight: Percentage) -> Color {
    a.mix(b, weight)
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Color::oklcha({:.4}, {:.4}, {:.1}, {:.2})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Text Conversions ────────────────────────────────────────────────────────

/// Error returned when text is not a color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{input}` is not a color literal")]
pub struct ParseColorError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseColorError {
            input: s.to_owned(),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_oklch_string()
    }
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Move from `from` toward `to` by `t`, taking the shortest arc.
#[inline]
fn interpolate_hue(from: f32, to: f32, t: f32) -> f32 {
    let mut diff = to - from;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    normalize_hue(diff.mul_add(t, from))
}

// ─── Color Space Math ────────────────────────────────────────────────────────
//
// Oklab by Björn Ottosson: https://bottosson.github.io/posts/oklab/

#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    if c < 1e-8 {
        // Achromatic: hue is undefined.
        return (c, 0.0);
    }
    (c, normalize_hue(b.atan2(a).to_degrees()))
}

#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) =
        linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Literal Parsing ─────────────────────────────────────────────────────────

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("rgb() pattern is valid")
});

static OKLCH_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^oklch\(\s*([^\s/)]+)\s+([^\s/)]+)\s+([^\s/)]+)\s*(?:/\s*([^\s/)]+)\s*)?\)$")
        .expect("oklch() pattern is valid")
});

/// Parse `oklch(l c h)` / `oklch(l c h / a)`. Components are plain numbers.
fn parse_oklch_function(s: &str) -> Option<Color> {
    let caps = OKLCH_FUNCTION.captures(s)?;
    let component = |i: usize| caps.get(i)?.as_str().parse::<f32>().ok();
    let alpha = match caps.get(4) {
        Some(_) => component(4)?,
        None => 1.0,
    };
    Some(Color::oklcha(component(1)?, component(2)?, component(3)?, alpha))
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)`.
fn parse_rgb_function(s: &str) -> Option<Color> {
    let caps = RGB_FUNCTION.captures(s)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);

    let alpha = match caps.get(4) {
        Some(m) => m.as_str().parse::<f32>().ok().filter(|a| (0.0..=1.0).contains(a))?,
        None => 1.0,
    };
    Some(Color::rgb8(r, g, b).with_alpha(alpha))
}

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    let nibble = |i: usize| parse_hex_digit(digits[i]).map(|d| d << 4 | d);
    let byte = |i: usize| Some(parse_hex_digit(digits[i])? << 4 | parse_hex_digit(digits[i + 1])?);

    match digits.len() {
        3 => Some(Color::rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn unit(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
