// SPDX-License-Identifier: MIT
//
// Percentages — the unit every harmonia knob is expressed in.
//
// A `Percentage` stores percent units directly (16.0 means 16%), the way
// designers write them. Values outside 0–100 are legal: intermediate
// results overshoot all the time, and clamping happens only where a caller
// asks for it.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A percentage in percent units (`16.0` is 16%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

/// Shorthand for [`Percentage::new`].
#[inline]
#[must_use]
pub const fn percent(value: f64) -> Percentage {
    Percentage::new(value)
}

impl Percentage {
    /// 0%.
    pub const ZERO: Self = Self(0.0);

    /// 50%.
    pub const HALF: Self = Self(50.0);

    /// 100%.
    pub const FULL: Self = Self(100.0);

    /// Create a percentage from percent units.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a percentage from a fraction (`0.25` becomes 25%).
    #[inline]
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction * 100.0)
    }

    /// The value in percent units.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The value as a fraction (25% becomes `0.25`).
    #[inline]
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// The smaller of two percentages. A NaN operand loses to the other.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The larger of two percentages. A NaN operand loses to the other.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Clamp into `[lo, hi]`: upper bound first, then lower bound.
    ///
    /// Unlike [`f64::clamp`] this never panics, and NaN collapses to `lo`.
    #[inline]
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        if self.0.is_nan() {
            return lo;
        }
        self.min(hi).max(lo)
    }

    /// Round to the nearest whole percent, ties to even.
    #[inline]
    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round_ties_even())
    }
}

impl Add for Percentage {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Percentage {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Percentage {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Percentage {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
