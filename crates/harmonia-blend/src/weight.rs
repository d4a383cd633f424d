//! Mix weight from relative brightness.
//!
//! A harmony brighter than the base gets a larger share of the blend, a
//! darker one a smaller share:
//!
//! ```text
//! diff   = (brightness(harmony) - brightness(color)) / brightness(white)
//! weight = clamp(median + round(diff × margin), 0%, 50%)
//! ```
//!
//! `round` is to the nearest whole percent, ties to even, so a flipped
//! margin mirrors the weight around the median exactly.

use harmonia_color::{Color, Percentage};
use tracing::trace;

/// Upper bound on the harmony share. The base color always keeps at least
/// half of the blend.
pub const MAX_WEIGHT: Percentage = Percentage::HALF;

/// The share of `harmony` to mix into `color`, always within 0–50%.
///
/// `median` and `margin` are taken as given, negative or above 100%
/// included; only the result is clamped. Equal brightness leaves the
/// margin unused, so even an infinite margin gives the clamped median.
/// Any other NaN result collapses to 0%.
pub fn weight(color: Color, harmony: Color, median: Percentage, margin: Percentage) -> Percentage {
    let white = Color::WHITE.brightness();
    let diff = (harmony.brightness() - color.brightness()).value() / white.value();

    let swing = if diff == 0.0 {
        Percentage::ZERO
    } else {
        (margin * diff).round()
    };
    let raw = median + swing;
    let mix = raw.clamp(Percentage::ZERO, MAX_WEIGHT);

    trace!(%color, %harmony, diff, %raw, %mix, "computed harmony weight");
    mix
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_color::percent;
    use pretty_assertions::assert_eq;

    const MEDIAN: Percentage = percent(16.0);
    const MARGIN: Percentage = percent(8.0);

    fn grays() -> impl Iterator<Item = Color> {
        (0..=20u8).map(|i| Color::gray(f32::from(i) / 20.0))
    }

    // ── Concrete values ─────────────────────────────────────────────────

    #[test]
    fn equal_brightness_gives_median() {
        assert_eq!(weight(Color::WHITE, Color::WHITE, MEDIAN, MARGIN), percent(16.0));
    }

    #[test]
    fn black_base_white_harmony() {
        // diff = 1, so 16 + 8.
        assert_eq!(weight(Color::BLACK, Color::WHITE, MEDIAN, MARGIN), percent(24.0));
    }

    #[test]
    fn white_base_black_harmony() {
        // diff = -1, so 16 - 8.
        assert_eq!(weight(Color::WHITE, Color::BLACK, MEDIAN, MARGIN), percent(8.0));
    }

    #[test]
    fn adjustment_rounds_to_whole_percent() {
        // diff = 0.3 → 2.4 → 2.
        let w = weight(Color::gray(0.2), Color::gray(0.5), MEDIAN, MARGIN);
        assert_eq!(w, percent(18.0));
    }

    #[test]
    fn ties_round_to_even() {
        // diff = 0.5, margin 5 → 2.5 → 2; margin 7 → 3.5 → 4.
        let (base, harmony) = (Color::gray(0.25), Color::gray(0.75));
        assert_eq!(weight(base, harmony, percent(10.0), percent(5.0)), percent(12.0));
        assert_eq!(weight(base, harmony, percent(10.0), percent(7.0)), percent(14.0));
    }

    // ── Clamping ────────────────────────────────────────────────────────

    #[test]
    fn clamps_to_half() {
        let w = weight(Color::BLACK, Color::WHITE, percent(45.0), percent(30.0));
        assert_eq!(w, MAX_WEIGHT);
        assert_eq!(weight(Color::WHITE, Color::WHITE, percent(80.0), MARGIN), MAX_WEIGHT);
    }

    #[test]
    fn clamps_to_zero() {
        let w = weight(Color::WHITE, Color::BLACK, percent(4.0), percent(30.0));
        assert_eq!(w, Percentage::ZERO);
        assert_eq!(weight(Color::WHITE, Color::WHITE, percent(-12.0), MARGIN), Percentage::ZERO);
    }

    #[test]
    fn nan_inputs_collapse_to_zero() {
        let nan = percent(f64::NAN);
        assert_eq!(weight(Color::BLACK, Color::WHITE, nan, MARGIN), Percentage::ZERO);
        assert_eq!(weight(Color::BLACK, Color::WHITE, MEDIAN, nan), Percentage::ZERO);
    }

    #[test]
    fn infinite_margin_at_equal_brightness_keeps_median() {
        let (a, b) = (Color::oklch(0.6, 0.15, 30.0), Color::oklch(0.6, 0.05, 250.0));
        for margin in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(weight(a, b, MEDIAN, percent(margin)), MEDIAN);
            assert_eq!(weight(a, b, percent(70.0), percent(margin)), MAX_WEIGHT);
        }
    }

    #[test]
    fn infinite_margin_saturates_otherwise() {
        let inf = percent(f64::INFINITY);
        assert_eq!(weight(Color::BLACK, Color::WHITE, MEDIAN, inf), MAX_WEIGHT);
        assert_eq!(weight(Color::WHITE, Color::BLACK, MEDIAN, inf), Percentage::ZERO);
    }

    #[test]
    fn always_within_bounds() {
        let knobs = [-250.0, -50.0, -8.0, 0.0, 8.0, 16.0, 49.5, 50.0, 120.0, 1e6];
        for color in grays() {
            for harmony in grays() {
                for median in knobs {
                    for margin in knobs {
                        let w = weight(color, harmony, percent(median), percent(margin));
                        assert!(
                            (0.0..=50.0).contains(&w.value()),
                            "weight {w} out of range for median {median}, margin {margin}"
                        );
                    }
                }
            }
        }
    }

    // ── Properties ──────────────────────────────────────────────────────

    #[test]
    fn identical_brightness_is_clamped_median() {
        let a = Color::oklch(0.6, 0.15, 30.0);
        let b = Color::oklch(0.6, 0.05, 250.0);
        for median in [-5.0, 0.0, 16.0, 33.0, 70.0] {
            let expected = percent(median).clamp(Percentage::ZERO, MAX_WEIGHT);
            assert_eq!(weight(a, b, percent(median), MARGIN), expected);
        }
    }

    #[test]
    fn negated_margin_mirrors_around_median() {
        let median = percent(25.0);
        for color in grays() {
            for harmony in grays() {
                let up = weight(color, harmony, median, percent(8.0));
                let down = weight(color, harmony, median, percent(-8.0));
                assert_eq!(up - median, median - down, "{color} vs {harmony}");
            }
        }
    }

    #[test]
    fn margin_is_monotonic_for_brighter_harmony() {
        let (base, harmony) = (Color::gray(0.3), Color::gray(0.9));
        let mut previous = Percentage::ZERO;
        for margin in 0..=40 {
            let w = weight(base, harmony, percent(10.0), percent(f64::from(margin)));
            assert!(w >= previous, "margin {margin}: {w} < {previous}");
            previous = w;
        }
    }

    #[test]
    fn brighter_harmony_never_lowers_weight() {
        let base = Color::gray(0.4);
        let dimmer = weight(base, Color::gray(0.2), MEDIAN, MARGIN);
        let same = weight(base, base, MEDIAN, MARGIN);
        let brighter = weight(base, Color::gray(0.9), MEDIAN, MARGIN);
        assert!(dimmer <= same && same <= brighter);
    }
}
