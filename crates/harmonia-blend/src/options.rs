//! Harmonize options — every tuning knob with its default spelled out.
//!
//! | Field     | Type         | Default        |
//! |-----------|--------------|----------------|
//! | `harmony` | [`Harmony`]  | `"complement"` |
//! | `median`  | `Percentage` | 16%            |
//! | `margin`  | `Percentage` | 8%             |
//!
//! Options deserialize with `serde`; any omitted field takes its default,
//! `harmony` is written as text (see [`Harmony`] for the tagged form) and
//! percentages as plain numbers:
//!
//! ```json
//! { "harmony": "#3366ff", "median": 20, "margin": 10 }
//! ```

use harmonia_color::{Percentage, percent};
use serde::{Deserialize, Serialize};

use crate::harmony::Harmony;

/// Weight used when base and harmony are equally bright.
pub const DEFAULT_MEDIAN: Percentage = percent(16.0);

/// Weight adjustment per unit of normalized brightness difference.
pub const DEFAULT_MARGIN: Percentage = percent(8.0);

/// Parameters for [`harmonize`](crate::harmonize()).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarmonizeOptions {
    /// The color, or transform name, to blend into the base.
    pub harmony: Harmony,
    /// Weight at equal brightness.
    pub median: Percentage,
    /// Weight swing per unit of brightness difference.
    pub margin: Percentage,
}

impl Default for HarmonizeOptions {
    fn default() -> Self {
        Self {
            harmony: Harmony::default(),
            median: DEFAULT_MEDIAN,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl HarmonizeOptions {
    /// Replace the harmony. Accepts a [`Color`](harmonia_color::Color), a
    /// [`Harmony`], or text to parse.
    #[must_use]
    pub fn with_harmony(self, harmony: impl Into<Harmony>) -> Self {
        Self {
            harmony: harmony.into(),
            ..self
        }
    }

    /// Replace the median weight.
    #[must_use]
    pub fn with_median(self, median: Percentage) -> Self {
        Self { median, ..self }
    }

    /// Replace the margin.
    #[must_use]
    pub fn with_margin(self, margin: Percentage) -> Self {
        Self { margin, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_color::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_enumerated() {
        let options = HarmonizeOptions::default();
        assert_eq!(options.harmony, Harmony::transform("complement"));
        assert_eq!(options.median, percent(16.0));
        assert_eq!(options.margin, percent(8.0));
    }

    #[test]
    fn builders_replace_single_fields() {
        let options = HarmonizeOptions::default()
            .with_harmony("invert")
            .with_median(percent(20.0))
            .with_margin(percent(-4.0));
        assert_eq!(options.harmony, Harmony::transform("invert"));
        assert_eq!(options.median, percent(20.0));
        assert_eq!(options.margin, percent(-4.0));
    }

    #[test]
    fn with_harmony_accepts_colors() {
        let options = HarmonizeOptions::default().with_harmony(Color::WHITE);
        assert_eq!(options.harmony.as_color(), Some(Color::WHITE));
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let options: HarmonizeOptions = serde_json::from_str(r#"{ "median": 20 }"#).unwrap();
        assert_eq!(
            options,
            HarmonizeOptions::default().with_median(percent(20.0))
        );

        let options: HarmonizeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, HarmonizeOptions::default());
    }

    #[test]
    fn deserialize_full() {
        let options: HarmonizeOptions =
            serde_json::from_str(r##"{ "harmony": "#ffffff", "median": 10, "margin": 2.5 }"##)
                .unwrap();
        assert_eq!(options.harmony.as_color(), Color::hex("#ffffff"));
        assert_eq!(options.median, percent(10.0));
        assert_eq!(options.margin, percent(2.5));
    }

    #[test]
    fn deserialize_rejects_unknown_fields() {
        let err = serde_json::from_str::<HarmonizeOptions>(r#"{ "weight": 3 }"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{err}");
    }

    #[test]
    fn serialize_roundtrip() {
        let options = HarmonizeOptions::default().with_harmony("grayscale");
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"harmony":"grayscale","median":16.0,"margin":8.0}"#);
        let back: HarmonizeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn serialize_roundtrip_keeps_literal_color() {
        let vivid = Color::oklch(0.7, 0.3, 150.0);
        let options = HarmonizeOptions::default().with_harmony(vivid);
        let json = serde_json::to_string(&options).unwrap();
        let back: HarmonizeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);

        let color = back.harmony.as_color().unwrap();
        assert_eq!(color.l.to_bits(), vivid.l.to_bits());
        assert_eq!(color.c.to_bits(), vivid.c.to_bits());
    }

    #[test]
    fn serialize_roundtrip_keeps_hex_like_transform_name() {
        let options = HarmonizeOptions::default().with_harmony(Harmony::transform("#abc"));
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r##"{"harmony":{"transform":"#abc"},"median":16.0,"margin":8.0}"##
        );
        let back: HarmonizeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.harmony.transform_name(), Some("#abc"));
        assert_eq!(back, options);
    }
}
