//! The harmony input: a literal color, or the name of a transform to apply
//! to the base color.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use harmonia_color::Color;
use serde::{Deserialize, Serialize};

/// Transform used when the caller names no harmony.
pub const DEFAULT_TRANSFORM: &str = "complement";

/// What to blend into the base color.
///
/// Text converts through [`FromStr`]: color literals (`#rgb`, `#rrggbb`,
/// `rgb(..)`, ..) become [`Harmony::Color`], anything else a transform
/// name. Whether that name exists is only checked when harmonizing.
///
/// Serialized as that same text. A transform name that would read back as
/// something else (`"#abc"`, `" padded "`) is written as
/// `{"transform": name}` instead, and `{"color": ..}` is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HarmonyRepr", into = "HarmonyRepr")]
pub enum Harmony {
    /// Blend this exact color.
    Color(Color),
    /// Apply the named transform to the base color and blend the result.
    Transform(String),
}

impl Harmony {
    /// Name a transform without attempting to parse it as a color.
    #[must_use]
    pub fn transform(name: impl Into<String>) -> Self {
        Self::Transform(name.into())
    }

    /// The literal color, if this is one.
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Transform(_) => None,
        }
    }

    /// The transform name, if this is one.
    #[must_use]
    pub fn transform_name(&self) -> Option<&str> {
        match self {
            Self::Color(_) => None,
            Self::Transform(name) => Some(name),
        }
    }
}

impl Default for Harmony {
    fn default() -> Self {
        Self::transform(DEFAULT_TRANSFORM)
    }
}

impl FromStr for Harmony {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Color::parse(s).map_or_else(|| Self::transform(s.trim()), Self::Color))
    }
}

impl From<&str> for Harmony {
    fn from(s: &str) -> Self {
        let Ok(harmony) = s.parse::<Self>();
        harmony
    }
}

impl From<String> for Harmony {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Color> for Harmony {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => fmt::Display::fmt(color, f),
            Self::Transform(name) => f.write_str(name),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum HarmonyRepr {
    Text(String),
    Tagged(TaggedHarmony),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TaggedHarmony {
    Color(Color),
    Transform(String),
}

impl From<Harmony> for HarmonyRepr {
    fn from(harmony: Harmony) -> Self {
        match harmony {
            Harmony::Color(color) => Self::Text(color.into()),
            Harmony::Transform(name)
                if Harmony::from(name.as_str()).transform_name() == Some(name.as_str()) =>
            {
                Self::Text(name)
            }
            Harmony::Transform(name) => Self::Tagged(TaggedHarmony::Transform(name)),
        }
    }
}

impl From<HarmonyRepr> for Harmony {
    fn from(repr: HarmonyRepr) -> Self {
        match repr {
            HarmonyRepr::Text(text) => Self::from(text),
            HarmonyRepr::Tagged(TaggedHarmony::Color(color)) => Self::Color(color),
            HarmonyRepr::Tagged(TaggedHarmony::Transform(name)) => Self::Transform(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_complement() {
        assert_eq!(Harmony::default(), Harmony::Transform("complement".into()));
        assert_eq!(Harmony::default().transform_name(), Some("complement"));
    }

    #[test]
    fn color_literals_parse_as_colors() {
        let hex = Harmony::from("#ff0000");
        assert_eq!(hex.as_color(), Some(Color::rgb8(255, 0, 0)));

        let func = Harmony::from("rgb(0, 0, 255)");
        assert_eq!(func.as_color(), Some(Color::rgb8(0, 0, 255)));
    }

    #[test]
    fn other_text_is_a_transform_name() {
        assert_eq!(Harmony::from(" invert "), Harmony::transform("invert"));
        assert_eq!(Harmony::from("42"), Harmony::transform("42"));
        // No `#`, so not hex.
        assert_eq!(Harmony::from("fade"), Harmony::transform("fade"));
    }

    #[test]
    fn explicit_transform_skips_parsing() {
        let h = Harmony::transform("#fff");
        assert_eq!(h.transform_name(), Some("#fff"));
        assert_eq!(h.as_color(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Harmony::from(Color::rgb8(0, 255, 0)).to_string(), "#00ff00");
        assert_eq!(Harmony::transform("invert").to_string(), "invert");
    }

    #[test]
    fn serde_as_text() {
        let h: Harmony = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(h, Harmony::Color(Color::BLACK));
        let h: Harmony = serde_json::from_str("\"grayscale\"").unwrap();
        assert_eq!(h, Harmony::transform("grayscale"));
        assert_eq!(serde_json::to_string(&Harmony::default()).unwrap(), "\"complement\"");
    }

    #[test]
    fn serde_keeps_literal_color_exact() {
        let vivid = Harmony::from(Color::oklch(0.7, 0.3, 150.0));
        let json = serde_json::to_string(&vivid).unwrap();
        assert_eq!(json, "\"oklch(0.7 0.3 150 / 1)\"");
        let back: Harmony = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vivid);
    }

    #[test]
    fn serde_tags_names_that_read_as_colors() {
        for name in ["#abc", "rgb(1, 2, 3)", " padded "] {
            let harmony = Harmony::transform(name);
            let json = serde_json::to_string(&harmony).unwrap();
            assert!(json.starts_with(r#"{"transform":"#), "{json}");
            let back: Harmony = serde_json::from_str(&json).unwrap();
            assert_eq!(back, harmony);
        }
    }

    #[test]
    fn serde_accepts_tagged_color() {
        let h: Harmony = serde_json::from_str(r##"{ "color": "#ffffff" }"##).unwrap();
        assert_eq!(h, Harmony::Color(Color::WHITE));
    }
}
