//! Builtin unary transforms — the names every registry starts with.

use harmonia_color::Color;

/// Look up a builtin transform by name.
///
/// Returns `None` if the name is not recognized. Matching is exact.
#[must_use]
pub fn builtin_transform(name: &str) -> Option<fn(Color) -> Color> {
    let transform: fn(Color) -> Color = match name {
        "complement" => Color::complement,
        "invert" => Color::invert,
        "grayscale" => Color::grayscale,
        _ => return None,
    };
    Some(transform)
}

/// List all builtin transform names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["complement", "invert", "grayscale"]
}
