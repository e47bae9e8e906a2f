//! Hex color parsing, blending and contrast helpers.
//!
//! Everything here works on CSS hex strings because that is how tokens are
//! stored. Numeric inputs are clamped instead of rejected so that style
//! builders always produce valid CSS; only malformed hex is an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Near-black text drawn on light accents.
pub const DARK_TEXT: &str = "#0C0C0E";

/// White text drawn on dark accents.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Luminance above which an accent counts as light.
pub const LIGHT_ACCENT_LUMINANCE: f64 = 0.4;

/// Error returned when a string is not a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not 3, 4, 6 or 8 hex digits.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Formats the color as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(f64::from)
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
///
/// Shorthand forms are expanded and any alpha component is ignored.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_owned());
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    let normalized: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_owned(),
    };
    // `from_str_radix` accepts a leading sign, so every byte is checked here.
    if !matches!(normalized.len(), 6 | 8) || !normalized.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |index: usize| {
        u8::from_str_radix(&normalized[index..index + 2], 16).map_err(|_| invalid())
    };
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Returns `true` when [`hex_to_rgb`] would accept `value`.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    hex_to_rgb(value).is_ok()
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    // In range after the clamp, so the cast cannot truncate.
    value.round().clamp(0.0, 255.0) as u8
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Formats channels as lowercase `#rrggbb`, rounding and clamping each to
/// `[0, 255]`.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb {
        r: clamp_channel(r),
        g: clamp_channel(g),
        b: clamp_channel(b),
    }
    .to_hex()
}

/// Returns `rgba(r, g, b, alpha)` with `alpha` clamped to `[0, 1]`.
pub fn with_alpha(hex: &str, alpha: f64) -> Result<String, ColorError> {
    let Rgb { r, g, b } = hex_to_rgb(hex)?;
    Ok(format!("rgba({r}, {g}, {b}, {})", clamp_unit(alpha)))
}

/// Moves every channel toward white by `amount` (clamped to `[0, 1]`).
pub fn lighten(hex: &str, amount: f64) -> Result<String, ColorError> {
    let amount = clamp_unit(amount);
    let [r, g, b] = hex_to_rgb(hex)?
        .channels()
        .map(|c| c + (255.0 - c) * amount);
    Ok(rgb_to_hex(r, g, b))
}

/// Moves every channel toward black by `amount` (clamped to `[0, 1]`).
pub fn darken(hex: &str, amount: f64) -> Result<String, ColorError> {
    let amount = clamp_unit(amount);
    let [r, g, b] = hex_to_rgb(hex)?.channels().map(|c| c * (1.0 - amount));
    Ok(rgb_to_hex(r, g, b))
}

/// Interpolates from `from` to `to`; `ratio` 0 yields `from`, 1 yields `to`.
pub fn mix_colors(from: &str, to: &str, ratio: f64) -> Result<String, ColorError> {
    let ratio = clamp_unit(ratio);
    let a = hex_to_rgb(from)?.channels();
    let b = hex_to_rgb(to)?.channels();
    let mix = |i: usize| a[i] + (b[i] - a[i]) * ratio;
    Ok(rgb_to_hex(mix(0), mix(1), mix(2)))
}

fn srgb_to_linear(channel: f64) -> f64 {
    let value = channel / 255.0;
    if value <= 0.039_28 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(hex: &str) -> Result<f64, ColorError> {
    let [r, g, b] = hex_to_rgb(hex)?.channels().map(srgb_to_linear);
    Ok(0.2126 * r + 0.7152 * g + 0.0722 * b)
}

/// WCAG contrast ratio between two colors, from 1 to 21.
pub fn contrast_ratio(foreground: &str, background: &str) -> Result<f64, ColorError> {
    let l1 = relative_luminance(foreground)?;
    let l2 = relative_luminance(background)?;
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Picks a readable text color for content drawn on `accent`.
///
/// Light hex accents get [`DARK_TEXT`], dark ones [`LIGHT_TEXT`]. Values that
/// are not hex (CSS variables, named colors) cannot be measured and fall back
/// to [`DARK_TEXT`].
#[must_use]
pub fn contrast_text_color(accent: &str) -> &'static str {
    match relative_luminance(accent) {
        Ok(luminance) if luminance > LIGHT_ACCENT_LUMINANCE => DARK_TEXT,
        Ok(_) => LIGHT_TEXT,
        Err(_) => DARK_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_all_hex_lengths() {
        let expected = Rgb {
            r: 0xaa,
            g: 0xbb,
            b: 0xcc,
        };
        assert_eq!(hex_to_rgb("#abc").unwrap(), hex_to_rgb("#aabbcc").unwrap());
        assert_eq!(hex_to_rgb("abc").unwrap(), expected);
        assert_eq!(hex_to_rgb("#abcf").unwrap(), expected);
        assert_eq!(hex_to_rgb("#AABBCC").unwrap(), expected);
        assert_eq!(hex_to_rgb("#aabbcc80").unwrap(), expected);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            hex_to_rgb("notacolor"),
            Err(ColorError::InvalidHex("notacolor".into()))
        );
        assert!(hex_to_rgb("#12").is_err());
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#ééé").is_err());
        assert!(hex_to_rgb("var(--accent)").is_err());
        assert!(hex_to_rgb("#+1+2+3").is_err());
        assert!(hex_to_rgb("#aabbcc+f").is_err());
        assert!(!is_hex_color("+f+f+f"));
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(with_alpha("#000000", 1.5).unwrap(), "rgba(0, 0, 0, 1)");
        assert_eq!(with_alpha("#000000", -1.0).unwrap(), "rgba(0, 0, 0, 0)");
        assert_eq!(
            with_alpha("#3B82F6", 0.16).unwrap(),
            "rgba(59, 130, 246, 0.16)"
        );
    }

    #[test]
    fn lighten_and_darken_extremes() {
        assert_eq!(lighten("#3B82F6", 0.0).unwrap(), "#3b82f6");
        assert_eq!(lighten("#3B82F6", 1.0).unwrap(), "#ffffff");
        assert_eq!(lighten("#3B82F6", 7.0).unwrap(), "#ffffff");
        assert_eq!(darken("#3B82F6", 1.0).unwrap(), "#000000");
        assert_eq!(darken("#3B82F6", -3.0).unwrap(), "#3b82f6");
        assert_eq!(lighten("#000000", 0.5).unwrap(), "#808080");
    }

    #[test]
    fn mix_interpolates_between_colors() {
        assert_eq!(mix_colors("#000000", "#ffffff", 0.0).unwrap(), "#000000");
        assert_eq!(mix_colors("#000000", "#ffffff", 1.0).unwrap(), "#ffffff");
        assert_eq!(mix_colors("#000000", "#ffffff", 0.5).unwrap(), "#808080");
        assert_eq!(mix_colors("#ff0000", "#0000ff", 2.0).unwrap(), "#0000ff");
    }

    #[test]
    fn rgb_to_hex_clamps_channels() {
        assert_eq!(rgb_to_hex(300.0, -20.0, 127.6), "#ff0080");
        assert_eq!(rgb_to_hex(f64::NAN, 0.0, 0.0), "#000000");
    }

    #[test]
    fn luminance_bounds_and_contrast() {
        assert_eq!(relative_luminance("#000000").unwrap(), 0.0);
        assert!((relative_luminance("#ffffff").unwrap() - 1.0).abs() < 1e-9);
        assert!((contrast_ratio("#000", "#fff").unwrap() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_text_follows_accent_luminance() {
        assert_eq!(contrast_text_color("#FDE047"), DARK_TEXT);
        assert_eq!(contrast_text_color("#1D4ED8"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("var(--wisp-accent)"), DARK_TEXT);
        assert_eq!(contrast_text_color("rebeccapurple"), DARK_TEXT);
    }

    proptest! {
        #[test]
        fn six_digit_hex_round_trips(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            upper in any::<bool>(),
        ) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let input = if upper { hex.to_uppercase() } else { hex.clone() };
            let rgb = hex_to_rgb(&input).unwrap();
            prop_assert_eq!(
                rgb_to_hex(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)),
                hex
            );
        }

        #[test]
        fn blended_colors_are_always_valid(
            amount in -2.0f64..3.0,
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
        ) {
            let hex = Rgb { r, g, b }.to_hex();
            prop_assert!(is_hex_color(&lighten(&hex, amount).unwrap()));
            prop_assert!(is_hex_color(&darken(&hex, amount).unwrap()));
            prop_assert!(is_hex_color(&mix_colors(&hex, "#ffffff", amount).unwrap()));
        }
    }
}
