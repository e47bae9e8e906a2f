//! Core design tokens used to build Wisp themes.
//!
//! Colors depend on the theme mode and ship as two base palettes
//! ([`dark_colors`] and [`light_colors`]). Spacing, typography, radii and
//! shadows are shared by both modes.

use once_cell::sync::Lazy;

use crate::token_group;

token_group! {
    /// Surface colors, from the app canvas up to floating overlays.
    pub struct BackgroundColors => PartialBackgroundColors {
        /// Application canvas.
        pub canvas: String,
        /// Recessed wells such as input fields and code blocks.
        pub sunken: String,
        /// Default surface for panels and cards.
        pub surface: String,
        /// Raised surfaces: menus, popovers, chat bubbles.
        pub raised: String,
        /// Floating surfaces such as dialogs.
        pub overlay: String,
        /// Scrim drawn behind modal overlays.
        pub scrim: String,
    }
}

token_group! {
    /// Foreground text colors.
    pub struct TextColors => PartialTextColors {
        /// Body copy and headings.
        pub primary: String,
        /// Supporting copy.
        pub secondary: String,
        /// De-emphasized copy and placeholders.
        pub muted: String,
        /// Text drawn on inverted surfaces.
        pub inverse: String,
        /// Text drawn on raised surfaces.
        pub on_raised: String,
        /// Supporting text drawn on raised surfaces.
        pub on_raised_secondary: String,
        /// Hyperlinks.
        pub link: String,
        /// Text of disabled controls.
        pub disabled: String,
    }
}

token_group! {
    /// Divider and outline colors.
    pub struct BorderColors => PartialBorderColors {
        /// Hairline separators.
        pub subtle: String,
        /// Default control outline.
        pub strong: String,
        /// Outline of focused controls.
        pub focus: String,
        /// Outline of pressed or open controls.
        pub active: String,
    }
}

token_group! {
    /// Interactive accent colors.
    pub struct AccentColors => PartialAccentColors {
        /// Primary call-to-action fill.
        pub primary: String,
        /// Primary fill while hovered.
        pub primary_hover: String,
        /// Primary fill while pressed.
        pub primary_active: String,
        /// Secondary fill for less prominent actions.
        pub secondary: String,
        /// Selection and highlight wash.
        pub highlight: String,
    }
}

token_group! {
    /// Colors communicating outcome and severity.
    pub struct StatusColors => PartialStatusColors {
        /// Success state.
        pub success: String,
        /// Warning state.
        pub warning: String,
        /// Error state.
        pub danger: String,
        /// Informational state.
        pub info: String,
    }
}

token_group! {
    /// Brand surface colors.
    pub struct BrandColors => PartialBrandColors {
        /// Brand fill.
        pub primary: String,
        /// Brand fill while hovered.
        pub hover: String,
        /// Brand fill while pressed.
        pub active: String,
        /// Text drawn on brand fills.
        pub text: String,
        /// Tinted brand surface.
        pub surface: String,
        /// Outline of brand surfaces.
        pub border: String,
    }
}

token_group! {
    /// Categorical colors for charts and data visualisation.
    pub struct DataColors => PartialDataColors {
        /// First series.
        pub blue: String,
        /// Second series.
        pub violet: String,
        /// Third series.
        pub green: String,
        /// Fourth series.
        pub amber: String,
        /// Fifth series.
        pub red: String,
        /// Sixth series.
        pub cyan: String,
    }
}

token_group! {
    /// Raw named colors, independent of semantic usage.
    pub struct PaletteColors => PartialPaletteColors {
        /// Pure white.
        pub white: String,
        /// Pure black.
        pub black: String,
        /// Neutral gray.
        pub gray: String,
        /// Red.
        pub red: String,
        /// Orange.
        pub orange: String,
        /// Yellow.
        pub yellow: String,
        /// Green.
        pub green: String,
        /// Teal.
        pub teal: String,
        /// Blue.
        pub blue: String,
        /// Indigo.
        pub indigo: String,
        /// Violet.
        pub violet: String,
        /// Pink.
        pub pink: String,
    }
}

token_group! {
    /// Complete semantic color set for one theme mode.
    pub struct ThemeColors => PartialThemeColors {
        /// Surfaces.
        pub background: BackgroundColors,
        /// Foreground text.
        pub text: TextColors,
        /// Outlines and dividers.
        pub border: BorderColors,
        /// Interactive accents.
        pub accent: AccentColors,
        /// Status colors.
        pub status: StatusColors,
        /// Brand colors.
        pub brand: BrandColors,
        /// Chart colors.
        pub data: DataColors,
        /// Raw palette.
        pub palette: PaletteColors,
    }
}

token_group! {
    /// Canonical spacing scale that maps semantic names to pixel values.
    pub struct ThemeSpacing => PartialThemeSpacing {
        /// No spacing.
        pub none: f32,
        /// Extra-extra-small spacing value.
        pub xxs: f32,
        /// Extra-small spacing value.
        pub xs: f32,
        /// Small spacing value.
        pub sm: f32,
        /// Medium spacing value.
        pub md: f32,
        /// Large spacing value.
        pub lg: f32,
        /// Extra-large spacing value.
        pub xl: f32,
        /// Extra-extra-large spacing value.
        #[serde(rename = "2xl")]
        pub xxl: f32,
        /// Largest spacing value.
        #[serde(rename = "3xl")]
        pub xxxl: f32,
    }
}

token_group! {
    /// Font family stacks.
    pub struct FontFamilies => PartialFontFamilies {
        /// Interface text.
        pub sans: Vec<String>,
        /// Code and tabular figures.
        pub mono: Vec<String>,
    }
}

token_group! {
    /// Font sizes in pixels.
    pub struct FontSizes => PartialFontSizes {
        /// Extra-small labels.
        pub xs: f32,
        /// Small body text.
        pub sm: f32,
        /// Default body text.
        pub base: f32,
        /// Emphasized body text.
        pub md: f32,
        /// Small headings.
        pub lg: f32,
        /// Headings.
        pub xl: f32,
        /// Large headings.
        #[serde(rename = "2xl")]
        pub xxl: f32,
        /// Display text.
        pub display: f32,
    }
}

token_group! {
    /// Numeric font weights.
    pub struct FontWeights => PartialFontWeights {
        /// Light weight.
        pub light: u16,
        /// Regular weight.
        pub regular: u16,
        /// Medium weight.
        pub medium: u16,
        /// Semi-bold weight.
        pub semibold: u16,
        /// Bold weight.
        pub bold: u16,
    }
}

token_group! {
    /// Unitless line height multipliers.
    pub struct LineHeights => PartialLineHeights {
        /// Dense headings and controls.
        pub tight: f32,
        /// Body copy.
        pub normal: f32,
        /// Long-form reading.
        pub relaxed: f32,
    }
}

token_group! {
    /// Typographic scale.
    pub struct ThemeTypography => PartialThemeTypography {
        /// Font stacks.
        pub font_family: FontFamilies,
        /// Size scale.
        pub sizes: FontSizes,
        /// Weight scale.
        pub weights: FontWeights,
        /// Line height scale.
        pub line_heights: LineHeights,
    }
}

token_group! {
    /// Corner radii in pixels.
    pub struct ThemeRadii => PartialThemeRadii {
        /// Square corners.
        pub none: f32,
        /// Small radius.
        pub sm: f32,
        /// Medium radius.
        pub md: f32,
        /// Large radius.
        pub lg: f32,
        /// Extra-large radius.
        pub xl: f32,
        /// Pill and circle shapes.
        pub full: f32,
    }
}

token_group! {
    /// CSS `box-shadow` values for elevation.
    pub struct ThemeShadows => PartialThemeShadows {
        /// Flat surfaces without any elevation.
        pub none: String,
        /// Subtle lift for cards.
        pub sm: String,
        /// Menus and popovers.
        pub md: String,
        /// Dialogs.
        pub lg: String,
        /// Top-most floating surfaces.
        pub xl: String,
        /// Inset shadow for pressed wells.
        pub inner: String,
    }
}

macro_rules! group {
    ($ty:ident { $($field:ident : $value:expr),+ $(,)? }) => {
        $ty { $($field: String::from($value)),+ }
    };
}

static DARK_COLORS: Lazy<ThemeColors> = Lazy::new(|| ThemeColors {
    background: group!(BackgroundColors {
        canvas: "#0C0C0E",
        sunken: "#08080A",
        surface: "#131316",
        raised: "#1C1C21",
        overlay: "#232329",
        scrim: "rgba(0, 0, 0, 0.6)",
    }),
    text: group!(TextColors {
        primary: "#F4F4F5",
        secondary: "#A1A1AA",
        muted: "#71717A",
        inverse: "#0C0C0E",
        on_raised: "#FFFFFF",
        on_raised_secondary: "#D4D4D8",
        link: "#60A5FA",
        disabled: "#52525B",
    }),
    border: group!(BorderColors {
        subtle: "#27272A",
        strong: "#3F3F46",
        focus: "#60A5FA",
        active: "#A1A1AA",
    }),
    accent: group!(AccentColors {
        primary: "#3B82F6",
        primary_hover: "#2563EB",
        primary_active: "#1D4ED8",
        secondary: "#27272A",
        highlight: "rgba(59, 130, 246, 0.16)",
    }),
    status: group!(StatusColors {
        success: "#22C55E",
        warning: "#F59E0B",
        danger: "#EF4444",
        info: "#0EA5E9",
    }),
    brand: group!(BrandColors {
        primary: "#7C3AED",
        hover: "#6D28D9",
        active: "#5B21B6",
        text: "#FFFFFF",
        surface: "#1E1533",
        border: "#4C1D95",
    }),
    data: group!(DataColors {
        blue: "#60A5FA",
        violet: "#A78BFA",
        green: "#4ADE80",
        amber: "#FBBF24",
        red: "#F87171",
        cyan: "#22D3EE",
    }),
    palette: palette(),
});

static LIGHT_COLORS: Lazy<ThemeColors> = Lazy::new(|| ThemeColors {
    background: group!(BackgroundColors {
        canvas: "#FFFFFF",
        sunken: "#F4F4F5",
        surface: "#FAFAFA",
        raised: "#F4F4F5",
        overlay: "#FFFFFF",
        scrim: "rgba(0, 0, 0, 0.4)",
    }),
    text: group!(TextColors {
        primary: "#0C0C0E",
        secondary: "#52525B",
        muted: "#71717A",
        inverse: "#FFFFFF",
        on_raised: "#0C0C0E",
        on_raised_secondary: "#3F3F46",
        link: "#2563EB",
        disabled: "#A1A1AA",
    }),
    border: group!(BorderColors {
        subtle: "#E4E4E7",
        strong: "#D4D4D8",
        focus: "#2563EB",
        active: "#52525B",
    }),
    accent: group!(AccentColors {
        primary: "#2563EB",
        primary_hover: "#1D4ED8",
        primary_active: "#1E40AF",
        secondary: "#F4F4F5",
        highlight: "rgba(37, 99, 235, 0.12)",
    }),
    status: group!(StatusColors {
        success: "#16A34A",
        warning: "#D97706",
        danger: "#DC2626",
        info: "#0284C7",
    }),
    brand: group!(BrandColors {
        primary: "#7C3AED",
        hover: "#6D28D9",
        active: "#5B21B6",
        text: "#FFFFFF",
        surface: "#F5F3FF",
        border: "#DDD6FE",
    }),
    data: group!(DataColors {
        blue: "#2563EB",
        violet: "#7C3AED",
        green: "#16A34A",
        amber: "#D97706",
        red: "#DC2626",
        cyan: "#0891B2",
    }),
    palette: palette(),
});

fn palette() -> PaletteColors {
    group!(PaletteColors {
        white: "#FFFFFF",
        black: "#000000",
        gray: "#71717A",
        red: "#EF4444",
        orange: "#F97316",
        yellow: "#EAB308",
        green: "#22C55E",
        teal: "#14B8A6",
        blue: "#3B82F6",
        indigo: "#6366F1",
        violet: "#8B5CF6",
        pink: "#EC4899",
    })
}

/// Base color palette for the dark theme.
#[must_use]
pub fn dark_colors() -> &'static ThemeColors {
    &DARK_COLORS
}

/// Base color palette for the light theme.
#[must_use]
pub fn light_colors() -> &'static ThemeColors {
    &LIGHT_COLORS
}

/// Default spacing scale.
pub const BASE_SPACING: ThemeSpacing = ThemeSpacing {
    none: 0.0,
    xxs: 2.0,
    xs: 4.0,
    sm: 8.0,
    md: 12.0,
    lg: 16.0,
    xl: 24.0,
    xxl: 32.0,
    xxxl: 48.0,
};

/// Default corner radii.
pub const BASE_RADII: ThemeRadii = ThemeRadii {
    none: 0.0,
    sm: 4.0,
    md: 8.0,
    lg: 12.0,
    xl: 16.0,
    full: 9999.0,
};

/// Default typographic scale.
#[must_use]
pub fn base_typography() -> ThemeTypography {
    ThemeTypography {
        font_family: FontFamilies {
            sans: ["Inter", "-apple-system", "system-ui", "sans-serif"]
                .map(String::from)
                .to_vec(),
            mono: ["JetBrains Mono", "ui-monospace", "monospace"]
                .map(String::from)
                .to_vec(),
        },
        sizes: FontSizes {
            xs: 11.0,
            sm: 13.0,
            base: 14.0,
            md: 16.0,
            lg: 18.0,
            xl: 22.0,
            xxl: 28.0,
            display: 36.0,
        },
        weights: FontWeights {
            light: 300,
            regular: 400,
            medium: 500,
            semibold: 600,
            bold: 700,
        },
        line_heights: LineHeights {
            tight: 1.25,
            normal: 1.5,
            relaxed: 1.75,
        },
    }
}

/// Default elevation shadows.
#[must_use]
pub fn base_shadows() -> ThemeShadows {
    group!(ThemeShadows {
        none: "none",
        sm: "0 1px 2px rgba(0, 0, 0, 0.12)",
        md: "0 4px 12px rgba(0, 0, 0, 0.16)",
        lg: "0 12px 28px rgba(0, 0, 0, 0.2)",
        xl: "0 24px 48px rgba(0, 0, 0, 0.28)",
        inner: "inset 0 1px 2px rgba(0, 0, 0, 0.12)",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{contrast_ratio, is_hex_color};

    #[test]
    fn spacing_scale_is_increasing() {
        let s = BASE_SPACING;
        let values = [s.none, s.xxs, s.xs, s.sm, s.md, s.lg, s.xl, s.xxl, s.xxxl];
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn theme_contrast_ratios() {
        for colors in [dark_colors(), light_colors()] {
            let pairs = [
                (&colors.text.primary, &colors.background.canvas, 7.0),
                (&colors.text.primary, &colors.background.surface, 7.0),
                (&colors.text.secondary, &colors.background.canvas, 4.5),
                (&colors.text.on_raised, &colors.background.raised, 7.0),
                (&colors.brand.text, &colors.brand.primary, 4.5),
            ];
            for (fg, bg, threshold) in pairs {
                let ratio = contrast_ratio(fg, bg).unwrap();
                assert!(ratio >= threshold, "{fg} on {bg} is only {ratio:.2}");
            }
        }
    }

    #[test]
    fn solid_tokens_are_hex() {
        for colors in [dark_colors(), light_colors()] {
            for value in [
                &colors.accent.primary,
                &colors.accent.primary_hover,
                &colors.status.danger,
                &colors.border.focus,
                &colors.background.canvas,
            ] {
                assert!(is_hex_color(value), "{value} is not hex");
            }
        }
    }

    #[test]
    fn serialized_spacing_uses_css_scale_names() {
        let value = serde_json::to_value(BASE_SPACING).unwrap();
        assert_eq!(value["2xl"], 32.0);
        assert_eq!(value["3xl"], 48.0);
    }
}
