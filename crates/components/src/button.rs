//! Buttons.

use designsystem::{contrast_text_color, Style, WispTheme};
use serde::{Deserialize, Serialize};

use crate::{
    paint::{border, focus_ring_shadow, shade, tint},
    size::ComponentSize,
    state::{InteractionState, NO_RING},
};

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the accent color.
    #[default]
    Primary,
    /// Outlined on the surface color.
    Secondary,
    /// No fill until hovered.
    Ghost,
    /// Filled with the danger status color.
    Danger,
}

/// Colors of a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonColors {
    /// Fill.
    pub background: String,
    /// Border.
    pub border: String,
    /// Label and icon color.
    pub text: String,
    /// Focus ring.
    pub focus_ring: String,
}

/// Resolves button colors: disabled, pressed, hovered, then idle.
///
/// Filled variants pick black or white text from the fill's luminance. The
/// focus ring is independent of the fill and only drawn while focused.
#[must_use]
pub fn resolve_button_colors(
    variant: ButtonVariant,
    state: InteractionState,
    theme: &WispTheme,
) -> ButtonColors {
    let c = &theme.colors;
    let focus_ring = if state.shows_focus_ring() {
        c.border.focus.clone()
    } else {
        NO_RING.to_owned()
    };

    if state.disabled {
        let background = match variant {
            ButtonVariant::Ghost => "transparent".to_owned(),
            _ => c.background.sunken.clone(),
        };
        return ButtonColors {
            background,
            border: c.border.subtle.clone(),
            text: c.text.disabled.clone(),
            focus_ring,
        };
    }

    let filled = |idle: &str, hover: String, active: String| {
        let background = if state.pressed {
            active
        } else if state.hovered {
            hover
        } else {
            idle.to_owned()
        };
        ButtonColors {
            border: background.clone(),
            text: contrast_text_color(&background).to_owned(),
            background,
            focus_ring: focus_ring.clone(),
        }
    };

    match variant {
        ButtonVariant::Primary => filled(
            &c.accent.primary,
            c.accent.primary_hover.clone(),
            c.accent.primary_active.clone(),
        ),
        ButtonVariant::Danger => filled(
            &c.status.danger,
            shade(&c.status.danger, 0.08),
            shade(&c.status.danger, 0.16),
        ),
        ButtonVariant::Secondary => {
            let lift = if theme.is_dark() { tint } else { shade };
            let background = if state.pressed {
                lift(&c.accent.secondary, 0.12)
            } else if state.hovered {
                lift(&c.accent.secondary, 0.06)
            } else {
                c.accent.secondary.clone()
            };
            ButtonColors {
                background,
                border: c.border.strong.clone(),
                text: c.text.primary.clone(),
                focus_ring,
            }
        }
        ButtonVariant::Ghost => ButtonColors {
            background: if state.pressed || state.hovered {
                c.accent.highlight.clone()
            } else {
                "transparent".to_owned()
            },
            border: "transparent".to_owned(),
            text: c.accent.primary.clone(),
            focus_ring,
        },
    }
}

/// Builds the style of a button.
#[must_use]
pub fn build_button_style(
    colors: &ButtonColors,
    size: ComponentSize,
    state: InteractionState,
    full_width: bool,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("display", if full_width { "flex" } else { "inline-flex" })
        .set("alignItems", "center")
        .set("justifyContent", "center")
        .set("gap", metrics.gap)
        .set("height", metrics.height)
        .set("paddingLeft", metrics.padding_x)
        .set("paddingRight", metrics.padding_x)
        .set_opt("width", full_width.then_some("100%"))
        .set("fontSize", metrics.font_size)
        .set("fontWeight", theme.typography.weights.semibold)
        .set("lineHeight", theme.typography.line_heights.tight)
        .set("color", &colors.text)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("borderRadius", metrics.radius)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
        .set("cursor", if state.disabled { "not-allowed" } else { "pointer" })
        .set("opacity", if state.disabled { 0.6 } else { 1.0 })
        .set("userSelect", "none")
}
