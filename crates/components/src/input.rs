//! Text input field.

use designsystem::{Style, WispTheme};
use serde::Serialize;

use crate::{
    paint::{border, focus_ring_shadow},
    size::ComponentSize,
    state::{InteractionState, VisualState, NO_RING},
};

/// Colors of an input field and its label and hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputColors {
    /// Border.
    pub border: String,
    /// Background.
    pub background: String,
    /// Entered text.
    pub text: String,
    /// Placeholder.
    pub placeholder: String,
    /// Leading and trailing icons.
    pub icon: String,
    /// Label.
    pub label: String,
    /// Helper or validation message under the field.
    pub hint: String,
    /// `"transparent"` when no ring should render.
    pub focus_ring: String,
}

/// Resolves input colors: disabled, error, warning, focused, then idle.
#[must_use]
pub fn resolve_input_colors(state: InteractionState, theme: &WispTheme) -> InputColors {
    let c = &theme.colors;
    let base = |border: &str, hint: &str, ring: &str| InputColors {
        border: border.to_owned(),
        background: c.background.sunken.clone(),
        text: c.text.primary.clone(),
        placeholder: c.text.muted.clone(),
        icon: c.text.secondary.clone(),
        label: c.text.secondary.clone(),
        hint: hint.to_owned(),
        focus_ring: ring.to_owned(),
    };

    match state.visual() {
        VisualState::Disabled => InputColors {
            border: c.border.subtle.clone(),
            background: c.background.sunken.clone(),
            text: c.text.disabled.clone(),
            placeholder: c.text.disabled.clone(),
            icon: c.text.disabled.clone(),
            label: c.text.disabled.clone(),
            hint: c.text.disabled.clone(),
            focus_ring: NO_RING.to_owned(),
        },
        VisualState::Error => InputColors {
            icon: c.status.danger.clone(),
            ..base(&c.status.danger, &c.status.danger, &c.status.danger)
        },
        VisualState::Warning => InputColors {
            icon: c.status.warning.clone(),
            ..base(&c.status.warning, &c.status.warning, &c.status.warning)
        },
        VisualState::Active => InputColors {
            label: c.text.primary.clone(),
            ..base(&c.border.focus, &c.text.muted, &c.accent.primary)
        },
        VisualState::Idle => base(&c.border.strong, &c.text.muted, NO_RING),
    }
}

/// Builds the style of the field container.
#[must_use]
pub fn build_input_style(
    colors: &InputColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("display", "flex")
        .set("flexDirection", "row")
        .set("alignItems", "center")
        .set("gap", metrics.gap)
        .set("height", metrics.height)
        .set("paddingLeft", metrics.padding_x)
        .set("paddingRight", metrics.padding_x)
        .set("fontSize", metrics.font_size)
        .set("fontFamily", theme.typography.font_family.sans.join(", "))
        .set("color", &colors.text)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("borderRadius", metrics.radius)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
        .set("outline", "none")
        .set("cursor", if state.disabled { "not-allowed" } else { "text" })
        .set("opacity", if state.disabled { 0.6 } else { 1.0 })
}

/// Builds the style of the label above the field.
#[must_use]
pub fn build_input_label_style(
    colors: &InputColors,
    size: ComponentSize,
    theme: &WispTheme,
) -> Style {
    Style::new()
        .set("display", "block")
        .set("marginBottom", theme.spacing.xs)
        .set("fontSize", size.metrics(theme).font_size)
        .set("fontWeight", theme.typography.weights.medium)
        .set("color", &colors.label)
}

/// Builds the style of the hint or error message below the field.
#[must_use]
pub fn build_input_hint_style(colors: &InputColors, theme: &WispTheme) -> Style {
    Style::new()
        .set("marginTop", theme.spacing.xs)
        .set("fontSize", theme.typography.sizes.xs)
        .set("lineHeight", theme.typography.line_heights.normal)
        .set("color", &colors.hint)
}
