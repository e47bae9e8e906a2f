//! Combobox trigger, dropdown menu and options.

use designsystem::{Style, WispTheme};
use serde::Serialize;

use crate::{
    paint::{border, focus_ring_shadow},
    size::ComponentSize,
    state::{InteractionState, VisualState, NO_RING},
};

/// Colors of a combobox. `selected` in the interaction state means "open".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboboxColors {
    /// Trigger border.
    pub trigger_border: String,
    /// Trigger background.
    pub trigger_background: String,
    /// Text of the selected value.
    pub trigger_text: String,
    /// Text shown while nothing is selected.
    pub placeholder: String,
    /// Chevron.
    pub chevron: String,
    /// Focus ring.
    pub focus_ring: String,
    /// Menu background.
    pub menu_background: String,
    /// Menu border.
    pub menu_border: String,
    /// Option text.
    pub option_text: String,
    /// Option under the pointer or keyboard cursor.
    pub option_highlight_background: String,
    /// Option selected background.
    pub option_selected_background: String,
    /// Option selected text.
    pub option_selected_text: String,
}

/// Resolves combobox colors: disabled, error, open or focused, then idle.
#[must_use]
pub fn resolve_combobox_colors(state: InteractionState, theme: &WispTheme) -> ComboboxColors {
    let c = &theme.colors;
    let base = ComboboxColors {
        trigger_border: c.border.strong.clone(),
        trigger_background: c.background.sunken.clone(),
        trigger_text: c.text.primary.clone(),
        placeholder: c.text.muted.clone(),
        chevron: c.text.secondary.clone(),
        focus_ring: NO_RING.to_owned(),
        menu_background: c.background.raised.clone(),
        menu_border: c.border.subtle.clone(),
        option_text: c.text.on_raised.clone(),
        option_highlight_background: c.accent.highlight.clone(),
        option_selected_background: c.accent.primary.clone(),
        option_selected_text: designsystem::contrast_text_color(&c.accent.primary).to_owned(),
    };

    match state.visual_without_warning() {
        VisualState::Disabled => ComboboxColors {
            trigger_border: c.border.subtle.clone(),
            trigger_text: c.text.disabled.clone(),
            placeholder: c.text.disabled.clone(),
            chevron: c.text.disabled.clone(),
            ..base
        },
        VisualState::Error => ComboboxColors {
            trigger_border: c.status.danger.clone(),
            chevron: c.status.danger.clone(),
            focus_ring: c.status.danger.clone(),
            ..base
        },
        VisualState::Active => ComboboxColors {
            trigger_border: c.border.focus.clone(),
            chevron: c.text.primary.clone(),
            focus_ring: c.accent.primary.clone(),
            ..base
        },
        VisualState::Warning | VisualState::Idle => base,
    }
}

/// Builds the style of the closed trigger button.
#[must_use]
pub fn build_combobox_trigger_style(
    colors: &ComboboxColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("display", "flex")
        .set("alignItems", "center")
        .set("justifyContent", "space-between")
        .set("gap", metrics.gap)
        .set("height", metrics.height)
        .set("paddingLeft", metrics.padding_x)
        .set("paddingRight", metrics.padding_x)
        .set("fontSize", metrics.font_size)
        .set("color", &colors.trigger_text)
        .set("backgroundColor", &colors.trigger_background)
        .set("border", border(&colors.trigger_border))
        .set("borderRadius", metrics.radius)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
        .set("cursor", if state.disabled { "not-allowed" } else { "pointer" })
}

/// Builds the style of the floating option list.
#[must_use]
pub fn build_combobox_menu_style(colors: &ComboboxColors, theme: &WispTheme) -> Style {
    Style::new()
        .set("position", "absolute")
        .set("zIndex", 1000)
        .set("marginTop", theme.spacing.xs)
        .set("padding", theme.spacing.xs)
        .set("maxHeight", 280.0)
        .set("overflowY", "auto")
        .set("backgroundColor", &colors.menu_background)
        .set("border", border(&colors.menu_border))
        .set("borderRadius", theme.radii.md)
        .set("boxShadow", &theme.shadows.md)
}

/// Builds the style of one option row.
#[must_use]
pub fn build_combobox_option_style(
    colors: &ComboboxColors,
    highlighted: bool,
    selected: bool,
    size: ComponentSize,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    let (background, text) = if selected {
        (
            colors.option_selected_background.clone(),
            colors.option_selected_text.clone(),
        )
    } else if highlighted {
        (
            colors.option_highlight_background.clone(),
            colors.option_text.clone(),
        )
    } else {
        ("transparent".to_owned(), colors.option_text.clone())
    };
    Style::new()
        .set("display", "flex")
        .set("alignItems", "center")
        .set("minHeight", metrics.height - theme.spacing.xs)
        .set("paddingLeft", metrics.padding_x)
        .set("paddingRight", metrics.padding_x)
        .set("fontSize", metrics.font_size)
        .set("borderRadius", theme.radii.sm)
        .set("backgroundColor", background)
        .set("color", text)
        .set(
            "fontWeight",
            if selected {
                theme.typography.weights.medium
            } else {
                theme.typography.weights.regular
            },
        )
}
