//! Time picker: segmented `hh:mm` field plus a dropdown of columns.

use designsystem::{contrast_text_color, Style, WispTheme};
use serde::Serialize;

use crate::{
    paint::{border, focus_ring_shadow},
    size::ComponentSize,
    state::{InteractionState, VisualState, NO_RING},
};

/// Colors of a time picker. `selected` in the interaction state means "open".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePickerColors {
    /// Border.
    pub border: String,
    /// Background.
    pub background: String,
    /// Text.
    pub text: String,
    /// Placeholder.
    pub placeholder: String,
    /// Clock icon.
    pub icon: String,
    /// Focus ring.
    pub focus_ring: String,
    /// Hour, minute or period segment being edited.
    pub segment_focus_background: String,
    /// Segment focus text.
    pub segment_focus_text: String,
    /// Dropdown panel listing times.
    pub panel_background: String,
    /// Panel border.
    pub panel_border: String,
    /// Option text.
    pub option_text: String,
    /// Option selected background.
    pub option_selected_background: String,
    /// Option selected text.
    pub option_selected_text: String,
}

/// Resolves time picker colors: disabled, error, open or focused, then idle.
#[must_use]
pub fn resolve_time_picker_colors(state: InteractionState, theme: &WispTheme) -> TimePickerColors {
    let c = &theme.colors;
    let idle = TimePickerColors {
        border: c.border.strong.clone(),
        background: c.background.sunken.clone(),
        text: c.text.primary.clone(),
        placeholder: c.text.muted.clone(),
        icon: c.text.secondary.clone(),
        focus_ring: NO_RING.to_owned(),
        segment_focus_background: c.accent.highlight.clone(),
        segment_focus_text: c.text.primary.clone(),
        panel_background: c.background.raised.clone(),
        panel_border: c.border.subtle.clone(),
        option_text: c.text.on_raised.clone(),
        option_selected_background: c.accent.primary.clone(),
        option_selected_text: contrast_text_color(&c.accent.primary).to_owned(),
    };

    match state.visual_without_warning() {
        VisualState::Disabled => TimePickerColors {
            border: c.border.subtle.clone(),
            text: c.text.disabled.clone(),
            placeholder: c.text.disabled.clone(),
            icon: c.text.disabled.clone(),
            segment_focus_background: "transparent".to_owned(),
            segment_focus_text: c.text.disabled.clone(),
            ..idle
        },
        VisualState::Error => TimePickerColors {
            border: c.status.danger.clone(),
            icon: c.status.danger.clone(),
            focus_ring: c.status.danger.clone(),
            ..idle
        },
        VisualState::Active => TimePickerColors {
            border: c.border.focus.clone(),
            icon: c.text.primary.clone(),
            focus_ring: c.accent.primary.clone(),
            ..idle
        },
        VisualState::Warning | VisualState::Idle => idle,
    }
}

/// Builds the style of the field.
#[must_use]
pub fn build_time_picker_style(
    colors: &TimePickerColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("gap", metrics.gap)
        .set("height", metrics.height)
        .set("paddingLeft", metrics.padding_x)
        .set("paddingRight", metrics.padding_x)
        .set("fontFamily", theme.typography.font_family.mono.join(", "))
        .set("fontSize", metrics.font_size)
        .set("fontVariantNumeric", "tabular-nums")
        .set("color", &colors.text)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("borderRadius", metrics.radius)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
        .set("cursor", if state.disabled { "not-allowed" } else { "pointer" })
}

/// Builds the style of one editable segment (hours, minutes, period).
#[must_use]
pub fn build_time_segment_style(
    colors: &TimePickerColors,
    focused: bool,
    theme: &WispTheme,
) -> Style {
    let (background, text) = if focused {
        (
            colors.segment_focus_background.as_str(),
            colors.segment_focus_text.as_str(),
        )
    } else {
        ("transparent", colors.text.as_str())
    };
    Style::new()
        .set("paddingLeft", theme.spacing.xxs)
        .set("paddingRight", theme.spacing.xxs)
        .set("borderRadius", theme.radii.sm)
        .set("backgroundColor", background)
        .set("color", text)
}

/// Builds the style of the dropdown panel holding the hour/minute columns.
#[must_use]
pub fn build_time_picker_panel_style(colors: &TimePickerColors, theme: &WispTheme) -> Style {
    Style::new()
        .set("display", "flex")
        .set("flexDirection", "row")
        .set("gap", theme.spacing.xs)
        .set("padding", theme.spacing.xs)
        .set("backgroundColor", &colors.panel_background)
        .set("border", border(&colors.panel_border))
        .set("borderRadius", theme.radii.md)
        .set("boxShadow", &theme.shadows.lg)
}

/// Builds the style of one cell in a panel column.
#[must_use]
pub fn build_time_option_style(
    colors: &TimePickerColors,
    selected: bool,
    theme: &WispTheme,
) -> Style {
    let style = Style::new()
        .set("width", 40.0)
        .set("height", 28.0)
        .set("display", "flex")
        .set("alignItems", "center")
        .set("justifyContent", "center")
        .set("borderRadius", theme.radii.sm)
        .set("fontSize", theme.typography.sizes.sm);
    if selected {
        style
            .set("backgroundColor", &colors.option_selected_background)
            .set("color", &colors.option_selected_text)
            .set("fontWeight", theme.typography.weights.semibold)
    } else {
        style
            .set("backgroundColor", "transparent")
            .set("color", &colors.option_text)
            .set("fontWeight", theme.typography.weights.regular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_disabled_error_open() {
        let theme = WispTheme::dark();
        let open = InteractionState::new().selected(true);
        let all = open.error(true).disabled(true);

        assert_eq!(
            resolve_time_picker_colors(all, &theme).text,
            theme.colors.text.disabled
        );
        assert_eq!(
            resolve_time_picker_colors(all.disabled(false), &theme).border,
            theme.colors.status.danger
        );
        let colors = resolve_time_picker_colors(open, &theme);
        assert_eq!(colors.border, theme.colors.border.focus);
        assert_eq!(colors.focus_ring, theme.colors.accent.primary);
    }

    #[test]
    fn idle_has_transparent_ring() {
        let theme = WispTheme::light();
        let colors = resolve_time_picker_colors(InteractionState::new(), &theme);
        assert_eq!(colors.focus_ring, "transparent");
        let style = build_time_picker_style(
            &colors,
            ComponentSize::Md,
            InteractionState::new(),
            &theme,
        );
        assert_eq!(style.get_str("boxShadow"), Some("0 0 0 3px transparent"));
        assert_eq!(style.get_str("fontVariantNumeric"), Some("tabular-nums"));
    }

    #[test]
    fn segments_and_options_highlight_selection() {
        let theme = WispTheme::dark();
        let colors = resolve_time_picker_colors(InteractionState::new().focused(true), &theme);
        assert_eq!(
            build_time_segment_style(&colors, true, &theme).get_str("backgroundColor"),
            Some(theme.colors.accent.highlight.as_str())
        );
        let option = build_time_option_style(&colors, true, &theme);
        assert_eq!(
            option.get_str("backgroundColor"),
            Some(theme.colors.accent.primary.as_str())
        );
        assert_eq!(option.get_number("fontWeight"), Some(600.0));
        assert_eq!(
            build_time_picker_panel_style(&colors, &theme).get_str("boxShadow"),
            Some(theme.shadows.lg.as_str())
        );
    }
}
