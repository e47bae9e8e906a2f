//! One-time-code style input made of single character cells.

use designsystem::{Style, WispTheme};
use serde::Serialize;

use crate::{
    paint::{border, focus_ring_shadow},
    size::ComponentSize,
    state::{InteractionState, VisualState, NO_RING},
};

/// Colors of a single pin cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinInputColors {
    /// Border of each cell.
    pub border: String,
    /// Background.
    pub background: String,
    /// Entered digit.
    pub text: String,
    /// Caret.
    pub caret: String,
    /// Focus ring.
    pub focus_ring: String,
}

/// Resolves the colors of one cell: disabled, error, focused, filled, idle.
#[must_use]
pub fn resolve_pin_input_colors(
    state: InteractionState,
    filled: bool,
    theme: &WispTheme,
) -> PinInputColors {
    let c = &theme.colors;
    let cell = |border: &str, text: &str, ring: &str| PinInputColors {
        border: border.to_owned(),
        background: c.background.sunken.clone(),
        text: text.to_owned(),
        caret: c.accent.primary.clone(),
        focus_ring: ring.to_owned(),
    };

    match state.visual_without_warning() {
        VisualState::Disabled => PinInputColors {
            caret: NO_RING.to_owned(),
            ..cell(&c.border.subtle, &c.text.disabled, NO_RING)
        },
        VisualState::Error => cell(&c.status.danger, &c.status.danger, NO_RING),
        VisualState::Active => cell(&c.border.focus, &c.text.primary, &c.accent.primary),
        _ if filled => cell(&c.border.active, &c.text.primary, NO_RING),
        _ => cell(&c.border.strong, &c.text.primary, NO_RING),
    }
}

/// Builds the style of one square cell.
#[must_use]
pub fn build_pin_input_cell_style(
    colors: &PinInputColors,
    size: ComponentSize,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("width", metrics.height)
        .set("height", metrics.height)
        .set("textAlign", "center")
        .set("fontFamily", theme.typography.font_family.mono.join(", "))
        .set("fontSize", metrics.font_size + 2.0)
        .set("fontWeight", theme.typography.weights.semibold)
        .set("color", &colors.text)
        .set("caretColor", &colors.caret)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("borderRadius", metrics.radius)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
}

/// Builds the style of the row holding the cells.
#[must_use]
pub fn build_pin_input_row_style(size: ComponentSize, theme: &WispTheme) -> Style {
    Style::new()
        .set("display", "flex")
        .set("flexDirection", "row")
        .set("alignItems", "center")
        .set("gap", size.metrics(theme).gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_only_matters_when_idle() {
        let theme = WispTheme::dark();
        let filled = resolve_pin_input_colors(InteractionState::new(), true, &theme);
        let empty = resolve_pin_input_colors(InteractionState::new(), false, &theme);
        assert_eq!(filled.border, theme.colors.border.active);
        assert_eq!(empty.border, theme.colors.border.strong);

        let focused = InteractionState::new().focused(true);
        assert_eq!(
            resolve_pin_input_colors(focused, true, &theme),
            resolve_pin_input_colors(focused, false, &theme)
        );
    }

    #[test]
    fn disabled_then_error_then_focus() {
        let theme = WispTheme::light();
        let all = InteractionState::new().disabled(true).error(true).focused(true);
        let disabled = resolve_pin_input_colors(all, true, &theme);
        assert_eq!(disabled.text, theme.colors.text.disabled);
        assert_eq!(disabled.caret, "transparent");
        assert_eq!(
            resolve_pin_input_colors(all.disabled(false), true, &theme).border,
            theme.colors.status.danger
        );
    }

    #[test]
    fn cells_are_square_and_monospaced() {
        let theme = WispTheme::dark();
        let colors = resolve_pin_input_colors(InteractionState::new(), false, &theme);
        let style = build_pin_input_cell_style(&colors, ComponentSize::Sm, &theme);
        assert_eq!(style.get_number("width"), style.get_number("height"));
        assert!(style
            .get_str("fontFamily")
            .unwrap()
            .starts_with("JetBrains Mono"));
        assert_eq!(
            build_pin_input_row_style(ComponentSize::Sm, &theme).get_number("gap"),
            Some(f64::from(theme.spacing.xs))
        );
    }
}
