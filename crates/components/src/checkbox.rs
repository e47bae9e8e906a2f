//! Checkboxes with an indeterminate state.

use designsystem::{contrast_text_color, Style, WispTheme};
use serde::{Deserialize, Serialize};

use crate::{
    paint::{border, focus_ring_shadow},
    size::ComponentSize,
    state::{InteractionState, NO_RING},
};

/// Value shown by a checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Empty box.
    #[default]
    Unchecked,
    /// Filled box with a check.
    Checked,
    /// Partially checked, drawn with a dash.
    Indeterminate,
}

impl CheckState {
    /// Whether the box is filled.
    #[must_use]
    pub const fn is_marked(self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Glyph drawn inside a marked box.
    #[must_use]
    pub const fn glyph(self) -> Option<&'static str> {
        match self {
            CheckState::Unchecked => None,
            CheckState::Checked => Some("check"),
            CheckState::Indeterminate => Some("minus"),
        }
    }

    /// Next value on click; indeterminate resolves to checked.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked | CheckState::Indeterminate => CheckState::Checked,
        }
    }
}

/// Colors of a checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxColors {
    /// Border.
    pub border: String,
    /// Box fill.
    pub background: String,
    /// Check or dash glyph.
    pub mark: String,
    /// Label.
    pub label: String,
    /// Focus ring.
    pub focus_ring: String,
}

/// Resolves checkbox colors: disabled, error, checked, then idle.
#[must_use]
pub fn resolve_checkbox_colors(
    check: CheckState,
    state: InteractionState,
    theme: &WispTheme,
) -> CheckboxColors {
    let c = &theme.colors;
    let focus_ring = if state.shows_focus_ring() {
        c.border.focus.clone()
    } else {
        NO_RING.to_owned()
    };

    if state.disabled {
        return CheckboxColors {
            border: c.border.subtle.clone(),
            background: c.background.sunken.clone(),
            mark: c.text.disabled.clone(),
            label: c.text.disabled.clone(),
            focus_ring,
        };
    }

    if state.error {
        let (background, mark) = if check.is_marked() {
            (
                c.status.danger.clone(),
                contrast_text_color(&c.status.danger).to_owned(),
            )
        } else {
            ("transparent".to_owned(), NO_RING.to_owned())
        };
        return CheckboxColors {
            border: c.status.danger.clone(),
            background,
            mark,
            label: c.text.primary.clone(),
            focus_ring,
        };
    }

    if check.is_marked() {
        let fill = if state.hovered {
            &c.accent.primary_hover
        } else {
            &c.accent.primary
        };
        return CheckboxColors {
            border: fill.clone(),
            background: fill.clone(),
            mark: contrast_text_color(fill).to_owned(),
            label: c.text.primary.clone(),
            focus_ring,
        };
    }

    CheckboxColors {
        border: if state.hovered {
            c.border.active.clone()
        } else {
            c.border.strong.clone()
        },
        background: "transparent".to_owned(),
        mark: NO_RING.to_owned(),
        label: c.text.primary.clone(),
        focus_ring,
    }
}

/// Builds the style of the box itself.
#[must_use]
pub fn build_checkbox_style(
    colors: &CheckboxColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let edge = size.metrics(theme).icon_size;
    Style::new()
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("justifyContent", "center")
        .set("flexShrink", 0)
        .set("width", edge)
        .set("height", edge)
        .set("color", &colors.mark)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("borderRadius", theme.radii.sm)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
        .set("cursor", if state.disabled { "not-allowed" } else { "pointer" })
}

/// Builds the style of the label next to the box.
#[must_use]
pub fn build_checkbox_label_style(
    colors: &CheckboxColors,
    size: ComponentSize,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("gap", metrics.gap)
        .set("fontSize", metrics.font_size)
        .set("color", &colors.label)
}
