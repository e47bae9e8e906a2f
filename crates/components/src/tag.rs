//! Tags and removable chips.

use designsystem::{contrast_text_color, Style, WispTheme};
use serde::{Deserialize, Serialize};

use crate::{
    paint::{border, translucent},
    size::ComponentSize,
    state::InteractionState,
};

/// Semantic color family of a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVariant {
    /// Gray, for plain labels.
    #[default]
    Neutral,
    /// Brand accent.
    Accent,
    /// Success status color.
    Success,
    /// Warning status color.
    Warning,
    /// Danger status color.
    Danger,
}

impl TagVariant {
    /// Solid color the variant is derived from.
    #[must_use]
    pub fn base_color(self, theme: &WispTheme) -> &str {
        let c = &theme.colors;
        match self {
            TagVariant::Neutral => &c.text.secondary,
            TagVariant::Accent => &c.accent.primary,
            TagVariant::Success => &c.status.success,
            TagVariant::Warning => &c.status.warning,
            TagVariant::Danger => &c.status.danger,
        }
    }
}

/// Colors of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagColors {
    /// Background.
    pub background: String,
    /// Border.
    pub border: String,
    /// Text.
    pub text: String,
    /// Leading icon and remove button glyph.
    pub icon: String,
    /// Remove button under the pointer.
    pub remove_hover_background: String,
}

/// Resolves tag colors: disabled, selected, then idle. Tags have no error,
/// warning or focus treatment.
///
/// Selected tags are filled with the variant color and pick black or white
/// text by luminance; idle tags use a translucent wash of it.
#[must_use]
pub fn resolve_tag_colors(
    variant: TagVariant,
    state: InteractionState,
    theme: &WispTheme,
) -> TagColors {
    let c = &theme.colors;
    let base = variant.base_color(theme);

    if state.disabled {
        return TagColors {
            background: c.background.sunken.clone(),
            border: c.border.subtle.clone(),
            text: c.text.disabled.clone(),
            icon: c.text.disabled.clone(),
            remove_hover_background: "transparent".to_owned(),
        };
    }

    if state.selected {
        let text = contrast_text_color(base).to_owned();
        return TagColors {
            background: base.to_owned(),
            border: base.to_owned(),
            icon: text.clone(),
            remove_hover_background: translucent(&text, 0.2),
            text,
        };
    }

    let text = if variant == TagVariant::Neutral {
        c.text.primary.clone()
    } else {
        base.to_owned()
    };
    TagColors {
        background: translucent(base, 0.12),
        border: translucent(base, 0.32),
        icon: text.clone(),
        remove_hover_background: translucent(base, 0.2),
        text,
    }
}

/// Builds the style of the tag pill.
#[must_use]
pub fn build_tag_style(
    colors: &TagColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let metrics = size.metrics(theme);
    Style::new()
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("gap", theme.spacing.xs)
        .set("height", metrics.height - theme.spacing.sm)
        .set("paddingLeft", metrics.padding_x - theme.spacing.xs)
        .set("paddingRight", metrics.padding_x - theme.spacing.xs)
        .set("fontSize", metrics.font_size - 1.0)
        .set("fontWeight", theme.typography.weights.medium)
        .set("color", &colors.text)
        .set("backgroundColor", &colors.background)
        .set("border", border(&colors.border))
        .set("borderRadius", theme.radii.full)
        .set("whiteSpace", "nowrap")
        .set("cursor", if state.disabled { "default" } else { "pointer" })
}

/// Builds the style of the remove button inside a removable tag.
#[must_use]
pub fn build_tag_remove_style(colors: &TagColors, hovered: bool, theme: &WispTheme) -> Style {
    Style::new()
        .set("display", "inline-flex")
        .set("alignItems", "center")
        .set("justifyContent", "center")
        .set("width", theme.spacing.lg)
        .set("height", theme.spacing.lg)
        .set("borderRadius", theme.radii.full)
        .set("color", &colors.icon)
        .set(
            "backgroundColor",
            if hovered {
                colors.remove_hover_background.as_str()
            } else {
                "transparent"
            },
        )
}
