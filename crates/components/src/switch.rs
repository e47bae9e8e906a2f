//! Toggle switch. `selected` in the interaction state means "on".

use designsystem::{Style, WispTheme};
use serde::Serialize;

use crate::{
    paint::{focus_ring_shadow, translucent},
    size::ComponentSize,
    state::{InteractionState, NO_RING},
};

/// Colors of a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchColors {
    /// Track.
    pub track: String,
    /// The sliding knob.
    pub thumb: String,
    /// Label.
    pub label: String,
    /// Focus ring.
    pub focus_ring: String,
}

/// Resolves switch colors: disabled, on, then off.
#[must_use]
pub fn resolve_switch_colors(state: InteractionState, theme: &WispTheme) -> SwitchColors {
    let c = &theme.colors;
    let focus_ring = if state.shows_focus_ring() {
        c.border.focus.clone()
    } else {
        NO_RING.to_owned()
    };

    if state.disabled {
        let track = if state.selected {
            translucent(&c.accent.primary, 0.4)
        } else {
            c.background.sunken.clone()
        };
        return SwitchColors {
            track,
            thumb: c.text.disabled.clone(),
            label: c.text.disabled.clone(),
            focus_ring,
        };
    }

    let track = match (state.selected, state.hovered) {
        (true, true) => c.accent.primary_hover.clone(),
        (true, false) => c.accent.primary.clone(),
        (false, _) => c.border.strong.clone(),
    };
    SwitchColors {
        track,
        thumb: c.palette.white.clone(),
        label: c.text.primary.clone(),
        focus_ring,
    }
}

fn track_metrics(size: ComponentSize) -> (f32, f32) {
    match size {
        ComponentSize::Sm => (28.0, 16.0),
        ComponentSize::Md => (36.0, 20.0),
        ComponentSize::Lg => (44.0, 24.0),
    }
}

/// Builds the style of the track.
#[must_use]
pub fn build_switch_track_style(
    colors: &SwitchColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let (width, height) = track_metrics(size);
    Style::new()
        .set("position", "relative")
        .set("display", "inline-flex")
        .set("flexShrink", 0)
        .set("width", width)
        .set("height", height)
        .set("borderRadius", theme.radii.full)
        .set("backgroundColor", &colors.track)
        .set("boxShadow", focus_ring_shadow(&colors.focus_ring))
        .set("cursor", if state.disabled { "not-allowed" } else { "pointer" })
        .set("transition", "background-color 120ms ease")
}

/// Builds the style of the thumb; it slides to the right edge when on.
#[must_use]
pub fn build_switch_thumb_style(
    colors: &SwitchColors,
    size: ComponentSize,
    state: InteractionState,
    theme: &WispTheme,
) -> Style {
    let (width, height) = track_metrics(size);
    let inset = 2.0;
    let diameter = height - inset * 2.0;
    let left = if state.selected {
        width - diameter - inset
    } else {
        inset
    };
    Style::new()
        .set("position", "absolute")
        .set("top", inset)
        .set("left", left)
        .set("width", diameter)
        .set("height", diameter)
        .set("borderRadius", theme.radii.full)
        .set("backgroundColor", &colors.thumb)
        .set("boxShadow", &theme.shadows.sm)
        .set("transition", "left 120ms ease")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_track_uses_accent() {
        let theme = WispTheme::dark();
        let on = resolve_switch_colors(InteractionState::new().selected(true), &theme);
        assert_eq!(on.track, theme.colors.accent.primary);
        let off = resolve_switch_colors(InteractionState::new(), &theme);
        assert_eq!(off.track, theme.colors.border.strong);
    }

    #[test]
    fn disabled_wins_and_dims_on_track() {
        let theme = WispTheme::dark();
        let state = InteractionState::new()
            .selected(true)
            .focused(true)
            .disabled(true);
        let colors = resolve_switch_colors(state, &theme);
        assert_eq!(colors.track, "rgba(59, 130, 246, 0.4)");
        assert_eq!(colors.label, theme.colors.text.disabled);
        assert_eq!(colors.focus_ring, "transparent");
    }

    #[test]
    fn thumb_slides_when_on() {
        let theme = WispTheme::light();
        let on = InteractionState::new().selected(true);
        let colors = resolve_switch_colors(on, &theme);
        let thumb = build_switch_thumb_style(&colors, ComponentSize::Md, on, &theme);
        assert_eq!(thumb.get_number("left"), Some(18.0));
        assert_eq!(thumb.get_number("width"), Some(16.0));

        let off =
            build_switch_thumb_style(&colors, ComponentSize::Md, InteractionState::new(), &theme);
        assert_eq!(off.get_number("left"), Some(2.0));
    }

    #[test]
    fn track_is_rounded() {
        let theme = WispTheme::dark();
        let colors = resolve_switch_colors(InteractionState::new().focused(true), &theme);
        let track =
            build_switch_track_style(&colors, ComponentSize::Lg, InteractionState::new(), &theme);
        assert_eq!(track.get_number("width"), Some(44.0));
        assert_eq!(track.get_number("borderRadius"), Some(9999.0));
    }
}
