//! Interaction flags and their precedence.

use serde::Serialize;

/// Literal focus ring value for "no ring".
pub const NO_RING: &str = "transparent";

/// Interaction flags supplied by the host on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct InteractionState {
    /// Wins over every other flag.
    pub disabled: bool,
    /// Validation failed.
    pub error: bool,
    /// Needs attention without failing.
    pub warning: bool,
    /// Keyboard or pointer focus.
    pub focused: bool,
    /// Selected, checked or open, depending on the component.
    pub selected: bool,
    /// Hovered.
    pub hovered: bool,
    /// Pointer held down.
    pub pressed: bool,
}

macro_rules! flag_setters {
    ($($flag:ident),+) => {
        $(
            #[doc = concat!("Sets the `", stringify!($flag), "` flag.")]
            #[must_use]
            pub const fn $flag(mut self, value: bool) -> Self {
                self.$flag = value;
                self
            }
        )+
    };
}

impl InteractionState {
    /// All flags cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disabled: false,
            error: false,
            warning: false,
            focused: false,
            selected: false,
            hovered: false,
            pressed: false,
        }
    }

    flag_setters!(disabled, error, warning, focused, selected, hovered, pressed);

    /// Resolves the flags in precedence order: disabled, error, warning,
    /// focused or selected, then idle.
    #[must_use]
    pub const fn visual(self) -> VisualState {
        self.resolve(true)
    }

    /// Same as [`visual`](Self::visual) for components without a warning
    /// treatment; the warning flag is ignored entirely.
    #[must_use]
    pub const fn visual_without_warning(self) -> VisualState {
        self.resolve(false)
    }

    const fn resolve(self, warning: bool) -> VisualState {
        if self.disabled {
            VisualState::Disabled
        } else if self.error {
            VisualState::Error
        } else if warning && self.warning {
            VisualState::Warning
        } else if self.focused || self.selected {
            VisualState::Active
        } else {
            VisualState::Idle
        }
    }

    /// Whether a focus ring should be drawn at all.
    #[must_use]
    pub const fn shows_focus_ring(self) -> bool {
        self.focused && !self.disabled
    }
}

/// The single visual treatment picked from an [`InteractionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    /// Dimmed and inert.
    Disabled,
    /// Error.
    Error,
    /// Warning.
    Warning,
    /// Focused, selected or open.
    Active,
    /// No flag set.
    Idle,
}
