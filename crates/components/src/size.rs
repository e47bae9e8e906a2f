//! Component size scale.

use designsystem::WispTheme;
use serde::{Deserialize, Serialize};

/// Size variants shared by form controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSize {
    /// Compact.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Touch-friendly.
    Lg,
}

/// Pixel metrics of a [`ComponentSize`] under a theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeMetrics {
    /// Control height.
    pub height: f32,
    /// Horizontal padding.
    pub padding_x: f32,
    /// Space between icon and text.
    pub gap: f32,
    /// Font size.
    pub font_size: f32,
    /// Icon size.
    pub icon_size: f32,
    /// Corner radius.
    pub radius: f32,
}

impl ComponentSize {
    /// Every size, smallest first.
    pub const ALL: [ComponentSize; 3] = [ComponentSize::Sm, ComponentSize::Md, ComponentSize::Lg];

    /// Lowercase name, as used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentSize::Sm => "sm",
            ComponentSize::Md => "md",
            ComponentSize::Lg => "lg",
        }
    }

    /// Control height in pixels. Heights are fixed across themes.
    #[must_use]
    pub const fn height(self) -> f32 {
        match self {
            ComponentSize::Sm => 28.0,
            ComponentSize::Md => 36.0,
            ComponentSize::Lg => 44.0,
        }
    }

    /// Resolves the size against the theme scales.
    #[must_use]
    pub fn metrics(self, theme: &WispTheme) -> SizeMetrics {
        let spacing = &theme.spacing;
        let sizes = &theme.typography.sizes;
        let radii = &theme.radii;
        match self {
            ComponentSize::Sm => SizeMetrics {
                height: self.height(),
                padding_x: spacing.sm,
                gap: spacing.xs,
                font_size: sizes.sm,
                icon_size: 14.0,
                radius: radii.sm,
            },
            ComponentSize::Md => SizeMetrics {
                height: self.height(),
                padding_x: spacing.md,
                gap: spacing.sm,
                font_size: sizes.base,
                icon_size: 16.0,
                radius: radii.md,
            },
            ComponentSize::Lg => SizeMetrics {
                height: self.height(),
                padding_x: spacing.lg,
                gap: spacing.sm,
                font_size: sizes.md,
                icon_size: 20.0,
                radius: radii.lg,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_grow_with_size() {
        let theme = WispTheme::dark();
        let metrics = ComponentSize::ALL.map(|size| size.metrics(&theme));
        assert!(metrics
            .windows(2)
            .all(|pair| pair[0].height < pair[1].height && pair[0].font_size < pair[1].font_size));
    }

    #[test]
    fn metrics_follow_theme_overrides() {
        use designsystem::{
            create_theme,
            tokens::{PartialThemeRadii, PartialThemeSpacing},
            ThemeOverrides,
        };

        let theme = create_theme(ThemeOverrides {
            spacing: PartialThemeSpacing {
                md: Some(10.0),
                ..PartialThemeSpacing::default()
            },
            radii: PartialThemeRadii {
                md: Some(2.0),
                ..PartialThemeRadii::default()
            },
            ..ThemeOverrides::default()
        });
        let md = ComponentSize::Md.metrics(&theme);
        assert_eq!(md.padding_x, 10.0);
        assert_eq!(md.radius, 2.0);
    }
}
