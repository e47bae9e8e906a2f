#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod color;
pub mod css;
pub mod merge;
pub mod style;
pub mod theme;
pub mod tokens;

pub use color::{
    contrast_ratio, contrast_text_color, darken, hex_to_rgb, is_hex_color, lighten, mix_colors,
    relative_luminance, rgb_to_hex, with_alpha, ColorError, Rgb,
};
pub use css::{css_vars_stylesheet, theme_to_css_vars};
pub use merge::{deep_merge_json, DeepMerge, Nullable};
pub use style::{Style, StyleValue};
pub use theme::{
    create_theme, create_theme_with, ThemeError, ThemeIdGenerator, ThemeMode, ThemeOverrides,
    ThemeRegistry, WispTheme,
};
pub use tokens::{dark_colors, light_colors, ThemeColors};
