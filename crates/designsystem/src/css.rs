//! CSS custom property export.

use heck::ToKebabCase;
use indexmap::IndexMap;
use serde_json::Value;

use crate::theme::WispTheme;

/// Prefix shared by every exported custom property.
pub const CSS_VAR_PREFIX: &str = "--wisp";

/// Scales whose numeric tokens are pixel lengths.
const PIXEL_SCALES: &[&str] = &["spacing", "radii", "sizes"];

/// Flattens every token of `theme` into `--wisp-<group>-<path>` custom
/// properties, in declaration order.
///
/// Font stacks are joined with commas and pixel scales get a `px` suffix.
///
/// # Panics
///
/// Never in practice: token groups hold only strings, finite numbers and
/// string lists, all of which serialize.
#[must_use]
pub fn theme_to_css_vars(theme: &WispTheme) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    vars.insert(format!("{CSS_VAR_PREFIX}-mode"), theme.mode.to_string());
    let scales = [
        ("colors", serde_json::to_value(&theme.colors)),
        ("spacing", serde_json::to_value(&theme.spacing)),
        ("typography", serde_json::to_value(&theme.typography)),
        ("radii", serde_json::to_value(&theme.radii)),
        ("shadows", serde_json::to_value(&theme.shadows)),
    ];
    for (scale, value) in scales {
        let value = value.expect("token groups serialize to JSON");
        flatten(&mut vars, &[scale], &value);
    }
    vars
}

fn flatten(vars: &mut IndexMap<String, String>, path: &[&str], value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let mut child_path = path.to_vec();
                child_path.push(key);
                flatten(vars, &child_path, child);
            }
        }
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    Value::String(s) if s.contains(' ') => format!("\"{s}\""),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            vars.insert(var_name(path), joined);
        }
        Value::Number(number) => {
            let is_pixel = path.iter().any(|segment| PIXEL_SCALES.contains(segment));
            let number = number.as_f64().map_or_else(|| number.to_string(), format_number);
            let rendered = if is_pixel { format!("{number}px") } else { number };
            vars.insert(var_name(path), rendered);
        }
        Value::String(s) => {
            vars.insert(var_name(path), s.clone());
        }
        Value::Bool(b) => {
            vars.insert(var_name(path), b.to_string());
        }
        Value::Null => {}
    }
}

/// Serialized `f32` tokens arrive widened to `f64`; print them at `f32`
/// precision when that is lossless.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn format_number(value: f64) -> String {
    let narrow = value as f32;
    if f64::from(narrow) == value {
        narrow.to_string()
    } else {
        value.to_string()
    }
}

fn var_name(path: &[&str]) -> String {
    let segments: Vec<String> = path
        .iter()
        .map(|segment| {
            // `2xl` style keys survive kebab-casing untouched.
            if segment.starts_with(|c: char| c.is_ascii_digit()) {
                (*segment).to_owned()
            } else {
                segment.to_kebab_case()
            }
        })
        .collect();
    format!("{CSS_VAR_PREFIX}-{}", segments.join("-"))
}

/// Renders the custom properties of `theme` as a rule for `selector`.
#[must_use]
pub fn css_vars_stylesheet(theme: &WispTheme, selector: &str) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in theme_to_css_vars(theme) {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{create_theme, ThemeOverrides};

    #[test]
    fn exports_nested_tokens_in_kebab_case() {
        let theme = WispTheme::light();
        let vars = theme_to_css_vars(&theme);
        assert_eq!(vars["--wisp-mode"], "light");
        assert_eq!(
            vars["--wisp-colors-accent-primary-hover"],
            theme.colors.accent.primary_hover
        );
        assert_eq!(vars["--wisp-spacing-2xl"], "32px");
        assert_eq!(vars["--wisp-radii-md"], "8px");
        assert_eq!(vars["--wisp-typography-sizes-base"], "14px");
        assert_eq!(vars["--wisp-typography-weights-bold"], "700");
        assert_eq!(vars["--wisp-typography-line-heights-normal"], "1.5");
        assert_eq!(
            vars["--wisp-typography-font-family-mono"],
            "\"JetBrains Mono\", ui-monospace, monospace"
        );
    }

    #[test]
    fn fractional_overrides_keep_their_decimals() {
        let overrides = ThemeOverrides::from_json(
            r#"{ "typography": { "lineHeights": { "tight": 1.3 }, "sizes": { "base": 14.2 } } }"#,
        )
        .unwrap();
        let vars = theme_to_css_vars(&create_theme(overrides));
        assert_eq!(vars["--wisp-typography-line-heights-tight"], "1.3");
        assert_eq!(vars["--wisp-typography-sizes-base"], "14.2px");
    }

    #[test]
    fn stylesheet_wraps_vars_in_selector() {
        let css = css_vars_stylesheet(&WispTheme::dark(), ":root");
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --wisp-colors-text-primary: #F4F4F5;\n"));
        assert!(css.ends_with("}\n"));
    }
}
