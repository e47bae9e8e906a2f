//! Structurally typed style objects.
//!
//! A [`Style`] is an ordered map from camelCase CSS property names to string
//! or numeric values, ready to be spread onto an inline style attribute or a
//! native style prop.

use std::fmt;

use heck::ToKebabCase;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Properties whose numeric values are unitless in CSS.
const UNITLESS: &[&str] = &[
    "opacity",
    "fontWeight",
    "lineHeight",
    "zIndex",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
];

/// A single style property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Pixel count or unitless number, depending on the property.
    Number(f64),
    /// Any literal CSS value.
    Text(String),
}

impl StyleValue {
    /// Returns the string value, if this is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

// Token scales are `f32`; widen through the shortest decimal so `1.3`
// renders as `1.3` rather than `1.2999999523162842`.
impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(
            value
                .to_string()
                .parse()
                .unwrap_or_else(|_| f64::from(value)),
        )
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u16> for StyleValue {
    fn from(value: u16) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Ordered CSS-like property map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    properties: IndexMap<String, StyleValue>,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any previous value in place.
    #[must_use]
    pub fn set(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets `property` only when `value` is present.
    #[must_use]
    pub fn set_opt(self, property: &str, value: Option<impl Into<StyleValue>>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    /// In-place variant of [`Style::set`].
    pub fn insert(&mut self, property: &str, value: impl Into<StyleValue>) {
        self.properties.insert(property.to_owned(), value.into());
    }

    /// Layers `other` on top of `self`; properties in `other` win.
    #[must_use]
    pub fn merge(mut self, other: Style) -> Self {
        self.properties.extend(other.properties);
        self
    }

    /// Looks up a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Looks up a text property.
    #[must_use]
    pub fn get_str(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_str)
    }

    /// Looks up a numeric property.
    #[must_use]
    pub fn get_number(&self, property: &str) -> Option<f64> {
        self.get(property).and_then(StyleValue::as_number)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` when no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Renders the style as CSS declarations, e.g. `border-radius: 8px;`.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(name, value)| {
                let value = match value {
                    StyleValue::Number(number) if !UNITLESS.contains(&name) && *number != 0.0 => {
                        format!("{number}px")
                    }
                    other => other.to_string(),
                };
                format!("{}: {value};", name.to_kebab_case())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let style = Style::new()
            .set("display", "flex")
            .set("padding", 8.0_f32)
            .set("display", "grid");
        let names: Vec<_> = style.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["display", "padding"]);
        assert_eq!(style.get_str("display"), Some("grid"));
    }

    #[test]
    fn merge_prefers_right_hand_side() {
        let base = Style::new().set("color", "#000").set("opacity", 1.0);
        let merged = base.merge(Style::new().set("opacity", 0.5));
        assert_eq!(merged.get_number("opacity"), Some(0.5));
        assert_eq!(merged.get_str("color"), Some("#000"));
    }

    #[test]
    fn renders_kebab_case_with_units() {
        let css = Style::new()
            .set("borderRadius", 8.0_f32)
            .set("fontWeight", 600_u16)
            .set("marginTop", 0.0_f32)
            .set("backgroundColor", "#fff")
            .to_css();
        assert_eq!(
            css,
            "border-radius: 8px; font-weight: 600; margin-top: 0; background-color: #fff;"
        );
    }

    #[test]
    fn fractional_f32_renders_shortest() {
        let css = Style::new()
            .set("lineHeight", 1.3_f32)
            .set("fontSize", 14.2_f32)
            .to_css();
        assert_eq!(css, "line-height: 1.3; font-size: 14.2px;");
        assert_eq!(StyleValue::from(0.1_f32).as_number(), Some(0.1));
    }

    #[test]
    fn serializes_as_flat_object() {
        let style = Style::new().set("width", 20.0_f32).set("cursor", "pointer");
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            r#"{"width":20.0,"cursor":"pointer"}"#
        );
    }

    #[test]
    fn set_opt_skips_missing_values() {
        let style = Style::new().set_opt("outline", None::<&str>);
        assert!(style.is_empty());
    }
}
