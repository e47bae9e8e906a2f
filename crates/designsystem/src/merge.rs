//! Deep merge of partial token overrides onto fully resolved token groups.
//!
//! Every token group has a generated partial counterpart (see
//! [`token_group!`](crate::token_group)) whose fields are the partials of the
//! group's fields. Leaves are `Option<T>` and replace the base value
//! wholesale when set; nested groups recurse. Nullable leaves use
//! [`Nullable`] so that an explicit `null` clears them. Lists are leaves, so a
//! font stack override replaces the whole stack instead of being merged
//! element by element.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A value that can absorb a deeply partial override of itself.
pub trait DeepMerge: Sized {
    /// Partial representation. `Default` must mean "override nothing".
    type Partial: Default;

    /// Applies `partial` on top of `self`, keeping every untouched leaf.
    #[must_use]
    fn deep_merge(self, partial: Self::Partial) -> Self;
}

macro_rules! leaf_merge {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DeepMerge for $ty {
                type Partial = Option<$ty>;

                fn deep_merge(self, partial: Option<$ty>) -> Self {
                    partial.unwrap_or(self)
                }
            }
        )+
    };
}

leaf_merge!(String, f32, f64, u16, u32, bool);

impl<T> DeepMerge for Vec<T> {
    type Partial = Option<Vec<T>>;

    fn deep_merge(self, partial: Option<Vec<T>>) -> Self {
        partial.unwrap_or(self)
    }
}

/// Override of a nullable leaf.
///
/// A key missing from the override keeps the base value; a key set to `null`
/// clears it. Plain `Option<Option<T>>` cannot tell the two apart once serde
/// has collapsed `null` into the outer `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    /// Leave the base value untouched.
    Keep,
    /// Replace the base value, possibly with `None`.
    Set(Option<T>),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::Set(value)
    }
}

// Only called for keys that are present; absent keys come from `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::Set)
    }
}

impl<T> DeepMerge for Option<T> {
    type Partial = Nullable<T>;

    fn deep_merge(self, partial: Nullable<T>) -> Self {
        match partial {
            Nullable::Keep => self,
            Nullable::Set(value) => value,
        }
    }
}

/// Declares a token group together with its partial override type and the
/// [`DeepMerge`] impl tying them together.
///
/// Field types must implement [`DeepMerge`]; nested groups declared with this
/// macro do, as do the scalar leaves above.
#[macro_export]
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $partial:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Deeply partial overrides for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $partial {
            $(
                $(#[$fmeta])*
                pub $field: <$ty as $crate::merge::DeepMerge>::Partial,
            )+
        }

        impl $crate::merge::DeepMerge for $name {
            type Partial = $partial;

            fn deep_merge(self, partial: $partial) -> Self {
                Self {
                    $(
                        $field: $crate::merge::DeepMerge::deep_merge(self.$field, partial.$field),
                    )+
                }
            }
        }
    };
}

/// Merges `overlay` into `base` using the same rule as [`DeepMerge`], over
/// untyped JSON trees.
///
/// Recursion only happens when both sides hold an object. Arrays, scalars and
/// `null` in `overlay` overwrite whatever `base` holds at that key.
pub fn deep_merge_json(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_json(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    crate::token_group! {
        /// Test group.
        pub struct Inner => PartialInner {
            pub a: String,
            pub b: f32,
            pub note: Option<String>,
        }
    }

    crate::token_group! {
        /// Test group with a nested group.
        pub struct Outer => PartialOuter {
            pub inner: Inner,
            pub stack: Vec<String>,
        }
    }

    fn outer() -> Outer {
        Outer {
            inner: Inner {
                a: "a".into(),
                b: 1.0,
                note: Some("note".into()),
            },
            stack: vec!["Inter".into(), "sans-serif".into()],
        }
    }

    #[test]
    fn empty_partial_keeps_everything() {
        assert_eq!(outer().deep_merge(PartialOuter::default()), outer());
    }

    #[test]
    fn nested_leaf_override_keeps_siblings() {
        let merged = outer().deep_merge(PartialOuter {
            inner: PartialInner {
                b: Some(2.0),
                ..PartialInner::default()
            },
            ..PartialOuter::default()
        });
        assert_eq!(merged.inner.b, 2.0);
        assert_eq!(merged.inner.a, "a");
        assert_eq!(merged.stack, outer().stack);
    }

    #[test]
    fn lists_are_replaced_not_merged() {
        let merged = outer().deep_merge(PartialOuter {
            stack: Some(vec!["Mono".into()]),
            ..PartialOuter::default()
        });
        assert_eq!(merged.stack, vec!["Mono".to_string()]);
    }

    #[test]
    fn explicit_null_replaces_nullable_leaf() {
        let merged = outer().deep_merge(PartialOuter {
            inner: PartialInner {
                note: Nullable::Set(None),
                ..PartialInner::default()
            },
            ..PartialOuter::default()
        });
        assert_eq!(merged.inner.note, None);
    }

    #[test]
    fn json_null_clears_nullable_leaf() {
        let partial: PartialInner = serde_json::from_value(json!({ "note": null })).unwrap();
        assert_eq!(partial.note, Nullable::Set(None));
        let merged = outer().inner.deep_merge(partial);
        assert_eq!(merged.note, None);

        let absent: PartialInner = serde_json::from_value(json!({ "a": "z" })).unwrap();
        assert_eq!(absent.note, Nullable::Keep);
        assert_eq!(outer().inner.deep_merge(absent).note, Some("note".into()));

        let set: PartialInner = serde_json::from_value(json!({ "note": "other" })).unwrap();
        assert_eq!(outer().inner.deep_merge(set).note, Some("other".into()));
    }

    #[test]
    fn partial_deserializes_from_sparse_json() {
        let partial: PartialOuter =
            serde_json::from_value(json!({ "inner": { "a": "z" } })).unwrap();
        let merged = outer().deep_merge(partial);
        assert_eq!(merged.inner.a, "z");
        assert_eq!(merged.inner.b, 1.0);
    }

    #[test]
    fn json_merge_recurses_into_objects_only() {
        let mut base = json!({
            "colors": { "accent": { "primary": "#111111", "hover": "#222222" } },
            "fonts": ["Inter", "system-ui"],
            "mode": "dark"
        });
        deep_merge_json(
            &mut base,
            &json!({
                "colors": { "accent": { "primary": "#ffffff" } },
                "fonts": ["Mono"],
                "extra": 1
            }),
        );
        assert_eq!(base["colors"]["accent"]["primary"], "#ffffff");
        assert_eq!(base["colors"]["accent"]["hover"], "#222222");
        assert_eq!(base["fonts"], json!(["Mono"]));
        assert_eq!(base["mode"], "dark");
        assert_eq!(base["extra"], 1);
    }

    #[test]
    fn json_null_overwrites_instead_of_recursing() {
        let mut base = json!({ "accent": { "primary": "#111111" } });
        deep_merge_json(&mut base, &json!({ "accent": null }));
        assert_eq!(base["accent"], Value::Null);

        let mut base = json!({ "accent": null });
        deep_merge_json(&mut base, &json!({ "accent": { "primary": "#fff" } }));
        assert_eq!(base["accent"], json!({ "primary": "#fff" }));
    }
}
