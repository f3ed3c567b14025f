//! Ordered, read-only style bundles.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::value::StyleValue;

/// An ordered set of named style properties for a single UI element.
///
/// Bundles are built with a fluent builder and are read-only afterwards:
/// no `&mut` accessors exist, so a shared bundle cannot be mutated through
/// any reference. Cloning yields an independent bundle.
///
/// Insertion order is preserved, so the serialized shape of a bundle is
/// stable across reads.
///
/// # Example
///
/// ```rust
/// use sxbundle::{StyleBundle, StyleValue};
///
/// let styles = StyleBundle::new()
///     .set("display", StyleValue::keyword("flex"))
///     .set("width", StyleValue::scalar(800.0));
///
/// assert_eq!(styles.get("width").and_then(StyleValue::as_scalar), Some(800.0));
/// assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["display", "width"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleBundle {
    entries: Vec<(String, StyleValue)>,
}

impl StyleBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a property, returning the updated bundle for chaining.
    ///
    /// Setting a name that is already present replaces its value in place,
    /// keeping the key's original position.
    pub fn set<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
        self
    }

    /// Looks up a property by name.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns true when a property with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the bundle has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Layers `overrides` on top of this bundle.
    ///
    /// Overriding keys keep their original position; keys only present in
    /// `overrides` append in their own order.
    pub fn merge(self, overrides: StyleBundle) -> StyleBundle {
        let mut merged = self;
        for (name, value) in overrides.entries {
            merged = merged.set(&name, value);
        }
        merged
    }
}

impl Serialize for StyleBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleBundle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BundleVisitor;

        impl<'de> Visitor<'de> for BundleVisitor {
            type Value = StyleBundle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style property names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<StyleBundle, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut bundle = StyleBundle::new();
                while let Some((name, value)) = access.next_entry::<String, StyleValue>()? {
                    bundle = bundle.set(&name, value);
                }
                Ok(bundle)
            }
        }

        deserializer.deserialize_map(BundleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::LineStyle;

    #[test]
    fn test_set_and_get() {
        let bundle = StyleBundle::new().set("display", StyleValue::keyword("flex"));
        assert_eq!(bundle.get("display"), Some(&StyleValue::keyword("flex")));
        assert!(bundle.has("display"));
        assert!(!bundle.has("position"));
    }

    #[test]
    fn test_set_preserves_insertion_order() {
        let bundle = StyleBundle::new()
            .set("position", StyleValue::keyword("absolute"))
            .set("top", StyleValue::percent(50.0))
            .set("left", StyleValue::percent(50.0));
        let keys: Vec<_> = bundle.keys().collect();
        assert_eq!(keys, vec!["position", "top", "left"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let bundle = StyleBundle::new()
            .set("width", StyleValue::scalar(800.0))
            .set("height", StyleValue::percent(90.0))
            .set("width", StyleValue::scalar(600.0));

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("width"), Some(&StyleValue::scalar(600.0)));
        let keys: Vec<_> = bundle.keys().collect();
        assert_eq!(keys, vec!["width", "height"]);
    }

    #[test]
    fn test_numeric_values_convert() {
        let bundle = StyleBundle::new().set("p", 4).set("boxShadow", 24.0);
        assert_eq!(bundle.get("p"), Some(&StyleValue::scalar(4.0)));
        assert_eq!(bundle.get("boxShadow"), Some(&StyleValue::scalar(24.0)));
    }

    #[test]
    fn test_merge_overrides_and_appends() {
        let base = StyleBundle::new()
            .set("width", StyleValue::scalar(800.0))
            .set("display", StyleValue::keyword("flex"));
        let overrides = StyleBundle::new()
            .set("width", StyleValue::scalar(400.0))
            .set("height", StyleValue::percent(90.0));

        let merged = base.merge(overrides);
        assert_eq!(merged.get("width"), Some(&StyleValue::scalar(400.0)));
        assert_eq!(merged.get("display"), Some(&StyleValue::keyword("flex")));
        let keys: Vec<_> = merged.keys().collect();
        assert_eq!(keys, vec!["width", "display", "height"]);
    }

    #[test]
    fn test_default_is_empty() {
        let bundle = StyleBundle::default();
        assert!(bundle.is_empty());
        assert_eq!(bundle.len(), 0);
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let bundle = StyleBundle::new()
            .set("position", StyleValue::keyword("absolute"))
            .set("border", StyleValue::border(1.0, LineStyle::Solid, "border.DEFAULT"))
            .set("width", StyleValue::scalar(800.0));

        let json = serde_json::to_string(&bundle).unwrap();
        assert_eq!(
            json,
            r#"{"position":"absolute","border":"1px solid border.DEFAULT","width":800}"#
        );
    }

    #[test]
    fn test_deserialize_from_map() {
        let bundle: StyleBundle =
            serde_json::from_str(r#"{"height":"90%","minHeight":"570px","p":4}"#).unwrap();
        assert_eq!(bundle.get("height"), Some(&StyleValue::percent(90.0)));
        assert_eq!(bundle.get("minHeight"), Some(&StyleValue::px(570.0)));
        assert_eq!(bundle.get("p"), Some(&StyleValue::scalar(4.0)));
    }
}
