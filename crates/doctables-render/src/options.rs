//! Option values for table activation.
//!
//! DataTables options arrive from two kinds of sources: structured
//! configuration (a nested mapping, e.g. from a JSON or YAML file) and
//! verbatim JavaScript text pasted by the user. [`TableOptions`] keeps the
//! two apart so rendering can dispatch on the variant instead of sniffing
//! the content.
//!
//! [`SelectorOptions`] collects per-selector overrides. It preserves
//! insertion order: the generated script must activate selectors in the
//! order they were declared, since later declarations may intentionally
//! override earlier ones.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Options for one DataTables activation call.
///
/// Either a structured mapping rendered as a JS object literal, or raw
/// script text inserted verbatim. Raw text is the escape hatch for
/// expressions DataTables' JSON option language cannot express (callbacks,
/// computed values); its validity is the user's responsibility.
///
/// The untagged serde representation means a config file can supply either
/// shape directly: a mapping becomes [`TableOptions::Structured`], a string
/// becomes [`TableOptions::Raw`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TableOptions {
    /// Raw JavaScript text, passed through as-is.
    Raw(String),
    /// A nested key/value mapping, rendered as a JS object literal.
    /// Keys render in declaration order.
    Structured(Map<String, Value>),
}

impl TableOptions {
    /// Returns true for an empty mapping or blank raw text.
    pub fn is_empty(&self) -> bool {
        match self {
            TableOptions::Raw(text) => text.trim().is_empty(),
            TableOptions::Structured(map) => map.is_empty(),
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions::Structured(Map::new())
    }
}

impl From<Map<String, Value>> for TableOptions {
    fn from(map: Map<String, Value>) -> Self {
        TableOptions::Structured(map)
    }
}

impl From<String> for TableOptions {
    fn from(text: String) -> Self {
        TableOptions::Raw(text)
    }
}

impl From<&str> for TableOptions {
    fn from(text: &str) -> Self {
        TableOptions::Raw(text.to_string())
    }
}

/// Per-selector option overrides, in declaration order.
///
/// Behaves like an insertion-ordered map: inserting an existing selector
/// replaces its options in place, everything else appends. Iteration order
/// is exactly insertion order; selectors are never sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorOptions(Vec<(String, TableOptions)>);

impl SelectorOptions {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `options` to `selector`, keeping the original position if the
    /// selector was already present.
    pub fn insert(&mut self, selector: impl Into<String>, options: TableOptions) {
        let selector = selector.into();
        match self.0.iter_mut().find(|(key, _)| *key == selector) {
            Some((_, slot)) => *slot = options,
            None => self.0.push((selector, options)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableOptions)> {
        self.0.iter().map(|(selector, options)| (selector.as_str(), options))
    }
}

impl FromIterator<(String, TableOptions)> for SelectorOptions {
    fn from_iter<I: IntoIterator<Item = (String, TableOptions)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (selector, options) in iter {
            out.insert(selector, options);
        }
        out
    }
}

// Hand-written so declaration order survives deserialization; a derived
// map-backed impl would be free to re-order keys.
impl<'de> Deserialize<'de> for SelectorOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SelectorOptionsVisitor;

        impl<'de> Visitor<'de> for SelectorOptionsVisitor {
            type Value = SelectorOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from CSS selector to table options")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = SelectorOptions::new();
                while let Some((selector, options)) =
                    access.next_entry::<String, TableOptions>()?
                {
                    out.insert(selector, options);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(SelectorOptionsVisitor)
    }
}
