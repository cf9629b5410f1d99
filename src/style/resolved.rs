//! Flat, resolved style declarations.

use indexmap::map::Iter;
use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Deserializer, Serialize};

use super::properties::covered_longhands;
use crate::sx::Scalar;

/// A flat map from canonical (camelCase) CSS property names to values.
///
/// Entries keep insertion order. A resolved style never contains shorthand
/// aliases such as `px` or `bgcolor`, and never nests: pseudo-class blocks
/// travel separately as [`RuleSet`](crate::sx::RuleSet)s.
///
/// Decoding skips entries that are not strings or numbers, so a `null`
/// value in an inline style object simply leaves the property unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    declarations: IndexMap<String, Scalar>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the updated style for chaining.
    pub fn add<V: Into<Scalar>>(mut self, name: &str, value: V) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a declaration. An existing entry keeps its position.
    pub fn set<V: Into<Scalar>>(&mut self, name: &str, value: V) {
        self.declarations.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.declarations.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Scalar> {
        self.declarations.shift_remove(name)
    }

    pub fn iter(&self) -> Iter<'_, String, Scalar> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Layers `other` on top of this style.
    ///
    /// Every declaration in `other` wins over the same property here. A box
    /// shorthand in `other` (such as `border`) also removes every longhand it
    /// covers (`borderColor`, `borderTopColor`, ...) from this style, so a
    /// lower layer cannot leak through a shorthand set by a higher one.
    pub fn layer(&mut self, other: &ResolvedStyle) {
        // Clear first so that `other` keeps its own longhands.
        for name in other.declarations.keys() {
            for longhand in covered_longhands(name) {
                self.declarations.shift_remove(longhand);
            }
        }
        for (name, value) in other {
            self.declarations.insert(name.clone(), value.clone());
        }
    }

    /// Returns the declarations in the order they must be written out.
    ///
    /// This is insertion order, except that a box shorthand is moved in
    /// front of any of its longhands. Within one style the longhand is the
    /// more specific entry, and writing it last lets it win in the cascade.
    pub fn declarations(&self) -> Vec<(&str, &Scalar)> {
        let mut ordered: Vec<(&str, &Scalar)> = Vec::with_capacity(self.len());
        for (name, value) in &self.declarations {
            let covered = covered_longhands(name);
            let first_longhand = ordered
                .iter()
                .position(|(existing, _)| covered.iter().any(|c| c == existing));
            match first_longhand {
                Some(at) => ordered.insert(at, (name.as_str(), value)),
                None => ordered.push((name.as_str(), value)),
            }
        }
        ordered
    }
}

impl<'de> Deserialize<'de> for ResolvedStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Scalar(Scalar),
            Other(serde_json::Value),
        }

        let entries = IndexMap::<String, Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .filter_map(|(name, entry)| match entry {
                Entry::Scalar(value) => Some((name, value)),
                Entry::Other(value) => {
                    if !value.is_null() {
                        trace!("style: `{name}` is not a style value, skipped");
                    }
                    None
                }
            })
            .collect())
    }
}

impl<'a> IntoIterator for &'a ResolvedStyle {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for ResolvedStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            declarations: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
