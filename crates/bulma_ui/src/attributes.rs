//! Insertion-ordered HTML attribute maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Extra HTML attributes splatted onto a component root, in insertion order.
///
/// Re-inserting an existing key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, returning the value it replaced.
    ///
    /// Names are not validated here; the renderer skips names that cannot appear in markup.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Inserts an attribute after checking that its name is usable in markup.
    pub fn try_insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> UiResult<Option<String>> {
        let name = name.into();
        if !is_valid_attribute_name(&name) {
            return Err(UiError::InvalidAttributeName(name));
        }
        Ok(self.insert(name, value))
    }

    /// Returns the value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes `name`, keeping the order of the remaining attributes.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Returns `true` when `name` can be written as an HTML attribute name.
///
/// Follows the HTML5 syntax rules: at least one character, and no whitespace, controls,
/// quotes, `<`, `>`, `/`, `=`, or Unicode noncharacters.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|ch| {
            !ch.is_whitespace()
                && !ch.is_control()
                && !matches!(ch, '"' | '\'' | '<' | '>' | '/' | '=')
                && !is_noncharacter(ch)
        })
}

fn is_noncharacter(ch: char) -> bool {
    let code = u32::from(ch);
    (0xFDD0..=0xFDEF).contains(&code) || (code & 0xFFFE) == 0xFFFE
}
