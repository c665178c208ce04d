// Profile store: reference n-gram distributions, one per category.
//
// The on-disk form is a single JSON object mapping category name to its
// distribution. Document order is kept on load, and that order decides
// how ties are ranked during classification.

pub mod store;
pub mod train;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::engine::NGramDistribution;

/// Ordered collection of unique category profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStore {
    profiles: Vec<(String, NGramDistribution)>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, or replace an existing one in place.
    ///
    /// Replacing keeps the category's original position.
    pub fn insert(&mut self, name: impl Into<String>, distribution: NGramDistribution) {
        let name = name.into();
        match self.profiles.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = distribution,
            None => self.profiles.push((name, distribution)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NGramDistribution> {
        self.profiles
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, dist)| dist)
    }

    /// Iterate `(category, distribution)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NGramDistribution)> {
        self.profiles.iter().map(|(name, dist)| (name.as_str(), dist))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Serialize for ProfileStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.profiles.len()))?;
        for (name, dist) in &self.profiles {
            map.serialize_entry(name, dist)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProfileStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProfileStoreVisitor)
    }
}

struct ProfileStoreVisitor;

impl<'de> Visitor<'de> for ProfileStoreVisitor {
    type Value = ProfileStore;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category name to n-gram frequencies")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut store = ProfileStore::new();
        while let Some((name, dist)) = access.next_entry::<String, NGramDistribution>()? {
            if store.get(&name).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate category `{name}`"
                )));
            }
            store.profiles.push((name, dist));
        }
        Ok(store)
    }
}
