//! Insertion-ordered map keyed by resource location.

use indexmap::IndexMap;

use crate::location::{ResourceLocation, ToResourceLocation};

/// An associative container keyed by normalized [`ResourceLocation`].
///
/// Iteration follows insertion order. Replacing the value of an existing key
/// keeps that key's position; removing a key closes the gap. Equality
/// compares contents only.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMap<T> {
    entries: IndexMap<ResourceLocation, T>,
}

impl<T> Default for ResourceMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceMap<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get<K: ToResourceLocation + ?Sized>(&self, id: &K) -> Option<&T> {
        let key = id.to_resource_location().ok()?;
        self.entries.get(key.as_ref())
    }

    pub fn get_mut<K: ToResourceLocation + ?Sized>(&mut self, id: &K) -> Option<&mut T> {
        let key = id.to_resource_location().ok()?;
        self.entries.get_mut(key.as_ref())
    }

    pub fn contains_key<K: ToResourceLocation + ?Sized>(&self, id: &K) -> bool {
        self.get(id).is_some()
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, id: ResourceLocation, value: T) -> Option<T> {
        self.entries.insert(id, value)
    }

    /// Remove an entry. Later entries move up one position.
    pub fn remove<K: ToResourceLocation + ?Sized>(&mut self, id: &K) -> Option<T> {
        let key = id.to_resource_location().ok()?;
        self.entries.shift_remove(key.as_ref())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, ResourceLocation, T> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, ResourceLocation, T> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, ResourceLocation, T> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, ResourceLocation, T> {
        self.entries.values_mut()
    }
}

impl<T> FromIterator<(ResourceLocation, T)> for ResourceMap<T> {
    fn from_iter<I: IntoIterator<Item = (ResourceLocation, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(ResourceLocation, T)> for ResourceMap<T> {
    fn extend<I: IntoIterator<Item = (ResourceLocation, T)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<T> IntoIterator for ResourceMap<T> {
    type Item = (ResourceLocation, T);
    type IntoIter = indexmap::map::IntoIter<ResourceLocation, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceMap<T> {
    type Item = (&'a ResourceLocation, &'a T);
    type IntoIter = indexmap::map::Iter<'a, ResourceLocation, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
