use serde::{Deserialize, Deserializer, Serialize};

/// In-memory set of related records backing a one-to-many navigation.
///
/// Membership is decided by the related type's own `PartialEq`: inserting a
/// value equal to one already held is a no-op, and deserializing goes
/// through the same path. Iteration follows insertion order, but equality
/// ignores it.
///
/// Every instance owns its storage, so two default-constructed navigations
/// never alias each other.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Navigation<T> {
    items: Vec<T>,
}

impl<T> Navigation<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Navigation<T> {
    /// Add `item` unless an equal entry is already present.
    ///
    /// Returns `true` when the entry was added.
    pub fn insert(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Discard every current entry, then insert `items`.
    pub fn replace(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        self.extend(items);
    }
}

impl<T> Default for Navigation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Navigation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq> Eq for Navigation<T> {}

impl<'de, T> Deserialize<'de> for Navigation<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_iter)
    }
}

impl<T: PartialEq> Extend<T> for Navigation<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for Navigation<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut nav = Self::new();
        nav.extend(iter);
        nav
    }
}

impl<T> IntoIterator for Navigation<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Navigation<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
