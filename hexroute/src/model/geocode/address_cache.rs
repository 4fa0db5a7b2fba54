use super::CoordKey;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

/// the cached outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressEntry {
    Resolved(String),
    /// the lookup failed and will not be retried during this run
    Unresolvable,
}

/// addresses by normalized coordinate, shared between the resolver's workers.
///
/// entries are write-once: the first outcome recorded for a key is kept, so
/// the cache is never overwritten by a later lookup of the same key.
#[derive(Debug, Default)]
pub struct AddressCache {
    entries: RwLock<HashMap<CoordKey, AddressEntry>>,
}

impl AddressCache {
    pub fn new() -> AddressCache {
        AddressCache::default()
    }

    pub fn get(&self, key: &CoordKey) -> Option<AddressEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    pub fn contains(&self, key: &CoordKey) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(key)
    }

    /// records an outcome if the key has none yet. returns true if stored.
    pub fn insert(&self, key: CoordKey, entry: AddressEntry) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(v) => {
                v.insert(entry);
                true
            }
        }
    }

    /// the resolved name for a key, `None` if unresolvable or never looked up.
    pub fn name(&self, key: &CoordKey) -> Option<String> {
        match self.get(key) {
            Some(AddressEntry::Resolved(name)) => Some(name),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// number of unresolvable entries
    pub fn unresolvable_count(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|e| **e == AddressEntry::Unresolvable)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::spatial::LatLon;

    #[test]
    fn test_first_write_wins() {
        let cache = AddressCache::new();
        let key = CoordKey::new(&LatLon::new(23.78, 90.40), 6);
        assert!(cache.insert(key, AddressEntry::Unresolvable));
        assert!(!cache.insert(key, AddressEntry::Resolved(String::from("Gulshan"))));
        assert_eq!(cache.get(&key), Some(AddressEntry::Unresolvable));
        assert_eq!(cache.name(&key), None);
        assert_eq!(cache.unresolvable_count(), 1);
    }
}
