// src/tokenizer/cache.rs

use std::collections::VecDeque;
use std::hash::Hash;

use ahash::AHashMap;
use log::debug;

/// Bounded store that remembers insertion order.
///
/// When an insert pushes the size past `capacity`, the oldest-inserted half of
/// the entries is discarded in one go. Reads do not refresh an entry's age, so
/// this is not an LRU. Not thread-safe; wrap it externally if it must be
/// shared.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    entries: AHashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: AHashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces a value. Replacing keeps the original insertion slot.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return;
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);

        if self.entries.len() > self.capacity {
            self.evict_oldest_half();
        }
    }

    pub fn evict_oldest_half(&mut self) {
        let to_remove = (self.order.len() / 2).max(1).min(self.order.len());
        for key in self.order.drain(..to_remove) {
            self.entries.remove(&key);
        }
        debug!("Cache evicted {} oldest entries, {} remain", to_remove, self.entries.len());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_half_on_overflow() {
        let mut cache = BoundedCache::new(4);
        for i in 0..4 {
            cache.insert(i, i * 10);
        }
        assert_eq!(cache.len(), 4);

        cache.insert(4, 40);
        // 5 entries overflowed capacity 4, the two oldest are gone
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key(&0));
        assert!(!cache.contains_key(&1));
        assert_eq!(cache.get(&2), Some(&20));
        assert_eq!(cache.get(&4), Some(&40));
    }

    #[test]
    fn test_reads_do_not_refresh_age() {
        let mut cache = BoundedCache::new(2);
        cache.insert("old", 1);
        cache.insert("new", 2);
        assert_eq!(cache.get(&"old"), Some(&1));
        cache.insert("newest", 3);
        assert!(!cache.contains_key(&"old"));
        assert!(cache.contains_key(&"new"));
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(&3));
        cache.insert("c", 4);
        assert!(!cache.contains_key(&"a"));
    }

    #[test]
    fn test_size_never_exceeds_capacity_after_insert() {
        let mut cache = BoundedCache::new(7);
        for i in 0..100 {
            cache.insert(i, ());
            assert!(cache.len() <= cache.capacity());
        }
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_of_one() {
        let mut cache = BoundedCache::new(1);
        cache.insert(1, 'a');
        cache.insert(2, 'b');
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&2), Some(&'b'));
    }
}
