//! Collision chain for a single slot. New entries are linked at the head and
//! no two entries in one chain share a key; `Hashtable` checks membership
//! before calling `push_front`.

use super::entry::{walk, Entry, Link};

#[derive(Debug, Default)]
pub struct Bucket {
    head: Link,
}

impl Bucket {
    pub fn contains(&self, key: &str) -> bool {
        walk(&self.head).any(|entry| entry.key() == key)
    }

    /// Links a new entry at the head of the chain. The key must be absent.
    pub fn push_front(&mut self, key: String, value: i64) {
        debug_assert!(!self.contains(&key), "duplicate key in chain: {key}");
        let next = self.head.take();
        self.head = Some(Box::new(Entry::new(key, value, next)));
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        walk(&self.head)
            .find(|entry| entry.key() == key)
            .map(Entry::value)
    }

    /// Overwrites the value in place. Returns `false` and changes nothing when
    /// the key is not in the chain.
    pub fn update(&mut self, key: &str, value: i64) -> bool {
        match self.find_mut(key) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }

    /// Unlinks the entry for `key` and drops it, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|entry| entry.key() != key) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        Some(removed.value)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        walk(&self.head).count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key() == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }
}

impl Drop for Bucket {
    fn drop(&mut self) {
        // Unlink one node at a time; recursive Box drops can overflow on long chains.
        let mut link = self.head.take();
        while let Some(mut entry) = link {
            link = entry.next.take();
        }
    }
}
