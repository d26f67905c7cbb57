//! Fixed-capacity key to integer table. Every slot holds a `Bucket` chain and
//! every operation resolves its key to exactly one slot through
//! [`slot_index`], then works only on that chain.
//!
//! Each key is either absent or present with a value. `insert` requires it
//! absent; `update`, `delete` and `get` require it present. A violated
//! precondition is returned as a [`TableError`] and leaves the table as it was.

mod bucket;
mod entry;

use std::fmt;

use log::{debug, trace};

use crate::error::TableError;
use crate::index::{slot_index, CAPACITY};

use self::bucket::Bucket;

pub struct Hashtable {
    buckets: Box<[Bucket]>,
}

impl Hashtable {
    /// Creates a table with all `CAPACITY` slots initialised to empty chains.
    pub fn new() -> Self {
        let buckets: Box<[Bucket]> = (0..CAPACITY).map(|_| Bucket::default()).collect();
        debug!("allocated table with {} slots", buckets.len());
        Self { buckets }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Stores `value` under `key`. Fails with `KeyAlreadyExists` if the key is present.
    pub fn insert(&mut self, key: &str, value: i64) -> Result<(), TableError> {
        let slot = slot_index(key);
        let bucket = &mut self.buckets[slot];
        if bucket.contains(key) {
            debug!("insert rejected, {key:?} already present in slot {slot}");
            return Err(TableError::KeyAlreadyExists(key.to_owned()));
        }
        trace!("insert {key:?} into slot {slot}");
        bucket.push_front(key.to_owned(), value);
        Ok(())
    }

    /// Replaces the value stored under `key`. Fails with `KeyNotFound` if the key is absent.
    pub fn update(&mut self, key: &str, value: i64) -> Result<(), TableError> {
        let slot = slot_index(key);
        if self.buckets[slot].update(key, value) {
            trace!("update {key:?} in slot {slot}");
            Ok(())
        } else {
            debug!("update rejected, {key:?} absent from slot {slot}");
            Err(TableError::KeyNotFound(key.to_owned()))
        }
    }

    /// Removes `key` and releases its entry. Fails with `KeyNotFound` if the key is absent.
    pub fn delete(&mut self, key: &str) -> Result<(), TableError> {
        let slot = slot_index(key);
        match self.buckets[slot].remove(key) {
            Some(_) => {
                trace!("delete {key:?} from slot {slot}");
                Ok(())
            }
            None => {
                debug!("delete rejected, {key:?} absent from slot {slot}");
                Err(TableError::KeyNotFound(key.to_owned()))
            }
        }
    }

    /// Returns the value stored under `key`. Fails with `KeyNotFound` if the key is absent.
    pub fn get(&self, key: &str) -> Result<i64, TableError> {
        let slot = slot_index(key);
        trace!("get {key:?} from slot {slot}");
        self.buckets[slot]
            .get(key)
            .ok_or_else(|| TableError::KeyNotFound(key.to_owned()))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.buckets[slot_index(key)].contains(key)
    }
}

impl Default for Hashtable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hashtable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.buckets.iter().filter(|b| !b.is_empty()).count();
        f.debug_struct("Hashtable")
            .field("capacity", &self.capacity())
            .field("occupied_slots", &occupied)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::Hashtable;
    use crate::error::TableError;
    use crate::index::{slot_index, CAPACITY};

    /// Scans generated keys until two distinct ones land in the same slot.
    fn colliding_pair() -> (String, String) {
        let mut seen: HashMap<usize, String> = HashMap::new();
        for i in 0.. {
            let key = format!("key-{i}");
            let slot = slot_index(&key);
            if let Some(other) = seen.insert(slot, key.clone()) {
                return (other, key);
            }
        }
        unreachable!("pigeonhole guarantees a collision within CAPACITY + 1 keys")
    }

    #[test]
    fn starts_with_every_slot_empty() {
        let table = Hashtable::new();
        assert_eq!(table.capacity(), CAPACITY);
        assert!(table.buckets.iter().all(|b| b.is_empty()));
        assert!(format!("{table:?}").contains("occupied_slots: 0"));
    }

    #[test]
    fn absent_key_is_not_found() {
        let mut table = Hashtable::new();
        assert!(!table.exists("nobody"));
        assert_eq!(
            table.get("nobody"),
            Err(TableError::KeyNotFound("nobody".to_string()))
        );
        assert_eq!(
            table.update("nobody", 1),
            Err(TableError::KeyNotFound("nobody".to_string()))
        );
        assert_eq!(
            table.delete("nobody"),
            Err(TableError::KeyNotFound("nobody".to_string()))
        );
    }

    #[test]
    fn alice_lifecycle() {
        let mut table = Hashtable::new();
        assert_eq!(table.insert("alice", 1), Ok(()));
        assert_eq!(
            table.insert("alice", 2),
            Err(TableError::KeyAlreadyExists("alice".to_string()))
        );
        assert_eq!(table.get("alice"), Ok(1));
        assert_eq!(table.update("alice", 5), Ok(()));
        assert_eq!(table.get("alice"), Ok(5));
        assert_eq!(table.delete("alice"), Ok(()));
        assert_eq!(
            table.get("alice"),
            Err(TableError::KeyNotFound("alice".to_string()))
        );
        assert_eq!(
            table.delete("alice"),
            Err(TableError::KeyNotFound("alice".to_string()))
        );
    }

    #[test]
    fn deleted_key_can_be_reinserted() {
        let mut table = Hashtable::new();
        table.insert("bob", 7).expect("first insert should succeed");
        table.delete("bob").expect("delete should succeed");
        assert!(!table.exists("bob"));
        table.insert("bob", 8).expect("reinsert should succeed");
        assert_eq!(table.get("bob"), Ok(8));
    }

    #[test]
    fn failed_update_leaves_other_keys_alone() {
        let mut table = Hashtable::new();
        table.insert("a", 1).expect("insert a");
        table.insert("b", 2).expect("insert b");
        assert!(table.update("c", 3).is_err());
        assert_eq!(table.get("a"), Ok(1));
        assert_eq!(table.get("b"), Ok(2));
        assert!(!table.exists("c"));
    }

    #[test]
    fn colliding_keys_stay_independent() {
        let (first, second) = colliding_pair();
        assert_ne!(first, second);
        assert_eq!(slot_index(&first), slot_index(&second));

        let mut table = Hashtable::new();
        table.insert(&first, 1).expect("insert first");
        table.insert(&second, 2).expect("insert second");
        assert_eq!(table.buckets[slot_index(&first)].len(), 2);

        table.update(&first, 10).expect("update first");
        assert_eq!(table.get(&first), Ok(10));
        assert_eq!(table.get(&second), Ok(2));

        table.delete(&second).expect("delete second");
        assert!(!table.exists(&second));
        assert_eq!(table.get(&first), Ok(10));

        table.insert(&second, 3).expect("reinsert second");
        table.delete(&first).expect("delete first");
        assert_eq!(table.get(&second), Ok(3));
        assert!(!table.exists(&first));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(String, i64),
        Update(String, i64),
        Delete(String),
        Get(String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let key = "[a-e]{1,2}";
        prop_oneof![
            (key, any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
            (key, any::<i64>()).prop_map(|(k, v)| Op::Update(k, v)),
            key.prop_map(Op::Delete),
            key.prop_map(Op::Get),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn matches_hashmap_model(ops in prop::collection::vec(op_strategy(), 1..64)) {
            let mut table = Hashtable::new();
            let mut model: HashMap<String, i64> = HashMap::new();

            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        let expected = if model.contains_key(&k) {
                            Err(TableError::KeyAlreadyExists(k.clone()))
                        } else {
                            model.insert(k.clone(), v);
                            Ok(())
                        };
                        prop_assert_eq!(table.insert(&k, v), expected);
                    }
                    Op::Update(k, v) => {
                        let expected = match model.get_mut(&k) {
                            Some(slot) => {
                                *slot = v;
                                Ok(())
                            }
                            None => Err(TableError::KeyNotFound(k.clone())),
                        };
                        prop_assert_eq!(table.update(&k, v), expected);
                    }
                    Op::Delete(k) => {
                        let expected = model
                            .remove(&k)
                            .map(|_| ())
                            .ok_or_else(|| TableError::KeyNotFound(k.clone()));
                        prop_assert_eq!(table.delete(&k), expected);
                    }
                    Op::Get(k) => {
                        let expected = model
                            .get(&k)
                            .copied()
                            .ok_or_else(|| TableError::KeyNotFound(k.clone()));
                        prop_assert_eq!(table.get(&k), expected);
                    }
                }
            }

            for key in model.keys() {
                prop_assert!(table.exists(key));
            }
        }

        #[test]
        fn second_insert_always_rejected(key in ".{0,16}", first in any::<i64>(), second in any::<i64>()) {
            let mut table = Hashtable::new();
            prop_assert_eq!(table.insert(&key, first), Ok(()));
            prop_assert!(table.exists(&key));
            prop_assert_eq!(table.get(&key), Ok(first));
            prop_assert_eq!(
                table.insert(&key, second),
                Err(TableError::KeyAlreadyExists(key.clone()))
            );
        }
    }
}
