//! Chain nodes. Each entry owns its successor, so a chain is a plain
//! `Option<Box<Entry>>` and ownership stays tree shaped.

use std::iter;

/// Link from a bucket head or an entry to the next entry in the chain.
pub(crate) type Link = Option<Box<Entry>>;

#[derive(Debug)]
pub struct Entry {
    key: String,
    pub(crate) value: i64,
    pub(crate) next: Link,
}

impl Entry {
    pub(crate) fn new(key: String, value: i64, next: Link) -> Self {
        Self { key, value, next }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Walks a chain from `head` in link order.
pub(crate) fn walk(head: &Link) -> impl Iterator<Item = &Entry> {
    iter::successors(head.as_deref(), |entry| entry.next.as_deref())
}
