//! Fixed-capacity key to integer store. Keys are placed in one of 65536 slots
//! by the leading 16 bits of their SHA-256 digest, and each slot resolves
//! collisions with its own singly linked chain.
//!
//! The table is a plain owned value with no internal locking; wrap it in a
//! lock if several threads need to share it.

pub mod config;
pub mod error;
pub mod index;
pub mod logger;
pub mod script;
pub mod table;

pub use error::TableError;
pub use index::{slot_index, CAPACITY};
pub use table::Hashtable;
