pub mod hash;
pub mod table;

pub use hash::{BuildHasher, Hasher};
pub use table::{ChainedHashTable, Iter, DEFAULT_CAPACITY, LOAD_FACTOR};
