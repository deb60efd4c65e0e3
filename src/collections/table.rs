//! Separate-chaining hash table.
//!
//! Every bucket is a plain vector of entries. Keys collide by being pushed
//! to the back of the same bucket, and once there are more entries than
//! `LOAD_FACTOR * capacity` the whole table is rebuilt with twice as many
//! buckets. The table never shrinks.

use crate::collections::hash::BuildHasher;
use std::{
    borrow::Borrow,
    fmt::{self, Debug, Display},
    hash::{self, Hash},
    iter::{Enumerate, FusedIterator},
    mem, slice,
};

/// Bucket count of a table built with [`ChainedHashTable::new`].
pub const DEFAULT_CAPACITY: usize = 7;

/// Growth is triggered when `len / capacity` goes above this.
pub const LOAD_FACTOR: f64 = 0.75;

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

type Bucket<K, V> = Vec<Entry<K, V>>;

/// A hash table resolving collisions by chaining entries inside buckets.
///
/// ```
/// use penumbra::collections::ChainedHashTable;
///
/// let mut licenses = ChainedHashTable::new();
/// licenses.put("S1".to_string(), "Office suite, 5 seats".to_string());
///
/// assert_eq!(licenses.get("S1").map(String::as_str), Some("Office suite, 5 seats"));
/// assert_eq!(licenses.get("S2"), None);
/// ```
#[derive(Clone)]
pub struct ChainedHashTable<K, V, S = BuildHasher> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
    hasher: S,
}

impl<K, V> ChainedHashTable<K, V> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with `capacity` buckets. A capacity of zero
    /// is bumped to a single bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, BuildHasher)
    }
}

impl<K, V, S> ChainedHashTable<K, V, S> {
    /// Creates an empty table with `capacity` buckets placing keys with
    /// `hasher`. A capacity of zero is bumped to a single bucket.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            buckets: allocate(capacity.max(1)),
            len: 0,
            hasher,
        }
    }

    /// Number of entries stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Current `len / capacity` ratio.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Removes every entry. The bucket count stays as it is.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    /// Walks the buckets in index order and every bucket in storage order,
    /// yielding `(bucket index, key, value)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter().enumerate(),
            current: None,
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(_, key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, _, value)| value)
    }
}

impl<K, V, S> ChainedHashTable<K, V, S>
where
    K: Hash + Eq,
    S: hash::BuildHasher,
{
    /// Bucket the key belongs to under the current capacity.
    #[inline]
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        index_for(&self.hasher, key, self.capacity())
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already stored its value is overwritten in place and
    /// the previous one returned; the table neither grows nor rehashes in
    /// that case.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.len += 1;

        if self.load_factor() > LOAD_FACTOR {
            self.rehash(self.capacity() * 2);
        }

        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);

        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry stored under `key` and hands its value back.
    ///
    /// The remaining entries of the bucket keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        let position = bucket
            .iter()
            .position(|entry| entry.key.borrow() == key)?;

        self.len -= 1;
        Some(bucket.remove(position).value)
    }

    /// Moves every entry into a freshly allocated bucket vector of
    /// `capacity` buckets, which then replaces the current one.
    ///
    /// Entries coming from the same old bucket keep their relative order.
    fn rehash(&mut self, capacity: usize) {
        debug_assert!(capacity > self.capacity());

        let mut buckets = allocate(capacity);
        let old = mem::take(&mut self.buckets);

        for entry in old.into_iter().flatten() {
            let index = index_for(&self.hasher, &entry.key, capacity);
            buckets[index].push(entry);
        }

        self.buckets = buckets;
    }
}

#[inline]
fn index_for<Q, S>(hasher: &S, key: &Q, capacity: usize) -> usize
where
    Q: Hash + ?Sized,
    S: hash::BuildHasher,
{
    (hasher.hash_one(key) % capacity as u64) as usize
}

fn allocate<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);

    buckets
}

impl<K, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashTable<K, V, S>
where
    K: Hash + Eq,
    S: hash::BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(key, value)| {
            self.put(key, value);
        });
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashTable<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);

        table
    }
}

impl<K: Debug, V: Debug, S> Debug for ChainedHashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(_, key, value)| (key, value)))
            .finish()
    }
}

/// Bucket-by-bucket dump of the table.
///
/// ```text
/// === Table ===
/// [0]: (S3 -> Antivirus)
/// [1]:
/// [2]: (S1 -> Office suite) (S5 -> IDE)
/// ```
impl<K: Display, V: Display, S> Display for ChainedHashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Table ===")?;

        for (index, bucket) in self.buckets.iter().enumerate() {
            write!(f, "[{index}]:")?;
            for entry in bucket {
                write!(f, " ({} -> {})", entry.key, entry.value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Iterator returned by [`ChainedHashTable::iter`].
pub struct Iter<'t, K, V> {
    buckets: Enumerate<slice::Iter<'t, Bucket<K, V>>>,
    current: Option<(usize, slice::Iter<'t, Entry<K, V>>)>,
    remaining: usize,
}

impl<'t, K, V> Iterator for Iter<'t, K, V> {
    type Item = (usize, &'t K, &'t V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((index, entries)) = &mut self.current {
                if let Some(entry) = entries.next() {
                    self.remaining -= 1;
                    return Some((*index, &entry.key, &entry.value));
                }
            }

            let (index, bucket) = self.buckets.next()?;
            self.current = Some((index, bucket.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'t, K, V, S> IntoIterator for &'t ChainedHashTable<K, V, S> {
    type Item = (usize, &'t K, &'t V);
    type IntoIter = Iter<'t, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a [`ChainedHashTable`](crate::collections::ChainedHashTable)
/// out of `key => value` pairs.
#[macro_export]
macro_rules! table {
    () => {
        $crate::collections::ChainedHashTable::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::collections::ChainedHashTable::new();
        $(table.put($key, $value);)+
        table
    }};
}
