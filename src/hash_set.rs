use core::fmt::Debug;

use crate::handle::Handle;
use crate::hash_map::HandleMap;

/// A set of key handles, implemented as a [`HandleMap`] whose values are
/// never used.
///
/// `HandleSet<K, M>` answers membership questions over opaque handles with
/// the same caller-supplied hashing and match predicate as the underlying
/// map, and inherits its probing, growth, and tombstone-free removal.
///
/// # Examples
///
/// ```rust
/// use core::num::NonZeroU32;
///
/// use probe_hash::HandleSet;
/// use probe_hash::identity_match;
///
/// type Id = Option<NonZeroU32>;
///
/// fn id(n: u32) -> Id {
///     NonZeroU32::new(n)
/// }
///
/// let mut set: HandleSet<Id, _> = HandleSet::with_match(identity_match);
/// assert!(set.insert(id(3), 3));
/// assert!(!set.insert(id(3), 3));
/// assert!(set.contains(id(3), 3));
/// assert!(set.remove(id(3), 3));
/// assert!(set.is_empty());
/// ```
pub struct HandleSet<K, M> {
    map: HandleMap<K, Option<()>, M>,
}

impl<K, M> HandleSet<K, M>
where
    K: Handle,
    M: Fn(K, K) -> bool,
{
    /// Creates a set with the default capacity and the given match
    /// predicate.
    pub fn with_match(matcher: M) -> Self {
        Self {
            map: HandleMap::with_match(matcher),
        }
    }

    /// Creates a set with at least the requested capacity, rounded up to
    /// a power of two.
    pub fn with_capacity_and_match(capacity: usize, matcher: M) -> Self {
        Self {
            map: HandleMap::with_capacity_and_match(capacity, matcher),
        }
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the capacity of the underlying slot array.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Adds a key to the set, returning `true` if it was not already
    /// present.
    pub fn insert(&mut self, key: K, hash: u32) -> bool {
        let before = self.map.len();
        self.map.find_or_insert(key, hash);
        self.map.len() != before
    }

    /// Returns `true` if the key is in the set.
    pub fn contains(&self, key: K, hash: u32) -> bool {
        self.map.find(key, hash).is_some()
    }

    /// Removes a key from the set, returning `true` if it was present.
    pub fn remove(&mut self, key: K, hash: u32) -> bool {
        self.map.remove(key, hash).is_some()
    }

    /// Removes every key, keeping the allocation.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns an iterator over the keys, in slot-array order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

impl<K, M> Debug for HandleSet<K, M>
where
    K: Handle + Debug,
    M: Fn(K, K) -> bool,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, M> Clone for HandleSet<K, M>
where
    K: Handle,
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

/// An iterator over the keys of a [`HandleSet`], in slot-array order.
///
/// Created by [`HandleSet::iter`].
pub struct Iter<'a, K> {
    inner: crate::hash_map::Iter<'a, K, Option<()>>,
}

impl<K: Handle> Iterator for Iter<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|slot| slot.key())
    }
}

impl<'a, K, M> IntoIterator for &'a HandleSet<K, M>
where
    K: Handle,
    M: Fn(K, K) -> bool,
{
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroU32;

    use crate::hash_map::identity_match;

    use super::*;

    type Id = Option<NonZeroU32>;

    fn id(n: u32) -> Id {
        Some(NonZeroU32::new(n).unwrap())
    }

    fn new_set() -> HandleSet<Id, fn(Id, Id) -> bool> {
        HandleSet::with_match(identity_match)
    }

    #[test]
    fn insert_contains_remove() {
        let mut set = new_set();
        assert!(set.insert(id(1), 1));
        assert!(set.insert(id(2), 2));
        assert!(!set.insert(id(1), 1));
        assert_eq!(set.len(), 2);

        assert!(set.contains(id(1), 1));
        assert!(!set.contains(id(3), 3));

        assert!(set.remove(id(1), 1));
        assert!(!set.remove(id(1), 1));
        assert!(!set.contains(id(1), 1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn colliding_keys_are_distinct_members() {
        // One shared hash: membership is decided by the match predicate.
        let mut set = new_set();
        for n in 1..=10u32 {
            assert!(set.insert(id(n), 7));
        }
        assert_eq!(set.len(), 10);
        for n in 1..=10u32 {
            assert!(set.contains(id(n), 7));
        }
        assert!(!set.contains(id(11), 7));
    }

    #[test]
    fn iter_yields_every_member_once() {
        let mut set = new_set();
        for n in 1..=5u32 {
            set.insert(id(n), n);
        }

        let mut members: Vec<u32> = set.iter().map(|k| k.unwrap().get()).collect();
        members.sort_unstable();
        assert_eq!(members, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = new_set();
        for n in 1..=20u32 {
            set.insert(id(n), n);
        }
        let capacity = set.capacity();

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        assert!(!set.contains(id(1), 1));
    }
}
