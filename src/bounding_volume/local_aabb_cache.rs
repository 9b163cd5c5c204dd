use crate::bounding_volume::Aabb;
use crate::utils::SpinLock;

/// A local AABB together with the shape parameter it was computed from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CachedLocalAabb<K> {
    /// The shape parameter that was live when `aabb` was computed.
    pub key: K,
    /// The local AABB computed from `key`.
    pub aabb: Aabb,
}

/// A lazily computed, self-invalidating local AABB.
///
/// The cache remembers the last AABB along with the shape parameter (the *key*) it
/// was computed from. Reading it with a key that compares equal (with `==`, no
/// tolerance) returns the stored AABB; any other key, or an empty cache, triggers a
/// recomputation. Nothing invalidates the cache when the shape parameter changes:
/// staleness is only detected on the next read.
///
/// The `(key, aabb)` pair is guarded by a [`SpinLock`], so a shape holding this cache
/// can be shared between threads and queried through `&self`. The recomputation runs
/// while the lock is held and must be cheap.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use collide3d::bounding_volume::{Aabb, LocalAabbCache};
/// use nalgebra::{Point3, Vector3};
///
/// let cache = LocalAabbCache::new();
/// let half_cube = |h: f32| Aabb::from_half_extents(Point3::origin(), Vector3::repeat(h));
///
/// assert_eq!(cache.cached_key(), None);
/// let aabb = cache.get_or_compute(2.0, half_cube);
/// assert_eq!(aabb.maxs, Point3::new(2.0, 2.0, 2.0));
/// assert_eq!(cache.cached_key(), Some(2.0));
///
/// // Same key: the closure is not called again.
/// let again = cache.get_or_compute(2.0, |_| unreachable!());
/// assert_eq!(aabb, again);
/// # }
/// ```
pub struct LocalAabbCache<K> {
    entry: SpinLock<Option<CachedLocalAabb<K>>>,
}

impl<K> LocalAabbCache<K> {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entry: SpinLock::new(None),
        }
    }

    /// Drops the cached AABB, if any.
    ///
    /// This is never required for correctness since stale entries are detected on read.
    #[inline]
    pub fn clear(&mut self) {
        *self.entry.get_mut() = None;
    }
}

impl<K: Copy + PartialEq> LocalAabbCache<K> {
    /// Returns the AABB cached for `key`, computing it with `compute` if the cache is
    /// empty or was filled for a different key.
    #[inline]
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(K) -> Aabb) -> Aabb {
        let mut entry = self.entry.lock();

        match *entry {
            Some(cached) if cached.key == key => cached.aabb,
            _ => {
                log::trace!("Recomputing a stale or missing cached local AABB.");
                let aabb = compute(key);
                *entry = Some(CachedLocalAabb { key, aabb });
                aabb
            }
        }
    }

    /// A snapshot of the current cache entry.
    #[inline]
    pub fn cached(&self) -> Option<CachedLocalAabb<K>> {
        *self.entry.lock()
    }

    /// The key of the current cache entry.
    #[inline]
    pub fn cached_key(&self) -> Option<K> {
        self.cached().map(|cached| cached.key)
    }
}

impl<K> Default for LocalAabbCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

// A clone starts with the current entry under a fresh, unlocked lock.
impl<K: Copy + PartialEq> Clone for LocalAabbCache<K> {
    fn clone(&self) -> Self {
        Self {
            entry: SpinLock::new(self.cached()),
        }
    }
}

impl<K: Copy + PartialEq + core::fmt::Debug> core::fmt::Debug for LocalAabbCache<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LocalAabbCache")
            .field("entry", &self.cached())
            .finish()
    }
}
