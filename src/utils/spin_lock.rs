use core::cell::UnsafeCell;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicBool, Ordering};

/// A minimal mutual-exclusion primitive that busy-waits instead of parking threads.
///
/// This is meant for critical sections that last a handful of nanoseconds, like
/// checking and refreshing a cached bounding volume, where the cost of putting a
/// thread to sleep would dwarf the protected computation.
///
/// The lock is acquired with [`SpinLock::lock`], which returns a [`SpinLockGuard`].
/// The lock is released when the guard is dropped, including during unwinding, so
/// every exit path of the guarded section releases it.
///
/// There is no fairness, timeout, or `try_lock`: a waiting thread keeps spinning until
/// the holder drops its guard. A guard that is leaked (e.g. with `core::mem::forget`)
/// deadlocks every later call to `lock`.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use collide3d::utils::SpinLock;
///
/// let lock = SpinLock::new(0u32);
/// {
///     let mut counter = lock.lock();
///     *counter += 1;
/// } // Released here.
///
/// assert_eq!(*lock.lock(), 1);
/// # }
/// ```
pub struct SpinLock<T: ?Sized> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

// SAFETY: access to `data` is serialized by `locked`, so sharing the lock only
// requires the protected value to be sendable between threads.
unsafe impl<T: ?Sized + Send> Sync for SpinLock<T> {}

impl<T> SpinLock<T> {
    /// Creates a new unlocked spin lock protecting `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            data: UnsafeCell::new(value),
        }
    }

    /// Consumes this lock and returns the protected value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<T: ?Sized> SpinLock<T> {
    /// Acquires the lock, spinning until it becomes available.
    #[inline]
    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        // The swap returning `false` means we are the ones who flipped the flag.
        while self.locked.swap(true, Ordering::Acquire) {
            core::hint::spin_loop();
        }

        SpinLockGuard {
            lock: self,
            _marker: PhantomData,
        }
    }

    /// Mutable access to the protected value.
    ///
    /// No locking is needed: the exclusive borrow guarantees no guard is alive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

impl<T: Default> Default for SpinLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// Never locks: formatting from inside a guarded section must not deadlock.
impl<T: ?Sized> fmt::Debug for SpinLock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinLock")
            .field("locked", &self.locked.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Scoped ownership of a [`SpinLock`].
///
/// Dereferences to the protected value and releases the lock when dropped.
///
/// A guard is `Sync` only if `T` is: sharing `&SpinLockGuard` hands out `&T` to
/// several threads at once.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct SpinLockGuard<'a, T: ?Sized> {
    lock: &'a SpinLock<T>,
    // Borrows the protected value exclusively, so auto traits follow `&mut T`.
    _marker: PhantomData<&'a mut T>,
}

impl<T: ?Sized> Deref for SpinLockGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        // SAFETY: the guard exists only while `locked` is held on its behalf.
        unsafe { &*self.lock.data.get() }
    }
}

impl<T: ?Sized> DerefMut for SpinLockGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the guard exists only while `locked` is held on its behalf.
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T: ?Sized> Drop for SpinLockGuard<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}
