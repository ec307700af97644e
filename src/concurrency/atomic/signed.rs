use core::{
    marker::PhantomData,
    sync::atomic::{AtomicI32, AtomicI64, Ordering},
};

/// A branded `AtomicI32`.
///
/// Provides fetch-and-add and compare-and-swap over a signed 32-bit word, sequentially
/// consistent by default. A signed counter is required wherever a shared tally can be
/// driven below zero transiently (e.g. a work-stealing pool's outstanding-work counter
/// observed mid-steal), which `GhostAtomicUsize` cannot represent.
#[repr(transparent)]
pub struct GhostAtomicI32<'brand> {
    inner: AtomicI32,
    _brand: PhantomData<&'brand mut ()>,
}

impl<'brand> GhostAtomicI32<'brand> {
    /// Creates a new branded atomic i32.
    #[inline(always)]
    pub const fn new(value: i32) -> Self {
        Self {
            inner: AtomicI32::new(value),
            _brand: PhantomData,
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load(&self, order: Ordering) -> i32 {
        self.inner.load(order)
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: i32, order: Ordering) {
        self.inner.store(value, order);
    }

    /// Adds to the current value, returning the previous value.
    ///
    /// Sequentially consistent: the contract for the pool's leftover counter needs every
    /// worker to observe the same total order of increments and decrements.
    #[inline(always)]
    pub fn fetch_add(&self, value: i32, order: Ordering) -> i32 {
        self.inner.fetch_add(value, order)
    }

    /// Subtracts from the current value, returning the previous value.
    #[inline(always)]
    pub fn fetch_sub(&self, value: i32, order: Ordering) -> i32 {
        self.inner.fetch_sub(value, order)
    }

    /// Stores `new` if the current value equals `current`; returns success as a boolean
    /// via `Ok`/`Err` matching the stored current value, mirroring the CAS contract used
    /// throughout the crate.
    #[inline(always)]
    pub fn compare_exchange(
        &self,
        current: i32,
        new: i32,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i32, i32> {
        self.inner.compare_exchange(current, new, success, failure)
    }

    /// Performs a compare-exchange with `SeqCst` on both branches.
    #[inline(always)]
    pub fn compare_exchange_cas(&self, current: i32, new: i32) -> bool {
        self.compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

unsafe impl<'brand> Send for GhostAtomicI32<'brand> {}
unsafe impl<'brand> Sync for GhostAtomicI32<'brand> {}

/// A branded `AtomicI64`.
///
/// Same contract as [`GhostAtomicI32`] over a 64-bit word.
#[repr(transparent)]
pub struct GhostAtomicI64<'brand> {
    inner: AtomicI64,
    _brand: PhantomData<&'brand mut ()>,
}

impl<'brand> GhostAtomicI64<'brand> {
    /// Creates a new branded atomic i64.
    #[inline(always)]
    pub const fn new(value: i64) -> Self {
        Self {
            inner: AtomicI64::new(value),
            _brand: PhantomData,
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load(&self, order: Ordering) -> i64 {
        self.inner.load(order)
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: i64, order: Ordering) {
        self.inner.store(value, order);
    }

    /// Adds to the current value, returning the previous value.
    #[inline(always)]
    pub fn fetch_add(&self, value: i64, order: Ordering) -> i64 {
        self.inner.fetch_add(value, order)
    }

    /// Subtracts from the current value, returning the previous value.
    #[inline(always)]
    pub fn fetch_sub(&self, value: i64, order: Ordering) -> i64 {
        self.inner.fetch_sub(value, order)
    }

    /// Stores `new` if the current value equals `current`.
    #[inline(always)]
    pub fn compare_exchange(
        &self,
        current: i64,
        new: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        self.inner.compare_exchange(current, new, success, failure)
    }
}

unsafe impl<'brand> Send for GhostAtomicI64<'brand> {}
unsafe impl<'brand> Sync for GhostAtomicI64<'brand> {}
