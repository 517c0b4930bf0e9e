//! An arena owning its memory pool, with the pool procured through a
//! pluggable source.
use core::{
    alloc::{GlobalAlloc, Layout},
    fmt,
    ptr::NonNull,
};

use crate::{
    error::AllocError,
    init::Init,
    tlsf::{Tlsf, GRANULARITY},
    utils::{nonnull_slice_from_raw_parts, nonnull_slice_len, nonnull_slice_start},
};


/// A trait for objects that can procure the backing memory pool for a
/// [`TlsfArena`].
///
/// # Safety
///
/// Implementations must return a region that is valid for reads and
/// writes, aligned to at least [`GRANULARITY`] bytes, exclusively owned by
/// the caller, and live until it is passed back to [`Self::dealloc`].
pub unsafe trait PoolSource {
    /// Allocate a contiguous memory region of at least `min_size` bytes.
    ///
    /// Returns `None` if the allocation fails.
    ///
    /// # Safety
    ///
    /// `min_size` must be a non-zero multiple of `GRANULARITY`.
    unsafe fn alloc(&mut self, min_size: usize) -> Option<NonNull<[u8]>>;

    /// Release a region.
    ///
    /// # Safety
    ///
    /// `pool` must be a region previously returned by `self.alloc`, not
    /// released since.
    unsafe fn dealloc(&mut self, pool: NonNull<[u8]>);
}

/// Wraps a [`GlobalAlloc`] to provide a [`PoolSource`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalAllocAsPoolSource<T>(pub T);

impl<T: Init> Init for GlobalAllocAsPoolSource<T> {
    const INIT: Self = Self(T::INIT);
}

unsafe impl<T: GlobalAlloc> PoolSource for GlobalAllocAsPoolSource<T> {
    #[inline]
    unsafe fn alloc(&mut self, min_size: usize) -> Option<NonNull<[u8]>> {
        let layout = Layout::from_size_align(min_size, GRANULARITY).ok()?;
        let ptr = NonNull::new(self.0.alloc(layout))?;
        Some(nonnull_slice_from_raw_parts(ptr, min_size))
    }

    #[inline]
    unsafe fn dealloc(&mut self, pool: NonNull<[u8]>) {
        // Safety: `pool` was allocated with this size and alignment
        let layout = Layout::from_size_align_unchecked(nonnull_slice_len(pool), GRANULARITY);
        self.0.dealloc(nonnull_slice_start(pool).as_ptr(), layout);
    }
}

/// A TLSF allocator that owns its memory pool.
///
/// The pool is procured from a [`PoolSource`] at construction and handed
/// back when the arena is dropped. Dropping the arena invalidates every
/// pointer it ever returned; the caller is responsible for not using them
/// past that point.
///
/// # Examples
///
/// ```
/// use tlsf_arena::{GlobalAllocAsPoolSource, TlsfArena};
///
/// let source = GlobalAllocAsPoolSource(std::alloc::System);
/// let mut arena = TlsfArena::with_source(source, 32 * 1024).unwrap();
///
/// let ptr = arena.allocate(460).unwrap();
/// assert_eq!(arena.used_size(), 512);
/// unsafe { arena.deallocate(ptr) };
///
/// drop(arena); // returns the pool to the system allocator
/// ```
pub struct TlsfArena<S: PoolSource> {
    tlsf: Tlsf<'static>,
    pool: NonNull<[u8]>,
    source: S,
}

// Safety: `pool` is exclusively owned by the arena; see the `Tlsf`
//         rationale for the header graph it points into.
unsafe impl<S: PoolSource + Send> Send for TlsfArena<S> {}
unsafe impl<S: PoolSource + Sync> Sync for TlsfArena<S> {}

impl<S: PoolSource + Init> TlsfArena<S> {
    /// Create an arena backed by a `pool_size`-byte region procured from
    /// the source's default value.
    ///
    /// Returns `None` if the source cannot provide the region or if
    /// `pool_size` cannot hold two headers and one minimum-size payload.
    pub fn new(pool_size: usize) -> Option<Self> {
        Self::with_source(S::INIT, pool_size)
    }
}

impl<S: PoolSource> TlsfArena<S> {
    /// Create an arena backed by a `pool_size`-byte region procured from
    /// `source`.
    ///
    /// Returns `None` if the source cannot provide the region or if
    /// `pool_size` cannot hold two headers and one minimum-size payload.
    pub fn with_source(mut source: S, pool_size: usize) -> Option<Self> {
        if pool_size < GRANULARITY * 3 {
            return None;
        }
        // Safety: the size was just checked to be valid; rounding it keeps
        //         it so
        let pool = unsafe { source.alloc(crate::utils::round_up(pool_size))? };
        // Safety: the source contract gives us exclusive ownership of
        //         `pool`, and `self` keeps it alive until dropped
        let tlsf = unsafe { Tlsf::with_pool_ptr(pool) };
        Some(Self { tlsf, pool, source })
    }

    /// Attempt to allocate `size` bytes. See [`Tlsf::allocate`].
    #[inline]
    pub fn allocate(&mut self, size: usize) -> Result<NonNull<u8>, AllocError> {
        self.tlsf.allocate(size)
    }

    /// Deallocate a previously allocated memory block. See
    /// [`Tlsf::deallocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must denote a memory block previously allocated via `self`
    /// and not deallocated since.
    #[inline]
    pub unsafe fn deallocate(&mut self, ptr: NonNull<u8>) {
        self.tlsf.deallocate(ptr)
    }

    /// Get the total size of the live allocations, counting one header per
    /// allocation plus the pool's own two-header overhead.
    #[inline]
    pub fn used_size(&self) -> usize {
        self.tlsf.used_size()
    }
}

impl<S: PoolSource> Drop for TlsfArena<S> {
    fn drop(&mut self) {
        // Safety: `pool` came from `source.alloc` and is released exactly
        //         once; the pointer-lifetime contract on `deallocate`
        //         guarantees no allocation outlives the arena
        unsafe { self.source.dealloc(self.pool) };
    }
}

impl<S: PoolSource> fmt::Debug for TlsfArena<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsfArena")
            .field("tlsf", &self.tlsf)
            .field("pool", &self.pool)
            .finish()
    }
}

/// [`TlsfArena`] that procures its pool from the system allocator.
#[cfg(any(test, feature = "std"))]
pub type SysTlsfArena = TlsfArena<GlobalAllocAsPoolSource<std::alloc::System>>;
