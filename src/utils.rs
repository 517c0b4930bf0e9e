use core::{mem::MaybeUninit, ptr::NonNull};

use crate::tlsf::GRANULARITY;

/// Get the zero-based index of the most significant set bit of `x`, or `-1`
/// if `x` is zero.
#[inline]
pub(crate) fn msb(x: u32) -> i32 {
    31 - x.leading_zeros() as i32
}

/// Get the zero-based index of the least significant set bit of `x`, or
/// `-1` if `x` is zero.
#[inline]
pub(crate) fn lsb(x: u32) -> i32 {
    if x == 0 {
        -1
    } else {
        x.trailing_zeros() as i32
    }
}

/// Round `size` up to the next multiple of `GRANULARITY`.
///
/// `size` must not exceed `usize::MAX - GRANULARITY + 1`.
#[inline]
pub(crate) fn round_up(size: usize) -> usize {
    (size + (GRANULARITY - 1)) & !(GRANULARITY - 1)
}

/// Round `size` down to a multiple of `GRANULARITY`.
#[inline]
pub(crate) fn round_down(size: usize) -> usize {
    size & !(GRANULARITY - 1)
}

/// Set bit `i` (taken modulo the word width) of `word`.
#[inline]
pub(crate) fn set_bit(i: u32, word: &mut u32) {
    *word |= 1 << (i & 31);
}

/// Clear bit `i` (taken modulo the word width) of `word`.
#[inline]
pub(crate) fn clear_bit(i: u32, word: &mut u32) {
    *word &= !(1 << (i & 31));
}

/// Polyfill for <https://github.com/rust-lang/rust/issues/71941>
#[inline]
pub(crate) fn nonnull_slice_from_raw_parts<T>(ptr: NonNull<T>, len: usize) -> NonNull<[T]> {
    unsafe { NonNull::new_unchecked(core::ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len)) }
}

/// Polyfill for <https://github.com/rust-lang/rust/issues/71146>
///
/// # Safety
///
/// `ptr` must be dereferencable. This is a limitation of the polyfill.
#[inline]
pub(crate) unsafe fn nonnull_slice_len<T>(ptr: NonNull<[T]>) -> usize {
    // Safety: We are just reading the slice length embedded in the fat
    //         pointer and not dereferencing the pointer. We also convert it
    //         to `*const [MaybeUninit<T>]` just in case because the slice
    //         might be uninitialized.
    (&*(ptr.as_ptr() as *const [MaybeUninit<T>])).len()
}

// Polyfill for <https://github.com/rust-lang/rust/issues/74265>
#[inline]
pub(crate) fn nonnull_slice_start<T>(ptr: NonNull<[T]>) -> NonNull<T> {
    unsafe { NonNull::new_unchecked(ptr.as_ptr() as *mut T) }
}
