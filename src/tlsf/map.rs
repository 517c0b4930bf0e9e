//! Free block list mapper: turns a block or request size into the indices
//! of its segregated list.
use super::{
    FLI_OFFSET, GRANULARITY, MAX_BLOCK_SIZE, MAX_LOG2_SLI, MAX_SLI, REAL_FLI, SMALL_BLOCK_SIZE,
};
use crate::utils::msb;

/// Find the free block list to store a free block of the specified size.
///
/// Returns `None` if `size` is beyond the largest class.
#[inline]
pub(super) fn map_floor(size: usize) -> Option<(usize, usize)> {
    debug_assert!(size >= GRANULARITY);

    if size < SMALL_BLOCK_SIZE {
        // The linear regime: equal sub-classes below `SMALL_BLOCK_SIZE`
        return Some((0, size / (SMALL_BLOCK_SIZE / MAX_SLI)));
    }
    if size > MAX_BLOCK_SIZE {
        return None;
    }

    let fl = msb(size as u32) as u32;
    // The most significant bit of `size` lands on `sl`'s bit `MAX_LOG2_SLI`;
    // subtracting `MAX_SLI` leaves the linear sub-class index
    let sl = (size >> (fl - MAX_LOG2_SLI)) - MAX_SLI;
    debug_assert!(sl < MAX_SLI);
    debug_assert!(((fl - FLI_OFFSET) as usize) < REAL_FLI);

    Some(((fl - FLI_OFFSET) as usize, sl))
}

/// Find the first free block list whose every member is at least as large
/// as the specified size, rounding `size` up to that list's lower bound.
///
/// Returns `(fl, sl, rounded_size)`; `None` means the request rounds past
/// the largest class and cannot be satisfied.
///
/// `size` must be a multiple of `GRANULARITY`.
#[inline]
pub(super) fn map_ceil(size: usize) -> Option<(usize, usize, usize)> {
    debug_assert!(size >= GRANULARITY);
    debug_assert!(size % GRANULARITY == 0);

    if size < SMALL_BLOCK_SIZE {
        // Small classes are exact; no rounding is needed
        return Some((0, size / (SMALL_BLOCK_SIZE / MAX_SLI), size));
    }
    if size > MAX_BLOCK_SIZE {
        return None;
    }

    // Round up to the next class boundary (this is specific to `map_ceil`)
    let t = (1usize << (msb(size as u32) as u32 - MAX_LOG2_SLI)) - 1;
    let size = (size + t) & !t;

    let fl = msb(size as u32) as u32;
    let sl = (size >> (fl - MAX_LOG2_SLI)) - MAX_SLI;
    debug_assert!(sl < MAX_SLI);

    if fl - FLI_OFFSET >= REAL_FLI as u32 {
        // The request rounds past the largest class
        return None;
    }

    Some(((fl - FLI_OFFSET) as usize, sl, size))
}
