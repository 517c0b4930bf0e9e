//! This crate implements the TLSF (Two-Level Segregated Fit) dynamic memory
//! allocation algorithm¹ over a single contiguous memory pool.
//!
//!  - **Allocation and deallocation operations are guaranteed to complete
//!    in constant time.** TLSF is suitable for real-time applications.
//!
//!  - **The memory pool is provided by the application.** It can be a
//!    `static` array, a region carved out of another allocator, or anything
//!    a [`PoolSource`] implementation procures. The allocator itself never
//!    talks to the operating system.
//!
//!  - **Used-size accounting.** The arena keeps a running total of the
//!    bytes held by live allocations, headers included, available through
//!    `used_size` at no extra cost.
//!
//!  - **This crate supports `#![no_std]`.** It can be used in bare-metal
//!    and RTOS-based applications.
//!
//! <sub>¹ M. Masmano, I. Ripoll, A. Crespo and J. Real, "TLSF: a new
//! dynamic memory allocator for real-time systems," *Proceedings. 16th
//! Euromicro Conference on Real-Time Systems*, 2004. ECRTS 2004., Catania,
//! Italy, 2004, pp. 79-88, doi: 10.1109/EMRTS.2004.1311009.</sub>
//!
//! # Examples
//!
//! ## `Tlsf`: Core API
//!
//! ```rust
//! use tlsf_arena::Tlsf;
//! use std::mem::MaybeUninit;
//!
//! let mut pool = [MaybeUninit::uninit(); 65536];
//!
//! // `'pool` (elided here) ties the allocator to the pool's lifetime.
//! let mut tlsf = Tlsf::new(&mut pool);
//!
//! unsafe {
//!     let mut ptr1 = tlsf.allocate(8).unwrap().cast::<u64>();
//!     let mut ptr2 = tlsf.allocate(8).unwrap().cast::<u64>();
//!     *ptr1.as_mut() = 42;
//!     *ptr2.as_mut() = 56;
//!     assert_eq!(*ptr1.as_ref(), 42);
//!     assert_eq!(*ptr2.as_ref(), 56);
//!     tlsf.deallocate(ptr1.cast());
//!     tlsf.deallocate(ptr2.cast());
//! }
//! ```
//!
//! ## `TlsfArena`: Owning the Pool
//!
//! ```rust
//! use tlsf_arena::{GlobalAllocAsPoolSource, TlsfArena};
//!
//! let source = GlobalAllocAsPoolSource(std::alloc::System);
//! let mut arena = TlsfArena::with_source(source, 32 * 1024).unwrap();
//!
//! let ptr = arena.allocate(460).unwrap();
//! assert_eq!(arena.used_size(), 512);
//! unsafe { arena.deallocate(ptr) };
//! ```
//!
//! # Details
//!
//! ## Changes from the Original Algorithm
//!
//!  - The end of the memory pool is capped by a sentinel block (a
//!    permanently occupied zero-size block) instead of a normal block with
//!    a last-block-in-pool flag. This simplifies the code a bit and
//!    improves its worst-case performance and code size.
//!
//! ## Drawbacks
//!
//!  - **Good-fit strategy.** To achieve the constant execution time, only
//!    the first member of each free list is examined. A request close to a
//!    class boundary is rounded up to the next class, so it can fail even
//!    while a large-enough (but not large enough after rounding) free
//!    block exists.
#![no_std]

mod arena;
mod error;
mod init;
mod tlsf;
mod utils;

pub use self::{
    arena::{GlobalAllocAsPoolSource, PoolSource, TlsfArena},
    error::AllocError,
    init::Init,
    tlsf::{Tlsf, GRANULARITY, MAX_BLOCK_SIZE},
};

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(any(test, feature = "std"))]
pub use self::arena::SysTlsfArena;
