//! Allocator plumbing used by `ByteArr` and `DynArr`. The most important piece
//! is the `AltAllocator` trait, which is how the arrays allocate, reallocate
//! and free their blocks, and the `AllocError` type it reports failures with.
//!
//! If built with the `std_alloc` feature, a wrapper called `Global` over the
//! standard allocator is also provided.
//!
//! If built with the `alloc_api2` feature, `AltAllocator` is implemented for
//! every `allocator_api2` allocator.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
#[cfg(any(feature = "std_alloc", test))]
mod std_alloc;

pub use alt_alloc::AltAllocator;
#[cfg(any(feature = "std_alloc", test))]
pub use std_alloc::Global;
use thiserror::Error;

/// This indicates some sort of memory allocation error for the alt allocator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("A memory allocation error occurred.")]
pub struct AllocError;
