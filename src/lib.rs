//! # Dynamic Array
//!
//! The `dyn_array` crate provides a `#[no_std]` growable array that keeps its
//! bookkeeping in a header stored in the same allocation, right before the
//! first element. One allocation per array, and the header is always one
//! fixed offset away from the elements.
//!
//! [`ByteArr`] is the engine. It stores opaque elements of a size picked at
//! runtime and copies them in and out byte for byte. [`DynArr`] puts a typed
//! face on it for `Copy` element types.
//!
//! Every allocation is fallible: instead of panicking, operations return a
//! [`types::DynArrErr`] and leave the array untouched. Capacity grows
//! geometrically, as configured by a [`types::GrowthPolicy`], so appends are
//! amortized O(1).
//!
//! Memory comes from an [`alloc::AltAllocator`], which can wrap any custom
//! allocator in a `no_std` environment.
//!
//! ```
//! # #[cfg(feature = "std_alloc")]
//! # {
//! use dyn_array::DynArr;
//! use dyn_array::alloc::Global;
//!
//! let mut items = DynArr::<i32, Global>::new().unwrap();
//! for i in 0..100 {
//!     items.push(i * 2).unwrap();
//! }
//! assert_eq!(items.len(), 100);
//! assert_eq!(items[99], 198);
//!
//! items.destroy().unwrap();
//! assert!(items.is_null());
//! assert!(items.push(1).is_err());
//! # }
//! ```
//!
//! Arrays hold raw pointers, so they are neither `Send` nor `Sync`.
//!
//! # Feature Flags
//! * `std_alloc` - This feature enables a wrapper called `Global` that implements
//!   `AltAllocator` using the standard allocator APIs.
//!
//! * `alloc_api2` - Implements `AltAllocator` for every allocator of the
//!   `allocator-api2` crate.
//!
//! * `integrity_guard` - Adds a tag to every header. It is checked before each
//!   operation, and an array whose tag was overwritten is refused instead of
//!   trusted.

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

pub mod alloc;
mod dyn_array;
pub mod types;

#[cfg(feature = "integrity_guard")]
pub use dyn_array::INTEGRITY_TAG;
pub use dyn_array::ByteArr;
pub use dyn_array::DynArr;
pub use dyn_array::Header;
