use core::fmt;
use core::marker::PhantomData;
use core::ops;
use core::slice;

use super::bytes::ByteArr;
use super::header::Header;
use crate::alloc::AltAllocator;
#[cfg(any(feature = "std_alloc", test))]
use crate::alloc::Global;
use crate::types::DefaultGrowth;
use crate::types::DynArrResult;
use crate::types::GrowthPolicy;

/// A typed view over [`ByteArr`] for plain `Copy` elements.
///
/// The element size is `size_of::<T>()` and the payload is aligned for `T`.
/// Zero-sized types are rejected when the array is created. Elements are
/// only ever handed out as `T`, so types with padding bytes are fine. There
/// is no public way to reach the untyped array underneath, since its byte
/// views would read that padding as `u8`:
///
/// ```compile_fail
/// use dyn_array::DynArr;
/// use dyn_array::alloc::AltAllocator;
///
/// fn bytes_of<T: Copy, A: AltAllocator>(arr: &DynArr<T, A>) -> usize {
///     return arr.as_byte_arr().as_bytes().len();
/// }
/// ```
pub struct DynArr<T: Copy, A: AltAllocator, G: GrowthPolicy = DefaultGrowth> {
    bytes: ByteArr<A, G>,
    _ph:   PhantomData<T>,
}

impl<T: Copy, A: AltAllocator, G: GrowthPolicy> DynArr<T, A, G> {
    const SIZE: usize = size_of::<T>();

    pub const fn null_in(alloc: A) -> Self {
        return Self {
            bytes: ByteArr::null_in(alloc),
            _ph:   PhantomData,
        };
    }

    pub fn new_in(alloc: A) -> DynArrResult<Self> {
        return Ok(Self {
            bytes: ByteArr::with_align_in(alloc, Self::SIZE, align_of::<T>())?,
            _ph:   PhantomData,
        });
    }

    #[inline]
    pub fn destroy(&mut self) -> DynArrResult<()> {
        return self.bytes.destroy();
    }

    /// Reserves room for `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) -> DynArrResult<()> {
        return self.bytes.reserve(additional);
    }

    pub fn push(&mut self, item: T) -> DynArrResult<()> {
        // Padding in `T` may be copied uninitialized. The bytes of a `DynArr`
        // are never handed out as `u8`.
        let src = (&raw const item).cast::<u8>();
        return unsafe { self.bytes.push_from_ptr(src) };
    }

    /// Copies all of `items` onto the end. An empty slice is an error.
    pub fn extend_from_slice(&mut self, items: &[T]) -> DynArrResult<()> {
        let src = items.as_ptr().cast::<u8>();
        return unsafe { self.bytes.push_many_from_ptr(src, items.len()) };
    }

    /// Removes the last element and returns a copy of it.
    pub fn pop(&mut self) -> DynArrResult<T> {
        self.bytes.pop()?;
        // The popped bytes are still in the buffer right past the new end.
        let item = unsafe { self.as_ptr().add(self.len()).read() };
        return Ok(item);
    }

    #[inline]
    pub fn clear(&mut self) -> DynArrResult<()> {
        return self.bytes.clear();
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) -> DynArrResult<()> {
        return self.bytes.shrink_to_fit();
    }

    #[inline]
    pub fn header(&self) -> Option<&Header> {
        return self.bytes.header();
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        return self.bytes.is_null();
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.bytes.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.bytes.is_empty();
    }

    /// Whole elements that fit in the reserved bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        return self.bytes.capacity_bytes().checked_div(Self::SIZE).unwrap_or(0);
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        return self.as_slice().last();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.is_null() {
            return &mut [];
        }
        let len = self.len();
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.bytes.as_ptr().cast();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.bytes.as_mut_ptr().cast();
    }

    #[cfg(test)]
    pub(crate) const fn as_byte_arr(&self) -> &ByteArr<A, G> {
        return &self.bytes;
    }
}

#[cfg(any(feature = "std_alloc", test))]
impl<T: Copy, G: GrowthPolicy> DynArr<T, Global, G> {
    pub const fn null() -> Self {
        return Self::null_in(Global);
    }

    pub fn new() -> DynArrResult<Self> {
        return Self::new_in(Global);
    }
}

impl<T: Copy, A: AltAllocator, G: GrowthPolicy> ops::Index<usize> for DynArr<T, A, G> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T: Copy, A: AltAllocator, G: GrowthPolicy> ops::IndexMut<usize> for DynArr<T, A, G> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T: Copy + fmt::Debug, A: AltAllocator, G: GrowthPolicy> fmt::Debug for DynArr<T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}
