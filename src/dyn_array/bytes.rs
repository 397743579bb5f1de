use core::fmt;
use core::marker::PhantomData;
use core::ptr;
use core::slice;

use log::warn;

use super::header::Header;
use super::inner::Inner;
use crate::alloc::AltAllocator;
#[cfg(any(feature = "std_alloc", test))]
use crate::alloc::Global;
use crate::types::DefaultGrowth;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorReason;
use crate::types::GrowthPolicy;

/// A growable array of fixed-size, opaque byte elements.
///
/// The element size is chosen at runtime and never changes. Elements are
/// copied in and out verbatim; nothing is ever constructed or dropped.
///
/// A `ByteArr` is either live, owning one allocation that holds a [`Header`]
/// followed by the payload, or null. Destroying an array makes it null, and
/// every operation on a null array fails with `InvalidHandle` except the
/// queries, which report an empty array. With the `integrity_guard` feature
/// a live array whose header tag was overwritten behaves the same way, but
/// reports `CorruptedHandle`.
pub struct ByteArr<A: AltAllocator, G: GrowthPolicy = DefaultGrowth> {
    inner: Inner<A>,
    _ph:   PhantomData<G>,
}

impl<A: AltAllocator, G: GrowthPolicy> ByteArr<A, G> {
    /// A null array. Nothing is allocated.
    pub const fn null_in(alloc: A) -> Self {
        return Self {
            inner: Inner::null(alloc),
            _ph:   PhantomData,
        };
    }

    /// Allocates an empty array with `G::INITIAL_CAPACITY` bytes reserved.
    ///
    /// Fails with `InvalidArgument` if `element_size` is zero.
    pub fn new_in(alloc: A, element_size: usize) -> DynArrResult<Self> {
        return Self::with_align_in(alloc, element_size, 1);
    }

    /// Like `new_in`, but the payload starts on an `align` boundary.
    ///
    /// Alignments below the header's own are raised to it.
    pub fn with_align_in(alloc: A, element_size: usize, align: usize) -> DynArrResult<Self> {
        if element_size == 0 {
            return Err(DynArrErr::new(ErrorReason::InvalidArgument));
        }
        let header = Header::new(element_size, G::INITIAL_CAPACITY);
        return Ok(Self {
            inner: Inner::allocate(alloc, align, header)?,
            _ph:   PhantomData,
        });
    }

    /// Frees the allocation and makes this array null.
    ///
    /// Destroying a null array fails, so a double destroy is reported
    /// instead of freeing twice.
    pub fn destroy(&mut self) -> DynArrResult<()> {
        self.checked_header()?;
        return self.inner.release();
    }

    fn checked_header(&self) -> DynArrResult<&Header> {
        let Some(header) = self.inner.header() else {
            return Err(DynArrErr::new(ErrorReason::InvalidHandle));
        };
        if !header.is_intact() {
            warn!("refusing to use an array whose header failed its integrity check");
            return Err(DynArrErr::new(ErrorReason::CorruptedHandle));
        }
        return Ok(header);
    }

    fn checked_header_mut(&mut self) -> DynArrResult<&mut Header> {
        self.checked_header()?;
        let Some(header) = self.inner.header_mut() else {
            return Err(DynArrErr::new(ErrorReason::InvalidHandle));
        };
        return Ok(header);
    }

    /// The metadata of a live array.
    ///
    /// Returns `None` for a null array or one whose tag does not match.
    ///
    /// Queries go through here and stay quiet about a damaged tag; only
    /// operations that would act on the block log it.
    #[inline]
    pub fn header(&self) -> Option<&Header> {
        let header = self.inner.header()?;
        return header.is_intact().then_some(header);
    }

    #[cfg(all(test, feature = "integrity_guard"))]
    pub(crate) fn raw_header_mut(&mut self) -> Option<&mut Header> {
        return self.inner.header_mut();
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        return self.inner.is_null();
    }

    /// Number of elements. Zero for a null or damaged array.
    #[inline]
    pub fn len(&self) -> usize {
        return self.header().map_or(0, Header::count);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        return self.header().map_or(0, Header::element_size);
    }

    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        return self.header().map_or(0, Header::capacity_bytes);
    }

    /// Makes room for `additional` more elements.
    ///
    /// If they do not fit, the byte capacity is stepped through
    /// `G::scale` until they do and the block is reallocated once.
    /// On failure nothing changes.
    pub fn reserve(&mut self, additional: usize) -> DynArrResult<()> {
        let header = self.checked_header()?;
        let capacity = header.capacity_bytes();

        let Some(extra) = header.element_size().checked_mul(additional) else {
            return Err(DynArrErr::new(ErrorReason::UsizeOverflow));
        };
        let Some(required) = header.length_bytes().checked_add(extra) else {
            return Err(DynArrErr::new(ErrorReason::UsizeOverflow));
        };
        if required <= capacity {
            return Ok(());
        }

        let Some(grown) = G::grown_capacity(capacity, required) else {
            return Err(DynArrErr::new(ErrorReason::CapacityOverflow));
        };
        return self.inner.resize(grown);
    }

    /// Appends one element. `element` must be exactly `element_size` bytes.
    pub fn push(&mut self, element: &[u8]) -> DynArrResult<()> {
        let element_size = self.checked_header()?.element_size();
        if element.len() != element_size {
            return Err(DynArrErr::new(ErrorReason::InvalidArgument));
        }
        return unsafe { self.push_many_from_ptr(element.as_ptr(), 1) };
    }

    /// Appends every element packed in `elements`.
    ///
    /// `elements` must be non-empty and a whole number of elements long.
    /// There is at most one reallocation and one copy.
    pub fn push_many(&mut self, elements: &[u8]) -> DynArrResult<()> {
        let element_size = self.checked_header()?.element_size();
        if elements.len() % element_size != 0 {
            return Err(DynArrErr::new(ErrorReason::InvalidArgument));
        }
        let count = elements.len() / element_size;
        return unsafe { self.push_many_from_ptr(elements.as_ptr(), count) };
    }

    /// Appends one element copied from `src`.
    ///
    /// # Safety
    /// Same as `push_many_from_ptr` with a count of one.
    #[inline]
    pub unsafe fn push_from_ptr(&mut self, src: *const u8) -> DynArrResult<()> {
        return unsafe { self.push_many_from_ptr(src, 1) };
    }

    /// Appends `count` elements copied from `src`.
    ///
    /// Fails with `InvalidArgument` if `count` is zero.
    ///
    /// # Safety
    /// `src` must be valid for reads of `count * element_size` bytes and must
    /// not point into this array. Those bytes must be initialized, since the
    /// safe `as_bytes` views hand them out as `u8`.
    pub unsafe fn push_many_from_ptr(&mut self, src: *const u8, count: usize) -> DynArrResult<()> {
        self.checked_header()?;
        if count == 0 {
            return Err(DynArrErr::new(ErrorReason::InvalidArgument));
        }
        self.reserve(count)?;

        let Some(payload) = self.inner.payload() else {
            return Err(DynArrErr::new(ErrorReason::InvalidHandle));
        };
        let header = self.checked_header_mut()?;
        let length = header.length_bytes();
        // Cannot overflow, `reserve` already checked it.
        let bytes = header.element_size() * count;

        unsafe { ptr::copy_nonoverlapping(src, payload.add(length).as_ptr(), bytes) };
        header.set_length_bytes(length + bytes);
        return Ok(());
    }

    /// Drops the last element from the logical length.
    ///
    /// Its bytes stay in the buffer until overwritten.
    pub fn pop(&mut self) -> DynArrResult<()> {
        let header = self.checked_header_mut()?;
        let length = header.length_bytes();
        let element_size = header.element_size();
        if length < element_size {
            return Err(DynArrErr::new(ErrorReason::EmptyContainer));
        }
        header.set_length_bytes(length - element_size);
        return Ok(());
    }

    /// Sets the length to zero. Capacity and payload bytes are untouched.
    pub fn clear(&mut self) -> DynArrResult<()> {
        self.checked_header_mut()?.set_length_bytes(0);
        return Ok(());
    }

    /// Reallocates so the capacity equals the current length.
    ///
    /// Calling it again without mutating in between does nothing.
    pub fn shrink_to_fit(&mut self) -> DynArrResult<()> {
        let length = self.checked_header()?.length_bytes();
        return self.inner.resize(length);
    }

    /// The last element's bytes, if any.
    pub fn last(&self) -> Option<&[u8]> {
        let element_size = self.header()?.element_size();
        let bytes = self.as_bytes();
        let start = bytes.len().checked_sub(element_size)?;
        return Some(&bytes[start..]);
    }

    /// Every stored element, packed back to back.
    pub fn as_bytes(&self) -> &[u8] {
        let (Some(header), Some(payload)) = (self.header(), self.inner.payload()) else {
            return &[];
        };
        return unsafe { slice::from_raw_parts(payload.as_ptr(), header.length_bytes()) };
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let length = self.header().map_or(0, Header::length_bytes);
        let Some(payload) = self.inner.payload() else {
            return &mut [];
        };
        return unsafe { slice::from_raw_parts_mut(payload.as_ptr(), length) };
    }

    /// Address of the first element, or null.
    ///
    /// Any operation that can reallocate invalidates it.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        return match self.inner.payload() {
            Some(payload) => payload.as_ptr(),
            None => ptr::null(),
        };
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut u8 {
        return match self.inner.payload() {
            Some(payload) => payload.as_ptr(),
            None => ptr::null_mut(),
        };
    }
}

#[cfg(any(feature = "std_alloc", test))]
impl<G: GrowthPolicy> ByteArr<Global, G> {
    pub const fn null() -> Self {
        return Self::null_in(Global);
    }

    pub fn new(element_size: usize) -> DynArrResult<Self> {
        return Self::new_in(Global, element_size);
    }
}

impl<A: AltAllocator, G: GrowthPolicy> fmt::Debug for ByteArr<A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("ByteArr").field("header", &self.header()).finish();
    }
}
