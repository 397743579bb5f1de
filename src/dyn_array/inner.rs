use core::alloc::Layout;
use core::ptr::NonNull;

use log::debug;
use log::warn;

use super::header::Header;
use super::header::payload_offset;
use crate::alloc::AltAllocator;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorReason;

const fn block_layout(align: usize, capacity_bytes: usize) -> DynArrResult<Layout> {
    let Some(size) = payload_offset(align).checked_add(capacity_bytes) else {
        return Err(DynArrErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(size, align) else {
        return Err(DynArrErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// Owns one header-prefixed block, or nothing at all.
///
/// `ptr` addresses the payload. The header is always found
/// `payload_offset(align)` bytes before it.
pub(crate) struct Inner<A: AltAllocator> {
    ptr:   Option<NonNull<u8>>,
    align: usize,
    alloc: A,
}

impl<A: AltAllocator> Inner<A> {
    pub(crate) const fn null(alloc: A) -> Self {
        return Self {
            ptr:   None,
            align: align_of::<Header>(),
            alloc: alloc,
        };
    }

    /// Allocates a block big enough for `header.capacity_bytes()` and writes
    /// `header` at its start.
    pub(crate) fn allocate(alloc: A, align: usize, header: Header) -> DynArrResult<Self> {
        if !align.is_power_of_two() {
            return Err(DynArrErr::new(ErrorReason::LayoutFailure));
        }
        let align = align.max(align_of::<Header>());
        let layout = block_layout(align, header.capacity_bytes())?;

        let Ok(block) = alloc.allocate(layout) else {
            return Err(DynArrErr::new(ErrorReason::AllocFailure));
        };

        let base = block.cast::<u8>();
        unsafe { base.cast::<Header>().write(header) };
        let payload = unsafe { base.add(payload_offset(align)) };

        return Ok(Self {
            ptr:   Some(payload),
            align: align,
            alloc: alloc,
        });
    }

    #[inline]
    pub(crate) const fn is_null(&self) -> bool {
        return self.ptr.is_none();
    }

    #[inline]
    pub(crate) const fn payload(&self) -> Option<NonNull<u8>> {
        return self.ptr;
    }

    #[inline]
    const fn base(&self, payload: NonNull<u8>) -> NonNull<Header> {
        // Safety: every payload pointer was produced by adding this offset
        // to the start of its block.
        return unsafe { payload.sub(payload_offset(self.align)) }.cast();
    }

    /// The header as stored, without checking its tag.
    #[inline]
    pub(crate) fn header(&self) -> Option<&Header> {
        let payload = self.ptr?;
        return Some(unsafe { self.base(payload).as_ref() });
    }

    /// The header as stored, without checking its tag.
    #[inline]
    pub(crate) fn header_mut(&mut self) -> Option<&mut Header> {
        let payload = self.ptr?;
        return Some(unsafe { self.base(payload).as_mut() });
    }

    /// Reallocates the block so the payload holds exactly `capacity_bytes`.
    ///
    /// On failure the block, the header and the payload pointer are left
    /// exactly as they were.
    pub(crate) fn resize(&mut self, capacity_bytes: usize) -> DynArrResult<()> {
        let Some(payload) = self.ptr else {
            return Err(DynArrErr::new(ErrorReason::InvalidHandle));
        };
        let old_capacity = unsafe { self.base(payload).as_ref() }.capacity_bytes();
        if old_capacity == capacity_bytes {
            return Ok(());
        }

        let old_layout = block_layout(self.align, old_capacity)?;
        let new_layout = block_layout(self.align, capacity_bytes)?;
        let base = self.base(payload).cast::<u8>();

        let Ok(block) = (unsafe { self.alloc.reallocate(base, old_layout, new_layout) }) else {
            return Err(DynArrErr::new(ErrorReason::AllocFailure));
        };
        debug!("array block resized from {old_capacity} to {capacity_bytes} payload bytes");

        let payload = unsafe { block.cast::<u8>().add(payload_offset(self.align)) };
        self.ptr = Some(payload);
        unsafe { self.base(payload).as_mut() }.set_capacity_bytes(capacity_bytes);
        return Ok(());
    }

    /// Frees the block and leaves this `Inner` null.
    pub(crate) fn release(&mut self) -> DynArrResult<()> {
        let Some(payload) = self.ptr else {
            return Err(DynArrErr::new(ErrorReason::InvalidHandle));
        };
        let capacity = unsafe { self.base(payload).as_ref() }.capacity_bytes();
        let layout = block_layout(self.align, capacity)?;

        unsafe { self.alloc.deallocate(self.base(payload).cast(), layout) };
        self.ptr = None;
        return Ok(());
    }
}

impl<A: AltAllocator> Drop for Inner<A> {
    fn drop(&mut self) {
        let Some(header) = self.header() else {
            return;
        };
        // A damaged header means the capacity, and so the layout, is unknown.
        if !header.is_intact() {
            warn!("leaking array block whose header failed its integrity check");
            return;
        }
        let _ = self.release();
    }
}
