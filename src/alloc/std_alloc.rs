use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc;

use super::AllocError;
use super::AltAllocator;

/// A thin wrapper around the std global allocator functions.
///
/// Reallocation goes through `std::alloc::realloc`, so growing or shrinking
/// a block can often happen in place.
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

impl Global {
    #[inline]
    fn finish(ptr: *mut u8, size: usize) -> Result<NonNull<[u8]>, AllocError> {
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, size));
    }
}

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // std::alloc::alloc() requires that the layout size be non-zero.
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { alloc::alloc(layout) };
        return Self::finish(ptr, layout.size());
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }

    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if new_layout.size() == 0 {
            return Err(AllocError);
        }
        let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
        return Self::finish(new, new_layout.size());
    }

    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        if new_layout.size() == 0 {
            return Err(AllocError);
        }
        let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
        return Self::finish(new, new_layout.size());
    }
}
