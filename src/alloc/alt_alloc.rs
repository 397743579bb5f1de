use core::alloc::Layout;
use core::cmp::Ordering;
use core::ptr::NonNull;

use super::AllocError;

/// The source of memory for an array block.
///
/// An array needs three things from its environment: allocate a block,
/// reallocate it to a new size, and free it. `grow` and `shrink` are the two
/// halves of reallocation; both have provided versions built on `allocate`
/// so a minimal allocator only implements `allocate` and `deallocate`.
///
/// # Safety
/// Implementors must return blocks that are valid for the requested layout
/// and must leave the old block untouched whenever a reallocation fails.
pub unsafe trait AltAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// If the allocation fails it returns an `AllocError`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// The memory must have been allocated by this allocator with `layout`.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves the chunk at `old_ptr` into a larger one described by `new_layout`.
    ///
    /// The first `old_layout.size()` bytes are preserved. If this fails the
    /// old ptr is still valid. If it succeeds the old ptr must no longer be
    /// used.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }

    /// Moves the chunk at `old_ptr` into a smaller one described by `new_layout`.
    ///
    /// The first `new_layout.size()` bytes are preserved. Failure and success
    /// behave like `grow`.
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, new_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }

    /// Picks `grow` or `shrink` depending on the new size.
    ///
    /// Equal sizes hand the old chunk back without calling the allocator.
    /// Both layouts must share the same alignment.
    unsafe fn reallocate(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return match new_layout.size().cmp(&old_layout.size()) {
            Ordering::Greater => unsafe { self.grow(old_ptr, old_layout, new_layout) },
            Ordering::Less => unsafe { self.shrink(old_ptr, old_layout, new_layout) },
            Ordering::Equal => Ok(NonNull::slice_from_raw_parts(old_ptr, old_layout.size())),
        };
    }
}

// allocator_api2 already implements its trait for references, which the
// blanket impl in `alloc_api2` turns into an `AltAllocator`.
#[cfg(not(feature = "alloc_api2"))]
unsafe impl<A> AltAllocator for &A
where
    A: AltAllocator,
{
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return (**self).allocate(layout);
    }
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) };
    }
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { (**self).grow(old_ptr, old_layout, new_layout) };
    }
    unsafe fn shrink(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { (**self).shrink(old_ptr, old_layout, new_layout) };
    }
}
