/// Value written into every live header when `integrity_guard` is enabled.
#[cfg(feature = "integrity_guard")]
pub const INTEGRITY_TAG: u16 = 0x4144;

/// The bookkeeping block that sits right before the first element.
///
/// ```text
/// +--------+---------+---------+---------+---------+
/// | Header | padding |   [0]   |   [1]   |   ...   |
/// +--------+---------+---------+---------+---------+
///                    ^
///                    payload
/// ```
///
/// All sizes are in bytes. `length_bytes` is always a multiple of
/// `element_size`, and `capacity_bytes` is never smaller than `length_bytes`.
/// The capacity has no relation to element boundaries otherwise.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    #[cfg(feature = "integrity_guard")]
    pub(crate) tag:  u16,
    element_size:    usize,
    length_bytes:    usize,
    capacity_bytes:  usize,
}

impl Header {
    pub(crate) const fn new(element_size: usize, capacity_bytes: usize) -> Self {
        return Self {
            #[cfg(feature = "integrity_guard")]
            tag: INTEGRITY_TAG,
            element_size: element_size,
            length_bytes: 0,
            capacity_bytes: capacity_bytes,
        };
    }

    #[inline]
    pub const fn element_size(&self) -> usize {
        return self.element_size;
    }

    #[inline]
    pub const fn length_bytes(&self) -> usize {
        return self.length_bytes;
    }

    #[inline]
    pub const fn capacity_bytes(&self) -> usize {
        return self.capacity_bytes;
    }

    /// Number of elements currently stored.
    #[inline]
    pub const fn count(&self) -> usize {
        return self.length_bytes / self.element_size;
    }

    #[cfg(feature = "integrity_guard")]
    #[inline]
    pub const fn tag(&self) -> u16 {
        return self.tag;
    }

    /// Whether the rest of the header can be trusted.
    #[cfg(feature = "integrity_guard")]
    #[inline]
    pub(crate) const fn is_intact(&self) -> bool {
        return self.tag == INTEGRITY_TAG;
    }

    #[cfg(not(feature = "integrity_guard"))]
    #[inline]
    pub(crate) const fn is_intact(&self) -> bool {
        return true;
    }

    #[inline]
    pub(crate) const fn set_length_bytes(&mut self, length_bytes: usize) {
        self.length_bytes = length_bytes;
    }

    #[inline]
    pub(crate) const fn set_capacity_bytes(&mut self, capacity_bytes: usize) {
        self.capacity_bytes = capacity_bytes;
    }
}

/// Distance from the start of a block to its payload.
///
/// `align` must be a power of two no smaller than the header's alignment.
#[inline]
pub(crate) const fn payload_offset(align: usize) -> usize {
    let size = size_of::<Header>();
    return (size + align - 1) & !(align - 1);
}
