use thiserror::Error;

/// This enum lets one figure out what kind of error occurred during
/// a `ByteArr` or `DynArr` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorReason {
    /// The array was destroyed or never allocated.
    #[error("The array handle is null.")]
    InvalidHandle = 1,
    /// The header tag did not match, so the block is not trusted.
    #[error("The array header failed its integrity check.")]
    CorruptedHandle,
    #[error("An allocation failure occurred.")]
    AllocFailure,
    #[error("The array is empty.")]
    EmptyContainer,
    #[error("Invalid element size or element count.")]
    InvalidArgument,
    /// The growth policy could not produce a capacity large enough.
    #[error("Capacity overflowed.")]
    CapacityOverflow,
    #[error("usize overflowed.")]
    UsizeOverflow,
    #[error("Failed to create layout.")]
    LayoutFailure,
}

/// A type alias for `Result<T, DynArrErr>`
pub type DynArrResult<T> = Result<T, DynArrErr>;

/// This is used to indicate an error during an array operation.
///
/// Whenever one of these is returned the array was left exactly as it was
/// before the call.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct DynArrErr(ErrorReason);

impl DynArrErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<ErrorReason> for DynArrErr {
    fn from(reason: ErrorReason) -> Self {
        return Self::new(reason);
    }
}
